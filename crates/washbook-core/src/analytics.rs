//! Dashboard aggregation over invoice collections.

use std::collections::HashMap;

use washbook_domain::{
    AnalyticsSummary, CustomerType, CustomerTypeRevenue, Invoice, ServiceUsage,
};

use crate::billing::BillingService;

const TOP_SERVICES_LIMIT: usize = 5;

/// Folds a collection of invoices through [`BillingService`] into a
/// dashboard summary. One pass, never fails, never mutates input.
pub struct AnalyticsService;

impl AnalyticsService {
    pub fn summarize(invoices: &[Invoice]) -> AnalyticsSummary {
        let mut summary = AnalyticsSummary::empty();
        summary.total_invoices = invoices.len();

        let mut revenue_by_type: HashMap<CustomerType, f64> = HashMap::new();
        // Service usage keeps first-encountered order so equal
        // quantities rank stably.
        let mut usage_order: Vec<String> = Vec::new();
        let mut usage_index: HashMap<String, usize> = HashMap::new();
        let mut usage_totals: Vec<u32> = Vec::new();

        for invoice in invoices {
            let total = BillingService::invoice_total(&invoice.services);
            summary.total_revenue += total;
            summary.unpaid_balance += BillingService::remaining_balance(invoice).max(0.0);
            summary.total_payments += BillingService::total_paid(&invoice.payments);

            if invoice.customer_type.is_known() {
                *revenue_by_type.entry(invoice.customer_type).or_default() += total;
            }

            for line in &invoice.services {
                let slot = match usage_index.get(&line.name) {
                    Some(&slot) => slot,
                    None => {
                        usage_index.insert(line.name.clone(), usage_order.len());
                        usage_order.push(line.name.clone());
                        usage_totals.push(0);
                        usage_order.len() - 1
                    }
                };
                usage_totals[slot] += line.quantity;
            }
        }

        summary.revenue_by_customer_type = CustomerType::KNOWN
            .iter()
            .filter_map(|&customer_type| {
                revenue_by_type
                    .get(&customer_type)
                    .map(|&revenue| CustomerTypeRevenue {
                        customer_type,
                        revenue,
                    })
            })
            .collect();

        let mut top_services: Vec<ServiceUsage> = usage_order
            .into_iter()
            .zip(usage_totals)
            .map(|(name, quantity)| ServiceUsage { name, quantity })
            .collect();
        // sort_by is stable, so ties keep first-encountered order.
        top_services.sort_by(|a, b| b.quantity.cmp(&a.quantity));
        top_services.truncate(TOP_SERVICES_LIMIT);
        summary.top_services = top_services;

        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use washbook_domain::{Payment, PaymentMethod, ServiceLine};

    fn invoice(
        number: &str,
        customer_type: CustomerType,
        services: Vec<ServiceLine>,
    ) -> Invoice {
        Invoice::new(number, "10/01/2024", "Asha", "9800000001", customer_type)
            .with_services(services)
    }

    #[test]
    fn empty_collection_yields_empty_summary() {
        let summary = AnalyticsService::summarize(&[]);
        assert_eq!(summary, AnalyticsSummary::empty());
    }

    #[test]
    fn totals_separate_billed_collected_and_outstanding() {
        let mut first = invoice(
            "INV-1",
            CustomerType::Customer,
            vec![ServiceLine::new("Wash", 250.0, 2)],
        );
        first.add_payment(Payment::new(200.0, "10/01/2024", PaymentMethod::Cash));
        let second = invoice(
            "INV-2",
            CustomerType::Dealer,
            vec![ServiceLine::new("Polish", 400.0, 1)],
        );

        let summary = AnalyticsService::summarize(&[first, second]);
        assert_eq!(summary.total_invoices, 2);
        assert_eq!(summary.total_revenue, 900.0);
        assert_eq!(summary.total_payments, 200.0);
        assert_eq!(summary.unpaid_balance, 700.0);
    }

    #[test]
    fn overpaid_invoices_never_reduce_unpaid_balance() {
        let mut overpaid = invoice(
            "INV-1",
            CustomerType::Customer,
            vec![ServiceLine::new("Wash", 100.0, 1)],
        );
        overpaid.add_payment(Payment::new(500.0, "10/01/2024", PaymentMethod::Upi));
        let owing = invoice(
            "INV-2",
            CustomerType::Customer,
            vec![ServiceLine::new("Wash", 100.0, 1)],
        );

        let summary = AnalyticsService::summarize(&[overpaid, owing]);
        assert_eq!(summary.unpaid_balance, 100.0);
        assert!(summary.unpaid_balance >= 0.0);
    }

    #[test]
    fn revenue_by_type_drops_unknown_silently() {
        let known = invoice(
            "INV-1",
            CustomerType::GarageServiceStation,
            vec![ServiceLine::new("Wash", 300.0, 1)],
        );
        let unmapped = invoice(
            "INV-2",
            CustomerType::Unknown,
            vec![ServiceLine::new("Wash", 999.0, 1)],
        );

        let summary = AnalyticsService::summarize(&[known, unmapped]);
        assert_eq!(summary.revenue_by_customer_type.len(), 1);
        assert_eq!(
            summary.revenue_by_customer_type[0].customer_type,
            CustomerType::GarageServiceStation
        );
        assert_eq!(summary.revenue_by_customer_type[0].revenue, 300.0);
        // Unknown still counts toward the gross figure.
        assert_eq!(summary.total_revenue, 1299.0);
    }

    #[test]
    fn top_services_rank_by_quantity_across_invoices() {
        let first = invoice(
            "INV-1",
            CustomerType::Customer,
            vec![ServiceLine::new("A", 10.0, 3), ServiceLine::new("B", 10.0, 2)],
        );
        let second = invoice(
            "INV-2",
            CustomerType::Customer,
            vec![ServiceLine::new("B", 10.0, 3)],
        );

        let summary = AnalyticsService::summarize(&[first, second]);
        assert_eq!(summary.top_services[0].name, "B");
        assert_eq!(summary.top_services[0].quantity, 5);
        assert_eq!(summary.top_services[1].name, "A");
        assert_eq!(summary.top_services[1].quantity, 3);
    }

    #[test]
    fn top_services_break_ties_by_first_encountered_and_cap_at_five() {
        let services: Vec<ServiceLine> = ["F", "A", "C", "B", "E", "D"]
            .iter()
            .map(|name| ServiceLine::new(*name, 10.0, 1))
            .collect();
        let summary =
            AnalyticsService::summarize(&[invoice("INV-1", CustomerType::Customer, services)]);

        let names: Vec<&str> = summary
            .top_services
            .iter()
            .map(|usage| usage.name.as_str())
            .collect();
        assert_eq!(names, ["F", "A", "C", "B", "E"]);
    }
}
