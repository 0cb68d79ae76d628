//! End-to-end flow: take an order, promote it, collect payments, report,
//! and persist — the path a presentation layer drives every day.

use tempfile::tempdir;
use washbook::domain::{
    CarriedAmount, ChartPeriod, CustomerType, Customer, InvoiceStatus, Payment, PaymentMethod,
    PendingOrder, ServiceLine, ServiceTemplate, parse_display_date,
};
use washbook::{
    AnalyticsService, BillingService, CatalogService, ChartService, CustomerService,
    InvoiceService, JsonWorkbookStorage, OrderService, WorkbookManager,
};

#[test]
fn order_to_invoice_to_dashboard_flow() {
    let dir = tempdir().expect("tempdir");
    let storage =
        JsonWorkbookStorage::new(dir.path().join("workbooks"), dir.path().join("backups"))
            .expect("create storage");
    let mut manager = WorkbookManager::new(Box::new(storage));
    manager.create("shine").expect("create workbook");

    // Settings screen seeds the price catalog.
    {
        let workbook = manager.workbook_mut().expect("workbook open");
        CatalogService::add_template(
            workbook,
            CustomerType::Customer,
            ServiceTemplate::new("Foam Wash", 250.0),
        )
        .expect("seed catalog");
        CustomerService::upsert(workbook, Customer::new("98001", "Asha", "MG Road"))
            .expect("save customer");
    }

    // Order taking: copy-on-select from the catalog, deposit up front.
    let order_id = {
        let workbook = manager.workbook_mut().expect("workbook open");
        let template = CatalogService::templates(workbook, CustomerType::Customer)[0].clone();
        let order = PendingOrder::new("10/01/2024", "Asha", "98001", CustomerType::Customer)
            .with_services(vec![ServiceLine::new(template.name, template.price, 2)])
            .with_advance(CarriedAmount::new(100.0));
        OrderService::add(workbook, order).expect("add order")
    };

    // Promotion copies everything across and drops the draft.
    let invoice_id = {
        let workbook = manager.workbook_mut().expect("workbook open");
        let id = OrderService::promote(workbook, order_id, "INV-1", "12/01/2024")
            .expect("promote order");
        assert!(workbook.pending_orders.is_empty());
        id
    };

    // Collect the rest over two payments.
    {
        let workbook = manager.workbook_mut().expect("workbook open");
        InvoiceService::record_payment(
            workbook,
            invoice_id,
            Payment::new(150.0, "12/01/2024", PaymentMethod::Cash),
        )
        .expect("first payment");

        let invoice = workbook.invoice(invoice_id).expect("invoice exists");
        assert_eq!(BillingService::status(invoice), InvoiceStatus::PartiallyPaid);
        assert_eq!(BillingService::remaining_balance(invoice), 250.0);

        InvoiceService::record_payment(
            workbook,
            invoice_id,
            Payment::new(250.0, "13/01/2024", PaymentMethod::Upi).with_reference("UPI42"),
        )
        .expect("second payment");

        let invoice = workbook.invoice(invoice_id).expect("invoice exists");
        assert_eq!(BillingService::status(invoice), InvoiceStatus::Paid);
        assert_eq!(BillingService::balance_due(invoice), 0.0);
    }

    // Dashboard figures come straight off the same engine.
    {
        let workbook = manager.workbook().expect("workbook open");
        let summary = AnalyticsService::summarize(&workbook.invoices);
        assert_eq!(summary.total_invoices, 1);
        assert_eq!(summary.total_revenue, 500.0);
        assert_eq!(summary.total_payments, 400.0); // advance excluded
        assert_eq!(summary.unpaid_balance, 0.0);
        assert_eq!(summary.top_services[0].name, "Foam Wash");

        let reference = parse_display_date("12/01/2024").expect("valid date");
        let series =
            ChartService::revenue_series(&workbook.invoices, ChartPeriod::Month, reference);
        assert_eq!(series.revenue[11], 500.0);
        assert_eq!(series.collected[11], 400.0);
    }

    // Survives a save/load cycle byte for byte where it matters.
    manager.save().expect("save workbook");
    manager.close();
    let outcome = manager.load("shine").expect("reload");
    assert!(outcome.warnings.is_empty());
    let workbook = manager.workbook().expect("workbook open");
    let invoice = workbook.invoice(invoice_id).expect("invoice survived");
    assert_eq!(invoice.payments.len(), 2);
    assert_eq!(BillingService::status(invoice), InvoiceStatus::Paid);
}
