//! Time-bucketed revenue series for dashboard and report charts.

use chrono::{Datelike, Duration, NaiveDate, Timelike};

use washbook_domain::{days_in_month, parse_display_date, ChartPeriod, ChartSeries, Invoice};

use crate::billing::BillingService;

const WEEKDAY_LABELS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];
const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Groups invoices into labeled buckets for a requested period, relative
/// to a reference date.
///
/// Invoices outside the window are excluded entirely, and invoices whose
/// display date does not parse are treated as missing data rather than
/// bucketed to zero. Each bucket carries billed revenue and collected
/// payments as parallel series.
pub struct ChartService;

impl ChartService {
    pub fn revenue_series(
        invoices: &[Invoice],
        period: ChartPeriod,
        reference: NaiveDate,
    ) -> ChartSeries {
        let mut series = ChartSeries::with_labels(period, Self::labels(period, reference));
        for invoice in invoices {
            let Some(date) = parse_display_date(&invoice.invoice_date) else {
                continue;
            };
            let Some(bucket) = Self::bucket_index(period, reference, date, invoice) else {
                continue;
            };
            series.revenue[bucket] += BillingService::invoice_total(&invoice.services);
            series.collected[bucket] += BillingService::total_paid(&invoice.payments);
        }
        series
    }

    fn labels(period: ChartPeriod, reference: NaiveDate) -> Vec<String> {
        match period {
            ChartPeriod::Day => (0..24).map(|hour| format!("{hour:02}:00")).collect(),
            ChartPeriod::Week => WEEKDAY_LABELS.iter().map(|s| s.to_string()).collect(),
            ChartPeriod::Month => (1..=days_in_month(reference.year(), reference.month()))
                .map(|day| day.to_string())
                .collect(),
            ChartPeriod::Year => MONTH_LABELS.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn bucket_index(
        period: ChartPeriod,
        reference: NaiveDate,
        date: NaiveDate,
        invoice: &Invoice,
    ) -> Option<usize> {
        match period {
            ChartPeriod::Day => {
                if date != reference {
                    return None;
                }
                // The display date carries no time, so hour-of-day comes
                // from the record's creation timestamp.
                Some(invoice.created_at.hour() as usize)
            }
            ChartPeriod::Week => {
                let week_start =
                    reference - Duration::days(reference.weekday().num_days_from_monday() as i64);
                let offset = (date - week_start).num_days();
                if (0..7).contains(&offset) {
                    Some(offset as usize)
                } else {
                    None
                }
            }
            ChartPeriod::Month => {
                if date.year() == reference.year() && date.month() == reference.month() {
                    Some(date.day() as usize - 1)
                } else {
                    None
                }
            }
            ChartPeriod::Year => {
                if date.year() == reference.year() {
                    Some(date.month() as usize - 1)
                } else {
                    None
                }
            }
        }
    }
}
