//! Shared traits and calendar helpers for business records.

use chrono::{Datelike, Duration, NaiveDate};
use uuid::Uuid;

/// Exposes a stable identifier for entities stored in the workbook.
pub trait Identifiable {
    fn id(&self) -> Uuid;
}

/// Provides read-only access to an entity's display name.
pub trait NamedEntity {
    fn name(&self) -> &str;
}

/// Converts an entity into a user-facing display label.
pub trait Displayable {
    fn display_label(&self) -> String;
}

/// Display date format used on invoices and orders.
pub const DISPLAY_DATE_FORMAT: &str = "%d/%m/%Y";

/// Parses a display-formatted record date into a calendar date.
///
/// Accepts `DD/MM/YYYY` (the invoice display format) and ISO
/// `YYYY-MM-DD`, with or without a trailing time component. Returns
/// `None` for anything else; callers treat unparseable dates as missing
/// data, never as an error.
pub fn parse_display_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, DISPLAY_DATE_FORMAT) {
        return Some(date);
    }
    let head = trimmed.split(|c| c == 'T' || c == ' ').next()?;
    NaiveDate::parse_from_str(head, "%Y-%m-%d").ok()
}

/// Formats a calendar date in the invoice display format.
pub fn format_display_date(date: NaiveDate) -> String {
    date.format(DISPLAY_DATE_FORMAT).to_string()
}

/// Returns the number of days in the given month.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let next_month = if month == 12 { 1 } else { month + 1 };
    let next_year = if month == 12 { year + 1 } else { year };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .map(|first_next| (first_next - Duration::days(1)).day())
        .unwrap_or(28)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_display_and_iso_dates() {
        let expected = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
        assert_eq!(parse_display_date("07/03/2024"), Some(expected));
        assert_eq!(parse_display_date("2024-03-07"), Some(expected));
        assert_eq!(parse_display_date("2024-03-07T09:30:00Z"), Some(expected));
        assert_eq!(parse_display_date(" 07/03/2024 "), Some(expected));
    }

    #[test]
    fn rejects_unparseable_dates() {
        assert_eq!(parse_display_date(""), None);
        assert_eq!(parse_display_date("tomorrow"), None);
        assert_eq!(parse_display_date("32/01/2024"), None);
    }

    #[test]
    fn month_lengths_account_for_leap_years() {
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2023, 2), 28);
        assert_eq!(days_in_month(2024, 12), 31);
    }
}
