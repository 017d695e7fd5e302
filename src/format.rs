//! Display Formatting
//!
//! Helper functions for rendering backend values.

use chrono::NaiveDateTime;

/// Timestamp the backend sends when an order has no date set
pub const NO_DATE_SENTINEL: &str = "0001-01-01T00:00:00";

/// Render an order date cell. The backend's epoch placeholder renders as
/// "N/A"; everything else renders as `YYYY-MM-DD`. Unparseable values pass
/// through untouched.
pub fn format_order_date(raw: &str) -> String {
    if raw == NO_DATE_SENTINEL {
        return "N/A".to_string();
    }
    match NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        Ok(date) => date.format("%Y-%m-%d").to_string(),
        Err(_) => raw.to_string(),
    }
}

/// Render a VND price with thousands separators, e.g. `450,000 VNĐ`
pub fn format_price(amount: f64) -> String {
    let whole = amount.round() as i64;
    format!("{} VNĐ", group_thousands(whole))
}

/// Render a club founding date as its year, falling back to the raw value
pub fn format_established_year(raw: &str) -> String {
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .map(|date| date.format("%Y").to_string())
        .unwrap_or_else(|_| raw.to_string())
}

fn group_thousands(value: i64) -> String {
    let digits = value.abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if value < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epoch_placeholder_renders_na() {
        assert_eq!(format_order_date("0001-01-01T00:00:00"), "N/A");
    }

    #[test]
    fn dates_render_year_month_day() {
        assert_eq!(format_order_date("2024-11-03T09:15:00"), "2024-11-03");
        assert_eq!(format_order_date("2024-11-03T09:15:00.1234567"), "2024-11-03");
    }

    #[test]
    fn garbage_dates_pass_through() {
        assert_eq!(format_order_date("not-a-date"), "not-a-date");
    }

    #[test]
    fn prices_group_thousands() {
        assert_eq!(format_price(450000.0), "450,000 VNĐ");
        assert_eq!(format_price(1234567.0), "1,234,567 VNĐ");
        assert_eq!(format_price(999.0), "999 VNĐ");
        assert_eq!(format_price(0.0), "0 VNĐ");
    }

    #[test]
    fn established_year_extracts_year() {
        assert_eq!(format_established_year("1882-01-01T00:00:00"), "1882");
        assert_eq!(format_established_year("unknown"), "unknown");
    }
}
