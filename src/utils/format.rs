// Helpers de presentación (moneda y fechas)

use chrono::{DateTime, Utc};

/// Dos decimales; vacío si no hay valor
pub fn format_currency(amount: Option<f64>) -> String {
    match amount {
        Some(value) => format!("{:.2}", value),
        None => String::new(),
    }
}

/// RFC 3339 → "YYYY-MM-DD HH:MM" (UTC). Si no parsea, se muestra tal cual.
pub fn format_date(raw: Option<&str>) -> String {
    match raw {
        Some(text) => match DateTime::parse_from_rfc3339(text) {
            Ok(date) => date.with_timezone(&Utc).format("%Y-%m-%d %H:%M").to_string(),
            Err(_) => text.to_string(),
        },
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency_has_two_decimals() {
        assert_eq!(format_currency(Some(25.0)), "25.00");
        assert_eq!(format_currency(Some(9.999)), "10.00");
        assert_eq!(format_currency(None), "");
    }

    #[test]
    fn dates_are_normalised_to_utc() {
        assert_eq!(format_date(Some("2021-03-04T10:15:00.000Z")), "2021-03-04 10:15");
        assert_eq!(format_date(Some("2021-03-04T10:15:00+08:00")), "2021-03-04 02:15");
        assert_eq!(format_date(Some("yesterday")), "yesterday");
        assert_eq!(format_date(None), "");
    }
}
