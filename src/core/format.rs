//! Currency and date formatting.
//!
//! Amounts follow the es-MX `Intl.NumberFormat` currency layout the figures are
//! shown in: symbol first, comma thousands separator, two decimals, and a
//! leading minus for negatives (`-$1,234.50`). Month names and relative-day
//! labels are localised for Spanish (Mexico) and English (US).

use chrono::{Datelike, NaiveDate};
use serde::Deserialize;

/// Language used for labels and month names.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
pub enum Locale {
    /// Spanish (Mexico)
    #[default]
    #[serde(rename = "es-MX")]
    EsMx,
    /// English (United States)
    #[serde(rename = "en-US")]
    EnUs,
}

/// Currency an amount is expressed in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// Mexican peso
    #[default]
    Mxn,
    /// US dollar
    Usd,
    /// Euro
    Eur,
}

impl Currency {
    /// Symbol printed before the amount.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Mxn | Self::Usd => "$",
            Self::Eur => "€",
        }
    }

    /// ISO 4217 code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Mxn => "MXN",
            Self::Usd => "USD",
            Self::Eur => "EUR",
        }
    }
}

const MONTHS_ES: [&str; 12] = [
    "enero",
    "febrero",
    "marzo",
    "abril",
    "mayo",
    "junio",
    "julio",
    "agosto",
    "septiembre",
    "octubre",
    "noviembre",
    "diciembre",
];

const MONTHS_EN: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Formats `amount` as currency, e.g. `$1,234.56` or `-$200.00`.
///
/// Non-finite values render as zero so display code never shows `NaN`.
#[must_use]
pub fn format_currency(amount: f64, currency: Currency) -> String {
    let (sign, digits) = currency_parts(amount);
    format!("{sign}{}{digits}", currency.symbol())
}

/// Splits a formatted amount into its sign (`""` or `"-"`) and the grouped
/// digits without symbol (`"1,234.56"`), for layouts that style them apart.
#[must_use]
pub fn currency_parts(amount: f64) -> (&'static str, String) {
    let amount = if amount.is_finite() { amount } else { 0.0 };
    let formatted = format!("{:.2}", amount.abs());
    let (whole, cents) = formatted.split_once('.').unwrap_or((&formatted, "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    // -0.004 rounds to "0.00" and must not keep its sign
    let sign = if amount < 0.0 && formatted != "0.00" {
        "-"
    } else {
        ""
    };
    (sign, format!("{grouped}.{cents}"))
}

/// Lowercase month name as used mid-sentence (`"mayo"`, `"May"`).
#[must_use]
pub fn month_name(month: u32, locale: Locale) -> &'static str {
    let index = (month.clamp(1, 12) - 1) as usize;
    match locale {
        Locale::EsMx => MONTHS_ES[index],
        Locale::EnUs => MONTHS_EN[index],
    }
}

/// Uppercases the first character.
#[must_use]
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

/// Capitalised month and year, e.g. `"Mayo 2024"` / `"May 2024"`.
#[must_use]
pub fn month_year_label(year: i32, month: u32, locale: Locale) -> String {
    format!("{} {year}", capitalize(month_name(month, locale)))
}

/// Short date, e.g. `"15 jun 2024"` / `"Jun 15, 2024"`.
#[must_use]
pub fn format_date(date: NaiveDate, locale: Locale) -> String {
    let month = month_name(date.month(), locale);
    let short: String = month.chars().take(3).collect();
    match locale {
        Locale::EsMx => format!("{} {short} {}", date.day(), date.year()),
        Locale::EnUs => format!("{short} {}, {}", date.day(), date.year()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::date;

    #[test]
    fn test_format_currency_groups_thousands() {
        assert_eq!(format_currency(1234.56, Currency::Mxn), "$1,234.56");
        assert_eq!(format_currency(1_000_000.0, Currency::Mxn), "$1,000,000.00");
        assert_eq!(format_currency(999.999, Currency::Usd), "$1,000.00");
        assert_eq!(format_currency(0.5, Currency::Eur), "€0.50");
    }

    #[test]
    fn test_format_currency_negative_and_zero() {
        assert_eq!(format_currency(-200.0, Currency::Mxn), "-$200.00");
        assert_eq!(format_currency(0.0, Currency::Mxn), "$0.00");
        assert_eq!(format_currency(-0.001, Currency::Mxn), "$0.00");
    }

    #[test]
    fn test_format_currency_non_finite_is_zero() {
        assert_eq!(format_currency(f64::NAN, Currency::Mxn), "$0.00");
        assert_eq!(format_currency(f64::INFINITY, Currency::Mxn), "$0.00");
    }

    #[test]
    fn test_currency_parts() {
        assert_eq!(currency_parts(-4321.1), ("-", "4,321.10".to_string()));
        assert_eq!(currency_parts(12.0), ("", "12.00".to_string()));
    }

    #[test]
    fn test_month_year_label() {
        assert_eq!(month_year_label(2024, 5, Locale::EsMx), "Mayo 2024");
        assert_eq!(month_year_label(2024, 5, Locale::EnUs), "May 2024");
        assert_eq!(month_year_label(2023, 9, Locale::EsMx), "Septiembre 2023");
    }

    #[test]
    fn test_format_date() {
        let day = date(2024, 6, 15);
        assert_eq!(format_date(day, Locale::EsMx), "15 jun 2024");
        assert_eq!(format_date(day, Locale::EnUs), "Jun 15, 2024");
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("ñandú"), "Ñandú");
        assert_eq!(capitalize(""), "");
    }
}
