//! Locale-aware currency formatting.
//!
//! Covers the handful of locales the assistant is configured for. Amounts are
//! rounded half away from zero to `max_fraction_digits`, and trailing zero
//! fraction digits are dropped down to the currency's customary minimum.

use serde::{Deserialize, Serialize};

/// No-break space.
const NBSP: &str = "\u{a0}";
/// Narrow no-break space (French digit grouping).
const NNBSP: &str = "\u{202f}";

/// Upper bound on fraction digits; beyond this `f64` has no meaningful precision.
const MAX_SUPPORTED_FRACTION_DIGITS: u8 = 10;

/// Currency display options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurrencyFormat {
    /// BCP 47 locale tag, e.g. "en-US" or "de-DE".
    pub locale: String,
    /// ISO 4217 currency code, e.g. "USD".
    pub currency: String,
    /// Maximum digits after the decimal separator.
    pub max_fraction_digits: u8,
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self {
            locale: "en-US".to_string(),
            currency: "USD".to_string(),
            max_fraction_digits: 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct LocaleConventions {
    group: &'static str,
    decimal: &'static str,
    symbol_after: bool,
}

const ENGLISH: LocaleConventions = LocaleConventions {
    group: ",",
    decimal: ".",
    symbol_after: false,
};

impl LocaleConventions {
    fn for_locale(locale: &str) -> Self {
        let language = locale
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        match language.as_str() {
            "de" | "es" | "it" | "nl" | "pt" => LocaleConventions {
                group: ".",
                decimal: ",",
                symbol_after: true,
            },
            "fr" => LocaleConventions {
                group: NNBSP,
                decimal: ",",
                symbol_after: true,
            },
            "sv" | "nb" | "fi" => LocaleConventions {
                group: NBSP,
                decimal: ",",
                symbol_after: true,
            },
            _ => ENGLISH,
        }
    }
}

/// Formats amounts according to a [`CurrencyFormat`].
#[derive(Debug, Clone)]
pub struct CurrencyFormatter {
    format: CurrencyFormat,
    conventions: LocaleConventions,
    symbol: String,
    min_fraction_digits: u8,
    max_fraction_digits: u8,
}

impl Default for CurrencyFormatter {
    fn default() -> Self {
        Self::new(CurrencyFormat::default())
    }
}

impl CurrencyFormatter {
    pub fn new(format: CurrencyFormat) -> Self {
        let code = format.currency.to_ascii_uppercase();
        let max_fraction_digits = format
            .max_fraction_digits
            .min(MAX_SUPPORTED_FRACTION_DIGITS);
        let min_fraction_digits = customary_fraction_digits(&code).min(max_fraction_digits);
        Self {
            conventions: LocaleConventions::for_locale(&format.locale),
            symbol: currency_symbol(&code),
            min_fraction_digits,
            max_fraction_digits,
            format,
        }
    }

    pub fn options(&self) -> &CurrencyFormat {
        &self.format
    }

    /// Format a monetary amount, e.g. `485000.0` as `"$485,000"` under en-US.
    pub fn format(&self, amount: f64) -> String {
        let digits = usize::from(self.max_fraction_digits);
        let factor = 10f64.powi(i32::from(self.max_fraction_digits));
        let rounded = (amount.abs() * factor).round() / factor;

        let fixed = format!("{:.*}", digits, rounded);
        let (int_part, frac_part) = match fixed.split_once('.') {
            Some((i, f)) => (i, f),
            None => (fixed.as_str(), ""),
        };

        let min = usize::from(self.min_fraction_digits);
        let mut frac = frac_part.trim_end_matches('0').to_string();
        while frac.len() < min {
            frac.push('0');
        }

        let mut number = group_digits(int_part, self.conventions.group);
        if !frac.is_empty() {
            number.push_str(self.conventions.decimal);
            number.push_str(&frac);
        }

        let sign = if amount < 0.0 && rounded != 0.0 { "-" } else { "" };
        if self.conventions.symbol_after {
            format!("{sign}{number}{NBSP}{}", self.symbol)
        } else {
            format!("{sign}{}{number}", self.symbol)
        }
    }

    /// Format an integer with locale digit grouping and no currency symbol.
    pub fn format_number(&self, value: u64) -> String {
        group_digits(&value.to_string(), self.conventions.group)
    }
}

fn group_digits(digits: &str, separator: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3 * separator.len());
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push_str(separator);
        }
        out.push(ch);
    }
    out
}

fn currency_symbol(code: &str) -> String {
    match code {
        "USD" => "$".to_string(),
        "EUR" => "€".to_string(),
        "GBP" => "£".to_string(),
        "JPY" => "¥".to_string(),
        "SEK" | "NOK" | "DKK" => "kr".to_string(),
        "CAD" => "CA$".to_string(),
        "AUD" => "A$".to_string(),
        other => format!("{other}{NBSP}"),
    }
}

fn customary_fraction_digits(code: &str) -> u8 {
    match code {
        "JPY" | "KRW" => 0,
        _ => 2,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fmt(locale: &str, currency: &str, digits: u8) -> CurrencyFormatter {
        CurrencyFormatter::new(CurrencyFormat {
            locale: locale.to_string(),
            currency: currency.to_string(),
            max_fraction_digits: digits,
        })
    }

    #[test]
    fn test_default_is_en_us_usd_whole_dollars() {
        let f = CurrencyFormatter::default();
        assert_eq!(f.options(), &CurrencyFormat::default());
        assert_eq!(f.format(485_000.0), "$485,000");
        assert_eq!(f.format(600_000.0), "$600,000");
        assert_eq!(f.format(0.0), "$0");
        assert_eq!(f.format(999.0), "$999");
        assert_eq!(f.format(1_000.0), "$1,000");
        assert_eq!(f.format(12_345_678.0), "$12,345,678");
    }

    #[test]
    fn test_rounds_half_away_from_zero() {
        let f = CurrencyFormatter::default();
        assert_eq!(f.format(230.5), "$231");
        assert_eq!(f.format(230.49), "$230");
        assert_eq!(f.format(250.0), "$250");
        assert_eq!(f.format(600_000.0 / 2_600.0), "$231");
    }

    #[test]
    fn test_negative_amounts() {
        let f = CurrencyFormatter::default();
        assert_eq!(f.format(-1_500.0), "-$1,500");
        assert_eq!(f.format(-0.2), "$0");
    }

    #[test]
    fn test_fraction_digits() {
        let f = fmt("en-US", "USD", 2);
        assert_eq!(f.format(230.769), "$230.77");
        assert_eq!(f.format(250.0), "$250.00");
        assert_eq!(f.format(1_234.5), "$1,234.50");
    }

    #[test]
    fn test_jpy_has_no_minimum_fraction_digits() {
        let f = fmt("en-US", "JPY", 2);
        assert_eq!(f.format(1_000.0), "¥1,000");
        assert_eq!(f.format(1_000.5), "¥1,000.5");
    }

    #[test]
    fn test_german_locale() {
        let f = fmt("de-DE", "EUR", 0);
        assert_eq!(f.format(485_000.0), "485.000\u{a0}€");
        let f = fmt("de-DE", "EUR", 2);
        assert_eq!(f.format(1_234.5), "1.234,50\u{a0}€");
    }

    #[test]
    fn test_french_and_swedish_grouping() {
        assert_eq!(fmt("fr-FR", "EUR", 0).format(1_234_567.0), "1\u{202f}234\u{202f}567\u{a0}€");
        assert_eq!(fmt("sv-SE", "SEK", 0).format(3_950_000.0), "3\u{a0}950\u{a0}000\u{a0}kr");
    }

    #[test]
    fn test_unknown_currency_uses_code() {
        assert_eq!(fmt("en-US", "XYZ", 0).format(1_000.0), "XYZ\u{a0}1,000");
    }

    #[test]
    fn test_unknown_locale_falls_back_to_english() {
        assert_eq!(fmt("tlh", "USD", 0).format(1_000.0), "$1,000");
    }

    #[test]
    fn test_format_number() {
        let f = CurrencyFormatter::default();
        assert_eq!(f.format_number(0), "0");
        assert_eq!(f.format_number(750), "750");
        assert_eq!(f.format_number(2_600), "2,600");
        assert_eq!(f.format_number(1_000_000), "1,000,000");
        assert_eq!(fmt("de-DE", "EUR", 0).format_number(3_200), "3.200");
    }

    #[test]
    fn test_currency_format_serde_defaults() {
        let parsed: CurrencyFormat = serde_json::from_str(r#"{"currency": "EUR"}"#).unwrap();
        assert_eq!(parsed.locale, "en-US");
        assert_eq!(parsed.currency, "EUR");
        assert_eq!(parsed.max_fraction_digits, 0);
    }
}
