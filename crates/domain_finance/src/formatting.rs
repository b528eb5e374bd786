//! Brazilian Portuguese number formatting and lenient parsing
//!
//! The calculators are fed from free-text form fields and rendered in BRL,
//! so callers need `1.234,56`-style output and tolerant input parsing.
//!
//! Values are rounded with `rust_decimal` (half away from zero) before
//! rendering so that `0.005` displays as `0,01` instead of whatever the
//! nearest binary float happens to print.

use rust_decimal::{Decimal, RoundingStrategy};

const NBSP: char = '\u{a0}';

/// Formats a value as Brazilian reais, e.g. `R$ 1.234,56`
///
/// The currency symbol is separated by a non-breaking space. Values that
/// cannot be represented (NaN, infinities, magnitudes beyond `Decimal`)
/// render as zero.
pub fn format_currency(value: f64) -> String {
    let rounded = round_to_cents(value);
    let sign = if is_negative(rounded) { "-" } else { "" };
    format!("{}R${}{}", sign, NBSP, pt_br_digits(rounded))
}

/// Formats a percentage with two decimals, e.g. `1,50%`
pub fn format_percent(value: f64) -> String {
    let rounded = round_to_cents(value);
    let sign = if is_negative(rounded) { "-" } else { "" };
    format!("{}{}%", sign, pt_br_digits(rounded))
}

/// Parses a user-typed number, returning `0.0` when nothing numeric is found
///
/// Everything except digits, `,`, `.` and `-` is discarded. When a comma is
/// present it is the decimal separator and dots are thousands separators
/// (`1.234,56` -> `1234.56`); otherwise a dot is the decimal separator. The
/// longest leading numeric prefix is used, so `12abc` parses as `12`.
pub fn parse_number(raw: &str) -> f64 {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || matches!(c, ',' | '.' | '-'))
        .collect();

    let normalized = if cleaned.contains(',') {
        cleaned.replace('.', "").replacen(',', ".", 1)
    } else {
        cleaned
    };

    leading_number(&normalized)
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

/// Parses a whole number, truncating any fraction; `0` on malformed input
pub fn parse_whole_number(raw: &str) -> i64 {
    parse_number(raw).trunc() as i64
}

fn round_to_cents(value: f64) -> Decimal {
    Decimal::from_f64_retain(value)
        .unwrap_or_default()
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

fn is_negative(value: Decimal) -> bool {
    value.is_sign_negative() && !value.is_zero()
}

/// Renders `|value|` as `1.234,56`
fn pt_br_digits(value: Decimal) -> String {
    let mut scaled = value.abs();
    scaled.rescale(2);
    let mantissa = scaled.mantissa();
    format!("{},{:02}", group_thousands(mantissa / 100), mantissa % 100)
}

fn group_thousands(n: i128) -> String {
    let digits = n.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    grouped
}

/// Longest prefix of the form `-?digits(.digits)?`
fn leading_number(text: &str) -> &str {
    let bytes = text.as_bytes();
    let mut end = 0;
    if bytes.first() == Some(&b'-') {
        end = 1;
    }
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    if end < bytes.len() && bytes[end] == b'.' {
        let mut fraction_end = end + 1;
        while fraction_end < bytes.len() && bytes[fraction_end].is_ascii_digit() {
            fraction_end += 1;
        }
        if fraction_end > end + 1 {
            end = fraction_end;
        }
    }
    &text[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1.000");
        assert_eq!(group_thousands(1234567), "1.234.567");
    }

    #[test]
    fn test_leading_number() {
        assert_eq!(leading_number("12abc"), "12");
        assert_eq!(leading_number("1.5.3"), "1.5");
        assert_eq!(leading_number("-7"), "-7");
        assert_eq!(leading_number("3."), "3");
        assert_eq!(leading_number("abc"), "");
    }
}
