//! Brazilian real amounts: formatting, lenient parsing and discount math.
//!
//! All amounts are `rust_decimal::Decimal` in BRL. There is no multi-currency
//! support; the store only sells in reais.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use thiserror::Error;

/// Errors that can occur when parsing a typed price.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PriceParseError {
    /// No digits were found in the input.
    #[error("price must contain at least one digit")]
    NoDigits,
    /// The cleaned value did not fit a decimal.
    #[error("price is out of range: {0}")]
    OutOfRange(String),
}

/// Format an amount the way a pt-BR currency formatter does: `R$ 1.234,56`.
///
/// ```
/// use rust_decimal::Decimal;
/// use atadiesel_core::format_brl;
///
/// assert_eq!(format_brl(Decimal::new(123456, 2)), "R$ 1.234,56");
/// assert_eq!(format_brl(Decimal::new(25, 1)), "R$ 2,50");
/// ```
#[must_use]
pub fn format_brl(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    let plain = format!("{:.2}", rounded.abs());
    let (int_part, frac_part) = plain.split_once('.').unwrap_or((plain.as_str(), "00"));

    format!("{sign}R$ {},{frac_part}", group_thousands(int_part))
}

/// Short chart label: `R$ 4.8k` for thousands, `R$ 950` below that.
#[must_use]
pub fn format_brl_compact(amount: Decimal) -> String {
    let thousand = Decimal::ONE_THOUSAND;
    if amount >= thousand {
        let scaled = (amount / thousand).round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);
        format!("R$ {scaled:.1}k")
    } else {
        format!("R$ {}", amount.normalize())
    }
}

/// Parse a user-typed price such as `"R$ 1.234,56"`, `"89,90"` or `"12"`.
///
/// Everything except digits, `.` and `,` is discarded. Dots are thousands
/// separators and the first comma is the decimal point; anything after a
/// second separator is ignored.
///
/// # Errors
///
/// Returns [`PriceParseError::NoDigits`] when the input has no digits before
/// the decimal comma or after it.
pub fn parse_brl(text: &str) -> Result<Decimal, PriceParseError> {
    let cleaned: String = text
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == ',')
        .collect();

    let (int_part, rest) = cleaned.split_once(',').unwrap_or((cleaned.as_str(), ""));
    let frac_part: String = rest.chars().take_while(char::is_ascii_digit).collect();

    if int_part.is_empty() && frac_part.is_empty() {
        return Err(PriceParseError::NoDigits);
    }

    let int_part = if int_part.is_empty() { "0" } else { int_part };
    let literal = if frac_part.is_empty() {
        int_part.to_owned()
    } else {
        format!("{int_part}.{frac_part}")
    };

    literal
        .parse::<Decimal>()
        .map_err(|_| PriceParseError::OutOfRange(literal))
}

/// Parse a typed price, treating anything unparsable as zero.
#[must_use]
pub fn parse_brl_or_zero(text: &str) -> Decimal {
    parse_brl(text).unwrap_or(Decimal::ZERO)
}

/// Whole-percent discount of `promo` against `current`.
///
/// Only a promo strictly between zero and the current price counts as a
/// discount; every other combination yields `0`.
#[must_use]
pub fn discount_percent(current: Decimal, promo: Decimal) -> u32 {
    if promo <= Decimal::ZERO || current <= Decimal::ZERO || promo >= current {
        return 0;
    }

    ((current - promo) / current * Decimal::ONE_HUNDRED)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_u32()
        .unwrap_or(0)
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push('.');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_format_brl_small() {
        assert_eq!(format_brl(dec("0")), "R$ 0,00");
        assert_eq!(format_brl(dec("11.44")), "R$ 11,44");
        assert_eq!(format_brl(dec("7.5")), "R$ 7,50");
    }

    #[test]
    fn test_format_brl_thousands() {
        assert_eq!(format_brl(dec("1200")), "R$ 1.200,00");
        assert_eq!(format_brl(dec("125430")), "R$ 125.430,00");
        assert_eq!(format_brl(dec("1234567.891")), "R$ 1.234.567,89");
    }

    #[test]
    fn test_format_brl_negative() {
        assert_eq!(format_brl(dec("-5")), "-R$ 5,00");
    }

    #[test]
    fn test_format_brl_rounds_half_away_from_zero() {
        assert_eq!(format_brl(dec("2.005")), "R$ 2,01");
    }

    #[test]
    fn test_format_brl_compact() {
        assert_eq!(format_brl_compact(dec("4800")), "R$ 4.8k");
        assert_eq!(format_brl_compact(dec("32000")), "R$ 32.0k");
        assert_eq!(format_brl_compact(dec("950")), "R$ 950");
    }

    #[test]
    fn test_parse_brl_formatted() {
        assert_eq!(parse_brl("R$ 1.234,56").unwrap(), dec("1234.56"));
        assert_eq!(parse_brl("R$ 89,90").unwrap(), dec("89.90"));
    }

    #[test]
    fn test_parse_brl_plain_integer() {
        assert_eq!(parse_brl("12").unwrap(), dec("12"));
    }

    #[test]
    fn test_parse_brl_ignores_second_separator() {
        assert_eq!(parse_brl("1,2,3").unwrap(), dec("1.2"));
    }

    #[test]
    fn test_parse_brl_rejects_no_digits() {
        assert_eq!(parse_brl(""), Err(PriceParseError::NoDigits));
        assert_eq!(parse_brl("R$ ,"), Err(PriceParseError::NoDigits));
        assert_eq!(parse_brl_or_zero("abc"), Decimal::ZERO);
    }

    #[test]
    fn test_discount_percent() {
        assert_eq!(discount_percent(dec("100"), dec("75")), 25);
        assert_eq!(discount_percent(dec("89.90"), dec("79.90")), 11);
    }

    #[test]
    fn test_discount_percent_requires_lower_positive_promo() {
        assert_eq!(discount_percent(dec("100"), dec("0")), 0);
        assert_eq!(discount_percent(dec("100"), dec("100")), 0);
        assert_eq!(discount_percent(dec("100"), dec("120")), 0);
        assert_eq!(discount_percent(dec("0"), dec("10")), 0);
    }
}
