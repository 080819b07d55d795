//! Public validation and parsing operations
//!
//! These are total functions of `(text, symbols)`: malformed input yields
//! `false` or `None`, never an error or a panic. User text is inherently
//! untrusted, so absence of a value is an expected outcome, not a fault.

use std::str::FromStr;

use bigdecimal::{BigDecimal, ToPrimitive};
use winnow::Parser;

use crate::parser::grammar::canonical_number;
use crate::types::NumberSymbols;

/// Check whether `text` matches the number grammar under `symbols`
///
/// A pure grammar check with no value construction, cheap enough to run
/// against a text field on every keystroke. Every string accepted here
/// parses successfully with [`parse_decimal`], and vice versa.
pub fn is_numeric(text: &str, symbols: &NumberSymbols) -> bool {
    canonical_number(symbols).parse(text).is_ok()
}

/// Parse `text` into an exact decimal value under `symbols`
///
/// Grouping separators are stripped losslessly and the decimal point is
/// canonicalized before the digits reach [`BigDecimal`]. The value is
/// normalized so the textual form does not leak through: "01", "1" and "1.0"
/// all parse to the same canonical value 1.
///
/// Returns `None` for any input that fails the grammar; there is no lenient
/// or partial fallback.
///
/// # Examples
/// ```
/// use number_parse::{parse_decimal, NumberSymbols};
///
/// let symbols = NumberSymbols::default();
/// let value = parse_decimal("1,000.01", &symbols).unwrap();
/// assert_eq!(value.to_string(), "1000.01");
/// assert!(parse_decimal("1.2.3", &symbols).is_none());
/// ```
pub fn parse_decimal(text: &str, symbols: &NumberSymbols) -> Option<BigDecimal> {
    let canonical = canonical_number(symbols).parse(text).ok()?;
    let value = BigDecimal::from_str(&canonical).ok()?;
    Some(value.normalized())
}

/// Parse `text` to the nearest representable double under `symbols`
///
/// Layered on [`parse_decimal`] so the exact decimal stays the authority on
/// digit content; binary floating-point error enters only in this final
/// conversion step, never from ambiguous textual interpretation.
pub fn parse_double(text: &str, symbols: &NumberSymbols) -> Option<f64> {
    parse_decimal(text, symbols).and_then(|value| value.to_f64())
}
