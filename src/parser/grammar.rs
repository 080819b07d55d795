//! Winnow combinators for the locale-relative number grammar
//!
//! With `D` the decimal point and `G` the grouping separator of the active
//! symbols:
//!
//! ```text
//! number       := ['-'] integerPart [ D fractionPart ]
//! integerPart  := digit { [G] digit }
//! fractionPart := digit { digit }
//! ```
//!
//! A grouping separator is accepted only strictly between two digits, so it
//! can never lead, trail, or double up. Grouping is deliberately not held to
//! a fixed width: users type remembered digit groups inconsistently, and
//! "1,0,0,0,0,1" is as acceptable as "1,000,001".

use winnow::ascii::digit1;
use winnow::combinator::{opt, preceded, repeat};
use winnow::token::one_of;
use winnow::{ModalResult, Parser};

use crate::types::NumberSymbols;

/// Parse the integer part: a mandatory leading digit followed by any run of
/// digits, each optionally preceded by a single grouping separator.
///
/// Grouping separators carry no numeric meaning and are discarded; only the
/// digits are returned. A separator not followed by a digit is left
/// unconsumed, which makes the surrounding parse fail at end-of-input.
pub fn integer_digits(grouping: char) -> impl FnMut(&mut &str) -> ModalResult<String> {
    move |input: &mut &str| {
        let lead = one_of('0'..='9').parse_next(input)?;
        let rest: Vec<char> =
            repeat(0.., preceded(opt(one_of(grouping)), one_of('0'..='9'))).parse_next(input)?;

        let mut digits = String::with_capacity(1 + rest.len());
        digits.push(lead);
        digits.extend(rest);
        Ok(digits)
    }
}

/// Parse a complete number under the given symbols, producing its canonical
/// text: optional `-`, the integer digits with grouping separators stripped,
/// then `.` and the fraction digits when a fractional part is present.
///
/// The grammar walk and the normalization are a single pass. Combine with
/// [`Parser::parse`] to require the entire input to match.
pub fn canonical_number(symbols: &NumberSymbols) -> impl FnMut(&mut &str) -> ModalResult<String> {
    let decimal = symbols.decimal_point;
    let grouping = symbols.grouping_separator;

    move |input: &mut &str| {
        let sign = opt('-').parse_next(input)?;
        let integer = integer_digits(grouping).parse_next(input)?;
        let fraction: Option<&str> = opt(preceded(decimal, digit1)).parse_next(input)?;

        let capacity =
            usize::from(sign.is_some()) + integer.len() + fraction.map_or(0, |f| f.len() + 1);
        let mut canonical = String::with_capacity(capacity);
        if sign.is_some() {
            canonical.push('-');
        }
        canonical.push_str(&integer);
        if let Some(fraction) = fraction {
            canonical.push('.');
            canonical.push_str(fraction);
        }
        Ok(canonical)
    }
}
