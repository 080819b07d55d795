//! Type definitions for numeric text parsing
//!
//! This module defines the value types shared across the crate. A parse
//! outcome is expressed directly as `Option<BigDecimal>` / `Option<f64>`:
//! present value or explicit absence, never a partial result.

/// The two locale-dependent characters that drive numeric text interpretation
///
/// English-style locales use `.` / `,`, most continental-European locales use
/// `,` / `.`, Russian-style locales use `,` / space. The two characters are
/// distinct for every locale shipped in the embedded data; a caller building
/// symbols by hand is responsible for keeping them distinct.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberSymbols {
    /// Character marking the boundary between integer and fractional digits
    pub decimal_point: char,
    /// Character used to visually cluster digits; carries no numeric meaning
    pub grouping_separator: char,
}

impl Default for NumberSymbols {
    /// English-style convention: `.` decimal point, `,` grouping separator
    fn default() -> Self {
        Self {
            decimal_point: '.',
            grouping_separator: ',',
        }
    }
}

impl NumberSymbols {
    /// Return a copy with the given decimal point
    pub fn with_decimal_point(mut self, c: char) -> Self {
        self.decimal_point = c;
        self
    }

    /// Return a copy with the given grouping separator
    pub fn with_grouping_separator(mut self, c: char) -> Self {
        self.grouping_separator = c;
        self
    }
}
