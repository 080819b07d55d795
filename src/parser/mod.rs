//! Numeric text validation and parsing
//!
//! This module is responsible for deciding whether free-form user text
//! denotes a number under a set of locale symbols, and for producing the
//! exact decimal value when it does. The main entry points are
//! [`is_numeric`], [`parse_decimal`] and [`parse_double`].

mod grammar;
mod number;

pub use number::{is_numeric, parse_decimal, parse_double};
