pub mod locale;
pub mod parser;
pub mod types;

pub use bigdecimal::BigDecimal;
pub use parser::{is_numeric, parse_decimal, parse_double};
pub use types::NumberSymbols;
