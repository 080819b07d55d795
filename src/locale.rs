//! Locale support for number parsing
//!
//! This module handles loading and managing the locale-specific separator
//! characters used when interpreting numeric text typed by a user.

use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

use crate::types::NumberSymbols;

/// Error type for locale operations
#[derive(Debug, Clone, PartialEq)]
pub enum LocaleError {
    /// The specified locale was not found
    NotFound(String),
    /// An error occurred while parsing locale data
    ParseError(String),
}

impl fmt::Display for LocaleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocaleError::NotFound(locale) => write!(f, "Locale not found: {}", locale),
            LocaleError::ParseError(msg) => write!(f, "Error parsing locale data: {}", msg),
        }
    }
}

impl std::error::Error for LocaleError {}

type Result<T> = std::result::Result<T, LocaleError>;

/// Represents a locale manager that provides access to per-locale number symbols
pub struct LocaleManager {
    symbols: HashMap<String, NumberSymbols>,
}

// Global singleton for locale data
static LOCALE_MANAGER: OnceLock<LocaleManager> = OnceLock::new();

impl LocaleManager {
    /// Create a new locale manager with the default locale data
    fn new() -> Self {
        let mut manager = Self {
            symbols: HashMap::new(),
        };

        // Parse and load the built-in locale data
        if let Err(e) = manager.load_embedded_data() {
            // Just log the error and continue with an empty map
            eprintln!("Failed to load embedded locale data: {}", e);
        }

        manager
    }

    /// Load the embedded locale data from the TOML file
    fn load_embedded_data(&mut self) -> Result<()> {
        let symbols_toml = include_str!("locale/number_symbols.toml");
        self.parse_number_symbols(symbols_toml)
    }

    /// Parse the number symbols TOML data
    fn parse_number_symbols(&mut self, toml_str: &str) -> Result<()> {
        let parsed_toml: toml::Value =
            toml::from_str(toml_str).map_err(|e| LocaleError::ParseError(e.to_string()))?;

        let table = parsed_toml
            .as_table()
            .ok_or_else(|| LocaleError::ParseError("Root is not a table".to_string()))?;

        // First load the base convention if available
        let base_symbols = if let Some(base) = table.get("base") {
            Self::parse_symbol_entry(NumberSymbols::default(), base)?
        } else {
            NumberSymbols::default()
        };

        // Now load each locale's symbols, overlaying the base convention
        for (locale_id, value) in table {
            if locale_id == "base" {
                continue; // Already handled
            }

            let symbols = Self::parse_symbol_entry(base_symbols, value)?;
            self.symbols.insert(locale_id.to_string(), symbols);
        }

        Ok(())
    }

    /// Parse a single locale entry from TOML, overlaying the given symbols
    fn parse_symbol_entry(mut symbols: NumberSymbols, value: &toml::Value) -> Result<NumberSymbols> {
        let table = value
            .as_table()
            .ok_or_else(|| LocaleError::ParseError("Locale entry is not a table".to_string()))?;

        // Decimal point
        if let Some(decimal) = table.get("decimal").and_then(|v| v.as_str()) {
            if let Some(c) = decimal.chars().next() {
                symbols.decimal_point = c;
            }
        }

        // Grouping separator
        if let Some(group) = table.get("group").and_then(|v| v.as_str()) {
            if let Some(c) = group.chars().next() {
                symbols.grouping_separator = c;
            }
        }

        Ok(symbols)
    }

    /// Get the global locale manager instance
    fn get() -> &'static Self {
        LOCALE_MANAGER.get_or_init(Self::new)
    }

    /// Resolve a locale identifier to its number symbols, probing
    /// progressively broader forms: the exact identifier, `-` normalized to
    /// `_`, then the bare language subtag ("de_AT" falls back to "de")
    fn resolve(&self, locale_id: &str) -> Result<NumberSymbols> {
        if let Some(symbols) = self.symbols.get(locale_id) {
            return Ok(*symbols);
        }

        let normalized = locale_id.replace('-', "_");
        if let Some(symbols) = self.symbols.get(&normalized) {
            return Ok(*symbols);
        }

        if let Some((language, _)) = normalized.split_once('_') {
            if let Some(symbols) = self.symbols.get(language) {
                return Ok(*symbols);
            }
        }

        Err(LocaleError::NotFound(locale_id.to_string()))
    }
}

/// Get number symbols by locale identifier (e.g. "en_US", "ru", "de-AT")
pub fn get_number_symbols(locale_id: &str) -> Option<NumberSymbols> {
    LocaleManager::get().resolve(locale_id).ok()
}

/// Get number symbols by locale identifier, falling back to the default
/// convention when the locale is unknown
///
/// Deriving symbols never fails: an unrecognized locale is not an error the
/// caller has to handle, it simply yields [`NumberSymbols::default`].
pub fn number_symbols_or_default(locale_id: &str) -> NumberSymbols {
    LocaleManager::get().resolve(locale_id).unwrap_or_default()
}

/// List all available locale identifiers
pub fn list_available_locales() -> Vec<String> {
    LocaleManager::get().symbols.keys().cloned().collect()
}
