use rust_decimal::Decimal;
use thiserror::Error;

/// Largest digit count a raw buffer may be configured to hold.
///
/// Matches the 28 significant digits `Decimal` can represent.
pub const MAX_SUPPORTED_DIGITS: u32 = 28;

/// A configuration value that breaks the pad's invariants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("max integer digits must be between 1 and 28, got {0}")]
    MaxIntegerDigits(u32),
    #[error("{field} must be at most 28 decimal places, got {places}")]
    DecimalPlaces { field: &'static str, places: u32 },
    #[error("{field} must not be negative, got {amount}")]
    NegativeAmount { field: &'static str, amount: Decimal },
}

/// Why a hex color string could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HexColorError {
    #[error("expected 6 hex digits, got {0}")]
    Length(usize),
    #[error("invalid hex digit {0:?}")]
    InvalidDigit(char),
}
