pub mod config;
pub mod engine;
pub mod error;
pub mod format;
pub mod key;
pub mod traits;
pub mod types;

pub use crate::config::{Color, Configuration, ConfigurationBuilder, SharedConfig};
pub use crate::engine::{NumberPad, NumberPadBuilder, PadSnapshot, SubscriptionId};
pub use crate::error::{ConfigError, HexColorError, MAX_SUPPORTED_DIGITS};
pub use crate::format::{FormatContext, StandardFormatter};
pub use crate::key::{AuxKey, Key};
pub use crate::traits::{NumberFormatter, PadObserver};
pub use crate::types::{
    CustomKeyAction, DoubleKeyBehavior, EventMask, OutputControlDataType, PadEvent,
};
pub use rust_decimal::Decimal;
