use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use rust_decimal::Decimal;

use crate::error::{ConfigError, HexColorError, MAX_SUPPORTED_DIGITS};
use crate::format::{FormatContext, StandardFormatter};
use crate::traits::NumberFormatter;
use crate::types::{CustomKeyAction, DoubleKeyBehavior, OutputControlDataType};

/// A configuration record shared between its owner and a [`NumberPad`](crate::NumberPad).
///
/// The pad re-reads it on every operation, so edits made through the owner's
/// handle take effect on the next key press.
pub type SharedConfig = Rc<RefCell<Configuration>>;

/// An opaque RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(0xff, 0xff, 0xff);
    pub const CLEAR: Color = Color {
        r: 0,
        g: 0,
        b: 0,
        a: 0,
    };

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xff }
    }

    /// Parse `"#rrggbb"` or `"rrggbb"`.
    pub fn from_hex(hex: &str) -> Result<Self, HexColorError> {
        let digits = hex.trim();
        let digits = digits.strip_prefix('#').unwrap_or(digits);

        let count = digits.chars().count();
        if count != 6 {
            return Err(HexColorError::Length(count));
        }

        let mut value: u32 = 0;
        for ch in digits.chars() {
            let nibble = ch.to_digit(16).ok_or(HexColorError::InvalidDigit(ch))?;
            value = (value << 4) | nibble;
        }

        Ok(Color::rgb(
            (value >> 16) as u8,
            (value >> 8) as u8,
            value as u8,
        ))
    }
}

/// Limits and modes that govern how key presses become a value.
#[derive(Clone)]
pub struct Configuration {
    output_control_data_type: OutputControlDataType,
    number_of_currency_decimal_places: u32,
    number_of_percentage_decimal_places: u32,
    max_dollar_amount: Decimal,
    max_percentage_amount: Decimal,
    max_integer_digits: u32,
    left_button_action: CustomKeyAction,
    right_button_action: CustomKeyAction,
    double_key_behavior: DoubleKeyBehavior,
    number_formatter: Rc<dyn NumberFormatter>,
    hide_numerical_symbol: bool,
}

impl fmt::Debug for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Configuration")
            .field("output_control_data_type", &self.output_control_data_type)
            .field(
                "number_of_currency_decimal_places",
                &self.number_of_currency_decimal_places,
            )
            .field(
                "number_of_percentage_decimal_places",
                &self.number_of_percentage_decimal_places,
            )
            .field("max_dollar_amount", &self.max_dollar_amount)
            .field("max_percentage_amount", &self.max_percentage_amount)
            .field("max_integer_digits", &self.max_integer_digits)
            .field("left_button_action", &self.left_button_action)
            .field("right_button_action", &self.right_button_action)
            .field("double_key_behavior", &self.double_key_behavior)
            .field("hide_numerical_symbol", &self.hide_numerical_symbol)
            .finish_non_exhaustive()
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            output_control_data_type: OutputControlDataType::Money,
            number_of_currency_decimal_places: 2,
            number_of_percentage_decimal_places: 2,
            max_dollar_amount: Decimal::from(100_000),
            max_percentage_amount: Decimal::from(100),
            max_integer_digits: 10,
            left_button_action: CustomKeyAction::DoubleZero,
            right_button_action: CustomKeyAction::Backspace,
            double_key_behavior: DoubleKeyBehavior::None,
            number_formatter: Rc::new(StandardFormatter::default()),
            hide_numerical_symbol: false,
        }
    }
}

impl Configuration {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> ConfigurationBuilder {
        ConfigurationBuilder::default()
    }

    /// Wrap into a handle the pad and its owner can both hold.
    pub fn into_shared(self) -> SharedConfig {
        Rc::new(RefCell::new(self))
    }

    /// Parse a hex color, falling back to [`Color::BLACK`] on malformed input.
    pub fn color_for_hex_string(&self, hex: &str) -> Color {
        match Color::from_hex(hex) {
            Ok(color) => color,
            Err(err) => {
                tracing::debug!(hex, %err, "malformed hex color, using black");
                Color::BLACK
            }
        }
    }

    /// Fraction digits for the current data type; 0 for integers.
    pub fn number_of_decimal_places(&self) -> u32 {
        match self.output_control_data_type {
            OutputControlDataType::Integer => 0,
            OutputControlDataType::Money => self.number_of_currency_decimal_places,
            OutputControlDataType::Percentage => self.number_of_percentage_decimal_places,
        }
    }

    /// Scale raw digits by the current decimal places: `"1234"` with two
    /// places is `12.34`. Empty or non-digit input is zero.
    pub fn decimal_value_of_string(&self, raw: &str) -> Decimal {
        self.try_decimal_value(raw).unwrap_or(Decimal::ZERO)
    }

    /// Returns `true` when `candidate` would overflow the configured limits
    /// and the edit producing it must be rejected.
    ///
    /// Digit count is always checked; Money and Percentage additionally check
    /// the scaled value against their ceiling.
    pub fn check_max_value(&self, candidate: &str) -> bool {
        let digits = candidate.len();
        if digits > self.max_integer_digits as usize {
            return true;
        }

        let ceiling = match self.output_control_data_type {
            OutputControlDataType::Integer => return false,
            OutputControlDataType::Money => self.max_dollar_amount,
            OutputControlDataType::Percentage => self.max_percentage_amount,
        };
        match self.try_decimal_value(candidate) {
            Some(value) => value > ceiling,
            None => true,
        }
    }

    pub fn format_context(&self) -> FormatContext {
        FormatContext {
            data_type: self.output_control_data_type,
            decimal_places: self.number_of_decimal_places(),
            hide_symbol: self.hide_numerical_symbol,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        check_digits(self.max_integer_digits)?;
        check_places(
            "number_of_currency_decimal_places",
            self.number_of_currency_decimal_places,
        )?;
        check_places(
            "number_of_percentage_decimal_places",
            self.number_of_percentage_decimal_places,
        )?;
        check_amount("max_dollar_amount", self.max_dollar_amount)?;
        check_amount("max_percentage_amount", self.max_percentage_amount)
    }

    fn try_decimal_value(&self, raw: &str) -> Option<Decimal> {
        if !raw.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let significant = raw.trim_start_matches('0');
        if significant.is_empty() {
            return Some(Decimal::ZERO);
        }
        let mantissa: i128 = significant.parse().ok()?;
        Decimal::try_from_i128_with_scale(mantissa, self.number_of_decimal_places()).ok()
    }

    // Accessors

    pub fn output_control_data_type(&self) -> OutputControlDataType {
        self.output_control_data_type
    }

    pub fn number_of_currency_decimal_places(&self) -> u32 {
        self.number_of_currency_decimal_places
    }

    pub fn number_of_percentage_decimal_places(&self) -> u32 {
        self.number_of_percentage_decimal_places
    }

    pub fn max_dollar_amount(&self) -> Decimal {
        self.max_dollar_amount
    }

    pub fn max_percentage_amount(&self) -> Decimal {
        self.max_percentage_amount
    }

    pub fn max_integer_digits(&self) -> u32 {
        self.max_integer_digits
    }

    pub fn left_button_action(&self) -> CustomKeyAction {
        self.left_button_action
    }

    pub fn right_button_action(&self) -> CustomKeyAction {
        self.right_button_action
    }

    pub fn double_key_behavior(&self) -> DoubleKeyBehavior {
        self.double_key_behavior
    }

    pub fn number_formatter(&self) -> &dyn NumberFormatter {
        self.number_formatter.as_ref()
    }

    pub fn hide_numerical_symbol(&self) -> bool {
        self.hide_numerical_symbol
    }

    // Mutators. None of these touch a pad's buffer.

    pub fn set_output_control_data_type(&mut self, data_type: OutputControlDataType) {
        self.output_control_data_type = data_type;
    }

    pub fn set_number_of_currency_decimal_places(&mut self, places: u32) -> Result<(), ConfigError> {
        check_places("number_of_currency_decimal_places", places)?;
        self.number_of_currency_decimal_places = places;
        Ok(())
    }

    pub fn set_number_of_percentage_decimal_places(
        &mut self,
        places: u32,
    ) -> Result<(), ConfigError> {
        check_places("number_of_percentage_decimal_places", places)?;
        self.number_of_percentage_decimal_places = places;
        Ok(())
    }

    pub fn set_max_dollar_amount(&mut self, amount: Decimal) -> Result<(), ConfigError> {
        check_amount("max_dollar_amount", amount)?;
        self.max_dollar_amount = amount;
        Ok(())
    }

    pub fn set_max_percentage_amount(&mut self, amount: Decimal) -> Result<(), ConfigError> {
        check_amount("max_percentage_amount", amount)?;
        self.max_percentage_amount = amount;
        Ok(())
    }

    pub fn set_max_integer_digits(&mut self, digits: u32) -> Result<(), ConfigError> {
        check_digits(digits)?;
        self.max_integer_digits = digits;
        Ok(())
    }

    pub fn set_left_button_action(&mut self, action: CustomKeyAction) {
        self.left_button_action = action;
    }

    pub fn set_right_button_action(&mut self, action: CustomKeyAction) {
        self.right_button_action = action;
    }

    pub fn set_double_key_behavior(&mut self, behavior: DoubleKeyBehavior) {
        self.double_key_behavior = behavior;
    }

    pub fn set_number_formatter(&mut self, formatter: Rc<dyn NumberFormatter>) {
        self.number_formatter = formatter;
    }

    pub fn set_hide_numerical_symbol(&mut self, hide: bool) {
        self.hide_numerical_symbol = hide;
    }
}

fn check_digits(digits: u32) -> Result<(), ConfigError> {
    if digits == 0 || digits > MAX_SUPPORTED_DIGITS {
        return Err(ConfigError::MaxIntegerDigits(digits));
    }
    Ok(())
}

fn check_places(field: &'static str, places: u32) -> Result<(), ConfigError> {
    if places > MAX_SUPPORTED_DIGITS {
        return Err(ConfigError::DecimalPlaces { field, places });
    }
    Ok(())
}

fn check_amount(field: &'static str, amount: Decimal) -> Result<(), ConfigError> {
    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(ConfigError::NegativeAmount { field, amount });
    }
    Ok(())
}

/// Chained construction of a validated [`Configuration`].
#[derive(Debug, Default)]
pub struct ConfigurationBuilder {
    config: Configuration,
}

impl ConfigurationBuilder {
    pub fn output_control_data_type(mut self, data_type: OutputControlDataType) -> Self {
        self.config.output_control_data_type = data_type;
        self
    }

    pub fn currency_decimal_places(mut self, places: u32) -> Self {
        self.config.number_of_currency_decimal_places = places;
        self
    }

    pub fn percentage_decimal_places(mut self, places: u32) -> Self {
        self.config.number_of_percentage_decimal_places = places;
        self
    }

    pub fn max_dollar_amount(mut self, amount: Decimal) -> Self {
        self.config.max_dollar_amount = amount;
        self
    }

    pub fn max_percentage_amount(mut self, amount: Decimal) -> Self {
        self.config.max_percentage_amount = amount;
        self
    }

    pub fn max_integer_digits(mut self, digits: u32) -> Self {
        self.config.max_integer_digits = digits;
        self
    }

    pub fn left_button_action(mut self, action: CustomKeyAction) -> Self {
        self.config.left_button_action = action;
        self
    }

    pub fn right_button_action(mut self, action: CustomKeyAction) -> Self {
        self.config.right_button_action = action;
        self
    }

    pub fn double_key_behavior(mut self, behavior: DoubleKeyBehavior) -> Self {
        self.config.double_key_behavior = behavior;
        self
    }

    pub fn number_formatter(mut self, formatter: impl NumberFormatter + 'static) -> Self {
        self.config.number_formatter = Rc::new(formatter);
        self
    }

    pub fn hide_numerical_symbol(mut self, hide: bool) -> Self {
        self.config.hide_numerical_symbol = hide;
        self
    }

    pub fn build(self) -> Result<Configuration, ConfigError> {
        self.config.validate()?;
        Ok(self.config)
    }
}
