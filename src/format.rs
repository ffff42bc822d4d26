use rust_decimal::Decimal;

use crate::traits::NumberFormatter;
use crate::types::OutputControlDataType;

/// What a formatter needs to know about the value it renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatContext {
    pub data_type: OutputControlDataType,
    /// Fraction digits to render; always 0 for integers.
    pub decimal_places: u32,
    /// Omit the currency or percent symbol.
    pub hide_symbol: bool,
}

/// Locale-free formatter: grouped integer part, fixed fraction digits,
/// currency symbol in front, percent symbol behind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StandardFormatter {
    pub currency_symbol: String,
    pub percent_symbol: String,
    pub grouping_separator: Option<char>,
    pub decimal_separator: char,
}

impl Default for StandardFormatter {
    fn default() -> Self {
        Self {
            currency_symbol: "$".to_string(),
            percent_symbol: "%".to_string(),
            grouping_separator: Some(','),
            decimal_separator: '.',
        }
    }
}

impl StandardFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    fn digits(&self, value: Decimal, places: u32) -> String {
        let mut fixed = value.abs().round_dp(places);
        fixed.rescale(places);
        let text = fixed.to_string();
        let (int_part, frac_part) = match text.split_once('.') {
            Some((i, f)) => (i, Some(f)),
            None => (text.as_str(), None),
        };

        let mut out = String::with_capacity(text.len() + int_part.len() / 3 + 1);
        if value.is_sign_negative() && !fixed.is_zero() {
            out.push('-');
        }
        for (i, ch) in int_part.chars().enumerate() {
            if i > 0
                && (int_part.len() - i) % 3 == 0
                && let Some(sep) = self.grouping_separator
            {
                out.push(sep);
            }
            out.push(ch);
        }
        if let Some(frac) = frac_part {
            out.push(self.decimal_separator);
            out.push_str(frac);
        }
        out
    }
}

impl NumberFormatter for StandardFormatter {
    fn format(&self, value: Decimal, ctx: &FormatContext) -> String {
        let digits = self.digits(value, ctx.decimal_places);
        if ctx.hide_symbol {
            return digits;
        }
        match ctx.data_type {
            OutputControlDataType::Integer => digits,
            OutputControlDataType::Money => format!("{}{}", self.currency_symbol, digits),
            OutputControlDataType::Percentage => format!("{}{}", digits, self.percent_symbol),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn ctx(data_type: OutputControlDataType, decimal_places: u32) -> FormatContext {
        FormatContext {
            data_type,
            decimal_places,
            hide_symbol: false,
        }
    }

    #[test]
    fn money_is_grouped_with_symbol() {
        let f = StandardFormatter::new();
        let v = Decimal::new(123456789, 2);
        assert_eq!(f.format(v, &ctx(OutputControlDataType::Money, 2)), "$1,234,567.89");
    }

    #[test]
    fn zero_pads_fraction_digits() {
        let f = StandardFormatter::new();
        assert_eq!(
            f.format(Decimal::ZERO, &ctx(OutputControlDataType::Money, 2)),
            "$0.00"
        );
        assert_eq!(
            f.format(Decimal::new(5, 1), &ctx(OutputControlDataType::Percentage, 3)),
            "0.500%"
        );
    }

    #[test]
    fn integer_has_no_fraction_or_symbol() {
        let f = StandardFormatter::new();
        assert_eq!(
            f.format(Decimal::from(1000), &ctx(OutputControlDataType::Integer, 0)),
            "1,000"
        );
        assert_eq!(
            f.format(Decimal::from(999), &ctx(OutputControlDataType::Integer, 0)),
            "999"
        );
    }

    #[test]
    fn hidden_symbol() {
        let f = StandardFormatter::new();
        let mut c = ctx(OutputControlDataType::Money, 2);
        c.hide_symbol = true;
        assert_eq!(f.format(Decimal::new(1234, 2), &c), "12.34");
    }

    #[test]
    fn custom_separators() {
        let f = StandardFormatter {
            currency_symbol: "€".to_string(),
            percent_symbol: " %".to_string(),
            grouping_separator: Some('.'),
            decimal_separator: ',',
        };
        assert_eq!(
            f.format(Decimal::new(123456, 2), &ctx(OutputControlDataType::Money, 2)),
            "€1.234,56"
        );
        let plain = StandardFormatter {
            grouping_separator: None,
            ..StandardFormatter::default()
        };
        assert_eq!(
            plain.format(Decimal::new(123456, 2), &ctx(OutputControlDataType::Percentage, 2)),
            "1234.56%"
        );
    }

    #[test]
    fn closures_are_formatters() {
        let f = |v: Decimal, _: &FormatContext| format!("<{v}>");
        assert_eq!(
            NumberFormatter::format(&f, Decimal::new(15, 1), &ctx(OutputControlDataType::Money, 1)),
            "<1.5>"
        );
    }
}
