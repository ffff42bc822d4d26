use numpad_mini::{Decimal, FormatContext, NumberFormatter};

/// Renders every value as `"<prefix><value>"` with the context's places,
/// ignoring symbols and grouping.
#[derive(Debug, Clone)]
pub struct FixedFormatter {
    pub prefix: &'static str,
}

impl NumberFormatter for FixedFormatter {
    fn format(&self, value: Decimal, ctx: &FormatContext) -> String {
        format!("{}{:.*}", self.prefix, ctx.decimal_places as usize, value)
    }
}
