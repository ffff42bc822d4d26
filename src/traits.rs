use rust_decimal::Decimal;

use crate::format::FormatContext;
use crate::types::PadEvent;

/// Renders the pad's value into user-facing text.
///
/// Formatting never affects validation; the engine only calls this from
/// [`NumberPad::display_text`](crate::NumberPad::display_text).
pub trait NumberFormatter {
    fn format(&self, value: Decimal, ctx: &FormatContext) -> String;
}

impl<F> NumberFormatter for F
where
    F: Fn(Decimal, &FormatContext) -> String,
{
    fn format(&self, value: Decimal, ctx: &FormatContext) -> String {
        self(value, ctx)
    }
}

/// Receives pad notifications. Every method is optional.
///
/// Observers are held weakly by the pad, so they take `&self`; use interior
/// mutability to record state. Callbacks run while the pad is mid-update and
/// must not call back into it.
pub trait PadObserver {
    fn value_did_change(&self, _new_raw: &str) {}
    fn did_clear(&self) {}
    fn did_tap_integer_key(&self) {}
    fn did_tap_left_button(&self) {}
    fn did_tap_right_button(&self) {}
    fn did_delete_single_value(&self) {}

    /// Route a single event to the matching callback.
    fn on_event(&self, event: &PadEvent) {
        match event {
            PadEvent::ValueChanged(raw) => self.value_did_change(raw),
            PadEvent::Cleared => self.did_clear(),
            PadEvent::IntegerKeyTapped => self.did_tap_integer_key(),
            PadEvent::LeftButtonTapped => self.did_tap_left_button(),
            PadEvent::RightButtonTapped => self.did_tap_right_button(),
            PadEvent::SingleValueDeleted => self.did_delete_single_value(),
        }
    }
}
