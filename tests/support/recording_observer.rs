use std::cell::RefCell;

use numpad_mini::{PadEvent, PadObserver};

/// Records every callback it receives, in order.
#[derive(Default, Debug)]
pub struct RecordingObserver {
    events: RefCell<Vec<PadEvent>>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<PadEvent> {
        self.events.borrow().clone()
    }

    pub fn take(&self) -> Vec<PadEvent> {
        self.events.borrow_mut().drain(..).collect()
    }

    fn push(&self, event: PadEvent) {
        self.events.borrow_mut().push(event);
    }
}

// Implements the individual callbacks so the default routing in
// `PadObserver::on_event` is exercised.
impl PadObserver for RecordingObserver {
    fn value_did_change(&self, new_raw: &str) {
        self.push(PadEvent::ValueChanged(new_raw.to_string()));
    }

    fn did_clear(&self) {
        self.push(PadEvent::Cleared);
    }

    fn did_tap_integer_key(&self) {
        self.push(PadEvent::IntegerKeyTapped);
    }

    fn did_tap_left_button(&self) {
        self.push(PadEvent::LeftButtonTapped);
    }

    fn did_tap_right_button(&self) {
        self.push(PadEvent::RightButtonTapped);
    }

    fn did_delete_single_value(&self) {
        self.push(PadEvent::SingleValueDeleted);
    }
}
