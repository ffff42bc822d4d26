use std::fmt;
use std::rc::{Rc, Weak};

use rust_decimal::{Decimal, RoundingStrategy};

use crate::config::{Configuration, SharedConfig};
use crate::error::ConfigError;
use crate::key::{AuxKey, Key};
use crate::traits::PadObserver;
use crate::types::{CustomKeyAction, EventMask, OutputControlDataType, PadEvent};

/// Handle returned by [`NumberPad::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

struct Subscription {
    id: SubscriptionId,
    mask: EventMask,
    observer: Weak<dyn PadObserver>,
}

/// The numeric keypad value engine.
///
/// Holds the raw digits typed so far and turns key presses into bounded,
/// correctly scaled values. Every press returns the events it fired; an empty
/// list means the press changed nothing (including rejected overflows).
pub struct NumberPad {
    raw: String,
    config: SharedConfig,
    subscriptions: Vec<Subscription>,
    next_subscription: u64,
}

impl fmt::Debug for NumberPad {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NumberPad")
            .field("raw", &self.raw)
            .field("config", &self.config)
            .field("observers", &self.observer_count())
            .finish_non_exhaustive()
    }
}

/// Point-in-time view of the pad for renderers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PadSnapshot {
    pub raw: String,
    pub decimal_value: Decimal,
    pub integer_value: i64,
    pub data_type: OutputControlDataType,
    pub display_text: String,
}

#[derive(Default)]
pub struct NumberPadBuilder {
    config: Option<SharedConfig>,
}

impl NumberPadBuilder {
    /// Share an existing configuration handle with the pad.
    pub fn config(mut self, config: SharedConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn configuration(self, config: Configuration) -> Self {
        self.config(config.into_shared())
    }

    pub fn build(self) -> NumberPad {
        NumberPad {
            raw: String::new(),
            config: self
                .config
                .unwrap_or_else(|| Configuration::default().into_shared()),
            subscriptions: Vec::new(),
            next_subscription: 0,
        }
    }
}

impl Default for NumberPad {
    fn default() -> Self {
        NumberPadBuilder::default().build()
    }
}

impl NumberPad {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> NumberPadBuilder {
        NumberPadBuilder::default()
    }

    pub fn with_config(config: SharedConfig) -> Self {
        NumberPadBuilder::default().config(config).build()
    }

    // Queries

    /// The digits typed so far, unscaled.
    pub fn raw_value(&self) -> &str {
        &self.raw
    }

    pub fn decimal_value(&self) -> Decimal {
        self.config.borrow().decimal_value_of_string(&self.raw)
    }

    /// The raw digits as a plain integer, ignoring decimal places.
    /// Saturates at `i64::MAX`.
    pub fn integer_value(&self) -> i64 {
        if self.raw.is_empty() {
            return 0;
        }
        self.raw.parse().unwrap_or(i64::MAX)
    }

    /// The value rendered by the configured number formatter.
    pub fn display_text(&self) -> String {
        let config = self.config.borrow();
        let value = config.decimal_value_of_string(&self.raw);
        config.number_formatter().format(value, &config.format_context())
    }

    pub fn snapshot(&self) -> PadSnapshot {
        PadSnapshot {
            raw: self.raw.clone(),
            decimal_value: self.decimal_value(),
            integer_value: self.integer_value(),
            data_type: self.config.borrow().output_control_data_type(),
            display_text: self.display_text(),
        }
    }

    /// A handle to the live configuration.
    pub fn configuration(&self) -> SharedConfig {
        Rc::clone(&self.config)
    }

    // Configuration. None of these reset or re-validate the buffer.

    pub fn set_configuration(&mut self, config: SharedConfig) {
        self.config = config;
    }

    pub fn change_output_control_data_type(&mut self, data_type: OutputControlDataType) {
        self.config.borrow_mut().set_output_control_data_type(data_type);
    }

    pub fn change_max_dollar_amount(&mut self, amount: Decimal) -> Result<(), ConfigError> {
        self.config.borrow_mut().set_max_dollar_amount(amount)
    }

    pub fn change_max_percentage_amount(&mut self, amount: Decimal) -> Result<(), ConfigError> {
        self.config.borrow_mut().set_max_percentage_amount(amount)
    }

    // Observers

    /// Register an observer for the events selected by `mask`.
    ///
    /// The pad keeps only a weak reference; dropping the observer's last `Rc`
    /// ends the subscription.
    pub fn subscribe<O>(&mut self, observer: &Rc<O>, mask: EventMask) -> SubscriptionId
    where
        O: PadObserver + 'static,
    {
        let erased: Rc<dyn PadObserver> = Rc::<O>::clone(observer);
        self.subscribe_dyn(&erased, mask)
    }

    /// [`subscribe`](Self::subscribe) for observers already stored as trait objects.
    pub fn subscribe_dyn(
        &mut self,
        observer: &Rc<dyn PadObserver>,
        mask: EventMask,
    ) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscriptions.push(Subscription {
            id,
            mask,
            observer: Rc::downgrade(observer),
        });
        id
    }

    /// Returns `false` if the subscription was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscriptions.len();
        self.subscriptions.retain(|s| s.id != id);
        self.subscriptions.len() != before
    }

    /// Number of subscriptions whose observer is still alive.
    pub fn observer_count(&self) -> usize {
        self.subscriptions
            .iter()
            .filter(|s| s.observer.strong_count() > 0)
            .count()
    }

    // Key handling

    pub fn handle_key(&mut self, key: Key) -> Vec<PadEvent> {
        match key {
            Key::Digit(d) => self.press_digit(d),
            Key::DoubleZero => self.press_double_zero(),
            Key::Backspace => self.backspace(),
            Key::Clear => self.clear(),
            Key::Aux(side) => self.press_aux(side),
        }
    }

    pub fn press_digit(&mut self, digit: u8) -> Vec<PadEvent> {
        if digit > 9 {
            tracing::debug!(digit, "ignoring out-of-range digit");
            return vec![];
        }
        if !self.try_append(&digit.to_string()) {
            return vec![];
        }
        self.emit(vec![
            PadEvent::ValueChanged(self.raw.clone()),
            PadEvent::IntegerKeyTapped,
        ])
    }

    /// Append `"00"` as one edit; on overflow neither zero is applied.
    pub fn press_double_zero(&mut self) -> Vec<PadEvent> {
        let mut events = vec![];
        self.append_zeros(2, &mut events);
        self.emit(events)
    }

    pub fn backspace(&mut self) -> Vec<PadEvent> {
        let mut events = vec![];
        self.backspace_into(&mut events);
        self.emit(events)
    }

    pub fn clear(&mut self) -> Vec<PadEvent> {
        let mut events = vec![];
        self.clear_into(&mut events);
        self.emit(events)
    }

    /// Press an auxiliary key. The tap event always fires, followed by
    /// whatever the bound action produced.
    pub fn press_aux(&mut self, side: AuxKey) -> Vec<PadEvent> {
        let (tapped, action) = {
            let config = self.config.borrow();
            match side {
                AuxKey::Left => (PadEvent::LeftButtonTapped, config.left_button_action()),
                AuxKey::Right => (PadEvent::RightButtonTapped, config.right_button_action()),
            }
        };

        let mut events = vec![tapped];
        match action {
            CustomKeyAction::ReportToDelegate => {}
            CustomKeyAction::Backspace => self.backspace_into(&mut events),
            CustomKeyAction::SingleZero => self.append_zeros(1, &mut events),
            CustomKeyAction::DoubleZero => self.append_zeros(2, &mut events),
            CustomKeyAction::Clear => self.clear_into(&mut events),
        }
        self.emit(events)
    }

    // Overrides. These bypass the max-value check.

    /// Replace the buffer with the digits of `value`. Negative values are ignored.
    pub fn override_integer_value(&mut self, value: i64) -> Vec<PadEvent> {
        if value < 0 {
            tracing::warn!(value, "ignoring negative integer override");
            return vec![];
        }
        self.replace_raw(value.to_string())
    }

    /// Replace the buffer with `value` scaled by the current decimal places,
    /// rounded half away from zero. Negative or unrepresentable values are
    /// ignored.
    pub fn override_decimal_value(&mut self, value: Decimal) -> Vec<PadEvent> {
        if value.is_sign_negative() && !value.is_zero() {
            tracing::warn!(%value, "ignoring negative decimal override");
            return vec![];
        }
        let places = self.config.borrow().number_of_decimal_places();
        let factor = Decimal::from_i128_with_scale(10i128.pow(places), 0);
        let Some(scaled) = value.abs().checked_mul(factor) else {
            tracing::warn!(%value, places, "decimal override out of range");
            return vec![];
        };
        let unscaled = scaled
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
            .normalize();
        self.replace_raw(unscaled.to_string())
    }

    // Internals

    fn replace_raw(&mut self, raw: String) -> Vec<PadEvent> {
        tracing::trace!(old = %self.raw, new = %raw, "raw value overridden");
        self.raw = raw;
        self.emit(vec![PadEvent::ValueChanged(self.raw.clone())])
    }

    fn try_append(&mut self, digits: &str) -> bool {
        let mut candidate = String::with_capacity(self.raw.len() + digits.len());
        candidate.push_str(&self.raw);
        candidate.push_str(digits);

        if self.config.borrow().check_max_value(&candidate) {
            tracing::debug!(raw = %self.raw, rejected = digits, "edit would overflow limits");
            return false;
        }
        tracing::trace!(raw = %candidate, "digits appended");
        self.raw = candidate;
        true
    }

    fn append_zeros(&mut self, count: usize, events: &mut Vec<PadEvent>) {
        if self.try_append(&"0".repeat(count)) {
            events.push(PadEvent::ValueChanged(self.raw.clone()));
        }
    }

    fn backspace_into(&mut self, events: &mut Vec<PadEvent>) {
        if self.raw.pop().is_some() {
            events.push(PadEvent::SingleValueDeleted);
            events.push(PadEvent::ValueChanged(self.raw.clone()));
        }
    }

    fn clear_into(&mut self, events: &mut Vec<PadEvent>) {
        self.raw.clear();
        events.push(PadEvent::Cleared);
        events.push(PadEvent::ValueChanged(String::new()));
    }

    fn emit(&mut self, events: Vec<PadEvent>) -> Vec<PadEvent> {
        if events.is_empty() {
            return events;
        }
        self.subscriptions.retain(|s| s.observer.strong_count() > 0);

        for event in &events {
            let kind = event.kind();
            for sub in &self.subscriptions {
                if !sub.mask.contains(kind) {
                    continue;
                }
                if let Some(observer) = sub.observer.upgrade() {
                    observer.on_event(event);
                }
            }
        }
        events
    }
}
