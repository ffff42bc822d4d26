/// How the raw digits are scaled and limited.
///
/// The pad stores digits without a decimal point; the data type decides how
/// many of them sit to the right of it and which ceiling applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OutputControlDataType {
    /// Whole numbers, limited only by digit count.
    Integer,
    /// Currency amounts, limited by the max dollar amount.
    #[default]
    Money,
    /// Percentages, limited by the max percentage amount.
    Percentage,
}

/// The behavior bound to an auxiliary key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CustomKeyAction {
    /// Only notify observers that the key was tapped.
    ReportToDelegate,
    /// Delete one digit from the end.
    Backspace,
    /// Append one zero.
    SingleZero,
    /// Append two zeros atomically.
    DoubleZero,
    /// Empty the buffer.
    Clear,
}

/// Whether two bottom-row keys are rendered as one wide key.
///
/// Presentation only; the engine never reads it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DoubleKeyBehavior {
    #[default]
    None,
    BottomLeft,
    BottomRight,
}

/// Notifications emitted by the pad for observers and hosts.
///
/// Every key press returns the events it fired, in order, and the same events
/// are delivered to subscribed observers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PadEvent {
    /// The raw buffer changed; carries the new raw digits.
    ValueChanged(String),
    /// The buffer was cleared.
    Cleared,
    /// A 0-9 key was accepted.
    IntegerKeyTapped,
    /// The bottom-left key was tapped.
    LeftButtonTapped,
    /// The bottom-right key was tapped.
    RightButtonTapped,
    /// One digit was removed by backspace.
    SingleValueDeleted,
}

impl PadEvent {
    /// The mask bit that selects this event.
    pub fn kind(&self) -> EventMask {
        match self {
            PadEvent::ValueChanged(_) => EventMask::VALUE_CHANGED,
            PadEvent::Cleared => EventMask::CLEARED,
            PadEvent::IntegerKeyTapped => EventMask::INTEGER_KEY_TAPPED,
            PadEvent::LeftButtonTapped => EventMask::LEFT_BUTTON_TAPPED,
            PadEvent::RightButtonTapped => EventMask::RIGHT_BUTTON_TAPPED,
            PadEvent::SingleValueDeleted => EventMask::SINGLE_VALUE_DELETED,
        }
    }
}

bitflags::bitflags! {
    /// Event filter for observer subscriptions.
    ///
    /// These can be combined to subscribe to several notifications at once.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct EventMask: u8 {
        const VALUE_CHANGED        = 0b0000_0001;
        const CLEARED              = 0b0000_0010;
        const INTEGER_KEY_TAPPED   = 0b0000_0100;
        const LEFT_BUTTON_TAPPED   = 0b0000_1000;
        const RIGHT_BUTTON_TAPPED  = 0b0001_0000;
        const SINGLE_VALUE_DELETED = 0b0010_0000;
    }
}
