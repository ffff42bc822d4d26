/// The two auxiliary keys flanking the zero key on the bottom row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AuxKey {
    /// The bottom-left key.
    Left,
    /// The bottom-right key.
    Right,
}

/// Keys that can be pressed on the pad.
///
/// This enum provides a platform-agnostic representation of the keypad.
/// Hosts should map their touch targets or keyboard events to these codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// A digit key. Values outside `0..=9` are ignored by the engine.
    Digit(u8),
    /// Appends `"00"` as a single edit.
    DoubleZero,
    /// Removes the last digit.
    Backspace,
    /// Empties the buffer.
    Clear,
    /// One of the auxiliary keys; its behavior comes from the configuration.
    Aux(AuxKey),
}

impl Key {
    /// Map a host character to a key.
    ///
    /// Digits map to [`Key::Digit`]; `'\u{8}'`/`'\u{7f}'` to backspace; `'c'`/`'C'`
    /// to clear; `'['` and `']'` to the left and right auxiliary keys.
    pub fn from_char(c: char) -> Option<Key> {
        match c {
            '0'..='9' => c.to_digit(10).map(|d| Key::Digit(d as u8)),
            '\u{8}' | '\u{7f}' => Some(Key::Backspace),
            'c' | 'C' => Some(Key::Clear),
            '[' => Some(Key::Aux(AuxKey::Left)),
            ']' => Some(Key::Aux(AuxKey::Right)),
            _ => None,
        }
    }

    pub fn is_digit(&self) -> bool {
        matches!(self, Key::Digit(d) if *d <= 9)
    }
}
