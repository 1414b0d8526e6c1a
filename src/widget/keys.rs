//! Keyboard handling for the message input.

/// What a key press in the message input should do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Submit the draft and suppress the default line break.
    Submit,
    /// Let the input insert a line break.
    Newline,
    /// Not a key the widget cares about.
    Ignore,
}

impl KeyAction {
    /// Map a `KeyboardEvent.key` value and the Shift modifier to an action.
    #[must_use]
    pub fn from_key(key: &str, shift: bool) -> Self {
        match (key, shift) {
            ("Enter", false) => Self::Submit,
            ("Enter", true) => Self::Newline,
            _ => Self::Ignore,
        }
    }

    /// Whether the browser's default handling must be prevented.
    #[must_use]
    pub fn prevents_default(self) -> bool {
        self == Self::Submit
    }
}
