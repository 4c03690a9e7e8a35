/// Key codes representing the keys the engine cares about.
///
/// This enum provides a platform-agnostic representation of keys.
/// Hosts should map their platform-specific key events to these codes.
/// Map the space bar to `Space`, not `Char(' ')` — the trip sets match on
/// the dedicated variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCode {
    /// A printable character key.
    Char(char),
    /// The Enter/Return key.
    Enter,
    /// The space bar.
    Space,
    /// The comma key.
    Comma,
    /// The semicolon key.
    Semicolon,
    /// The Tab key. Not in the default commit set; hosts that want
    /// tab-to-commit add it through the builder.
    Tab,
    /// The Backspace key.
    Backspace,
    /// The forward Delete key.
    Delete,
}

impl KeyCode {
    /// Maps a legacy numeric key code (the values carried by browser-style
    /// keypress/keyup events) to a `KeyCode`.
    ///
    /// Known control codes map to their dedicated variants; any other code
    /// that is a printable scalar value maps to `Char`. Returns `None` for
    /// codes that are neither.
    pub fn from_raw(code: u32) -> Option<KeyCode> {
        match code {
            8 => Some(KeyCode::Backspace),
            9 => Some(KeyCode::Tab),
            13 => Some(KeyCode::Enter),
            32 => Some(KeyCode::Space),
            44 => Some(KeyCode::Comma),
            59 => Some(KeyCode::Semicolon),
            127 => Some(KeyCode::Delete),
            _ => char::from_u32(code)
                .filter(|c| !c.is_control())
                .map(KeyCode::Char),
        }
    }
}

bitflags::bitflags! {
    /// Keyboard modifier flags.
    ///
    /// These can be combined to represent multiple modifiers held simultaneously.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Modifiers: u8 {
        const SHIFT = 0b0001;
        const CTRL  = 0b0010;
        const ALT   = 0b0100;
        const META  = 0b1000;
    }
}

/// A key press event with optional modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    /// The key that was pressed.
    pub code: KeyCode,
    /// Modifier keys held during the key press.
    pub mods: Modifiers,
}

/// Input events that can be processed by the tally engine.
///
/// Commit trips are evaluated on the press phase (so the trigger character
/// never reaches the field); delete trips on the release phase (so the
/// emptiness check can compare against the text as it stood before the
/// keystroke). Hosts without distinct phases feed each key as a `Press`
/// followed by a `Release`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Key-press phase of a keystroke.
    Press(KeyEvent),
    /// Key-up phase of a keystroke.
    Release(KeyEvent),
    /// The host field lost input focus. Only acted on when the engine was
    /// built with `commit_on_blur`.
    Blur,
}
