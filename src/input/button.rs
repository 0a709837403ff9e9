use std::fmt;
use std::hash::{Hash, Hasher};

use crate::error::EventError;

/// Raw mouse button code as reported by a backend adapter.
///
/// The numeric values are part of the adapter contract: `1` = left,
/// `2` = right, `3` = middle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum ButtonCode {
    /// Primary (left) mouse button.
    Left = 1,
    /// Secondary (right) mouse button.
    Right = 2,
    /// Middle mouse button (wheel click).
    Middle = 3,
}

impl ButtonCode {
    /// Every known button, in code order.
    pub const ALL: [Self; 3] = [Self::Left, Self::Right, Self::Middle];

    /// Canonical upper-case name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Left => "LEFT",
            Self::Right => "RIGHT",
            Self::Middle => "MIDDLE",
        }
    }

    /// Resolve a button name, ignoring case. `"CENTER"` is accepted as an
    /// alias for the middle button.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_uppercase().as_str() {
            "LEFT" => Some(Self::Left),
            "RIGHT" => Some(Self::Right),
            "MIDDLE" | "CENTER" => Some(Self::Middle),
            _ => None,
        }
    }

    const fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

impl TryFrom<u8> for ButtonCode {
    type Error = EventError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(Self::Left),
            2 => Ok(Self::Right),
            3 => Ok(Self::Middle),
            other => Err(EventError::UnknownButton(other)),
        }
    }
}

impl From<ButtonCode> for u8 {
    fn from(code: ButtonCode) -> Self {
        code as Self
    }
}

/// The set of mouse buttons held during an event.
///
/// An empty set means no button is involved. Comparing against a string
/// asks "is this button held?", so `button == "left"` is true whenever the
/// left button is part of the set. Comparing two values compares the held
/// sets, ignoring order and repeats.
#[derive(Debug, Clone, Default)]
pub struct MouseButton {
    codes: Vec<ButtonCode>,
    names: Vec<&'static str>,
}

impl MouseButton {
    /// Build from held button codes, in the order the backend reported
    /// them.
    pub fn new(codes: impl IntoIterator<Item = ButtonCode>) -> Self {
        let codes: Vec<ButtonCode> = codes.into_iter().collect();
        let names = codes.iter().map(|code| code.name()).collect();
        Self { codes, names }
    }

    /// No button held.
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    /// Canonical names of the held buttons, parallel to [`codes`](Self::codes).
    #[must_use]
    pub fn buttons(&self) -> &[&'static str] {
        &self.names
    }

    /// Raw codes as reported.
    #[must_use]
    pub fn codes(&self) -> &[ButtonCode] {
        &self.codes
    }

    /// Whether no button is held.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Whether `code` is held.
    #[must_use]
    pub fn contains(&self, code: ButtonCode) -> bool {
        self.codes.contains(&code)
    }

    /// Match against a button name or alias. Unknown names never match.
    #[must_use]
    pub fn equals_name(&self, name: &str) -> bool {
        ButtonCode::from_name(name).is_some_and(|code| self.contains(code))
    }

    fn mask(&self) -> u8 {
        self.codes.iter().fold(0, |mask, code| mask | code.bit())
    }
}

impl PartialEq for MouseButton {
    fn eq(&self, other: &Self) -> bool {
        self.mask() == other.mask()
    }
}

impl Eq for MouseButton {}

impl Hash for MouseButton {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.mask().hash(state);
    }
}

impl PartialEq<str> for MouseButton {
    fn eq(&self, other: &str) -> bool {
        self.equals_name(other)
    }
}

impl PartialEq<&str> for MouseButton {
    fn eq(&self, other: &&str) -> bool {
        self.equals_name(other)
    }
}

impl PartialEq<String> for MouseButton {
    fn eq(&self, other: &String) -> bool {
        self.equals_name(other)
    }
}

impl fmt::Display for MouseButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.names.join(", "))
    }
}
