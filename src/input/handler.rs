use std::fmt;
use std::str::FromStr;

use crate::error::EventError;

/// Sketch callback that a normalized event is delivered to.
///
/// The names match the functions a sketch defines (`key_pressed`,
/// `mouse_dragged`, ...). Which one fires is decided by the backend
/// adapter; this crate only carries the choice alongside the event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Handler {
    /// A key went down.
    KeyPressed,
    /// A key came up.
    KeyReleased,
    /// A key produced text.
    KeyTyped,
    /// A press followed by a release without dragging.
    MouseClicked,
    /// Second click of the same button in quick succession.
    MouseDoubleClicked,
    /// Pointer moved with a button held.
    MouseDragged,
    /// Pointer moved with no button held.
    MouseMoved,
    /// A mouse button went down.
    MousePressed,
    /// A mouse button came up.
    MouseReleased,
    /// Wheel or trackpad scroll.
    MouseWheel,
}

impl Handler {
    /// Every handler, in callback-name order.
    pub const ALL: [Self; 10] = [
        Self::KeyPressed,
        Self::KeyReleased,
        Self::KeyTyped,
        Self::MouseClicked,
        Self::MouseDoubleClicked,
        Self::MouseDragged,
        Self::MouseMoved,
        Self::MousePressed,
        Self::MouseReleased,
        Self::MouseWheel,
    ];

    /// Callback name as a sketch would define it.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::KeyPressed => "key_pressed",
            Self::KeyReleased => "key_released",
            Self::KeyTyped => "key_typed",
            Self::MouseClicked => "mouse_clicked",
            Self::MouseDoubleClicked => "mouse_double_clicked",
            Self::MouseDragged => "mouse_dragged",
            Self::MouseMoved => "mouse_moved",
            Self::MousePressed => "mouse_pressed",
            Self::MouseReleased => "mouse_released",
            Self::MouseWheel => "mouse_wheel",
        }
    }

    /// Whether this handler receives a key event.
    #[must_use]
    pub const fn is_key(self) -> bool {
        matches!(self, Self::KeyPressed | Self::KeyReleased | Self::KeyTyped)
    }
}

impl fmt::Display for Handler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Handler {
    type Err = EventError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|handler| handler.as_str() == s)
            .ok_or_else(|| EventError::UnknownHandler(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_parse_back() {
        for handler in Handler::ALL {
            assert_eq!(handler.as_str().parse::<Handler>().unwrap(), handler);
        }
        assert!("mouse_scrolled".parse::<Handler>().is_err());
    }

    #[test]
    fn key_handlers() {
        let keys: Vec<_> =
            Handler::ALL.into_iter().filter(|h| h.is_key()).collect();
        assert_eq!(
            keys,
            vec![Handler::KeyPressed, Handler::KeyReleased, Handler::KeyTyped]
        );
    }
}
