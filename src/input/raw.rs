//! Backend-neutral raw events.
//!
//! Backend adapters fill these structs from whatever their windowing
//! library reports. Nothing here is normalized yet: positions are in the
//! backend's top-left pixel space and deltas are unrounded.

use glam::Vec2;

use super::button::ButtonCode;
use super::handler::Handler;
use super::modifier::Modifier;

/// A keyboard notification as reported by a backend.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawKeyEvent {
    /// Backend key name, `None` when the backend could not identify the key.
    pub key: Option<String>,
    /// Text produced by the key, empty for non-printing keys.
    pub text: String,
    /// Modifiers held at the time of the event.
    pub modifiers: Vec<Modifier>,
}

impl RawKeyEvent {
    /// A key with a name and the text it produced.
    #[must_use]
    pub fn new(key: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            key: Some(key.into()),
            text: text.into(),
            modifiers: Vec::new(),
        }
    }

    /// Attach held modifiers.
    #[must_use]
    pub fn with_modifiers(mut self, modifiers: Vec<Modifier>) -> Self {
        self.modifiers = modifiers;
        self
    }
}

/// A pointer notification as reported by a backend.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawMouseEvent {
    /// Pointer position in backend (top-left origin) pixels. Required.
    pub pos: Option<Vec2>,
    /// Pointer motion or wheel delta carried by the event.
    pub delta: Vec2,
    /// Buttons held while the event happened.
    pub buttons: Vec<ButtonCode>,
    /// Button that caused the event, if any.
    pub button: Option<ButtonCode>,
    /// Modifiers held at the time of the event.
    pub modifiers: Vec<Modifier>,
}

impl RawMouseEvent {
    /// A pointer event at `pos` with no delta and no buttons.
    #[must_use]
    pub fn at(x: f32, y: f32) -> Self {
        Self {
            pos: Some(Vec2::new(x, y)),
            ..Self::default()
        }
    }

    /// Set the motion/wheel delta.
    #[must_use]
    pub fn with_delta(mut self, dx: f32, dy: f32) -> Self {
        self.delta = Vec2::new(dx, dy);
        self
    }

    /// Set the held buttons.
    #[must_use]
    pub fn with_buttons(mut self, buttons: Vec<ButtonCode>) -> Self {
        self.buttons = buttons;
        self
    }

    /// Set the button that caused the event.
    #[must_use]
    pub fn with_button(mut self, button: ButtonCode) -> Self {
        self.button = Some(button);
        self
    }

    /// Attach held modifiers.
    #[must_use]
    pub fn with_modifiers(mut self, modifiers: Vec<Modifier>) -> Self {
        self.modifiers = modifiers;
        self
    }
}

/// What happened to the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    /// Key went down.
    Pressed,
    /// Key came up.
    Released,
    /// Key produced text.
    Typed,
}

impl KeyAction {
    /// Handler this action is delivered to.
    #[must_use]
    pub const fn handler(self) -> Handler {
        match self {
            Self::Pressed => Handler::KeyPressed,
            Self::Released => Handler::KeyReleased,
            Self::Typed => Handler::KeyTyped,
        }
    }

    /// Whether the key is down during this action.
    #[must_use]
    pub const fn is_active(self) -> bool {
        matches!(self, Self::Pressed | Self::Typed)
    }
}

/// What happened to the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseAction {
    /// Button went down.
    Pressed,
    /// Button came up.
    Released,
    /// Press and release without dragging.
    Clicked,
    /// Second click in quick succession.
    DoubleClicked,
    /// Moved with a button held.
    Dragged,
    /// Moved with no button held.
    Moved,
    /// Wheel or trackpad scroll.
    Wheel,
}

impl MouseAction {
    /// Handler this action is delivered to.
    #[must_use]
    pub const fn handler(self) -> Handler {
        match self {
            Self::Pressed => Handler::MousePressed,
            Self::Released => Handler::MouseReleased,
            Self::Clicked => Handler::MouseClicked,
            Self::DoubleClicked => Handler::MouseDoubleClicked,
            Self::Dragged => Handler::MouseDragged,
            Self::Moved => Handler::MouseMoved,
            Self::Wheel => Handler::MouseWheel,
        }
    }

    /// Whether a button is down during this action. Clicks are reported
    /// after the release, so they are not.
    #[must_use]
    pub const fn is_active(self) -> bool {
        matches!(self, Self::Pressed | Self::Dragged)
    }
}

/// One raw notification plus the action the backend classified it as.
#[derive(Debug, Clone, PartialEq)]
pub enum RawInput {
    /// Keyboard notification.
    Key {
        /// Classified action.
        action: KeyAction,
        /// Raw payload.
        event: RawKeyEvent,
    },
    /// Pointer notification.
    Mouse {
        /// Classified action.
        action: MouseAction,
        /// Raw payload.
        event: RawMouseEvent,
    },
}

impl RawInput {
    /// Handler the normalized event will be delivered to.
    #[must_use]
    pub fn handler(&self) -> Handler {
        match self {
            Self::Key { action, .. } => action.handler(),
            Self::Mouse { action, .. } => action.handler(),
        }
    }
}
