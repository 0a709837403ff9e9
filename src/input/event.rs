//! Normalized sketch events.
//!
//! A [`KeyEvent`] or [`MouseEvent`] is built once from a raw backend event
//! and never changes afterwards. Both share an [`EventBase`] holding the
//! modifier state and whether the key/button is down; [`Event`] is the
//! closed union handed to sketch callbacks.

use std::fmt;
use std::ops::Deref;

use glam::IVec2;

use super::button::MouseButton;
use super::frame_state::{KeyboardState, MouseState};
use super::key::Key;
use super::modifier::Modifier;
use super::raw::{RawKeyEvent, RawMouseEvent};
use crate::error::EventError;

/// Window size in pixels, as reported by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Extent {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Extent {
    /// Create an extent.
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// EventBase
// ─────────────────────────────────────────────────────────────────────────────

/// State shared by every sketch event: held modifiers and whether the
/// key/button is down.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventBase {
    modifiers: Vec<Modifier>,
    pressed: bool,
}

impl EventBase {
    /// Capture modifier state from a raw event. The list is kept exactly
    /// as reported.
    #[must_use]
    pub fn new(modifiers: &[Modifier], active: bool) -> Self {
        Self {
            modifiers: modifiers.to_vec(),
            pressed: active,
        }
    }

    /// Modifiers held during the event.
    #[must_use]
    pub fn modifiers(&self) -> &[Modifier] {
        &self.modifiers
    }

    /// Names of the held modifiers (`"Shift"`, `"Control"`, ...).
    #[must_use]
    pub fn modifier_names(&self) -> Vec<&'static str> {
        self.modifiers.iter().map(|m| m.name()).collect()
    }

    /// Whether the key/button is down. `false` for release events.
    #[must_use]
    pub fn pressed(&self) -> bool {
        self.pressed
    }

    /// Whether the named modifier was held. Unknown names are never held.
    #[must_use]
    pub fn has_modifier(&self, name: &str) -> bool {
        name.parse::<Modifier>()
            .is_ok_and(|modifier| self.modifiers.contains(&modifier))
    }

    /// Was shift held down during the event?
    #[must_use]
    pub fn is_shift_down(&self) -> bool {
        self.modifiers.contains(&Modifier::Shift)
    }

    /// Was ctrl (command on Mac) held down during the event?
    #[must_use]
    pub fn is_ctrl_down(&self) -> bool {
        self.modifiers.contains(&Modifier::Control)
    }

    /// Was alt held down during the event?
    #[must_use]
    pub fn is_alt_down(&self) -> bool {
        self.modifiers.contains(&Modifier::Alt)
    }

    /// Was the meta key (windows/option key) held down?
    #[must_use]
    pub fn is_meta_down(&self) -> bool {
        self.modifiers.contains(&Modifier::Meta)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// KeyEvent
// ─────────────────────────────────────────────────────────────────────────────

/// A normalized keyboard event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyEvent {
    base: EventBase,
    key: Key,
}

impl KeyEvent {
    /// Normalize a raw key event. A raw event without a key name becomes
    /// [`Key::unknown`].
    #[must_use]
    pub fn new(raw: &RawKeyEvent, active: bool) -> Self {
        let base = EventBase::new(&raw.modifiers, active);
        let key = raw.key.as_deref().map_or_else(Key::unknown, |name| {
            Key::new(name, raw.text.as_str())
        });
        Self { base, key }
    }

    /// The key involved.
    #[must_use]
    pub fn key(&self) -> &Key {
        &self.key
    }

    /// Write this event into the keyboard slots of the frame state.
    ///
    /// The current key is only meaningful while it is down, so a release
    /// clears it.
    pub fn apply(&self, state: &mut KeyboardState) {
        state.is_pressed = self.base.pressed;
        state.key = self.base.pressed.then(|| self.key.clone());
    }
}

impl Deref for KeyEvent {
    type Target = EventBase;

    fn deref(&self) -> &EventBase {
        &self.base
    }
}

impl fmt::Display for KeyEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let press = if self.base.pressed {
            "pressed"
        } else {
            "not-pressed"
        };
        write!(f, "KeyEvent({press} {})", self.key)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// MouseEvent
// ─────────────────────────────────────────────────────────────────────────────

/// A normalized pointer event in sketch space (bottom-left origin).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MouseEvent {
    base: EventBase,
    position: IVec2,
    scroll: IVec2,
    button: MouseButton,
}

impl MouseEvent {
    /// Normalize a raw pointer event against the current window size.
    ///
    /// `x` is clamped to `[0, width]`; `y` is flipped from the backend's
    /// top-left origin and clamped to `[0, height]`. The raw delta is
    /// truncated toward zero.
    ///
    /// # Errors
    ///
    /// Returns [`EventError::InvalidRawEvent`] when the raw event carries
    /// no position.
    pub fn new(
        raw: &RawMouseEvent,
        active: bool,
        extent: Extent,
    ) -> Result<Self, EventError> {
        let base = EventBase::new(&raw.modifiers, active);
        let pos = raw.pos.ok_or(EventError::InvalidRawEvent {
            kind: "mouse",
            field: "pos",
        })?;

        #[allow(clippy::cast_precision_loss)]
        let (width, height) = (extent.width as f32, extent.height as f32);
        #[allow(clippy::cast_possible_truncation)]
        let position = IVec2::new(
            pos.x.clamp(0.0, width) as i32,
            (height - pos.y).clamp(0.0, height) as i32,
        );

        let button =
            MouseButton::new(raw.buttons.iter().copied().chain(raw.button));

        Ok(Self {
            base,
            position,
            scroll: raw.delta.as_ivec2(),
            button,
        })
    }

    /// Horizontal position in sketch space.
    #[must_use]
    pub fn x(&self) -> i32 {
        self.position.x
    }

    /// Vertical position in sketch space (0 at the bottom edge).
    #[must_use]
    pub fn y(&self) -> i32 {
        self.position.y
    }

    /// `(x, y)` in sketch space.
    #[must_use]
    pub fn position(&self) -> IVec2 {
        self.position
    }

    /// Integer wheel/move delta carried by the event.
    #[must_use]
    pub fn scroll(&self) -> IVec2 {
        self.scroll
    }

    /// Wheel notches: the vertical component of [`scroll`](Self::scroll).
    #[must_use]
    pub fn count(&self) -> i32 {
        self.scroll.y
    }

    /// Buttons involved in the event.
    #[must_use]
    pub fn button(&self) -> &MouseButton {
        &self.button
    }

    /// Write this event into the mouse slots of the frame state.
    ///
    /// The previous position is shifted into `pmouse` first, so `moved`
    /// is the distance from the last stored position, not the raw delta.
    pub fn apply(&self, state: &mut MouseState) {
        state.previous = state.position;
        state.position = self.position;
        state.is_pressed = self.base.pressed;
        state.button = self.button.clone();
        state.moved = state.position - state.previous;
    }
}

impl Deref for MouseEvent {
    type Target = EventBase;

    fn deref(&self) -> &EventBase {
        &self.base
    }
}

impl fmt::Display for MouseEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let press = if self.base.pressed {
            "pressed"
        } else {
            "not-pressed"
        };
        write!(
            f,
            "MouseEvent({press} at ({}, {}))",
            self.position.x, self.position.y
        )
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Event
// ─────────────────────────────────────────────────────────────────────────────

/// Any normalized sketch event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Keyboard event.
    Key(KeyEvent),
    /// Pointer event.
    Mouse(MouseEvent),
}

impl Event {
    /// The key event, if this is one.
    #[must_use]
    pub fn as_key(&self) -> Option<&KeyEvent> {
        match self {
            Self::Key(event) => Some(event),
            Self::Mouse(_) => None,
        }
    }

    /// The mouse event, if this is one.
    #[must_use]
    pub fn as_mouse(&self) -> Option<&MouseEvent> {
        match self {
            Self::Mouse(event) => Some(event),
            Self::Key(_) => None,
        }
    }
}

impl Deref for Event {
    type Target = EventBase;

    fn deref(&self) -> &EventBase {
        match self {
            Self::Key(event) => &event.base,
            Self::Mouse(event) => &event.base,
        }
    }
}

impl From<KeyEvent> for Event {
    fn from(event: KeyEvent) -> Self {
        Self::Key(event)
    }
}

impl From<MouseEvent> for Event {
    fn from(event: MouseEvent) -> Self {
        Self::Mouse(event)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Key(event) => fmt::Display::fmt(event, f),
            Self::Mouse(event) => fmt::Display::fmt(event, f),
        }
    }
}
