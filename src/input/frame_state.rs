//! Per-frame input state read by sketch code (`mouse_x`, `key`, ...).
//!
//! The state is split by event kind: only a [`KeyEvent`] writes
//! [`KeyboardState`] and only a [`MouseEvent`] writes [`MouseState`].
//! Sketch code gets `&FrameState` and cannot write either half.

use glam::IVec2;

use super::button::MouseButton;
use super::event::{Extent, KeyEvent, MouseEvent};
use super::key::Key;
use super::raw::{RawKeyEvent, RawMouseEvent};
use crate::error::EventError;

/// Keyboard slots: the key currently down and whether any key is down.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyboardState {
    pub(crate) key: Option<Key>,
    pub(crate) is_pressed: bool,
}

/// Mouse slots: current and previous position, buttons, motion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MouseState {
    pub(crate) position: IVec2,
    pub(crate) previous: IVec2,
    pub(crate) moved: IVec2,
    pub(crate) is_pressed: bool,
    pub(crate) button: MouseButton,
}

/// Input state as of the most recently processed events.
///
/// Starts with everything at zero, no key and no button. Each processed
/// event overwrites the slots of its kind; nothing is merged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrameState {
    keyboard: KeyboardState,
    mouse: MouseState,
}

impl FrameState {
    /// Fresh state, as before the first frame.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalize a raw key event and write it into the keyboard slots in
    /// one step.
    pub fn record_key(&mut self, raw: &RawKeyEvent, active: bool) -> KeyEvent {
        let event = KeyEvent::new(raw, active);
        event.apply(&mut self.keyboard);
        event
    }

    /// Normalize a raw pointer event and write it into the mouse slots in
    /// one step. The state is left untouched when normalization fails.
    ///
    /// # Errors
    ///
    /// Returns [`EventError::InvalidRawEvent`] when the raw event carries
    /// no position.
    pub fn record_mouse(
        &mut self,
        raw: &RawMouseEvent,
        active: bool,
        extent: Extent,
    ) -> Result<MouseEvent, EventError> {
        let event = MouseEvent::new(raw, active, extent)?;
        event.apply(&mut self.mouse);
        Ok(event)
    }

    /// Keyboard half of the state.
    #[must_use]
    pub fn keyboard(&self) -> &KeyboardState {
        &self.keyboard
    }

    /// Mouse half of the state.
    #[must_use]
    pub fn mouse(&self) -> &MouseState {
        &self.mouse
    }

    /// Key currently down, `None` after a release.
    #[must_use]
    pub fn key(&self) -> Option<&Key> {
        self.keyboard.key.as_ref()
    }

    /// Whether a key is down.
    #[must_use]
    pub fn key_is_pressed(&self) -> bool {
        self.keyboard.is_pressed
    }

    /// Pointer x in sketch space.
    #[must_use]
    pub fn mouse_x(&self) -> i32 {
        self.mouse.position.x
    }

    /// Pointer y in sketch space.
    #[must_use]
    pub fn mouse_y(&self) -> i32 {
        self.mouse.position.y
    }

    /// Pointer x before the last mouse event.
    #[must_use]
    pub fn pmouse_x(&self) -> i32 {
        self.mouse.previous.x
    }

    /// Pointer y before the last mouse event.
    #[must_use]
    pub fn pmouse_y(&self) -> i32 {
        self.mouse.previous.y
    }

    /// Whether a mouse button is down.
    #[must_use]
    pub fn mouse_is_pressed(&self) -> bool {
        self.mouse.is_pressed
    }

    /// Buttons involved in the last mouse event.
    #[must_use]
    pub fn mouse_button(&self) -> &MouseButton {
        &self.mouse.button
    }

    /// `mouse_x - pmouse_x`.
    #[must_use]
    pub fn moved_x(&self) -> i32 {
        self.mouse.moved.x
    }

    /// `mouse_y - pmouse_y`.
    #[must_use]
    pub fn moved_y(&self) -> i32 {
        self.mouse.moved.y
    }
}
