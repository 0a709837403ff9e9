//! winit backend adapter.
//!
//! Translates [`WindowEvent`]s into [`RawInput`]s through a
//! [`PointerTracker`]. Only compiled with the `viewer` feature.

use winit::event::{ElementState, MouseScrollDelta, WindowEvent};
use winit::keyboard::{Key as WinitKey, ModifiersState};

use super::button::ButtonCode;
use super::modifier::Modifier;
use super::raw::RawInput;
use super::tracker::PointerTracker;
use crate::options::PointerOptions;

/// Feeds winit window events into a [`PointerTracker`].
#[derive(Debug, Clone)]
pub struct WinitAdapter {
    tracker: PointerTracker,
}

impl WinitAdapter {
    /// Create an adapter with the given click/drag/wheel parameters.
    #[must_use]
    pub fn new(options: &PointerOptions) -> Self {
        Self {
            tracker: PointerTracker::new(options),
        }
    }

    /// The underlying tracker.
    #[must_use]
    pub fn tracker(&self) -> &PointerTracker {
        &self.tracker
    }

    /// Translate one window event. Events that carry no input (resize,
    /// redraw, focus, ...) produce nothing.
    #[allow(clippy::cast_possible_truncation)]
    pub fn translate(&mut self, event: &WindowEvent) -> Vec<RawInput> {
        match event {
            WindowEvent::ModifiersChanged(modifiers) => {
                self.tracker.set_modifiers(modifier_list(modifiers.state()));
                Vec::new()
            }
            WindowEvent::CursorMoved { position, .. } => {
                vec![self
                    .tracker
                    .cursor_moved(position.x as f32, position.y as f32)]
            }
            WindowEvent::MouseInput { state, button, .. } => {
                let Some(code) = button_code(*button) else {
                    log::debug!("ignoring unsupported mouse button {button:?}");
                    return Vec::new();
                };
                self.tracker
                    .button_changed(code, *state == ElementState::Pressed)
            }
            WindowEvent::MouseWheel { delta, .. } => match delta {
                MouseScrollDelta::LineDelta(x, y) => {
                    vec![self.tracker.wheel_lines(*x, *y)]
                }
                MouseScrollDelta::PixelDelta(pos) => self
                    .tracker
                    .wheel_pixels(pos.x as f32, pos.y as f32)
                    .into_iter()
                    .collect(),
            },
            WindowEvent::KeyboardInput { event, .. } => {
                let text = event
                    .text
                    .as_ref()
                    .map(ToString::to_string)
                    .unwrap_or_default();
                self.tracker.key_changed(
                    key_name(&event.logical_key),
                    text,
                    event.state == ElementState::Pressed,
                )
            }
            _ => Vec::new(),
        }
    }
}

impl Default for WinitAdapter {
    fn default() -> Self {
        Self::new(&PointerOptions::default())
    }
}

/// Map a winit button onto the three supported codes.
fn button_code(button: winit::event::MouseButton) -> Option<ButtonCode> {
    match button {
        winit::event::MouseButton::Left => Some(ButtonCode::Left),
        winit::event::MouseButton::Right => Some(ButtonCode::Right),
        winit::event::MouseButton::Middle => Some(ButtonCode::Middle),
        _ => None,
    }
}

/// Named keys use their variant name (`Enter`, `ArrowLeft`), character
/// keys their character. Dead and unidentified keys have no name.
fn key_name(key: &WinitKey) -> Option<String> {
    match key {
        WinitKey::Named(named) => Some(format!("{named:?}")),
        WinitKey::Character(text) => Some(text.to_string()),
        WinitKey::Unidentified(_) | WinitKey::Dead(_) => None,
    }
}

fn modifier_list(state: ModifiersState) -> Vec<Modifier> {
    [
        (state.shift_key(), Modifier::Shift),
        (state.control_key(), Modifier::Control),
        (state.alt_key(), Modifier::Alt),
        (state.super_key(), Modifier::Meta),
    ]
    .into_iter()
    .filter_map(|(held, modifier)| held.then_some(modifier))
    .collect()
}
