//! Backend-adapter state that turns primitive window notifications into
//! classified [`RawInput`]s.
//!
//! Windowing libraries report bare facts ("cursor at (x, y)", "left button
//! up") without the context sketch callbacks need: which buttons are still
//! held, whether a motion is a drag, whether a release completes a click.
//! [`PointerTracker`] remembers that context between notifications.

use glam::Vec2;
use web_time::Instant;

use super::button::ButtonCode;
use super::modifier::Modifier;
use super::mouse::{ClickResult, ClickState};
use super::raw::{KeyAction, MouseAction, RawInput, RawKeyEvent, RawMouseEvent};
use crate::options::PointerOptions;

/// Cursor, button and modifier state shared across notifications.
#[derive(Debug, Clone)]
pub struct PointerTracker {
    cursor: Option<Vec2>,
    held: Vec<ButtonCode>,
    modifiers: Vec<Modifier>,
    clicks: ClickState,
    pixel_scroll_scale: f32,
    scroll_remainder: Vec2,
}

impl PointerTracker {
    /// Create a tracker with the given click/drag/wheel parameters.
    #[must_use]
    pub fn new(options: &PointerOptions) -> Self {
        Self {
            cursor: None,
            held: Vec::new(),
            modifiers: Vec::new(),
            clicks: ClickState::new(
                options.double_click_threshold(),
                options.drag_threshold,
            ),
            pixel_scroll_scale: options.pixel_scroll_scale,
            scroll_remainder: Vec2::ZERO,
        }
    }

    /// Last known cursor position in backend pixels.
    #[must_use]
    pub fn cursor(&self) -> Option<Vec2> {
        self.cursor
    }

    /// Buttons currently held, in press order.
    #[must_use]
    pub fn held(&self) -> &[ButtonCode] {
        &self.held
    }

    /// Modifiers currently held.
    #[must_use]
    pub fn modifiers(&self) -> &[Modifier] {
        &self.modifiers
    }

    /// Position reported with button and wheel events: the last known
    /// cursor, or the backend origin before the first motion.
    fn position(&self) -> Vec2 {
        self.cursor.unwrap_or_default()
    }

    /// Replace the held modifier set.
    pub fn set_modifiers(&mut self, modifiers: Vec<Modifier>) {
        self.modifiers = modifiers;
    }

    /// Cursor moved to `(x, y)`. Reported as a drag while any button is
    /// held, otherwise as a move. The delta is the motion since the last
    /// known position.
    pub fn cursor_moved(&mut self, x: f32, y: f32) -> RawInput {
        let pos = Vec2::new(x, y);
        let delta = self.cursor.map_or(Vec2::ZERO, |last| pos - last);
        self.cursor = Some(pos);
        self.clicks.handle_mouse_position(pos);

        let action = if self.held.is_empty() {
            MouseAction::Moved
        } else {
            MouseAction::Dragged
        };
        RawInput::Mouse {
            action,
            event: RawMouseEvent {
                pos: self.cursor,
                delta,
                buttons: self.held.clone(),
                button: None,
                modifiers: self.modifiers.clone(),
            },
        }
    }

    /// A button changed state, timestamped now.
    pub fn button_changed(
        &mut self,
        button: ButtonCode,
        pressed: bool,
    ) -> Vec<RawInput> {
        self.button_changed_at(button, pressed, Instant::now())
    }

    /// A button changed state at `now`.
    ///
    /// A press yields `Pressed`. A release yields `Released`, followed by
    /// `Clicked` when the pointer stayed put, followed by `DoubleClicked`
    /// when it completes a quick pair.
    pub fn button_changed_at(
        &mut self,
        button: ButtonCode,
        pressed: bool,
        now: Instant,
    ) -> Vec<RawInput> {
        self.held.retain(|held| *held != button);
        let event = RawMouseEvent {
            pos: Some(self.position()),
            delta: Vec2::ZERO,
            buttons: self.held.clone(),
            button: Some(button),
            modifiers: self.modifiers.clone(),
        };

        if pressed {
            self.held.push(button);
            self.clicks.handle_mouse_down(button, self.position());
            return vec![RawInput::Mouse {
                action: MouseAction::Pressed,
                event,
            }];
        }

        let followups: &[MouseAction] =
            match self.clicks.process_mouse_up(button, now) {
                ClickResult::NoAction => &[],
                ClickResult::SingleClick => &[MouseAction::Clicked],
                ClickResult::DoubleClick => {
                    &[MouseAction::Clicked, MouseAction::DoubleClicked]
                }
            };

        std::iter::once(MouseAction::Released)
            .chain(followups.iter().copied())
            .map(|action| RawInput::Mouse {
                action,
                event: event.clone(),
            })
            .collect()
    }

    /// Wheel scrolled by whole lines/notches.
    pub fn wheel_lines(&self, dx: f32, dy: f32) -> RawInput {
        self.wheel(Vec2::new(dx, dy))
    }

    /// Wheel or trackpad scrolled by pixels.
    ///
    /// Pixels accumulate until they add up to a whole notch
    /// (`1 / pixel_scroll_scale` pixels). Only whole notches are reported;
    /// the rest carries into the next call. Returns `None` while less than
    /// a notch has built up.
    pub fn wheel_pixels(&mut self, dx: f32, dy: f32) -> Option<RawInput> {
        let per_notch = self.pixel_scroll_scale.recip();
        if !per_notch.is_finite() {
            return None;
        }
        let total = self.scroll_remainder + Vec2::new(dx, dy);
        let notches = (total / per_notch).trunc();
        self.scroll_remainder = total - notches * per_notch;
        (notches != Vec2::ZERO).then(|| self.wheel(notches))
    }

    fn wheel(&self, delta: Vec2) -> RawInput {
        RawInput::Mouse {
            action: MouseAction::Wheel,
            event: RawMouseEvent {
                pos: Some(self.position()),
                delta,
                buttons: self.held.clone(),
                button: None,
                modifiers: self.modifiers.clone(),
            },
        }
    }

    /// A key changed state.
    ///
    /// A press yields `Pressed`, followed by `Typed` when the key produced
    /// text. A release yields `Released`.
    pub fn key_changed(
        &self,
        key: Option<String>,
        text: String,
        pressed: bool,
    ) -> Vec<RawInput> {
        let event = RawKeyEvent {
            key,
            text,
            modifiers: self.modifiers.clone(),
        };
        if !pressed {
            return vec![RawInput::Key {
                action: KeyAction::Released,
                event,
            }];
        }

        let typed = !event.text.is_empty();
        let mut inputs = vec![RawInput::Key {
            action: KeyAction::Pressed,
            event: event.clone(),
        }];
        if typed {
            inputs.push(RawInput::Key {
                action: KeyAction::Typed,
                event,
            });
        }
        inputs
    }
}

impl Default for PointerTracker {
    fn default() -> Self {
        Self::new(&PointerOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::input::Handler;

    fn handlers(inputs: &[RawInput]) -> Vec<Handler> {
        inputs.iter().map(RawInput::handler).collect()
    }

    fn mouse_event(input: &RawInput) -> &RawMouseEvent {
        match input {
            RawInput::Mouse { event, .. } => event,
            RawInput::Key { .. } => panic!("expected a mouse input"),
        }
    }

    #[test]
    fn motion_without_buttons_is_a_move() {
        let mut tracker = PointerTracker::default();
        let first = tracker.cursor_moved(10.0, 20.0);
        assert_eq!(first.handler(), Handler::MouseMoved);
        assert_eq!(mouse_event(&first).delta, Vec2::ZERO);

        let second = tracker.cursor_moved(13.0, 16.0);
        assert_eq!(mouse_event(&second).delta, Vec2::new(3.0, -4.0));
        assert_eq!(mouse_event(&second).pos, Some(Vec2::new(13.0, 16.0)));
    }

    #[test]
    fn motion_with_button_held_is_a_drag() {
        let mut tracker = PointerTracker::default();
        let _ = tracker.cursor_moved(0.0, 0.0);
        let _ = tracker.button_changed(ButtonCode::Left, true);
        let input = tracker.cursor_moved(5.0, 0.0);
        assert_eq!(input.handler(), Handler::MouseDragged);
        assert_eq!(mouse_event(&input).buttons, vec![ButtonCode::Left]);
        assert_eq!(mouse_event(&input).button, None);
    }

    #[test]
    fn press_reports_causing_button_separately() {
        let mut tracker = PointerTracker::default();
        let _ = tracker.cursor_moved(0.0, 0.0);
        let _ = tracker.button_changed(ButtonCode::Right, true);
        let inputs = tracker.button_changed(ButtonCode::Left, true);
        assert_eq!(handlers(&inputs), vec![Handler::MousePressed]);
        let event = mouse_event(&inputs[0]);
        assert_eq!(event.buttons, vec![ButtonCode::Right]);
        assert_eq!(event.button, Some(ButtonCode::Left));
        assert_eq!(tracker.held(), &[ButtonCode::Right, ButtonCode::Left]);
    }

    #[test]
    fn release_in_place_clicks() {
        let mut tracker = PointerTracker::default();
        let _ = tracker.cursor_moved(50.0, 50.0);
        let t0 = Instant::now();
        let _ = tracker.button_changed_at(ButtonCode::Left, true, t0);
        let inputs = tracker.button_changed_at(ButtonCode::Left, false, t0);
        assert_eq!(
            handlers(&inputs),
            vec![Handler::MouseReleased, Handler::MouseClicked]
        );
        assert!(tracker.held().is_empty());
        assert_eq!(mouse_event(&inputs[0]).button, Some(ButtonCode::Left));
    }

    #[test]
    fn two_quick_clicks_double_click() {
        let mut tracker = PointerTracker::default();
        let _ = tracker.cursor_moved(50.0, 50.0);
        let t0 = Instant::now();
        let t1 = t0 + Duration::from_millis(100);
        let _ = tracker.button_changed_at(ButtonCode::Left, true, t0);
        let _ = tracker.button_changed_at(ButtonCode::Left, false, t0);
        let _ = tracker.button_changed_at(ButtonCode::Left, true, t1);
        let inputs = tracker.button_changed_at(ButtonCode::Left, false, t1);
        assert_eq!(
            handlers(&inputs),
            vec![
                Handler::MouseReleased,
                Handler::MouseClicked,
                Handler::MouseDoubleClicked
            ]
        );
    }

    #[test]
    fn drag_release_does_not_click() {
        let mut tracker = PointerTracker::default();
        let _ = tracker.cursor_moved(0.0, 0.0);
        let _ = tracker.button_changed(ButtonCode::Left, true);
        let _ = tracker.cursor_moved(30.0, 0.0);
        let inputs = tracker.button_changed(ButtonCode::Left, false);
        assert_eq!(handlers(&inputs), vec![Handler::MouseReleased]);
    }

    #[test]
    fn button_before_any_motion_uses_origin() {
        let mut tracker = PointerTracker::default();
        let inputs = tracker.button_changed(ButtonCode::Left, true);
        assert_eq!(mouse_event(&inputs[0]).pos, Some(Vec2::ZERO));
        assert_eq!(tracker.cursor(), None);

        let input = tracker.wheel_lines(0.0, 1.0);
        assert_eq!(mouse_event(&input).pos, Some(Vec2::ZERO));

        // The first real motion still reports no delta.
        let input = tracker.cursor_moved(12.0, 7.0);
        assert_eq!(mouse_event(&input).delta, Vec2::ZERO);
    }

    #[test]
    fn pixel_wheel_is_scaled() {
        let mut tracker = PointerTracker::default();
        let _ = tracker.cursor_moved(0.0, 0.0);
        let input = tracker.wheel_pixels(0.0, 300.0).unwrap();
        assert_eq!(input.handler(), Handler::MouseWheel);
        assert_eq!(mouse_event(&input).delta, Vec2::new(0.0, 3.0));

        let input = tracker.wheel_lines(0.0, -2.0);
        assert_eq!(mouse_event(&input).delta, Vec2::new(0.0, -2.0));
    }

    #[test]
    fn small_pixel_scrolls_carry_over() {
        let mut tracker = PointerTracker::default();
        assert!(tracker.wheel_pixels(0.0, 40.0).is_none());
        assert!(tracker.wheel_pixels(0.0, 40.0).is_none());
        let input = tracker.wheel_pixels(0.0, 40.0).unwrap();
        assert_eq!(mouse_event(&input).delta, Vec2::new(0.0, 1.0));

        // 20 px left over; scrolling back cancels it before counting down.
        assert!(tracker.wheel_pixels(0.0, -60.0).is_none());
        let input = tracker.wheel_pixels(0.0, -60.0).unwrap();
        assert_eq!(mouse_event(&input).delta, Vec2::new(0.0, -1.0));
    }

    #[test]
    fn zero_pixel_scale_never_scrolls() {
        let mut tracker = PointerTracker::new(&PointerOptions {
            pixel_scroll_scale: 0.0,
            ..PointerOptions::default()
        });
        assert!(tracker.wheel_pixels(0.0, 1000.0).is_none());
    }

    #[test]
    fn key_press_with_text_is_also_typed() {
        let mut tracker = PointerTracker::default();
        tracker.set_modifiers(vec![Modifier::Shift]);
        let inputs = tracker.key_changed(Some("a".into()), "A".into(), true);
        assert_eq!(
            handlers(&inputs),
            vec![Handler::KeyPressed, Handler::KeyTyped]
        );
        let RawInput::Key { event, .. } = &inputs[1] else {
            panic!("expected a key input");
        };
        assert_eq!(event.modifiers, vec![Modifier::Shift]);

        let inputs = tracker.key_changed(Some("Enter".into()), String::new(), true);
        assert_eq!(handlers(&inputs), vec![Handler::KeyPressed]);

        let inputs = tracker.key_changed(None, String::new(), false);
        assert_eq!(handlers(&inputs), vec![Handler::KeyReleased]);
    }
}
