use std::time::Duration;

use glam::Vec2;
use web_time::Instant;

use super::button::ButtonCode;

/// Result of processing a mouse-up through the multi-click state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ClickResult {
    /// Drag, or release of a button that was never pressed.
    NoAction,
    /// Press and release in place.
    SingleClick,
    /// Second click of the same button within the double-click window.
    DoubleClick,
}

/// Tracks press position, drag state and the multi-click state machine.
#[derive(Debug, Clone)]
pub(crate) struct ClickState {
    press: Option<(ButtonCode, Vec2)>,
    is_dragging: bool,
    last_click: Option<(ButtonCode, Instant)>,
    double_click: Duration,
    drag_threshold: f32,
}

impl ClickState {
    pub(crate) fn new(double_click: Duration, drag_threshold: f32) -> Self {
        Self {
            press: None,
            is_dragging: false,
            last_click: None,
            double_click,
            drag_threshold,
        }
    }

    /// Remember where `button` went down.
    pub(crate) fn handle_mouse_down(&mut self, button: ButtonCode, pos: Vec2) {
        self.press = Some((button, pos));
        self.is_dragging = false;
    }

    /// Mark a drag once the pointer leaves the threshold around the press.
    pub(crate) fn handle_mouse_position(&mut self, pos: Vec2) {
        if let Some((_, start)) = self.press {
            if pos.distance_squared(start)
                > self.drag_threshold * self.drag_threshold
            {
                self.is_dragging = true;
            }
        }
    }

    /// Process a mouse-up and report what kind of click happened.
    pub(crate) fn process_mouse_up(
        &mut self,
        button: ButtonCode,
        now: Instant,
    ) -> ClickResult {
        let press = self.press.take();
        let was_dragging = self.is_dragging;
        self.is_dragging = false;

        let pressed_here = press.is_some_and(|(down, _)| down == button);
        if was_dragging || !pressed_here {
            self.last_click = None;
            return ClickResult::NoAction;
        }

        let is_double = self.last_click.is_some_and(|(last, at)| {
            last == button && now.duration_since(at) < self.double_click
        });

        if is_double {
            // A third click starts a new pair.
            self.last_click = None;
            ClickResult::DoubleClick
        } else {
            self.last_click = Some((button, now));
            ClickResult::SingleClick
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> ClickState {
        ClickState::new(Duration::from_millis(400), 1.0)
    }

    fn click(
        state: &mut ClickState,
        button: ButtonCode,
        now: Instant,
    ) -> ClickResult {
        state.handle_mouse_down(button, Vec2::ZERO);
        state.process_mouse_up(button, now)
    }

    #[test]
    fn press_release_in_place_is_a_click() {
        let mut s = state();
        assert_eq!(
            click(&mut s, ButtonCode::Left, Instant::now()),
            ClickResult::SingleClick
        );
    }

    #[test]
    fn quick_second_click_is_double() {
        let mut s = state();
        let t0 = Instant::now();
        assert_eq!(click(&mut s, ButtonCode::Left, t0), ClickResult::SingleClick);
        assert_eq!(
            click(&mut s, ButtonCode::Left, t0 + Duration::from_millis(150)),
            ClickResult::DoubleClick
        );
        assert_eq!(
            click(&mut s, ButtonCode::Left, t0 + Duration::from_millis(300)),
            ClickResult::SingleClick
        );
    }

    #[test]
    fn slow_second_click_is_single() {
        let mut s = state();
        let t0 = Instant::now();
        let _ = click(&mut s, ButtonCode::Left, t0);
        assert_eq!(
            click(&mut s, ButtonCode::Left, t0 + Duration::from_millis(500)),
            ClickResult::SingleClick
        );
    }

    #[test]
    fn different_buttons_do_not_pair() {
        let mut s = state();
        let t0 = Instant::now();
        let _ = click(&mut s, ButtonCode::Left, t0);
        assert_eq!(
            click(&mut s, ButtonCode::Right, t0 + Duration::from_millis(50)),
            ClickResult::SingleClick
        );
    }

    #[test]
    fn drag_suppresses_click() {
        let mut s = state();
        s.handle_mouse_down(ButtonCode::Left, Vec2::new(10.0, 10.0));
        s.handle_mouse_position(Vec2::new(10.5, 10.5));
        s.handle_mouse_position(Vec2::new(20.0, 10.0));
        assert_eq!(
            s.process_mouse_up(ButtonCode::Left, Instant::now()),
            ClickResult::NoAction
        );
    }

    #[test]
    fn jitter_within_threshold_still_clicks() {
        let mut s = state();
        s.handle_mouse_down(ButtonCode::Left, Vec2::new(10.0, 10.0));
        s.handle_mouse_position(Vec2::new(10.5, 10.5));
        assert_eq!(
            s.process_mouse_up(ButtonCode::Left, Instant::now()),
            ClickResult::SingleClick
        );
    }

    #[test]
    fn release_without_press_is_ignored() {
        let mut s = state();
        assert_eq!(
            s.process_mouse_up(ButtonCode::Middle, Instant::now()),
            ClickResult::NoAction
        );
    }
}
