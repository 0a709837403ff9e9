//! Normalizes raw inputs and keeps the frame state current.
//!
//! The `InputProcessor` owns the [`FrameState`] and the window
//! [`Extent`]. It is the only thing that sits between backend adapters and
//! the sketch's handler dispatch: every raw input goes in, a
//! [`Dispatch`] naming the callback and carrying the normalized event
//! comes out, and the frame state already reflects that event.

use super::event::{Event, Extent};
use super::frame_state::FrameState;
use super::handler::Handler;
use super::raw::RawInput;
use crate::error::EventError;

/// A normalized event and the sketch callback it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dispatch {
    /// Callback to invoke.
    pub handler: Handler,
    /// Event to pass to it.
    pub event: Event,
}

/// Converts [`RawInput`]s into [`Dispatch`]es, updating the frame state
/// as it goes.
///
/// # Usage
///
/// ```
/// # use sketch_input::{Extent, InputProcessor, RawInput, MouseAction, RawMouseEvent};
/// let mut processor = InputProcessor::new(Extent::new(640, 360));
/// let dispatch = processor
///     .handle(RawInput::Mouse {
///         action: MouseAction::Moved,
///         event: RawMouseEvent::at(10.0, 350.0),
///     })
///     .unwrap();
/// assert_eq!(dispatch.handler.as_str(), "mouse_moved");
/// assert_eq!(processor.frame_state().mouse_y(), 10);
/// ```
#[derive(Debug, Clone)]
pub struct InputProcessor {
    /// Per-frame state read by sketch code.
    state: FrameState,
    /// Current window size.
    extent: Extent,
}

impl InputProcessor {
    /// Create a processor for a window of the given size.
    #[must_use]
    pub fn new(extent: Extent) -> Self {
        Self {
            state: FrameState::new(),
            extent,
        }
    }

    /// Read-only access to the frame state.
    #[must_use]
    pub fn frame_state(&self) -> &FrameState {
        &self.state
    }

    /// Current window size.
    #[must_use]
    pub fn extent(&self) -> Extent {
        self.extent
    }

    /// Window resized. Affects events processed from now on.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.extent = Extent::new(width, height);
    }

    /// Normalize one raw input and write it into the frame state.
    ///
    /// # Errors
    ///
    /// Returns [`EventError::InvalidRawEvent`] when a raw mouse event has
    /// no position. The frame state is unchanged in that case.
    pub fn handle(&mut self, input: RawInput) -> Result<Dispatch, EventError> {
        let handler = input.handler();
        let event = match input {
            RawInput::Key { action, event } => Event::Key(
                self.state.record_key(&event, action.is_active()),
            ),
            RawInput::Mouse { action, event } => {
                let normalized = self
                    .state
                    .record_mouse(&event, action.is_active(), self.extent)
                    .inspect_err(|e| log::warn!("{handler}: {e}"))?;
                Event::Mouse(normalized)
            }
        };
        log::trace!("{handler}: {event}");
        Ok(Dispatch { handler, event })
    }

    /// Handle a batch of inputs in order, skipping (and logging) the ones
    /// that fail to normalize.
    pub fn handle_all(
        &mut self,
        inputs: impl IntoIterator<Item = RawInput>,
    ) -> Vec<Dispatch> {
        inputs
            .into_iter()
            .filter_map(|input| self.handle(input).ok())
            .collect()
    }
}

impl Default for InputProcessor {
    fn default() -> Self {
        Self::new(Extent::new(640, 360))
    }
}
