//! Input handling: raw backend events, their normalized sketch-event form,
//! and the frame state the events keep current.

/// winit backend adapter.
#[cfg(feature = "viewer")]
pub mod backend;
/// Mouse buttons and button sets.
pub mod button;
/// Normalized key and mouse events.
pub mod event;
/// Per-frame input state.
pub mod frame_state;
/// Sketch callback names.
pub mod handler;
/// Keyboard keys.
pub mod key;
/// Modifier keys.
pub mod modifier;
/// Multi-click state machine.
pub(crate) mod mouse;
/// Normalizes raw inputs and updates the frame state.
pub mod processor;
/// Backend-neutral raw events.
pub mod raw;
/// Adapter state turning window notifications into raw inputs.
pub mod tracker;

#[cfg(feature = "viewer")]
pub use backend::WinitAdapter;
pub use button::{ButtonCode, MouseButton};
pub use event::{Event, EventBase, Extent, KeyEvent, MouseEvent};
pub use frame_state::{FrameState, KeyboardState, MouseState};
pub use handler::Handler;
pub use key::{Key, UNKNOWN_KEY};
pub use modifier::{parse_modifiers, Modifier};
pub use processor::{Dispatch, InputProcessor};
pub use raw::{KeyAction, MouseAction, RawInput, RawKeyEvent, RawMouseEvent};
pub use tracker::PointerTracker;
