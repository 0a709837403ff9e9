// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits (thresholds in clippy.toml)
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Input-event normalization for creative-coding sketches.
//!
//! Windowing backends report input in their own shapes: top-left pixel
//! coordinates, backend-specific key and button identifiers, their own
//! idea of "no value". This crate turns those reports into one event model
//! that sketch callbacks (`key_pressed`, `mouse_dragged`, ...) and the
//! per-frame input state (`mouse_x`, `key`, `mouse_is_pressed`, ...) can
//! rely on regardless of the backend.
//!
//! # Key entry points
//!
//! - [`input::InputProcessor`] - normalizes raw inputs and keeps the frame
//!   state current
//! - [`input::FrameState`] - what sketch code reads between events
//! - [`input::Key`] / [`input::MouseButton`] - flexible-equality identities
//!   (`key == "enter"`, `button == "left"`)
//! - [`input::PointerTracker`] - adapter state for backends that only report
//!   primitive notifications
//! - [`options::InputOptions`] - click/drag/wheel tuning with TOML presets
//!
//! # Architecture
//!
//! A backend adapter produces [`input::RawInput`] values. The processor
//! builds a [`input::KeyEvent`] or [`input::MouseEvent`] from each one
//! (flipping the y axis so the origin sits at the bottom-left), writes it
//! into the frame state in the same step, and hands back a
//! [`input::Dispatch`] naming the callback to run.

pub mod error;
pub mod input;
pub mod options;

pub use error::EventError;
pub use input::{
    ButtonCode, Dispatch, Event, EventBase, Extent, FrameState, Handler,
    InputProcessor, Key, KeyAction, KeyEvent, Modifier, MouseAction,
    MouseButton, MouseEvent, PointerTracker, RawInput, RawKeyEvent,
    RawMouseEvent,
};
#[cfg(feature = "viewer")]
pub use input::WinitAdapter;
pub use options::InputOptions;
