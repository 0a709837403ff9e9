//! Crate-level error types.

use std::fmt;

/// Errors produced by the sketch-input crate.
#[derive(Debug)]
pub enum EventError {
    /// A backend adapter produced a raw event missing a required field.
    InvalidRawEvent {
        /// Kind of raw event (`"mouse"`, `"key"`).
        kind: &'static str,
        /// Name of the missing or malformed field.
        field: &'static str,
    },
    /// Raw mouse button code outside the known set.
    UnknownButton(u8),
    /// Modifier name that does not map to a known modifier key.
    UnknownModifier(String),
    /// Handler name that does not map to a known sketch callback.
    UnknownHandler(String),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Generic I/O failure.
    Io(std::io::Error),
    /// Demo viewer event-loop failure.
    Viewer(String),
}

impl fmt::Display for EventError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidRawEvent { kind, field } => {
                write!(f, "invalid raw {kind} event: missing {field}")
            }
            Self::UnknownButton(code) => {
                write!(f, "unknown mouse button code: {code}")
            }
            Self::UnknownModifier(name) => {
                write!(f, "unknown modifier: {name}")
            }
            Self::UnknownHandler(name) => {
                write!(f, "unknown handler: {name}")
            }
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Viewer(msg) => write!(f, "viewer error: {msg}"),
        }
    }
}

impl std::error::Error for EventError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for EventError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
