//! Input options with TOML preset support.
//!
//! Click timing, drag threshold, wheel scaling and the initial window size
//! live here. Options serialize to/from TOML so a sketch can ship a small
//! `input.toml` next to its source.

mod pointer;
mod window;

use std::path::Path;

pub use pointer::PointerOptions;
pub use window::WindowOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::EventError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[pointer]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct InputOptions {
    /// Initial window size.
    pub window: WindowOptions,
    /// Click/drag/wheel classification.
    pub pointer: PointerOptions,
}

impl InputOptions {
    /// Generate JSON Schema describing the options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(InputOptions)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Fails when the file cannot be read or is not valid TOML.
    pub fn load(path: &Path) -> Result<Self, EventError> {
        let content = std::fs::read_to_string(path).map_err(EventError::Io)?;
        toml::from_str(&content)
            .map_err(|e| EventError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// Fails when serialization or the write fails.
    pub fn save(&self, path: &Path) -> Result<(), EventError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| EventError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(EventError::Io)?;
        }
        std::fs::write(path, content).map_err(EventError::Io)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = InputOptions::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: InputOptions = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r"
[pointer]
double_click_ms = 250
";
        let opts: InputOptions = toml::from_str(toml_str).unwrap();
        assert_eq!(opts.pointer.double_click_ms, 250);
        // Everything else should be default
        assert_eq!(opts.pointer.drag_threshold, 1.0);
        assert_eq!(opts.window.extent(), crate::input::Extent::new(640, 360));
    }

    #[test]
    fn bad_toml_is_an_options_error() {
        let dir = std::env::temp_dir().join("sketch-input-bad-toml");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("input.toml");
        std::fs::write(&path, "[pointer]\ndouble_click_ms = \"soon\"\n")
            .unwrap();
        assert!(matches!(
            InputOptions::load(&path),
            Err(EventError::OptionsParse(_))
        ));
    }

    #[test]
    fn save_then_load() {
        let dir = std::env::temp_dir().join("sketch-input-save");
        let path = dir.join("nested").join("input.toml");
        let mut opts = InputOptions::default();
        opts.window.width = 1024;
        opts.pointer.pixel_scroll_scale = 0.05;
        opts.save(&path).unwrap();
        assert_eq!(InputOptions::load(&path).unwrap(), opts);
    }

    #[test]
    fn missing_file_is_io_error() {
        let path = Path::new("/definitely/not/here/input.toml");
        assert!(matches!(InputOptions::load(path), Err(EventError::Io(_))));
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(InputOptions::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();
        assert!(props.contains_key("window"));
        assert!(props.contains_key("pointer"));

        let window = &props["window"]["properties"];
        assert!(window.get("width").is_some());
        assert!(window.get("title").is_none());
        let pointer = &props["pointer"]["properties"];
        assert!(pointer.get("double_click_ms").is_some());
    }
}
