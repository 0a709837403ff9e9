use std::time::Duration;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Pointer", inline)]
#[serde(default)]
/// Click, drag and wheel classification parameters.
pub struct PointerOptions {
    /// Maximum gap between two clicks of a double click, in milliseconds.
    #[schemars(title = "Double Click (ms)", range(min = 100, max = 1000), extend("step" = 10))]
    pub double_click_ms: u64,
    /// Distance in pixels the pointer may travel between press and release
    /// and still count as a click.
    #[schemars(title = "Drag Threshold", range(min = 0.0, max = 20.0), extend("step" = 0.5))]
    pub drag_threshold: f32,
    /// Multiplier turning pixel scroll deltas into wheel notches.
    #[schemars(title = "Pixel Scroll Scale", range(min = 0.001, max = 1.0), extend("step" = 0.001))]
    pub pixel_scroll_scale: f32,
}

impl PointerOptions {
    /// Double-click window as a [`Duration`].
    #[must_use]
    pub fn double_click_threshold(&self) -> Duration {
        Duration::from_millis(self.double_click_ms)
    }
}

impl Default for PointerOptions {
    fn default() -> Self {
        Self {
            double_click_ms: 400,
            drag_threshold: 1.0,
            pixel_scroll_scale: 0.01,
        }
    }
}
