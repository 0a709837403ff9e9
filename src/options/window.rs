use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::input::Extent;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
#[schemars(title = "Window", inline)]
#[serde(default)]
/// Initial sketch window size.
pub struct WindowOptions {
    /// Width in pixels.
    #[schemars(title = "Width", range(min = 1, max = 8192))]
    pub width: u32,
    /// Height in pixels.
    #[schemars(title = "Height", range(min = 1, max = 8192))]
    pub height: u32,
    /// Window title.
    #[schemars(skip)]
    pub title: String,
}

impl WindowOptions {
    /// Size as an [`Extent`].
    #[must_use]
    pub fn extent(&self) -> Extent {
        Extent::new(self.width, self.height)
    }
}

impl Default for WindowOptions {
    fn default() -> Self {
        Self {
            width: 640,
            height: 360,
            title: "sketch".into(),
        }
    }
}
