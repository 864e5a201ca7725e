//! Sketch settings. The defaults reproduce the classic look (red hairline on black, 400px tall);
//! a page may override any field with a JSON `<script id="sketch-config">` block.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::util::clog;

/// Id of the optional `<script type="application/json">` element holding overrides.
pub const CONFIG_ELEMENT_ID: &str = "sketch-config";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SketchConfig {
    pub canvas_height: u32,
    /// Subtracted from the document's client width so the canvas border never causes a scrollbar.
    pub width_margin: u32,
    pub stroke_color: String,
    pub stroke_width: f64,
    pub background: String,
}

impl Default for SketchConfig {
    fn default() -> Self {
        Self {
            canvas_height: 400,
            width_margin: 2,
            stroke_color: "rgba(255, 0, 0, 1)".to_string(),
            stroke_width: 1.0,
            background: "rgba(0, 0, 0, 1)".to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid sketch config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("stroke width must be positive, got {0}")]
    StrokeWidth(f64),
}

impl SketchConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        if config.stroke_width <= 0.0 {
            return Err(ConfigError::StrokeWidth(config.stroke_width));
        }
        Ok(config)
    }

    /// Reads overrides from the host page, falling back to defaults when absent or invalid.
    pub fn load() -> Self {
        let raw = web_sys::window()
            .and_then(|win| win.document())
            .and_then(|doc| doc.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());
        match raw {
            Some(raw) => Self::from_json(&raw).unwrap_or_else(|e| {
                clog(&format!("{e}; using default sketch config"));
                Self::default()
            }),
            None => Self::default(),
        }
    }

    pub fn canvas_width(&self, client_width: i32) -> u32 {
        (client_width - self.width_margin as i32).max(0) as u32
    }
}
