//! Viewer tuning knobs.
//!
//! The host page may embed a JSON block to override the defaults:
//!
//! ```html
//! <script type="application/json" id="viewer-config">
//!   { "maxScale": 4, "throwResistance": 3000 }
//! </script>
//! ```
//!
//! Missing keys fall back to [`ViewerConfig::default`]. A block that fails to
//! parse or validate is logged and ignored.

use serde::{Deserialize, Serialize};

use crate::error::{Result, ViewerError};
use crate::model::ZoomLimits;

pub const CONFIG_ELEMENT_ID: &str = "viewer-config";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ViewerConfig {
    pub min_scale: f64,
    pub max_scale: f64,
    /// Scale change per wheel tick.
    pub zoom_speed: f64,
    /// Scale a double-click zooms to from `min_scale`.
    pub double_click_scale: f64,
    /// Deceleration of an inertial throw, px/s².
    pub throw_resistance: f64,
    /// Duration of the double-click zoom transition.
    pub zoom_duration_ms: f64,
    /// CSS height given to a freshly dropped image.
    pub preview_height: String,
    pub log_level: Option<String>,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            min_scale: 1.0,
            max_scale: 3.0,
            zoom_speed: 0.1,
            double_click_scale: 3.0,
            throw_resistance: 5000.0,
            zoom_duration_ms: 500.0,
            preview_height: "100vh".to_string(),
            log_level: None,
        }
    }
}

impl ViewerConfig {
    pub fn from_json(raw: &str) -> Result<Self> {
        let cfg: ViewerConfig =
            serde_json::from_str(raw).map_err(|e| ViewerError::Config(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.min_scale > 0.0) {
            return Err(ViewerError::Config("minScale must be positive".into()));
        }
        if self.min_scale > self.max_scale {
            return Err(ViewerError::Config(format!(
                "minScale ({}) exceeds maxScale ({})",
                self.min_scale, self.max_scale
            )));
        }
        if !(self.zoom_speed > 0.0) {
            return Err(ViewerError::Config("zoomSpeed must be positive".into()));
        }
        if !(self.throw_resistance > 0.0) {
            return Err(ViewerError::Config("throwResistance must be positive".into()));
        }
        if self.double_click_scale < self.min_scale || self.double_click_scale > self.max_scale {
            return Err(ViewerError::Config(format!(
                "doubleClickScale ({}) outside [{}, {}]",
                self.double_click_scale, self.min_scale, self.max_scale
            )));
        }
        if self.zoom_duration_ms < 0.0 {
            return Err(ViewerError::Config("zoomDurationMs must not be negative".into()));
        }
        Ok(())
    }

    pub fn zoom_limits(&self) -> ZoomLimits {
        ZoomLimits {
            min_scale: self.min_scale,
            max_scale: self.max_scale,
            step: self.zoom_speed,
            toggle_scale: self.double_click_scale,
        }
    }

    pub fn log_level(&self) -> log::Level {
        self.log_level
            .as_deref()
            .and_then(|s| s.parse().ok())
            .unwrap_or(if cfg!(debug_assertions) {
                log::Level::Debug
            } else {
                log::Level::Info
            })
    }

    /// Read the embedded config block from the current document, if any.
    pub fn load() -> Self {
        let raw = gloo::utils::document()
            .get_element_by_id(CONFIG_ELEMENT_ID)
            .and_then(|el| el.text_content());
        match raw {
            Some(raw) if !raw.trim().is_empty() => Self::from_json(&raw).unwrap_or_else(|e| {
                log::warn!("{}; using defaults", e);
                Self::default()
            }),
            _ => Self::default(),
        }
    }
}
