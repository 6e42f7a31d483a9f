use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    /// UI text scaling factor (0.5-3.0)
    pub text_scale: f32,
    /// Keep the roster window above other windows
    pub always_on_top: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            text_scale: 1.0,
            always_on_top: false,
        }
    }
}

impl AppSettings {
    /// Clamps text scale to valid range (0.5-3.0)
    pub fn set_text_scale(&mut self, scale: f32) {
        self.text_scale = if scale.is_finite() { scale.clamp(0.5, 3.0) } else { 1.0 };
    }
}
