use serde::{Deserialize, Serialize};

pub const DEFAULT_HANDLE_SIZE: f64 = 48.0;
pub const DEFAULT_BAND_HALF_WIDTH: f64 = 25.0;
pub const DEFAULT_BED_LABEL: &str = "Bed";
pub const DEFAULT_WAKE_LABEL: &str = "Wake";

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct HandleConfig {
    /// Unset means the handle's own default label. An empty string hides it.
    pub label: Option<String>,
    pub size: f64,
}

impl HandleConfig {
    fn label_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.label.as_deref().unwrap_or(fallback)
    }
}

impl Default for HandleConfig {
    fn default() -> Self {
        Self {
            label: None,
            size: DEFAULT_HANDLE_SIZE,
        }
    }
}

/// Read once when a picker is built. A changed configuration means a new picker.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct PickerConfig {
    pub bed_angle: f64,
    pub wake_angle: f64,
    /// Pins the bed handle. Whole-range rotation is disabled too; the wake handle still moves.
    pub fixed_bed_time: bool,
    pub bed_handle: HandleConfig,
    pub wake_handle: HandleConfig,
    pub band_half_width: f64,
}

impl PickerConfig {
    pub fn bed_label(&self) -> &str {
        self.bed_handle.label_or(DEFAULT_BED_LABEL)
    }

    pub fn wake_label(&self) -> &str {
        self.wake_handle.label_or(DEFAULT_WAKE_LABEL)
    }

    pub fn max_handle_size(&self) -> f64 {
        self.bed_handle.size.max(self.wake_handle.size)
    }
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            bed_angle: 0.0,
            wake_angle: 0.0,
            fixed_bed_time: false,
            bed_handle: HandleConfig::default(),
            wake_handle: HandleConfig::default(),
            band_half_width: DEFAULT_BAND_HALF_WIDTH,
        }
    }
}
