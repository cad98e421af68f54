use super::{BACKGROUND_STROKE_WIDTH, IMAGE_SIZE};
use crate::config::{Config, ThemeConfig};
use bedtime_core::{Padding, RingGeometry, TimeOfDay, TimeRangePicker};
use gdk_pixbuf::Pixbuf;
use std::path::Path;

/// Everything the draw function and the gesture handlers share.
pub struct Scene {
    pub picker: TimeRangePicker,
    pub theme: ThemeConfig,
    pub bed_label: String,
    pub wake_label: String,
    pub night: Option<Pixbuf>,
    pub morning: Option<Pixbuf>,
    max_handle_size: f64,
    /// A reload that arrived mid-drag, applied once the pointer lets go.
    pending: Option<Config>,
}

impl Scene {
    pub fn new(config: &Config) -> Self {
        Self {
            picker: TimeRangePicker::new(&config.picker),
            theme: config.theme.clone(),
            bed_label: config.picker.bed_label().to_string(),
            wake_label: config.picker.wake_label().to_string(),
            night: config.images.night.as_deref().and_then(load_image),
            morning: config.images.morning.as_deref().and_then(load_image),
            max_handle_size: config.picker.max_handle_size(),
            pending: None,
        }
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        let ring = RingGeometry::fit(
            width,
            height,
            Padding::default(),
            self.max_handle_size,
            BACKGROUND_STROKE_WIDTH,
        );
        log::debug!("ring resized to radius {:.1}", ring.radius);
        self.picker.resize(ring);
    }

    /// Swaps in a picker built from `config`, keeping the current ring size.
    /// The old change listener is dropped with the old picker.
    pub fn rebuild(&mut self, config: &Config) {
        let ring = self.picker.ring();
        *self = Self::new(config);
        self.picker.resize(ring);
    }

    /// Rebuilds now, or holds `config` back while a drag is running so the
    /// handle under the pointer is not swapped out. Returns true if rebuilt.
    pub fn request_rebuild(&mut self, config: Config) -> bool {
        if self.picker.state().drag_mode().is_active() {
            log::debug!("drag active, deferring config reload");
            self.pending = Some(config);
            return false;
        }
        self.rebuild(&config);
        true
    }

    /// Applies a reload deferred by [`Scene::request_rebuild`]. Returns true if rebuilt.
    pub fn apply_pending(&mut self) -> bool {
        if self.picker.state().drag_mode().is_active() {
            return false;
        }
        match self.pending.take() {
            Some(config) => {
                self.rebuild(&config);
                true
            }
            None => false,
        }
    }

    pub fn readout(&self) -> String {
        readout(self.picker.bed_time(), self.picker.wake_time())
    }
}

fn load_image(path: &Path) -> Option<Pixbuf> {
    Pixbuf::from_file_at_scale(path, IMAGE_SIZE, IMAGE_SIZE, true)
        .inspect_err(|e| log::warn!("Skipping image {}: {}", path.display(), e))
        .ok()
}

pub fn readout(bed: TimeOfDay, wake: TimeOfDay) -> String {
    format!(
        "Bed {} ({})  /  Wake {} ({})",
        bed,
        bed.period(),
        wake,
        wake.period()
    )
}
