use crate::config::PickerConfig;
use crate::drag::RangeState;
use crate::geometry::{HandleBounds, HandleLayout, Point, RingGeometry, place_on_ring};
use crate::range::{Period, TimeOfDay};

pub type ChangeListener = Box<dyn FnMut(TimeOfDay, TimeOfDay)>;

/// The interaction core of the ring widget.
///
/// The host forwards resizes and pointer events, positions handle visuals from
/// [`TimeRangePicker::handle_layout`] and draws from [`TimeRangePicker::state`].
pub struct TimeRangePicker {
    state: RangeState,
    ring: RingGeometry,
    handles: HandleLayout,
    bed_handle_size: f64,
    wake_handle_size: f64,
    band_half_width: f64,
    listener: Option<ChangeListener>,
}

impl TimeRangePicker {
    pub fn new(config: &PickerConfig) -> Self {
        let mut picker = Self {
            state: RangeState::new(config.bed_angle, config.wake_angle, config.fixed_bed_time),
            ring: RingGeometry::default(),
            handles: HandleLayout::default(),
            bed_handle_size: config.bed_handle.size,
            wake_handle_size: config.wake_handle.size,
            band_half_width: config.band_half_width,
            listener: None,
        };
        picker.relayout();
        picker
    }

    pub fn state(&self) -> &RangeState {
        &self.state
    }

    pub fn ring(&self) -> RingGeometry {
        self.ring
    }

    pub fn handle_layout(&self) -> HandleLayout {
        self.handles
    }

    pub fn resize(&mut self, ring: RingGeometry) {
        self.ring = ring;
        self.relayout();
    }

    /// Where the center of a handle at `angle` sits on the ring.
    pub fn layout_handle(&self, angle: f64) -> Point {
        place_on_ring(self.ring.center, self.ring.radius, angle)
    }

    fn relayout(&mut self) {
        self.handles = HandleLayout {
            bed: HandleBounds::centered_on(
                self.layout_handle(self.state.bed_angle()),
                self.bed_handle_size,
            ),
            wake: HandleBounds::centered_on(
                self.layout_handle(self.state.wake_angle()),
                self.wake_handle_size,
            ),
        };
    }

    /// Replaces any previous listener.
    pub fn set_on_change(&mut self, listener: impl FnMut(TimeOfDay, TimeOfDay) + 'static) {
        self.listener = Some(Box::new(listener));
    }

    pub fn clear_on_change(&mut self) {
        self.listener = None;
    }

    /// Returns true when the press starts a drag and the host should capture the pointer.
    pub fn pointer_down(&mut self, pointer: Point) -> bool {
        self.state
            .press(pointer, &self.ring, &self.handles, self.band_half_width)
    }

    /// Returns true when the move changed the selection.
    pub fn pointer_move(&mut self, pointer: Point) -> bool {
        if !self.state.drag_to(pointer, self.ring.center) {
            return false;
        }
        self.relayout();
        self.notify();
        true
    }

    pub fn pointer_up(&mut self) {
        self.state.release();
    }

    pub fn pointer_cancel(&mut self) {
        self.state.release();
    }

    fn notify(&mut self) {
        let (bed, wake) = (self.bed_time(), self.wake_time());
        if let Some(listener) = self.listener.as_mut() {
            listener(bed, wake);
        }
    }

    pub fn bed_time(&self) -> TimeOfDay {
        self.state.bed_time()
    }

    pub fn wake_time(&self) -> TimeOfDay {
        self.state.wake_time()
    }

    pub fn bed_period(&self) -> Period {
        self.state.bed_period()
    }

    pub fn wake_period(&self) -> Period {
        self.state.wake_period()
    }
}
