use crate::angle::{normalize, signed_delta_rad};
use crate::geometry::{
    HandleLayout, Point, RingGeometry, classify_band_hit, is_within_active_arc, pointer_to_angle,
    raw_pointer_angle,
};
use strum::Display;

/// Selections shorter than this sweep are drawn in the warning colour.
pub const SHORT_RANGE_SWEEP: f64 = 120.0;

#[derive(Debug, Clone, Copy, PartialEq, Default, Display)]
pub enum DragMode {
    #[default]
    Idle,
    DraggingBed,
    DraggingWake,
    /// Rotates both handles together. `touch_angle` is the canonical pointer
    /// angle seen on the previous event.
    DraggingRange { touch_angle: f64 },
}

impl DragMode {
    pub fn is_active(&self) -> bool {
        !matches!(self, Self::Idle)
    }
}

/// Handle angles plus the active drag. Both angles are kept canonical.
#[derive(Debug, Clone, PartialEq)]
pub struct RangeState {
    bed_angle: f64,
    wake_angle: f64,
    drag_mode: DragMode,
    fixed_bed_time: bool,
}

impl RangeState {
    pub fn new(bed_angle: f64, wake_angle: f64, fixed_bed_time: bool) -> Self {
        Self {
            bed_angle: normalize(bed_angle),
            wake_angle: normalize(wake_angle),
            drag_mode: DragMode::Idle,
            fixed_bed_time,
        }
    }

    pub fn bed_angle(&self) -> f64 {
        self.bed_angle
    }

    pub fn wake_angle(&self) -> f64 {
        self.wake_angle
    }

    pub fn drag_mode(&self) -> DragMode {
        self.drag_mode
    }

    pub fn fixed_bed_time(&self) -> bool {
        self.fixed_bed_time
    }

    /// Angular span of the selected arc, drawn from the bed handle toward the wake
    /// handle. Equal handles give 0, never 360.
    pub fn sweep(&self) -> f64 {
        normalize(self.bed_angle - self.wake_angle)
    }

    /// Where renderers start the selected arc before sweeping clockwise on screen.
    pub fn arc_start(&self) -> f64 {
        self.bed_angle
    }

    pub fn is_short_range(&self) -> bool {
        self.sweep() < SHORT_RANGE_SWEEP
    }

    /// Enters `mode` unless a drag is already running. Only one pointer is tracked.
    pub fn begin(&mut self, mode: DragMode) -> bool {
        if self.drag_mode.is_active() {
            log::trace!("ignoring {mode} while {} is active", self.drag_mode);
            return false;
        }
        log::debug!("drag started: {mode}");
        self.drag_mode = mode;
        mode.is_active()
    }

    /// Decides what a pointer-down starts. Handle hits win over the ring band and
    /// the bed handle wins over the wake handle. Returns false when the press
    /// should pass through to the host.
    pub fn press(
        &mut self,
        pointer: Point,
        ring: &RingGeometry,
        handles: &HandleLayout,
        band_half_width: f64,
    ) -> bool {
        if ring.is_degenerate() {
            log::trace!("press ignored, ring has no radius yet");
            return false;
        }
        let mode = if handles.bed.contains(pointer) {
            DragMode::DraggingBed
        } else if handles.wake.contains(pointer) {
            DragMode::DraggingWake
        } else {
            let touch_angle = pointer_to_angle(pointer, ring.center);
            let on_band = classify_band_hit(pointer, ring.center, ring.radius, band_half_width);
            if !on_band || !is_within_active_arc(touch_angle, self.bed_angle, self.wake_angle) {
                log::trace!("press at {touch_angle:.1} deg missed handles and selected arc");
                return false;
            }
            DragMode::DraggingRange { touch_angle }
        };
        self.begin(mode)
    }

    /// Applies one pointer-move under the active drag. Returns true when an angle
    /// changed and listeners should hear about it.
    pub fn drag_to(&mut self, pointer: Point, center: Point) -> bool {
        let raw_touch = raw_pointer_angle(pointer, center);

        match self.drag_mode {
            DragMode::Idle => false,
            DragMode::DraggingBed => {
                if self.fixed_bed_time {
                    return false;
                }
                let delta = signed_delta_rad(self.bed_angle.to_radians(), raw_touch).to_degrees();
                self.bed_angle = normalize(self.bed_angle + delta).floor();
                log::debug!("bed angle -> {}", self.bed_angle);
                true
            }
            DragMode::DraggingWake => {
                // no floor here, the wake handle keeps fractional degrees
                let delta = signed_delta_rad(self.wake_angle.to_radians(), raw_touch).to_degrees();
                self.wake_angle = normalize(self.wake_angle + delta);
                log::debug!("wake angle -> {:.2}", self.wake_angle);
                true
            }
            DragMode::DraggingRange { touch_angle } => {
                if self.fixed_bed_time {
                    return false;
                }
                let bed_offset = self.bed_angle - touch_angle;
                let wake_offset = self.wake_angle - touch_angle;
                let new_touch = normalize(raw_touch.to_degrees());

                self.wake_angle = normalize(new_touch + wake_offset);
                self.bed_angle = normalize(new_touch + bed_offset);
                self.drag_mode = DragMode::DraggingRange {
                    touch_angle: new_touch,
                };
                log::debug!(
                    "range rotated to bed {:.2}, wake {:.2}",
                    self.bed_angle,
                    self.wake_angle
                );
                true
            }
        }
    }

    /// Pointer-up and pointer-cancel both land here.
    pub fn release(&mut self) {
        if self.drag_mode.is_active() {
            log::debug!("drag ended: {}", self.drag_mode);
        }
        self.drag_mode = DragMode::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::angle::assert_close;
    use crate::geometry::{HandleBounds, place_on_ring};

    const CENTER: Point = Point { x: 200.0, y: 200.0 };

    fn ring() -> RingGeometry {
        RingGeometry::new(CENTER, 100.0)
    }

    fn at(angle: f64) -> Point {
        place_on_ring(CENTER, 100.0, angle)
    }

    #[test]
    fn test_bed_drag_follows_pointer_and_floors() {
        let mut state = RangeState::new(0.0, 180.0, false);
        assert!(state.begin(DragMode::DraggingBed));

        assert!(state.drag_to(at(30.7), CENTER));
        assert_close(state.bed_angle(), 30.0);

        // crossing zero goes the short way round
        assert!(state.drag_to(at(350.5), CENTER));
        assert_close(state.bed_angle(), 350.0);
        assert_close(state.wake_angle(), 180.0);
    }

    #[test]
    fn test_wake_drag_keeps_fractional_degrees() {
        let mut state = RangeState::new(0.0, 180.0, false);
        state.begin(DragMode::DraggingWake);

        assert!(state.drag_to(at(200.5), CENTER));
        assert!((state.wake_angle() - 200.5).abs() < 1e-6);

        assert!(state.drag_to(at(5.25), CENTER));
        assert!((state.wake_angle() - 5.25).abs() < 1e-6);
        assert_close(state.bed_angle(), 0.0);
    }

    #[test]
    fn test_range_drag_preserves_span() {
        let mut state = RangeState::new(300.0, 60.0, false);
        assert_close(state.sweep(), 240.0);
        assert!(state.press(at(0.0), &ring(), &HandleLayout::default(), 25.0));
        assert!(matches!(state.drag_mode(), DragMode::DraggingRange { .. }));

        for angle in [10.0, 45.5, 120.0, 250.0, 359.0, 3.0] {
            assert!(state.drag_to(at(angle), CENTER));
            assert!((state.sweep() - 240.0).abs() < 1e-6, "sweep {}", state.sweep());
        }
        assert!((state.bed_angle() - 303.0).abs() < 1e-6);
        assert!((state.wake_angle() - 63.0).abs() < 1e-6);
    }

    #[test]
    fn test_fixed_bed_time_freezes_bed_and_range() {
        let mut state = RangeState::new(300.0, 60.0, true);

        state.begin(DragMode::DraggingBed);
        assert!(!state.drag_to(at(100.0), CENTER));
        state.release();

        state.begin(DragMode::DraggingRange { touch_angle: 0.0 });
        assert!(!state.drag_to(at(90.0), CENTER));
        state.release();

        assert_close(state.bed_angle(), 300.0);
        assert_close(state.wake_angle(), 60.0);

        state.begin(DragMode::DraggingWake);
        assert!(state.drag_to(at(90.0), CENTER));
        assert!((state.wake_angle() - 90.0).abs() < 1e-6);
        assert_close(state.bed_angle(), 300.0);
    }

    #[test]
    fn test_press_rejects_gap_and_off_band() {
        let mut state = RangeState::new(200.0, 100.0, false);
        let handles = HandleLayout::default();

        assert!(!state.press(at(150.0), &ring(), &handles, 25.0));
        assert!(!state.press(CENTER, &ring(), &handles, 25.0));
        assert!(!state.press(place_on_ring(CENTER, 140.0, 250.0), &ring(), &handles, 25.0));
        assert_eq!(state.drag_mode(), DragMode::Idle);

        assert!(state.press(at(250.0), &ring(), &handles, 25.0));
    }

    #[test]
    fn test_move_without_drag_is_noop() {
        let mut state = RangeState::new(10.0, 20.0, false);
        assert!(!state.drag_to(at(90.0), CENTER));
        assert_eq!(state, RangeState::new(10.0, 20.0, false));
    }

    #[test]
    fn test_second_drag_is_ignored_until_release() {
        let mut state = RangeState::new(10.0, 20.0, false);
        assert!(state.begin(DragMode::DraggingWake));
        assert!(!state.begin(DragMode::DraggingBed));
        assert_eq!(state.drag_mode(), DragMode::DraggingWake);

        state.release();
        assert_eq!(state.drag_mode(), DragMode::Idle);
        assert!(!state.drag_to(at(90.0), CENTER));
    }

    #[test]
    fn test_degenerate_ring_ignores_handle_hits() {
        let mut state = RangeState::new(0.0, 0.0, false);
        let flat = RingGeometry::default();
        let handles = HandleLayout {
            bed: HandleBounds::centered_on(Point::default(), 48.0),
            wake: HandleBounds::centered_on(Point::default(), 48.0),
        };

        assert!(!state.press(Point::new(1.0, 1.0), &flat, &handles, 25.0));
        assert_eq!(state.drag_mode(), DragMode::Idle);
    }

    #[test]
    fn test_arc_starts_at_bed_handle() {
        let state = RangeState::new(300.0, 60.0, false);
        assert_close(state.arc_start(), 300.0);
        assert_close(state.arc_start() - state.sweep(), state.wake_angle());
    }

    #[test]
    fn test_sweep_and_short_range() {
        assert_close(RangeState::new(90.0, 90.0, false).sweep(), 0.0);
        assert!(RangeState::new(90.0, 0.0, false).is_short_range());
        assert!(!RangeState::new(0.0, 90.0, false).is_short_range());
        assert_close(RangeState::new(-10.0, 370.0, false).bed_angle(), 350.0);
    }
}
