use crate::angle::normalize;

/// Slack kept between the ring and the widget edge, on top of padding and handle size.
pub const RING_MARGIN: f64 = 30.0;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_squared(&self, other: Point) -> f64 {
        let (dx, dy) = (self.x - other.x, self.y - other.y);
        dx * dx + dy * dy
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Padding {
    pub start: f64,
    pub end: f64,
    pub top: f64,
    pub bottom: f64,
}

/// Center and radius of the ring, recomputed by the host on every resize.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RingGeometry {
    pub center: Point,
    pub radius: f64,
}

impl RingGeometry {
    pub fn new(center: Point, radius: f64) -> Self {
        Self { center, radius }
    }

    /// Largest ring that fits the widget while leaving room for the handles,
    /// which straddle the ring stroke.
    pub fn fit(
        width: f64,
        height: f64,
        padding: Padding,
        max_handle_size: f64,
        stroke_width: f64,
    ) -> Self {
        let offset = (stroke_width / 2.0 - max_handle_size / 2.0).abs();
        let usable_width =
            width - padding.start - padding.end - max_handle_size - offset - RING_MARGIN;
        let usable_height =
            height - padding.top - padding.bottom - max_handle_size - offset - RING_MARGIN;

        Self {
            center: Point::new(width / 2.0, height / 2.0),
            radius: (usable_width.min(usable_height) / 2.0).max(0.0),
        }
    }

    pub fn is_degenerate(&self) -> bool {
        self.radius <= 0.0
    }
}

/// Laid-out box of a handle visual.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HandleBounds {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl HandleBounds {
    pub fn centered_on(center: Point, size: f64) -> Self {
        let half = size / 2.0;
        Self {
            left: center.x - half,
            top: center.y - half,
            right: center.x + half,
            bottom: center.y + half,
        }
    }

    /// Strict containment; a pointer exactly on an edge misses.
    pub fn contains(&self, point: Point) -> bool {
        point.x > self.left && point.x < self.right && point.y > self.top && point.y < self.bottom
    }

    pub fn center(&self) -> Point {
        Point::new(
            (self.left + self.right) / 2.0,
            (self.top + self.bottom) / 2.0,
        )
    }
}

/// Laid-out boxes of both handles, refreshed after every resize and accepted move.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HandleLayout {
    pub bed: HandleBounds,
    pub wake: HandleBounds,
}

/// Raw pointer angle in radians, straight from `atan2`, in `(-PI, PI]`.
/// Screen y grows downward, hence the flipped y difference.
pub fn raw_pointer_angle(pointer: Point, center: Point) -> f64 {
    (center.y - pointer.y).atan2(pointer.x - center.x)
}

/// Canonical angle of the pointer around `center`: 0° at 3 o'clock, counter-clockwise.
pub fn pointer_to_angle(pointer: Point, center: Point) -> f64 {
    normalize(raw_pointer_angle(pointer, center).to_degrees())
}

/// True iff the pointer lies strictly inside the annulus
/// `radius - band_half_width < distance < radius + band_half_width`.
pub fn classify_band_hit(pointer: Point, center: Point, radius: f64, band_half_width: f64) -> bool {
    if radius <= 0.0 {
        return false;
    }
    let distance_sq = pointer.distance_squared(center);
    let inner = radius - band_half_width;
    let outer = radius + band_half_width;
    distance_sq > inner * inner && distance_sq < outer * outer
}

/// Whether `touch` may start a whole-range drag.
///
/// A touch strictly between the two handles is rejected whichever handle has the
/// larger angle. Equal handles reject nothing.
pub fn is_within_active_arc(touch: f64, bed: f64, wake: f64) -> bool {
    if bed > wake && touch > wake && touch < bed {
        return false;
    }
    if wake > bed && touch > bed && touch < wake {
        return false;
    }
    true
}

/// Inverse of [`pointer_to_angle`]: the point at `angle` on the ring.
pub fn place_on_ring(center: Point, radius: f64, angle: f64) -> Point {
    let rad = angle.to_radians();
    Point::new(center.x + radius * rad.cos(), center.y - radius * rad.sin())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::angle::assert_close;

    const CENTER: Point = Point { x: 200.0, y: 200.0 };

    #[test]
    fn test_pointer_angle_is_counter_clockwise_from_east() {
        let cases = vec![
            (Point::new(300.0, 200.0), 0.0),
            (Point::new(200.0, 100.0), 90.0),
            (Point::new(100.0, 200.0), 180.0),
            (Point::new(200.0, 300.0), 270.0),
            (Point::new(300.0, 100.0), 45.0),
        ];

        for (pointer, expected) in cases {
            assert_close(pointer_to_angle(pointer, CENTER), expected);
        }
    }

    #[test]
    fn test_place_on_ring_inverts_pointer_angle() {
        for angle in [0.0, 12.5, 90.0, 181.0, 270.0, 359.0] {
            let placed = place_on_ring(CENTER, 120.0, angle);
            assert_close(pointer_to_angle(placed, CENTER), angle);
            assert_close(placed.distance_squared(CENTER).sqrt(), 120.0);
        }
    }

    #[test]
    fn test_band_hit_boundaries() {
        let at = |distance: f64| Point::new(CENTER.x + distance, CENTER.y);

        assert!(classify_band_hit(at(100.0), CENTER, 100.0, 25.0));
        assert!(classify_band_hit(at(76.0), CENTER, 100.0, 25.0));
        assert!(classify_band_hit(at(124.0), CENTER, 100.0, 25.0));
        assert!(!classify_band_hit(at(74.0), CENTER, 100.0, 25.0));
        assert!(!classify_band_hit(at(126.0), CENTER, 100.0, 25.0));
        // open interval
        assert!(!classify_band_hit(at(75.0), CENTER, 100.0, 25.0));
        assert!(!classify_band_hit(at(125.0), CENTER, 100.0, 25.0));
    }

    #[test]
    fn test_band_hit_rejects_degenerate_radius() {
        assert!(!classify_band_hit(CENTER, CENTER, 0.0, 25.0));
        assert!(!classify_band_hit(Point::new(210.0, 200.0), CENTER, -5.0, 25.0));
    }

    #[test]
    fn test_active_arc_rejects_gap_between_handles() {
        // bed > wake
        assert!(!is_within_active_arc(150.0, 200.0, 100.0));
        assert!(is_within_active_arc(250.0, 200.0, 100.0));
        assert!(is_within_active_arc(50.0, 200.0, 100.0));
        // wake > bed
        assert!(!is_within_active_arc(150.0, 100.0, 200.0));
        assert!(is_within_active_arc(20.0, 100.0, 200.0));
        // on a handle
        assert!(is_within_active_arc(100.0, 200.0, 100.0));
        assert!(is_within_active_arc(42.0, 42.0, 42.0));
    }

    #[test]
    fn test_fit_leaves_room_for_handles() {
        let ring = RingGeometry::fit(400.0, 500.0, Padding::default(), 40.0, 70.0);
        // offset = |35 - 20| = 15, usable = 400 - 40 - 15 - 30
        assert_eq!(ring.center, Point::new(200.0, 250.0));
        assert_close(ring.radius, 157.5);

        let tiny = RingGeometry::fit(50.0, 50.0, Padding::default(), 40.0, 70.0);
        assert!(tiny.is_degenerate());
    }

    #[test]
    fn test_handle_bounds_are_strict() {
        let bounds = HandleBounds::centered_on(Point::new(10.0, 10.0), 20.0);
        assert!(bounds.contains(Point::new(10.0, 10.0)));
        assert!(bounds.contains(Point::new(19.9, 0.1)));
        assert!(!bounds.contains(Point::new(20.0, 10.0)));
        assert!(!bounds.contains(Point::new(10.0, 0.0)));
        assert_eq!(bounds.center(), Point::new(10.0, 10.0));
    }
}
