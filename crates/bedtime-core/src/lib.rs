//! Angle geometry and drag handling for a ring-shaped bed/wake time picker.
//!
//! Angles are degrees, 0° at 3 o'clock, growing counter-clockwise; one full
//! turn is one day.

pub mod angle;
pub mod config;
pub mod drag;
pub mod geometry;
pub mod picker;
pub mod range;

pub use config::{HandleConfig, PickerConfig};
pub use drag::{DragMode, RangeState};
pub use geometry::{HandleBounds, HandleLayout, Padding, Point, RingGeometry};
pub use picker::TimeRangePicker;
pub use range::{Period, TimeOfDay};
