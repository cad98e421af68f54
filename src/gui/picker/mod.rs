pub mod model;
pub mod view;

pub use model::{Scene, readout};
pub use view::draw;

pub const BACKGROUND_STROKE_WIDTH: f64 = 35.0;
pub const PROGRESS_STROKE_WIDTH: f64 = 25.0;
pub const HOUR_DIVISIONS: u32 = 24;
pub const DIVISION_INSET: f64 = 8.0; // gap between ring stroke and ticks
pub const DIVISION_LENGTH: f64 = 6.0;
pub const MAJOR_DIVISION_LENGTH: f64 = 12.0;
pub const DIVISION_WIDTH: f64 = 1.0;
pub const DIVISION_TEXT_SIZE: f64 = 14.0;
pub const HANDLE_TEXT_SIZE: f64 = 12.0;
pub const IMAGE_SIZE: i32 = 30;
