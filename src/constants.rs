//! Sizing, color, gesture, and timing constants for the slider.

use std::time::Duration;

use floem::peniko::Color;

/// Smallest font size (grade 1), in logical pixels
pub const MIN_SIZE: f64 = 15.0;

/// Largest font size (last grade), in logical pixels
pub const MAX_SIZE: f64 = 25.0;

/// Number of selectable grades
pub const TOTAL_GRADE: usize = 6;

/// Grade selected before any interaction
pub const STANDARD_GRADE: usize = 2;

/// Padding on every side of the widget
pub const PADDING: f64 = 35.0;

/// Preferred widget height
pub const PREFERRED_HEIGHT: f64 = 140.0;

/// Tick height when none is configured
pub const VERTICAL_LINE_LENGTH: f64 = 10.0;

/// Baseline and tick stroke width
pub const LINE_STROKE_WIDTH: f64 = 0.5;

/// Handle circle radius
pub const SLIDER_RADIUS: f64 = 25.0;

/// Extra distance around the handle that still counts as grabbing it
pub const HANDLE_TOUCH_SLOP: f64 = 20.0;

/// Vertical position of the baseline as a fraction of the widget height
pub const BASELINE_RATIO: f64 = 0.6;

/// Gap between the baseline and the label text baseline
pub const LABEL_OFFSET: f64 = 20.0;

/// Extra lift for the middle label when it sits over an end label
pub const MIDDLE_LABEL_LIFT: f64 = 7.0;

/// Pointer travel beyond which a press becomes a drag
pub const DRAG_THRESHOLD: f64 = 8.0;

/// A press held longer than this is no longer a tap
pub const LONG_PRESS_TIMEOUT: Duration = Duration::from_millis(500);

/// Snap animation duration for a zero-grade move
pub const ANIMATION_BASE: Duration = Duration::from_millis(100);

/// Additional snap animation duration per grade crossed
pub const ANIMATION_PER_GRADE: Duration = Duration::from_millis(30);

/// Delay between animation frames
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Handle drop shadow blur radius
pub const SHADOW_BLUR: f64 = 10.0;

/// Handle drop shadow offset
pub const SHADOW_OFFSET: (f64, f64) = (2.0, 2.0);

pub const LINE_COLOR: Color = Color::rgb8(0x22, 0x22, 0x22);
pub const LABEL_COLOR: Color = Color::BLACK;
pub const SLIDER_COLOR: Color = Color::WHITE;
pub const SLIDER_SHADOW_COLOR: Color = Color::rgb8(0x88, 0x88, 0x88);

pub const LEFT_TEXT: &str = "A";
pub const MIDDLE_TEXT: &str = "Standard";
pub const RIGHT_TEXT: &str = "A";
