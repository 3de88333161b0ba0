//! Construction-time configuration for the font size slider.

use floem::peniko::Color;
use tracing::warn;

use crate::constants;
use crate::grade::GradeScale;

/// Appearance and grade settings for [`font_resize`](crate::font_resize).
///
/// Every field has a default; use the `with_*` builder methods to override.
/// Invalid values are corrected rather than rejected, see
/// [`FontResizeConfig::normalized`].
#[derive(Debug, Clone, PartialEq)]
pub struct FontResizeConfig {
    pub min_size: f64,
    pub max_size: f64,
    pub total_grade: usize,
    pub standard_grade: usize,

    pub left_text: String,
    pub middle_text: String,
    pub right_text: String,
    pub left_text_color: Color,
    pub middle_text_color: Color,
    pub right_text_color: Color,

    pub line_color: Color,
    pub line_stroke_width: f64,
    /// Baseline length; `None` spans the width minus padding.
    pub horizontal_line_length: Option<f64>,
    /// Tick height; `None` uses [`constants::VERTICAL_LINE_LENGTH`].
    pub vertical_line_length: Option<f64>,
    pub padding: f64,

    pub slider_color: Color,
    pub slider_shadow_color: Color,
    pub slider_radius: f64,

    /// `None` fills the width the parent offers.
    pub preferred_width: Option<f64>,
    pub preferred_height: f64,

    /// Ratio between logical pixels and the scale-independent units reported
    /// to the change callback.
    pub font_scale: f64,
}

impl Default for FontResizeConfig {
    fn default() -> Self {
        Self {
            min_size: constants::MIN_SIZE,
            max_size: constants::MAX_SIZE,
            total_grade: constants::TOTAL_GRADE,
            standard_grade: constants::STANDARD_GRADE,
            left_text: constants::LEFT_TEXT.to_string(),
            middle_text: constants::MIDDLE_TEXT.to_string(),
            right_text: constants::RIGHT_TEXT.to_string(),
            left_text_color: constants::LABEL_COLOR,
            middle_text_color: constants::LABEL_COLOR,
            right_text_color: constants::LABEL_COLOR,
            line_color: constants::LINE_COLOR,
            line_stroke_width: constants::LINE_STROKE_WIDTH,
            horizontal_line_length: None,
            vertical_line_length: None,
            padding: constants::PADDING,
            slider_color: constants::SLIDER_COLOR,
            slider_shadow_color: constants::SLIDER_SHADOW_COLOR,
            slider_radius: constants::SLIDER_RADIUS,
            preferred_width: None,
            preferred_height: constants::PREFERRED_HEIGHT,
            font_scale: 1.0,
        }
    }
}

impl FontResizeConfig {
    /// Font sizes of the first and last grade, in logical pixels.
    pub fn with_size_range(mut self, min_size: f64, max_size: f64) -> Self {
        self.min_size = min_size;
        self.max_size = max_size;
        self
    }

    pub fn with_total_grade(mut self, total_grade: usize) -> Self {
        self.total_grade = total_grade;
        self
    }

    /// Initial grade, also the grade the middle label marks.
    pub fn with_standard_grade(mut self, standard_grade: usize) -> Self {
        self.standard_grade = standard_grade;
        self
    }

    /// Empty strings keep the default label.
    pub fn with_labels(
        mut self,
        left: impl Into<String>,
        middle: impl Into<String>,
        right: impl Into<String>,
    ) -> Self {
        let replace = |slot: &mut String, text: String| {
            if !text.is_empty() {
                *slot = text;
            }
        };
        replace(&mut self.left_text, left.into());
        replace(&mut self.middle_text, middle.into());
        replace(&mut self.right_text, right.into());
        self
    }

    pub fn with_label_colors(mut self, left: Color, middle: Color, right: Color) -> Self {
        self.left_text_color = left;
        self.middle_text_color = middle;
        self.right_text_color = right;
        self
    }

    pub fn with_line(mut self, color: Color, stroke_width: f64) -> Self {
        self.line_color = color;
        self.line_stroke_width = stroke_width;
        self
    }

    pub fn with_horizontal_line_length(mut self, length: f64) -> Self {
        self.horizontal_line_length = Some(length);
        self
    }

    pub fn with_vertical_line_length(mut self, length: f64) -> Self {
        self.vertical_line_length = Some(length);
        self
    }

    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }

    pub fn with_slider(mut self, color: Color, shadow_color: Color, radius: f64) -> Self {
        self.slider_color = color;
        self.slider_shadow_color = shadow_color;
        self.slider_radius = radius;
        self
    }

    pub fn with_preferred_size(mut self, width: Option<f64>, height: f64) -> Self {
        self.preferred_width = width;
        self.preferred_height = height;
        self
    }

    pub fn with_font_scale(mut self, font_scale: f64) -> Self {
        self.font_scale = font_scale;
        self
    }

    pub fn scale(&self) -> GradeScale {
        GradeScale::new(self.min_size, self.max_size, self.total_grade)
    }

    /// Size of the standard grade, used for the middle label.
    pub fn standard_size(&self) -> f64 {
        self.scale().size(self.standard_grade)
    }

    /// Returns a copy with every out-of-range value corrected.
    ///
    /// - `total_grade` below 2 becomes 2.
    /// - `standard_grade` is clamped into `[1, total_grade]`.
    /// - negative or non-finite lengths fall back to automatic sizing.
    /// - a non-positive `font_scale` becomes 1.0.
    pub fn normalized(mut self) -> Self {
        if self.total_grade < 2 {
            warn!(total_grade = self.total_grade, "total grade below 2, using 2");
            self.total_grade = 2;
        }
        let clamped = self.standard_grade.clamp(1, self.total_grade);
        if clamped != self.standard_grade {
            warn!(
                standard_grade = self.standard_grade,
                clamped, "standard grade out of range"
            );
            self.standard_grade = clamped;
        }
        for (name, slot) in [
            ("horizontal_line_length", &mut self.horizontal_line_length),
            ("vertical_line_length", &mut self.vertical_line_length),
        ] {
            if let Some(len) = *slot {
                if !(len.is_finite() && len >= 0.0) {
                    warn!(len, "invalid {name}, using automatic length");
                    *slot = None;
                }
            }
        }
        if !(self.font_scale.is_finite() && self.font_scale > 0.0) {
            warn!(font_scale = self.font_scale, "invalid font scale, using 1.0");
            self.font_scale = 1.0;
        }
        if !(self.padding.is_finite() && self.padding >= 0.0) {
            warn!(padding = self.padding, "invalid padding, using default");
            self.padding = constants::PADDING;
        }
        if !(self.slider_radius.is_finite() && self.slider_radius >= 0.0) {
            warn!(radius = self.slider_radius, "invalid slider radius, using default");
            self.slider_radius = constants::SLIDER_RADIUS;
        }
        self
    }
}
