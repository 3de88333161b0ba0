//! Layout pass: baseline, ticks, label anchors, and handle rest position.
//!
//! Everything here is a pure function of the configuration and the widget
//! size, so it can be recomputed whenever the bounds change.

use floem::kurbo::{Line, Point};

use crate::config::FontResizeConfig;
use crate::constants;

/// Sizing constraint offered to the widget along one axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Measure {
    /// The parent dictates the size.
    Exactly(f64),
    /// The widget may be at most this large.
    AtMost(f64),
    /// No constraint.
    Unspecified,
}

/// Resolve the final size along one axis.
pub fn measure(spec: Measure, preferred: f64) -> f64 {
    match spec {
        Measure::Exactly(size) => size,
        Measure::AtMost(size) => preferred.min(size),
        Measure::Unspecified => preferred,
    }
}

/// Where the three labels sit; `y` values are text baselines.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelAnchors {
    pub left: Point,
    pub middle: Point,
    pub right: Point,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Geometry {
    width: f64,
    height: f64,
    baseline: Line,
    ticks: Vec<Line>,
    spacing: f64,
    labels: LabelAnchors,
}

impl Geometry {
    pub fn compute(config: &FontResizeConfig, width: f64, height: f64) -> Self {
        let total = config.total_grade.max(2);
        let length = config
            .horizontal_line_length
            .unwrap_or(width - 2.0 * config.padding)
            .max(0.0);
        let tick_height = config
            .vertical_line_length
            .unwrap_or(constants::VERTICAL_LINE_LENGTH);

        let start_x = (width - length) / 2.0;
        let y = height * constants::BASELINE_RATIO;
        let baseline = Line::new((start_x, y), (start_x + length, y));

        let spacing = length / (total - 1) as f64;
        let ticks = (0..total)
            .map(|i| {
                let x = start_x + spacing * i as f64;
                Line::new((x, y - tick_height / 2.0), (x, y + tick_height / 2.0))
            })
            .collect::<Vec<_>>();

        let label_y = y - constants::LABEL_OFFSET;
        let standard = config.standard_grade.clamp(1, total);
        let middle_y = if standard == 1 || standard == total {
            label_y - (constants::MIDDLE_LABEL_LIFT + config.standard_size())
        } else {
            label_y
        };
        let labels = LabelAnchors {
            left: Point::new(baseline.p0.x, label_y),
            middle: Point::new(ticks[standard - 1].p0.x, middle_y),
            right: Point::new(baseline.p1.x, label_y),
        };

        Self {
            width,
            height,
            baseline,
            ticks,
            spacing,
            labels,
        }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn baseline(&self) -> Line {
        self.baseline
    }

    pub fn ticks(&self) -> &[Line] {
        &self.ticks
    }

    pub fn spacing(&self) -> f64 {
        self.spacing
    }

    pub fn labels(&self) -> LabelAnchors {
        self.labels
    }

    pub fn start_x(&self) -> f64 {
        self.baseline.p0.x
    }

    pub fn stop_x(&self) -> f64 {
        self.baseline.p1.x
    }

    pub fn contains(&self, pos: Point) -> bool {
        (0.0..=self.width).contains(&pos.x) && (0.0..=self.height).contains(&pos.y)
    }

    pub fn clamp_x(&self, x: f64) -> f64 {
        if x.is_nan() {
            return self.start_x();
        }
        x.clamp(self.start_x(), self.stop_x())
    }

    /// Horizontal position of the tick at 0-based `index`.
    pub fn tick_x(&self, index: usize) -> f64 {
        let index = index.min(self.ticks.len() - 1);
        self.ticks[index].p0.x
    }

    /// Resting point of the handle on the tick at 0-based `index`.
    pub fn handle_rest(&self, index: usize) -> Point {
        let index = index.min(self.ticks.len() - 1);
        let tick = self.ticks[index];
        Point::new(tick.p0.x, tick.p0.y + (tick.p1.y - tick.p0.y).abs() / 2.0)
    }

    /// 0-based index of the tick nearest `x`, ties rounding up.
    pub fn nearest_tick(&self, x: f64) -> usize {
        let last = self.ticks.len() - 1;
        if self.spacing <= 0.0 {
            return 0;
        }
        let offset = self.clamp_x(x) - self.start_x();
        let index = (offset / self.spacing).floor();
        let remainder = offset - index * self.spacing;
        let mut index = index as usize;
        if remainder >= self.spacing / 2.0 {
            index += 1;
        }
        index.min(last)
    }
}
