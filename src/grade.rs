//! Grade ↔ font size mapping.
//!
//! Grades are 1-based. Grade 1 is the minimum size, the last grade is the
//! maximum size, and intermediate grades are evenly spaced between them.

/// Tolerance applied before truncating a size to a grade, so that sizes
/// produced by [`GradeScale::size`] map back to the same grade.
const GRADE_EPSILON: f64 = 1e-9;

/// Linear mapping between grades and font sizes in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradeScale {
    min_size: f64,
    max_size: f64,
    total_grade: usize,
}

impl GradeScale {
    /// `total_grade` is raised to 2 if smaller.
    pub fn new(min_size: f64, max_size: f64, total_grade: usize) -> Self {
        Self {
            min_size,
            max_size,
            total_grade: total_grade.max(2),
        }
    }

    pub fn min_size(&self) -> f64 {
        self.min_size
    }

    pub fn max_size(&self) -> f64 {
        self.max_size
    }

    pub fn total_grade(&self) -> usize {
        self.total_grade
    }

    /// Size difference between two neighbouring grades.
    pub fn per_grade_delta(&self) -> f64 {
        (self.max_size - self.min_size) / (self.total_grade - 1) as f64
    }

    /// Clamp a grade into `[1, total_grade]`.
    pub fn clamp(&self, grade: usize) -> usize {
        grade.clamp(1, self.total_grade)
    }

    /// Font size of `grade`. Out-of-range grades are clamped first.
    pub fn size(&self, grade: usize) -> f64 {
        let grade = self.clamp(grade);
        self.min_size + self.per_grade_delta() * (grade - 1) as f64
    }

    /// Grade whose size is the largest not exceeding `size`, clamped.
    pub fn grade_for_size(&self, size: f64) -> usize {
        let delta = self.per_grade_delta();
        if delta == 0.0 || !size.is_finite() {
            return 1;
        }
        let steps = ((size - self.min_size) / delta + GRADE_EPSILON).floor();
        if steps < 0.0 {
            1
        } else {
            // Saturating float→int cast keeps huge sizes in range.
            self.clamp((steps as usize).saturating_add(1))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scale() -> GradeScale {
        GradeScale::new(15.0, 25.0, 6)
    }

    #[test]
    fn endpoints_match_configured_sizes() {
        let s = scale();
        assert_eq!(s.size(1), 15.0);
        assert_eq!(s.size(6), 25.0);
    }

    #[test]
    fn intermediate_grades_interpolate() {
        let s = scale();
        assert_eq!(s.per_grade_delta(), 2.0);
        assert_eq!(s.size(3), 19.0);
        assert_eq!(s.size(4), 21.0);
    }

    #[test]
    fn size_round_trips_to_grade() {
        let s = GradeScale::new(12.0, 31.0, 7);
        for g in 1..=7 {
            assert_eq!(s.grade_for_size(s.size(g)), g);
        }
    }

    #[test]
    fn grade_for_size_truncates_between_grades() {
        let s = scale();
        assert_eq!(s.grade_for_size(20.9), 3);
        assert_eq!(s.grade_for_size(21.0), 4);
    }

    #[test]
    fn grade_for_size_clamps() {
        let s = scale();
        assert_eq!(s.grade_for_size(0.0), 1);
        assert_eq!(s.grade_for_size(-40.0), 1);
        assert_eq!(s.grade_for_size(1000.0), 6);
        assert_eq!(s.grade_for_size(f64::NAN), 1);
    }

    #[test]
    fn degenerate_grade_count_is_raised() {
        let s = GradeScale::new(15.0, 25.0, 1);
        assert_eq!(s.total_grade(), 2);
        assert_eq!(s.size(2), 25.0);
    }

    #[test]
    fn out_of_range_grades_clamp() {
        let s = scale();
        assert_eq!(s.size(0), 15.0);
        assert_eq!(s.size(9), 25.0);
    }
}
