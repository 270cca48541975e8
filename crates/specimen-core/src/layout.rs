// this_file: crates/specimen-core/src/layout.rs

//! Vertical rhythm and horizontal placement of specimen lines
//!
//! All baselines are whole pixels. The reference label sits on the first
//! baseline, the title one line below, and sample lines follow.

use crate::config::SpecimenConfig;

/// Top and left margin shared by the ruler and sample lines
pub const MARGIN: i32 = 10;

/// Length of each ruler arm in pixels
pub const RULER_LENGTH: u32 = 200;

/// Left edge of the reference-font label
pub const REFERENCE_LABEL_X: f32 = 100.0;

/// Baseline positions for a fixed size, spacing and resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineMetrics {
    /// Baseline of the reference label: `10 + ceil(size * dpi / 72)`
    pub first_baseline: i32,
    /// Distance between baselines: `ceil(size * spacing * dpi / 72)`
    pub line_advance: i32,
}

impl LineMetrics {
    pub fn new(size: f32, spacing: f32, dpi: f32) -> Self {
        let (size, spacing, dpi) = (size as f64, spacing as f64, dpi as f64);
        Self {
            first_baseline: MARGIN.saturating_add((size * dpi / 72.0).ceil() as i32),
            line_advance: (size * spacing * dpi / 72.0).ceil() as i32,
        }
    }

    pub fn from_config(config: &SpecimenConfig) -> Self {
        Self::new(config.size, config.spacing, config.dpi)
    }

    pub fn reference_baseline(&self) -> i32 {
        self.first_baseline
    }

    pub fn title_baseline(&self) -> i32 {
        self.first_baseline.saturating_add(self.line_advance)
    }

    /// Baseline of the `index`-th sample line (zero based).
    ///
    /// Saturates at `i32::MAX`; such a line lies far below any canvas.
    pub fn sample_baseline(&self, index: usize) -> i32 {
        let lines = i32::try_from(index).unwrap_or(i32::MAX).saturating_add(1);
        self.title_baseline()
            .saturating_add(self.line_advance.saturating_mul(lines))
    }
}

/// Left edge that centers a run of `text_width` pixels on the canvas.
///
/// Negative when the text is wider than the canvas.
pub fn centered_x(canvas_width: u32, text_width: f32) -> f32 {
    (canvas_width as f32 - text_width) / 2.0
}

/// Scale factor that makes `text_width` fit in `canvas_width`, never above 1
pub fn fit_scale(canvas_width: u32, text_width: f32) -> f32 {
    if text_width > canvas_width as f32 && text_width > 0.0 {
        canvas_width as f32 / text_width
    } else {
        1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_metrics() {
        let metrics = LineMetrics::from_config(&SpecimenConfig::default());
        assert_eq!(metrics.first_baseline, 110);
        assert_eq!(metrics.line_advance, 150);
        assert_eq!(metrics.reference_baseline(), 110);
        assert_eq!(metrics.title_baseline(), 260);
        assert_eq!(metrics.sample_baseline(0), 410);
        assert_eq!(metrics.sample_baseline(1), 560);
        assert_eq!(metrics.sample_baseline(2), 710);
    }

    #[test]
    fn test_line_advance_is_constant() {
        let metrics = LineMetrics::new(37.0, 1.3, 96.0);
        let gaps: Vec<i32> = (0..5)
            .map(|i| metrics.sample_baseline(i + 1) - metrics.sample_baseline(i))
            .collect();
        assert!(gaps.iter().all(|&g| g == metrics.line_advance));
        // ceil(37 * 1.3 * 96 / 72) = ceil(64.133..)
        assert_eq!(metrics.line_advance, 65);
    }

    #[test]
    fn test_fractional_sizes_round_up() {
        let metrics = LineMetrics::new(10.5, 1.0, 72.0);
        assert_eq!(metrics.first_baseline, 21);
        assert_eq!(metrics.line_advance, 11);
    }

    #[test]
    fn test_huge_sizes_saturate() {
        let metrics = LineMetrics::new(1.0e10, 1.5, 72.0);
        assert_eq!(metrics.first_baseline, i32::MAX);
        assert_eq!(metrics.title_baseline(), i32::MAX);

        let metrics = LineMetrics::new(2.0e7, 1.5, 72.0);
        assert_eq!(metrics.line_advance, 30_000_000);
        assert_eq!(metrics.sample_baseline(100), i32::MAX);
        assert_eq!(metrics.sample_baseline(usize::MAX), i32::MAX);
    }

    #[test]
    fn test_centered_x_symmetric() {
        let x = centered_x(2000, 801.0);
        assert_eq!(x, 599.5);
        let right_margin = 2000.0 - (x + 801.0);
        assert!((x - right_margin).abs() <= 1.0);
    }

    #[test]
    fn test_centered_x_overflow_is_negative() {
        assert_eq!(centered_x(100, 300.0), -100.0);
    }

    #[test]
    fn test_fit_scale() {
        assert_eq!(fit_scale(2000, 1500.0), 1.0);
        assert_eq!(fit_scale(2000, 4000.0), 0.5);
        assert_eq!(fit_scale(2000, 0.0), 1.0);
    }
}
