//! Data-space to pixel-space mapping for one draw pass.
//!
//! A [`Viewport`] is never cached: it is fitted from the current dataset and
//! the current surface size every time the graph is painted. The fit uses a
//! single uniform scale for both axes, shrunk so the graph has breathing room,
//! and then pads the data ranges symmetrically so the content is centered.

use crate::dataset::Dataset;
use crate::error::{Error, Result};
use crate::geometry::Point;

/// Pixels subtracted from each panel dimension when computing the raw scale.
pub const SCALE_INSET: f64 = 10.0;

/// Pixels subtracted from each panel dimension when padding the ranges
/// (half on each side).
pub const CONTENT_INSET: f64 = 40.0;

/// Fraction of the raw scale actually used.
pub const SHRINK_FACTOR: f64 = 0.6;

/// Span used for an axis whose values all coincide.
pub const DEGENERATE_SPAN: f64 = 1.0;

/// Which ranges must contain zero for the X axis to be drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum XAxisRule {
    /// Drawn when the y range OR the x range contains zero.
    #[default]
    Legacy,
    /// Drawn only when the y range contains zero.
    Strict,
}

/// Mapping parameters for one draw pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Padded minimum x.
    pub min_x: f64,
    /// Padded maximum x.
    pub max_x: f64,
    /// Padded minimum y.
    pub min_y: f64,
    /// Padded maximum y.
    pub max_y: f64,
    /// Pixels per data unit, shared by both axes.
    pub scale: f64,
    /// Panel width in pixels.
    pub width: f64,
    /// Panel height in pixels.
    pub height: f64,
}

impl Viewport {
    /// Fit a viewport to `dataset` on a `width` x `height` panel.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyData`] for an empty dataset and
    /// [`Error::InvalidDimensions`] when either dimension is not larger than
    /// [`CONTENT_INSET`].
    pub fn fit(dataset: &Dataset, width: u32, height: u32) -> Result<Self> {
        let (Some((min_x, max_x)), Some((min_y, max_y))) =
            (dataset.x_bounds(), dataset.y_bounds())
        else {
            return Err(Error::EmptyData);
        };

        let w = f64::from(width);
        let h = f64::from(height);
        if w <= CONTENT_INSET || h <= CONTENT_INSET {
            return Err(Error::InvalidDimensions { width, height });
        }

        let (mut min_x, mut max_x) = widen_degenerate(min_x, max_x);
        let (mut min_y, mut max_y) = widen_degenerate(min_y, max_y);

        let scale_x = (w - SCALE_INSET) / (max_x - min_x);
        let scale_y = (h - SCALE_INSET) / (max_y - min_y);
        let scale = scale_x.min(scale_y) * SHRINK_FACTOR;

        let x_increment = (w - CONTENT_INSET) / scale - (max_x - min_x);
        let y_increment = (h - CONTENT_INSET) / scale - (max_y - min_y);

        min_x -= x_increment / 2.0;
        max_x += x_increment / 2.0;
        min_y -= y_increment / 2.0;
        max_y += y_increment / 2.0;

        Ok(Self {
            min_x,
            max_x,
            min_y,
            max_y,
            scale,
            width: w,
            height: h,
        })
    }

    /// Map a data-space point to pixel space. Larger y maps higher up.
    #[must_use]
    pub fn to_pixel(&self, x: f64, y: f64) -> Point {
        let delta_x = x - self.min_x;
        let delta_y = self.max_y - y;
        Point::new(
            delta_x * self.scale + self.width / 2.0 - (self.max_x - self.min_x) * self.scale / 2.0,
            delta_y * self.scale + self.height / 2.0 - (self.max_y - self.min_y) * self.scale / 2.0,
        )
    }

    /// Whether `min_x <= 0 <= max_x`.
    #[must_use]
    pub fn x_straddles_zero(&self) -> bool {
        self.min_x <= 0.0 && self.max_x >= 0.0
    }

    /// Whether `min_y <= 0 <= max_y`.
    #[must_use]
    pub fn y_straddles_zero(&self) -> bool {
        self.min_y <= 0.0 && self.max_y >= 0.0
    }

    /// The vertical axis sits at x = 0 and is drawn when that line is in range.
    #[must_use]
    pub fn shows_y_axis(&self) -> bool {
        self.x_straddles_zero()
    }

    /// The horizontal axis sits at y = 0.
    #[must_use]
    pub fn shows_x_axis(&self, rule: XAxisRule) -> bool {
        match rule {
            XAxisRule::Legacy => self.y_straddles_zero() || self.x_straddles_zero(),
            XAxisRule::Strict => self.y_straddles_zero(),
        }
    }

    /// The "0" label is drawn only when the origin itself is in range.
    #[must_use]
    pub fn shows_origin_label(&self) -> bool {
        self.x_straddles_zero() && self.y_straddles_zero()
    }
}

/// Replace an effectively zero span with [`DEGENERATE_SPAN`] centered on it.
fn widen_degenerate(min: f64, max: f64) -> (f64, f64) {
    let magnitude = min.abs().max(max.abs()).max(1.0);
    if max - min <= f64::EPSILON * magnitude {
        let center = min + (max - min) / 2.0;
        (center - DEGENERATE_SPAN / 2.0, center + DEGENERATE_SPAN / 2.0)
    } else {
        (min, max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    fn dataset(pairs: &[(f64, f64)]) -> Dataset {
        Dataset::from_pairs(pairs).unwrap()
    }

    #[test]
    fn test_fit_sample() {
        let vp = Viewport::fit(&Dataset::sample(), 800, 600).unwrap();

        // scale_x = 790 / 4, scale_y = 590 / 4, min * 0.6
        assert_relative_eq!(vp.scale, 590.0 / 4.0 * 0.6, epsilon = 1e-9);

        // Padded ranges fill the panel minus the 20px inset per side.
        assert_relative_eq!((vp.max_x - vp.min_x) * vp.scale, 760.0, epsilon = 1e-9);
        assert_relative_eq!((vp.max_y - vp.min_y) * vp.scale, 560.0, epsilon = 1e-9);

        // Padding is symmetric around the data center.
        assert_relative_eq!((vp.min_x + vp.max_x) / 2.0, 2.0, epsilon = 1e-9);
        assert_relative_eq!((vp.min_y + vp.max_y) / 2.0, 3.0, epsilon = 1e-9);
    }

    #[test]
    fn test_to_pixel_centers_data() {
        let vp = Viewport::fit(&Dataset::sample(), 800, 600).unwrap();
        let center = vp.to_pixel(2.0, 3.0);
        assert_relative_eq!(center.x, 400.0, epsilon = 1e-9);
        assert_relative_eq!(center.y, 300.0, epsilon = 1e-9);
    }

    #[test]
    fn test_to_pixel_flips_y() {
        let vp = Viewport::fit(&Dataset::sample(), 800, 600).unwrap();
        let low = vp.to_pixel(2.0, 1.0);
        let high = vp.to_pixel(2.0, 5.0);
        assert!(high.y < low.y);
    }

    #[test]
    fn test_padded_corners_land_on_inset() {
        let vp = Viewport::fit(&Dataset::sample(), 800, 600).unwrap();
        let top_left = vp.to_pixel(vp.min_x, vp.max_y);
        let bottom_right = vp.to_pixel(vp.max_x, vp.min_y);
        assert_relative_eq!(top_left.x, 20.0, epsilon = 1e-9);
        assert_relative_eq!(top_left.y, 20.0, epsilon = 1e-9);
        assert_relative_eq!(bottom_right.x, 780.0, epsilon = 1e-9);
        assert_relative_eq!(bottom_right.y, 580.0, epsilon = 1e-9);
    }

    #[test]
    fn test_fit_empty() {
        let result = Viewport::fit(&Dataset::default(), 800, 600);
        assert!(matches!(result, Err(Error::EmptyData)));
    }

    #[test]
    fn test_fit_too_small() {
        let result = Viewport::fit(&Dataset::sample(), 40, 600);
        assert!(matches!(
            result,
            Err(Error::InvalidDimensions {
                width: 40,
                height: 600
            })
        ));
    }

    #[test]
    fn test_single_point_is_centered() {
        let vp = Viewport::fit(&dataset(&[(3.0, 5.0)]), 400, 300).unwrap();
        assert!(vp.scale.is_finite());
        let p = vp.to_pixel(3.0, 5.0);
        assert_relative_eq!(p.x, 200.0, epsilon = 1e-9);
        assert_relative_eq!(p.y, 150.0, epsilon = 1e-9);
    }

    #[test]
    fn test_flat_line_is_finite() {
        let vp = Viewport::fit(&dataset(&[(0.0, 2.0), (1.0, 2.0), (2.0, 2.0)]), 400, 300).unwrap();
        assert!(vp.scale.is_finite());
        assert!(vp.min_y < 2.0 && vp.max_y > 2.0);
        let p = vp.to_pixel(1.0, 2.0);
        assert_relative_eq!(p.y, 150.0, epsilon = 1e-9);
    }

    #[test]
    fn test_axis_predicates() {
        let vp = Viewport::fit(&dataset(&[(-1.0, -1.0), (0.0, 0.0), (1.0, 1.0)]), 400, 400).unwrap();
        assert!(vp.shows_y_axis());
        assert!(vp.shows_x_axis(XAxisRule::Legacy));
        assert!(vp.shows_x_axis(XAxisRule::Strict));
        assert!(vp.shows_origin_label());
    }

    #[test]
    fn test_legacy_x_axis_rule() {
        // y never reaches zero but x does: legacy still draws the X axis.
        let vp = Viewport::fit(&dataset(&[(-1.0, 10.0), (1.0, 11.0)]), 400, 400).unwrap();
        assert!(vp.x_straddles_zero());
        assert!(!vp.y_straddles_zero());
        assert!(vp.shows_x_axis(XAxisRule::Legacy));
        assert!(!vp.shows_x_axis(XAxisRule::Strict));
        assert!(!vp.shows_origin_label());
    }

    #[test]
    fn test_positive_x_hides_y_axis() {
        let vp = Viewport::fit(&dataset(&[(5.0, -1.0), (6.0, 1.0)]), 400, 400).unwrap();
        assert!(!vp.shows_y_axis());
        assert!(vp.shows_x_axis(XAxisRule::Strict));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(256))]

        /// Every in-range point stays on the panel.
        #[test]
        fn prop_points_land_on_panel(
            ys in prop::collection::vec(-1.0e6f64..1.0e6, 1..40),
            x0 in -1.0e6f64..1.0e6,
            step in 1.0e-3f64..1.0e3,
            width in 100u32..2000,
            height in 100u32..2000,
        ) {
            let pairs: Vec<(f64, f64)> = ys
                .iter()
                .enumerate()
                .map(|(i, &y)| (x0 + step * i as f64, y))
                .collect();
            let data = Dataset::from_pairs(&pairs).unwrap();
            let vp = Viewport::fit(&data, width, height).unwrap();

            for p in data.points() {
                let px = vp.to_pixel(p.x, p.y);
                prop_assert!(px.x >= 0.0 && px.x <= f64::from(width), "x {} outside {}", px.x, width);
                prop_assert!(px.y >= 0.0 && px.y <= f64::from(height), "y {} outside {}", px.y, height);
            }
        }

        /// Fitting twice gives identical parameters.
        #[test]
        fn prop_fit_is_idempotent(
            ys in prop::collection::vec(-100.0f64..100.0, 1..20),
            width in 41u32..1500,
            height in 41u32..1500,
        ) {
            let pairs: Vec<(f64, f64)> = ys.iter().enumerate().map(|(i, &y)| (i as f64, y)).collect();
            let data = Dataset::from_pairs(&pairs).unwrap();
            let first = Viewport::fit(&data, width, height).unwrap();
            let second = Viewport::fit(&data, width, height).unwrap();
            prop_assert_eq!(first, second);
        }

        /// Data well to the right of zero never gets a Y axis.
        #[test]
        fn prop_positive_x_has_no_y_axis(min_x in 2.0f64..50.0, span in 0.1f64..1.0) {
            let data = Dataset::from_pairs(&[(min_x, 0.0), (min_x + span, 1.0)]).unwrap();
            let vp = Viewport::fit(&data, 640, 480).unwrap();
            prop_assert!(!vp.shows_y_axis());
        }

        /// Data whose x range contains zero always gets a Y axis.
        #[test]
        fn prop_straddling_x_has_y_axis(left in 0.1f64..50.0, right in 0.1f64..50.0) {
            let data = Dataset::from_pairs(&[(-left, 0.0), (right, 1.0)]).unwrap();
            let vp = Viewport::fit(&data, 640, 480).unwrap();
            prop_assert!(vp.shows_y_axis());
        }
    }
}
