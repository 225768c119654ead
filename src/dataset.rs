//! Data-space points and the ordered dataset a graph is drawn from.

use crate::error::{Error, Result};

/// A point in data space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DataPoint {
    /// X value.
    pub x: f64,
    /// Y value.
    pub y: f64,
}

impl DataPoint {
    /// Create a new data point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for DataPoint {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

/// An ordered sequence of points, assumed sorted by ascending x.
///
/// The x range is read from the first and last points rather than scanned.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Dataset {
    points: Vec<DataPoint>,
}

impl Dataset {
    /// Create a dataset, rejecting NaN and infinite coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NonFiniteValue`] with the index of the first bad point.
    pub fn new(points: Vec<DataPoint>) -> Result<Self> {
        if let Some(index) = points
            .iter()
            .position(|p| !p.x.is_finite() || !p.y.is_finite())
        {
            return Err(Error::NonFiniteValue { index });
        }
        Ok(Self { points })
    }

    /// Create a dataset from `(x, y)` pairs.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NonFiniteValue`] if any coordinate is not finite.
    pub fn from_pairs(pairs: &[(f64, f64)]) -> Result<Self> {
        Self::new(pairs.iter().copied().map(DataPoint::from).collect())
    }

    /// The five-point sample written by the `graphics-data-writer` binary.
    #[must_use]
    pub fn sample() -> Self {
        Self {
            points: vec![
                DataPoint::new(0.0, 1.0),
                DataPoint::new(1.0, 2.0),
                DataPoint::new(2.0, 3.0),
                DataPoint::new(3.0, 4.0),
                DataPoint::new(4.0, 5.0),
            ],
        }
    }

    /// The points in order.
    #[must_use]
    pub fn points(&self) -> &[DataPoint] {
        &self.points
    }

    /// Number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the dataset has no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// X range taken from the first and last points, ordered so `min <= max`.
    #[must_use]
    pub fn x_bounds(&self) -> Option<(f64, f64)> {
        let first = self.points.first()?.x;
        let last = self.points.last()?.x;
        Some((first.min(last), first.max(last)))
    }

    /// Y range scanned over every point.
    #[must_use]
    pub fn y_bounds(&self) -> Option<(f64, f64)> {
        let first = self.points.first()?.y;
        Some(
            self.points
                .iter()
                .skip(1)
                .fold((first, first), |(min, max), p| (min.min(p.y), max.max(p.y))),
        )
    }

    /// Whether x values never decrease.
    #[must_use]
    pub fn is_sorted_by_x(&self) -> bool {
        self.points.windows(2).all(|w| w[0].x <= w[1].x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_pairs() {
        let data = Dataset::from_pairs(&[(0.0, 1.0), (1.0, 2.0)]).unwrap();
        assert_eq!(data.len(), 2);
        assert_eq!(data.points()[1], DataPoint::new(1.0, 2.0));
    }

    #[test]
    fn test_rejects_non_finite() {
        let result = Dataset::from_pairs(&[(0.0, 1.0), (1.0, f64::NAN)]);
        assert!(matches!(result, Err(Error::NonFiniteValue { index: 1 })));

        let result = Dataset::from_pairs(&[(f64::INFINITY, 1.0)]);
        assert!(matches!(result, Err(Error::NonFiniteValue { index: 0 })));
    }

    #[test]
    fn test_x_bounds_use_endpoints() {
        // The middle point is outside the endpoint range and is ignored.
        let data = Dataset::from_pairs(&[(0.0, 0.0), (10.0, 0.0), (4.0, 0.0)]).unwrap();
        assert_eq!(data.x_bounds(), Some((0.0, 4.0)));
        assert!(!data.is_sorted_by_x());
    }

    #[test]
    fn test_y_bounds_scan() {
        let data = Dataset::from_pairs(&[(0.0, 3.0), (1.0, -2.0), (2.0, 7.5), (3.0, 1.0)]).unwrap();
        assert_eq!(data.y_bounds(), Some((-2.0, 7.5)));
    }

    #[test]
    fn test_empty_bounds() {
        let data = Dataset::default();
        assert!(data.is_empty());
        assert_eq!(data.x_bounds(), None);
        assert_eq!(data.y_bounds(), None);
    }

    #[test]
    fn test_sample() {
        let data = Dataset::sample();
        assert_eq!(data.len(), 5);
        assert!(data.is_sorted_by_x());
        assert_eq!(data.x_bounds(), Some((0.0, 4.0)));
        assert_eq!(data.y_bounds(), Some((1.0, 5.0)));
    }
}
