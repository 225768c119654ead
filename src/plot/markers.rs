//! Per-point parity markers.
//!
//! Each data point gets a four-pointed star made of closed triangles, colored
//! by whether its truncated y value is even or odd.

use crate::dataset::Dataset;
use crate::geometry::Point;
use crate::render::{Path, PlotStyle, Surface};
use crate::viewport::Viewport;

/// Parity of a y value after truncation toward zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parity {
    /// Truncated value is even.
    Even,
    /// Truncated value is odd.
    Odd,
}

impl Parity {
    /// Classify `y`. Values are truncated toward zero first, so `-2.9` is even.
    ///
    /// The truncation saturates at the `i32` range: anything above
    /// `i32::MAX` is odd and anything below `i32::MIN` is even.
    #[must_use]
    pub fn of(y: f64) -> Self {
        if (y as i32) % 2 == 0 {
            Self::Even
        } else {
            Self::Odd
        }
    }
}

/// The four triangles of a marker centered at `center`.
///
/// Order is up, down, left, right. Each triangle is `size` long and
/// `size` wide at its base.
#[must_use]
pub fn marker_triangles(center: Point, size: f64) -> [Path; 4] {
    let half = size / 2.0;
    let Point { x: cx, y: cy } = center;
    [
        Path::triangle(
            Point::new(cx, cy - size),
            Point::new(cx - half, cy),
            Point::new(cx + half, cy),
        ),
        Path::triangle(
            Point::new(cx, cy + size),
            Point::new(cx - half, cy),
            Point::new(cx + half, cy),
        ),
        Path::triangle(
            Point::new(cx - size, cy),
            Point::new(cx, cy - half),
            Point::new(cx, cy + half),
        ),
        Path::triangle(
            Point::new(cx + size, cy),
            Point::new(cx, cy - half),
            Point::new(cx, cy + half),
        ),
    ]
}

/// Draw one marker per point. Triangles are outlined, then filled.
pub fn paint_markers<S: Surface + ?Sized>(
    surface: &mut S,
    dataset: &Dataset,
    viewport: &Viewport,
    style: &PlotStyle,
) {
    for point in dataset.points() {
        let color = match Parity::of(point.y) {
            Parity::Even => style.even_color,
            Parity::Odd => style.odd_color,
        };
        let stroke = style.marker_stroke(color);
        let center = viewport.to_pixel(point.x, point.y);
        for triangle in marker_triangles(center, style.marker_size) {
            surface.stroke_path(&triangle, &stroke);
            surface.fill_path(&triangle, color);
        }
    }
}
