//! Coordinate axes with arrowheads and `x`, `y`, `0` labels.

use crate::geometry::{Line, Point};
use crate::render::{Path, PlotStyle, Surface};
use crate::viewport::Viewport;

/// Arrowhead pointing up with its tip at `tip`.
#[must_use]
pub fn y_arrowhead(tip: Point) -> Path {
    let mut arrow = Path::new();
    arrow.move_to(tip).line_by(5.0, 20.0).line_by(-10.0, 0.0).close();
    arrow
}

/// Arrowhead pointing right with its tip at `tip`.
#[must_use]
pub fn x_arrowhead(tip: Point) -> Path {
    let mut arrow = Path::new();
    arrow.move_to(tip).line_by(-20.0, -5.0).line_by(0.0, 10.0).close();
    arrow
}

/// Draw whichever axes the viewport's ranges allow.
///
/// Labels are placed from the surface's own text metrics.
pub fn paint_axes<S: Surface + ?Sized>(surface: &mut S, viewport: &Viewport, style: &PlotStyle) {
    let stroke = &style.axis_stroke;
    let font = &style.axis_font;
    let color = stroke.color;

    if viewport.shows_y_axis() {
        let top = viewport.to_pixel(0.0, viewport.max_y);
        let bottom = viewport.to_pixel(0.0, viewport.min_y);
        surface.stroke_line(Line::new(top, bottom), stroke);

        let arrow = y_arrowhead(top);
        surface.stroke_path(&arrow, stroke);
        surface.fill_path(&arrow, color);

        let bounds = surface.text_bounds("y", font);
        surface.draw_text("y", top.offset(10.0, -bounds.y), font, color);
    }

    if viewport.shows_x_axis(style.x_axis_rule) {
        let left = viewport.to_pixel(viewport.min_x, 0.0);
        let right = viewport.to_pixel(viewport.max_x, 0.0);
        surface.stroke_line(Line::new(left, right), stroke);

        let arrow = x_arrowhead(right);
        surface.stroke_path(&arrow, stroke);
        surface.fill_path(&arrow, color);

        let bounds = surface.text_bounds("x", font);
        surface.draw_text("x", right.offset(-bounds.width - 10.0, bounds.y), font, color);
    }

    if viewport.shows_origin_label() {
        let zero = viewport.to_pixel(0.0, 0.0);
        let bounds = surface.text_bounds("0", font);
        surface.draw_text("0", zero.offset(-bounds.width / 2.0, bounds.height), font, color);
    }
}
