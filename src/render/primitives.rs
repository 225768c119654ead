//! Primitive rasterization on a [`Framebuffer`].
//!
//! # Algorithms
//!
//! - **Bresenham's Line**: one-pixel lines without anti-aliasing
//! - **Wu's Anti-aliased Line**: one-pixel lines with sub-pixel accuracy
//! - **Scanline Polygon Fill**: even-odd fill sampled at pixel centers
//!
//! Wide strokes are filled as quads around the segment.
//!
//! # References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."
//! - Wu, X. (1991). "An Efficient Antialiasing Technique." SIGGRAPH '91.

use crate::color::Rgba;
use crate::framebuffer::Framebuffer;
use crate::geometry::{Line, Point, Rect};

// ============================================================================
// Line Drawing
// ============================================================================

/// Draw a line using Bresenham's algorithm (non-antialiased).
pub fn draw_line(fb: &mut Framebuffer, x0: i32, y0: i32, x1: i32, y1: i32, color: Rgba) {
    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    let mut x = x0;
    let mut y = y0;

    loop {
        if x >= 0 && y >= 0 {
            fb.set_pixel(x as u32, y as u32, color);
        }

        if x == x1 && y == y1 {
            break;
        }

        let e2 = 2 * err;
        if e2 >= dy {
            if x == x1 {
                break;
            }
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            if y == y1 {
                break;
            }
            err += dx;
            y += sy;
        }
    }
}

/// Draw an anti-aliased line using Wu's algorithm.
///
/// Two pixels are plotted at each step along the major axis, weighted by the
/// fractional distance from the ideal line.
pub fn draw_line_aa(fb: &mut Framebuffer, x0: f32, y0: f32, x1: f32, y1: f32, color: Rgba) {
    let steep = (y1 - y0).abs() > (x1 - x0).abs();

    let (x0, y0, x1, y1) = if steep { (y0, x0, y1, x1) } else { (x0, y0, x1, y1) };

    let (x0, y0, x1, y1) = if x0 > x1 { (x1, y1, x0, y0) } else { (x0, y0, x1, y1) };

    let dx = x1 - x0;
    let dy = y1 - y0;
    let gradient = if dx.abs() < f32::EPSILON { 1.0 } else { dy / dx };

    // First endpoint
    let xend = x0.round();
    let yend = y0 + gradient * (xend - x0);
    let xgap = rfpart(x0 + 0.5);
    let xpxl1 = xend as i32;
    let ypxl1 = yend.floor() as i32;

    plot_pair(fb, steep, xpxl1, ypxl1, yend, xgap, color);

    let mut intery = yend + gradient;

    // Second endpoint
    let xend = x1.round();
    let yend = y1 + gradient * (xend - x1);
    let xgap = fpart(x1 + 0.5);
    let xpxl2 = xend as i32;
    let ypxl2 = yend.floor() as i32;

    plot_pair(fb, steep, xpxl2, ypxl2, yend, xgap, color);

    for x in (xpxl1 + 1)..xpxl2 {
        plot_pair(fb, steep, x, intery.floor() as i32, intery, 1.0, color);
        intery += gradient;
    }
}

/// Plot the two pixels straddling the ideal line at one major-axis step.
#[inline]
fn plot_pair(fb: &mut Framebuffer, steep: bool, major: i32, minor: i32, exact: f32, gap: f32, color: Rgba) {
    if steep {
        plot(fb, minor, major, color, rfpart(exact) * gap);
        plot(fb, minor + 1, major, color, fpart(exact) * gap);
    } else {
        plot(fb, major, minor, color, rfpart(exact) * gap);
        plot(fb, major, minor + 1, color, fpart(exact) * gap);
    }
}

/// Plot a pixel with intensity (for anti-aliased drawing).
#[inline]
fn plot(fb: &mut Framebuffer, x: i32, y: i32, color: Rgba, intensity: f32) {
    if x >= 0 && y >= 0 && x < fb.width() as i32 && y < fb.height() as i32 {
        let alpha = (f32::from(color.a) * intensity) as u8;
        fb.blend_pixel(x as u32, y as u32, color.with_alpha(alpha));
    }
}

/// Fractional part of a float.
#[inline]
fn fpart(x: f32) -> f32 {
    x - x.floor()
}

/// Reverse fractional part.
#[inline]
fn rfpart(x: f32) -> f32 {
    1.0 - fpart(x)
}

/// Draw a segment of any width.
///
/// Widths up to one pixel use Wu (or Bresenham when `antialiased` is off);
/// wider segments are filled as a quad.
pub fn draw_segment(fb: &mut Framebuffer, line: Line, width: f32, color: Rgba, antialiased: bool) {
    let (a, b) = (line.start, line.end);
    if width <= 1.0 {
        if antialiased {
            draw_line_aa(fb, a.x as f32, a.y as f32, b.x as f32, b.y as f32, color);
        } else {
            draw_line(
                fb,
                a.x.round() as i32,
                a.y.round() as i32,
                b.x.round() as i32,
                b.y.round() as i32,
                color,
            );
        }
        return;
    }

    let length = line.length();
    if length < f64::EPSILON {
        return;
    }
    let half = f64::from(width) / 2.0;
    let nx = -(b.y - a.y) / length * half;
    let ny = (b.x - a.x) / length * half;
    fill_polygon(
        fb,
        &[
            a.offset(nx, ny),
            b.offset(nx, ny),
            b.offset(-nx, -ny),
            a.offset(-nx, -ny),
        ],
        color,
    );
}

// ============================================================================
// Clipping and Dashing
// ============================================================================

/// Parameter range `(t0, t1)` of the part of `line` inside `bounds`.
///
/// Liang-Barsky clipping. Returns `None` when the segment misses `bounds`.
#[must_use]
pub fn clip_line(line: Line, bounds: Rect) -> Option<(f64, f64)> {
    let (a, b) = (line.start, line.end);
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let mut t0: f64 = 0.0;
    let mut t1: f64 = 1.0;

    for (p, q) in [
        (-dx, a.x - bounds.x),
        (dx, bounds.x + bounds.width - a.x),
        (-dy, a.y - bounds.y),
        (dy, bounds.y + bounds.height - a.y),
    ] {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
        } else {
            let t = q / p;
            if p < 0.0 {
                if t > t1 {
                    return None;
                }
                t0 = t0.max(t);
            } else {
                if t < t0 {
                    return None;
                }
                t1 = t1.min(t);
            }
        }
    }

    (t0 <= t1).then_some((t0, t1))
}

/// Position within a dash pattern.
struct DashCursor<'a> {
    pattern: &'a [f32],
    cycle: f64,
    index: usize,
    remaining: f64,
}

impl<'a> DashCursor<'a> {
    fn new(pattern: &'a [f32], cycle: f64) -> Self {
        Self {
            pattern,
            cycle,
            index: 0,
            remaining: f64::from(pattern[0]),
        }
    }

    fn step(&mut self, distance: f64) {
        self.remaining -= distance;
        while self.remaining <= 0.0 {
            self.index = (self.index + 1) % self.pattern.len();
            self.remaining += f64::from(self.pattern[self.index]);
        }
    }

    /// Move the phase forward without emitting dashes.
    fn skip(&mut self, distance: f64) {
        let mut left = distance % self.cycle;
        while left > 0.0 {
            let step = self.remaining.min(left);
            left -= step;
            self.step(step);
        }
    }

    /// Emit the "on" runs of `segment` between `from` and `to` (in pixels
    /// along the segment).
    fn walk(&mut self, segment: Line, length: f64, from: f64, to: f64, out: &mut Vec<Line>) {
        let mut travelled = from;
        while travelled < to {
            let step = self.remaining.min(to - travelled);
            if self.index % 2 == 0 && step > 0.0 {
                let start = segment.start.lerp(segment.end, travelled / length);
                let end = segment.start.lerp(segment.end, (travelled + step) / length);
                out.push(Line::new(start, end));
            }
            travelled += step;
            self.step(step);
        }
    }
}

/// Split a polyline into its visible dash segments inside `bounds`.
///
/// `pattern` alternates on and off lengths. The dash phase carries over from
/// one segment to the next, so corners do not restart the pattern. Parts of
/// the polyline outside `bounds` only advance the phase, so the output size
/// depends on the length inside `bounds` alone.
#[must_use]
pub fn dash_polyline(points: &[Point], pattern: &[f32], bounds: Rect) -> Vec<Line> {
    let cycle: f64 = pattern.iter().map(|&len| f64::from(len)).sum();
    if points.len() < 2 || cycle <= 0.0 {
        return points
            .windows(2)
            .filter_map(|w| {
                let segment = Line::new(w[0], w[1]);
                let (t0, t1) = clip_line(segment, bounds)?;
                Some(Line::new(
                    segment.start.lerp(segment.end, t0),
                    segment.start.lerp(segment.end, t1),
                ))
            })
            .collect();
    }

    let mut dashes = Vec::new();
    let mut cursor = DashCursor::new(pattern, cycle);

    for w in points.windows(2) {
        let segment = Line::new(w[0], w[1]);
        let length = segment.length();
        if length <= 0.0 {
            continue;
        }
        match clip_line(segment, bounds) {
            Some((t0, t1)) => {
                cursor.skip(t0 * length);
                cursor.walk(segment, length, t0 * length, t1 * length, &mut dashes);
                cursor.skip((1.0 - t1) * length);
            }
            None => cursor.skip(length),
        }
    }

    dashes
}

// ============================================================================
// Polygon Fill
// ============================================================================

/// Fill a polygon with the even-odd rule, sampling at pixel centers.
pub fn fill_polygon(fb: &mut Framebuffer, vertices: &[Point], color: Rgba) {
    if vertices.len() < 3 {
        return;
    }

    let (min_y, max_y) = vertices
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| {
            (lo.min(p.y), hi.max(p.y))
        });
    if !min_y.is_finite() || !max_y.is_finite() {
        return;
    }

    let first_row = (min_y - 0.5).ceil().max(0.0) as i64;
    let last_row = (max_y - 0.5).floor().min(f64::from(fb.height()) - 1.0) as i64;

    let mut crossings: Vec<f64> = Vec::with_capacity(vertices.len());
    for row in first_row..=last_row {
        let yc = row as f64 + 0.5;
        crossings.clear();

        for (i, a) in vertices.iter().enumerate() {
            let b = vertices[(i + 1) % vertices.len()];
            if (a.y <= yc) != (b.y <= yc) {
                let t = (yc - a.y) / (b.y - a.y);
                crossings.push(a.x + t * (b.x - a.x));
            }
        }
        crossings.sort_by(f64::total_cmp);

        for pair in crossings.chunks_exact(2) {
            let x_start = (pair[0] - 0.5).ceil().max(0.0);
            let x_end = (pair[1] - 0.5).floor().min(f64::from(fb.width()) - 1.0);
            if x_end >= x_start {
                let width = (x_end - x_start) as u32 + 1;
                fb.fill_rect(x_start as u32, row as u32, width, 1, color);
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
