//! Drawing surface abstraction and rasterization.
//!
//! The graph renderer never owns a window or canvas. It draws through the
//! [`Surface`] capability trait, passing an immutable style with every call.
//! Drawing phases are bracketed with [`with_layer`], which always pairs
//! [`Surface::begin_layer`] with [`Surface::end_layer`].

pub mod font;
mod path;
mod primitives;
mod style;

pub use path::{Path, PathCommand, Subpath};
pub use primitives::{dash_polyline, draw_line, draw_line_aa, draw_segment, fill_polygon};
pub use style::{Font, PlotStyle, Stroke, GRAPH_DASH_PATTERN};

use crate::color::Rgba;
use crate::geometry::{Line, Point, Rect};

/// A drawing phase. Phases are always painted in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Layer {
    /// Panel fill.
    Background,
    /// Title text.
    Title,
    /// Axis lines, arrowheads and labels.
    Axes,
    /// Connecting path through the points.
    Graph,
    /// Per-point parity markers.
    Markers,
}

/// Capability set a host provides to the renderer.
pub trait Surface {
    /// Width in pixels.
    fn width(&self) -> u32;

    /// Height in pixels.
    fn height(&self) -> u32;

    /// Called when a drawing phase starts.
    fn begin_layer(&mut self, _layer: Layer) {}

    /// Called when a drawing phase ends. Hosts restore any state here.
    fn end_layer(&mut self, _layer: Layer) {}

    /// Fill the whole surface.
    fn clear(&mut self, color: Rgba);

    /// Stroke a single segment.
    fn stroke_line(&mut self, line: Line, stroke: &Stroke);

    /// Stroke every subpath of `path`.
    fn stroke_path(&mut self, path: &Path, stroke: &Stroke);

    /// Fill every closed subpath of `path`.
    fn fill_path(&mut self, path: &Path, color: Rgba);

    /// Draw `text` with its baseline starting at `baseline`.
    fn draw_text(&mut self, text: &str, baseline: Point, font: &Font, color: Rgba);

    /// Bounds of `text` relative to its baseline origin; `y` is minus the ascent.
    fn text_bounds(&self, text: &str, font: &Font) -> Rect;
}

/// Run `draw` as one layer on `surface`.
pub fn with_layer<S, F>(surface: &mut S, layer: Layer, draw: F)
where
    S: Surface + ?Sized,
    F: FnOnce(&mut S),
{
    surface.begin_layer(layer);
    draw(surface);
    surface.end_layer(layer);
}
