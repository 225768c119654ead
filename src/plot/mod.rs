//! Graph rendering: axes, the connecting path and parity markers.
//!
//! [`FunctionPlot`] paints one dataset onto any [`Surface`](crate::render::Surface)
//! in a fixed phase order.

mod axes;
mod function_plot;
mod markers;

pub use axes::{paint_axes, x_arrowhead, y_arrowhead};
pub use function_plot::FunctionPlot;
pub use markers::{marker_triangles, paint_markers, Parity};
