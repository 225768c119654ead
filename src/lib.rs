//! # graph-display
//!
//! Renders a sequence of (x, y) points as a function graph: a padded,
//! aspect-preserving viewport, coordinate axes with arrowheads, a dashed
//! connecting path and per-point markers colored by the parity of `y`.
//!
//! Drawing goes through the [`Surface`](render::Surface) trait, so the same
//! renderer targets a raster framebuffer (PNG), an SVG document or a
//! recording used in tests.
//!
//! ## Quick Start
//!
//! ```rust
//! use graph_display::prelude::*;
//!
//! let mut panel = PlotPanel::new();
//! panel.set_data(Dataset::sample());
//!
//! let mut surface = RasterSurface::new(800, 600)?;
//! let viewport = panel.paint(&mut surface)?;
//! assert!(viewport.is_some());
//! # Ok::<(), graph_display::Error>(())
//! ```
//!
//! ## Point Files
//!
//! [`export`] writes and reads the flat big-endian `f64` pair format used by
//! the `graphics-data-writer` and `graphics-display` binaries.
//!
//! ## References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."
//! - Wu, X. (1991). "An Efficient Antialiasing Technique." SIGGRAPH '91.

#![warn(missing_docs)]
// Allow unwrap() in tests only - banned in production code
#![cfg_attr(test, allow(clippy::unwrap_used))]
// Allow common patterns in graphics/visualization code
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Core Modules
// ============================================================================

/// Color types.
pub mod color;

/// Data points and datasets.
pub mod dataset;

/// Core framebuffer for pixel rendering.
pub mod framebuffer;

/// Geometric primitives (points, lines, rectangles).
pub mod geometry;

/// Data-to-pixel mapping.
pub mod viewport;

// ============================================================================
// Rendering Modules
// ============================================================================

/// Surface trait, paths, styles and rasterization.
pub mod render;

/// Drawing surfaces and encoders (raster/PNG, SVG, recording).
pub mod output;

/// Axes, path and marker rendering.
pub mod plot;

/// Host-facing plot panel.
pub mod panel;

// ============================================================================
// Data Files
// ============================================================================

/// Binary point file export and import.
pub mod export;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for graph-display operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and traits for convenient imports.
///
/// ```rust
/// use graph_display::prelude::*;
/// ```
pub mod prelude {
    pub use crate::color::Rgba;
    pub use crate::dataset::{DataPoint, Dataset};
    pub use crate::error::{Error, Result};
    pub use crate::export::{export_points, import_points, DEFAULT_DATA_PATH};
    pub use crate::framebuffer::Framebuffer;
    pub use crate::geometry::{Line, Point, Rect};
    pub use crate::output::{RasterSurface, RecordingSurface, SvgSurface};
    pub use crate::panel::PlotPanel;
    pub use crate::plot::{FunctionPlot, Parity};
    pub use crate::render::{Font, Layer, Path, PlotStyle, Stroke, Surface};
    pub use crate::viewport::{Viewport, XAxisRule};
}
