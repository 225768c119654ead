//! Function graph renderer.
//!
//! Paints a [`Dataset`] in five phases, each inside its own layer:
//!
//! 1. **Background**: clear to the panel color
//! 2. **Title**: caption near the top edge
//! 3. **Axes**: only when enabled and in range
//! 4. **Graph**: one dashed stroke through every point
//! 5. **Markers**: only when enabled
//!
//! The viewport is recomputed on every render from the dataset and the
//! surface size, so rendering is idempotent.

use crate::dataset::Dataset;
use crate::error::Result;
use crate::geometry::Point;
use crate::plot::{paint_axes, paint_markers};
use crate::render::{with_layer, Layer, Path, PlotStyle, Surface};
use crate::viewport::Viewport;

/// Title baseline distance from the top edge.
const TITLE_BASELINE: f64 = 40.0;
/// Title offset left of the horizontal center.
const TITLE_OFFSET: f64 = 10.0;

/// Renderer for a single function graph.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionPlot {
    style: PlotStyle,
    show_axis: bool,
    show_markers: bool,
}

impl Default for FunctionPlot {
    fn default() -> Self {
        Self::new()
    }
}

impl FunctionPlot {
    /// Create a renderer with the default style, axes and markers enabled.
    #[must_use]
    pub fn new() -> Self {
        Self {
            style: PlotStyle::default(),
            show_axis: true,
            show_markers: true,
        }
    }

    /// Replace the style.
    #[must_use]
    pub fn style(mut self, style: PlotStyle) -> Self {
        self.style = style;
        self
    }

    /// Show or hide the axes.
    #[must_use]
    pub fn show_axis(mut self, show: bool) -> Self {
        self.show_axis = show;
        self
    }

    /// Show or hide the point markers.
    #[must_use]
    pub fn show_markers(mut self, show: bool) -> Self {
        self.show_markers = show;
        self
    }

    /// Current style.
    #[must_use]
    pub fn plot_style(&self) -> &PlotStyle {
        &self.style
    }

    /// Whether axes are drawn.
    #[must_use]
    pub fn axis_visible(&self) -> bool {
        self.show_axis
    }

    /// Whether markers are drawn.
    #[must_use]
    pub fn markers_visible(&self) -> bool {
        self.show_markers
    }

    pub(crate) fn set_axis_visible(&mut self, show: bool) {
        self.show_axis = show;
    }

    pub(crate) fn set_markers_visible(&mut self, show: bool) {
        self.show_markers = show;
    }

    /// Paint `dataset` onto `surface`.
    ///
    /// Returns `Ok(None)` without drawing anything when the dataset is empty,
    /// otherwise the viewport the points were mapped with.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`](crate::Error::InvalidDimensions)
    /// when the surface is too small to hold the padded content area.
    pub fn render<S: Surface + ?Sized>(
        &self,
        dataset: &Dataset,
        surface: &mut S,
    ) -> Result<Option<Viewport>> {
        if dataset.is_empty() {
            tracing::debug!("empty dataset, nothing to paint");
            return Ok(None);
        }

        let viewport = Viewport::fit(dataset, surface.width(), surface.height())?;
        tracing::debug!(
            min_x = viewport.min_x,
            max_x = viewport.max_x,
            min_y = viewport.min_y,
            max_y = viewport.max_y,
            scale = viewport.scale,
            "computed viewport"
        );
        if !dataset.is_sorted_by_x() {
            tracing::debug!(
                points = dataset.len(),
                "x values not sorted, interior points may fall outside the panel"
            );
        }

        let style = &self.style;

        with_layer(surface, Layer::Background, |s| s.clear(style.background));

        with_layer(surface, Layer::Title, |s| {
            let baseline = Point::new(viewport.width / 2.0 - TITLE_OFFSET, TITLE_BASELINE);
            s.draw_text(&style.title, baseline, &style.title_font, style.title_color);
        });

        if self.show_axis {
            with_layer(surface, Layer::Axes, |s| paint_axes(s, &viewport, style));
        }

        with_layer(surface, Layer::Graph, |s| {
            let path = Path::polyline(dataset.points().iter().map(|p| viewport.to_pixel(p.x, p.y)));
            s.stroke_path(&path, &style.graph_stroke);
        });

        if self.show_markers {
            with_layer(surface, Layer::Markers, |s| {
                paint_markers(s, dataset, &viewport, style);
            });
        }

        Ok(Some(viewport))
    }
}
