//! Host-facing plot panel.
//!
//! Holds the current dataset and display flags. Every change raises a redraw
//! request that the host polls with [`PlotPanel::take_redraw_request`] before
//! calling [`PlotPanel::paint`] with its own surface.

use crate::dataset::Dataset;
use crate::error::Result;
use crate::plot::FunctionPlot;
use crate::render::{PlotStyle, Surface};
use crate::viewport::Viewport;

/// Dataset plus display flags for one graph.
#[derive(Debug, Clone, Default)]
pub struct PlotPanel {
    data: Option<Dataset>,
    plot: FunctionPlot,
    redraw_requested: bool,
}

impl PlotPanel {
    /// Create an empty panel with axes and markers enabled.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a panel with a custom style.
    #[must_use]
    pub fn with_style(style: PlotStyle) -> Self {
        Self {
            plot: FunctionPlot::new().style(style),
            ..Self::default()
        }
    }

    /// Replace the dataset.
    pub fn set_data(&mut self, data: Dataset) {
        tracing::trace!(points = data.len(), "dataset replaced");
        self.data = Some(data);
        self.redraw_requested = true;
    }

    /// Remove the dataset. Later paints draw nothing.
    pub fn clear_data(&mut self) {
        tracing::trace!("dataset cleared");
        self.data = None;
        self.redraw_requested = true;
    }

    /// The current dataset, if any.
    #[must_use]
    pub fn data(&self) -> Option<&Dataset> {
        self.data.as_ref()
    }

    /// Show or hide the axes.
    pub fn set_show_axis(&mut self, show: bool) {
        tracing::trace!(show, "axis visibility changed");
        self.plot.set_axis_visible(show);
        self.redraw_requested = true;
    }

    /// Show or hide the point markers.
    pub fn set_show_markers(&mut self, show: bool) {
        tracing::trace!(show, "marker visibility changed");
        self.plot.set_markers_visible(show);
        self.redraw_requested = true;
    }

    /// Whether axes are drawn.
    #[must_use]
    pub fn show_axis(&self) -> bool {
        self.plot.axis_visible()
    }

    /// Whether markers are drawn.
    #[must_use]
    pub fn show_markers(&self) -> bool {
        self.plot.markers_visible()
    }

    /// Return and clear the pending redraw request.
    pub fn take_redraw_request(&mut self) -> bool {
        std::mem::take(&mut self.redraw_requested)
    }

    /// Paint onto `surface`.
    ///
    /// Without a dataset nothing is drawn and `Ok(None)` is returned.
    ///
    /// # Errors
    ///
    /// Propagates rendering errors such as a surface too small to draw on.
    pub fn paint<S: Surface + ?Sized>(&self, surface: &mut S) -> Result<Option<Viewport>> {
        match &self.data {
            Some(data) => self.plot.render(data, surface),
            None => {
                tracing::debug!("no dataset, nothing to paint");
                Ok(None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::RecordingSurface;
    use crate::render::Layer;

    #[test]
    fn test_new_panel_is_idle() {
        let mut panel = PlotPanel::new();
        assert!(!panel.take_redraw_request());
        assert!(panel.show_axis());
        assert!(panel.show_markers());
        assert!(panel.data().is_none());
    }

    #[test]
    fn test_setters_request_redraw() {
        let mut panel = PlotPanel::new();

        panel.set_data(Dataset::sample());
        assert!(panel.take_redraw_request());
        assert!(!panel.take_redraw_request());

        panel.set_show_axis(false);
        assert!(panel.take_redraw_request());

        panel.set_show_markers(false);
        assert!(panel.take_redraw_request());

        panel.clear_data();
        assert!(panel.take_redraw_request());
    }

    #[test]
    fn test_paint_without_data() {
        let panel = PlotPanel::new();
        let mut surface = RecordingSurface::new(640, 480);

        assert_eq!(panel.paint(&mut surface).unwrap(), None);
        assert!(surface.commands().is_empty());
    }

    #[test]
    fn test_paint_after_clear_draws_nothing() {
        let mut panel = PlotPanel::new();
        panel.set_data(Dataset::sample());
        panel.clear_data();

        let mut surface = RecordingSurface::new(640, 480);
        assert_eq!(panel.paint(&mut surface).unwrap(), None);
        assert!(surface.commands().is_empty());
    }

    #[test]
    fn test_flags_control_layers() {
        let mut panel = PlotPanel::new();
        panel.set_data(Dataset::sample());
        panel.set_show_markers(false);

        let mut surface = RecordingSurface::new(640, 480);
        assert!(panel.paint(&mut surface).unwrap().is_some());
        assert!(!surface.layers().contains(&Layer::Markers));
        assert!(surface.layers().contains(&Layer::Axes));
    }

    #[test]
    fn test_custom_style() {
        let mut panel = PlotPanel::with_style(PlotStyle::new().title("custom"));
        panel.set_data(Dataset::sample());

        let mut surface = RecordingSurface::new(640, 480);
        panel.paint(&mut surface).unwrap();
        assert_eq!(surface.commands_in(Layer::Title).len(), 1);
    }
}
