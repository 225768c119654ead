//! Immutable style descriptors and the plot theme.
//!
//! Every draw call carries the style it needs, so nothing a phase sets can
//! leak into the next one.

use crate::color::Rgba;
use crate::viewport::XAxisRule;

/// Dash pattern of the graph line (on, off, on, off, ...), in pixels.
pub const GRAPH_DASH_PATTERN: [f32; 12] = [5.0, 5.0, 10.0, 5.0, 5.0, 5.0, 20.0, 5.0, 10.0, 5.0, 5.0, 5.0];

/// Line stroke styling.
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    /// Stroke color.
    pub color: Rgba,
    /// Stroke width in pixels.
    pub width: f32,
    /// Alternating on/off lengths; `None` for a solid line.
    pub dash: Option<Vec<f32>>,
}

impl Stroke {
    /// A solid stroke.
    #[must_use]
    pub fn solid(color: Rgba, width: f32) -> Self {
        Self {
            color,
            width: width.max(0.5),
            dash: None,
        }
    }

    /// A dashed stroke. An empty or all-zero pattern yields a solid stroke.
    #[must_use]
    pub fn dashed(color: Rgba, width: f32, pattern: &[f32]) -> Self {
        let dash = if pattern.iter().any(|&len| len > 0.0) {
            Some(pattern.iter().map(|len| len.max(0.0)).collect())
        } else {
            None
        };
        Self {
            dash,
            ..Self::solid(color, width)
        }
    }
}

/// Font request. Surfaces map it to whatever text facility they have.
#[derive(Debug, Clone, PartialEq)]
pub struct Font {
    /// Family name (used by vector output).
    pub family: String,
    /// Size in pixels.
    pub size: f32,
    /// Bold weight.
    pub bold: bool,
}

impl Font {
    /// Bold serif font of the given size.
    #[must_use]
    pub fn bold_serif(size: f32) -> Self {
        Self {
            family: "serif".to_string(),
            size: size.max(1.0),
            bold: true,
        }
    }
}

/// Colors, strokes and fonts for every drawing phase.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotStyle {
    /// Panel background.
    pub background: Rgba,
    /// Title text drawn above the graph.
    pub title: String,
    /// Title font.
    pub title_font: Font,
    /// Title color.
    pub title_color: Rgba,
    /// Axis lines and arrowheads.
    pub axis_stroke: Stroke,
    /// Axis label font.
    pub axis_font: Font,
    /// Graph line.
    pub graph_stroke: Stroke,
    /// Marker outline width.
    pub marker_stroke_width: f32,
    /// Marker triangle length in pixels.
    pub marker_size: f64,
    /// Marker color for even truncated y.
    pub even_color: Rgba,
    /// Marker color for odd truncated y.
    pub odd_color: Rgba,
    /// When the X axis is drawn.
    pub x_axis_rule: XAxisRule,
}

impl Default for PlotStyle {
    fn default() -> Self {
        Self {
            background: Rgba::WHITE,
            title: "Function graph".to_string(),
            title_font: Font::bold_serif(24.0),
            title_color: Rgba::BLACK,
            axis_stroke: Stroke::solid(Rgba::BLACK, 2.0),
            axis_font: Font::bold_serif(36.0),
            graph_stroke: Stroke::dashed(Rgba::PINK, 2.0, &GRAPH_DASH_PATTERN),
            marker_stroke_width: 1.0,
            marker_size: 10.0,
            even_color: Rgba::GREEN,
            odd_color: Rgba::RED,
            x_axis_rule: XAxisRule::Legacy,
        }
    }
}

impl PlotStyle {
    /// Create the default style.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the title text.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the background color.
    #[must_use]
    pub fn background(mut self, color: Rgba) -> Self {
        self.background = color;
        self
    }

    /// Set the graph line stroke.
    #[must_use]
    pub fn graph_stroke(mut self, stroke: Stroke) -> Self {
        self.graph_stroke = stroke;
        self
    }

    /// Set the axis stroke.
    #[must_use]
    pub fn axis_stroke(mut self, stroke: Stroke) -> Self {
        self.axis_stroke = stroke;
        self
    }

    /// Set the axis label font.
    #[must_use]
    pub fn axis_font(mut self, font: Font) -> Self {
        self.axis_font = font;
        self
    }

    /// Set the marker triangle length.
    #[must_use]
    pub fn marker_size(mut self, size: f64) -> Self {
        self.marker_size = size.max(2.0);
        self
    }

    /// Set the even/odd marker colors.
    #[must_use]
    pub fn marker_colors(mut self, even: Rgba, odd: Rgba) -> Self {
        self.even_color = even;
        self.odd_color = odd;
        self
    }

    /// Choose when the X axis is drawn.
    #[must_use]
    pub fn x_axis_rule(mut self, rule: XAxisRule) -> Self {
        self.x_axis_rule = rule;
        self
    }

    /// Marker outline stroke in `color`.
    #[must_use]
    pub fn marker_stroke(&self, color: Rgba) -> Stroke {
        Stroke::solid(color, self.marker_stroke_width)
    }
}
