//! SVG vector output.
//!
//! [`SvgEncoder`] builds the document; [`SvgSurface`] lets the graph renderer
//! draw straight into it. Each drawing layer becomes a `<g>` group.

use crate::color::Rgba;
use crate::error::Result;
use crate::geometry::{Line, Point, Rect};
use crate::render::{font, Font, Layer, Path, Stroke, Surface};
use std::fmt::Write as FmtWrite;
use std::fs::File;
use std::io::Write;
use std::path::Path as FsPath;

/// SVG document builder.
#[derive(Debug, Clone)]
pub struct SvgEncoder {
    /// SVG width
    width: u32,
    /// SVG height
    height: u32,
    /// Background color (None for transparent)
    background: Option<Rgba>,
    /// SVG elements
    elements: Vec<SvgElement>,
}

/// An SVG element.
///
/// Field names are self-documenting and match SVG attribute names.
#[derive(Debug, Clone, PartialEq)]
#[allow(missing_docs)]
pub enum SvgElement {
    /// Open a `<g>` group.
    GroupStart { id: String },
    /// Close the innermost group.
    GroupEnd,
    /// Line
    Line {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        stroke: Rgba,
        stroke_width: f32,
        dash: Option<Vec<f32>>,
    },
    /// Path (SVG path data)
    Path {
        d: String,
        fill: Option<Rgba>,
        stroke: Option<Rgba>,
        stroke_width: f32,
        dash: Option<Vec<f32>>,
    },
    /// Text, positioned at its baseline
    Text {
        x: f64,
        y: f64,
        text: String,
        font_family: String,
        font_size: f32,
        bold: bool,
        fill: Rgba,
    },
}

impl Default for SvgEncoder {
    fn default() -> Self {
        Self::new(800, 600)
    }
}

impl SvgEncoder {
    /// Create a new SVG encoder with given dimensions.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            background: Some(Rgba::WHITE),
            elements: Vec::new(),
        }
    }

    /// Set background color (None for transparent).
    #[must_use]
    pub fn background(mut self, color: Option<Rgba>) -> Self {
        self.background = color;
        self
    }

    /// Add a raw element.
    pub fn add_element(&mut self, element: SvgElement) {
        self.elements.push(element);
    }

    /// Elements added so far.
    #[must_use]
    pub fn elements(&self) -> &[SvgElement] {
        &self.elements
    }

    /// Render to SVG string.
    #[must_use]
    pub fn render(&self) -> String {
        let mut svg = String::with_capacity(4096);

        let _ = writeln!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">"#,
            self.width, self.height, self.width, self.height
        );

        if let Some(bg) = self.background {
            let _ = writeln!(
                svg,
                r#"  <rect width="100%" height="100%" fill="{}"/>"#,
                bg.to_css()
            );
        }

        for element in &self.elements {
            let _ = writeln!(svg, "  {}", element_to_svg(element));
        }

        svg.push_str("</svg>\n");
        svg
    }

    /// Write to a file.
    ///
    /// # Errors
    ///
    /// Returns an error if file writing fails.
    pub fn write_to_file<P: AsRef<FsPath>>(&self, path: P) -> Result<()> {
        let mut file = File::create(path)?;
        file.write_all(self.render().as_bytes())?;
        Ok(())
    }
}

fn dash_attr(dash: Option<&Vec<f32>>) -> String {
    dash.map(|pattern| {
        let values: Vec<String> = pattern.iter().map(ToString::to_string).collect();
        format!(r#" stroke-dasharray="{}""#, values.join(","))
    })
    .unwrap_or_default()
}

fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Convert an SVG element to its string representation.
fn element_to_svg(element: &SvgElement) -> String {
    match element {
        SvgElement::GroupStart { id } => format!(r#"<g id="{}">"#, escape_xml(id)),
        SvgElement::GroupEnd => "</g>".to_string(),
        SvgElement::Line {
            x1,
            y1,
            x2,
            y2,
            stroke,
            stroke_width,
            dash,
        } => {
            format!(
                r#"<line x1="{x1}" y1="{y1}" x2="{x2}" y2="{y2}" stroke="{}" stroke-width="{stroke_width}"{}/>"#,
                stroke.to_css(),
                dash_attr(dash.as_ref())
            )
        }
        SvgElement::Path {
            d,
            fill,
            stroke,
            stroke_width,
            dash,
        } => {
            let fill_attr = fill.map_or_else(|| "none".to_string(), Rgba::to_css);
            let stroke_attr = stroke
                .map(|s| {
                    format!(
                        r#" stroke="{}" stroke-width="{}"{}"#,
                        s.to_css(),
                        stroke_width,
                        dash_attr(dash.as_ref())
                    )
                })
                .unwrap_or_default();
            format!(r#"<path d="{d}" fill="{fill_attr}"{stroke_attr}/>"#)
        }
        SvgElement::Text {
            x,
            y,
            text,
            font_family,
            font_size,
            bold,
            fill,
        } => {
            let weight = if *bold { "bold" } else { "normal" };
            format!(
                r#"<text x="{x}" y="{y}" font-family="{}" font-size="{font_size}" font-weight="{weight}" fill="{}">{}</text>"#,
                escape_xml(font_family),
                fill.to_css(),
                escape_xml(text)
            )
        }
    }
}

/// [`Surface`] that records drawing as SVG elements.
#[derive(Debug, Clone)]
pub struct SvgSurface {
    encoder: SvgEncoder,
}

impl SvgSurface {
    /// Create a surface with a transparent background.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            encoder: SvgEncoder::new(width, height).background(None),
        }
    }

    /// The document built so far.
    #[must_use]
    pub fn encoder(&self) -> &SvgEncoder {
        &self.encoder
    }

    /// Render the document to an SVG string.
    #[must_use]
    pub fn render(&self) -> String {
        self.encoder.render()
    }

    /// Write the document to a file.
    ///
    /// # Errors
    ///
    /// Returns an error if file writing fails.
    pub fn write_to_file<P: AsRef<FsPath>>(&self, path: P) -> Result<()> {
        self.encoder.write_to_file(path)
    }
}

fn layer_id(layer: Layer) -> &'static str {
    match layer {
        Layer::Background => "background",
        Layer::Title => "title",
        Layer::Axes => "axes",
        Layer::Graph => "graph",
        Layer::Markers => "markers",
    }
}

impl Surface for SvgSurface {
    fn width(&self) -> u32 {
        self.encoder.width
    }

    fn height(&self) -> u32 {
        self.encoder.height
    }

    fn begin_layer(&mut self, layer: Layer) {
        self.encoder.add_element(SvgElement::GroupStart {
            id: layer_id(layer).to_string(),
        });
    }

    fn end_layer(&mut self, _layer: Layer) {
        self.encoder.add_element(SvgElement::GroupEnd);
    }

    fn clear(&mut self, color: Rgba) {
        // Everything drawn so far is covered; keep group structure balanced.
        self.encoder
            .elements
            .retain(|e| matches!(e, SvgElement::GroupStart { .. } | SvgElement::GroupEnd));
        self.encoder.background = Some(color);
    }

    fn stroke_line(&mut self, line: Line, stroke: &Stroke) {
        self.encoder.add_element(SvgElement::Line {
            x1: line.start.x,
            y1: line.start.y,
            x2: line.end.x,
            y2: line.end.y,
            stroke: stroke.color,
            stroke_width: stroke.width,
            dash: stroke.dash.clone(),
        });
    }

    fn stroke_path(&mut self, path: &Path, stroke: &Stroke) {
        if path.is_empty() {
            return;
        }
        self.encoder.add_element(SvgElement::Path {
            d: path.to_svg_data(),
            fill: None,
            stroke: Some(stroke.color),
            stroke_width: stroke.width,
            dash: stroke.dash.clone(),
        });
    }

    fn fill_path(&mut self, path: &Path, color: Rgba) {
        if path.is_empty() {
            return;
        }
        self.encoder.add_element(SvgElement::Path {
            d: path.to_svg_data(),
            fill: Some(color),
            stroke: None,
            stroke_width: 0.0,
            dash: None,
        });
    }

    fn draw_text(&mut self, text: &str, baseline: Point, font: &Font, color: Rgba) {
        self.encoder.add_element(SvgElement::Text {
            x: baseline.x,
            y: baseline.y,
            text: text.to_string(),
            font_family: font.family.clone(),
            font_size: font.size,
            bold: font.bold,
            fill: color,
        });
    }

    fn text_bounds(&self, text: &str, font: &Font) -> Rect {
        font::estimated_bounds(text, font)
    }
}
