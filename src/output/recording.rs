//! Surface that records draw calls instead of producing pixels.
//!
//! Used to check drawing order and to drive the renderer headless.

use crate::color::Rgba;
use crate::geometry::{Line, Point, Rect};
use crate::render::{font, Font, Layer, Path, Stroke, Surface};

/// One recorded surface call.
#[derive(Debug, Clone, PartialEq)]
#[allow(missing_docs)]
pub enum DrawCommand {
    /// Whole-surface fill.
    Clear(Rgba),
    /// Start of a drawing phase.
    BeginLayer(Layer),
    /// End of a drawing phase.
    EndLayer(Layer),
    /// Single stroked segment.
    Line { line: Line, stroke: Stroke },
    /// Stroked path.
    StrokePath { path: Path, stroke: Stroke },
    /// Filled path.
    FillPath { path: Path, color: Rgba },
    /// Text at a baseline position.
    Text {
        text: String,
        position: Point,
        font: Font,
        color: Rgba,
    },
}

/// [`Surface`] that keeps every call in order.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    width: u32,
    height: u32,
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    /// Create an empty recording of the given size.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            commands: Vec::new(),
        }
    }

    /// Every call so far.
    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Layers in the order they were opened.
    #[must_use]
    pub fn layers(&self) -> Vec<Layer> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::BeginLayer(layer) => Some(*layer),
                _ => None,
            })
            .collect()
    }

    /// Calls made inside the first occurrence of `layer`.
    #[must_use]
    pub fn commands_in(&self, layer: Layer) -> &[DrawCommand] {
        let Some(start) = self
            .commands
            .iter()
            .position(|c| *c == DrawCommand::BeginLayer(layer))
        else {
            return &[];
        };
        let end = self.commands[start..]
            .iter()
            .position(|c| *c == DrawCommand::EndLayer(layer))
            .map_or(self.commands.len(), |offset| start + offset);
        &self.commands[start + 1..end]
    }

    /// Whether every opened layer was closed, innermost first.
    #[must_use]
    pub fn is_balanced(&self) -> bool {
        let mut open = Vec::new();
        for command in &self.commands {
            match command {
                DrawCommand::BeginLayer(layer) => open.push(*layer),
                DrawCommand::EndLayer(layer) => {
                    if open.pop() != Some(*layer) {
                        return false;
                    }
                }
                _ => {}
            }
        }
        open.is_empty()
    }

    /// Forget recorded calls.
    pub fn reset(&mut self) {
        self.commands.clear();
    }
}

impl Surface for RecordingSurface {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn begin_layer(&mut self, layer: Layer) {
        self.commands.push(DrawCommand::BeginLayer(layer));
    }

    fn end_layer(&mut self, layer: Layer) {
        self.commands.push(DrawCommand::EndLayer(layer));
    }

    fn clear(&mut self, color: Rgba) {
        self.commands.push(DrawCommand::Clear(color));
    }

    fn stroke_line(&mut self, line: Line, stroke: &Stroke) {
        self.commands.push(DrawCommand::Line {
            line,
            stroke: stroke.clone(),
        });
    }

    fn stroke_path(&mut self, path: &Path, stroke: &Stroke) {
        self.commands.push(DrawCommand::StrokePath {
            path: path.clone(),
            stroke: stroke.clone(),
        });
    }

    fn fill_path(&mut self, path: &Path, color: Rgba) {
        self.commands.push(DrawCommand::FillPath {
            path: path.clone(),
            color,
        });
    }

    fn draw_text(&mut self, text: &str, baseline: Point, font: &Font, color: Rgba) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            position: baseline,
            font: font.clone(),
            color,
        });
    }

    fn text_bounds(&self, text: &str, font: &Font) -> Rect {
        font::estimated_bounds(text, font)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::with_layer;

    #[test]
    fn test_commands_in_layer() {
        let mut surface = RecordingSurface::new(10, 10);
        with_layer(&mut surface, Layer::Background, |s| s.clear(Rgba::WHITE));
        with_layer(&mut surface, Layer::Title, |s| {
            s.draw_text("t", Point::ORIGIN, &Font::bold_serif(24.0), Rgba::BLACK);
        });

        assert_eq!(surface.layers(), vec![Layer::Background, Layer::Title]);
        assert_eq!(surface.commands_in(Layer::Background), &[DrawCommand::Clear(Rgba::WHITE)]);
        assert_eq!(surface.commands_in(Layer::Title).len(), 1);
        assert!(surface.commands_in(Layer::Markers).is_empty());
        assert!(surface.is_balanced());
    }

    #[test]
    fn test_unbalanced_layers() {
        let mut surface = RecordingSurface::new(10, 10);
        surface.begin_layer(Layer::Axes);
        assert!(!surface.is_balanced());
        surface.end_layer(Layer::Graph);
        assert!(!surface.is_balanced());
    }

    #[test]
    fn test_reset() {
        let mut surface = RecordingSurface::new(10, 10);
        surface.clear(Rgba::BLACK);
        surface.reset();
        assert!(surface.commands().is_empty());
    }
}
