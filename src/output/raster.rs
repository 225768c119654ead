//! Raster surface backed by a [`Framebuffer`].

use crate::color::Rgba;
use crate::error::Result;
use crate::framebuffer::Framebuffer;
use crate::geometry::{Line, Point, Rect};
use crate::output::{FontAtlas, PngEncoder};
use crate::render::{dash_polyline, draw_segment, fill_polygon, font, Font, Path, Stroke, Surface};
use std::path::Path as FsPath;

/// [`Surface`] that rasterizes into an RGBA framebuffer.
///
/// Text is rasterized from an outline font when one is available (see
/// [`FontAtlas::system`]), otherwise from the built-in bitmap font scaled to
/// the requested size.
#[derive(Debug, Clone)]
pub struct RasterSurface {
    fb: Framebuffer,
    antialiased: bool,
    atlas: Option<FontAtlas>,
}

impl RasterSurface {
    /// Create a transparent raster surface using the system font, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if width or height is zero.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Ok(Self {
            fb: Framebuffer::new(width, height)?,
            antialiased: true,
            atlas: FontAtlas::system(),
        })
    }

    /// Use `atlas` for text; `None` selects the bitmap font.
    #[must_use]
    pub fn font(mut self, atlas: Option<FontAtlas>) -> Self {
        self.atlas = atlas;
        self
    }

    /// Whether text comes from an outline font.
    #[must_use]
    pub fn has_outline_font(&self) -> bool {
        self.atlas.is_some()
    }

    /// Enable or disable anti-aliasing of thin lines.
    #[must_use]
    pub fn antialiased(mut self, enabled: bool) -> Self {
        self.antialiased = enabled;
        self
    }

    /// The pixels drawn so far.
    #[must_use]
    pub fn framebuffer(&self) -> &Framebuffer {
        &self.fb
    }

    /// Consume the surface, keeping its pixels.
    #[must_use]
    pub fn into_framebuffer(self) -> Framebuffer {
        self.fb
    }

    /// Encode the pixels as PNG.
    ///
    /// # Errors
    ///
    /// Returns an error if PNG encoding fails.
    pub fn to_png_bytes(&self) -> Result<Vec<u8>> {
        PngEncoder::to_bytes(&self.fb)
    }

    /// Write the pixels to a PNG file.
    ///
    /// # Errors
    ///
    /// Returns an error if file creation or PNG encoding fails.
    pub fn write_png<P: AsRef<FsPath>>(&self, path: P) -> Result<()> {
        PngEncoder::write_to_file(&self.fb, path)
    }

    fn stroke_polyline(&mut self, points: &[Point], stroke: &Stroke) {
        // Anything farther out than the stroke width cannot touch a pixel.
        let bounds = Rect::new(0.0, 0.0, f64::from(self.fb.width()), f64::from(self.fb.height()))
            .inflate(f64::from(stroke.width) + 1.0);
        let pattern = stroke.dash.as_deref().unwrap_or(&[]);
        for segment in dash_polyline(points, pattern, bounds) {
            draw_segment(&mut self.fb, segment, stroke.width, stroke.color, self.antialiased);
        }
    }

    fn draw_bitmap_text(&mut self, text: &str, baseline: Point, font: &Font, color: Rgba) {
        let scale = i64::from(font::pixel_scale(font));
        let origin_x = baseline.x.round() as i64;
        let top = baseline.y.round() as i64 - i64::from(font::GLYPH_HEIGHT) * scale;
        let advance = i64::from(font::GLYPH_ADVANCE) * scale;

        for (i, ch) in text.chars().enumerate() {
            let left = origin_x + i as i64 * advance;
            for (row, bits) in font::glyph_or_box(ch).iter().enumerate() {
                for col in 0..font::GLYPH_WIDTH {
                    if bits & (1 << (font::GLYPH_WIDTH - 1 - col)) == 0 {
                        continue;
                    }
                    let x = left + i64::from(col) * scale;
                    let y = top + row as i64 * scale;
                    // Blocks partly off the top or left edge are skipped whole.
                    if x < 0 || y < 0 {
                        continue;
                    }
                    let side = scale as u32;
                    self.fb.fill_rect(x as u32, y as u32, side, side, color);
                }
            }
        }
    }
}

/// Blend anti-aliased glyph coverage into `fb` with the pen starting at `baseline`.
fn draw_outline_text(
    fb: &mut Framebuffer,
    atlas: &mut FontAtlas,
    text: &str,
    baseline: Point,
    size: f32,
    color: Rgba,
) {
    let mut pen_x = baseline.x;
    let baseline_y = baseline.y.round() as i64;

    for ch in text.chars() {
        let (metrics, coverage) = atlas.glyph(ch, size);
        let left = pen_x.round() as i64 + i64::from(metrics.xmin);
        // ymin is the bottom edge above the baseline; rows run top down.
        let top = baseline_y - i64::from(metrics.ymin) - metrics.height as i64;

        for (row, line) in coverage.chunks(metrics.width.max(1)).enumerate() {
            for (col, &alpha) in line.iter().enumerate() {
                let (Ok(x), Ok(y)) = (
                    u32::try_from(left + col as i64),
                    u32::try_from(top + row as i64),
                ) else {
                    continue;
                };
                if alpha > 0 {
                    let a = (u16::from(alpha) * u16::from(color.a) / 255) as u8;
                    fb.blend_pixel(x, y, color.with_alpha(a));
                }
            }
        }
        pen_x += f64::from(metrics.advance_width);
    }
}

impl Surface for RasterSurface {
    fn width(&self) -> u32 {
        self.fb.width()
    }

    fn height(&self) -> u32 {
        self.fb.height()
    }

    fn clear(&mut self, color: Rgba) {
        self.fb.clear(color);
    }

    fn stroke_line(&mut self, line: Line, stroke: &Stroke) {
        self.stroke_polyline(&[line.start, line.end], stroke);
    }

    fn stroke_path(&mut self, path: &Path, stroke: &Stroke) {
        for subpath in path.subpaths() {
            let mut points = subpath.points;
            if subpath.closed {
                if let Some(&first) = points.first() {
                    points.push(first);
                }
            }
            self.stroke_polyline(&points, stroke);
        }
    }

    fn fill_path(&mut self, path: &Path, color: Rgba) {
        for subpath in path.subpaths() {
            if subpath.points.len() >= 3 {
                fill_polygon(&mut self.fb, &subpath.points, color);
            }
        }
    }

    fn draw_text(&mut self, text: &str, baseline: Point, font: &Font, color: Rgba) {
        match &mut self.atlas {
            Some(atlas) => draw_outline_text(&mut self.fb, atlas, text, baseline, font.size, color),
            None => self.draw_bitmap_text(text, baseline, font, color),
        }
    }

    fn text_bounds(&self, text: &str, font: &Font) -> Rect {
        match &self.atlas {
            Some(atlas) => atlas.text_bounds(text, font.size),
            None => font::bitmap_bounds(text, font),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn white_surface(w: u32, h: u32) -> RasterSurface {
        let mut surface = RasterSurface::new(w, h).unwrap().antialiased(false).font(None);
        surface.clear(Rgba::WHITE);
        surface
    }

    #[test]
    fn test_new_rejects_zero() {
        assert!(RasterSurface::new(0, 10).is_err());
    }

    #[test]
    fn test_solid_line() {
        let mut surface = white_surface(20, 20);
        surface.stroke_line(
            Line::new(Point::new(2.0, 10.0), Point::new(17.0, 10.0)),
            &Stroke::solid(Rgba::BLACK, 1.0),
        );

        let fb = surface.framebuffer();
        assert_eq!(fb.get_pixel(2, 10), Some(Rgba::BLACK));
        assert_eq!(fb.get_pixel(17, 10), Some(Rgba::BLACK));
        assert_eq!(fb.count_color(Rgba::BLACK), 16);
    }

    #[test]
    fn test_dashed_line_has_gaps() {
        let mut surface = white_surface(40, 10);
        surface.stroke_line(
            Line::new(Point::new(0.0, 5.0), Point::new(39.0, 5.0)),
            &Stroke::dashed(Rgba::BLACK, 1.0, &[5.0, 5.0]),
        );

        let fb = surface.framebuffer();
        assert_eq!(fb.get_pixel(2, 5), Some(Rgba::BLACK));
        assert_eq!(fb.get_pixel(7, 5), Some(Rgba::WHITE));
        assert_eq!(fb.get_pixel(12, 5), Some(Rgba::BLACK));
    }

    #[test]
    fn test_fill_triangle() {
        let mut surface = white_surface(20, 20);
        let tri = Path::triangle(
            Point::new(0.0, 0.0),
            Point::new(20.0, 0.0),
            Point::new(0.0, 20.0),
        );
        surface.fill_path(&tri, Rgba::GREEN);

        let fb = surface.framebuffer();
        assert_eq!(fb.get_pixel(2, 2), Some(Rgba::GREEN));
        assert_eq!(fb.get_pixel(18, 18), Some(Rgba::WHITE));
    }

    #[test]
    fn test_open_path_is_not_filled() {
        let mut surface = white_surface(20, 20);
        let open = Path::polyline([
            Point::new(0.0, 0.0),
            Point::new(20.0, 0.0),
            Point::new(0.0, 20.0),
        ]);
        surface.stroke_path(&open, &Stroke::solid(Rgba::BLACK, 1.0));

        // Closing edge from (0,20) back to (0,0) is not drawn.
        assert_eq!(surface.framebuffer().get_pixel(0, 12), Some(Rgba::WHITE));
    }

    #[test]
    fn test_draw_text_uses_bitmap_font() {
        let mut surface = white_surface(40, 40);
        let font = Font::bold_serif(7.0);
        surface.draw_text("0", Point::new(10.0, 20.0), &font, Rgba::BLACK);

        let fb = surface.framebuffer();
        // Top row of '0' is 01110, one pixel per unit, starting at y = 13.
        assert_eq!(fb.get_pixel(10, 13), Some(Rgba::WHITE));
        assert_eq!(fb.get_pixel(11, 13), Some(Rgba::BLACK));
        assert_eq!(fb.get_pixel(11, 12), Some(Rgba::WHITE));
        assert!(fb.count_color(Rgba::BLACK) > 10);
    }

    #[test]
    fn test_text_off_canvas_is_clipped() {
        let mut surface = white_surface(10, 10);
        surface.draw_text("xy", Point::new(-50.0, -50.0), &Font::bold_serif(7.0), Rgba::BLACK);
        assert_eq!(surface.framebuffer().count_color(Rgba::BLACK), 0);
    }

    #[test]
    fn test_bitmap_text_bounds_without_atlas() {
        let surface = white_surface(10, 10);
        assert!(!surface.has_outline_font());
        let font = Font::bold_serif(7.0);
        assert_eq!(surface.text_bounds("xy", &font), font::bitmap_bounds("xy", &font));
    }

    #[test]
    fn test_outline_text_when_font_available() {
        let Some(atlas) = FontAtlas::system() else {
            return;
        };
        let mut surface = white_surface(120, 60).font(Some(atlas));
        let font = Font::bold_serif(36.0);
        let bounds = surface.text_bounds("0", &font);
        surface.draw_text("0", Point::new(10.0, 45.0), &font, Rgba::BLACK);

        let ink_box = Rect::new(10.0 + bounds.x, 45.0 + bounds.y, bounds.width, bounds.height).inflate(2.0);
        let fb = surface.framebuffer();
        let mut inked = 0;
        for y in 0..60 {
            for x in 0..120 {
                if fb.get_pixel(x, y) != Some(Rgba::WHITE) {
                    inked += 1;
                    assert!(ink_box.contains(Point::new(f64::from(x), f64::from(y))), "ink at ({x}, {y})");
                }
            }
        }
        assert!(inked > 20);
    }

    #[test]
    fn test_outline_text_off_canvas_is_clipped() {
        let Some(atlas) = FontAtlas::system() else {
            return;
        };
        let mut surface = white_surface(10, 10).font(Some(atlas));
        surface.draw_text("xy", Point::new(-80.0, -80.0), &Font::bold_serif(24.0), Rgba::BLACK);
        assert_eq!(surface.framebuffer().count_color(Rgba::WHITE), 100);
    }

    #[test]
    fn test_far_interior_point_is_clipped() {
        let mut surface = white_surface(50, 50);
        let points = [Point::new(5.0, 25.0), Point::new(1.0e12, 25.0), Point::new(45.0, 5.0)];
        let stroke = Stroke::dashed(Rgba::BLACK, 2.0, &[5.0, 5.0]);
        surface.stroke_path(&Path::polyline(points), &stroke);

        let fb = surface.framebuffer();
        assert!(fb.count_color(Rgba::BLACK) > 0);
        assert!(fb.count_color(Rgba::BLACK) < 50 * 50 / 2);
    }

    #[test]
    fn test_png_bytes() {
        let surface = white_surface(5, 5);
        let bytes = surface.to_png_bytes().unwrap();
        assert_eq!(&bytes[1..4], b"PNG");
    }
}
