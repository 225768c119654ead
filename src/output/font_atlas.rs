//! Outline fonts for raster text, rasterized with `fontdue`.
//!
//! Glyphs are cached per character and pixel size. System fonts are looked up
//! once per process; when none is found, raster surfaces fall back to the
//! built-in bitmap font.

use crate::error::{Error, Result};
use crate::geometry::Rect;
use fontdue::{Font, FontSettings, Metrics};
use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, OnceLock};

/// Cached result of `Font::rasterize`.
type GlyphData = (Metrics, Vec<u8>);

/// Bold serif faces first, matching the default plot fonts.
#[cfg(target_os = "linux")]
const SYSTEM_FONT_PATHS: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSerif-Bold.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSerif-Bold.ttf",
    "/usr/share/fonts/TTF/DejaVuSerif-Bold.ttf",
    "/usr/share/fonts/dejavu/DejaVuSerif-Bold.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
];

#[cfg(target_os = "macos")]
const SYSTEM_FONT_PATHS: &[&str] = &[
    "/System/Library/Fonts/Supplemental/Times New Roman Bold.ttf",
    "/Library/Fonts/Times New Roman Bold.ttf",
    "/System/Library/Fonts/Supplemental/Georgia Bold.ttf",
    "/System/Library/Fonts/Supplemental/Arial Bold.ttf",
];

#[cfg(target_os = "windows")]
const SYSTEM_FONT_PATHS: &[&str] = &[
    "C:\\Windows\\Fonts\\timesbd.ttf",
    "C:\\Windows\\Fonts\\georgiab.ttf",
    "C:\\Windows\\Fonts\\arialbd.ttf",
];

#[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
const SYSTEM_FONT_PATHS: &[&str] = &[];

static SYSTEM_FONT: OnceLock<Option<Arc<Font>>> = OnceLock::new();

fn settings() -> FontSettings {
    FontSettings {
        scale: 40.0,
        ..FontSettings::default()
    }
}

/// A loaded outline font plus its glyph cache.
#[derive(Clone)]
pub struct FontAtlas {
    font: Arc<Font>,
    cache: HashMap<(char, u32), GlyphData>,
}

impl std::fmt::Debug for FontAtlas {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontAtlas")
            .field("font", &self.font.name())
            .field("cached_glyphs", &self.cache.len())
            .finish()
    }
}

impl FontAtlas {
    fn with_font(font: Arc<Font>) -> Self {
        Self {
            font,
            cache: HashMap::new(),
        }
    }

    /// Parse a TrueType or OpenType font.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Font`] if the data is not a usable font.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let font = Font::from_bytes(data, settings()).map_err(|msg| Error::Font(msg.to_string()))?;
        Ok(Self::with_font(Arc::new(font)))
    }

    /// Load a font file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be read and [`Error::Font`]
    /// if it is not a usable font.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_bytes(&std::fs::read(path)?)
    }

    /// The first installed system font from a fixed list, if any.
    #[must_use]
    pub fn system() -> Option<Self> {
        SYSTEM_FONT
            .get_or_init(|| {
                let found = SYSTEM_FONT_PATHS.iter().find_map(|path| {
                    let data = std::fs::read(path).ok()?;
                    let font = Font::from_bytes(data, settings()).ok()?;
                    tracing::debug!(path, "loaded system font");
                    Some(Arc::new(font))
                });
                if found.is_none() {
                    tracing::debug!("no system font found, using bitmap text");
                }
                found
            })
            .clone()
            .map(Self::with_font)
    }

    /// Rasterized glyph, cached by character and size rounded to half pixels.
    pub fn glyph(&mut self, ch: char, size: f32) -> &GlyphData {
        let key = (ch, (size * 2.0).round() as u32);
        let font = &self.font;
        self.cache
            .entry(key)
            .or_insert_with(|| font.rasterize(ch, size))
    }

    /// Baseline-relative bounds of `text`; `y` is minus the ascent.
    #[must_use]
    pub fn text_bounds(&self, text: &str, size: f32) -> Rect {
        let width: f32 = text
            .chars()
            .map(|ch| self.font.metrics(ch, size).advance_width)
            .sum();
        let (ascent, descent) = self
            .font
            .horizontal_line_metrics(size)
            .map_or((size * 0.8, -size * 0.2), |m| (m.ascent, m.descent));
        Rect::new(
            0.0,
            -f64::from(ascent),
            f64::from(width),
            f64::from(ascent - descent),
        )
    }
}
