//! Drawing surfaces and encoders (raster/PNG, SVG, recording).

mod font_atlas;
mod png_encoder;
mod raster;
mod recording;
mod svg;

pub use font_atlas::FontAtlas;
pub use png_encoder::PngEncoder;
pub use raster::RasterSurface;
pub use recording::{DrawCommand, RecordingSurface};
pub use svg::{SvgElement, SvgEncoder, SvgSurface};
