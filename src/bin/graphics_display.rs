//! Renders a point file to PNG or SVG.

use anyhow::{Context, Result};
use clap::Parser;
use graph_display::export::{import_points, DEFAULT_DATA_PATH};
use graph_display::output::{FontAtlas, RasterSurface, SvgSurface};
use graph_display::panel::PlotPanel;
use graph_display::render::PlotStyle;
use graph_display::viewport::XAxisRule;
use std::path::{Path, PathBuf};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser, Debug)]
#[command(name = "graphics-display")]
#[command(about = "Render a binary point file as a function graph", long_about = None)]
struct Args {
    /// Point file: big-endian f64 (x, y) pairs
    #[arg(default_value = DEFAULT_DATA_PATH)]
    input: PathBuf,

    /// Output image; a `.svg` extension selects SVG, anything else PNG
    #[arg(short, long, default_value = "graph.png")]
    output: PathBuf,

    /// Image width in pixels
    #[arg(long, default_value_t = 800)]
    width: u32,

    /// Image height in pixels
    #[arg(long, default_value_t = 600)]
    height: u32,

    /// Do not draw the axes
    #[arg(long)]
    no_axis: bool,

    /// Do not draw the point markers
    #[arg(long)]
    no_markers: bool,

    /// Draw the X axis only when the y range contains zero
    #[arg(long)]
    strict_x_axis: bool,

    /// Title text
    #[arg(long)]
    title: Option<String>,

    /// TrueType/OpenType font for PNG text (default: a system font, else bitmap text)
    #[arg(long, value_name = "PATH")]
    font: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn is_svg(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"))
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = if args.verbose { LevelFilter::DEBUG } else { LevelFilter::INFO };
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let dataset = import_points(&args.input)
        .with_context(|| format!("failed to read {}", args.input.display()))?;

    let mut style = PlotStyle::new();
    if let Some(title) = &args.title {
        style = style.title(title.as_str());
    }
    if args.strict_x_axis {
        style = style.x_axis_rule(XAxisRule::Strict);
    }

    let mut panel = PlotPanel::with_style(style);
    panel.set_data(dataset);
    panel.set_show_axis(!args.no_axis);
    panel.set_show_markers(!args.no_markers);

    let viewport = if is_svg(&args.output) {
        let mut surface = SvgSurface::new(args.width, args.height);
        let viewport = panel.paint(&mut surface).context("failed to render graph")?;
        surface
            .write_to_file(&args.output)
            .with_context(|| format!("failed to write {}", args.output.display()))?;
        viewport
    } else {
        let mut surface = RasterSurface::new(args.width, args.height)
            .context("failed to create image")?;
        if let Some(path) = &args.font {
            let atlas = FontAtlas::from_file(path)
                .with_context(|| format!("failed to load font {}", path.display()))?;
            surface = surface.font(Some(atlas));
        }
        tracing::debug!(outline_font = surface.has_outline_font(), "raster text");
        let viewport = panel.paint(&mut surface).context("failed to render graph")?;
        surface
            .write_png(&args.output)
            .with_context(|| format!("failed to write {}", args.output.display()))?;
        viewport
    };

    if viewport.is_none() {
        tracing::warn!(input = %args.input.display(), "no points to draw");
    }
    tracing::info!(output = %args.output.display(), "graph written");
    Ok(())
}
