//! Writes the five-point sample to `graphicsData.dat` in the working directory.

use graph_display::dataset::Dataset;
use graph_display::export::{export_points, DEFAULT_DATA_PATH};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

fn main() {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    if let Err(err) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to install logger: {err}");
    }

    // Failure is reported but does not change the exit status.
    if let Err(err) = export_points(DEFAULT_DATA_PATH, Dataset::sample().points()) {
        tracing::error!(error = %err, path = DEFAULT_DATA_PATH, "export failed");
        eprintln!("Error writing file: {err}");
    }
}
