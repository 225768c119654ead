//! Point file export and import through the filesystem.

#![allow(clippy::unwrap_used)]

use graph_display::export::{export_points, import_points, RECORD_SIZE};
use graph_display::prelude::*;

#[test]
fn sample_file_layout() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(DEFAULT_DATA_PATH);

    export_points(&path, Dataset::sample().points()).unwrap();

    let bytes = std::fs::read(&path).unwrap();
    assert_eq!(bytes.len(), 5 * RECORD_SIZE);
    let first_y = f64::from_be_bytes(bytes[8..16].try_into().unwrap());
    let last_x = f64::from_be_bytes(bytes[64..72].try_into().unwrap());
    assert_eq!(first_y, 1.0);
    assert_eq!(last_x, 4.0);
}

#[test]
fn exported_file_renders() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("points.dat");
    let dataset = Dataset::from_pairs(&[(-2.0, 4.0), (0.0, 0.0), (2.0, 4.0)]).unwrap();

    export_points(&path, dataset.points()).unwrap();
    let loaded = import_points(&path).unwrap();
    assert_eq!(loaded, dataset);

    let mut panel = PlotPanel::new();
    panel.set_data(loaded);
    let mut surface = RecordingSurface::new(640, 480);
    assert!(panel.paint(&mut surface).unwrap().is_some());
}

#[test]
fn truncated_file_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("short.dat");
    std::fs::write(&path, [0u8; 24]).unwrap();

    assert!(matches!(
        import_points(&path),
        Err(Error::TruncatedRecord { len: 24 })
    ));
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    assert!(matches!(
        import_points(dir.path().join("nope.dat")),
        Err(Error::Io(_))
    ));
}
