//! Binary point files.
//!
//! A file is a flat sequence of records, one per point: `x` then `y`, each a
//! big-endian IEEE-754 `f64`. There is no header and no count.

use crate::dataset::{DataPoint, Dataset};
use crate::error::{Error, Result};
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

/// File name used by the binaries when none is given.
pub const DEFAULT_DATA_PATH: &str = "graphicsData.dat";

/// Bytes per (x, y) record.
pub const RECORD_SIZE: usize = 16;

/// Write `points` to `writer` as big-endian `f64` pairs.
///
/// # Errors
///
/// Returns an error if the writer fails.
pub fn write_points<W: Write>(mut writer: W, points: &[DataPoint]) -> Result<()> {
    for point in points {
        writer.write_all(&point.x.to_be_bytes())?;
        writer.write_all(&point.y.to_be_bytes())?;
    }
    Ok(())
}

/// Create or truncate `path` and write `points` to it.
///
/// Not transactional: on failure, bytes already flushed stay on disk.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be created or written.
pub fn export_points<P: AsRef<Path>>(path: P, points: &[DataPoint]) -> Result<()> {
    let path = path.as_ref();
    let mut writer = BufWriter::new(File::create(path)?);
    write_points(&mut writer, points)?;
    writer.flush()?;
    tracing::info!(
        path = %path.display(),
        points = points.len(),
        bytes = points.len() * RECORD_SIZE,
        "exported points"
    );
    Ok(())
}

/// Read every record from `reader`.
///
/// # Errors
///
/// Returns [`Error::TruncatedRecord`] if the input ends mid-record,
/// [`Error::NonFiniteValue`] for NaN or infinite coordinates, and
/// [`Error::Io`] if reading fails.
pub fn read_points<R: Read>(mut reader: R) -> Result<Dataset> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    if bytes.len() % RECORD_SIZE != 0 {
        return Err(Error::TruncatedRecord { len: bytes.len() });
    }

    let points = bytes
        .chunks_exact(RECORD_SIZE)
        .map(|record| {
            let mut x = [0u8; 8];
            let mut y = [0u8; 8];
            x.copy_from_slice(&record[..8]);
            y.copy_from_slice(&record[8..]);
            DataPoint::new(f64::from_be_bytes(x), f64::from_be_bytes(y))
        })
        .collect();
    Dataset::new(points)
}

/// Read a point file written by [`export_points`].
///
/// # Errors
///
/// See [`read_points`]; also fails if the file cannot be opened.
pub fn import_points<P: AsRef<Path>>(path: P) -> Result<Dataset> {
    let path = path.as_ref();
    let dataset = read_points(BufReader::new(File::open(path)?))?;
    tracing::info!(path = %path.display(), points = dataset.len(), "imported points");
    Ok(dataset)
}
