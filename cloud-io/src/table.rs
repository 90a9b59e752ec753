//! Labeled point-cloud table I/O.
//!
//! The output of one pipeline run is a columnar ASCII table with a header
//! row and one row per sampled point:
//!
//! ```text
//! x,y,z,is_edge,is_corner
//! 0.125,3.5,-1,0,0
//! 2.25,0,4.75,1,1
//! ```
//!
//! Booleans are written as `0`/`1`. Floats use Rust's shortest
//! round-trip formatting, so reading the table back reproduces the
//! coordinates exactly.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use nalgebra::Point3;
use tracing::debug;

use crate::error::{open_error, IoError, IoResult};
use cloud_types::{LabeledCloud, LabeledPoint};

/// Column header written to and expected from every table.
const HEADER: &str = "x,y,z,is_edge,is_corner";

/// Write a labeled cloud to a columnar table file.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written.
///
/// # Example
///
/// ```no_run
/// use cloud_io::save_labeled_cloud;
/// use cloud_types::{LabeledCloud, PointCloud, Point3};
///
/// let cloud = PointCloud::from_positions(&[Point3::new(0.0, 0.0, 0.0)]);
/// let labeled = LabeledCloud::unlabeled(&cloud);
/// save_labeled_cloud(&labeled, "part_pcloud_points.csv").unwrap();
/// ```
pub fn save_labeled_cloud<P: AsRef<Path>>(cloud: &LabeledCloud, path: P) -> IoResult<()> {
    let path = path.as_ref();
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    writeln!(writer, "{HEADER}")?;
    for point in &cloud.points {
        writeln!(
            writer,
            "{},{},{},{},{}",
            point.position.x,
            point.position.y,
            point.position.z,
            u8::from(point.is_edge),
            u8::from(point.is_corner)
        )?;
    }
    writer.flush()?;

    debug!(points = cloud.len(), path = %path.display(), "wrote labeled cloud");
    Ok(())
}

/// Read a labeled cloud back from a columnar table file.
///
/// # Errors
///
/// Returns an error if the file cannot be read, the header does not
/// match, or any row fails to parse.
pub fn load_labeled_cloud<P: AsRef<Path>>(path: P) -> IoResult<LabeledCloud> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| open_error(path, e))?;
    let reader = BufReader::new(file);

    let mut lines = reader.lines();
    let header = lines
        .next()
        .transpose()?
        .ok_or_else(|| IoError::invalid_content("empty table file"))?;
    if header.trim() != HEADER {
        return Err(IoError::invalid_content(format!(
            "unexpected header: {header:?}"
        )));
    }

    let mut points = Vec::new();
    for (row_no, line) in lines.enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        points.push(parse_row(line, row_no)?);
    }

    Ok(LabeledCloud { points })
}

fn parse_row(line: &str, row_no: usize) -> IoResult<LabeledPoint> {
    let fields: Vec<&str> = line.split(',').collect();
    if fields.len() != 5 {
        return Err(IoError::invalid_content(format!(
            "row {}: expected 5 columns, got {}",
            row_no + 1,
            fields.len()
        )));
    }

    let x = fields[0].parse::<f64>()?;
    let y = fields[1].parse::<f64>()?;
    let z = fields[2].parse::<f64>()?;
    let is_edge = parse_flag(fields[3], row_no)?;
    let is_corner = parse_flag(fields[4], row_no)?;

    Ok(LabeledPoint {
        position: Point3::new(x, y, z),
        is_edge,
        is_corner,
    })
}

fn parse_flag(field: &str, row_no: usize) -> IoResult<bool> {
    match field {
        "0" => Ok(false),
        "1" => Ok(true),
        other => Err(IoError::invalid_content(format!(
            "row {}: flag must be 0 or 1, got {other:?}",
            row_no + 1
        ))),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use cloud_types::PointCloud;
    use tempfile::tempdir;

    fn make_labeled() -> LabeledCloud {
        let cloud = PointCloud::from_positions(&[
            Point3::new(0.125, 3.5, -1.0),
            Point3::new(2.25, 0.0, 4.75),
            Point3::new(1.0 / 3.0, 0.1, 1e-9),
        ]);
        let mut labeled = LabeledCloud::unlabeled(&cloud);
        labeled.points[1].is_edge = true;
        labeled.points[1].is_corner = true;
        labeled.points[2].is_edge = true;
        labeled
    }

    #[test]
    fn round_trip_preserves_values_exactly() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("part_pcloud_points.csv");

        let original = make_labeled();
        save_labeled_cloud(&original, &path).unwrap();
        let loaded = load_labeled_cloud(&path).unwrap();

        assert_eq!(loaded.len(), original.len());
        for (a, b) in original.points.iter().zip(loaded.points.iter()) {
            // Shortest round-trip formatting makes these bit-exact
            assert_eq!(a.position, b.position);
            assert_eq!(a.is_edge, b.is_edge);
            assert_eq!(a.is_corner, b.is_corner);
        }
    }

    #[test]
    fn writes_expected_layout() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.csv");
        save_labeled_cloud(&make_labeled(), &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let mut lines = content.lines();
        assert_eq!(lines.next(), Some("x,y,z,is_edge,is_corner"));
        assert_eq!(lines.next(), Some("0.125,3.5,-1,0,0"));
        assert_eq!(lines.next(), Some("2.25,0,4.75,1,1"));
    }

    #[test]
    fn empty_cloud_round_trips() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("empty.csv");
        save_labeled_cloud(&LabeledCloud::default(), &path).unwrap();
        let loaded = load_labeled_cloud(&path).unwrap();
        assert!(loaded.is_empty());
    }

    #[test]
    fn rejects_wrong_header() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.csv");
        std::fs::write(&path, "a,b,c\n1,2,3\n").unwrap();
        let result = load_labeled_cloud(&path);
        assert!(matches!(result, Err(IoError::InvalidContent { .. })));
    }

    #[test]
    fn rejects_short_row() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("short.csv");
        std::fs::write(&path, "x,y,z,is_edge,is_corner\n1,2,3,0\n").unwrap();
        let result = load_labeled_cloud(&path);
        assert!(matches!(result, Err(IoError::InvalidContent { .. })));
    }

    #[test]
    fn rejects_non_boolean_flag() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("flag.csv");
        std::fs::write(&path, "x,y,z,is_edge,is_corner\n1,2,3,2,0\n").unwrap();
        let result = load_labeled_cloud(&path);
        assert!(matches!(result, Err(IoError::InvalidContent { .. })));
    }

    #[test]
    fn rejects_empty_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("empty_file.csv");
        std::fs::write(&path, "").unwrap();
        let result = load_labeled_cloud(&path);
        assert!(matches!(result, Err(IoError::InvalidContent { .. })));
    }

    #[test]
    fn missing_file_is_distinguished() {
        let result = load_labeled_cloud("does_not_exist.csv");
        assert!(matches!(result, Err(IoError::FileNotFound { .. })));
    }
}
