//! Wavefront OBJ mesh loading.
//!
//! Only the records the pipeline consumes are interpreted: `v` (vertex
//! position) and `f` (face). Texture/normal records, grouping, and
//! material statements are skipped. Faces with more than three vertices
//! are fan-triangulated.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use nalgebra::Point3;
use tracing::debug;

use crate::error::{open_error, IoError, IoResult};
use cloud_types::TriangleMesh;

/// Load a triangle mesh from a Wavefront OBJ file.
///
/// Face vertex references may take any of the `v`, `v/vt`, `v//vn`,
/// `v/vt/vn` forms; only the position index is used. Negative indices
/// are resolved relative to the vertices defined so far, per the OBJ
/// specification.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be read
/// - A `v` record has fewer than three coordinates
/// - A coordinate or index fails to parse
/// - A face references a vertex that does not exist
///
/// # Example
///
/// ```no_run
/// use cloud_io::load_obj;
///
/// let mesh = load_obj("model.obj").unwrap();
/// println!("loaded {} faces", mesh.face_count());
/// ```
pub fn load_obj<P: AsRef<Path>>(path: P) -> IoResult<TriangleMesh> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| open_error(path, e))?;
    let mesh = parse_obj(BufReader::new(file))?;
    debug!(
        vertices = mesh.vertex_count(),
        faces = mesh.face_count(),
        "loaded OBJ mesh"
    );
    Ok(mesh)
}

/// Parse OBJ content from a reader.
fn parse_obj<R: BufRead>(reader: R) -> IoResult<TriangleMesh> {
    let mut mesh = TriangleMesh::new();

    for (line_no, line) in reader.lines().enumerate() {
        let line = line?;
        let mut tokens = line.split_whitespace();

        match tokens.next() {
            Some("v") => {
                let mut coord = |axis: &str| -> IoResult<f64> {
                    tokens
                        .next()
                        .ok_or_else(|| {
                            IoError::invalid_content(format!(
                                "line {}: vertex record missing {axis} coordinate",
                                line_no + 1
                            ))
                        })?
                        .parse::<f64>()
                        .map_err(IoError::from)
                };
                let x = coord("x")?;
                let y = coord("y")?;
                let z = coord("z")?;
                mesh.positions.push(Point3::new(x, y, z));
            }
            Some("f") => {
                let mut refs = Vec::with_capacity(4);
                for token in tokens {
                    refs.push(resolve_face_ref(token, mesh.positions.len(), line_no)?);
                }
                if refs.len() < 3 {
                    return Err(IoError::invalid_content(format!(
                        "line {}: face with {} vertices",
                        line_no + 1,
                        refs.len()
                    )));
                }
                // Fan triangulation for quads and larger polygons
                for i in 1..refs.len() - 1 {
                    mesh.faces.push([refs[0], refs[i], refs[i + 1]]);
                }
            }
            _ => {} // comments, vt/vn, groups, materials
        }
    }

    Ok(mesh)
}

/// Resolve one face vertex reference (`v`, `v/vt`, `v//vn`, `v/vt/vn`)
/// to a zero-based vertex index.
#[allow(
    clippy::cast_possible_wrap,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
fn resolve_face_ref(token: &str, vertex_count: usize, line_no: usize) -> IoResult<u32> {
    let index_part = token.split('/').next().unwrap_or(token);
    let raw = index_part.parse::<i64>()?;

    let resolved = if raw > 0 {
        raw - 1
    } else if raw < 0 {
        // Negative indices count back from the most recently defined vertex
        vertex_count as i64 + raw
    } else {
        return Err(IoError::invalid_content(format!(
            "line {}: face index 0 is not valid OBJ",
            line_no + 1
        )));
    };

    if resolved < 0 || resolved >= vertex_count as i64 {
        return Err(IoError::invalid_content(format!(
            "line {}: face references vertex {raw} but only {vertex_count} vertices are defined",
            line_no + 1
        )));
    }

    Ok(resolved as u32)
}
