use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::domain::{Point, Polygon};

/// Why a polygon file could not be turned into a usable polygon.
#[derive(Debug, Error)]
pub enum PolygonFileError {
    #[error("failed to read polygon file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("polygon file {path} has {found} valid vertices, need at least 3")]
    TooFewVertices { path: PathBuf, found: usize },
}

/// A parsed polygon plus what the parser had to ignore along the way.
#[derive(Debug)]
pub struct LoadedPolygon {
    pub polygon: Polygon,
    /// Lines that did not parse as two finite floats.
    pub skipped_lines: usize,
}

/// Load a polygon from a vertex file.
///
/// # Format
/// One vertex per line: two whitespace-separated floating-point numbers,
/// in order around the boundary. Lines that do not parse as two finite
/// numbers are skipped (and counted). Fewer than 3 usable vertices is fatal.
pub fn load_polygon(path: &Path) -> Result<LoadedPolygon, PolygonFileError> {
    let contents = std::fs::read_to_string(path).map_err(|source| PolygonFileError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let mut vertices = Vec::new();
    let mut skipped_lines = 0;

    for line in contents.lines() {
        match parse_vertex(line) {
            Some(p) => vertices.push(p),
            None => {
                if !line.trim().is_empty() {
                    skipped_lines += 1;
                }
            }
        }
    }

    if vertices.len() < 3 {
        return Err(PolygonFileError::TooFewVertices {
            path: path.to_path_buf(),
            found: vertices.len(),
        });
    }

    Ok(LoadedPolygon {
        polygon: Polygon::new(vertices),
        skipped_lines,
    })
}

fn parse_vertex(line: &str) -> Option<Point> {
    let mut parts = line.split_whitespace();
    let x: f64 = parts.next()?.parse().ok()?;
    let y: f64 = parts.next()?.parse().ok()?;

    let p = Point::new(x, y);
    if !p.is_finite() {
        return None;
    }
    Some(p)
}
