/// A point in the plane. Plain value type, copied freely.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// An ordered vertex loop; the last vertex implicitly connects back to the
/// first. Shared read-only across sampling workers, so it needs no locking.
///
/// The kernel assumes no two consecutive vertices coincide; it does not
/// enforce this, and malformed loops classify unpredictably.
#[derive(Debug, Clone)]
pub struct Polygon {
    pub vertices: Vec<Point>,
}

impl Polygon {
    pub fn new(vertices: Vec<Point>) -> Self {
        Self { vertices }
    }

    /// A loop needs at least 3 vertices to enclose anything.
    pub fn is_valid(&self) -> bool {
        self.vertices.len() >= 3
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Largest vertex x-coordinate, used to place the exterior ray anchor.
    pub fn max_x(&self) -> f64 {
        self.vertices
            .iter()
            .map(|v| v.x)
            .fold(f64::NEG_INFINITY, f64::max)
    }

    /// Edges as vertex pairs, wrapping from the last vertex to the first.
    pub fn edges(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| (self.vertices[i], self.vertices[(i + 1) % n]))
    }
}
