use rand::Rng;

use crate::domain::{Point, Polygon};

/// Axis-aligned bounding box, doubling as the Monte Carlo sampling domain.
/// Its area is the reference area the inside-ratio gets scaled by.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl Bounds {
    /// The classic [0,2]x[0,2] sampling square (reference area 4.0).
    pub const UNIT_SCALED: Bounds = Bounds {
        min_x: 0.0,
        max_x: 2.0,
        min_y: 0.0,
        max_y: 2.0,
    };

    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min_x,
            max_x,
            min_y,
            max_y,
        }
    }

    /// Create bounds from a set of points
    pub fn from_points(points: &[Point]) -> Option<Self> {
        if points.is_empty() {
            return None;
        }

        let mut min_x = f64::MAX;
        let mut max_x = f64::MIN;
        let mut min_y = f64::MAX;
        let mut max_y = f64::MIN;

        for p in points {
            min_x = min_x.min(p.x);
            max_x = max_x.max(p.x);
            min_y = min_y.min(p.y);
            max_y = max_y.max(p.y);
        }

        Some(Self {
            min_x,
            max_x,
            min_y,
            max_y,
        })
    }

    /// Bounding box of a polygon's vertices. None for an empty vertex list.
    pub fn around_polygon(polygon: &Polygon) -> Option<Self> {
        Self::from_points(&polygon.vertices)
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Reference area for the estimate.
    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.min_x && p.x <= self.max_x && p.y >= self.min_y && p.y <= self.max_y
    }

    /// Draw a uniform random point inside the box.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> Point {
        Point::new(
            rng.random_range(self.min_x..=self.max_x),
            rng.random_range(self.min_y..=self.max_y),
        )
    }
}
