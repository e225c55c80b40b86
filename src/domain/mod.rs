pub mod polygon;

pub use polygon::{Point, Polygon};
