pub mod bounds;
pub mod kernel;
pub mod raycast;

pub use bounds::Bounds;
pub use kernel::{Orientation, on_segment, orientation, segments_intersect};
pub use raycast::{exterior_ray_x, point_in_polygon};
