use crate::domain::{Point, Polygon};
use crate::geometry::kernel::{Orientation, on_segment, orientation, segments_intersect};

/// An x-coordinate strictly to the right of every vertex, used as the far
/// end of the horizontal test ray. Computed per polygon rather than baked in
/// as a constant, so polygons of any extent get a ray that actually exits.
pub fn exterior_ray_x(polygon: &Polygon) -> f64 {
    polygon.max_x() + 1.0
}

/// Ray-casting point-in-polygon test.
///
/// Casts a horizontal ray from `point` to `(ray_x, point.y)` and counts edge
/// crossings; an odd count means inside. `ray_x` must lie strictly right of
/// the polygon (see [`exterior_ray_x`]).
///
/// Points exactly colinear with an edge's endpoints are resolved immediately
/// by the on-segment check: on the edge counts as inside, colinear but off
/// the edge counts as outside. This keeps boundary queries deterministic
/// instead of depending on which crossings the ray happens to collect.
///
/// Fails closed: fewer than 3 vertices classifies everything as outside.
///
/// Known limitation: a query whose ray passes exactly through a vertex can
/// still double-count that vertex's edges. For uniformly drawn samples this
/// is a measure-zero event; it is an accepted inaccuracy, not an error.
pub fn point_in_polygon(polygon: &Polygon, point: Point, ray_x: f64) -> bool {
    if !polygon.is_valid() {
        return false;
    }

    let ray_end = Point::new(ray_x, point.y);
    let mut crossings = 0u32;

    for (a, b) in polygon.edges() {
        if segments_intersect(a, b, point, ray_end) {
            if orientation(a, point, b) == Orientation::Colinear {
                return on_segment(a, point, b);
            }
            crossings += 1;
        }
    }

    crossings % 2 == 1
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pt(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    fn unit_square() -> Polygon {
        Polygon::new(vec![
            pt(0.0, 0.0),
            pt(1.0, 0.0),
            pt(1.0, 1.0),
            pt(0.0, 1.0),
        ])
    }

    #[test]
    fn test_unit_square_interior_and_exterior() {
        let square = unit_square();
        let ray_x = exterior_ray_x(&square);
        assert!(point_in_polygon(&square, pt(0.5, 0.5), ray_x));
        assert!(point_in_polygon(&square, pt(0.01, 0.99), ray_x));
        assert!(!point_in_polygon(&square, pt(1.5, 0.5), ray_x));
        assert!(!point_in_polygon(&square, pt(-0.5, 0.5), ray_x));
        assert!(!point_in_polygon(&square, pt(0.5, 1.5), ray_x));
    }

    #[test]
    fn test_too_few_vertices_fails_closed() {
        let empty = Polygon::new(vec![]);
        let segment = Polygon::new(vec![pt(0.0, 0.0), pt(1.0, 1.0)]);
        for poly in [&empty, &segment] {
            let ray_x = poly.max_x() + 1.0;
            assert!(!point_in_polygon(poly, pt(0.5, 0.5), ray_x));
            assert!(!point_in_polygon(poly, pt(0.0, 0.0), ray_x));
        }
    }

    #[test]
    fn test_boundary_point_counts_as_inside() {
        let square = unit_square();
        let ray_x = exterior_ray_x(&square);
        // On a vertical edge.
        assert!(point_in_polygon(&square, pt(1.0, 0.5), ray_x));
        // On a horizontal edge.
        assert!(point_in_polygon(&square, pt(0.5, 0.0), ray_x));
        // On a vertex.
        assert!(point_in_polygon(&square, pt(0.0, 0.0), ray_x));
    }

    #[test]
    fn test_colinear_but_off_edge_is_outside() {
        let square = unit_square();
        let ray_x = exterior_ray_x(&square);
        // Colinear with the bottom edge, beyond its extent.
        assert!(!point_in_polygon(&square, pt(-0.5, 0.0), ray_x));
    }

    #[test]
    fn test_concave_polygon() {
        // A "C" opening to the right; (1.5, 1.0) sits in the notch.
        let c_shape = Polygon::new(vec![
            pt(0.0, 0.0),
            pt(2.0, 0.0),
            pt(2.0, 0.5),
            pt(1.0, 0.5),
            pt(1.0, 1.5),
            pt(2.0, 1.5),
            pt(2.0, 2.0),
            pt(0.0, 2.0),
        ]);
        let ray_x = exterior_ray_x(&c_shape);
        assert!(point_in_polygon(&c_shape, pt(0.5, 1.0), ray_x));
        assert!(!point_in_polygon(&c_shape, pt(1.5, 1.0), ray_x));
        assert!(point_in_polygon(&c_shape, pt(1.5, 0.25), ray_x));
    }

    #[test]
    fn test_polygon_right_of_classic_constant() {
        // Regression for the old fixed x = 2.5 anchor: this triangle lives
        // entirely right of it, so a constant ray would never exit.
        let tri = Polygon::new(vec![pt(10.0, 0.0), pt(12.0, 0.0), pt(11.0, 2.0)]);
        let ray_x = exterior_ray_x(&tri);
        assert!(ray_x > 12.0);
        assert!(point_in_polygon(&tri, pt(11.0, 0.5), ray_x));
        assert!(!point_in_polygon(&tri, pt(10.1, 1.9), ray_x));
    }
}
