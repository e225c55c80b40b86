use crate::domain::Point;

/// Rotational sense of an ordered point triplet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Colinear,
    Clockwise,
    CounterClockwise,
}

/// Orientation of the triplet (p, q, r) from the sign of the cross product
/// (q - p) x (r - q).
///
/// Colinear requires the cross product to be exactly zero. Random samples
/// almost never land there, but degenerate polygons make it reachable, and
/// the intersection test below leans on this exact classification.
pub fn orientation(p: Point, q: Point, r: Point) -> Orientation {
    let val = (q.y - p.y) * (r.x - q.x) - (q.x - p.x) * (r.y - q.y);

    if val == 0.0 {
        Orientation::Colinear
    } else if val > 0.0 {
        Orientation::Clockwise
    } else {
        Orientation::CounterClockwise
    }
}

/// Whether q lies within the axis-aligned bounding box of segment p-r.
///
/// Only meaningful once colinearity of (p, q, r) is established; this check
/// alone says nothing about q being on the line.
pub fn on_segment(p: Point, q: Point, r: Point) -> bool {
    q.x <= p.x.max(r.x) && q.x >= p.x.min(r.x) && q.y <= p.y.max(r.y) && q.y >= p.y.min(r.y)
}

/// Whether segments p1-q1 and p2-q2 intersect.
///
/// General case: the endpoints of each segment must straddle the other
/// segment's line (both orientation pairs differ). Colinear triplets fall
/// back to bounding-box containment, which covers endpoint touching and
/// overlapping colinear segments.
pub fn segments_intersect(p1: Point, q1: Point, p2: Point, q2: Point) -> bool {
    let o1 = orientation(p1, q1, p2);
    let o2 = orientation(p1, q1, q2);
    let o3 = orientation(p2, q2, p1);
    let o4 = orientation(p2, q2, q1);

    if o1 != o2 && o3 != o4 {
        return true;
    }

    if o1 == Orientation::Colinear && on_segment(p1, p2, q1) {
        return true;
    }
    if o2 == Orientation::Colinear && on_segment(p1, q2, q1) {
        return true;
    }
    if o3 == Orientation::Colinear && on_segment(p2, p1, q2) {
        return true;
    }
    if o4 == Orientation::Colinear && on_segment(p2, q1, q2) {
        return true;
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pt(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn test_orientation_basic() {
        let p = pt(0.0, 0.0);
        let q = pt(1.0, 0.0);
        // Left turn (upward) is counterclockwise.
        assert_eq!(
            orientation(p, q, pt(2.0, 1.0)),
            Orientation::CounterClockwise
        );
        assert_eq!(orientation(p, q, pt(2.0, -1.0)), Orientation::Clockwise);
        assert_eq!(orientation(p, q, pt(2.0, 0.0)), Orientation::Colinear);
    }

    #[test]
    fn test_orientation_antisymmetric_in_last_two() {
        let p = pt(0.3, -0.7);
        let q = pt(1.1, 2.0);
        let r = pt(-0.5, 0.4);
        let a = orientation(p, q, r);
        let b = orientation(p, r, q);
        match (a, b) {
            (Orientation::Clockwise, Orientation::CounterClockwise) => {}
            (Orientation::CounterClockwise, Orientation::Clockwise) => {}
            (Orientation::Colinear, Orientation::Colinear) => {}
            other => panic!("orientation not antisymmetric: {:?}", other),
        }
    }

    #[test]
    fn test_colinear_iff_exactly_collinear() {
        // Points on y = x are exactly representable here.
        assert_eq!(
            orientation(pt(0.0, 0.0), pt(1.0, 1.0), pt(2.0, 2.0)),
            Orientation::Colinear
        );
        assert_ne!(
            orientation(pt(0.0, 0.0), pt(1.0, 1.0), pt(2.0, 2.0 + 1e-12)),
            Orientation::Colinear
        );
    }

    #[test]
    fn test_on_segment_is_a_bbox_check() {
        let p = pt(0.0, 0.0);
        let r = pt(2.0, 2.0);
        assert!(on_segment(p, pt(1.0, 1.0), r));
        assert!(on_segment(p, pt(2.0, 2.0), r));
        assert!(!on_segment(p, pt(3.0, 1.0), r));
        // Inside the box but off the line: still true, by design.
        assert!(on_segment(p, pt(0.5, 1.5), r));
    }

    #[test]
    fn test_segments_crossing() {
        assert!(segments_intersect(
            pt(0.0, 0.0),
            pt(2.0, 2.0),
            pt(0.0, 2.0),
            pt(2.0, 0.0)
        ));
    }

    #[test]
    fn test_segments_disjoint() {
        assert!(!segments_intersect(
            pt(0.0, 0.0),
            pt(1.0, 0.0),
            pt(0.0, 1.0),
            pt(1.0, 1.0)
        ));
    }

    #[test]
    fn test_segments_endpoint_touch() {
        assert!(segments_intersect(
            pt(0.0, 0.0),
            pt(1.0, 1.0),
            pt(1.0, 1.0),
            pt(2.0, 0.0)
        ));
    }

    #[test]
    fn test_segments_colinear_overlap() {
        assert!(segments_intersect(
            pt(0.0, 0.0),
            pt(2.0, 0.0),
            pt(1.0, 0.0),
            pt(3.0, 0.0)
        ));
        assert!(!segments_intersect(
            pt(0.0, 0.0),
            pt(1.0, 0.0),
            pt(2.0, 0.0),
            pt(3.0, 0.0)
        ));
    }

    #[test]
    fn test_segments_intersect_symmetric() {
        let cases = [
            (pt(0.0, 0.0), pt(2.0, 2.0), pt(0.0, 2.0), pt(2.0, 0.0)),
            (pt(0.0, 0.0), pt(1.0, 0.0), pt(0.0, 1.0), pt(1.0, 1.0)),
            (pt(0.0, 0.0), pt(2.0, 0.0), pt(1.0, 0.0), pt(3.0, 0.0)),
            (pt(-1.0, -1.0), pt(1.0, 1.0), pt(0.0, 0.0), pt(5.0, -3.0)),
        ];
        for (a, b, c, d) in cases {
            assert_eq!(
                segments_intersect(a, b, c, d),
                segments_intersect(c, d, a, b)
            );
        }
    }
}
