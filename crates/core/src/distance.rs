//! Distance functions used for hit testing.

use crate::Point;

/// Euclidean distance between two points.
pub fn distance_to_point(a: Point, b: Point) -> f32 {
    a.0.distance(b.0)
}

/// Distance from `p` to the closest point of the segment `start..end`.
///
/// `p` is projected onto the infinite line through the segment and the
/// projection factor is clamped to `[0, 1]`. A degenerate segment collapses
/// to a point distance from `start`.
pub fn distance_to_segment(start: Point, end: Point, p: Point) -> f32 {
    let segment = end.0 - start.0;
    let length_squared = segment.length_squared();

    if length_squared == 0.0 {
        return distance_to_point(start, p);
    }

    let t = (p.0 - start.0).dot(segment) / length_squared;
    let closest = start.0 + segment * t.clamp(0.0, 1.0);
    closest.distance(p.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_distance() {
        assert_eq!(distance_to_point(Point::new(0.0, 0.0), Point::new(3.0, 4.0)), 5.0);
        assert_eq!(distance_to_point(Point::new(2.0, 2.0), Point::new(2.0, 2.0)), 0.0);
    }

    #[test]
    fn test_segment_distance_projects_inside() {
        let d = distance_to_segment(Point::new(0.0, 0.0), Point::new(10.0, 0.0), Point::new(5.0, 3.0));
        assert_eq!(d, 3.0);
    }

    #[test]
    fn test_segment_distance_clamps_to_endpoints() {
        let start = Point::new(0.0, 0.0);
        let end = Point::new(10.0, 0.0);

        // Before the start
        assert_eq!(distance_to_segment(start, end, Point::new(-3.0, 4.0)), 5.0);
        // Past the end
        assert_eq!(distance_to_segment(start, end, Point::new(13.0, 4.0)), 5.0);
    }

    #[test]
    fn test_degenerate_segment() {
        let p = Point::new(1.0, 1.0);
        let d = distance_to_segment(p, p, Point::new(4.0, 5.0));
        assert_eq!(d, 5.0);
    }
}
