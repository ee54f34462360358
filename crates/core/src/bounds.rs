//! Axis-aligned boxes.
//!
//! Shapes in a sketch only ever move by translation, so a box never needs an
//! orientation. Hit testing, the eraser sweep and the selection outline all
//! work on these.

use crate::Point;
use glam::Vec2;

#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Bounds {
    /// Smallest x and y (top-left on screen).
    pub min: Vec2,
    /// Largest x and y (bottom-right on screen).
    pub max: Vec2,
}

impl Bounds {
    /// The box spanned by two opposite corners, in either order.
    pub fn from_corners(a: Point, b: Point) -> Self {
        Bounds {
            min: a.0.min(b.0),
            max: a.0.max(b.0),
        }
    }

    /// A degenerate box at the origin. Empty groups report this.
    pub fn zero() -> Self {
        Bounds::default()
    }

    pub fn origin(&self) -> Point {
        Point(self.min)
    }

    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    pub fn half_size(&self) -> Vec2 {
        Vec2::new(self.width(), self.height()) / 2.0
    }

    pub fn center(&self) -> Point {
        Point(self.min.lerp(self.max, 0.5))
    }

    /// Smallest box holding both `self` and `other`.
    pub fn union(&self, other: &Bounds) -> Bounds {
        Bounds {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// Edge-inclusive intersection test.
    ///
    /// Boxes that merely touch count as overlapping, and so do degenerate
    /// boxes such as a perfectly vertical pointer stroke.
    pub fn overlaps(&self, other: &Bounds) -> bool {
        let apart_x = other.min.x > self.max.x || self.min.x > other.max.x;
        let apart_y = other.min.y > self.max.y || self.min.y > other.max.y;
        !apart_x && !apart_y
    }

    /// Inclusive on every edge.
    pub fn contains_point(&self, p: Point) -> bool {
        p.0.cmpge(self.min).all() && p.0.cmple(self.max).all()
    }

    /// Grows the box by `margin` on every side.
    pub fn expand(&self, margin: f32) -> Bounds {
        let pad = Vec2::splat(margin);
        Bounds {
            min: self.min - pad,
            max: self.max + pad,
        }
    }

    /// Top-left, top-right, bottom-right, bottom-left.
    pub fn corners(&self) -> [Point; 4] {
        let (lo, hi) = (self.min, self.max);
        [
            Point(lo),
            Point::new(hi.x, lo.y),
            Point(hi),
            Point::new(lo.x, hi.y),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(x0: f32, y0: f32, x1: f32, y1: f32) -> Bounds {
        Bounds::from_corners(Point::new(x0, y0), Point::new(x1, y1))
    }

    #[test]
    fn corners_are_normalized() {
        let b = Bounds::from_corners(Point::new(110.0, 20.0), Point::new(10.0, 70.0));
        assert_eq!(b.origin(), Point::new(10.0, 20.0));
        assert_eq!(b.max, Vec2::new(110.0, 70.0));
        assert_eq!((b.width(), b.height()), (100.0, 50.0));
        assert_eq!(b.center(), Point::new(60.0, 45.0));
        assert_eq!(b.half_size(), Vec2::new(50.0, 25.0));
    }

    #[test]
    fn overlap_checks_both_axes() {
        let a = rect(0.0, 0.0, 100.0, 100.0);
        assert!(a.overlaps(&rect(50.0, 50.0, 150.0, 150.0)));
        assert!(!a.overlaps(&rect(200.0, 0.0, 300.0, 100.0)));
        // same x range, disjoint in y
        assert!(!a.overlaps(&rect(0.0, 101.0, 100.0, 120.0)));
    }

    #[test]
    fn touching_and_degenerate_boxes_overlap() {
        let a = rect(0.0, 0.0, 10.0, 10.0);
        assert!(a.overlaps(&rect(10.0, 0.0, 20.0, 10.0)));
        assert!(a.overlaps(&rect(5.0, -5.0, 5.0, 15.0)));
    }

    #[test]
    fn union_covers_both() {
        let u = rect(0.0, 0.0, 100.0, 100.0).union(&rect(50.0, -10.0, 150.0, 40.0));
        assert_eq!(u, rect(0.0, -10.0, 150.0, 100.0));
    }

    #[test]
    fn corners_run_clockwise() {
        let c = rect(0.0, 0.0, 4.0, 2.0).corners();
        assert_eq!(
            c,
            [
                Point::new(0.0, 0.0),
                Point::new(4.0, 0.0),
                Point::new(4.0, 2.0),
                Point::new(0.0, 2.0),
            ]
        );
    }

    #[test]
    fn containment_includes_edges() {
        let b = rect(10.0, 20.0, 110.0, 70.0);
        assert!(b.contains_point(Point::new(10.0, 70.0)));
        assert!(b.contains_point(Point::new(60.0, 40.0)));
        assert!(!b.contains_point(Point::new(9.0, 40.0)));
        assert!(b.expand(1.0).contains_point(Point::new(9.0, 40.0)));
    }

    #[test]
    fn zero_is_default() {
        assert_eq!(Bounds::zero(), Bounds::default());
        assert_eq!(Bounds::zero().width(), 0.0);
    }
}
