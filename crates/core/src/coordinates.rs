//! # Drawing coordinates
//!
//! Every shape in a sketch lives in a single flat drawing space: the same
//! space the host reports pointer positions in. A [`Point`] is an immutable
//! value in that space; operations that "move" a point return a new one.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};

/// Position (or offset) in drawing space.
///
/// The same type doubles as a translation vector, so a pointer position can be
/// used directly to move a freshly duplicated prototype into place.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point(pub Vec2);

impl Point {
    pub const ORIGIN: Point = Point(Vec2::ZERO);

    pub fn new(x: f32, y: f32) -> Self {
        Self(Vec2::new(x, y))
    }

    pub fn x(&self) -> f32 {
        self.0.x
    }

    pub fn y(&self) -> f32 {
        self.0.y
    }

    /// Returns this point shifted by `delta`.
    pub fn translate(self, delta: Point) -> Point {
        Point(self.0 + delta.0)
    }

    /// Returns the vector from `other` to this point.
    pub fn difference(self, other: Point) -> Point {
        Point(self.0 - other.0)
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, other: Point) -> Self::Output {
        self.translate(other)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, other: Point) -> Self::Output {
        self.difference(other)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.0.x, self.0.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translate_and_difference() {
        let p = Point::new(3.0, 4.0);
        let moved = p.translate(Point::new(1.0, -2.0));
        assert_eq!(moved, Point::new(4.0, 2.0));
        assert_eq!(moved.difference(p), Point::new(1.0, -2.0));
        assert_eq!(moved - p, moved.difference(p));
        assert_eq!(p + Point::new(1.0, -2.0), moved);
    }

    #[test]
    fn test_translate_does_not_mutate() {
        let p = Point::new(1.0, 1.0);
        let _ = p.translate(Point::new(5.0, 5.0));
        assert_eq!(p, Point::new(1.0, 1.0));
    }

    #[test]
    fn test_serde_shape() {
        let p = Point::new(1.5, -2.0);
        let json = serde_json::to_string(&p).unwrap();
        let back: Point = serde_json::from_str(&json).unwrap();
        assert_eq!(back, p);
    }
}
