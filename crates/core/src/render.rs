//! The drawing capability shapes render through.
//!
//! Shapes never talk to a concrete backend. They emit draw calls on a
//! [`Renderer`], and the host decides whether those land on a live surface
//! or in an exported vector file.

use crate::Point;

pub trait Renderer {
    /// Draws a straight segment from `start` to `end`.
    fn draw_line(&mut self, start: Point, end: Point);

    /// Fills the closed polygon through `points` (at least one point).
    fn fill_polygon(&mut self, points: &[Point]);
}

/// A single recorded draw call.
#[cfg(any(test, feature = "test-support"))]
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Line { start: Point, end: Point },
    Polygon(Vec<Point>),
}

/// Renderer that records every call, for asserting on render output in tests.
#[cfg(any(test, feature = "test-support"))]
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    pub commands: Vec<DrawCommand>,
}

#[cfg(any(test, feature = "test-support"))]
impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<(Point, Point)> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Line { start, end } => Some((*start, *end)),
                DrawCommand::Polygon(_) => None,
            })
            .collect()
    }

    pub fn polygons(&self) -> Vec<&[Point]> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Polygon(points) => Some(points.as_slice()),
                DrawCommand::Line { .. } => None,
            })
            .collect()
    }
}

#[cfg(any(test, feature = "test-support"))]
impl Renderer for RecordingRenderer {
    fn draw_line(&mut self, start: Point, end: Point) {
        self.commands.push(DrawCommand::Line { start, end });
    }

    fn fill_polygon(&mut self, points: &[Point]) {
        self.commands.push(DrawCommand::Polygon(points.to_vec()));
    }
}
