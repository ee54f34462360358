use crate::record::{format_two_points, parse_two_points};
use crate::shape::{Shape, ShapeRef, ShapeVariant};
use crate::RecordError;
use sketch_core::{distance_to_segment, Bounds, Point, Renderer};

/// A straight segment between its two hot points.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Line;

impl Line {
    pub const TAG: &'static str = "@LINE";
}

impl ShapeVariant for Line {
    fn tag(&self) -> &'static str {
        Self::TAG
    }

    fn name(&self) -> &'static str {
        "Line"
    }

    fn bounding_box(&self, points: &[Point]) -> Bounds {
        match points {
            [start, end] => Bounds::from_corners(*start, *end),
            _ => Bounds::zero(),
        }
    }

    fn selection_distance(&self, points: &[Point], point: Point) -> f32 {
        match points {
            [start, end] => distance_to_segment(*start, *end, point),
            _ => f32::INFINITY,
        }
    }

    fn render(&self, points: &[Point], renderer: &mut dyn Renderer) {
        if let [start, end] = points {
            renderer.draw_line(*start, *end);
        }
    }

    fn save(&self, points: &[Point], rows: &mut Vec<String>) {
        if let [start, end] = points {
            rows.push(format_two_points(Self::TAG, *start, *end));
        }
    }

    fn load(&self, stack: &mut Vec<ShapeRef>, data: &str) -> Result<(), RecordError> {
        let (start, end) = parse_two_points(Self::TAG, data)?;
        stack.push(Shape::line(start, end));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sketch_core::RecordingRenderer;

    #[test]
    fn test_bounding_box_normalizes() {
        let line = Shape::line(Point::new(10.0, 2.0), Point::new(4.0, 8.0));
        let bounds = line.bounding_box();
        assert_eq!(bounds.origin(), Point::new(4.0, 2.0));
        assert_eq!(bounds.width(), 6.0);
        assert_eq!(bounds.height(), 6.0);
    }

    #[test]
    fn test_selection_distance_is_segment_distance() {
        let line = Shape::line(Point::new(0.0, 0.0), Point::new(10.0, 0.0));
        assert_eq!(line.selection_distance(Point::new(5.0, 4.0)), 4.0);
        assert_eq!(line.selection_distance(Point::new(13.0, 4.0)), 5.0);
    }

    #[test]
    fn test_renders_one_segment() {
        let line = Shape::line(Point::new(1.0, 2.0), Point::new(3.0, 4.0));
        let mut renderer = RecordingRenderer::new();
        line.render(&mut renderer);

        assert_eq!(
            renderer.lines(),
            vec![(Point::new(1.0, 2.0), Point::new(3.0, 4.0))]
        );
        assert!(renderer.polygons().is_empty());
    }

    #[test]
    fn test_save_then_load() {
        let line = Shape::line(Point::new(0.0, 0.0), Point::new(10.0, 0.0));
        let mut rows = Vec::new();
        line.save(&mut rows);
        assert_eq!(rows, vec!["@LINE 0 0 10 0".to_string()]);

        let data = rows[0].strip_prefix("@LINE ").unwrap();
        let mut stack = Vec::new();
        line.load(&mut stack, data).unwrap();

        assert_eq!(stack.len(), 1);
        assert_eq!(stack[0].tag(), Line::TAG);
        assert_eq!(stack[0].hot_points(), line.hot_points());
    }

    #[test]
    fn test_load_rejects_bad_row() {
        let prototype = Shape::line(Point::ORIGIN, Point::new(10.0, 0.0));
        let mut stack = Vec::new();
        assert!(prototype.load(&mut stack, "1 2").is_err());
        assert!(stack.is_empty());
    }
}
