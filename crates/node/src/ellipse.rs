use crate::record::{format_two_points, parse_two_points};
use crate::shape::{Shape, ShapeRef, ShapeVariant};
use crate::RecordError;
use sketch_core::{distance_to_point, Bounds, Point, Renderer};
use std::f32::consts::TAU;

/// Number of polygon vertices used to draw an ellipse.
pub const ELLIPSE_SEGMENTS: usize = 36;

/// An axis-aligned ellipse inscribed in the box spanned by its two hot
/// points. The points are opposite corners in either order.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Ellipse;

impl Ellipse {
    pub const TAG: &'static str = "@OVAL";
}

impl ShapeVariant for Ellipse {
    fn tag(&self) -> &'static str {
        Self::TAG
    }

    fn name(&self) -> &'static str {
        "Oval"
    }

    fn bounding_box(&self, points: &[Point]) -> Bounds {
        match points {
            [first, second] => Bounds::from_corners(*first, *second),
            _ => Bounds::zero(),
        }
    }

    /// Zero anywhere inside the ellipse. Outside it is an approximation that
    /// grows with distance from the center; good for hit testing only.
    fn selection_distance(&self, points: &[Point], point: Point) -> f32 {
        let bounds = self.bounding_box(points);
        let center = bounds.center();
        let radii = bounds.half_size();

        if radii.x == 0.0 || radii.y == 0.0 {
            return distance_to_point(center, point);
        }

        let d = point.difference(center);
        let (dx, dy) = (d.x(), d.y());

        let normalized = (dx / radii.x).powi(2) + (dy / radii.y).powi(2);
        if normalized <= 1.0 {
            return 0.0;
        }

        let correction =
            (radii.x * radii.y) / ((radii.y * dx).powi(2) + (radii.x * dy).powi(2)).sqrt();
        (dx * dx + dy * dy).sqrt() - correction
    }

    fn render(&self, points: &[Point], renderer: &mut dyn Renderer) {
        let bounds = self.bounding_box(points);
        let center = bounds.center();
        let radii = bounds.half_size();

        let outline: Vec<Point> = (0..ELLIPSE_SEGMENTS)
            .map(|i| {
                let angle = TAU * i as f32 / ELLIPSE_SEGMENTS as f32;
                Point::new(
                    center.x() + radii.x * angle.cos(),
                    center.y() + radii.y * angle.sin(),
                )
            })
            .collect();

        renderer.fill_polygon(&outline);
    }

    fn save(&self, points: &[Point], rows: &mut Vec<String>) {
        if let [first, second] = points {
            rows.push(format_two_points(Self::TAG, *first, *second));
        }
    }

    fn load(&self, stack: &mut Vec<ShapeRef>, data: &str) -> Result<(), RecordError> {
        let (first, second) = parse_two_points(Self::TAG, data)?;
        stack.push(Shape::ellipse(first, second));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sketch_core::RecordingRenderer;

    fn unit() -> ShapeRef {
        // Corners deliberately given bottom-left then top-right
        Shape::ellipse(Point::new(0.0, 10.0), Point::new(20.0, 0.0))
    }

    #[test]
    fn test_bounding_box_normalizes_corners() {
        let bounds = unit().bounding_box();
        assert_eq!(bounds.origin(), Point::new(0.0, 0.0));
        assert_eq!(bounds.width(), 20.0);
        assert_eq!(bounds.height(), 10.0);
    }

    #[test]
    fn test_inside_is_zero() {
        let ellipse = unit();
        assert_eq!(ellipse.selection_distance(Point::new(10.0, 5.0)), 0.0);
        assert_eq!(ellipse.selection_distance(Point::new(18.0, 5.0)), 0.0);
        assert_eq!(ellipse.selection_distance(Point::new(10.0, 1.0)), 0.0);
    }

    #[test]
    fn test_outside_along_major_axis() {
        let ellipse = unit();
        // Center (10, 5), radii (10, 5), point 30 units right of center
        let d = ellipse.selection_distance(Point::new(40.0, 5.0));
        assert!(d > 0.0);
        assert!((d - (30.0 - 50.0 / 150.0)).abs() < 1e-4);
    }

    #[test]
    fn test_degenerate_falls_back_to_center_distance() {
        let flat = Shape::ellipse(Point::new(0.0, 0.0), Point::new(10.0, 0.0));
        // Center (5, 0)
        assert_eq!(flat.selection_distance(Point::new(5.0, 4.0)), 4.0);
    }

    #[test]
    fn test_renders_tessellated_polygon() {
        let mut renderer = RecordingRenderer::new();
        unit().render(&mut renderer);

        let polygons = renderer.polygons();
        assert_eq!(polygons.len(), 1);
        assert_eq!(polygons[0].len(), ELLIPSE_SEGMENTS);
        // First vertex sits at angle zero: the right-hand rim
        assert_eq!(polygons[0][0], Point::new(20.0, 5.0));
        assert!(renderer.lines().is_empty());
    }

    #[test]
    fn test_save_row() {
        let mut rows = Vec::new();
        unit().save(&mut rows);
        assert_eq!(rows, vec!["@OVAL 0 10 20 0".to_string()]);
    }
}
