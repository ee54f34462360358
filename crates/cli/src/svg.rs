//! SVG export backend.

use crate::config::ExportConfig;
use sketch_core::{Point, Renderer};

/// Renderer that accumulates SVG elements; [`SvgRenderer::finish`] returns
/// the complete document.
#[derive(Debug)]
pub struct SvgRenderer {
    style: ExportConfig,
    elements: Vec<String>,
}

impl SvgRenderer {
    pub fn new(style: ExportConfig) -> Self {
        Self {
            style,
            elements: Vec::new(),
        }
    }

    fn header(&self) -> String {
        let mut header = String::from(r#"<svg xmlns="http://www.w3.org/2000/svg" version="1.1""#);
        if let Some(width) = self.style.width {
            header.push_str(&format!(r#" width="{}""#, width));
        }
        if let Some(height) = self.style.height {
            header.push_str(&format!(r#" height="{}""#, height));
        }
        header.push('>');
        header
    }

    pub fn finish(self) -> String {
        let mut lines = Vec::with_capacity(self.elements.len() + 2);
        lines.push(self.header());
        lines.extend(self.elements);
        lines.push("</svg>".to_string());
        lines.join("\n")
    }
}

impl Renderer for SvgRenderer {
    fn draw_line(&mut self, start: Point, end: Point) {
        self.elements.push(format!(
            r#"  <line x1="{}" y1="{}" x2="{}" y2="{}" style="stroke:{};stroke-width:{}" />"#,
            start.x(),
            start.y(),
            end.x(),
            end.y(),
            self.style.stroke,
            self.style.stroke_width
        ));
    }

    fn fill_polygon(&mut self, points: &[Point]) {
        let points = points
            .iter()
            .map(|p| format!("{},{}", p.x(), p.y()))
            .collect::<Vec<_>>()
            .join(" ");
        self.elements.push(format!(
            r#"  <polygon points="{}" style="fill:{};stroke:{};stroke-width:{}" />"#,
            points, self.style.fill, self.style.outline, self.style.outline_width
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document() {
        let svg = SvgRenderer::new(ExportConfig::default()).finish();
        assert_eq!(
            svg,
            "<svg xmlns=\"http://www.w3.org/2000/svg\" version=\"1.1\">\n</svg>"
        );
    }

    #[test]
    fn test_elements() {
        let mut renderer = SvgRenderer::new(ExportConfig::default());
        renderer.draw_line(Point::new(0.0, 0.0), Point::new(10.0, 5.5));
        renderer.fill_polygon(&[
            Point::new(1.0, 1.0),
            Point::new(2.0, 1.0),
            Point::new(2.0, 2.0),
        ]);

        let svg = renderer.finish();
        let lines: Vec<_> = svg.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(
            lines[1],
            r#"  <line x1="0" y1="0" x2="10" y2="5.5" style="stroke:blue;stroke-width:2" />"#
        );
        assert_eq!(
            lines[2],
            r#"  <polygon points="1,1 2,1 2,2" style="fill:blue;stroke:red;stroke-width:1" />"#
        );
    }

    #[test]
    fn test_sized_header() {
        let style = ExportConfig {
            width: Some(800.0),
            height: Some(600.0),
            ..ExportConfig::default()
        };
        let svg = SvgRenderer::new(style).finish();
        assert!(svg.starts_with(
            r#"<svg xmlns="http://www.w3.org/2000/svg" version="1.1" width="800" height="600">"#
        ));
    }
}
