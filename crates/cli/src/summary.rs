//! Structural summary of a document, printed by `sketch info`.

use node::ShapeRef;
use serde::Serialize;
use std::fmt::Write;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShapeSummary {
    pub id: String,
    pub tag: &'static str,
    pub name: &'static str,
    pub hot_points: Vec<[f32; 2]>,
    pub bounds: [[f32; 2]; 2],
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ShapeSummary>,
}

impl ShapeSummary {
    pub fn of(shape: &ShapeRef) -> Self {
        let bounds = shape.bounding_box();
        Self {
            id: shape.id().to_uuid_string(),
            tag: shape.tag(),
            name: shape.name(),
            hot_points: shape.hot_points().iter().map(|p| [p.x(), p.y()]).collect(),
            bounds: [bounds.min.to_array(), bounds.max.to_array()],
            children: shape.children().iter().map(ShapeSummary::of).collect(),
        }
    }
}

pub fn summarize(shapes: &[ShapeRef]) -> Vec<ShapeSummary> {
    shapes.iter().map(ShapeSummary::of).collect()
}

/// Indented tree, one shape per line.
pub fn render_tree(summaries: &[ShapeSummary]) -> String {
    let mut out = String::new();
    for summary in summaries {
        write_node(&mut out, summary, 0);
    }
    out
}

fn write_node(out: &mut String, summary: &ShapeSummary, depth: usize) {
    let points = summary
        .hot_points
        .iter()
        .map(|[x, y]| format!("({}, {})", x, y))
        .collect::<Vec<_>>()
        .join(" ");
    let _ = write!(out, "{}{} {}", "  ".repeat(depth), summary.tag, summary.name);
    if summary.children.is_empty() {
        let _ = writeln!(out, " {}", points);
    } else {
        let _ = writeln!(out, " [{} children]", summary.children.len());
    }
    for child in &summary.children {
        write_node(out, child, depth + 1);
    }
}
