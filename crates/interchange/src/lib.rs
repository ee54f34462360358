//! Sketch Interchange Format
//!
//! Line-based text format for sketch documents. Each row is a shape tag, a
//! space, then the fields that shape kind defines:
//!
//! ```text
//! @LINE 0 0 10 0
//! @OVAL 20 20 40 30
//! @LINE 5 5 15 5
//! @COMP 2
//! ```
//!
//! A group is written as its children's rows followed by a trailer row with
//! the group tag and the child count. Reading is a stack machine: leaf rows
//! push a shape, a trailer pops its children back off, and whatever is left
//! on the stack at the end is the list of top-level shapes. The example above
//! therefore holds a line and a group of an ellipse and a line.
//!
//! The row format of each kind lives with the kind itself in `node`; this
//! crate only splits documents into rows and drives the stack.

use node::{PrototypeRegistry, RecordError, ShapeRef};
use scene_graph::Scene;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Error type for interchange operations.
#[derive(Debug, Error)]
pub enum InterchangeError {
    /// No prototype is registered for the row's tag.
    #[error("line {line}: unknown shape tag {tag:?}")]
    UnknownTag { line: usize, tag: String },

    #[error("line {line}: {source}")]
    MalformedRecord { line: usize, source: RecordError },

    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl InterchangeError {
    /// 1-based line of the offending row, for parse errors.
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::UnknownTag { line, .. } | Self::MalformedRecord { line, .. } => Some(*line),
            Self::Io { .. } => None,
        }
    }
}

/// Serializes top-level shapes, in order, one row per line.
pub fn save_document(shapes: &[ShapeRef]) -> String {
    let mut rows = Vec::new();
    for shape in shapes {
        shape.save(&mut rows);
    }
    rows.join("\n")
}

/// Rebuilds the top-level shapes described by `text`.
///
/// Blank lines and surrounding whitespace are ignored. Each row's tag selects
/// the prototype from `registry` that decodes it.
pub fn parse_document(
    text: &str,
    registry: &PrototypeRegistry,
) -> Result<Vec<ShapeRef>, InterchangeError> {
    let mut stack: Vec<ShapeRef> = Vec::new();

    for (index, raw) in text.lines().enumerate() {
        let line = index + 1;
        let row = raw.trim();
        if row.is_empty() {
            continue;
        }

        let (tag, data) = row.split_once(char::is_whitespace).unwrap_or((row, ""));
        let prototype = registry
            .get(tag)
            .ok_or_else(|| InterchangeError::UnknownTag {
                line,
                tag: tag.to_string(),
            })?;

        prototype
            .load(&mut stack, data)
            .map_err(|source| InterchangeError::MalformedRecord { line, source })?;
    }

    Ok(stack)
}

/// Replaces the content of `scene` with the document in `text`.
///
/// The scene is only touched once the whole document has parsed; on error it
/// is left exactly as it was. Returns the number of top-level shapes loaded.
pub fn load_document(
    scene: &Scene,
    text: &str,
    registry: &PrototypeRegistry,
) -> Result<usize, InterchangeError> {
    let shapes = parse_document(text, registry).map_err(|err| {
        log::warn!("document load failed: {}", err);
        err
    })?;

    let count = shapes.len();
    scene.replace_all(shapes);
    log::info!("loaded {} shapes", count);
    Ok(count)
}

pub fn read_file(path: &Path) -> Result<String, InterchangeError> {
    std::fs::read_to_string(path).map_err(|source| InterchangeError::Io {
        path: path.to_path_buf(),
        source,
    })
}

pub fn write_file(path: &Path, contents: &str) -> Result<(), InterchangeError> {
    std::fs::write(path, contents).map_err(|source| InterchangeError::Io {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use node::Shape;
    use sketch_core::Point;

    #[test]
    fn test_line_roundtrip() {
        let line = Shape::line(Point::new(0.0, 0.0), Point::new(10.0, 0.0));
        let text = save_document(&[line.clone()]);
        assert_eq!(text, "@LINE 0 0 10 0");

        let shapes = parse_document(&text, &PrototypeRegistry::standard()).unwrap();
        assert_eq!(shapes.len(), 1);
        assert_eq!(shapes[0].tag(), "@LINE");
        assert_eq!(shapes[0].hot_points(), line.hot_points());
    }

    #[test]
    fn test_trailer_restores_child_order() {
        let text = "@LINE 0 0 10 0\n@OVAL 20 20 40 30\n@LINE 5 5 15 5\n@COMP 2\n";
        let shapes = parse_document(text, &PrototypeRegistry::standard()).unwrap();

        assert_eq!(shapes.len(), 2);
        assert_eq!(shapes[0].tag(), "@LINE");
        let children = shapes[1].children();
        assert_eq!(children.len(), 2);
        assert_eq!(children[0].tag(), "@OVAL");
        assert_eq!(children[1].tag(), "@LINE");
        assert_eq!(children[1].hot_point(0).unwrap(), Point::new(5.0, 5.0));
    }

    #[test]
    fn test_blank_lines_and_whitespace_ignored() {
        let text = "\n  @LINE 1 2 3 4  \n\n\t\n@OVAL 0 0 1 1\n";
        let shapes = parse_document(text, &PrototypeRegistry::standard()).unwrap();
        assert_eq!(shapes.len(), 2);
    }

    #[test]
    fn test_empty_document() {
        let shapes = parse_document("", &PrototypeRegistry::standard()).unwrap();
        assert!(shapes.is_empty());
        assert_eq!(save_document(&[]), "");
    }

    #[test]
    fn test_unknown_tag_reports_line() {
        let text = "@LINE 0 0 1 1\n@RECT 0 0 5 5";
        let err = parse_document(text, &PrototypeRegistry::standard()).unwrap_err();

        assert!(matches!(
            &err,
            InterchangeError::UnknownTag { line: 2, tag } if tag == "@RECT"
        ));
        assert_eq!(err.line(), Some(2));
    }

    #[test]
    fn test_malformed_record_reports_line() {
        let text = "@LINE 0 0 1\n";
        let err = parse_document(text, &PrototypeRegistry::standard()).unwrap_err();

        match err {
            InterchangeError::MalformedRecord { line, source } => {
                assert_eq!(line, 1);
                assert_eq!(source.tag(), "@LINE");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_trailer_underflow_is_malformed() {
        let err = parse_document("@LINE 0 0 1 1\n@COMP 2", &PrototypeRegistry::standard())
            .unwrap_err();
        assert!(matches!(
            err,
            InterchangeError::MalformedRecord {
                line: 2,
                source: RecordError::StackUnderflow { .. }
            }
        ));
    }

    #[test]
    fn test_failed_load_leaves_scene_untouched() {
        let scene = Scene::new();
        let existing = Shape::line(Point::new(1.0, 1.0), Point::new(2.0, 2.0));
        scene.add(existing.clone());

        let result = load_document(
            &scene,
            "@OVAL 0 0 10 10\n@BOGUS 1",
            &PrototypeRegistry::standard(),
        );

        assert!(result.is_err());
        assert_eq!(scene.len(), 1);
        assert_eq!(scene.list()[0].id(), existing.id());
    }

    #[test]
    fn test_load_replaces_scene() {
        let scene = Scene::new();
        scene.add(Shape::line(Point::new(1.0, 1.0), Point::new(2.0, 2.0)));

        let count = load_document(
            &scene,
            "@OVAL 0 0 10 10\n@OVAL 5 5 6 6",
            &PrototypeRegistry::standard(),
        )
        .unwrap();

        assert_eq!(count, 2);
        assert!(scene.list().iter().all(|s| s.tag() == "@OVAL"));
    }

    #[test]
    fn test_read_missing_file() {
        let err = read_file(Path::new("/definitely/not/here.sketch")).unwrap_err();
        assert!(matches!(err, InterchangeError::Io { .. }));
        assert_eq!(err.line(), None);
    }
}
