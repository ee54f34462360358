//! Row fields shared by the two-point shape kinds.

use crate::RecordError;
use sketch_core::Point;

/// Formats `tag x1 y1 x2 y2`.
///
/// `f32`'s `Display` prints the shortest text that parses back to the same
/// value, so saved coordinates reload exactly.
pub(crate) fn format_two_points(tag: &str, first: Point, second: Point) -> String {
    format!(
        "{} {} {} {} {}",
        tag,
        first.x(),
        first.y(),
        second.x(),
        second.y()
    )
}

/// Parses `x1 y1 x2 y2` into two points.
pub(crate) fn parse_two_points(tag: &str, data: &str) -> Result<(Point, Point), RecordError> {
    let fields: Vec<&str> = data.split_whitespace().collect();
    if fields.len() != 4 {
        return Err(RecordError::malformed(
            tag,
            data,
            format!("expected 4 coordinates, found {}", fields.len()),
        ));
    }

    let mut values = [0.0f32; 4];
    for (value, field) in values.iter_mut().zip(&fields) {
        *value = field
            .parse()
            .map_err(|_| RecordError::malformed(tag, data, format!("{field:?} is not a number")))?;
    }

    Ok((
        Point::new(values[0], values[1]),
        Point::new(values[2], values[3]),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tolerates_extra_whitespace() {
        let (a, b) = parse_two_points("@LINE", "  1 2\t3.5   -4 ").unwrap();
        assert_eq!(a, Point::new(1.0, 2.0));
        assert_eq!(b, Point::new(3.5, -4.0));
    }

    #[test]
    fn test_parse_rejects_wrong_field_count() {
        let err = parse_two_points("@LINE", "1 2 3").unwrap_err();
        assert_eq!(err.tag(), "@LINE");
        assert!(matches!(err, RecordError::MalformedRecord { .. }));
    }

    #[test]
    fn test_parse_rejects_non_numeric() {
        assert!(parse_two_points("@OVAL", "1 2 three 4").is_err());
    }

    #[test]
    fn test_format_is_exact() {
        let row = format_two_points("@LINE", Point::new(0.1, 10.0), Point::new(-2.5, 1e-3));
        assert_eq!(row, "@LINE 0.1 10 -2.5 0.001");
    }
}
