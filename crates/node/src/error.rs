use thiserror::Error;

/// Errors raised by shape accessors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ShapeError {
    /// A hot-point index outside `0..count`.
    ///
    /// Never produced by normal interaction; it signals a bug in whatever
    /// mapped input to an index.
    #[error("hot point index {index} out of range (shape has {count})")]
    OutOfRange { index: usize, count: usize },
}

/// Errors raised while decoding a single saved row.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RecordError {
    #[error("malformed {tag} record {data:?}: {reason}")]
    MalformedRecord {
        tag: String,
        data: String,
        reason: String,
    },

    /// A group trailer asked for more children than have been decoded so far.
    #[error("{tag} record wants {wanted} children but only {available} are available")]
    StackUnderflow {
        tag: String,
        wanted: usize,
        available: usize,
    },
}

impl RecordError {
    pub(crate) fn malformed(tag: &str, data: &str, reason: impl Into<String>) -> Self {
        Self::MalformedRecord {
            tag: tag.to_string(),
            data: data.to_string(),
            reason: reason.into(),
        }
    }

    /// The tag of the row that failed to decode.
    pub fn tag(&self) -> &str {
        match self {
            Self::MalformedRecord { tag, .. } | Self::StackUnderflow { tag, .. } => tag,
        }
    }
}
