use thiserror::Error;

/// Broad class of a [`RingError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// An index or cursor position fell outside the occupied range.
    OutOfRange,
    /// The operation needs an element but none is there.
    State,
    /// Two cursors over different rings were combined.
    Precondition,
}

#[derive(Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum RingError {
    #[error("Index is out of range")]
    OutOfRange,

    #[error("Buffer is empty")]
    Empty,

    #[error("Cannot dereference the iterator")]
    InvalidCursor,

    #[error("Iterator cannot be incremented past the end of the range")]
    PastEnd,

    #[error("Iterator cannot be decremented before the beginning of the range")]
    BeforeBegin,

    #[error("Iterator cannot be moved past the bounds of the range")]
    OffsetOutOfBounds,

    #[error("Iterators refer to different buffers")]
    Incompatible,
}

impl RingError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            RingError::OutOfRange
            | RingError::PastEnd
            | RingError::BeforeBegin
            | RingError::OffsetOutOfBounds => ErrorKind::OutOfRange,
            RingError::Empty | RingError::InvalidCursor => ErrorKind::State,
            RingError::Incompatible => ErrorKind::Precondition,
        }
    }
}

pub type Result<T, E = RingError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_match_failure_conditions() {
        assert_eq!(RingError::OutOfRange.to_string(), "Index is out of range");
        assert_eq!(RingError::Empty.to_string(), "Buffer is empty");
        assert_eq!(
            RingError::InvalidCursor.to_string(),
            "Cannot dereference the iterator"
        );
    }

    #[test]
    fn kinds_follow_taxonomy() {
        assert_eq!(RingError::OutOfRange.kind(), ErrorKind::OutOfRange);
        assert_eq!(RingError::PastEnd.kind(), ErrorKind::OutOfRange);
        assert_eq!(RingError::BeforeBegin.kind(), ErrorKind::OutOfRange);
        assert_eq!(RingError::OffsetOutOfBounds.kind(), ErrorKind::OutOfRange);
        assert_eq!(RingError::Empty.kind(), ErrorKind::State);
        assert_eq!(RingError::InvalidCursor.kind(), ErrorKind::State);
        assert_eq!(RingError::Incompatible.kind(), ErrorKind::Precondition);
    }
}
