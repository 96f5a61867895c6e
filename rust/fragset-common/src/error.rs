use thiserror::Error;

#[derive(Debug, Error)]
#[error(transparent)]
pub struct Error(Box<ErrorKind>);

impl Error {
    pub fn kind(&self) -> &ErrorKind {
        self.0.as_ref()
    }

    pub fn into_kind(self) -> ErrorKind {
        *self.0
    }

    pub fn invalid_arg(name: impl Into<String>, message: impl Into<String>) -> Error {
        Error(
            ErrorKind::InvalidArgument {
                name: name.into(),
                message: message.into(),
            }
            .into(),
        )
    }

    pub fn invalid_range_size(range: impl Into<String>) -> Error {
        Error(ErrorKind::InvalidRangeSize { range: range.into() }.into())
    }

    pub fn range_overflow(range: impl Into<String>) -> Error {
        Error(ErrorKind::RangeOverflow { range: range.into() }.into())
    }

    pub fn overlapping_insert(fragment: impl Into<String>, conflict: impl Into<String>) -> Error {
        Error(
            ErrorKind::OverlappingInsert {
                fragment: fragment.into(),
                conflict: conflict.into(),
            }
            .into(),
        )
    }

    pub fn not_a_subrange(fragment: impl Into<String>) -> Error {
        Error(
            ErrorKind::NotASubrange {
                fragment: fragment.into(),
            }
            .into(),
        )
    }

    /// Returns `true` if this error was raised for a range with a non-positive size.
    pub fn is_invalid_range_size(&self) -> bool {
        matches!(self.kind(), ErrorKind::InvalidRangeSize { .. })
    }

    /// Returns `true` if this error was raised for a range whose size does not fit the size type.
    pub fn is_range_overflow(&self) -> bool {
        matches!(self.kind(), ErrorKind::RangeOverflow { .. })
    }

    /// Returns `true` if this error was raised for an insert that overlaps a tracked range.
    pub fn is_overlapping_insert(&self) -> bool {
        matches!(self.kind(), ErrorKind::OverlappingInsert { .. })
    }

    /// Returns `true` if this error was raised for a removal outside any single tracked range.
    pub fn is_not_a_subrange(&self) -> bool {
        matches!(self.kind(), ErrorKind::NotASubrange { .. })
    }
}

#[derive(Debug, Error)]
pub enum ErrorKind {
    #[error("invalid argument {name}: {message}")]
    InvalidArgument { name: String, message: String },

    #[error("range size must be positive: {range}")]
    InvalidRangeSize { range: String },

    #[error("size of range {range} is not representable")]
    RangeOverflow { range: String },

    #[error("fragment {fragment} overlaps tracked range {conflict}")]
    OverlappingInsert { fragment: String, conflict: String },

    #[error("fragment {fragment} is not contained in a single tracked range")]
    NotASubrange { fragment: String },
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error(kind.into())
    }
}

#[cfg(test)]
mod tests {
    use super::{Error, ErrorKind};

    #[test]
    fn test_error_kinds() {
        let e = Error::invalid_range_size("[10, 10)");
        assert!(e.is_invalid_range_size());
        assert!(!e.is_overlapping_insert());
        assert_eq!(e.to_string(), "range size must be positive: [10, 10)");

        let e = Error::overlapping_insert("[5, 15)", "[0, 10)");
        assert!(e.is_overlapping_insert());
        assert_eq!(
            e.to_string(),
            "fragment [5, 15) overlaps tracked range [0, 10)"
        );

        let e = Error::range_overflow("[-100, 100)");
        assert!(e.is_range_overflow());
        assert_eq!(e.to_string(), "size of range [-100, 100) is not representable");

        let e = Error::not_a_subrange("[5, 15)");
        assert!(e.is_not_a_subrange());
        match e.into_kind() {
            ErrorKind::NotASubrange { fragment } => assert_eq!(fragment, "[5, 15)"),
            kind => panic!("unexpected kind {kind:?}"),
        }
    }

    #[test]
    fn test_from_kind() {
        let e: Error = ErrorKind::InvalidArgument {
            name: "fragments".to_string(),
            message: "unsorted".to_string(),
        }
        .into();
        assert_eq!(e.to_string(), "invalid argument fragments: unsorted");
    }
}
