//!
//! Errors returned by the collections
//!
//! Every fallible operation leaves the container untouched when it returns
//! an `Err`.
//!
use crate::vector::index::Offset;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CollectionError {
    /// The position did not resolve into the valid range of the container.
    #[error("index {offset} out of bounds for length {len}")]
    IndexOutOfBounds { offset: Offset, len: usize },
    /// `start..end` is not a non-empty range inside `0..=len`.
    #[error("range {start}..{end} is invalid for length {len}")]
    InvalidRange { start: Offset, end: Offset, len: usize },
    /// Removal from a container that holds nothing.
    #[error("container is empty")]
    EmptyContainer,
    #[error("invalid growth policy: {0}")]
    InvalidPolicy(String),
    #[error("cannot parse growth policy: {0}")]
    Config(#[from] serde_json::Error),
    #[error("cannot read growth policy: {0}")]
    Io(#[from] std::io::Error),
}

impl CollectionError {
    pub fn is_out_of_bounds(&self) -> bool {
        matches!(self, CollectionError::IndexOutOfBounds { .. })
    }
    pub fn is_empty_container(&self) -> bool {
        matches!(self, CollectionError::EmptyContainer)
    }
}

pub type Result<T> = std::result::Result<T, CollectionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages() {
        let e = CollectionError::IndexOutOfBounds {
            offset: Offset::Back(1),
            len: 0,
        };
        assert_eq!(e.to_string(), "index -1 out of bounds for length 0");
        assert!(e.is_out_of_bounds());
        assert!(!e.is_empty_container());

        let e = CollectionError::InvalidRange {
            start: Offset::Front(2),
            end: Offset::Front(1),
            len: 3,
        };
        assert_eq!(e.to_string(), "range 2..1 is invalid for length 3");

        assert_eq!(
            CollectionError::EmptyContainer.to_string(),
            "container is empty"
        );

        let e: CollectionError = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert!(matches!(e, CollectionError::Io(_)));
        assert_eq!(e.to_string(), "cannot read growth policy: gone");
    }
}
