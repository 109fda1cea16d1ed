//! Error types shared by every collection in this crate.
//!
//! Absence of a value is never an error: removing from an empty container or
//! peeking at one yields `None`. Errors are reserved for caller misuse, and a
//! failed operation always leaves the container untouched.

use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionError {
    /// An absent value (`None`) was supplied where an element was required.
    #[error("Element cannot be absent")]
    InvalidArgument,
    /// The index lies outside the bound accepted by the operation.
    #[error("Index {index} out of bounds for length {len}")]
    IndexOutOfRange { index: usize, len: usize },
    /// The initial capacity is zero or not a power of two.
    #[error("Initial capacity {0} must be a non-zero power of two")]
    InvalidCapacity(usize),
}

pub type CollectionResult<T> = Result<T, CollectionError>;

/// Unwraps an element argument, rejecting the absent marker.
#[inline]
pub(crate) fn require<T>(element: impl Into<Option<T>>) -> CollectionResult<T> {
    element.into().ok_or(CollectionError::InvalidArgument)
}

/// Accepts `index` when it addresses a live element, i.e. `index < len`.
#[inline]
pub(crate) fn check_exclusive(index: usize, len: usize) -> CollectionResult<()> {
    if index < len {
        Ok(())
    } else {
        Err(CollectionError::IndexOutOfRange { index, len })
    }
}

/// Accepts `index` when it is a valid insertion point, i.e. `index <= len`.
#[inline]
pub(crate) fn check_inclusive(index: usize, len: usize) -> CollectionResult<()> {
    if index <= len {
        Ok(())
    } else {
        Err(CollectionError::IndexOutOfRange { index, len })
    }
}

/// Validates a half-open `[from, to)` range against `len`.
pub(crate) fn check_range(from: usize, to: usize, len: usize) -> CollectionResult<()> {
    if to > len {
        return Err(CollectionError::IndexOutOfRange { index: to, len });
    }
    if from > to {
        return Err(CollectionError::IndexOutOfRange { index: from, len });
    }
    Ok(())
}
