//! Error types for fallible buffer operations.
//!
//! The primary buffer API reports failure with plain signals (`bool`,
//! `Option`, an empty view). The `try_*` operations report the reason as an
//! [`Error`] instead.
//!
//! # Error Categories
//!
//! - **InvalidIndex**: an update addressed a byte outside the buffer
//! - **EmptyOrReleased**: the handle is released or holds no bytes
//!
//! Every error leaves the buffer and its lineage unchanged, so all of them
//! are recoverable by the caller.

/// Result alias for buffer operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Failure of a buffer operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum Error {
    /// Update index outside `0..len`.
    #[error("index {index} out of range for buffer of length {len}")]
    InvalidIndex {
        /// Requested index.
        index: usize,
        /// Buffer length at the time of the call.
        len: usize,
    },
    /// The handle is active but holds no bytes.
    #[error("buffer is empty")]
    Empty,
    /// The handle was released or never initialized.
    #[error("buffer handle is released")]
    Released,
}

/// The category of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Out-of-range index on a non-empty buffer.
    InvalidIndex,
    /// Released handle or empty buffer.
    EmptyOrReleased,
}

impl Error {
    /// Returns the category of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidIndex { .. } => ErrorKind::InvalidIndex,
            Self::Empty | Self::Released => ErrorKind::EmptyOrReleased,
        }
    }

    /// Returns true if the caller can carry on after this error.
    ///
    /// A failed operation never changes the handle or its lineage, so every
    /// error is recoverable.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        match self {
            Self::InvalidIndex { .. } | Self::Empty | Self::Released => true,
        }
    }

    /// Returns true if the handle itself is no longer usable.
    #[must_use]
    pub const fn is_released(&self) -> bool {
        matches!(self, Self::Released)
    }
}
