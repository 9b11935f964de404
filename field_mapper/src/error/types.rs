//! Primary error enum for mapping flows.

use std::fmt;

use figment::Error as FigmentError;
use thiserror::Error;

/// Boxed error reported by a [`crate::StructuralCopier`].
pub type CopyError = Box<dyn std::error::Error + Send + Sync>;

/// Result alias used throughout the crate.
pub type FieldMapResult<T> = Result<T, FieldMapError>;

/// Errors that can occur while copying records or maps.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FieldMapError {
    /// An argument had the wrong shape for the requested operation.
    #[error("{0}")]
    InvalidArgument(InvalidArgumentKind),

    /// Failure reported by the structural copier, surfaced unchanged.
    #[error(transparent)]
    Delegate(CopyError),

    /// Failure while loading mapper configuration.
    #[error("Failed to load mapper configuration: {0}")]
    Config(#[from] Box<FigmentError>),
}

/// Reasons an argument was rejected before any work was done.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum InvalidArgumentKind {
    /// `copy_struct` was given a value that does not serialise as a struct.
    MustBeRecord,
    /// `copy_map` was given `null` for its source or destination.
    NilInput,
    /// `copy_map` was given a non-object, non-null value.
    MustBeMap,
}

impl fmt::Display for InvalidArgumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            Self::MustBeRecord => "src or dst must be a struct",
            Self::NilInput => "src or dst must not be nil",
            Self::MustBeMap => "src or dst must be a map",
        };
        f.write_str(message)
    }
}

impl FieldMapError {
    /// Returns the argument kind when this is an
    /// [`FieldMapError::InvalidArgument`].
    ///
    /// # Examples
    ///
    /// ```
    /// use field_mapper::{FieldMapError, InvalidArgumentKind};
    ///
    /// let err = FieldMapError::InvalidArgument(InvalidArgumentKind::NilInput);
    /// assert_eq!(err.invalid_argument(), Some(InvalidArgumentKind::NilInput));
    /// ```
    #[must_use]
    pub const fn invalid_argument(&self) -> Option<InvalidArgumentKind> {
        match self {
            Self::InvalidArgument(kind) => Some(*kind),
            Self::Delegate(_) | Self::Config(_) => None,
        }
    }

    /// Construct a delegate error from any copier failure.
    #[must_use]
    pub fn delegate(source: impl Into<CopyError>) -> Self {
        Self::Delegate(source.into())
    }
}
