//! Trait-based conversions between external error types and `FieldMapError`.

use figment::Error as FigmentError;

use super::{FieldMapError, InvalidArgumentKind};

/// Serde failures only arise while capturing or rebuilding records, which is
/// the copier's territory.
impl From<serde_json::Error> for FieldMapError {
    fn from(e: serde_json::Error) -> Self {
        Self::Delegate(Box::new(e))
    }
}

impl From<FigmentError> for FieldMapError {
    fn from(e: FigmentError) -> Self {
        Self::Config(Box::new(e))
    }
}

impl From<InvalidArgumentKind> for FieldMapError {
    fn from(kind: InvalidArgumentKind) -> Self {
        Self::InvalidArgument(kind)
    }
}
