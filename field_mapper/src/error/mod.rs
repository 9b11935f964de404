//! Error types produced by field mapping operations.

mod conversions;
mod types;

pub use types::{CopyError, FieldMapError, FieldMapResult, InvalidArgumentKind};
