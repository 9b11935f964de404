//! Record shapes captured from `Serialize` values.
//!
//! serde's data model already separates structs from every other kind of
//! value, so a purpose-built [`serde::Serializer`] is enough to tell which
//! parts of a value are records (whose fields may be flattened or copied by
//! name) and which are leaves. Leaves are rendered to [`serde_json::Value`]
//! as they are encountered.
//!
//! Pointer-like wrappers (`&T`, `Box<T>`, `Option<T>` holding `Some`) and
//! newtype structs serialise transparently, so they are dereferenced for
//! free.

mod serializer;

use serde::Serialize;
use serde_json::Value;

use crate::FieldMap;

use serializer::ShapeSerializer;

/// A named field of a captured record.
pub(crate) type Field = (&'static str, Shape);

/// Either a struct with its fields in declaration order, or a leaf value.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Shape {
    Record(Vec<Field>),
    Leaf(Value),
}

impl Shape {
    /// Capture the shape of `value`.
    pub(crate) fn capture<T>(value: &T) -> Result<Self, serde_json::Error>
    where
        T: Serialize + ?Sized,
    {
        value.serialize(ShapeSerializer)
    }

    /// Capture `value` and return its fields when it is a record.
    ///
    /// Leaves yield `Ok(None)`.
    pub(crate) fn capture_record<T>(value: &T) -> Result<Option<Vec<Field>>, serde_json::Error>
    where
        T: Serialize + ?Sized,
    {
        Ok(match Self::capture(value)? {
            Self::Record(fields) => Some(fields),
            Self::Leaf(_) => None,
        })
    }

    /// Render the shape as plain JSON; records become objects.
    pub(crate) fn into_value(self) -> Value {
        match self {
            Self::Record(fields) => Value::Object(record_to_map(fields)),
            Self::Leaf(value) => value,
        }
    }
}

/// Render record fields as a nested JSON object.
///
/// Duplicate names keep the last value, like a struct serialised by
/// `serde_json`.
pub(crate) fn record_to_map(fields: Vec<Field>) -> FieldMap {
    fields
        .into_iter()
        .map(|(name, shape)| (name.to_owned(), shape.into_value()))
        .collect()
}
