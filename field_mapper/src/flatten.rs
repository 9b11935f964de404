//! Breadth-first flattening of records into a single-level map.

use std::collections::VecDeque;

use serde::Serialize;

use crate::{FieldMap, FieldMapper, shape::Shape};

impl FieldMapper {
    /// Flatten `record` into a map keyed by serialised field name.
    ///
    /// Nested structs (plain, boxed, referenced, wrapped in `Some`, or inside
    /// a newtype) are inlined as though their fields were declared on the
    /// outer struct. Fields are visited breadth-first: siblings in
    /// declaration order, shallower fields before deeper ones. When two
    /// fields share a name the one visited last wins. Names on the ignore
    /// list are skipped.
    ///
    /// Returns `None` when `record` is not a struct, or when one of its
    /// leaves cannot be represented as JSON (for example a map with
    /// non-string keys). Callers cannot tell an empty struct from a
    /// non-struct by the output alone: the former yields `Some` of an empty
    /// map.
    ///
    /// # Examples
    ///
    /// ```
    /// use field_mapper::FieldMapper;
    /// use serde::Serialize;
    /// use serde_json::json;
    ///
    /// #[derive(Serialize)]
    /// struct Audit { created_by: String }
    ///
    /// #[derive(Serialize)]
    /// struct User { id: u32, secret: String, audit: Audit }
    ///
    /// let user = User { id: 1, secret: "x".into(), audit: Audit { created_by: "root".into() } };
    /// let flat = FieldMapper::new(["secret"], Vec::<String>::new())
    ///     .flatten(&user)
    ///     .expect("User is a struct");
    /// assert_eq!(serde_json::Value::Object(flat), json!({"id": 1, "created_by": "root"}));
    ///
    /// assert!(FieldMapper::default().flatten(&42).is_none());
    /// ```
    #[must_use]
    pub fn flatten<T>(&self, record: &T) -> Option<FieldMap>
    where
        T: Serialize + ?Sized,
    {
        let root = match Shape::capture_record(record) {
            Ok(Some(fields)) => fields,
            Ok(None) => {
                tracing::debug!(
                    ty = std::any::type_name::<T>(),
                    "flatten input is not a struct"
                );
                return None;
            }
            Err(err) => {
                tracing::debug!(
                    ty = std::any::type_name::<T>(),
                    error = %err,
                    "flatten input could not be captured"
                );
                return None;
            }
        };

        let mut out = FieldMap::new();
        let mut queue = VecDeque::from([root]);
        while let Some(fields) = queue.pop_front() {
            for (name, shape) in fields {
                match shape {
                    Shape::Record(nested) => queue.push_back(nested),
                    Shape::Leaf(_) if self.is_ignored(name) => {
                        tracing::trace!(field = name, "ignored field skipped");
                    }
                    Shape::Leaf(value) => {
                        out.insert(name.to_owned(), value);
                    }
                }
            }
        }
        Some(out)
    }
}
