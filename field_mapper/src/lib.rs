//! Flatten, copy and filter serde records by field name.
//!
//! [`FieldMapper`] holds an ignore list, a wanted list and an alias map, and
//! applies them to three conversions:
//!
//! - [`FieldMapper::flatten`] turns any struct into a single-level map,
//!   inlining nested structs breadth-first;
//! - [`FieldMapper::copy_struct`] copies same-named (or aliased) fields from
//!   one struct into another through a [`StructuralCopier`];
//! - [`FieldMapper::copy_map`] copies map entries through the wanted and
//!   ignore lists.
//!
//! Records are any type implementing [`serde::Serialize`]; a field's name is
//! its serialised name, so `#[serde(rename = "...")]` controls the key it is
//! flattened or matched under.
//!
//! ```rust
//! use field_mapper::FieldMapper;
//! use serde::Serialize;
//! use serde_json::json;
//!
//! #[derive(Serialize)]
//! struct Record {
//!     id: u32,
//!     secret: &'static str,
//!     name: &'static str,
//! }
//!
//! let mapper = FieldMapper::new(["secret"], Vec::<String>::new());
//! let flat = mapper
//!     .flatten(&Record { id: 1, secret: "x", name: "a" })
//!     .expect("Record is a struct");
//! assert_eq!(serde_json::Value::Object(flat), json!({"id": 1, "name": "a"}));
//! ```

mod config;
mod copy;
mod error;
mod flatten;
mod lookup;
mod map_copy;
mod mapper;
mod result_ext;
mod shape;

pub use config::FieldListEnv;
pub use copy::{CopyOptions, FieldNameCopier, StructuralCopier};
pub use error::{CopyError, FieldMapError, FieldMapResult, InvalidArgumentKind};
pub use lookup::index_of;
pub use mapper::FieldMapper;
pub use result_ext::DelegateResultExt;

/// Flat map from field name to value, in insertion order.
pub type FieldMap = serde_json::Map<String, serde_json::Value>;
