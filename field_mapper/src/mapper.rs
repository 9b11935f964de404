//! The [`FieldMapper`] configuration type.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::lookup;

/// Field-name configuration shared by the flatten and copy operations.
///
/// A mapper is plain data: build it once and reuse it for as many calls as
/// needed. Every operation borrows it immutably, so the lists cannot change
/// while a call is running.
///
/// # Examples
///
/// ```
/// use field_mapper::FieldMapper;
///
/// let mapper = FieldMapper::new(["secret"], Vec::<String>::new())
///     .with_alias("id", "user_id");
/// assert!(mapper.is_ignored("secret"));
/// assert_eq!(mapper.alias_fields.get("id").map(String::as_str), Some("user_id"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldMapper {
    /// Names left out of flattened output and map copies, and banned from
    /// struct copies.
    #[serde(deserialize_with = "crate::config::one_or_many")]
    pub ignore_fields: Vec<String>,
    /// When non-empty, the only names kept by [`FieldMapper::copy_map`].
    #[serde(deserialize_with = "crate::config::one_or_many")]
    pub wanted_fields: Vec<String>,
    /// Source name to destination name overrides for
    /// [`FieldMapper::copy_struct`].
    pub alias_fields: BTreeMap<String, String>,
}

impl FieldMapper {
    /// Create a mapper with the given ignore and wanted lists and no aliases.
    #[must_use]
    pub fn new<I, W>(ignore: I, wanted: W) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
        W: IntoIterator,
        W::Item: Into<String>,
    {
        Self {
            ignore_fields: ignore.into_iter().map(Into::into).collect(),
            wanted_fields: wanted.into_iter().map(Into::into).collect(),
            alias_fields: BTreeMap::new(),
        }
    }

    /// Add an alias so `copy_struct` writes source field `src` into
    /// destination field `dst`.
    #[must_use]
    pub fn with_alias(mut self, src: impl Into<String>, dst: impl Into<String>) -> Self {
        self.alias_fields.insert(src.into(), dst.into());
        self
    }

    /// Whether `field` is on the ignore list.
    #[must_use]
    pub fn is_ignored(&self, field: &str) -> bool {
        lookup::contains(&self.ignore_fields, field)
    }

    /// Whether `field` passes the wanted list. An empty list wants everything.
    #[must_use]
    pub fn is_wanted(&self, field: &str) -> bool {
        self.wanted_fields.is_empty() || lookup::contains(&self.wanted_fields, field)
    }
}
