//! Struct-to-struct copying through a pluggable structural copier.
//!
//! [`FieldMapper::copy_struct`] only decides *what* may be copied: it checks
//! that both sides are structs, renders them as JSON objects and hands them
//! to a [`StructuralCopier`] together with the mapper's ban list and alias
//! map. The copier decides *how* fields are matched. The updated
//! destination object is then deserialised back into the destination type.

mod field_name;

use std::collections::BTreeMap;

use serde::{Serialize, de::DeserializeOwned};

use crate::{
    CopyError, DelegateResultExt, FieldMap, FieldMapResult, FieldMapper, InvalidArgumentKind,
    shape::{Shape, record_to_map},
};

pub use field_name::FieldNameCopier;

/// Options handed to a [`StructuralCopier`].
#[derive(Clone, Copy, Debug)]
pub struct CopyOptions<'a> {
    /// Source field names that must not be copied.
    pub banned_fields: &'a [String],
    /// Source name to destination name overrides.
    pub alias_fields: &'a BTreeMap<String, String>,
}

/// Copies fields from one record object into another.
///
/// Implementations receive both records as JSON objects whose nested
/// structs are nested objects. Errors are surfaced to the caller of
/// [`FieldMapper::copy_struct_with`] unchanged.
pub trait StructuralCopier {
    /// Copy matching fields of `src` into `dst`.
    ///
    /// # Errors
    ///
    /// Returns an error when the records cannot be reconciled.
    fn copy(
        &self,
        src: &FieldMap,
        dst: &mut FieldMap,
        options: &CopyOptions<'_>,
    ) -> Result<(), CopyError>;
}

impl FieldMapper {
    /// Copy matching fields of `src` into `dst` using [`FieldNameCopier`].
    ///
    /// Fields named on the ignore list are not copied, and aliases redirect a
    /// source field to a differently named destination field. Only fields
    /// the destination serialises are written to. `dst` is only replaced
    /// once the whole copy has succeeded, and is left alone when no field
    /// changed.
    ///
    /// When a field does change, `dst` is rebuilt from its serialised form.
    /// Fields serde does not serialise (`#[serde(skip)]`, or
    /// `skip_serializing_if` that fires) therefore take their deserialised
    /// defaults, exactly as a serde round trip of `D` would give them.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgumentKind::MustBeRecord`] when either side is not
    /// a struct, or [`crate::FieldMapError::Delegate`] carrying the
    /// underlying failure when the copied values do not fit the destination
    /// type.
    ///
    /// # Examples
    ///
    /// ```
    /// use field_mapper::FieldMapper;
    /// use serde::{Deserialize, Serialize};
    ///
    /// #[derive(Serialize)]
    /// struct Form { id: u32, name: String, password: String }
    ///
    /// #[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
    /// struct Account { user_id: u32, name: String, password: String }
    ///
    /// let form = Form { id: 7, name: "ada".into(), password: "hunter2".into() };
    /// let mut account = Account::default();
    /// FieldMapper::new(["password"], Vec::<String>::new())
    ///     .with_alias("id", "user_id")
    ///     .copy_struct(&form, &mut account)?;
    /// assert_eq!(account, Account { user_id: 7, name: "ada".into(), password: String::new() });
    /// # Ok::<_, field_mapper::FieldMapError>(())
    /// ```
    pub fn copy_struct<S, D>(&self, src: &S, dst: &mut D) -> FieldMapResult<()>
    where
        S: Serialize + ?Sized,
        D: Serialize + DeserializeOwned,
    {
        self.copy_struct_with(&FieldNameCopier, src, dst)
    }

    /// Copy matching fields of `src` into `dst` using `copier`.
    ///
    /// # Errors
    ///
    /// As [`FieldMapper::copy_struct`], with any error raised by `copier`
    /// propagated unchanged.
    pub fn copy_struct_with<C, S, D>(&self, copier: &C, src: &S, dst: &mut D) -> FieldMapResult<()>
    where
        C: StructuralCopier + ?Sized,
        S: Serialize + ?Sized,
        D: Serialize + DeserializeOwned,
    {
        let src_fields = Shape::capture_record(src)?;
        let dst_fields = Shape::capture_record(&*dst)?;
        let (Some(src_fields), Some(dst_fields)) = (src_fields, dst_fields) else {
            return Err(InvalidArgumentKind::MustBeRecord.into());
        };

        let src_map = record_to_map(src_fields);
        let mut dst_map = record_to_map(dst_fields);
        let before = dst_map.clone();
        let options = CopyOptions {
            banned_fields: &self.ignore_fields,
            alias_fields: &self.alias_fields,
        };
        copier
            .copy(&src_map, &mut dst_map, &options)
            .into_delegate()?;
        if dst_map == before {
            tracing::debug!(
                src = std::any::type_name::<S>(),
                dst = std::any::type_name::<D>(),
                "no destination field changed"
            );
            return Ok(());
        }

        *dst = serde_json::from_value(serde_json::Value::Object(dst_map)).into_delegate()?;
        tracing::debug!(
            src = std::any::type_name::<S>(),
            dst = std::any::type_name::<D>(),
            "struct copy complete"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests;
