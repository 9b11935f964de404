//! Filtered copying between flat maps.

use serde_json::Value;

use crate::{FieldMap, FieldMapResult, FieldMapper, InvalidArgumentKind};

impl FieldMapper {
    /// Copy the entries of the `src` object into the `dst` object.
    ///
    /// Both values must be JSON objects. Entries are filtered as described
    /// for [`FieldMapper::copy_entries`].
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgumentKind::NilInput`] when either side is `null`
    /// and [`InvalidArgumentKind::MustBeMap`] when either side is some other
    /// non-object value. `dst` is untouched in both cases.
    ///
    /// # Examples
    ///
    /// ```
    /// use field_mapper::FieldMapper;
    /// use serde_json::json;
    ///
    /// let mapper = FieldMapper::new(Vec::<String>::new(), ["id"]);
    /// let mut dst = json!({});
    /// mapper.copy_map(&json!({"id": 1, "name": "a"}), &mut dst)?;
    /// assert_eq!(dst, json!({"id": 1}));
    /// # Ok::<_, field_mapper::FieldMapError>(())
    /// ```
    pub fn copy_map(&self, src: &Value, dst: &mut Value) -> FieldMapResult<()> {
        if src.is_null() || dst.is_null() {
            return Err(InvalidArgumentKind::NilInput.into());
        }
        let (Value::Object(src_map), Value::Object(dst_map)) = (src, dst) else {
            return Err(InvalidArgumentKind::MustBeMap.into());
        };
        self.copy_entries(src_map, dst_map);
        Ok(())
    }

    /// Copy the entries of `src` into `dst`, overwriting existing keys.
    ///
    /// An entry is skipped when the wanted list is non-empty and lacks its
    /// key, or when its key is on the ignore list. `src` is left as is.
    pub fn copy_entries(&self, src: &FieldMap, dst: &mut FieldMap) {
        let mut copied = 0_usize;
        for (key, value) in src {
            if !self.is_wanted(key) {
                tracing::trace!(field = %key, "unwanted field skipped");
                continue;
            }
            if self.is_ignored(key) {
                tracing::trace!(field = %key, "ignored field skipped");
                continue;
            }
            dst.insert(key.clone(), value.clone());
            copied += 1;
        }
        tracing::debug!(copied, skipped = src.len() - copied, "map copy complete");
    }
}
