//! The default structural copier: match fields by name.

use serde_json::Value;

use crate::{CopyError, FieldMap, lookup};

use super::{CopyOptions, StructuralCopier};

/// Copies fields whose names match, honouring bans and aliases.
///
/// Bans and aliases apply to the top-level fields of the source. Only names
/// already present in the destination are written, so source fields the
/// destination does not declare are dropped. Where both sides hold a nested
/// struct under the matched name, the nested fields are copied by name
/// under the same rule, and destination fields the source lacks keep their
/// values. Any other value replaces the destination's wholesale.
#[derive(Clone, Copy, Debug, Default)]
pub struct FieldNameCopier;

impl StructuralCopier for FieldNameCopier {
    fn copy(
        &self,
        src: &FieldMap,
        dst: &mut FieldMap,
        options: &CopyOptions<'_>,
    ) -> Result<(), CopyError> {
        let mut copied = 0_usize;
        for (name, value) in src {
            if lookup::contains(options.banned_fields, name) {
                tracing::trace!(field = %name, "banned field skipped");
                continue;
            }
            let target = options
                .alias_fields
                .get(name)
                .map_or(name.as_str(), String::as_str);
            if assign(dst, target, value) {
                copied += 1;
            }
        }
        tracing::debug!(copied, "fields copied by name");
        Ok(())
    }
}

fn assign(dst: &mut FieldMap, name: &str, value: &Value) -> bool {
    let Some(slot) = dst.get_mut(name) else {
        tracing::trace!(field = name, "no matching destination field");
        return false;
    };
    match (slot, value) {
        (Value::Object(existing), Value::Object(incoming)) => {
            for (key, nested) in incoming {
                assign(existing, key, nested);
            }
        }
        (other, _) => other.clone_from(value),
    }
    true
}
