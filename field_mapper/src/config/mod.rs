//! Loading [`FieldMapper`] configuration through Figment.
//!
//! Layers are merged lowest to highest precedence: built-in defaults, an
//! optional TOML file, then prefixed environment variables. List fields
//! accept either a single name or a list, so `ignore_fields = "secret"` and
//! `APP_IGNORE_FIELDS=secret` both work.

mod env;

use std::path::Path;

use figment::{
    Figment,
    providers::{Format, Serialized, Toml},
};
use serde::{Deserialize, Deserializer};

use crate::{FieldMapResult, FieldMapper};

pub use env::FieldListEnv;

impl FieldMapper {
    /// Extract a mapper from an already assembled Figment.
    ///
    /// # Errors
    ///
    /// Returns [`crate::FieldMapError::Config`] when the merged configuration
    /// does not describe a mapper.
    pub fn from_figment(figment: &Figment) -> FieldMapResult<Self> {
        let mapper: Self = figment.extract()?;
        tracing::debug!(
            ignore = mapper.ignore_fields.len(),
            wanted = mapper.wanted_fields.len(),
            aliases = mapper.alias_fields.len(),
            "mapper configuration loaded"
        );
        Ok(mapper)
    }

    /// Load a mapper from defaults, an optional TOML file and environment
    /// variables starting with `prefix`.
    ///
    /// See [`FieldListEnv`] for the variables read; for example
    /// `APP_ALIAS_FIELDS__ID=user_id` adds an alias from `id` to `user_id`.
    /// A `file` that does not exist contributes nothing.
    ///
    /// # Errors
    ///
    /// Returns [`crate::FieldMapError::Config`] when a layer cannot be parsed
    /// or the merged values do not describe a mapper.
    pub fn load(prefix: &str, file: Option<&Path>) -> FieldMapResult<Self> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));
        if let Some(path) = file {
            figment = figment.merge(Toml::file(path));
        }
        figment = figment.merge(FieldListEnv::prefixed(prefix));
        Self::from_figment(&figment)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

/// Deserialise a field list given either as one name or as a list of names.
pub(crate) fn one_or_many<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match OneOrMany::deserialize(deserializer)? {
        OneOrMany::One(name) if name.trim().is_empty() => Vec::new(),
        OneOrMany::One(name) => vec![name],
        OneOrMany::Many(names) => names,
    })
}
