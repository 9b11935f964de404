//! Environment variables describing a [`crate::FieldMapper`].
//!
//! Only three kinds of key are read once the prefix is stripped:
//!
//! - `IGNORE_FIELDS` and `WANTED_FIELDS` hold comma-separated names; blank
//!   segments are dropped, so an empty value clears the list;
//! - `ALIAS_FIELDS__<SRC>` adds an alias from `<src>` (lowercased, as every
//!   environment key is) to the variable's value, kept verbatim.
//!
//! Anything else under the prefix is logged and ignored.

use figment::providers::Env;
use figment::{
    Profile, Provider,
    error::Error,
    value::{Dict, Map, Tag, Value},
};

const LIST_KEYS: [&str; 2] = ["ignore_fields", "wanted_fields"];
const ALIAS_KEY: &str = "alias_fields";
const ALIAS_PREFIX: &str = "alias_fields__";

/// Figment provider reading mapper settings from prefixed environment
/// variables.
#[derive(Clone)]
pub struct FieldListEnv {
    inner: Env,
}

impl FieldListEnv {
    /// Read variables whose names start with `prefix`.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use field_mapper::FieldListEnv;
    /// use figment::Figment;
    ///
    /// // APP_IGNORE_FIELDS=secret,token APP_ALIAS_FIELDS__ID=user_id
    /// let figment = Figment::from(FieldListEnv::prefixed("APP_"));
    /// let _ = figment;
    /// ```
    #[must_use]
    pub fn prefixed(prefix: &str) -> Self {
        Self {
            inner: Env::prefixed(prefix),
        }
    }

    /// Collect the recognised variables into a mapper-shaped dictionary.
    fn collect<I>(vars: I) -> Dict
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut dict = Dict::new();
        let mut aliases = Dict::new();
        for (key, raw) in vars {
            let alias = key.strip_prefix(ALIAS_PREFIX).filter(|src| !src.is_empty());
            if let Some(src) = alias {
                aliases.insert(src.to_owned(), Value::from(raw.trim().to_owned()));
            } else if LIST_KEYS.contains(&key.as_str()) {
                dict.insert(key, names(&raw));
            } else {
                tracing::debug!(key = %key, "unrecognised mapper variable ignored");
            }
        }
        if !aliases.is_empty() {
            dict.insert(ALIAS_KEY.to_owned(), Value::Dict(Tag::Default, aliases));
        }
        dict
    }
}

fn names(raw: &str) -> Value {
    let list = raw
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(|name| Value::from(name.to_owned()))
        .collect();
    Value::Array(Tag::Default, list)
}

impl Provider for FieldListEnv {
    fn metadata(&self) -> figment::Metadata {
        self.inner.metadata()
    }

    fn profile(&self) -> Option<Profile> {
        Some(self.inner.profile.clone())
    }

    fn data(&self) -> Result<Map<Profile, Dict>, Error> {
        let vars = self
            .inner
            .iter()
            .map(|(key, raw)| (key.as_str().to_owned(), raw));
        Ok(self.inner.profile.collect(Self::collect(vars)))
    }
}
