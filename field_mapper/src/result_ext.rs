//! Extensions for mapping errors to `FieldMapResult` concisely.
//!
//! These helpers reduce repetitive `.map_err(|e| FieldMapError::…(e))`
//! patterns when a copier or serde step fails.
//!
//! # Examples
//!
//! ```
//! use field_mapper::{DelegateResultExt, FieldMapResult};
//!
//! fn rebuild() -> FieldMapResult<u8> {
//!     serde_json::from_value(serde_json::json!(7)).into_delegate()
//! }
//! # assert_eq!(rebuild().ok(), Some(7));
//! ```

use crate::{CopyError, FieldMapError, FieldMapResult};

/// Map any `Result<T, E>` whose error can be boxed into a
/// [`FieldMapError::Delegate`].
pub trait DelegateResultExt<T> {
    /// Convert `Result<T, E>` into `FieldMapResult<T>`, keeping the error
    /// untranslated.
    ///
    /// # Errors
    ///
    /// Propagates the original error wrapped in [`FieldMapError::Delegate`].
    fn into_delegate(self) -> FieldMapResult<T>;
}

impl<T, E> DelegateResultExt<T> for Result<T, E>
where
    E: Into<CopyError>,
{
    fn into_delegate(self) -> FieldMapResult<T> {
        self.map_err(FieldMapError::delegate)
    }
}
