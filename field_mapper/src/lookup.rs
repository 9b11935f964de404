//! List-membership lookup shared by the filtering operations.

/// Return the index of the first occurrence of `field` in `list`.
///
/// Field lists are expected to hold tens of names at most, so a linear scan
/// is used rather than a set.
///
/// # Examples
///
/// ```
/// use field_mapper::index_of;
///
/// let list = vec!["id".to_owned(), "name".to_owned(), "id".to_owned()];
/// assert_eq!(index_of(&list, "id"), Some(0));
/// assert_eq!(index_of(&list, "name"), Some(1));
/// assert_eq!(index_of(&list, "secret"), None);
/// ```
#[must_use]
pub fn index_of(list: &[String], field: &str) -> Option<usize> {
    list.iter().position(|candidate| candidate == field)
}

/// Whether `field` appears in `list`.
pub(crate) fn contains(list: &[String], field: &str) -> bool {
    index_of(list, field).is_some()
}
