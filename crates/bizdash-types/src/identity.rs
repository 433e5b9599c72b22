use std::fmt;
use std::hash::Hash;

/// A row with a stable identity, i.e. any `{ id: T }`-shaped record.
///
/// List views key rendered rows by `id()` and pass it to row actions
/// together with the row itself.
pub trait Identified {
    type Id: Clone + Eq + Hash + fmt::Display + fmt::Debug;

    fn id(&self) -> &Self::Id;
}

/// Text fields a free-text search is matched against.
pub trait Searchable {
    fn haystack(&self) -> Vec<&str>;

    /// Case-insensitive substring match over `haystack()`.
    ///
    /// An empty (or all-whitespace) needle matches every record.
    fn matches(&self, needle: &str) -> bool {
        let needle = needle.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        self.haystack()
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }
}
