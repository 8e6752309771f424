use crate::entry::Entry;
use crate::error::SfindError;

/// Determines whether a visited entry is reported.
///
/// The walker calls `is_match` once per entry, in traversal order. Matchers
/// decide for themselves which entry kinds they test; an entry of any other
/// kind simply yields `Ok(false)`.
///
/// # Error Handling
///
/// Returning `Err` stops the whole search: the error propagates out of
/// [`SearchBuilder::run`](crate::SearchBuilder::run) and no further entries
/// are visited. Use this for failures that make the answer unknowable, not
/// for "no match".
///
/// # Example
///
/// ```rust
/// use sfind::{Entry, EntryKind, Matcher, SfindError};
///
/// struct ExtensionMatcher(String);
///
/// impl Matcher for ExtensionMatcher {
///     fn is_match(&self, entry: &Entry) -> Result<bool, SfindError> {
///         Ok(entry.kind == EntryKind::File
///             && entry.path.extension().is_some_and(|e| e == self.0.as_str()))
///     }
/// }
/// ```
pub trait Matcher {
    /// Returns `Ok(true)` if this entry should be written to the output.
    fn is_match(&self, entry: &Entry) -> Result<bool, SfindError>;
}
