use std::path::{Path, PathBuf};

use globset::{GlobBuilder, GlobMatcher};

use crate::entry::{Entry, EntryKind, FileId};
use crate::error::SfindError;
use crate::traits::Matcher;

// ---------------------------------------------------------------------------
// NameMatcher
// ---------------------------------------------------------------------------

/// Matches regular files and symlinks whose basename fits a shell glob.
///
/// Supports `*`, `?`, `[...]` and `[!...]` with `fnmatch` semantics: braces
/// are literal, an unclosed `[` is literal, and names are compared as raw
/// bytes. Matching is case-sensitive and a leading dot gets no special
/// treatment. Directories are never tested.
#[derive(Debug, Clone)]
pub struct NameMatcher {
    pattern: String,
    glob:    GlobMatcher,
}

impl NameMatcher {
    /// Compile `pattern` once, up front.
    pub fn new(pattern: impl Into<String>) -> Result<Self, SfindError> {
        let pattern = pattern.into();
        let glob = GlobBuilder::new(&translate(&pattern))
            .literal_separator(true)
            .backslash_escape(true)
            .build()
            .map_err(|source| SfindError::InvalidPattern {
                pattern: pattern.clone(),
                source,
            })?
            .compile_matcher();

        Ok(Self { pattern, glob })
    }

    /// The glob as supplied by the caller.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }
}

impl Matcher for NameMatcher {
    fn is_match(&self, entry: &Entry) -> Result<bool, SfindError> {
        match entry.kind {
            EntryKind::File | EntryKind::Symlink => {
                let name = entry.path.file_name().unwrap_or(entry.path.as_os_str());
                Ok(self.glob.is_match(Path::new(name)))
            }
            EntryKind::Dir | EntryKind::Other => Ok(false),
        }
    }
}

/// Rewrite an `fnmatch` pattern into globset syntax.
///
/// globset reads `{a,b}` as alternation and rejects an unclosed `[`;
/// `fnmatch` treats both literally.
fn translate(pattern: &str) -> String {
    let chars: Vec<char> = pattern.chars().collect();
    let mut out = String::with_capacity(pattern.len());
    let mut i = 0;

    while i < chars.len() {
        match chars[i] {
            '\\' => match chars.get(i + 1) {
                Some(&c) => {
                    out.push('\\');
                    out.push(c);
                    i += 2;
                    continue;
                }
                None => out.push_str("\\\\"),
            },
            '{' => out.push_str("[{]"),
            '}' => out.push_str("[}]"),
            '[' => match class_end(&chars, i) {
                Some(end) => {
                    out.extend(&chars[i..=end]);
                    i = end + 1;
                    continue;
                }
                None => out.push_str("[[]"),
            },
            c => out.push(c),
        }
        i += 1;
    }

    out
}

/// Index of the `]` closing the class opened at `start`, if any.
///
/// A `]` right after `[` or `[!` is a member, not the terminator.
fn class_end(chars: &[char], start: usize) -> Option<usize> {
    let mut j = start + 1;
    if matches!(chars.get(j), Some('!' | '^')) {
        j += 1;
    }
    if chars.get(j) == Some(&']') {
        j += 1;
    }
    chars[j..].iter().position(|&c| c == ']').map(|k| j + k)
}

// ---------------------------------------------------------------------------
// LinkMatcher
// ---------------------------------------------------------------------------

/// Matches symlinks that resolve to the same file as a reference path.
///
/// The reference is stat'd once at construction. Each symlink entry is then
/// stat'd through the link and compared by device and inode. A link that
/// cannot be resolved is an error, not a miss.
#[derive(Debug, Clone)]
pub struct LinkMatcher {
    reference: PathBuf,
    id:        FileId,
}

impl LinkMatcher {
    /// Capture the identity of `reference`, following symlinks.
    pub fn new(reference: impl Into<PathBuf>) -> Result<Self, SfindError> {
        let reference = reference.into();
        let id = FileId::of(&reference).map_err(|source| SfindError::Reference {
            path: reference.clone(),
            source,
        })?;

        tracing::debug!(
            reference = %reference.display(),
            dev = id.dev,
            ino = id.ino,
            "captured reference identity"
        );

        Ok(Self { reference, id })
    }

    pub fn reference(&self) -> &Path {
        &self.reference
    }

    pub fn id(&self) -> FileId {
        self.id
    }
}

impl Matcher for LinkMatcher {
    fn is_match(&self, entry: &Entry) -> Result<bool, SfindError> {
        if entry.kind != EntryKind::Symlink {
            return Ok(false);
        }

        let id = FileId::of(&entry.path).map_err(|source| SfindError::Resolve {
            path: entry.path.clone(),
            source,
        })?;

        Ok(id == self.id)
    }
}
