use std::path::Path;

use crate::engine::{WalkConfig, MAX_DEPTH};
use crate::entry::Entry;
use crate::error::SfindError;
use crate::matcher::{LinkMatcher, NameMatcher};
use crate::traits::Matcher;

/// The single selection criterion active for a search.
///
/// Exactly one payload exists per run: a compiled name glob, or the
/// identity of a reference file. Both are fixed before traversal starts and
/// never change during it.
#[derive(Debug, Clone)]
pub enum Mode {
    /// Report files and symlinks whose basename matches a glob.
    Name(NameMatcher),

    /// Report symlinks resolving to the same file as a reference.
    Link(LinkMatcher),
}

impl Mode {
    /// Name mode for `pattern`.
    pub fn name(pattern: impl Into<String>) -> Result<Self, SfindError> {
        NameMatcher::new(pattern).map(Mode::Name)
    }

    /// Link mode for `reference`. The reference is stat'd immediately.
    pub fn link(reference: impl AsRef<Path>) -> Result<Self, SfindError> {
        LinkMatcher::new(reference.as_ref()).map(Mode::Link)
    }

    /// Pick the mode from the two optional criteria.
    ///
    /// Exactly one must be present. Both or neither is a usage error, and is
    /// reported without touching the filesystem.
    pub fn resolve(
        pattern: Option<&str>,
        reference: Option<&Path>,
    ) -> Result<Self, SfindError> {
        match (pattern, reference) {
            (Some(pattern), None)   => Self::name(pattern),
            (None, Some(reference)) => Self::link(reference),
            (Some(_), Some(_)) => Err(SfindError::Usage(
                "-m and -s are mutually exclusive".into(),
            )),
            (None, None) => Err(SfindError::Usage(
                "must specify either -s or -m option".into(),
            )),
        }
    }

    /// Traversal parameters this mode requires.
    ///
    /// Hard links cannot span devices, so link mode stays on the root's
    /// filesystem.
    pub fn walk_config(&self) -> WalkConfig {
        WalkConfig {
            max_depth:        MAX_DEPTH,
            same_file_system: matches!(self, Mode::Link(_)),
        }
    }
}

impl Matcher for Mode {
    fn is_match(&self, entry: &Entry) -> Result<bool, SfindError> {
        match self {
            Mode::Name(m) => m.is_match(entry),
            Mode::Link(m) => m.is_match(entry),
        }
    }
}
