//! # sfind
//!
//! Depth-first filesystem search by basename glob or by link identity.
//!
//! sfind walks one or more roots physically (symlinks are never followed
//! for descent) and writes every matching path to a caller-supplied writer
//! as soon as it is found. Exactly one criterion is active per search:
//!
//! - [`Mode::Name`] reports regular files and symlinks whose basename
//!   matches a shell glob (`*`, `?`, `[...]`).
//! - [`Mode::Link`] reports symlinks that resolve to the same device and
//!   inode as a reference file. The walk stays on the root's filesystem.
//!
//! The first error of any kind ends the search and is returned from
//! [`SearchBuilder::run`].
//!
//! # Quick Start
//!
//! ```rust
//! use sfind::Mode;
//!
//! let dir = tempfile::tempdir().unwrap();
//! std::fs::write(dir.path().join("invoice_jan.txt"), "").unwrap();
//! std::fs::write(dir.path().join("invoice_feb.txt"), "").unwrap();
//! std::fs::write(dir.path().join("report.md"), "").unwrap();
//!
//! let mut out = Vec::new();
//! let results = sfind::search()
//!     .root(dir.path())
//!     .mode(Mode::name("invoice_*.txt").unwrap())
//!     .run(&mut out)
//!     .unwrap();
//!
//! assert_eq!(results.matches, 2);
//! assert_eq!(String::from_utf8(out).unwrap().lines().count(), 2);
//! ```
//!
//! # Custom Matchers
//!
//! [`Mode`] covers the two built-in criteria. The walker itself is exposed
//! as [`engine::walk`] for callers that want their own [`Matcher`]:
//!
//! ```rust
//! use sfind::engine::{walk, WalkConfig};
//! use sfind::{Entry, EntryKind, Matcher, SfindError};
//!
//! struct Empty;
//!
//! impl Matcher for Empty {
//!     fn is_match(&self, entry: &Entry) -> Result<bool, SfindError> {
//!         if entry.kind != EntryKind::File {
//!             return Ok(false);
//!         }
//!         Ok(std::fs::metadata(&entry.path).is_ok_and(|m| m.len() == 0))
//!     }
//! }
//!
//! let dir = tempfile::tempdir().unwrap();
//! std::fs::write(dir.path().join("empty"), "").unwrap();
//!
//! let mut found = Vec::new();
//! walk(dir.path(), &WalkConfig::default(), |entry| {
//!     if Empty.is_match(entry)? {
//!         found.push(entry.path.clone());
//!     }
//!     Ok(())
//! })
//! .unwrap();
//!
//! assert_eq!(found.len(), 1);
//! ```

#![forbid(unsafe_code)]

pub mod cli;
pub mod engine;

mod builder;
mod entry;
mod error;
mod matcher;
mod mode;
mod results;
mod traits;

// ── Public re-exports ─────────────────────────────────────────────────────────

pub use builder::SearchBuilder;
pub use entry::{Entry, EntryKind, FileId};
pub use error::SfindError;
pub use matcher::{LinkMatcher, NameMatcher};
pub use mode::Mode;
pub use results::Results;
pub use traits::Matcher;

// ── Entry point ───────────────────────────────────────────────────────────────

/// Create a new [`SearchBuilder`] to configure and run a search.
pub fn search() -> SearchBuilder {
    SearchBuilder::default()
}
