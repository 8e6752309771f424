use std::io;
use std::path::{Path, PathBuf};

use ignore::WalkBuilder;

use crate::entry::{Entry, EntryKind};
use crate::error::SfindError;

/// Deepest level the walker descends to. The root is level 0.
pub const MAX_DEPTH: usize = 100;

// ---------------------------------------------------------------------------
// WalkConfig
// ---------------------------------------------------------------------------

/// Traversal parameters for a single root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WalkConfig {
    pub max_depth:        usize,
    /// Stay on the root's device; never descend across a mount point.
    pub same_file_system: bool,
}

impl Default for WalkConfig {
    fn default() -> Self {
        Self {
            max_depth:        MAX_DEPTH,
            same_file_system: false,
        }
    }
}

// ---------------------------------------------------------------------------
// walk()
// ---------------------------------------------------------------------------

/// Depth-first physical walk of `root`, calling `visit` once per node.
///
/// The root itself is visited first at depth 0. Symlinks, the root
/// included, are reported as leaves and never followed. Siblings are
/// visited in file name order so repeated runs over an unchanged tree
/// produce the same sequence.
///
/// The first traversal error, or the first `Err` returned by `visit`,
/// stops the walk and is returned.
pub fn walk<F>(root: &Path, config: &WalkConfig, mut visit: F) -> Result<(), SfindError>
where
    F: FnMut(&Entry) -> Result<(), SfindError>,
{
    // A symlinked root is a leaf like any other symlink. The walker below
    // would resolve it, so report it directly.
    let root_meta = std::fs::symlink_metadata(root).map_err(|source| SfindError::Walk {
        path: root.to_path_buf(),
        source,
    })?;
    if root_meta.file_type().is_symlink() {
        let name = root
            .file_name()
            .unwrap_or(root.as_os_str())
            .to_string_lossy()
            .into_owned();

        return visit(&Entry {
            path:  root.to_path_buf(),
            name,
            kind:  EntryKind::Symlink,
            depth: 0,
        });
    }

    let mut builder = WalkBuilder::new(root);
    builder
        .standard_filters(false)
        .ignore(false)
        .parents(false)
        .hidden(false)
        .follow_links(false)
        .same_file_system(config.same_file_system)
        .max_depth(Some(config.max_depth))
        .sort_by_file_name(|a, b| a.cmp(b));

    tracing::debug!(
        root = %root.display(),
        max_depth = config.max_depth,
        same_file_system = config.same_file_system,
        "walking"
    );

    for res in builder.build() {
        let entry = res.map_err(|e| map_ignore_error(root, e))?;

        let kind = match entry.file_type() {
            Some(ft) => EntryKind::from_file_type(ft),
            None     => EntryKind::Other,
        };

        let depth = entry.depth();
        let name = entry
            .file_name()
            .to_string_lossy()
            .into_owned();

        let entry = Entry {
            path:  entry.into_path(),
            name,
            kind,
            depth,
        };

        visit(&entry)?;
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Map ignore::Error to SfindError
// ---------------------------------------------------------------------------

fn map_ignore_error(root: &Path, e: ignore::Error) -> SfindError {
    let (path, source) = split_ignore_error(e);
    SfindError::Walk {
        path: path.unwrap_or_else(|| root.to_path_buf()),
        source,
    }
}

/// Peel path/depth wrappers off an `ignore::Error` down to the I/O cause.
fn split_ignore_error(e: ignore::Error) -> (Option<PathBuf>, io::Error) {
    match e {
        ignore::Error::WithPath { path, err } => {
            let (_, source) = split_ignore_error(*err);
            (Some(path), source)
        }
        ignore::Error::WithDepth { err, .. } => split_ignore_error(*err),
        ignore::Error::Loop { child, .. } => (
            Some(child),
            io::Error::other("file system loop found"),
        ),
        ignore::Error::Io(io_err) => (None, io_err),
        other => (None, io::Error::other(other.to_string())),
    }
}
