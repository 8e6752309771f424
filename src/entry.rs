use std::fs::FileType;
use std::io;
use std::path::{Path, PathBuf};

/// A single filesystem node visited by the walker.
///
/// Entries are built per node and dropped before the walker moves on, so a
/// long traversal never accumulates them. Nothing here is resolved through
/// symlinks: `kind` describes the node itself, not what it points to.
#[derive(Debug, Clone)]
pub struct Entry {
    /// Full path to the entry, rooted at the search root as given.
    pub path: PathBuf,

    /// The final path component.
    pub name: String,

    /// What kind of node this is.
    pub kind: EntryKind,

    /// How deep in the traversal this entry was found. Root = 0.
    pub depth: usize,
}

/// The kind of a traversed entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// A regular file.
    File,

    /// A directory.
    Dir,

    /// A symbolic link. Never descended into.
    Symlink,

    /// Anything else (device files, pipes, sockets, etc.).
    Other,
}

impl EntryKind {
    /// Classify a file type obtained without following symlinks.
    pub fn from_file_type(ft: FileType) -> Self {
        if ft.is_dir() {
            EntryKind::Dir
        } else if ft.is_file() {
            EntryKind::File
        } else if ft.is_symlink() {
            EntryKind::Symlink
        } else {
            EntryKind::Other
        }
    }
}

/// Device and inode pair identifying a file on disk.
///
/// Two paths with equal `FileId`s name the same underlying file, whether
/// through hard links or through symlinks resolving to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FileId {
    pub dev: u64,
    pub ino: u64,
}

impl FileId {
    /// Stat `path`, following symlinks, and capture its identity.
    #[cfg(unix)]
    pub fn of(path: &Path) -> io::Result<Self> {
        use std::os::unix::fs::MetadataExt;

        let meta = std::fs::metadata(path)?;
        Ok(Self {
            dev: meta.dev(),
            ino: meta.ino(),
        })
    }

    #[cfg(not(unix))]
    pub fn of(path: &Path) -> io::Result<Self> {
        // Still surface NotFound and friends before reporting the platform gap.
        std::fs::metadata(path)?;
        Err(io::Error::new(
            io::ErrorKind::Unsupported,
            "device and inode numbers are not available on this platform",
        ))
    }
}
