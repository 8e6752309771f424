use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::engine::{walk, MAX_DEPTH};
use crate::error::SfindError;
use crate::mode::Mode;
use crate::results::Results;
use crate::traits::Matcher;

// ---------------------------------------------------------------------------
// SearchBuilder
// ---------------------------------------------------------------------------

/// Entry point for configuring and executing a search.
///
/// Created via [`sfind::search()`](crate::search). Configure with chained
/// builder methods, then call [`run()`](SearchBuilder::run) to execute.
///
/// # Example
///
/// ```rust,no_run
/// use sfind::Mode;
///
/// let results = sfind::search()
///     .root("src")
///     .root("tests")
///     .mode(Mode::name("*.rs")?)
///     .run(std::io::stdout().lock())?;
///
/// eprintln!("{} matches", results.matches);
/// # Ok::<(), sfind::SfindError>(())
/// ```
#[derive(Debug)]
pub struct SearchBuilder {
    roots:     Vec<PathBuf>,
    mode:      Option<Mode>,
    max_depth: usize,
}

impl Default for SearchBuilder {
    fn default() -> Self {
        Self {
            roots:     Vec::new(),
            mode:      None,
            max_depth: MAX_DEPTH,
        }
    }
}

impl SearchBuilder {
    // ── Roots ─────────────────────────────────────────────────────────────

    /// Add a directory to search. Roots are walked in the order added.
    ///
    /// With no roots the current working directory is searched. A root of
    /// `.` is replaced by the absolute current directory.
    pub fn root(mut self, root: impl Into<PathBuf>) -> Self {
        self.roots.push(root.into());
        self
    }

    /// Add several roots at once.
    pub fn roots<I, P>(mut self, roots: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.roots.extend(roots.into_iter().map(Into::into));
        self
    }

    // ── Criterion ─────────────────────────────────────────────────────────

    /// Set the selection criterion. Required.
    pub fn mode(mut self, mode: Mode) -> Self {
        self.mode = Some(mode);
        self
    }

    // ── Options ───────────────────────────────────────────────────────────

    /// Maximum traversal depth. `0` means the roots only, `1` means one
    /// level of children, and so on. Defaults to [`MAX_DEPTH`].
    pub fn max_depth(mut self, d: usize) -> Self {
        self.max_depth = d;
        self
    }

    // ── Execute ───────────────────────────────────────────────────────────

    /// Walk every root and write each matching path to `out`, one per line.
    ///
    /// Lines are written as matches are found, in traversal order. `out` is
    /// flushed once all roots are done.
    ///
    /// # Errors
    ///
    /// Returns `Err` if no mode was set, the current directory is needed but
    /// cannot be resolved, any root cannot be fully walked, a symlink cannot
    /// be resolved in link mode, or writing to `out` fails. The first error
    /// ends the search; remaining roots are not visited.
    pub fn run<W: Write>(self, mut out: W) -> Result<Results, SfindError> {
        let mode = self.mode.ok_or_else(|| {
            SfindError::Usage("must specify either -s or -m option".into())
        })?;

        let roots = resolve_roots(self.roots)?;

        let mut config = mode.walk_config();
        config.max_depth = self.max_depth;

        let mut results = Results::default();
        let start = Instant::now();

        for root in &roots {
            walk(root, &config, |entry| {
                results.entries += 1;

                if mode.is_match(entry)? {
                    tracing::trace!(path = %entry.path.display(), "match");
                    write_path(&mut out, &entry.path).map_err(SfindError::Output)?;
                    results.matches += 1;
                }
                Ok(())
            })?;
        }

        out.flush().map_err(SfindError::Output)?;
        results.duration = start.elapsed();

        tracing::info!(
            roots = roots.len(),
            matches = results.matches,
            entries = results.entries,
            elapsed_ms = results.duration.as_millis() as u64,
            "search complete"
        );

        Ok(results)
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Default to the current directory and expand `.` to its absolute form.
fn resolve_roots(roots: Vec<PathBuf>) -> Result<Vec<PathBuf>, SfindError> {
    let needs_cwd = roots.is_empty() || roots.iter().any(|r| r.as_path() == Path::new("."));
    if !needs_cwd {
        return Ok(roots);
    }

    let cwd = std::env::current_dir().map_err(SfindError::CurrentDir)?;
    if roots.is_empty() {
        return Ok(vec![cwd]);
    }

    Ok(roots
        .into_iter()
        .map(|r| if r.as_path() == Path::new(".") { cwd.clone() } else { r })
        .collect())
}

/// Write `path` followed by a newline, byte-exact where the platform allows.
#[cfg(unix)]
fn write_path<W: Write>(out: &mut W, path: &Path) -> io::Result<()> {
    use std::os::unix::ffi::OsStrExt;

    out.write_all(path.as_os_str().as_bytes())?;
    out.write_all(b"\n")
}

#[cfg(not(unix))]
fn write_path<W: Write>(out: &mut W, path: &Path) -> io::Result<()> {
    writeln!(out, "{}", path.display())
}
