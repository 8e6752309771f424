use std::time::Duration;

/// The outcome of a completed search.
///
/// Matched paths are streamed to the caller's writer as they are found and
/// are not kept here; only counts survive the run.
#[derive(Debug, Clone, Default)]
pub struct Results {
    /// Total number of entries written to the output.
    pub matches: usize,

    /// Total entries visited across all roots, roots included.
    pub entries: usize,

    /// Wall-clock time from search start to completion.
    pub duration: Duration,
}
