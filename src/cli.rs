//! Command-line surface of the `sfind` binary.

use std::path::PathBuf;

use clap::{ArgAction, ArgGroup, Parser};

use crate::error::SfindError;
use crate::mode::Mode;

#[derive(Parser, Debug)]
#[command(
    name = "sfind",
    version,
    about = "Print pathnames under each DIR that pass a test",
    override_usage = "sfind [DIR]... (-m PATTERN | -s FILE)"
)]
#[command(group(
    ArgGroup::new("test")
        .required(true)
        .args(["pattern", "reference"])
))]
pub struct Args {
    /// Directories to search. Defaults to the current directory.
    /// May appear before or after the test
    #[arg(value_name = "DIR")]
    pub dirs: Vec<PathBuf>,

    /// Report files and symlinks whose basename matches this glob
    #[arg(short = 'm', value_name = "PATTERN", allow_hyphen_values = true)]
    pub pattern: Option<String>,

    /// Report symlinks that resolve to the same file as FILE
    #[arg(short = 's', value_name = "FILE")]
    pub reference: Option<PathBuf>,

    /// Log progress to stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Build the search criterion. Stats the reference file in link mode.
    pub fn mode(&self) -> Result<Mode, SfindError> {
        Mode::resolve(self.pattern.as_deref(), self.reference.as_deref())
    }

    pub fn log_level(&self) -> tracing::Level {
        match self.verbose {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        }
    }
}
