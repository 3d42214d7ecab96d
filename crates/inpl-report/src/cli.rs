use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use inpl_scoring::aggregate::MissingScorePolicy;

#[derive(Parser, Debug)]
#[command(
    name = "inpl-report",
    about = "Score an inPL answer record and print the report as JSON",
    version
)]
pub struct Cli {
    /// Configuration file (defaults to $INPL_CONFIG, then the user config directory)
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Normative table to use instead of the built-in one (CSV)
    #[arg(long)]
    pub norms: Option<PathBuf>,
    /// How section composites treat tests that could not be scored
    #[arg(long, value_enum)]
    pub missing_scores: Option<MissingScores>,
    /// Pretty-print the report
    #[arg(long)]
    pub pretty: bool,
    /// Answer record (JSON object); `-` or nothing reads stdin
    pub input: Option<PathBuf>,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum MissingScores {
    Skip,
    CountAsBad,
}

impl From<MissingScores> for MissingScorePolicy {
    fn from(value: MissingScores) -> Self {
        match value {
            MissingScores::Skip => MissingScorePolicy::Skip,
            MissingScores::CountAsBad => MissingScorePolicy::CountAsBad,
        }
    }
}

impl Cli {
    /// The input file, or `None` for stdin.
    pub fn input_path(&self) -> Option<&PathBuf> {
        self.input.as_ref().filter(|path| path.as_os_str() != "-")
    }
}
