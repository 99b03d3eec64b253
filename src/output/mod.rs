//! Output mode abstraction for robot and human output.

use crate::cli::Cli;
use crate::digest::{Algorithm, DigestSet};
use crate::error::HgError;
use crate::snapshot::{Comparison, SnapshotRecord, Verification};

pub mod human;
pub mod robot;

pub use human::HumanOutput;
pub use robot::RobotOutput;

/// JSON formatting options for robot mode.
#[derive(Debug, Clone, Copy)]
pub enum RobotFormat {
    /// Pretty-printed JSON (default for --robot).
    Json,
    /// Single-line JSON (--format=json-compact).
    JsonCompact,
}

/// Determines how command output is rendered.
#[derive(Debug, Clone, Copy)]
pub enum OutputMode {
    /// JSON output for AI agents and scripting.
    Robot(RobotFormat),
    /// Styled terminal output for human users.
    Human,
}

impl OutputMode {
    /// Create OutputMode from CLI arguments.
    #[must_use]
    pub const fn from_cli(cli: &Cli) -> Self {
        if cli.use_json() {
            let format = if cli.use_compact_json() {
                RobotFormat::JsonCompact
            } else {
                RobotFormat::Json
            };
            Self::Robot(format)
        } else {
            Self::Human
        }
    }

    /// Convert into the appropriate Output implementation.
    #[must_use]
    pub fn into_output(self) -> Box<dyn Output> {
        match self {
            Self::Robot(format) => Box::new(RobotOutput::new(format)),
            Self::Human => Box::new(HumanOutput::new()),
        }
    }
}

/// Trait for all output operations.
///
/// Commands call these methods without knowing the output mode.
pub trait Output {
    // Basic messages
    fn error(&self, error: &HgError);
    fn warning(&self, message: &str);

    // Digests
    fn hash(&self, algorithm: Algorithm, hash: &str);
    fn all_hashes(&self, hashes: &DigestSet);

    // Snapshots
    fn snapshot_saved(&self, record: &SnapshotRecord);
    fn verification(&self, result: &Verification);
    fn comparison(&self, result: &Comparison);
    fn snapshot_list(&self, records: &[SnapshotRecord]);
    fn snapshot_deleted(&self, label: &str, deleted: bool);

    // Metadata
    fn version_info(&self, version: &str, git_sha: &str, build_time: &str);
}
