//! CLI argument definitions.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::digest::Algorithm;

pub mod input;

/// hashguard - Text integrity checker using cryptographic hashing.
///
/// Robot Mode: Use --robot or --format=json for machine-parseable output.
#[derive(Parser, Debug)]
#[command(name = "hashguard", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (text for humans, json for agents/scripts)
    #[arg(
        long,
        short = 'f',
        default_value = "text",
        global = true,
        env = "HASHGUARD_FORMAT"
    )]
    pub format: OutputFormat,

    /// Robot mode: equivalent to --format=json
    #[arg(long, global = true)]
    pub robot: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(long, short = 'v', global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (only errors are logged)
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(
        long,
        global = true,
        env = "NO_COLOR",
        value_parser = clap::builder::FalseyValueParser::new()
    )]
    pub no_color: bool,

    /// Snapshot vault file
    #[arg(long, global = true, env = "HASHGUARD_VAULT", value_name = "PATH")]
    pub vault: Option<PathBuf>,

    /// Settings file (defaults to ~/.config/hashguard/config.toml)
    #[arg(long, global = true, env = "HASHGUARD_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format selection.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text with optional color
    #[default]
    Text,
    /// JSON output for scripts and agents
    Json,
    /// Compact JSON (single line)
    JsonCompact,
}

impl Cli {
    /// Returns true if output should be JSON (robot mode or explicit --format=json).
    pub const fn use_json(&self) -> bool {
        self.robot || matches!(self.format, OutputFormat::Json | OutputFormat::JsonCompact)
    }

    /// Returns true if output should be compact JSON.
    pub const fn use_compact_json(&self) -> bool {
        matches!(self.format, OutputFormat::JsonCompact)
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute the hash of a text
    Hash(HashArgs),

    /// Save a labeled snapshot of a text
    Save(SaveArgs),

    /// Verify a text against a saved snapshot
    Verify(VerifyArgs),

    /// Compare two texts directly (nothing is saved)
    Compare(CompareArgs),

    /// List saved snapshots
    List,

    /// Delete a saved snapshot
    Delete(DeleteArgs),

    /// Show version and build information
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// === Argument Structs ===

/// Where a command's text comes from.
///
/// Resolution order: positional text, then `--file`, then standard input.
#[derive(clap::Args, Debug, Default)]
pub struct TextArgs {
    /// Text to process (reads stdin when neither TEXT nor --file is given)
    pub text: Option<String>,

    /// Read the text from a file
    #[arg(long, value_name = "PATH", conflicts_with = "text")]
    pub file: Option<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct HashArgs {
    #[command(flatten)]
    pub input: TextArgs,

    /// Hash algorithm
    #[arg(long, short = 'a')]
    pub algorithm: Option<AlgorithmArg>,

    /// Show the hash under every supported algorithm
    #[arg(long, conflicts_with = "algorithm")]
    pub all: bool,
}

#[derive(Parser, Debug)]
pub struct SaveArgs {
    /// Unique label for this snapshot
    pub label: String,

    #[command(flatten)]
    pub input: TextArgs,

    /// Hash algorithm
    #[arg(long, short = 'a')]
    pub algorithm: Option<AlgorithmArg>,
}

#[derive(Parser, Debug)]
pub struct VerifyArgs {
    /// Snapshot label to verify against
    pub label: String,

    #[command(flatten)]
    pub input: TextArgs,
}

/// Two sides to compare. Each side is `--file1`/`--file2` or the next
/// positional text, so `--file1 a.txt "inline"` compares a file to a text.
#[derive(Parser, Debug)]
pub struct CompareArgs {
    /// First text (or the second one when --file1 is given)
    pub text1: Option<String>,

    /// Second text
    pub text2: Option<String>,

    /// Read the first text from a file
    #[arg(long, value_name = "PATH")]
    pub file1: Option<PathBuf>,

    /// Read the second text from a file
    #[arg(long, value_name = "PATH")]
    pub file2: Option<PathBuf>,

    /// Hash algorithm
    #[arg(long, short = 'a')]
    pub algorithm: Option<AlgorithmArg>,
}

#[derive(Parser, Debug)]
pub struct DeleteArgs {
    /// Label of the snapshot to delete
    pub label: String,
}

#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}

/// Algorithm choice on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AlgorithmArg {
    Md5,
    Sha1,
    Sha256,
    Sha512,
}

impl From<AlgorithmArg> for Algorithm {
    fn from(arg: AlgorithmArg) -> Self {
        match arg {
            AlgorithmArg::Md5 => Self::Md5,
            AlgorithmArg::Sha1 => Self::Sha1,
            AlgorithmArg::Sha256 => Self::Sha256,
            AlgorithmArg::Sha512 => Self::Sha512,
        }
    }
}
