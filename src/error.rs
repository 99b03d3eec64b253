//! Error types for hashguard operations.

use std::path::PathBuf;

use thiserror::Error;

use crate::digest::Algorithm;

/// Primary error type for hashing, snapshot, and CLI operations.
#[derive(Error, Debug)]
pub enum HgError {
    // Digest errors
    #[error("Unsupported algorithm '{name}'. Choose from: {}", Algorithm::NAMES.join(", "))]
    UnsupportedAlgorithm { name: String },

    // Store errors
    #[error("Snapshot vault {} is corrupt: {reason}", .path.display())]
    CorruptStore { path: PathBuf, reason: String },

    #[error("Failed to write snapshot vault {}: {reason}", .path.display())]
    StoreWrite { path: PathBuf, reason: String },

    #[error("Snapshot label must not be empty")]
    InvalidLabel,

    // Input errors
    #[error("Missing input: {0}")]
    MissingInput(String),

    #[error("Unexpected input: {0}")]
    ExtraInput(String),

    // Configuration errors
    #[error("Configuration parse error in {}: {reason}", .path.display())]
    ConfigParse { path: PathBuf, reason: String },

    // General errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

impl HgError {
    /// Returns true if the error is recoverable by the user.
    pub const fn is_user_recoverable(&self) -> bool {
        matches!(
            self,
            Self::UnsupportedAlgorithm { .. }
                | Self::InvalidLabel
                | Self::MissingInput(_)
                | Self::ExtraInput(_)
                | Self::ConfigParse { .. }
        )
    }

    /// Returns a suggestion for how to fix the error.
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::UnsupportedAlgorithm { .. } => Some("Use one of: md5, sha1, sha256, sha512"),
            Self::CorruptStore { .. } => {
                Some("Repair or remove the vault file, or point --vault at another location")
            }
            Self::StoreWrite { .. } => Some("Check permissions and free space for the vault directory"),
            Self::InvalidLabel => Some("Pass a non-empty label, e.g. `hashguard save doc ...`"),
            Self::MissingInput(_) => Some("Pass the text as an argument, with --file, or via stdin"),
            Self::ExtraInput(_) => Some("Give each side once: as a positional text or with --file1/--file2"),
            Self::ConfigParse { .. } => Some("Fix the TOML syntax or remove the settings file"),
            _ => None,
        }
    }

    /// Stable snake_case tag for machine-readable error output.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::UnsupportedAlgorithm { .. } => "unsupported_algorithm",
            Self::CorruptStore { .. } => "corrupt_store",
            Self::StoreWrite { .. } => "store_write",
            Self::InvalidLabel => "invalid_label",
            Self::MissingInput(_) => "missing_input",
            Self::ExtraInput(_) => "extra_input",
            Self::ConfigParse { .. } => "config_parse",
            Self::Io(_) => "io",
            Self::Other(_) => "other",
        }
    }
}

/// Convenience type alias for Results using HgError.
pub type Result<T> = std::result::Result<T, HgError>;

/// Extension trait for adding context to errors.
pub trait ResultExt<T> {
    fn with_context<F, S>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> S,
        S: Into<String>;
}

impl<T, E: std::error::Error> ResultExt<T> for std::result::Result<T, E> {
    fn with_context<F, S>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.map_err(|e| HgError::Other(format!("{}: {e}", f().into())))
    }
}
