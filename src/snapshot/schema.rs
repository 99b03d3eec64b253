//! Snapshot data types and the result records returned by the service.
//!
//! These are plain data: renderers turn them into text or JSON, nothing here
//! decides how they are shown.

use chrono::Local;
use serde::{Deserialize, Serialize};

use crate::digest::{Algorithm, char_length, compute_hash};

/// Timestamp layout for saved snapshots (local clock, microseconds, no offset).
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// A saved integrity checkpoint for one piece of text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotRecord {
    /// Unique label (store key).
    pub label: String,
    /// Algorithm the hash was computed with.
    pub algorithm: Algorithm,
    /// Lowercase hex digest of the snapshotted text.
    pub hash: String,
    /// Character count of the snapshotted text.
    pub length: usize,
    /// When the snapshot was taken.
    pub timestamp: String,
}

impl SnapshotRecord {
    /// Build a record for `text` stamped with the current local time.
    #[must_use]
    pub fn capture(label: String, text: &str, algorithm: Algorithm) -> Self {
        Self {
            label,
            algorithm,
            hash: compute_hash(text, algorithm),
            length: char_length(text),
            timestamp: Local::now().format(TIMESTAMP_FORMAT).to_string(),
        }
    }

    /// First 16 characters of the hash, for compact listings.
    ///
    /// Vault files are edited by hand, so the hash may not be ASCII hex.
    #[must_use]
    pub fn short_hash(&self) -> &str {
        self.hash
            .char_indices()
            .nth(16)
            .map_or(self.hash.as_str(), |(end, _)| &self.hash[..end])
    }
}

/// Outcome of verifying text against a stored snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Verification {
    /// No snapshot exists for the label.
    NotFound { label: String, message: String },
    /// Recomputed digest matches the stored one.
    Intact(VerifyReport),
    /// Recomputed digest differs from the stored one.
    Modified(VerifyReport),
}

impl Verification {
    #[must_use]
    pub fn not_found(label: &str) -> Self {
        Self::NotFound {
            label: label.to_string(),
            message: format!("No snapshot found for label '{label}'"),
        }
    }

    /// Wrap a report in the variant its `is_intact` flag calls for.
    #[must_use]
    pub fn from_report(report: VerifyReport) -> Self {
        if report.is_intact {
            Self::Intact(report)
        } else {
            Self::Modified(report)
        }
    }

    /// Status tag as it appears in JSON output.
    #[must_use]
    pub const fn status(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Intact(_) => "INTACT",
            Self::Modified(_) => "MODIFIED",
        }
    }

    #[must_use]
    pub const fn is_intact(&self) -> bool {
        matches!(self, Self::Intact(_))
    }

    #[must_use]
    pub const fn report(&self) -> Option<&VerifyReport> {
        match self {
            Self::Intact(report) | Self::Modified(report) => Some(report),
            Self::NotFound { .. } => None,
        }
    }
}

/// Detail of a verification against an existing snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VerifyReport {
    pub label: String,
    pub algorithm: Algorithm,
    pub original_hash: String,
    pub current_hash: String,
    pub original_length: usize,
    pub current_length: usize,
    pub saved_at: String,
    pub is_intact: bool,
}

/// Direct comparison of two texts under one algorithm.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Comparison {
    pub algorithm: Algorithm,
    pub hash_1: String,
    pub hash_2: String,
    pub identical: bool,
    pub length_1: usize,
    pub length_2: usize,
}
