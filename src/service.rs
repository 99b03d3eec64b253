//! Save, verify, and compare operations over the digest engine and the vault.
//!
//! Each call is a single request/response transaction: the vault is read
//! fresh every time, so edits made to the file between calls are observed.

use std::path::PathBuf;

use tracing::{debug, info, instrument};

use crate::digest::{self, Algorithm, DigestSet, char_length};
use crate::error::{HgError, Result};
use crate::snapshot::{Comparison, SnapshotRecord, SnapshotStore, Verification, VerifyReport};

/// Integrity checks backed by a snapshot vault.
#[derive(Debug, Clone)]
pub struct IntegrityService {
    store: SnapshotStore,
}

impl IntegrityService {
    pub const fn new(store: SnapshotStore) -> Self {
        Self { store }
    }

    /// Service over the vault file at `path`.
    pub fn open<P: Into<PathBuf>>(path: P) -> Self {
        Self::new(SnapshotStore::new(path))
    }

    pub const fn store(&self) -> &SnapshotStore {
        &self.store
    }

    /// Digest of `text` under `algorithm`.
    pub fn hash(&self, text: &str, algorithm: Algorithm) -> String {
        digest::compute_hash(text, algorithm)
    }

    /// Digests of `text` under every supported algorithm.
    pub fn hash_all(&self, text: &str) -> DigestSet {
        digest::compute_all_hashes(text)
    }

    /// Snapshot `text` under `label`, replacing any earlier snapshot with that label.
    #[instrument(skip(self, text), fields(bytes = text.len()))]
    pub fn save(&self, label: &str, text: &str, algorithm: Algorithm) -> Result<SnapshotRecord> {
        if label.is_empty() {
            return Err(HgError::InvalidLabel);
        }
        let record = SnapshotRecord::capture(label.to_string(), text, algorithm);
        self.store.upsert(record.clone())?;
        info!(label, %algorithm, "Snapshot saved");
        Ok(record)
    }

    /// Check `text` against the snapshot stored under `label`.
    ///
    /// The current text is hashed with the algorithm the snapshot was taken
    /// with, and the two hex strings are compared exactly.
    #[instrument(skip(self, text))]
    pub fn verify(&self, label: &str, text: &str) -> Result<Verification> {
        let Some(record) = self.store.get(label)? else {
            debug!(label, "No snapshot for label");
            return Ok(Verification::not_found(label));
        };

        let current_hash = digest::compute_hash(text, record.algorithm);
        let is_intact = current_hash == record.hash;
        info!(label, is_intact, "Verified snapshot");

        Ok(Verification::from_report(VerifyReport {
            label: record.label,
            algorithm: record.algorithm,
            original_hash: record.hash,
            current_hash,
            original_length: record.length,
            current_length: char_length(text),
            saved_at: record.timestamp,
            is_intact,
        }))
    }

    /// Compare two texts directly. The vault is not touched.
    pub fn compare(&self, text1: &str, text2: &str, algorithm: Algorithm) -> Comparison {
        compare_texts(text1, text2, algorithm)
    }

    /// All stored snapshots.
    pub fn list_snapshots(&self) -> Result<Vec<SnapshotRecord>> {
        self.store.list()
    }

    /// Delete the snapshot stored under `label`; false if there was none.
    pub fn delete_snapshot(&self, label: &str) -> Result<bool> {
        self.store.remove(label)
    }
}

/// Hash both texts under `algorithm` and report whether they match.
pub fn compare_texts(text1: &str, text2: &str, algorithm: Algorithm) -> Comparison {
    let hash_1 = digest::compute_hash(text1, algorithm);
    let hash_2 = digest::compute_hash(text2, algorithm);
    let identical = hash_1 == hash_2;
    debug!(%algorithm, identical, "Compared texts");
    Comparison {
        algorithm,
        identical,
        length_1: char_length(text1),
        length_2: char_length(text2),
        hash_1,
        hash_2,
    }
}
