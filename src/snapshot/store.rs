//! JSON file storage for snapshot records.
//!
//! The whole vault is one JSON object keyed by label. Every load reads the
//! entire file and every write replaces it, so there are no partial updates.
//! There is no locking: with two concurrent writers the last rename wins.

use std::collections::BTreeMap;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::{debug, info, instrument, trace};

use super::schema::SnapshotRecord;
use crate::error::{HgError, Result};

/// Default vault file name.
pub const VAULT_FILE: &str = "hash_vault.json";

/// In-memory form of the vault, keyed by label.
pub type Vault = BTreeMap<String, SnapshotRecord>;

/// Snapshot vault backed by a single JSON file.
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    path: PathBuf,
}

impl SnapshotStore {
    /// Creates a store for the vault at `path`. Nothing is read or created yet.
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the full vault. A missing file is an empty vault.
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub fn load(&self) -> Result<Vault> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("Vault file absent, starting empty");
                return Ok(Vault::new());
            }
            Err(e) => return Err(HgError::Io(e)),
        };

        let vault: Vault = serde_json::from_str(&contents).map_err(|e| HgError::CorruptStore {
            path: self.path.clone(),
            reason: e.to_string(),
        })?;

        trace!(count = vault.len(), "Vault loaded");
        Ok(vault)
    }

    /// Replaces the backing file with `vault`.
    ///
    /// The JSON is written to a temporary file next to the vault and renamed
    /// over it, so readers see either the old or the new vault.
    #[instrument(skip(self, vault), fields(path = %self.path.display(), count = vault.len()))]
    pub fn persist(&self, vault: &Vault) -> Result<()> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&dir).map_err(|e| self.write_error(&e))?;

        let json = serde_json::to_string_pretty(vault).map_err(|e| self.write_error(&e))?;

        let mut tmp = NamedTempFile::new_in(&dir).map_err(|e| self.write_error(&e))?;
        tmp.write_all(json.as_bytes()).map_err(|e| self.write_error(&e))?;
        tmp.as_file().sync_all().map_err(|e| self.write_error(&e))?;
        tmp.persist(&self.path).map_err(|e| self.write_error(&e.error))?;

        debug!("Vault persisted");
        Ok(())
    }

    /// Looks up one record.
    pub fn get(&self, label: &str) -> Result<Option<SnapshotRecord>> {
        Ok(self.load()?.remove(label))
    }

    /// Inserts or replaces the record stored under `record.label`.
    #[instrument(skip(self, record), fields(label = %record.label))]
    pub fn upsert(&self, record: SnapshotRecord) -> Result<()> {
        let mut vault = self.load()?;
        let replaced = vault.insert(record.label.clone(), record).is_some();
        self.persist(&vault)?;
        info!(replaced, "Snapshot stored");
        Ok(())
    }

    /// Deletes a record.
    ///
    /// Returns true if a record was deleted. When the label is absent the
    /// file is left untouched.
    #[instrument(skip(self))]
    pub fn remove(&self, label: &str) -> Result<bool> {
        let mut vault = self.load()?;
        if vault.remove(label).is_none() {
            debug!(label, "Snapshot not found for deletion");
            return Ok(false);
        }
        self.persist(&vault)?;
        info!(label, "Snapshot deleted");
        Ok(true)
    }

    /// All records in label order.
    pub fn list(&self) -> Result<Vec<SnapshotRecord>> {
        Ok(self.load()?.into_values().collect())
    }

    fn write_error(&self, e: &dyn std::fmt::Display) -> HgError {
        HgError::StoreWrite {
            path: self.path.clone(),
            reason: e.to_string(),
        }
    }
}

/// Returns the default vault path.
///
/// Location: `~/.local/share/hashguard/hash_vault.json`
pub fn default_vault_path() -> Result<PathBuf> {
    let data_dir = dirs::data_local_dir().ok_or_else(|| {
        HgError::Other("Could not determine local data directory".to_string())
    })?;
    Ok(data_dir.join("hashguard").join(VAULT_FILE))
}
