//! Test fixture helpers for temporary vaults and input files.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Value, json};
use tempfile::TempDir;

/// A scratch directory holding a vault file and any input files.
///
/// The directory is removed when the workspace is dropped.
pub struct Workspace {
    pub dir: TempDir,
}

impl Workspace {
    /// Create an empty workspace. No vault file exists yet.
    ///
    /// # Panics
    ///
    /// Panics if the temporary directory cannot be created.
    #[must_use]
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("create temp dir"),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Where the vault lives inside this workspace.
    #[must_use]
    pub fn vault_path(&self) -> PathBuf {
        self.dir.path().join("hash_vault.json")
    }

    /// A settings path that never exists, so user config cannot leak in.
    #[must_use]
    pub fn missing_config_path(&self) -> PathBuf {
        self.dir.path().join("no-such-config.toml")
    }

    /// Write a text file and return its path.
    ///
    /// # Panics
    ///
    /// Panics if the file cannot be written.
    #[must_use]
    pub fn write_text(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, contents).expect("write text fixture");
        path
    }

    /// Write raw contents to the vault file.
    ///
    /// # Panics
    ///
    /// Panics if the file cannot be written.
    pub fn write_vault(&self, contents: &str) {
        fs::write(self.vault_path(), contents).expect("write vault fixture");
    }

    /// Parse the vault file as JSON.
    ///
    /// # Panics
    ///
    /// Panics if the vault is missing or is not valid JSON.
    #[must_use]
    pub fn read_vault(&self) -> Value {
        let raw = fs::read_to_string(self.vault_path()).expect("read vault");
        serde_json::from_str(&raw).expect("vault is valid JSON")
    }
}

impl Default for Workspace {
    fn default() -> Self {
        Self::new()
    }
}

/// Vault contents in the layout existing installations already have on disk.
///
/// Holds one sha256 snapshot of "hello" under the label `greeting`.
#[must_use]
pub fn legacy_vault() -> String {
    let vault = json!({
        "greeting": {
            "label": "greeting",
            "algorithm": "sha256",
            "hash": "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824",
            "length": 5,
            "timestamp": "2024-05-01T10:00:00.123456"
        }
    });
    serde_json::to_string_pretty(&vault).unwrap_or_default()
}
