//! Snapshot storage for text integrity checkpoints.
//!
//! This module provides the persistent vault of labeled digest snapshots
//! and the result records produced when text is checked against them.
//!
//! # File Layout
//!
//! ```text
//! ~/.local/share/hashguard/
//! └── hash_vault.json     # { "<label>": { label, algorithm, hash, length, timestamp } }
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use hashguard::digest::Algorithm;
//! use hashguard::snapshot::{SnapshotRecord, SnapshotStore};
//!
//! let store = SnapshotStore::new("/tmp/vault.json");
//! store.upsert(SnapshotRecord::capture("doc".into(), "hello", Algorithm::Sha256))?;
//!
//! for record in store.list()? {
//!     println!("{}: {}", record.label, record.hash);
//! }
//! ```

mod schema;
mod store;

pub use schema::{Comparison, SnapshotRecord, TIMESTAMP_FORMAT, Verification, VerifyReport};
pub use store::{SnapshotStore, VAULT_FILE, Vault, default_vault_path};
