//! hashguard library - text integrity checking with cryptographic digests.
//!
//! This library exposes the core of the `hashguard` CLI: hash text, save
//! labeled digest snapshots to a vault, and later check whether text still
//! matches its snapshot.
//!
//! # Modules
//!
//! - `digest`: Hash computation over md5, sha1, sha256 and sha512
//! - `snapshot`: Snapshot records, result records, and the JSON vault
//! - `service`: Save / verify / compare operations
//! - `error`: Error types with user-recoverable hints
//! - `config`: Vault location and default algorithm resolution
//! - `output`: Output mode abstraction (robot/human)
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod digest;
pub mod error;
pub mod logging;
pub mod output;
pub mod service;
pub mod snapshot;
pub mod theme;

pub use digest::{Algorithm, DigestSet, compute_all_hashes, compute_hash, compute_hash_named};
pub use error::{HgError, Result};
pub use service::{IntegrityService, compare_texts};
pub use snapshot::{Comparison, SnapshotRecord, SnapshotStore, Verification, VerifyReport};
