//! Digest engine: hex digests of text under a closed set of algorithms.
//!
//! Every function here is pure. The digest of a text is computed over its
//! UTF-8 bytes and rendered as lowercase hex, so identical `(text, algorithm)`
//! pairs always produce identical output.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use md5::Md5;
use serde::{Deserialize, Serialize};
use sha1::Sha1;
use sha2::{Digest, Sha256, Sha512};
use tracing::trace;

use crate::error::{HgError, Result};

/// Supported digest algorithms.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    Md5,
    Sha1,
    #[default]
    Sha256,
    Sha512,
}

/// Digests of one text under every supported algorithm.
pub type DigestSet = BTreeMap<Algorithm, String>;

impl Algorithm {
    /// Every supported algorithm, weakest first.
    pub const ALL: [Self; 4] = [Self::Md5, Self::Sha1, Self::Sha256, Self::Sha512];

    /// Lowercase tags accepted by [`FromStr`], in the same order as [`Self::ALL`].
    pub const NAMES: [&'static str; 4] = ["md5", "sha1", "sha256", "sha512"];

    /// Lowercase tag used on disk and on the command line.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Md5 => "md5",
            Self::Sha1 => "sha1",
            Self::Sha256 => "sha256",
            Self::Sha512 => "sha512",
        }
    }

    /// Number of hex characters in a digest produced by this algorithm.
    pub const fn hex_len(self) -> usize {
        match self {
            Self::Md5 => 32,
            Self::Sha1 => 40,
            Self::Sha256 => 64,
            Self::Sha512 => 128,
        }
    }

    fn digest_bytes(self, bytes: &[u8]) -> String {
        match self {
            Self::Md5 => hex::encode(Md5::digest(bytes)),
            Self::Sha1 => hex::encode(Sha1::digest(bytes)),
            Self::Sha256 => hex::encode(Sha256::digest(bytes)),
            Self::Sha512 => hex::encode(Sha512::digest(bytes)),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Algorithm {
    type Err = HgError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|algo| algo.as_str() == s)
            .ok_or_else(|| HgError::UnsupportedAlgorithm {
                name: s.to_string(),
            })
    }
}

/// Compute the hex digest of `text` under `algorithm`.
pub fn compute_hash(text: &str, algorithm: Algorithm) -> String {
    let hash = algorithm.digest_bytes(text.as_bytes());
    trace!(%algorithm, bytes = text.len(), "Computed digest");
    hash
}

/// Compute a digest from an untyped algorithm tag.
///
/// Fails with [`HgError::UnsupportedAlgorithm`] when `name` is not one of
/// [`Algorithm::NAMES`].
pub fn compute_hash_named(text: &str, name: &str) -> Result<String> {
    let algorithm: Algorithm = name.parse()?;
    Ok(compute_hash(text, algorithm))
}

/// Compute the digest of `text` under every supported algorithm.
pub fn compute_all_hashes(text: &str) -> DigestSet {
    Algorithm::ALL
        .into_iter()
        .map(|algo| (algo, compute_hash(text, algo)))
        .collect()
}

/// Count characters the way snapshot lengths are recorded.
pub fn char_length(text: &str) -> usize {
    text.chars().count()
}
