//! User settings loaded from `config.toml`.
//!
//! ```toml
//! # ~/.config/hashguard/config.toml
//! vault_path = "~/integrity/vault.json"
//! default_algorithm = "sha512"
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, info, instrument};

use super::path::{expand_home, resolve_path};
use crate::digest::Algorithm;
use crate::error::{HgError, Result};
use crate::snapshot::default_vault_path;

/// Settings file name inside the config directory.
pub const SETTINGS_FILE: &str = "config.toml";

/// Contents of the settings file. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// Vault location; relative paths are resolved against the settings file.
    #[serde(default)]
    pub vault_path: Option<PathBuf>,
    /// Algorithm used when a command does not pass `-a`.
    #[serde(default)]
    pub default_algorithm: Option<Algorithm>,
}

impl Settings {
    /// Parse settings from TOML text.
    pub fn from_toml(source: &str, path: &Path) -> Result<Self> {
        toml::from_str(source).map_err(|e| HgError::ConfigParse {
            path: path.to_path_buf(),
            reason: e.message().to_string(),
        })
    }

    /// Load settings from `path`. A missing file yields defaults.
    #[instrument(skip_all, fields(path = %path.display()))]
    pub fn load(path: &Path) -> Result<Self> {
        match fs::read_to_string(path) {
            Ok(source) => {
                let mut settings = Self::from_toml(&source, path)?;
                if let Some(vault) = settings.vault_path.take() {
                    let base = path.parent().unwrap_or_else(|| Path::new("."));
                    settings.vault_path = Some(resolve_path(&vault, base)?);
                }
                info!("Loaded settings");
                Ok(settings)
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("No settings file, using defaults");
                Ok(Self::default())
            }
            Err(e) => Err(HgError::Io(e)),
        }
    }
}

/// Returns the default settings path.
///
/// Location: `~/.config/hashguard/config.toml`
pub fn default_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("hashguard").join(SETTINGS_FILE))
}

/// Effective configuration after applying precedence rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub vault_path: PathBuf,
    pub default_algorithm: Algorithm,
}

/// Combine explicit overrides with settings and platform defaults.
pub fn resolve(vault_override: Option<&Path>, settings: &Settings) -> Result<ResolvedConfig> {
    let vault_path = resolve_vault(vault_override, settings)?;
    let default_algorithm = resolve_algorithm(None, settings);
    debug!(vault = %vault_path.display(), %default_algorithm, "Resolved configuration");
    Ok(ResolvedConfig {
        vault_path,
        default_algorithm,
    })
}

/// Vault: `vault_override` > settings > `~/.local/share/hashguard/hash_vault.json`.
pub fn resolve_vault(vault_override: Option<&Path>, settings: &Settings) -> Result<PathBuf> {
    match (vault_override, &settings.vault_path) {
        (Some(path), _) => Ok(expand_home(path)?.unwrap_or_else(|| path.to_path_buf())),
        (None, Some(path)) => Ok(path.clone()),
        (None, None) => default_vault_path(),
    }
}

/// Algorithm: `explicit` (`-a`) > settings > `sha256`. Never looks at the vault.
pub fn resolve_algorithm(explicit: Option<Algorithm>, settings: &Settings) -> Algorithm {
    explicit
        .or(settings.default_algorithm)
        .unwrap_or_default()
}
