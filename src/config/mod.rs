//! Configuration for hashguard.
//!
//! Resolves where the snapshot vault lives and which algorithm commands use
//! by default, from command-line overrides, an optional `config.toml`, and
//! platform directories.

mod path;
mod settings;

pub use path::{expand_home, home_dir, resolve_path};
pub use settings::{
    ResolvedConfig, SETTINGS_FILE, Settings, default_settings_path, resolve, resolve_algorithm,
    resolve_vault,
};
