//! Settings file loading and vault/algorithm precedence.

use std::fs;

use hashguard::Algorithm;
use hashguard::config::{self, Settings};

use crate::common::fixtures::Workspace;

#[test]
fn settings_file_picks_vault_and_algorithm() {
    let ws = Workspace::new();
    let path = ws.write_text(
        "config.toml",
        "vault_path = \"data/vault.json\"\ndefault_algorithm = \"md5\"\n",
    );

    let settings = Settings::load(&path).unwrap();
    let resolved = config::resolve(None, &settings).unwrap();
    assert_eq!(resolved.vault_path, ws.path().join("data/vault.json"));
    assert_eq!(resolved.default_algorithm, Algorithm::Md5);
}

#[test]
fn explicit_vault_overrides_settings() {
    let ws = Workspace::new();
    let path = ws.write_text("config.toml", "vault_path = \"/elsewhere/vault.json\"\n");
    let settings = Settings::load(&path).unwrap();

    let explicit = ws.path().join("mine.json");
    let resolved = config::resolve(Some(&explicit), &settings).unwrap();
    assert_eq!(resolved.vault_path, explicit);
    assert_eq!(resolved.default_algorithm, Algorithm::Sha256);
}

#[test]
fn broken_settings_file_is_a_parse_error() {
    let ws = Workspace::new();
    let path = ws.path().join("config.toml");
    fs::write(&path, "vault_path = [").unwrap();
    let err = Settings::load(&path).unwrap_err();
    assert_eq!(err.kind(), "config_parse");
    assert!(err.is_user_recoverable());
}

#[test]
fn algorithm_resolves_without_a_vault_location() {
    let ws = Workspace::new();
    let path = ws.write_text("config.toml", "default_algorithm = \"sha1\"\n");
    let settings = Settings::load(&path).unwrap();

    assert_eq!(config::resolve_algorithm(None, &settings), Algorithm::Sha1);
    assert_eq!(
        config::resolve_algorithm(Some(Algorithm::Sha512), &settings),
        Algorithm::Sha512
    );
}
