//! Custom assertion helpers for tests.
#![allow(dead_code)]

use tracing::error;

#[must_use]
pub fn assert_json_has_fields(json_str: &str, fields: &[&str]) -> serde_json::Value {
    let value: serde_json::Value =
        serde_json::from_str(json_str).expect("invalid JSON payload");
    for field in fields {
        if value.get(field).is_none() {
            error!(field, json = %value, "Missing expected JSON field");
            panic!("Missing JSON field: {field}");
        }
    }
    value
}

pub fn assert_no_ansi(output: &str) {
    if output.contains("\u{1b}[") {
        error!("ANSI escape sequence detected");
        panic!("Expected no ANSI escape sequences");
    }
}

pub fn assert_contains_all(output: &str, expected: &[&str]) {
    for needle in expected {
        if !output.contains(needle) {
            error!(needle, "Missing expected substring");
            panic!("Missing expected substring: {needle}\nActual output:\n{output}");
        }
    }
}

/// Assert `value` is a lowercase hex string of `len` characters.
pub fn assert_hex_digest(value: &str, len: usize) {
    assert_eq!(value.len(), len, "digest {value} has wrong length");
    assert!(
        value.chars().all(|c| matches!(c, '0'..='9' | 'a'..='f')),
        "digest {value} is not lowercase hex"
    );
}
