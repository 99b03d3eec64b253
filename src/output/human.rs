//! Human-friendly output implementation using console styles.
//!
//! Every renderer builds a `String` first so the layout can be tested
//! without a terminal. Colors follow `console`'s global switch, which
//! `main` turns off for `--no-color`, `NO_COLOR`, and non-TTY stdout.

use std::fmt::Write as _;

use tracing::{debug, instrument};

use crate::digest::{Algorithm, DigestSet};
use crate::error::HgError;
use crate::snapshot::{Comparison, SnapshotRecord, Verification, VerifyReport};
use crate::theme::HgTheme;

use super::Output;

/// Styled terminal output implementation for human users.
pub struct HumanOutput {
    theme: HgTheme,
}

impl Default for HumanOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl HumanOutput {
    pub fn new() -> Self {
        Self {
            theme: HgTheme::default(),
        }
    }

    fn field(&self, out: &mut String, name: &str, value: impl std::fmt::Display) {
        let _ = writeln!(
            out,
            "  {} : {value}",
            self.theme.label.apply_to(format!("{name:<15}"))
        );
    }

    pub fn render_hash(&self, algorithm: Algorithm, hash: &str) -> String {
        format!(
            "\n  {}: {}\n",
            self.theme.algorithm.apply_to(algorithm),
            self.theme.value.apply_to(hash)
        )
    }

    pub fn render_all_hashes(&self, hashes: &DigestSet) -> String {
        let mut out = format!("\n{}\n", self.theme.header.apply_to("Hashes for input text:"));
        for (algo, hash) in hashes {
            let _ = writeln!(
                out,
                "  {} {hash}",
                self.theme.algorithm.apply_to(format!("{:<8}", algo.as_str()))
            );
        }
        out
    }

    pub fn render_saved(&self, record: &SnapshotRecord) -> String {
        let mut out = format!("\n  {}\n", self.theme.success.apply_to("[OK] Snapshot saved"));
        self.field(&mut out, "Label", self.theme.value.apply_to(&record.label));
        self.field(&mut out, "Algorithm", record.algorithm);
        self.field(&mut out, "Hash", &record.hash);
        self.field(&mut out, "Length", format_args!("{} chars", record.length));
        self.field(&mut out, "Saved at", &record.timestamp);
        out
    }

    pub fn render_verification(&self, result: &Verification) -> String {
        let (headline, report) = match result {
            Verification::NotFound { message, .. } => {
                return format!("\n  {}\n", self.theme.warning.apply_to(format!("[WARN] {message}")));
            }
            Verification::Intact(report) => (
                self.theme.success.apply_to("[INTACT] Text has NOT been modified."),
                report,
            ),
            Verification::Modified(report) => (
                self.theme.error.apply_to("[MODIFIED] Text has been modified since the snapshot."),
                report,
            ),
        };
        let mut out = format!("\n  {headline}\n\n");
        out.push_str(&self.report_fields(report));
        out
    }

    fn report_fields(&self, report: &VerifyReport) -> String {
        let mut out = String::new();
        self.field(&mut out, "Label", &report.label);
        self.field(&mut out, "Algorithm", report.algorithm);
        self.field(&mut out, "Original hash", self.theme.hash.apply_to(&report.original_hash));
        self.field(&mut out, "Current hash", self.theme.hash.apply_to(&report.current_hash));
        self.field(&mut out, "Original length", format_args!("{} chars", report.original_length));
        self.field(&mut out, "Current length", format_args!("{} chars", report.current_length));
        self.field(&mut out, "Snapshot date", &report.saved_at);
        out
    }

    pub fn render_comparison(&self, result: &Comparison) -> String {
        let headline = if result.identical {
            self.theme.success.apply_to("[IDENTICAL] Both texts are the same.")
        } else {
            self.theme.error.apply_to("[DIFFERENT] Texts do not match.")
        };
        let mut out = format!("\n  {headline}\n\n");
        self.field(&mut out, "Algorithm", result.algorithm);
        self.field(&mut out, "Hash 1", &result.hash_1);
        self.field(&mut out, "Hash 2", &result.hash_2);
        self.field(&mut out, "Length 1", format_args!("{} chars", result.length_1));
        self.field(&mut out, "Length 2", format_args!("{} chars", result.length_2));
        out
    }

    pub fn render_list(&self, records: &[SnapshotRecord]) -> String {
        if records.is_empty() {
            return format!("\n  {}\n", self.theme.warning.apply_to("No snapshots saved yet."));
        }
        let mut out = format!(
            "\n  {}\n",
            self.theme.header.apply_to(format!("Saved Snapshots ({})", records.len()))
        );
        let _ = writeln!(out, "  {:<20} {:<10} {:<26} Hash", "Label", "Algorithm", "Saved At");
        let _ = writeln!(out, "  {}", "-".repeat(85));
        for record in records {
            let _ = writeln!(
                out,
                "  {:<20} {:<10} {:<26} {}",
                record.label,
                record.algorithm.as_str(),
                record.timestamp,
                self.theme.hash.apply_to(format!("{}...", record.short_hash()))
            );
        }
        out
    }

    pub fn render_deleted(&self, label: &str, deleted: bool) -> String {
        if deleted {
            format!(
                "\n  {}\n",
                self.theme.success.apply_to(format!("[OK] Snapshot '{label}' deleted."))
            )
        } else {
            format!(
                "\n  {}\n",
                self.theme.warning.apply_to(format!("[WARN] Snapshot '{label}' not found."))
            )
        }
    }

    pub fn render_error(&self, error: &HgError) -> String {
        let mut out = format!("{}: {error}", self.theme.error.apply_to("Error"));
        if let Some(suggestion) = error.suggestion() {
            let _ = write!(out, "\n{}: {suggestion}", self.theme.warning.apply_to("Hint"));
        }
        out
    }
}

impl Output for HumanOutput {
    #[instrument(skip(self))]
    fn error(&self, error: &HgError) {
        debug!(
            error = %error,
            recoverable = error.is_user_recoverable(),
            "Outputting error"
        );
        eprintln!("{}", self.render_error(error));
    }

    fn warning(&self, message: &str) {
        eprintln!("{}", self.theme.warning.apply_to(format!("[WARN] {message}")));
    }

    fn hash(&self, algorithm: Algorithm, hash: &str) {
        println!("{}", self.render_hash(algorithm, hash));
    }

    fn all_hashes(&self, hashes: &DigestSet) {
        println!("{}", self.render_all_hashes(hashes));
    }

    fn snapshot_saved(&self, record: &SnapshotRecord) {
        println!("{}", self.render_saved(record));
    }

    fn verification(&self, result: &Verification) {
        debug!(status = result.status(), "Outputting verification");
        println!("{}", self.render_verification(result));
    }

    fn comparison(&self, result: &Comparison) {
        println!("{}", self.render_comparison(result));
    }

    fn snapshot_list(&self, records: &[SnapshotRecord]) {
        println!("{}", self.render_list(records));
    }

    fn snapshot_deleted(&self, label: &str, deleted: bool) {
        println!("{}", self.render_deleted(label, deleted));
    }

    fn version_info(&self, version: &str, git_sha: &str, build_time: &str) {
        let mut out = format!("{} {version}\n", self.theme.header.apply_to("hashguard"));
        self.field(&mut out, "Git SHA", git_sha);
        self.field(&mut out, "Built", build_time);
        println!("{out}");
    }
}
