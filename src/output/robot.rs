//! Robot mode JSON output implementation.

use serde::Serialize;
use serde_json::{Value, json};
use tracing::{debug, instrument, trace, warn};

use crate::digest::{Algorithm, DigestSet};
use crate::error::HgError;
use crate::snapshot::{Comparison, SnapshotRecord, Verification};

use super::{Output, RobotFormat};

/// JSON output implementation for AI agents and scripting.
///
/// Results go to stdout, errors and warnings to stderr.
pub struct RobotOutput {
    format: RobotFormat,
}

impl RobotOutput {
    pub const fn new(format: RobotFormat) -> Self {
        Self { format }
    }

    /// Serialize `data` in the configured format.
    pub fn render<T: Serialize + ?Sized>(&self, data: &T) -> String {
        let json = match self.format {
            RobotFormat::Json => serde_json::to_string_pretty(data),
            RobotFormat::JsonCompact => serde_json::to_string(data),
        };
        json.unwrap_or_else(|e| {
            warn!(error = %e, "JSON serialization failed");
            json!({ "error": true, "message": e.to_string() }).to_string()
        })
    }

    fn output_json<T: Serialize + ?Sized>(&self, data: &T) {
        let json = self.render(data);
        trace!(json_len = json.len(), "JSON serialized");
        println!("{json}");
    }
}

/// JSON body describing an error.
pub fn error_value(error: &HgError) -> Value {
    json!({
        "error": true,
        "kind": error.kind(),
        "message": error.to_string(),
        "suggestion": error.suggestion(),
        "recoverable": error.is_user_recoverable(),
    })
}

impl Output for RobotOutput {
    #[instrument(skip(self))]
    fn error(&self, error: &HgError) {
        debug!(error = %error, "Robot: error");
        eprintln!("{}", self.render(&error_value(error)));
    }

    fn warning(&self, message: &str) {
        debug!(message, "Robot: warning");
        eprintln!("{}", self.render(&json!({ "warning": true, "message": message })));
    }

    fn hash(&self, algorithm: Algorithm, hash: &str) {
        self.output_json(&json!({ "algorithm": algorithm, "hash": hash }));
    }

    fn all_hashes(&self, hashes: &DigestSet) {
        self.output_json(hashes);
    }

    fn snapshot_saved(&self, record: &SnapshotRecord) {
        debug!(label = %record.label, "Robot: snapshot_saved");
        self.output_json(record);
    }

    fn verification(&self, result: &Verification) {
        debug!(status = result.status(), "Robot: verification");
        self.output_json(result);
    }

    fn comparison(&self, result: &Comparison) {
        self.output_json(result);
    }

    fn snapshot_list(&self, records: &[SnapshotRecord]) {
        debug!(count = records.len(), "Robot: snapshot_list");
        self.output_json(records);
    }

    fn snapshot_deleted(&self, label: &str, deleted: bool) {
        self.output_json(&json!({ "label": label, "deleted": deleted }));
    }

    fn version_info(&self, version: &str, git_sha: &str, build_time: &str) {
        self.output_json(&json!({
            "version": version,
            "git_sha": git_sha,
            "build_time": build_time,
        }));
    }
}
