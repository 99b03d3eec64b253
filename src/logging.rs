//! Structured logging initialization for the hashguard CLI.
//!
//! Logs always go to stderr so that stdout carries only command results,
//! which keeps robot-mode JSON parseable.

use std::io::{self, IsTerminal};

use tracing_subscriber::{
    EnvFilter, Layer, Registry,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

/// How log lines are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// JSON lines for machine consumption.
    Json,
    /// Colored output for interactive terminals.
    Pretty,
    /// Plain compact lines for pipes and redirects.
    Compact,
}

impl LogFormat {
    /// Pick the format for the current process.
    pub fn detect(robot_mode: bool) -> Self {
        if robot_mode {
            Self::Json
        } else if io::stderr().is_terminal() {
            Self::Pretty
        } else {
            Self::Compact
        }
    }
}

/// Initialize the tracing subscriber based on CLI flags and environment.
///
/// # Arguments
///
/// * `robot_mode` - If true, output structured JSON logs for machine consumption
/// * `verbose` - Verbosity level: 0 = warn, 1 = info, 2 = debug, 3+ = trace
/// * `quiet` - If true, only errors are logged
///
/// # Environment Variables
///
/// * `RUST_LOG` - Override default filter (e.g., "hashguard=trace")
///
/// Calling this more than once is harmless; later calls are ignored.
pub fn init_logging(robot_mode: bool, verbose: u8, quiet: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose, quiet)));

    let _ = tracing_subscriber::registry()
        .with(fmt_layer(LogFormat::detect(robot_mode)))
        .with(filter)
        .try_init();
}

fn fmt_layer(format: LogFormat) -> Box<dyn Layer<Registry> + Send + Sync> {
    let base = fmt::layer()
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_span_events(FmtSpan::NONE)
        .with_writer(io::stderr);

    match format {
        LogFormat::Json => base.json().with_target(true).boxed(),
        LogFormat::Pretty => base.with_target(false).boxed(),
        LogFormat::Compact => base.with_ansi(false).with_target(false).compact().boxed(),
    }
}

/// Filter directive for the given verbosity flags.
///
/// Results are printed on stdout, so the default level stays at `warn` to
/// keep stderr quiet for ordinary runs.
pub const fn default_directive(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        return "hashguard=error";
    }
    match verbose {
        0 => "hashguard=warn",
        1 => "hashguard=info",
        2 => "hashguard=debug",
        _ => "hashguard=trace",
    }
}
