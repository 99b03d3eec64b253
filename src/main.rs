//! hashguard - Text integrity checker.
//!
//! Provides both human-friendly and agent-friendly (robot mode) interfaces.
#![forbid(unsafe_code)]

use std::io::{self, IsTerminal};
use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use tracing::debug;

use hashguard::cli::{self, Cli, Commands, input};
use hashguard::config::{self, Settings};
use hashguard::digest::Algorithm;
use hashguard::error::Result;
use hashguard::logging;
use hashguard::output::{Output, OutputMode};
use hashguard::service::IntegrityService;
use hashguard::snapshot::Verification;

/// Build information embedded at compile time.
mod build_info {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");

    pub fn git_sha() -> &'static str {
        option_env!("VERGEN_GIT_SHA").unwrap_or("unknown")
    }

    pub fn build_timestamp() -> &'static str {
        option_env!("VERGEN_BUILD_TIMESTAMP").unwrap_or("unknown")
    }
}

/// Process exit status for a finished command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Status {
    Ok,
    /// Verify found a modification, or compare found different texts.
    Mismatch,
    /// Verify or delete named a label with no snapshot.
    Missing,
}

impl From<Status> for ExitCode {
    fn from(status: Status) -> Self {
        match status {
            Status::Ok => Self::SUCCESS,
            Status::Mismatch => Self::from(2),
            Status::Missing => Self::from(3),
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    logging::init_logging(cli.use_json(), cli.verbose, cli.quiet);

    // Handle no-color flag or non-TTY
    if cli.no_color || !io::stdout().is_terminal() {
        console::set_colors_enabled(false);
        console::set_colors_enabled_stderr(false);
    }

    let output = OutputMode::from_cli(&cli).into_output();

    match run(&cli, output.as_ref()) {
        Ok(status) => status.into(),
        Err(e) => {
            output.error(&e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli, out: &dyn Output) -> Result<Status> {
    match &cli.command {
        Commands::Hash(args) => cmd_hash(cli, out, args),
        Commands::Save(args) => cmd_save(cli, out, args),
        Commands::Verify(args) => cmd_verify(cli, out, args),
        Commands::Compare(args) => cmd_compare(cli, out, args),
        Commands::List => cmd_list(cli, out),
        Commands::Delete(args) => cmd_delete(cli, out, args),
        Commands::Version => {
            out.version_info(
                build_info::VERSION,
                build_info::git_sha(),
                build_info::build_timestamp(),
            );
            Ok(Status::Ok)
        }
        Commands::Completions(args) => {
            clap_complete::generate(args.shell, &mut Cli::command(), "hashguard", &mut io::stdout());
            Ok(Status::Ok)
        }
    }
}

// === Configuration ===

/// Read the settings file once per command.
fn load_settings(cli: &Cli) -> Result<Settings> {
    match cli.config.clone().or_else(config::default_settings_path) {
        Some(path) => Settings::load(&path),
        None => Ok(Settings::default()),
    }
}

fn open_service(cli: &Cli, settings: &Settings) -> Result<IntegrityService> {
    let vault = config::resolve_vault(cli.vault.as_deref(), settings)?;
    debug!(vault = %vault.display(), "Opening vault");
    Ok(IntegrityService::open(vault))
}

fn pick_algorithm(arg: Option<cli::AlgorithmArg>, settings: &Settings) -> Algorithm {
    config::resolve_algorithm(arg.map(Into::into), settings)
}

fn read_text(out: &dyn Output, args: &cli::TextArgs) -> Result<String> {
    if args.text.is_none() && args.file.is_none() && input::stdin_is_terminal() {
        out.warning("Reading text from stdin (end with Ctrl+D)");
    }
    args.read()
}

// === Command Implementations ===

fn cmd_hash(cli: &Cli, out: &dyn Output, args: &cli::HashArgs) -> Result<Status> {
    let text = read_text(out, &args.input)?;
    if args.all {
        out.all_hashes(&hashguard::compute_all_hashes(&text));
    } else {
        let algorithm = pick_algorithm(args.algorithm, &load_settings(cli)?);
        out.hash(algorithm, &hashguard::compute_hash(&text, algorithm));
    }
    Ok(Status::Ok)
}

fn cmd_save(cli: &Cli, out: &dyn Output, args: &cli::SaveArgs) -> Result<Status> {
    let settings = load_settings(cli)?;
    let algorithm = pick_algorithm(args.algorithm, &settings);
    let text = read_text(out, &args.input)?;
    let record = open_service(cli, &settings)?.save(&args.label, &text, algorithm)?;
    out.snapshot_saved(&record);
    Ok(Status::Ok)
}

fn cmd_verify(cli: &Cli, out: &dyn Output, args: &cli::VerifyArgs) -> Result<Status> {
    let text = read_text(out, &args.input)?;
    let result = open_service(cli, &load_settings(cli)?)?.verify(&args.label, &text)?;
    out.verification(&result);
    Ok(match result {
        Verification::Intact(_) => Status::Ok,
        Verification::Modified(_) => Status::Mismatch,
        Verification::NotFound { .. } => Status::Missing,
    })
}

fn cmd_compare(cli: &Cli, out: &dyn Output, args: &cli::CompareArgs) -> Result<Status> {
    let algorithm = pick_algorithm(args.algorithm, &load_settings(cli)?);
    let (text1, text2) = args.read_pair()?;
    let result = hashguard::compare_texts(&text1, &text2, algorithm);
    out.comparison(&result);
    Ok(if result.identical {
        Status::Ok
    } else {
        Status::Mismatch
    })
}

fn cmd_list(cli: &Cli, out: &dyn Output) -> Result<Status> {
    let records = open_service(cli, &load_settings(cli)?)?.list_snapshots()?;
    out.snapshot_list(&records);
    Ok(Status::Ok)
}

fn cmd_delete(cli: &Cli, out: &dyn Output, args: &cli::DeleteArgs) -> Result<Status> {
    let deleted = open_service(cli, &load_settings(cli)?)?.delete_snapshot(&args.label)?;
    out.snapshot_deleted(&args.label, deleted);
    Ok(if deleted { Status::Ok } else { Status::Missing })
}
