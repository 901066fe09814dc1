//! figsync command-line interface
//!
//! Argument parsing, tracing setup and console output around the
//! `figsync-core` pipeline.

use clap::Parser;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

pub mod common;
pub mod sync;

/// Crates whose events a plain `FIGSYNC_LOG` level applies to
const LOG_TARGETS: &[&str] = &["figsync_core", "figsync_cli"];

const AFTER_HELP: &str = "\
Environment:
  FIGMA_ACCESS_TOKEN   Personal access token (required)
  FIGMA_FILE_KEY       File key when FILE_KEY is omitted
  COMPONENT_NAME       Component name when COMPONENT_NAME is omitted
  FIGSYNC_LOG          Log level or filter directive (default: warn)";

#[derive(Parser)]
#[command(
    name = "figsync",
    version,
    about = "\x1b[33mfigsync\x1b[0m generates React components from Figma component sets 🎨",
    after_help = AFTER_HELP
)]
struct Cli {
    #[command(flatten)]
    sync: sync::SyncArgs,
}

/// Build a runtime and run the CLI with `args` (including the program name).
pub fn run_cli(args: Vec<String>) -> i32 {
    let runtime = match tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(err) => {
            eprintln!("Failed to create tokio runtime: {err}");
            return 1;
        }
    };

    runtime.block_on(run(args))
}

/// Parse `args` and run. Returns the process exit code.
pub async fn run(args: Vec<String>) -> i32 {
    match Cli::try_parse_from(args) {
        Ok(cli) => sync::run(cli.sync).await,
        Err(e) => {
            let code = e.exit_code();
            let _ = e.print();
            code
        }
    }
}

/// Map a command result to an exit code, printing the error to stderr.
pub async fn run_cli_async<F, Fut>(f: F) -> i32
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<(), String>>,
{
    match f().await {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("❌ {err}");
            1
        }
    }
}

/// Install the stderr tracing subscriber.
///
/// FIGSYNC_LOG controls the level: "trace", "debug", "info", "warn", "error"
/// scoped to the figsync crates, or a full filter spec like
/// "figsync_core=debug,reqwest=info".
pub fn init_tracing() {
    let filter = log_filter(std::env::var("FIGSYNC_LOG").ok().as_deref());

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_file(true)
        .with_filter(EnvFilter::new(filter));

    if tracing_subscriber::registry()
        .with(fmt_layer)
        .try_init()
        .is_err()
    {
        eprintln!("Warning: tracing subscriber already initialized");
    }
}

fn log_filter(setting: Option<&str>) -> String {
    let scoped = |level: &str| {
        LOG_TARGETS
            .iter()
            .map(|target| format!("{target}={level}"))
            .collect::<Vec<_>>()
            .join(",")
    };

    match setting {
        Some(level) if is_plain_level(level) => scoped(&level.to_ascii_lowercase()),
        Some(spec) if !spec.trim().is_empty() => spec.to_string(),
        _ => scoped("warn"),
    }
}

fn is_plain_level(s: &str) -> bool {
    matches!(
        s.to_ascii_lowercase().as_str(),
        "trace" | "debug" | "info" | "warn" | "error"
    )
}
