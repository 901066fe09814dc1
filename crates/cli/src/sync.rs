//! The sync command: generate one React component from a Figma component set.

use clap::Args;
use console::style;
use figsync_core::{Config, ConfigInput, EnvSource, WriteOutcome, generate, sync_component};
use std::path::PathBuf;
use std::time::Instant;
use tracing::debug;

use crate::common::{format_elapsed_ms, spinner};
use crate::run_cli_async;

/// Arguments of a sync run
#[derive(Args, Debug, Clone)]
pub struct SyncArgs {
    /// Figma file key [fallback: FIGMA_FILE_KEY]
    #[arg(value_name = "FILE_KEY")]
    pub file_key: Option<String>,

    /// Component set name, matched exactly [fallback: COMPONENT_NAME]
    #[arg(value_name = "COMPONENT_NAME")]
    pub component_name: Option<String>,

    /// Directory to write the component to [default: src/components, env: FIGSYNC_OUT_DIR]
    #[arg(long, value_name = "DIR")]
    pub out_dir: Option<PathBuf>,

    /// Figma API base URL [default: https://api.figma.com, env: FIGMA_API_BASE]
    #[arg(long, value_name = "URL")]
    pub api_base: Option<String>,

    /// Print the generated source instead of writing it
    #[arg(long)]
    pub dry_run: bool,

    /// Dotenv file consulted after the process environment [default: .env]
    #[arg(long, value_name = "PATH")]
    pub env_file: Option<PathBuf>,
}

impl SyncArgs {
    fn config_input(&self) -> ConfigInput {
        ConfigInput {
            file_key: self.file_key.clone(),
            component_name: self.component_name.clone(),
            api_base: self.api_base.clone(),
            out_dir: self.out_dir.clone(),
        }
    }
}

/// Run the command and map the result to an exit code.
pub async fn run(args: SyncArgs) -> i32 {
    run_cli_async(|| run_inner(args)).await
}

/// CLI handler for a sync run. Handles console output around the core pipeline.
pub async fn run_inner(args: SyncArgs) -> Result<(), String> {
    let start_time = Instant::now();

    let env = EnvSource::load(args.env_file.as_deref()).map_err(|e| e.to_string())?;
    let config = Config::resolve(args.config_input(), &env).map_err(|e| e.to_string())?;
    let client = reqwest::Client::new();

    debug!(
        dry_run = args.dry_run,
        env_file = ?args.env_file,
        "Starting sync"
    );

    if args.dry_run {
        let fetch_spinner = spinner("🔍 Fetching Figma file...");
        let result = generate(&client, &config).await;
        fetch_spinner.finish_and_clear();

        let generated = result.map_err(|e| e.to_string())?;
        print!("{}", generated.source);
        return Ok(());
    }

    println!(
        "✨ Syncing component {} from file {}",
        style(&config.component_name).yellow(),
        style(&config.file_key).dim()
    );

    let fetch_spinner = spinner("🔍 Fetching Figma file...");
    let result = sync_component(&client, &config).await;
    fetch_spinner.finish_and_clear();

    let report = result.map_err(|e| e.to_string())?;

    let verb = match report.outcome {
        WriteOutcome::Created => "Created",
        WriteOutcome::Updated => "Updated",
        WriteOutcome::Unchanged => "Unchanged",
    };
    println!(
        "📄 {verb} {} ({} {})",
        report.path.display(),
        report.property_count,
        if report.property_count == 1 {
            "property"
        } else {
            "properties"
        }
    );
    println!("🎉 Done in {}", format_elapsed_ms(start_time));

    Ok(())
}
