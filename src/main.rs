//! gristctl-scim - SCIM bulk provisioning for Grist
//!
//! Reads a SCIM bulk request, runs it against the configured Grist server and
//! prints the bulk response on stdout.

use anyhow::Context;
use clap::{ArgAction, Parser, Subcommand};
use gristctl_scim::utils::logging::{LogFormat, init_logger};
use gristctl_scim::utils::mask_secret;
use gristctl_scim::{BulkProcessor, Config, build_info};
use std::path::PathBuf;
use std::process::ExitCode;
use tokio::io::AsyncReadExt;
use tracing::info;

#[derive(Parser)]
#[command(name = "gristctl-scim")]
#[command(about = "SCIM bulk provisioning client for Grist")]
#[command(version)]
struct Cli {
    /// Grist server URL (overrides GRIST_URL and ~/.gristctl)
    #[arg(long, global = true)]
    url: Option<String>,
    /// Grist API token (overrides GRIST_TOKEN and ~/.gristctl)
    #[arg(long, global = true)]
    token: Option<String>,
    /// SCIM API path relative to the server URL
    #[arg(long, global = true)]
    scim_path: Option<String>,
    /// Log output format: text or json
    #[arg(long, global = true, env = "GRISTCTL_LOG_FORMAT", default_value = "text")]
    log_format: LogFormat,
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a SCIM bulk request read from FILE, or stdin when FILE is absent or "-"
    Bulk {
        file: Option<PathBuf>,
        /// Pretty-print the JSON response
        #[arg(long, default_value_t = false)]
        pretty: bool,
    },
    /// Show the resolved connection settings
    Config,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let directive = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    if let Err(e) = init_logger(directive, cli.log_format) {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }

    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let config = Config::load_with_overrides(cli.url, cli.token, cli.scim_path)?;

    match cli.command {
        Commands::Bulk { file, pretty } => {
            let text = read_input(file.as_ref()).await?;
            let processor = BulkProcessor::from_config(&config)?;
            info!("Sending bulk request to {}", processor.base_url());

            let outcome = processor.process_text(&text).await;
            let rendered = if pretty {
                serde_json::to_string_pretty(&outcome.response)?
            } else {
                serde_json::to_string(&outcome.response)?
            };
            println!("{}", rendered);

            info!(
                status = outcome.status.as_u16(),
                failed = outcome.failed_operations(),
                "Bulk request finished"
            );
            Ok(if outcome.is_success() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
        Commands::Config => {
            println!("version:    {}", build_info());
            println!("url:        {}", config.url);
            println!("scim base:  {}", config.scim_base_url());
            println!("token:      {}", mask_secret(&config.token));
            println!("timeout:    {}s", config.timeout_secs);
            Ok(ExitCode::SUCCESS)
        }
    }
}

async fn read_input(file: Option<&PathBuf>) -> anyhow::Result<String> {
    match file {
        Some(path) if path.as_os_str() != "-" => tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read {}", path.display())),
        _ => {
            let mut text = String::new();
            tokio::io::stdin()
                .read_to_string(&mut text)
                .await
                .context("Failed to read bulk request from stdin")?;
            Ok(text)
        }
    }
}
