//! Gateway configuration tool.
//!
//! Loads a gateway config the same way the gateway does at startup and
//! reports on it:
//!
//! ```text
//! gateway-config check   config.json
//! gateway-config show    config.json --pretty
//! gateway-config resolve config.json V1 /users
//! ```

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use gateway_config::config::{load_config_async, Config};
use gateway_config::observability::init_logging;

#[derive(Parser)]
#[command(name = "gateway-config")]
#[command(about = "Load and inspect API gateway configuration", long_about = None)]
struct Cli {
    /// Default log level when RUST_LOG is unset.
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load the config and report whether it is usable
    Check { path: PathBuf },
    /// Print the normalized config as JSON
    Show {
        path: PathBuf,
        #[arg(long)]
        pretty: bool,
    },
    /// Resolve the backend URL for a version and path prefix
    Resolve {
        path: PathBuf,
        version: String,
        prefix: String,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    match run(cli.command).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "gateway-config failed");
            ExitCode::FAILURE
        }
    }
}

async fn run(command: Commands) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Commands::Check { path } => {
            let config = load(&path).await?;
            tracing::info!(
                port = %config.port,
                scheme = %config.scheme,
                versions = config.versions.len(),
                fallback = config.has_fallback(),
                "Configuration OK"
            );
        }
        Commands::Show { path, pretty } => {
            let config = load(&path).await?;
            let out = if pretty {
                serde_json::to_string_pretty(&config)?
            } else {
                serde_json::to_string(&config)?
            };
            println!("{}", out);
        }
        Commands::Resolve { path, version, prefix } => {
            let config = load(&path).await?;
            match config.backend(&version, &prefix) {
                Some(host) => println!("{}://{}", config.scheme, host),
                None => {
                    tracing::warn!(%version, %prefix, "No backend mapped");
                    println!("{}", serde_json::to_string(&config.not_found_response)?);
                }
            }
        }
    }

    Ok(())
}

async fn load(path: &Path) -> Result<Config, Box<dyn std::error::Error>> {
    let config = load_config_async(path)
        .await
        .map_err(|e| format!("{}: {}", path.display(), e))?;
    tracing::debug!(path = %path.display(), "Configuration loaded");
    Ok(config)
}
