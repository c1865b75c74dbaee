//! AI tools server entry point
//!
//! Loads configuration, then either serves the REST API, runs the heuristic
//! complexity analyzer on a local file, or validates the configuration.

use ai_tools_analyzer::report::analyze_fallback_with;
use ai_tools_api::{ApiServer, AppState};
use ai_tools_common::{ProgrammingLanguage, SystemConfig};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "ai-tools-server")]
#[command(version)]
#[command(about = "AI-assisted career and developer tools API")]
struct Cli {
    /// Path to configuration file; built-in defaults are used when absent
    #[arg(short, long, default_value = "config.toml")]
    config: PathBuf,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the API server (default)
    Serve {
        /// Host to bind to
        #[arg(long)]
        host: Option<String>,

        /// Port to bind to
        #[arg(long)]
        port: Option<u16>,
    },
    /// Run the heuristic complexity analyzer on a source file
    Analyze {
        /// Source file to analyze
        file: PathBuf,

        /// Language label used in the report
        #[arg(long, default_value = "javascript")]
        language: ProgrammingLanguage,
    },
    /// Validate configuration
    ValidateConfig,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = cli.log_level.as_deref().unwrap_or("info");
    ai_tools_common::init_tracing_with_level(log_level)?;

    let config = SystemConfig::load_or_default(&cli.config).map_err(|e| {
        error!("Failed to load configuration: {}", e);
        e
    })?;

    match cli.command {
        Some(Commands::ValidateConfig) => {
            println!("✓ Configuration is valid");
            println!("  Listen address: {}:{}", config.server.host, config.server.port);
            println!("  Model: {}", config.gemini.model);
            println!("  API key configured: {}", config.has_api_key());
            println!("  Heuristic fallback: {}", config.analyzer.fallback_enabled);
            println!();
            print!("{}", config.to_redacted_toml()?);
            Ok(())
        }
        Some(Commands::Analyze { file, language }) => analyze_file(&config, &file, language),
        Some(Commands::Serve { host, port }) => {
            let mut config = config;
            if let Some(h) = host {
                config.server.host = h;
            }
            if let Some(p) = port {
                config.server.port = p;
            }
            start_server(config).await
        }
        None => start_server(config).await,
    }
}

/// Analyze a local file with the heuristic analyzer and print the report.
fn analyze_file(
    config: &SystemConfig,
    file: &PathBuf,
    language: ProgrammingLanguage,
) -> Result<()> {
    let code = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;
    if code.trim().is_empty() {
        anyhow::bail!("{} is empty", file.display());
    }

    let report =
        analyze_fallback_with(&code, language.as_str(), config.analyzer.inference_strategy);
    info!(
        file = %file.display(),
        algorithm_type = %report.algorithm_analysis.algorithm_type,
        "Analysis complete"
    );
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

async fn start_server(config: SystemConfig) -> Result<()> {
    info!("Starting AI tools server on {}:{}", config.server.host, config.server.port);

    let state = AppState::from_config(config)?;
    ApiServer::new(state).run().await
}
