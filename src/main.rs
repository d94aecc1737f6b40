//! DevOps info service entry point.

use clap::{Parser, Subcommand};
use tracing::{debug, info};

use devops_info_service::api::AppState;
use devops_info_service::config::Config;
use devops_info_service::metrics;
use devops_info_service::server;
use devops_info_service::system::StartTime;
use devops_info_service::utils::{init_tracing, shutdown_signal};

/// DevOps info service.
#[derive(Parser, Debug)]
#[command(name = "devops-info-service")]
#[command(about = "HTTP service reporting service, system and runtime metadata")]
#[command(version)]
struct Args {
    #[command(subcommand)]
    command: Option<Command>,

    /// Bind host (overrides HOST).
    #[arg(long, global = true)]
    host: Option<String>,

    /// Bind port (overrides PORT).
    #[arg(short, long, global = true)]
    port: Option<u16>,

    /// Enable debug logging (overrides DEBUG).
    #[arg(short, long, global = true)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Serve the HTTP API (default).
    Run,

    /// Check configuration validity.
    CheckConfig,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let start_time = StartTime::now();
    let args = Args::parse();

    let mut config = Config::load()?;
    if let Some(host) = args.host {
        config.host = host;
    }
    if let Some(port) = args.port {
        config.port = port;
    }
    if args.debug {
        config.debug = true;
    }

    match args.command {
        Some(Command::CheckConfig) => cmd_check_config(&config),
        Some(Command::Run) | None => cmd_run(config, start_time).await,
    }
}

/// Check configuration validity.
fn cmd_check_config(config: &Config) -> anyhow::Result<()> {
    println!("======================================================================");
    println!("DEVOPS INFO SERVICE - CONFIGURATION CHECK");
    println!("======================================================================");

    print!("Validating configuration... ");
    if let Err(e) = config.validate() {
        println!("FAILED");
        println!("  Error: {}", e);
        return Err(anyhow::anyhow!("Configuration validation failed"));
    }
    println!("OK");

    println!("----------------------------------------------------------------------");
    println!("Configuration Summary:");
    println!("  Bind Address: {}", config.bind_addr());
    println!("  Log Level: {}", config.effective_log_level()?);
    println!("  Log Format: {}", config.output_format()?);
    println!("  Debug: {}", config.debug);
    println!("======================================================================");
    println!("CONFIGURATION CHECK PASSED");
    println!("======================================================================");

    Ok(())
}

/// Serve the HTTP API until a shutdown signal arrives.
async fn cmd_run(config: Config, start_time: StartTime) -> anyhow::Result<()> {
    config
        .validate()
        .map_err(|e| anyhow::anyhow!("Configuration validation failed: {}", e))?;

    init_tracing(&config)?;
    metrics::init_metrics();

    info!("Starting DevOps Info Service...");
    if config.debug {
        debug!("Debug mode enabled");
    }
    info!(
        "Running on {}:{} (debug={})",
        config.host, config.port, config.debug
    );

    let listener = server::bind(&config).await?;
    let state = AppState::new(start_time);

    server::serve(listener, state, shutdown_signal()).await?;
    Ok(())
}
