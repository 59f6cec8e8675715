use anyhow::Result;
use clap::Parser;
use tracing::{info, warn};

use admin_infrastructure::AppConfig;

#[derive(Parser, Debug)]
#[command(name = "admin-dashboard")]
#[command(about = "Admin Dashboard Server", long_about = None)]
struct Args {
    /// Path to config file
    #[arg(short, long)]
    config: Option<String>,

    /// Address to listen on, overrides the config file
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    if let Some(config) = args.config {
        std::env::set_var("ADMIN_CONFIG", config);
    }
    if let Some(bind) = args.bind {
        std::env::set_var("ADMIN_BIND_ADDR", bind);
    }

    let config = AppConfig::load().await?;
    admin_bootstrap::telemetry::init(config.log_dir.as_deref(), &config.log_format)?;
    match &config.loaded_from {
        Some(path) => info!("loaded config from {}", path),
        None => warn!("config file not found, using defaults"),
    }

    admin_bootstrap::run_standalone(config).await
}
