use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(name = "tenant-router")]
#[command(about = "Hostname-based tenant routing in front of an app server", long_about = None)]
struct Cli {
    /// TOML configuration file. Defaults apply when omitted.
    #[arg(short, long, env = "TENANT_ROUTER_CONFIG")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    tenant_router::lifecycle::startup::run(cli.config.as_deref()).await?;
    Ok(())
}
