use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use serde::Serialize;

use tenant_router::config::{load_config, load_default, RouterConfig};
use tenant_router::routing::{Decision, RequestTarget, TenantRouter};

#[derive(Parser)]
#[command(name = "tenant-cli")]
#[command(about = "Offline tools for the tenant router", long_about = None)]
struct Cli {
    /// TOML configuration file. Defaults apply when omitted.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show how a request would be routed
    Explain {
        /// Host header, optionally with a port
        #[arg(long)]
        host: String,

        /// Request path
        #[arg(long, default_value = "/")]
        path: String,

        /// Full request URL (defaults to http://<host><path>)
        #[arg(long)]
        url: Option<String>,
    },
    /// Validate a configuration and print it with defaults filled in
    Check,
}

#[derive(Serialize)]
struct Explanation {
    request: RequestTarget,
    excluded: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    decision: Option<Decision>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = load(cli.config.as_deref())?;

    match cli.command {
        Commands::Explain { host, path, url } => {
            let router = TenantRouter::from_config(&config);
            let request = match url {
                Some(url) => RequestTarget::new(url, host, path),
                None => RequestTarget::from_host_and_path(&host, &path),
            };
            let excluded = router.is_excluded(&request.path);
            let decision = (!excluded).then(|| router.route(&request));
            let explanation = Explanation {
                request,
                excluded,
                decision,
            };
            println!("{}", serde_json::to_string_pretty(&explanation)?);
        }
        Commands::Check => {
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
    }

    Ok(())
}

fn load(path: Option<&Path>) -> Result<RouterConfig, Box<dyn std::error::Error>> {
    Ok(match path {
        Some(path) => load_config(path)?,
        None => load_default()?,
    })
}
