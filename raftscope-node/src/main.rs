// src/main.rs

//! Raftscope node facade binary entry point.

use anyhow::Result;
use clap::Parser;
use raftscope_node::{AppState, HttpServer, NodeConfig, NodeFacade};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Raftscope CLI
#[derive(Parser)]
#[command(name = "raftscope-node")]
#[command(about = "REST facade over a Quorum node's JSON-RPC interface", long_about = None)]
struct Cli {
    /// JSON configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Node JSON-RPC endpoint
    #[arg(long)]
    rpc_url: Option<String>,

    /// Facade listen address
    #[arg(long)]
    listen_addr: Option<SocketAddr>,

    /// Properties file with CURRENT_IP and RPC_PORT
    #[arg(long)]
    setup_conf: Option<PathBuf>,

    /// Directory holding the node's start_*.sh script
    #[arg(long)]
    scripts_dir: Option<PathBuf>,

    /// Genesis file
    #[arg(long)]
    genesis: Option<PathBuf>,
}

impl Cli {
    fn into_config(self) -> Result<NodeConfig> {
        let mut config = match &self.config {
            Some(path) => NodeConfig::from_file(path)?,
            None => NodeConfig::default(),
        };

        if let Some(url) = self.rpc_url {
            config.rpc.url = url;
        }
        if let Some(addr) = self.listen_addr {
            config.server.listen_addr = addr;
        }
        if let Some(path) = self.setup_conf {
            config.node_files.setup_conf = path;
        }
        if let Some(path) = self.scripts_dir {
            config.node_files.scripts_dir = path;
        }
        if let Some(path) = self.genesis {
            config.node_files.genesis = path;
        }

        Ok(config)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("🚀 Raftscope Node Facade");
    info!("Version: {}", raftscope_node::NODE_VERSION);

    let config = Cli::parse().into_config()?;
    info!("Upstream node: {}", config.rpc.url);

    let state = AppState {
        facade: Arc::new(NodeFacade::from_config(&config)?),
        local_failure: config.local_failure,
    };

    HttpServer::new(config.server.listen_addr, state).start().await?;

    Ok(())
}
