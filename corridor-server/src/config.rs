//! Server configuration: CLI flags with an optional TOML file
//! fallback. Flags win over file values.

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;
use serde::Deserialize;

const DEFAULT_ADDR: &str = "127.0.0.1:3000";

#[derive(Debug, Parser)]
#[command(
    name = "corridor-server",
    about = "HTTP frontend for the corridor indoor wayfinding core"
)]
pub struct Cli {
    /// Directory containing floorplan JSON documents
    #[arg(long)]
    pub data_dir: Option<PathBuf>,

    /// Address to bind
    #[arg(long)]
    pub addr: Option<SocketAddr>,

    /// TOML configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct FileConfig {
    data_dir: Option<PathBuf>,
    addr: Option<SocketAddr>,
}

#[derive(Debug)]
pub struct ServerConfig {
    pub data_dir: PathBuf,
    pub addr: SocketAddr,
}

impl Cli {
    pub fn resolve(self) -> Result<ServerConfig, Box<dyn std::error::Error>> {
        let file = match &self.config {
            Some(path) => {
                let text = std::fs::read_to_string(path)?;
                toml::from_str::<FileConfig>(&text)?
            }
            None => FileConfig::default(),
        };

        let data_dir = self
            .data_dir
            .or(file.data_dir)
            .ok_or("No data directory given (--data-dir or \"data_dir\" in the config file)")?;
        let addr = match self.addr.or(file.addr) {
            Some(addr) => addr,
            None => DEFAULT_ADDR.parse()?,
        };

        Ok(ServerConfig { data_dir, addr })
    }
}
