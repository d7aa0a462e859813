//! Command-line interface for the tic-tac-toe server.

use clap::Parser;
use std::path::PathBuf;
use tictactoe_server::ConfigOverrides;

/// Tic-tac-toe server - one shared board over HTTP
#[derive(Parser, Debug)]
#[command(name = "tictactoe_server")]
#[command(about = "Serve a single shared tic-tac-toe board over HTTP", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Host to bind to [default: 127.0.0.1]
    #[arg(long)]
    pub host: Option<String>,

    /// Port to bind to [default: 8000]
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Directory with the front-end files [default: static]
    #[arg(long)]
    pub static_dir: Option<PathBuf>,
}

impl Cli {
    /// Flags given explicitly, to layer over the config file.
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides::new(self.host.clone(), self.port, self.static_dir.clone())
    }
}
