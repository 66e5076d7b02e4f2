use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;
use std::path::PathBuf;

const DEFAULT_PORT: &str = "8080";

#[derive(Debug, Clone, Parser)]
#[command(name = "echo-server")]
#[command(about = "HTTP server that echoes request bodies back to callers")]
pub struct ServerConfig {
    /// Socket address to listen on (overrides the PORT environment variable)
    #[arg(long)]
    pub addr: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ServerConfig {
    /// Resolves the listen address: `--addr` wins, then `PORT`, then port 8080.
    pub fn listen_addr(&self) -> String {
        if let Some(addr) = &self.addr {
            return addr.clone();
        }
        let port = std::env::var("PORT").unwrap_or_else(|_| DEFAULT_PORT.to_string());
        format!("0.0.0.0:{}", port)
    }
}

impl Validate for ServerConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_socket_addr("addr", &self.listen_addr())
    }
}

#[derive(Debug, Clone, Parser)]
#[command(name = "concat")]
#[command(about = "Concatenate files (or standard input) to standard output")]
pub struct ConcatConfig {
    /// Files to copy to standard output in argument order; reads standard
    /// input when none are given
    pub files: Vec<PathBuf>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Validate for ConcatConfig {
    fn validate(&self) -> Result<()> {
        for file in &self.files {
            validation::validate_input_path("files", file)?;
        }
        Ok(())
    }
}
