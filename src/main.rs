//! Command-line entry point: serve a directory over HTTP/1.x.

use std::net::IpAddr;
use std::path::PathBuf;

use clap::Parser;
use env_logger::Env;
use log::error;

use statichttp_rs::{HttpServer, ServerConfig, ServerError};

/// Serve a directory over HTTP/1.x, one request per connection.
#[derive(Debug, Parser)]
#[command(name = "statichttp", version, about)]
struct Cli {
    /// Port to listen on
    #[arg(env = "STATICHTTP_PORT", value_parser = clap::value_parser!(u16).range(1..))]
    port: Option<u16>,

    /// Address to bind to
    #[arg(long, env = "STATICHTTP_HOST")]
    host: Option<IpAddr>,

    /// Directory to serve
    #[arg(short, long, env = "STATICHTTP_ROOT")]
    root: Option<PathBuf>,

    /// JSON configuration file; flags override its values
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl Cli {
    fn into_config(self) -> Result<ServerConfig, ServerError> {
        let mut config = match &self.config {
            Some(path) => ServerConfig::from_json_file(path)?,
            None => ServerConfig::default(),
        };

        if let Some(port) = self.port {
            config.addr.set_port(port);
        }
        if let Some(host) = self.host {
            config.addr.set_ip(host);
        }
        if let Some(root) = self.root {
            config.root = root;
        }
        Ok(config)
    }
}

async fn run(cli: Cli) -> Result<(), ServerError> {
    let config = cli.into_config()?;
    HttpServer::new(config).start().await
}

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    if let Err(e) = run(Cli::parse()).await {
        error!("{e}");
        std::process::exit(1);
    }
}
