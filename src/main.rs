use anyhow::Context;
use clap::Parser;

use unsplash_mcp::{server::SERVER_NAME, Client, UnsplashServer, VERSION};

mod config;
mod logging;
mod transport;

use config::{Cli, Transport, ACCESS_KEY_ENV};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env_files = config::load_env_files();
    let cli = Cli::parse();

    logging::init(cli.verbose, cli.json_logs);

    for path in &env_files {
        tracing::debug!(path = %path.display(), "loaded environment file");
    }

    let Some(access_key) = cli.access_key() else {
        eprintln!("Error: {ACCESS_KEY_ENV} environment variable not set.");
        std::process::exit(1);
    };

    let client = Client::with_base_url(access_key, &cli.api_url)
        .context("failed to create Unsplash client")?;
    let server = UnsplashServer::new(client);

    tracing::info!(transport = ?cli.transport, "{SERVER_NAME} v{VERSION} starting");

    match cli.transport {
        Transport::Stdio => transport::serve_stdio(server).await,
        Transport::Http => transport::serve_http(server, cli.listen_addr()).await,
    }
}
