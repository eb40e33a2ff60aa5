use std::{
    net::{IpAddr, Ipv4Addr, SocketAddr},
    path::PathBuf,
};

use clap::{Parser, ValueEnum};

use unsplash_mcp::unsplash::API_URL;

pub const ACCESS_KEY_ENV: &str = "UNSPLASH_ACCESS_KEY";

/// Model Context Protocol server that provides tools for accessing Unsplash photos.
///
/// Requires the UNSPLASH_ACCESS_KEY environment variable to be set.
#[derive(Parser, Debug)]
#[command(name = "unsplash-mcp-server")]
#[command(author, version, about)]
pub struct Cli {
    /// Transport type
    #[arg(short, long, value_enum, default_value_t = Transport::Stdio)]
    pub transport: Transport,

    /// Port for the HTTP transport
    #[arg(short, long, default_value_t = 8080)]
    pub port: u16,

    /// Address the HTTP transport binds to
    #[arg(long, default_value_t = IpAddr::V4(Ipv4Addr::LOCALHOST))]
    pub host: IpAddr,

    /// Unsplash API access key
    #[arg(long, env = "UNSPLASH_ACCESS_KEY", hide_env_values = true)]
    pub access_key: Option<String>,

    /// Base URL of the Unsplash API
    #[arg(long, env = "UNSPLASH_API_URL", default_value = API_URL)]
    pub api_url: String,

    /// Enable verbose (debug) logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Output logs in JSON format
    #[arg(long)]
    pub json_logs: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Transport {
    /// JSON-RPC over stdin/stdout
    Stdio,

    /// Streamable HTTP on /mcp
    #[value(alias = "sse")]
    Http,
}

impl Cli {
    pub fn access_key(&self) -> Option<&str> {
        self.access_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }

    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Loads `.env` from the working directory and from the user config folder.
///
/// Variables already present in the environment win. Returns the files that
/// were read.
pub fn load_env_files() -> Vec<PathBuf> {
    let mut loaded = Vec::new();

    if let Ok(path) = dotenvy::dotenv() {
        loaded.push(path);
    }

    if let Some(path) = dirs::config_dir().map(|dir| dir.join("unsplash-mcp").join(".env")) {
        if dotenvy::from_path(&path).is_ok() {
            loaded.push(path);
        }
    }

    loaded
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_stdio() {
        let cli = Cli::try_parse_from(["unsplash-mcp-server"]).unwrap();

        assert_eq!(cli.transport, Transport::Stdio);
        assert_eq!(cli.listen_addr(), "127.0.0.1:8080".parse().unwrap());
        assert!(!cli.verbose);
    }

    #[test]
    fn short_v_is_verbose_and_capital_v_is_version() {
        let cli = Cli::try_parse_from(["unsplash-mcp-server", "-v"]).unwrap();
        assert!(cli.verbose);

        let err = Cli::try_parse_from(["unsplash-mcp-server", "-V"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    #[test]
    fn sse_is_an_alias_for_http() {
        let cli = Cli::try_parse_from(["unsplash-mcp-server", "-t", "sse", "-p", "9090"]).unwrap();

        assert_eq!(cli.transport, Transport::Http);
        assert_eq!(cli.port, 9090);
    }

    #[test]
    fn blank_access_key_counts_as_missing() {
        let cli = Cli::try_parse_from(["unsplash-mcp-server", "--access-key", "  "]).unwrap();
        assert_eq!(cli.access_key(), None);

        let cli = Cli::try_parse_from(["unsplash-mcp-server", "--access-key", "abc"]).unwrap();
        assert_eq!(cli.access_key(), Some("abc"));
    }

    #[test]
    fn rejects_unknown_transport() {
        assert!(Cli::try_parse_from(["unsplash-mcp-server", "--transport", "ws"]).is_err());
    }
}
