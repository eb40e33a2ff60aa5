use std::net::SocketAddr;

use anyhow::Context;
use rmcp::{
    transport::{
        stdio,
        streamable_http_server::{session::local::LocalSessionManager, StreamableHttpService},
    },
    ServiceExt,
};

use unsplash_mcp::server::UnsplashServer;

/// Serves one MCP session over stdin/stdout until the peer disconnects.
pub async fn serve_stdio(server: UnsplashServer) -> anyhow::Result<()> {
    let running = server
        .serve(stdio())
        .await
        .context("failed to start stdio transport")?;

    tracing::info!("MCP session started on stdio");
    let quit = running.waiting().await?;
    tracing::info!(?quit, "MCP session ended");

    Ok(())
}

/// Serves streamable HTTP sessions on `/mcp` until Ctrl-C.
pub async fn serve_http(server: UnsplashServer, addr: SocketAddr) -> anyhow::Result<()> {
    let service = StreamableHttpService::new(
        move || Ok(server.clone()),
        LocalSessionManager::default().into(),
        Default::default(),
    );
    let router = axum::Router::new().nest_service("/mcp", service);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    tracing::info!("MCP server listening on http://{addr}/mcp");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    tracing::info!("MCP server stopped");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for Ctrl-C");
    }
}
