mod config;

use crate::App;
use anyhow::Context;
use dioxus::prelude::*;
use std::net::{IpAddr, SocketAddr};
use tracing::instrument;

#[instrument]
pub async fn launch_server() -> anyhow::Result<()> {
    let config = config::ServerConfig::load().context("Failed to load server configuration")?;

    // The Dioxus CLI proxies fullstack builds and hands us the address to use
    let ip = match dioxus::cli_config::server_ip() {
        Some(ip) => ip,
        None => config
            .host
            .parse::<IpAddr>()
            .with_context(|| format!("Invalid HOST value '{}'", config.host))?,
    };
    let port = dioxus::cli_config::server_port().unwrap_or(config.port);
    let address = SocketAddr::new(ip, port);

    let listener = tokio::net::TcpListener::bind(address)
        .await
        .with_context(|| format!("Failed to bind {address}"))?;
    tracing::info!(%address, "Serving project portfolio");

    let serve_config = ServeConfig::new()
        .map_err(|e| anyhow::anyhow!("Failed to build serve config: {e:?}"))?;
    let router = axum::Router::new()
        // serve_dioxus_application adds routes to server side render the application, serve static assets, and register server functions
        .serve_dioxus_application(serve_config, App)
        .into_make_service();
    axum::serve(listener, router).await?;
    Ok(())
}
