use std::net::SocketAddr;

use anyhow::Context;
use clap::Parser;
use secrecy::ExposeSecret;
use tracing::info;

use logger_redacted::{fingerprint, init_tracing, LoggerConfig};
use products_ui::{create_app, AppConfig, ProductsUiServer};

/// Products UI HTTP server
#[derive(Parser, Debug)]
#[command(name = "products-ui")]
#[command(about = "Payment pages for products hosted by the products service")]
struct Args {
    /// Server bind address (overrides HOST)
    #[arg(long)]
    host: Option<String>,

    /// Server port (overrides PORT)
    #[arg(short, long)]
    port: Option<u16>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    let config = AppConfig::from_env().context("failed to load configuration")?;

    let log_level = if args.verbose { "debug" } else { config.log_level.as_str() };
    init_tracing(
        &LoggerConfig::for_environment(&config.environment, log_level)
            .with_directive("tower_http=info"),
    )?;

    info!(
        version = env!("CARGO_PKG_VERSION"),
        environment = %config.environment,
        products_url = %config.products_url,
        token_fingerprint = %fingerprint(config.products_api_token.expose_secret()),
        "Starting products UI"
    );

    let server = ProductsUiServer::new(&config)?;
    let app = create_app(server);

    let host = args.host.unwrap_or_else(|| config.host.clone());
    let port = args.port.unwrap_or(config.port);
    let addr: SocketAddr = format!("{}:{}", host, port)
        .parse()
        .with_context(|| format!("invalid bind address {}:{}", host, port))?;

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind to {}", addr))?;

    info!("Products UI listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    info!("Products UI stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
