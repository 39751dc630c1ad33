mod config;
mod routes;
mod state;

use config::{ConfigError, HostConfig};

#[derive(Debug, thiserror::Error)]
enum HostError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("http client: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server io: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() {
    // A missing .env file is normal outside development.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "lexdesk host failed");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), HostError> {
    let config = HostConfig::from_env()?;
    let port = config.port;
    tracing::info!(upstream = %config.api_upstream_url, "api proxy configured");

    let state = state::AppState::new(config)?;
    let app = routes::app(state)?;
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}")).await?;

    tracing::info!(%port, "lexdesk listening");
    axum::serve(listener, app).await?;
    Ok(())
}
