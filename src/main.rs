mod config;
mod routes;

use leptos::prelude::get_configuration;

use crate::config::ServerConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    match dotenvy::dotenv() {
        Ok(path) => tracing::debug!(path = %path.display(), "loaded .env"),
        Err(e) if e.not_found() => {}
        Err(e) => tracing::warn!(error = %e, "ignoring unreadable .env"),
    }

    let config = ServerConfig::from_env()?;
    let leptos_options = get_configuration(None)?.leptos_options;

    let app = routes::app(leptos_options);
    let listener = tokio::net::TcpListener::bind(config.socket_addr()).await?;

    tracing::info!(addr = %config.socket_addr(), "profile-app listening");
    axum::serve(listener, app).await?;
    Ok(())
}
