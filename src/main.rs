//! Gatehouse host: serves the Leptos app with SSR + hydration.

mod config;
mod routes;

#[tokio::main]
async fn main() {
    // A missing .env is normal outside local development.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = config::ServerConfig::from_env().expect("invalid server configuration");
    let app = routes::app().expect("router init failed");

    let listener = tokio::net::TcpListener::bind(config.bind_addr())
        .await
        .expect("failed to bind");

    tracing::info!(host = %config.host, port = config.port, "gatehouse listening");
    axum::serve(listener, app).await.expect("server failed");
}
