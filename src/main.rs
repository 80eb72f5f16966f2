mod config;
mod proxy;
mod routes;
mod state;

#[tokio::main]
async fn main() {
    // A missing .env is normal outside local development.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = config::ServerConfig::from_env().expect("invalid host configuration");
    let port = config.port;
    tracing::info!(upstream = %config.upstream_url, max_upload_bytes = config.max_upload_bytes, "analysis relay configured");

    let state = state::AppState::new(config).expect("http client init failed");
    let app = routes::leptos_app(state).expect("leptos app init failed");
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "insightboard listening");
    axum::serve(listener, app).await.expect("server failed");
}
