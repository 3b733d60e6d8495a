#![recursion_limit = "256"]

mod config;
mod routes;

#[tokio::main]
async fn main() {
    // A missing .env is fine; the environment may already be populated.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = config::HostConfig::from_env().expect("invalid configuration");
    tracing::info!(
        bombonas = config.api.bombonas_base(),
        reads = config.api.reads_base(),
        "backend bases resolved"
    );

    let port = config.port;
    let app = routes::leptos_app(config.api).expect("leptos app init failed");
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "bombona dashboard listening");
    axum::serve(listener, app).await.expect("server failed");
}
