mod config;
mod routes;
mod state;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();
    let _ = dotenvy::dotenv();

    let config = match config::ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "invalid server configuration");
            std::process::exit(1);
        }
    };

    let catalog = state::load_catalog(&config.examples_path).await;
    let port = config.port;
    let base_path = config.base_path.clone();
    let state = state::AppState::new(config, catalog);

    let app = routes::app(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, %base_path, "showcase preview listening");
    axum::serve(listener, app).await.expect("server failed");
}
