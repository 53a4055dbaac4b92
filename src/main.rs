use actix_web::{web, App, HttpServer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod api;
mod app;
mod db;
mod model;
mod render;
mod service;

use app::AppState;
use model::Config;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present (ignore if missing)
    let _ = dotenvy::dotenv();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();
    let bind_addr = config.bind_addr();
    let static_dir = config.static_dir.clone();

    // Served paths must exist before actix-files mounts them
    std::fs::create_dir_all(config.proofs_dir())?;
    std::fs::create_dir_all(config.audio_dir())?;

    let state = match AppState::new(config).await {
        Ok(state) => web::Data::new(state),
        Err(e) => {
            tracing::error!(error = %e, "Failed to initialize application");
            return Err(std::io::Error::other(e.to_string()));
        }
    };

    tracing::info!("Starting alibi server on {}", bind_addr);

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .configure(api::excuse::configure)
            .configure(api::proof::configure)
            .configure(api::voice::configure)
            .configure(api::health::configure)
            .configure(api::openapi::configure)
            .service(actix_files::Files::new("/static", static_dir.clone()))
    })
    .bind(&bind_addr)?
    .run()
    .await
}
