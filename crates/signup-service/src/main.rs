//! Signup Service - Entry point.

use account_store::{AccountStore, LogStore};
use signup_service::{
    api::{create_router, AppState},
    config::Config,
    make_signup_controller,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() {
    // Load configuration
    let config = match Config::load() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {:#}", e);
            std::process::exit(1);
        }
    };

    // Initialize logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log.level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Signup Service");

    // Initialize storage
    let accounts = match AccountStore::open(&config.storage.accounts_path, config.storage.persist).await {
        Ok(s) => Arc::new(s),
        Err(e) => {
            error!("Failed to open account store: {}", e);
            std::process::exit(1);
        }
    };
    let error_log = Arc::new(LogStore::open(
        &config.storage.error_log_path,
        config.storage.persist,
    ));

    info!("Account store ready with {} accounts", accounts.count().await);

    // Compose the signup pipeline
    let controller = make_signup_controller(config.hashing.cost, accounts.clone(), error_log);
    let state = AppState::new(Arc::new(controller), accounts);

    let app = create_router(state);

    // Bind to address
    let addr = SocketAddr::new(
        config.server.listen_addr.parse().unwrap_or([0, 0, 0, 0].into()),
        config.server.port,
    );

    info!("Listening on {}", addr);

    let listener = match TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            error!("Failed to bind to {}: {}", addr, e);
            std::process::exit(1);
        }
    };

    // Run server
    if let Err(e) = axum::serve(listener, app).await {
        error!("Server error: {}", e);
        std::process::exit(1);
    }
}
