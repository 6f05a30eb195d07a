//! Roomly Server — Meeting Room Booking Backend
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;

use tracing_subscriber::{fmt, EnvFilter};

use roomly_core::config::AppConfig;
use roomly_core::error::AppError;

#[tokio::main]
async fn main() {
    let env = std::env::var("ROOMLY_ENV").unwrap_or_else(|_| "development".to_string());

    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {e}");
        std::process::exit(1);
    }
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
        _ => {
            fmt().pretty().with_env_filter(filter).with_target(true).init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting Roomly v{}", env!("CARGO_PKG_VERSION"));

    // ── Step 1: Database connection + migrations ─────────────────
    tracing::info!("Connecting to database...");
    let db_pool = roomly_database::connection::create_pool(&config.database).await?;

    tracing::info!("Running database migrations...");
    roomly_database::migration::run_migrations(&db_pool).await?;

    // ── Step 2: Initialize repositories ──────────────────────────
    let user_repo = Arc::new(roomly_database::repositories::UserRepository::new(
        db_pool.clone(),
    ));
    let room_repo = Arc::new(roomly_database::repositories::MeetingRoomRepository::new(
        db_pool.clone(),
    ));
    let booking_repo = Arc::new(roomly_database::repositories::BookingRepository::new(
        db_pool.clone(),
    ));

    // ── Step 3: Initialize auth system ───────────────────────────
    tracing::info!("Initializing authentication system...");
    let password_hasher = Arc::new(roomly_auth::password::PasswordHasher::new());
    let jwt_encoder = Arc::new(roomly_auth::jwt::encoder::JwtEncoder::new(&config.auth));
    let jwt_decoder = Arc::new(roomly_auth::jwt::decoder::JwtDecoder::new(&config.auth));
    let session_store = Arc::new(roomly_auth::session::store::SessionStore::new(Arc::clone(
        &user_repo,
    )));
    let session_manager = Arc::new(roomly_auth::session::manager::SessionManager::new(
        Arc::clone(&jwt_encoder),
        Arc::clone(&jwt_decoder),
        Arc::clone(&session_store),
        Arc::clone(&user_repo),
        Arc::clone(&password_hasher),
    ));
    let rbac_enforcer = Arc::new(roomly_auth::rbac::RbacEnforcer::new());

    // ── Step 4: Build and start HTTP server ──────────────────────
    let app_state = roomly_api::state::AppState {
        config: Arc::new(config.clone()),
        db_pool: db_pool.clone(),
        user_repo,
        room_repo,
        booking_repo,
        password_hasher,
        jwt_decoder,
        session_manager,
        rbac_enforcer,
    };

    let app = roomly_api::router::build_router(app_state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("Roomly server listening on {addr}");

    // ── Step 5: Graceful shutdown ────────────────────────────────
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    tracing::info!("Roomly server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
