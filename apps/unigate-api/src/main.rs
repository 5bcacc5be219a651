//! unigate Course Catalog API
//!
//! A course/university catalog CRM service built with Axum: filtered
//! course search, admin mutations with deferred activity logging, and
//! CSV bulk import.

mod bootstrap;
mod config;
mod health;
mod logging;
mod openapi;
mod state;

use axum::{routing::get, Router};
use config::Config;
use health::health_handler;
use openapi::swagger_routes;
use state::AppState;
use std::net::SocketAddr;
use tokio::signal;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;
use unigate_activity::activity_channel;
use unigate_api_auth::{auth_router, SessionSecret};
use unigate_api_courses::{courses_router, CoursesState};
use unigate_api_import::{import_router, ImportState};
use unigate_db::{run_migrations, DbPool};

#[tokio::main]
async fn main() {
    // Load configuration (fail-fast on missing required values)
    let config = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    logging::init_logging(&config.rust_log);

    info!(
        version = env!("CARGO_PKG_VERSION"),
        host = %config.host,
        port = config.port,
        env = %config.app_env,
        "Starting unigate API"
    );

    // Connect and migrate
    let db = match DbPool::connect(&config.database_url, config.database_max_connections).await {
        Ok(db) => db,
        Err(e) => {
            tracing::error!(error = %e, "Failed to connect to database");
            std::process::exit(1);
        }
    };

    if let Err(e) = run_migrations(&db).await {
        tracing::error!(error = %e, "Failed to run migrations");
        std::process::exit(1);
    }

    let pool = db.into_inner();

    // Seed the bootstrap admin when configured
    if let Some(admin) = &config.bootstrap_admin {
        if let Err(e) = bootstrap::seed_admin(&pool, admin).await {
            tracing::error!(error = %e, "Bootstrap seeding failed");
            std::process::exit(1);
        }
    }

    // Start the deferred activity worker
    let (activity, worker) = activity_channel(pool.clone());
    tokio::spawn(worker.run());
    info!("Activity worker started");

    let secret = SessionSecret::new(config.session_secret.as_bytes().to_vec());
    let app_state = AppState::new(pool.clone());

    let app = Router::new()
        .route("/health", get(health_handler))
        .with_state(app_state)
        .merge(auth_router(pool.clone(), secret.clone(), activity.clone()))
        .merge(courses_router(
            CoursesState::new(pool.clone(), activity.clone()),
            secret.clone(),
        ))
        .merge(import_router(ImportState::new(pool.clone(), activity), secret))
        .merge(swagger_routes())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http());

    let addr: SocketAddr = match format!("{}:{}", config.host, config.port).parse() {
        Ok(addr) => addr,
        Err(e) => {
            tracing::error!(error = %e, "Invalid bind address");
            std::process::exit(1);
        }
    };

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            tracing::error!(error = %e, %addr, "Failed to bind");
            std::process::exit(1);
        }
    };

    info!(%addr, "unigate API listening");

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        tracing::error!(error = %e, "Server error");
        std::process::exit(1);
    }

    info!("unigate API shut down cleanly");
}

/// Resolve when SIGINT or SIGTERM arrives.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("Shutdown signal received");
}
