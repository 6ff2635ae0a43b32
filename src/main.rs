//! Chat-server directory API backend.
//!
//! The backend uses Axum as the web framework and SeaORM for database
//! operations. It follows a layered architecture:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers, access control, and DTO conversion
//! - **Service Layer** (`service/`) - Business logic orchestration between controllers and data layer
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - DTOs, domain models, and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Session wrappers and authentication guards
//!
//! Supporting modules provide application infrastructure:
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (DB connection)
//! - **Startup** (`startup`) - Initialization of database and sessions
//! - **Router** (`router`) - Axum route configuration and API documentation

mod config;
mod controller;
mod data;
mod error;
mod middleware;
mod model;
mod router;
mod service;
mod startup;
mod state;
mod util;

use tower_http::cors::CorsLayer;
use tracing_subscriber::EnvFilter;

use crate::{config::Config, error::AppError, state::AppState};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let session = startup::connect_to_session(&db).await?;

    tracing::info!("Starting server on {}", config.listen_addr);

    let app = router::router()
        .with_state(AppState::new(db))
        .layer(session)
        .layer(CorsLayer::permissive());

    let listener = tokio::net::TcpListener::bind(&config.listen_addr)
        .await
        .map_err(|e| AppError::InternalError(format!("Failed to bind {}: {}", config.listen_addr, e)))?;

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::InternalError(e.to_string()))?;

    Ok(())
}
