//! Application error hierarchy and its HTTP response mapping.
//!
//! `AppError` is the top-level type returned by handlers. Domain errors
//! (`AuthError`, `ServerQueryError`) own their response mapping; everything
//! else falls through to a logged 500 with a generic body.

pub mod auth;
pub mod config;
pub mod server;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    error::{auth::AuthError, config::ConfigError, server::ServerQueryError},
    model::api::ErrorDto,
};

/// Top-level application error.
///
/// Most variants use `#[from]` so `?` works from any layer. `AuthErr` and
/// `QueryErr` carry their own `IntoResponse` mapping (401 and 400 with detail
/// messages); infrastructure errors become a logged 500.
#[derive(Error, Debug)]
pub enum AppError {
    /// Missing or invalid configuration at startup. 500.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Authentication failure, mapped by `AuthError` (401).
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Invalid server list query parameter, mapped by `ServerQueryError`
    /// (400 with a detail message).
    #[error(transparent)]
    QueryErr(#[from] ServerQueryError),

    /// SeaORM database error. Logged server-side, 500 to the client.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// SQLx driver error. Logged server-side, 500 to the client.
    #[error(transparent)]
    SqlxErr(#[from] sea_orm::SqlxError),

    /// Session store error. Logged server-side, 500 to the client.
    #[error(transparent)]
    SessionErr(#[from] tower_sessions::session::Error),

    /// 404 with the given message.
    #[error("{0}")]
    NotFound(String),

    /// 400 with the given message.
    #[error("{0}")]
    BadRequest(String),

    /// 500; the message is logged, the client gets a generic body.
    #[error("{0}")]
    InternalError(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::QueryErr(err) => err.into_response(),
            Self::NotFound(msg) => {
                (StatusCode::NOT_FOUND, Json(ErrorDto { error: msg })).into_response()
            }
            Self::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, Json(ErrorDto { error: msg })).into_response()
            }
            Self::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorDto {
                        error: "Internal server error".to_string(),
                    }),
                )
                    .into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Fallback wrapper turning any displayable error into a 500 response.
///
/// The full error is logged; the client only sees "Internal server error" so
/// implementation details never leak into response bodies.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
