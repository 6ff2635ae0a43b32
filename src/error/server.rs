use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Validation errors for the server list query parameters.
///
/// Each variant's display string is the client-facing detail message, so the
/// wire messages live in one place.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ServerQueryError {
    /// `by_serverid` could not be parsed as a server id.
    #[error("Server value error")]
    InvalidServerId,

    /// `qty` could not be parsed as a non-negative integer.
    #[error("Server qty value error")]
    InvalidQuantity,

    /// `by_serverid` parsed but matched nothing in the result set.
    #[error("Server with id {0} not found")]
    ServerNotFound(i32),
}

/// Converts server query errors into HTTP responses.
///
/// All variants are caller mistakes in the query string, so all map to
/// 400 Bad Request carrying the variant's detail message.
impl IntoResponse for ServerQueryError {
    fn into_response(self) -> Response {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
