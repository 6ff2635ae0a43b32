use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No authenticated user in the session.
    ///
    /// Raised when an endpoint (or a query parameter such as `by_user`)
    /// requires an authenticated caller but the session carries no user id.
    /// Results in a 401 Unauthorized response.
    #[error("User is not authenticated")]
    UserNotInSession,

    /// Session carries a user id that no longer exists in the database.
    ///
    /// The session outlived its user record. Treated the same as an
    /// unauthenticated caller. Results in a 401 Unauthorized response.
    #[error("User {0} from session not found in database")]
    UserNotInDatabase(i32),

    /// Login attempted with a username that doesn't exist.
    ///
    /// Results in a 401 Unauthorized response with a generic message so the
    /// endpoint doesn't reveal which usernames exist.
    #[error("Unknown username '{0}'")]
    UnknownUsername(String),
}

/// Converts authentication errors into HTTP responses.
///
/// Every variant indicates the caller has no usable identity, so all map to
/// 401 Unauthorized with a generic message. Details are kept server-side to
/// avoid leaking session state or username information.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::UserNotInSession | Self::UserNotInDatabase(_) => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Authentication required".to_string(),
                }),
            )
                .into_response(),
            Self::UnknownUsername(_) => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Invalid login".to_string(),
                }),
            )
                .into_response(),
        }
    }
}
