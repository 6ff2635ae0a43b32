use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    middleware::{auth::AuthGuard, session::AuthSession},
    model::{
        api::ErrorDto,
        user::{LoginDto, User, UserDto},
    },
    state::AppState,
};

/// Tag for grouping auth endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Log a user in and establish a session.
///
/// Binds the session to the user record matching the given username.
/// Identity verification happens upstream of this API; unknown usernames
/// are rejected with a generic message.
///
/// # Returns
/// - `200 OK` - Session established, returns the logged-in user
/// - `401 Unauthorized` - Unknown username
/// - `500 Internal Server Error` - Database or session error
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Session established", body = UserDto),
        (status = 401, description = "Unknown username", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let user_repo = UserRepository::new(&state.db);

    let Some(user) = user_repo.find_by_username(&payload.username).await? else {
        return Err(AuthError::UnknownUsername(payload.username).into());
    };

    AuthSession::new(&session).set_user_id(user.id).await?;

    Ok((StatusCode::OK, Json(User::from_entity(user).into_dto())))
}

/// Get the currently authenticated user.
///
/// Resolves the session to its user record. Establishing the session in the
/// first place is owned by the identity layer; this endpoint only reads it.
///
/// # Returns
/// - `200 OK` - The authenticated user
/// - `401 Unauthorized` - No authenticated session
/// - `500 Internal Server Error` - Database or session error
#[utoipa::path(
    get,
    path = "/api/auth/user",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "The authenticated user", body = UserDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require_user().await?;

    Ok((StatusCode::OK, Json(User::from_entity(user).into_dto())))
}

/// Log the current user out.
///
/// Clears the session, including the authentication state. Idempotent:
/// logging out without a session is still a success.
///
/// # Returns
/// - `204 No Content` - Session cleared
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 204, description = "Session cleared"),
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, AppError> {
    AuthSession::new(&session).clear().await;

    Ok(StatusCode::NO_CONTENT)
}
