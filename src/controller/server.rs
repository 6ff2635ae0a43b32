use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    error::AppError,
    middleware::auth::AuthGuard,
    model::{
        api::ErrorDto,
        server::{ServerDto, ServerListParams, ServerListQueryDto},
    },
    service::server::ServerListService,
    state::AppState,
};

/// Tag for grouping server endpoints in OpenAPI documentation
pub static SERVER_TAG: &str = "server";

/// List servers in the directory.
///
/// Returns servers matching the given query parameters, applied in a fixed
/// order: category filter, membership filter, member-count annotation,
/// result-count limit, single-id lookup. Later parameters operate on the
/// result of earlier ones, so `by_serverid` selects within the first `qty`
/// records. Results are ordered by server id.
///
/// # Access Control
/// - Public, except `by_user=true` which requires an authenticated session
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - Caller's session, consulted only when `by_user=true`
/// - `query` - Raw query parameters
///
/// # Returns
/// - `200 OK` - List of matching servers
/// - `400 Bad Request` - Malformed `qty` or `by_serverid`, or `by_serverid` matched nothing
/// - `401 Unauthorized` - `by_user=true` without an authenticated session
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/server/select",
    tag = SERVER_TAG,
    params(
        ("category" = Option<String>, Query, description = "Only servers whose category name equals this value"),
        ("qty" = Option<String>, Query, description = "Truncate the result to the first N servers"),
        ("by_user" = Option<String>, Query, description = "Literal \"true\": only servers the caller is a member of (requires auth)"),
        ("by_serverid" = Option<String>, Query, description = "Only the server with this id"),
        ("with_num_members" = Option<String>, Query, description = "Literal \"true\": include each server's member count")
    ),
    responses(
        (status = 200, description = "Successfully retrieved servers", body = Vec<ServerDto>),
        (status = 400, description = "Invalid query parameter", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_servers(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<ServerListQueryDto>,
) -> Result<impl IntoResponse, AppError> {
    // by_user requires an authenticated caller before any further processing
    let member_id = if query.wants_user_filter() {
        let user = AuthGuard::new(&state.db, &session).require_user().await?;
        Some(user.id)
    } else {
        None
    };

    let params = ServerListParams::from_dto(query, member_id)?;

    let service = ServerListService::new(&state.db);

    let servers = service.list(params).await?;

    Ok((
        StatusCode::OK,
        Json(
            servers
                .into_iter()
                .map(|s| s.into_dto())
                .collect::<Vec<_>>(),
        ),
    ))
}
