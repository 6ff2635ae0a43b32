use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    error::AppError,
    model::{api::ErrorDto, category::CategoryDto},
    service::category::CategoryService,
    state::AppState,
};

/// Tag for grouping category endpoints in OpenAPI documentation
pub static CATEGORY_TAG: &str = "category";

/// List all server categories.
///
/// Returns every category in the directory ordered by name, for use in
/// browse filters.
///
/// # Access Control
/// - Public
///
/// # Returns
/// - `200 OK` - List of categories
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/server/category",
    tag = CATEGORY_TAG,
    responses(
        (status = 200, description = "Successfully retrieved categories", body = Vec<CategoryDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_categories(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let service = CategoryService::new(&state.db);

    let categories = service.get_all().await?;

    Ok((
        StatusCode::OK,
        Json(
            categories
                .into_iter()
                .map(|c| c.into_dto())
                .collect::<Vec<_>>(),
        ),
    ))
}
