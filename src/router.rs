use axum::{
    routing::{get, post},
    Router,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    controller::{auth, category, server},
    model,
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        server::list_servers,
        category::list_categories,
        auth::login,
        auth::get_user,
        auth::logout,
    ),
    components(schemas(
        model::server::ServerDto,
        model::category::CategoryDto,
        model::user::UserDto,
        model::user::LoginDto,
        model::api::ErrorDto,
    )),
    tags(
        (name = "server", description = "Server directory listing"),
        (name = "category", description = "Server categories"),
        (name = "auth", description = "Session authentication"),
    )
)]
struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/server/select", get(server::list_servers))
        .route("/api/server/category", get(category::list_categories))
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/user", get(auth::get_user))
        .route("/api/auth/logout", post(auth::logout))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
