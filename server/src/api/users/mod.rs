pub mod delete;
pub mod get;
pub mod list;

use crate::AppState;
use axum::routing::{delete, get};
use axum::Router;
use utoipa::OpenApi;

/// Returns the router for /api/users endpoints (mounted at /api/users)
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list::list_users))
        .route("/me", delete(delete::delete_account))
        .route("/{username}", get(get::get_user))
}

#[derive(OpenApi)]
#[openapi(
    paths(list::list_users, get::get_user, delete::delete_account),
    components(schemas(
        list::ListUsersResponse,
        list::UserEntry,
        get::UserDetailResponse,
    ))
)]
pub struct ApiDoc;
