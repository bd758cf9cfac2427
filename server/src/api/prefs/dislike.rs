use crate::api::ErrorResponse;
use crate::auth::AuthUser;
use crate::db::DbPool;
use crate::get_conn;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use diesel::prelude::*;
use std::sync::Arc;

use super::{apply_changes, fetch_recipe_name, load_prefs, ToggleRequest, ToggleResponse};

#[utoipa::path(
    post,
    path = "/api/recipes/dislike",
    tag = "preferences",
    request_body = ToggleRequest,
    responses(
        (status = 200, description = "Dislike toggled", body = ToggleResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Recipe not found", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn dislike_recipe(
    AuthUser(user): AuthUser,
    State(pool): State<Arc<DbPool>>,
    Json(request): Json<ToggleRequest>,
) -> impl IntoResponse {
    let mut conn = get_conn!(pool);

    let recipe_name = match fetch_recipe_name(&mut conn, request.recipe_id) {
        Ok(name) => name,
        Err(response) => return response,
    };

    let result: Result<(), diesel::result::Error> = conn.transaction(|conn| {
        let mut prefs = load_prefs(conn, user.id)?;
        let effect = prefs.toggle_dislike(request.recipe_id);
        apply_changes(conn, user.id, request.recipe_id, &effect.changes)
    });

    match result {
        Ok(()) => (
            StatusCode::OK,
            Json(ToggleResponse {
                status: format!(
                    "Processed dislike request on user '{}' for recipe '{}'",
                    user.username, recipe_name
                ),
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!("Failed to toggle disliked recipe: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to toggle disliked recipe".to_string(),
                }),
            )
                .into_response()
        }
    }
}
