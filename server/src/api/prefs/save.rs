use crate::api::ErrorResponse;
use crate::auth::AuthUser;
use crate::db::DbPool;
use crate::get_conn;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use diesel::prelude::*;
use std::sync::Arc;
use tureen_core::prefs::ToggleOutcome;

use super::{apply_changes, fetch_recipe_name, load_prefs, ToggleRequest, ToggleResponse};

#[utoipa::path(
    post,
    path = "/api/recipes/save",
    tag = "preferences",
    request_body = ToggleRequest,
    responses(
        (status = 200, description = "Save toggled", body = ToggleResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Recipe not found", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn save_recipe(
    AuthUser(user): AuthUser,
    State(pool): State<Arc<DbPool>>,
    Json(request): Json<ToggleRequest>,
) -> impl IntoResponse {
    let mut conn = get_conn!(pool);

    if let Err(response) = fetch_recipe_name(&mut conn, request.recipe_id) {
        return response;
    }

    let result: Result<ToggleOutcome, diesel::result::Error> = conn.transaction(|conn| {
        let mut prefs = load_prefs(conn, user.id)?;
        let effect = prefs.toggle_save(request.recipe_id);
        apply_changes(conn, user.id, request.recipe_id, &effect.changes)?;
        Ok(effect.outcome)
    });

    match result {
        Ok(outcome) => {
            let status = match outcome {
                ToggleOutcome::Added => format!(
                    "Added recipe {} to {}'s saved recipes",
                    request.recipe_id, user.username
                ),
                ToggleOutcome::Removed => format!(
                    "Removed recipe {} from {}'s saved recipes",
                    request.recipe_id, user.username
                ),
            };
            (StatusCode::OK, Json(ToggleResponse { status })).into_response()
        }
        Err(e) => {
            tracing::error!("Failed to toggle saved recipe: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to toggle saved recipe".to_string(),
                }),
            )
                .into_response()
        }
    }
}
