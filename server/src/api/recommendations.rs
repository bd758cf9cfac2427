//! The home-view recommendation query: recipes related to what the user
//! likes, minus what they already liked or disliked, in random order.

use crate::api::ErrorResponse;
use crate::auth::AuthUser;
use crate::db::DbPool;
use crate::get_conn;
use crate::schema::related_recipes;
use crate::types::{summaries_in_order, RecipeSummary};
use crate::AppState;
use axum::routing::get;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json, Router};
use diesel::prelude::*;
use rand::seq::SliceRandom;
use serde::Serialize;
use std::sync::Arc;
use tureen_core::related::candidates;
use utoipa::{OpenApi, ToSchema};
use uuid::Uuid;

/// Returns the router for /api/recommendations (mounted there)
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(recommendations))
}

#[derive(OpenApi)]
#[openapi(paths(recommendations), components(schemas(RecommendationsResponse)))]
pub struct ApiDoc;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RecommendationsResponse {
    pub recipes: Vec<RecipeSummary>,
}

#[utoipa::path(
    get,
    path = "/api/recommendations",
    tag = "recommendations",
    responses(
        (status = 200, description = "Recommended recipes in random order", body = RecommendationsResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn recommendations(
    AuthUser(user): AuthUser,
    State(pool): State<Arc<DbPool>>,
) -> impl IntoResponse {
    let mut conn = get_conn!(pool);

    let result: Result<Vec<RecipeSummary>, diesel::result::Error> = (|| {
        let prefs = super::prefs::load_prefs(&mut conn, user.id)?;
        if prefs.liked.is_empty() {
            return Ok(Vec::new());
        }

        let liked: Vec<Uuid> = prefs.liked.iter().copied().collect();

        // Both orientations, so edges written before the bidirectional
        // storage convention still count.
        let edges: Vec<(Uuid, Uuid)> = related_recipes::table
            .filter(
                related_recipes::recipe_id
                    .eq_any(liked.clone())
                    .or(related_recipes::related_id.eq_any(liked)),
            )
            .select((related_recipes::recipe_id, related_recipes::related_id))
            .load(&mut conn)?;

        let mut ids: Vec<Uuid> = candidates(&prefs, edges).into_iter().collect();
        ids.shuffle(&mut rand::thread_rng());

        summaries_in_order(&mut conn, &ids)
    })();

    match result {
        Ok(recipes) => (StatusCode::OK, Json(RecommendationsResponse { recipes })).into_response(),
        Err(e) => {
            tracing::error!("Failed to compute recommendations: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to compute recommendations".to_string(),
                }),
            )
                .into_response()
        }
    }
}
