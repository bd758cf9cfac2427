//! Trigram-similarity search over recipe names and usernames.
//!
//! A thin wrapper over the pg_trgm `similarity()` function: each list is
//! threshold-filtered at 0.3, capped at 16 and sorted by descending score.

use crate::api::ErrorResponse;
use crate::db::DbPool;
use crate::get_conn;
use crate::schema::{recipes, users};
use crate::AppState;
use axum::routing::get;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json, Router,
};
use diesel::dsl::sql;
use diesel::prelude::*;
use diesel::sql_types::{Bool, Float, Text};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::{IntoParams, OpenApi, ToSchema};
use uuid::Uuid;

const SIMILARITY_THRESHOLD: &str = "0.3";
const RESULT_CAP: i64 = 16;

/// Returns the router for /api/search (mounted there)
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(search))
}

#[derive(OpenApi)]
#[openapi(
    paths(search),
    components(schemas(SearchResponse, RecipeMatch, UserMatch))
)]
pub struct ApiDoc;

#[derive(Debug, Deserialize, IntoParams)]
pub struct SearchParams {
    /// Search text, fuzzy-matched against recipe names and usernames
    pub q: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RecipeMatch {
    pub id: Uuid,
    pub name: String,
    pub similarity: f32,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UserMatch {
    pub id: Uuid,
    pub username: String,
    pub similarity: f32,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SearchResponse {
    pub recipes: Vec<RecipeMatch>,
    pub users: Vec<UserMatch>,
}

#[utoipa::path(
    get,
    path = "/api/search",
    tag = "search",
    params(SearchParams),
    responses(
        (status = 200, description = "Matches above the similarity threshold", body = SearchResponse)
    )
)]
pub async fn search(
    State(pool): State<Arc<DbPool>>,
    Query(params): Query<SearchParams>,
) -> impl IntoResponse {
    let mut conn = get_conn!(pool);
    let q = params.q;

    let result: Result<SearchResponse, diesel::result::Error> = (|| {
        let recipe_rows: Vec<(Uuid, String, f32)> = recipes::table
            .filter(recipes::deleted_at.is_null())
            .filter(
                sql::<Bool>("similarity(name, ")
                    .bind::<Text, _>(q.clone())
                    .sql(&format!(") > {}", SIMILARITY_THRESHOLD)),
            )
            .order(
                sql::<Float>("similarity(name, ")
                    .bind::<Text, _>(q.clone())
                    .sql(")")
                    .desc(),
            )
            .limit(RESULT_CAP)
            .select((
                recipes::id,
                recipes::name,
                sql::<Float>("similarity(name, ")
                    .bind::<Text, _>(q.clone())
                    .sql(")"),
            ))
            .load(&mut conn)?;

        let user_rows: Vec<(Uuid, String, f32)> = users::table
            .filter(users::deleted_at.is_null())
            .filter(
                sql::<Bool>("similarity(username, ")
                    .bind::<Text, _>(q.clone())
                    .sql(&format!(") > {}", SIMILARITY_THRESHOLD)),
            )
            .order(
                sql::<Float>("similarity(username, ")
                    .bind::<Text, _>(q.clone())
                    .sql(")")
                    .desc(),
            )
            .limit(RESULT_CAP)
            .select((
                users::id,
                users::username,
                sql::<Float>("similarity(username, ")
                    .bind::<Text, _>(q.clone())
                    .sql(")"),
            ))
            .load(&mut conn)?;

        Ok(SearchResponse {
            recipes: recipe_rows
                .into_iter()
                .map(|(id, name, similarity)| RecipeMatch {
                    id,
                    name,
                    similarity,
                })
                .collect(),
            users: user_rows
                .into_iter()
                .map(|(id, username, similarity)| UserMatch {
                    id,
                    username,
                    similarity,
                })
                .collect(),
        })
    })();

    match result {
        Ok(response) => (StatusCode::OK, Json(response)).into_response(),
        Err(e) => {
            tracing::error!("Search query failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Search failed".to_string(),
                }),
            )
                .into_response()
        }
    }
}
