use crate::api::ErrorResponse;
use crate::db::DbPool;
use crate::get_conn;
use crate::schema::recipes;
use crate::types::{RecipeSummary, RecipeSummaryRow};
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::{IntoParams, ToSchema};

const DEFAULT_LIMIT: i64 = 20;
const MAX_LIMIT: i64 = 100;

#[derive(Debug, Deserialize, IntoParams)]
pub struct ListRecipesParams {
    /// Number of items to return (default: 20, max: 100)
    pub limit: Option<i64>,
    /// Number of items to skip (default: 0)
    pub offset: Option<i64>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ListRecipesResponse {
    pub recipes: Vec<RecipeSummary>,
    /// Total number of recipes, ignoring limit/offset
    pub total: i64,
}

#[utoipa::path(
    get,
    path = "/api/recipes",
    tag = "recipes",
    params(ListRecipesParams),
    responses(
        (status = 200, description = "List of recipes, newest first", body = ListRecipesResponse)
    )
)]
pub async fn list_recipes(
    State(pool): State<Arc<DbPool>>,
    Query(params): Query<ListRecipesParams>,
) -> impl IntoResponse {
    let limit = params.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT);
    let offset = params.offset.unwrap_or(0).max(0);

    let mut conn = get_conn!(pool);

    let result: Result<(Vec<RecipeSummaryRow>, i64), diesel::result::Error> = (|| {
        let rows = recipes::table
            .filter(recipes::deleted_at.is_null())
            .order(recipes::created_at.desc())
            .limit(limit)
            .offset(offset)
            .select(RecipeSummaryRow::as_select())
            .load(&mut conn)?;

        let total = recipes::table
            .filter(recipes::deleted_at.is_null())
            .count()
            .get_result(&mut conn)?;

        Ok((rows, total))
    })();

    match result {
        Ok((rows, total)) => (
            StatusCode::OK,
            Json(ListRecipesResponse {
                recipes: rows.into_iter().map(RecipeSummary::from).collect(),
                total,
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!("Failed to list recipes: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to list recipes".to_string(),
                }),
            )
                .into_response()
        }
    }
}
