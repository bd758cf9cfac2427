use crate::api::ErrorResponse;
use crate::db::DbPool;
use crate::get_conn;
use crate::schema::ingredients;
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
use uuid::Uuid;

const DEFAULT_LIMIT: i64 = 100;
const MAX_LIMIT: i64 = 500;

#[derive(Debug, Deserialize, IntoParams)]
pub struct ListIngredientsParams {
    /// Number of items to return (default: 100, max: 500)
    pub limit: Option<i64>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct IngredientEntry {
    pub id: Uuid,
    pub raw_key: String,
    pub display_name: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ListIngredientsResponse {
    pub ingredients: Vec<IngredientEntry>,
}

#[utoipa::path(
    get,
    path = "/api/ingredients",
    tag = "ingredients",
    params(ListIngredientsParams),
    responses(
        (status = 200, description = "Ingredients ordered by name", body = ListIngredientsResponse)
    )
)]
pub async fn list_ingredients(
    State(pool): State<Arc<DbPool>>,
    Query(params): Query<ListIngredientsParams>,
) -> impl IntoResponse {
    let limit = params.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT);

    let mut conn = get_conn!(pool);

    let rows: Result<Vec<(Uuid, String, String)>, diesel::result::Error> = ingredients::table
        .order(ingredients::display_name.asc())
        .limit(limit)
        .select((
            ingredients::id,
            ingredients::raw_key,
            ingredients::display_name,
        ))
        .load(&mut conn);

    match rows {
        Ok(rows) => (
            StatusCode::OK,
            Json(ListIngredientsResponse {
                ingredients: rows
                    .into_iter()
                    .map(|(id, raw_key, display_name)| IngredientEntry {
                        id,
                        raw_key,
                        display_name,
                    })
                    .collect(),
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!("Failed to list ingredients: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to list ingredients".to_string(),
                }),
            )
                .into_response()
        }
    }
}
