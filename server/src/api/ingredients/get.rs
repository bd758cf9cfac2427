use crate::api::ErrorResponse;
use crate::db::DbPool;
use crate::get_conn;
use crate::models::Ingredient;
use crate::schema::{ingredients, recipe_ingredients, recipes};
use crate::types::{RecipeSummary, RecipeSummaryRow};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use diesel::prelude::*;
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct IngredientResponse {
    pub id: Uuid,
    pub raw_key: String,
    pub display_name: String,
    /// Recipes whose ingredient list links this ingredient, newest first
    pub recipes: Vec<RecipeSummary>,
}

#[utoipa::path(
    get,
    path = "/api/ingredients/{id}",
    tag = "ingredients",
    params(
        ("id" = Uuid, Path, description = "Ingredient ID")
    ),
    responses(
        (status = 200, description = "Ingredient details", body = IngredientResponse),
        (status = 404, description = "Ingredient not found", body = ErrorResponse)
    )
)]
pub async fn get_ingredient(
    State(pool): State<Arc<DbPool>>,
    Path(id): Path<Uuid>,
) -> impl IntoResponse {
    let mut conn = get_conn!(pool);

    let ingredient: Ingredient = match ingredients::table
        .filter(ingredients::id.eq(id))
        .select(Ingredient::as_select())
        .first(&mut conn)
    {
        Ok(i) => i,
        Err(diesel::NotFound) => {
            return (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse {
                    error: "Ingredient not found".to_string(),
                }),
            )
                .into_response();
        }
        Err(e) => {
            tracing::error!("Failed to fetch ingredient: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to fetch ingredient".to_string(),
                }),
            )
                .into_response();
        }
    };

    let linked: Result<Vec<RecipeSummaryRow>, diesel::result::Error> = recipe_ingredients::table
        .inner_join(recipes::table)
        .filter(recipe_ingredients::ingredient_id.eq(ingredient.id))
        .filter(recipes::deleted_at.is_null())
        .order(recipes::created_at.desc())
        .select(RecipeSummaryRow::as_select())
        .load(&mut conn);

    match linked {
        Ok(rows) => (
            StatusCode::OK,
            Json(IngredientResponse {
                id: ingredient.id,
                raw_key: ingredient.raw_key,
                display_name: ingredient.display_name,
                recipes: rows.into_iter().map(RecipeSummary::from).collect(),
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!("Failed to fetch ingredient recipes: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to fetch ingredient".to_string(),
                }),
            )
                .into_response()
        }
    }
}
