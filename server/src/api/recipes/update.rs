use crate::api::ErrorResponse;
use crate::auth::AuthUser;
use crate::db::DbPool;
use crate::get_conn;
use crate::linker::link_ingredients;
use crate::schema::recipes;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use diesel::prelude::*;
use serde::Deserialize;
use std::sync::Arc;
use tureen_core::ingredient::ListFormat;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateRecipeRequest {
    pub name: String,
    pub ingredient_list: String,
    pub instructions: String,
    pub image_url: Option<String>,
}

#[utoipa::path(
    put,
    path = "/api/recipes/{id}",
    tag = "recipes",
    params(
        ("id" = Uuid, Path, description = "Recipe ID")
    ),
    request_body = UpdateRecipeRequest,
    responses(
        (status = 204, description = "Recipe updated"),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Not the creator", body = ErrorResponse),
        (status = 404, description = "Recipe not found", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn update_recipe(
    AuthUser(user): AuthUser,
    State(pool): State<Arc<DbPool>>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateRecipeRequest>,
) -> impl IntoResponse {
    for (value, field) in [
        (&request.name, "Name"),
        (&request.ingredient_list, "Ingredient list"),
        (&request.instructions, "Instructions"),
    ] {
        if value.trim().is_empty() {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: format!("{} cannot be empty", field),
                }),
            )
                .into_response();
        }
    }

    let mut conn = get_conn!(pool);

    let creator_id: Option<Option<Uuid>> = match recipes::table
        .filter(recipes::id.eq(id))
        .filter(recipes::deleted_at.is_null())
        .select(recipes::creator_id)
        .first(&mut conn)
        .optional()
    {
        Ok(c) => c,
        Err(e) => {
            tracing::error!("Failed to fetch recipe: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to fetch recipe".to_string(),
                }),
            )
                .into_response();
        }
    };

    match creator_id {
        None => {
            return (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse {
                    error: "Recipe not found".to_string(),
                }),
            )
                .into_response();
        }
        Some(creator) if creator != Some(user.id) => {
            return (
                StatusCode::FORBIDDEN,
                Json(ErrorResponse {
                    error: "Only the creator can edit a recipe".to_string(),
                }),
            )
                .into_response();
        }
        Some(_) => {}
    }

    // The explicit relink after the text changes replaces the original's
    // save-time hook. Union semantics: ingredients linked from earlier
    // texts stay linked.
    let result: Result<(), diesel::result::Error> = conn.transaction(|conn| {
        diesel::update(recipes::table.find(id))
            .set((
                recipes::name.eq(request.name.trim()),
                recipes::ingredient_list.eq(&request.ingredient_list),
                recipes::instructions.eq(&request.instructions),
                recipes::image_url.eq(request.image_url.as_deref()),
            ))
            .execute(conn)?;

        link_ingredients(conn, id, &request.ingredient_list, ListFormat::Whitespace)?;

        Ok(())
    });

    match result {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => {
            tracing::error!("Failed to update recipe: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to update recipe".to_string(),
                }),
            )
                .into_response()
        }
    }
}
