use crate::api::ErrorResponse;
use crate::auth::AuthUser;
use crate::db::DbPool;
use crate::get_conn;
use crate::linker::link_ingredients;
use crate::models::NewRecipe;
use crate::schema::recipes;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tureen_core::ingredient::ListFormat;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateRecipeRequest {
    pub name: String,
    /// Whitespace-separated ingredient tokens; multi-word ingredients are
    /// written hyphenated ("black-beans").
    pub ingredient_list: String,
    pub instructions: String,
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CreateRecipeResponse {
    pub id: Uuid,
}

#[utoipa::path(
    post,
    path = "/api/recipes",
    tag = "recipes",
    request_body = CreateRecipeRequest,
    responses(
        (status = 201, description = "Recipe created successfully", body = CreateRecipeResponse),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn create_recipe(
    AuthUser(user): AuthUser,
    State(pool): State<Arc<DbPool>>,
    Json(request): Json<CreateRecipeRequest>,
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

    // Insert and link in one transaction; linking is an explicit step of
    // the create path, not a save-time hook.
    let result: Result<Uuid, diesel::result::Error> = conn.transaction(|conn| {
        let recipe_id: Uuid = diesel::insert_into(recipes::table)
            .values(NewRecipe {
                name: request.name.trim(),
                creator_id: Some(user.id),
                is_user_created: true,
                ingredient_list: &request.ingredient_list,
                instructions: &request.instructions,
                image_url: request.image_url.as_deref(),
                ..Default::default()
            })
            .returning(recipes::id)
            .get_result(conn)?;

        link_ingredients(conn, recipe_id, &request.ingredient_list, ListFormat::Whitespace)?;

        Ok(recipe_id)
    });

    match result {
        Ok(recipe_id) => (
            StatusCode::CREATED,
            Json(CreateRecipeResponse { id: recipe_id }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!("Failed to create recipe: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to create recipe".to_string(),
                }),
            )
                .into_response()
        }
    }
}
