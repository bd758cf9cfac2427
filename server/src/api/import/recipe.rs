use crate::api::ErrorResponse;
use crate::auth::AuthUser;
use crate::db::DbPool;
use crate::get_conn;
use crate::linker::link_ingredients;
use crate::models::NewRecipe;
use crate::schema::recipes;
use crate::types::FlavorValues;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tureen_core::ingredient::ListFormat;
use tureen_core::FlavorProfile;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ImportRecipeRequest {
    pub name: String,
    /// Comma-separated ingredient phrases as exported by the source
    pub ingredient_list: String,
    /// External identifier; related-recipe edges are linked by this value
    pub source_url: String,
    pub source_name: Option<String>,
    pub source_rating: Option<i32>,
    pub source_time_seconds: Option<i32>,
    pub image_url: Option<String>,
    pub flavor: FlavorValues,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ImportRecipeResponse {
    pub id: Uuid,
}

#[utoipa::path(
    post,
    path = "/api/import/recipe",
    tag = "import",
    request_body = ImportRecipeRequest,
    responses(
        (status = 201, description = "Recipe imported", body = ImportRecipeResponse),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 409, description = "Source URL already imported", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn import_recipe(
    AuthUser(_user): AuthUser,
    State(pool): State<Arc<DbPool>>,
    Json(request): Json<ImportRecipeRequest>,
) -> impl IntoResponse {
    if request.name.trim().is_empty() || request.source_url.trim().is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "Name and source URL cannot be empty".to_string(),
            }),
        )
            .into_response();
    }

    let profile = FlavorProfile::from(request.flavor);
    if let Err(e) = profile.validate() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: e.to_string(),
            }),
        )
            .into_response();
    }

    let mut conn = get_conn!(pool);

    let result: Result<Uuid, diesel::result::Error> = conn.transaction(|conn| {
        let recipe_id: Uuid = diesel::insert_into(recipes::table)
            .values(NewRecipe {
                name: request.name.trim(),
                is_imported: true,
                ingredient_list: &request.ingredient_list,
                image_url: request.image_url.as_deref(),
                source_url: Some(request.source_url.trim()),
                source_name: request.source_name.as_deref(),
                source_rating: request.source_rating.unwrap_or(0),
                source_time_seconds: request.source_time_seconds.unwrap_or(0),
                bitter: profile.bitter,
                meaty: profile.meaty,
                salty: profile.salty,
                sour: profile.sour,
                sweet: profile.sweet,
                piquant: profile.piquant,
                ..Default::default()
            })
            .returning(recipes::id)
            .get_result(conn)?;

        link_ingredients(conn, recipe_id, &request.ingredient_list, ListFormat::CommaList)?;

        Ok(recipe_id)
    });

    match result {
        Ok(id) => (StatusCode::CREATED, Json(ImportRecipeResponse { id })).into_response(),
        Err(diesel::result::Error::DatabaseError(
            diesel::result::DatabaseErrorKind::UniqueViolation,
            _,
        )) => (
            StatusCode::CONFLICT,
            Json(ErrorResponse {
                error: format!("A recipe with source URL '{}' already exists", request.source_url),
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!("Failed to import recipe: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to import recipe".to_string(),
                }),
            )
                .into_response()
        }
    }
}
