use crate::api::ErrorResponse;
use crate::db::DbPool;
use crate::get_conn;
use crate::models::Recipe;
use crate::schema::{ingredients, recipe_ingredients, recipes, related_recipes, users};
use crate::types::{summaries_in_order, FlavorValues, RecipeSummary};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::Serialize;
use std::sync::Arc;
use tureen_core::FlavorProfile;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct IngredientSummary {
    pub id: Uuid,
    pub display_name: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CreatorSummary {
    pub id: Uuid,
    pub username: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RecipeResponse {
    pub id: Uuid,
    pub name: String,
    pub creator: Option<CreatorSummary>,
    pub is_imported: bool,
    pub is_user_created: bool,
    pub ingredient_list: String,
    pub instructions: String,
    pub image_url: Option<String>,
    pub source_url: Option<String>,
    pub source_name: Option<String>,
    pub source_rating: i32,
    pub source_time_seconds: i32,
    pub flavor_profile: FlavorValues,
    pub ingredients: Vec<IngredientSummary>,
    pub related_recipes: Vec<RecipeSummary>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[utoipa::path(
    get,
    path = "/api/recipes/{id}",
    tag = "recipes",
    params(
        ("id" = Uuid, Path, description = "Recipe ID")
    ),
    responses(
        (status = 200, description = "Recipe details", body = RecipeResponse),
        (status = 404, description = "Recipe not found", body = ErrorResponse)
    )
)]
pub async fn get_recipe(
    State(pool): State<Arc<DbPool>>,
    Path(id): Path<Uuid>,
) -> impl IntoResponse {
    let mut conn = get_conn!(pool);

    let recipe: Recipe = match recipes::table
        .filter(recipes::id.eq(id))
        .filter(recipes::deleted_at.is_null())
        .select(Recipe::as_select())
        .first(&mut conn)
    {
        Ok(r) => r,
        Err(diesel::NotFound) => {
            return (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse {
                    error: "Recipe not found".to_string(),
                }),
            )
                .into_response();
        }
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

    let result: Result<RecipeResponse, diesel::result::Error> = (|| {
        let linked: Vec<(Uuid, String)> = recipe_ingredients::table
            .inner_join(ingredients::table)
            .filter(recipe_ingredients::recipe_id.eq(recipe.id))
            .select((ingredients::id, ingredients::display_name))
            .order(ingredients::display_name.asc())
            .load(&mut conn)?;

        // Edges are stored in both directions, so one side is enough here.
        let related_ids: Vec<Uuid> = related_recipes::table
            .filter(related_recipes::recipe_id.eq(recipe.id))
            .select(related_recipes::related_id)
            .load(&mut conn)?;
        let related = summaries_in_order(&mut conn, &related_ids)?;

        let creator = match recipe.creator_id {
            Some(creator_id) => users::table
                .filter(users::id.eq(creator_id))
                .filter(users::deleted_at.is_null())
                .select((users::id, users::username))
                .first::<(Uuid, String)>(&mut conn)
                .optional()?
                .map(|(id, username)| CreatorSummary { id, username }),
            None => None,
        };

        Ok(RecipeResponse {
            id: recipe.id,
            name: recipe.name,
            creator,
            is_imported: recipe.is_imported,
            is_user_created: recipe.is_user_created,
            ingredient_list: recipe.ingredient_list,
            instructions: recipe.instructions,
            image_url: recipe.image_url,
            source_url: recipe.source_url,
            source_name: recipe.source_name,
            source_rating: recipe.source_rating,
            source_time_seconds: recipe.source_time_seconds,
            flavor_profile: FlavorValues::from(FlavorProfile {
                bitter: recipe.bitter,
                meaty: recipe.meaty,
                salty: recipe.salty,
                sour: recipe.sour,
                sweet: recipe.sweet,
                piquant: recipe.piquant,
            }),
            ingredients: linked
                .into_iter()
                .map(|(id, display_name)| IngredientSummary { id, display_name })
                .collect(),
            related_recipes: related,
            created_at: recipe.created_at,
            updated_at: recipe.updated_at,
        })
    })();

    match result {
        Ok(response) => (StatusCode::OK, Json(response)).into_response(),
        Err(e) => {
            tracing::error!("Failed to fetch recipe associations: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to fetch recipe".to_string(),
                }),
            )
                .into_response()
        }
    }
}
