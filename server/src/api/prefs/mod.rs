//! Preference toggle endpoints.
//!
//! Each endpoint toggles membership of a recipe in one of the caller's
//! preference sets. The toggle semantics live in `tureen_core::prefs`; this
//! module loads the caller's sets, applies the toggle, and persists the
//! returned changes in one transaction.

pub mod dislike;
pub mod like;
pub mod save;

use std::collections::HashSet;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use tureen_core::prefs::{ChangeOp, PrefSet, ProfilePrefs};
use utoipa::{OpenApi, ToSchema};
use uuid::Uuid;

use crate::api::ErrorResponse;
use crate::models::{NewDislikedRecipe, NewLikedRecipe, NewSavedRecipe};
use crate::schema::{disliked_recipes, liked_recipes, recipes, saved_recipes};
use crate::AppState;

/// Returns the router for the toggle endpoints (mounted at /api/recipes)
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/save", post(save::save_recipe))
        .route("/like", post(like::like_recipe))
        .route("/dislike", post(dislike::dislike_recipe))
}

#[derive(OpenApi)]
#[openapi(
    paths(save::save_recipe, like::like_recipe, dislike::dislike_recipe),
    components(schemas(ToggleRequest, ToggleResponse))
)]
pub struct ApiDoc;

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ToggleRequest {
    pub recipe_id: Uuid,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ToggleResponse {
    pub status: String,
}

/// Loads a user's three preference sets.
pub fn load_prefs(conn: &mut PgConnection, user_id: Uuid) -> QueryResult<ProfilePrefs> {
    let saved: HashSet<Uuid> = saved_recipes::table
        .filter(saved_recipes::user_id.eq(user_id))
        .select(saved_recipes::recipe_id)
        .load::<Uuid>(conn)?
        .into_iter()
        .collect();
    let liked: HashSet<Uuid> = liked_recipes::table
        .filter(liked_recipes::user_id.eq(user_id))
        .select(liked_recipes::recipe_id)
        .load::<Uuid>(conn)?
        .into_iter()
        .collect();
    let disliked: HashSet<Uuid> = disliked_recipes::table
        .filter(disliked_recipes::user_id.eq(user_id))
        .select(disliked_recipes::recipe_id)
        .load::<Uuid>(conn)?
        .into_iter()
        .collect();

    Ok(ProfilePrefs {
        saved,
        liked,
        disliked,
    })
}

/// Persists the membership changes a toggle produced. Inserts ignore
/// conflicts and deletes of absent rows are no-ops, so two racing identical
/// toggles cannot fail each other.
pub fn apply_changes(
    conn: &mut PgConnection,
    user_id: Uuid,
    recipe_id: Uuid,
    changes: &[(PrefSet, ChangeOp)],
) -> QueryResult<()> {
    for (set, op) in changes {
        match (set, op) {
            (PrefSet::Saved, ChangeOp::Insert) => {
                diesel::insert_into(saved_recipes::table)
                    .values(NewSavedRecipe { user_id, recipe_id })
                    .on_conflict((saved_recipes::user_id, saved_recipes::recipe_id))
                    .do_nothing()
                    .execute(conn)?;
            }
            (PrefSet::Saved, ChangeOp::Delete) => {
                diesel::delete(
                    saved_recipes::table
                        .filter(saved_recipes::user_id.eq(user_id))
                        .filter(saved_recipes::recipe_id.eq(recipe_id)),
                )
                .execute(conn)?;
            }
            (PrefSet::Liked, ChangeOp::Insert) => {
                diesel::insert_into(liked_recipes::table)
                    .values(NewLikedRecipe { user_id, recipe_id })
                    .on_conflict((liked_recipes::user_id, liked_recipes::recipe_id))
                    .do_nothing()
                    .execute(conn)?;
            }
            (PrefSet::Liked, ChangeOp::Delete) => {
                diesel::delete(
                    liked_recipes::table
                        .filter(liked_recipes::user_id.eq(user_id))
                        .filter(liked_recipes::recipe_id.eq(recipe_id)),
                )
                .execute(conn)?;
            }
            (PrefSet::Disliked, ChangeOp::Insert) => {
                diesel::insert_into(disliked_recipes::table)
                    .values(NewDislikedRecipe { user_id, recipe_id })
                    .on_conflict((disliked_recipes::user_id, disliked_recipes::recipe_id))
                    .do_nothing()
                    .execute(conn)?;
            }
            (PrefSet::Disliked, ChangeOp::Delete) => {
                diesel::delete(
                    disliked_recipes::table
                        .filter(disliked_recipes::user_id.eq(user_id))
                        .filter(disliked_recipes::recipe_id.eq(recipe_id)),
                )
                .execute(conn)?;
            }
        }
    }
    Ok(())
}

/// Fetches the recipe's name, or builds the 404 the toggle handlers share.
pub fn fetch_recipe_name(conn: &mut PgConnection, recipe_id: Uuid) -> Result<String, Response> {
    match recipes::table
        .filter(recipes::id.eq(recipe_id))
        .filter(recipes::deleted_at.is_null())
        .select(recipes::name)
        .first::<String>(conn)
        .optional()
    {
        Ok(Some(name)) => Ok(name),
        Ok(None) => Err((
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: "Recipe not found".to_string(),
            }),
        )
            .into_response()),
        Err(e) => {
            tracing::error!("Failed to fetch recipe: {}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to fetch recipe".to_string(),
                }),
            )
                .into_response())
        }
    }
}
