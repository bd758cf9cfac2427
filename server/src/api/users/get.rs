use crate::api::ErrorResponse;
use crate::db::DbPool;
use crate::get_conn;
use crate::schema::{recipes, saved_recipes, users};
use crate::types::{RecipeSummary, RecipeSummaryRow};
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
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UserDetailResponse {
    pub id: Uuid,
    pub username: String,
    pub created_at: DateTime<Utc>,
    /// Recipes this user created, newest first
    pub created_recipes: Vec<RecipeSummary>,
    /// Recipes this user saved, newest first
    pub saved_recipes: Vec<RecipeSummary>,
}

#[utoipa::path(
    get,
    path = "/api/users/{username}",
    tag = "users",
    params(
        ("username" = String, Path, description = "Username")
    ),
    responses(
        (status = 200, description = "User details", body = UserDetailResponse),
        (status = 404, description = "User not found", body = ErrorResponse)
    )
)]
pub async fn get_user(
    State(pool): State<Arc<DbPool>>,
    Path(username): Path<String>,
) -> impl IntoResponse {
    let mut conn = get_conn!(pool);

    let user: (Uuid, String, DateTime<Utc>) = match users::table
        .filter(users::username.eq(&username))
        .filter(users::deleted_at.is_null())
        .select((users::id, users::username, users::created_at))
        .first(&mut conn)
    {
        Ok(u) => u,
        Err(diesel::NotFound) => {
            return (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse {
                    error: "User not found".to_string(),
                }),
            )
                .into_response();
        }
        Err(e) => {
            tracing::error!("Failed to fetch user: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to fetch user".to_string(),
                }),
            )
                .into_response();
        }
    };
    let (user_id, username, created_at) = user;

    let result: Result<(Vec<RecipeSummaryRow>, Vec<RecipeSummaryRow>), diesel::result::Error> =
        (|| {
            let created = recipes::table
                .filter(recipes::creator_id.eq(user_id))
                .filter(recipes::deleted_at.is_null())
                .order(recipes::created_at.desc())
                .select(RecipeSummaryRow::as_select())
                .load(&mut conn)?;

            let saved = saved_recipes::table
                .inner_join(recipes::table)
                .filter(saved_recipes::user_id.eq(user_id))
                .filter(recipes::deleted_at.is_null())
                .order(saved_recipes::created_at.desc())
                .select(RecipeSummaryRow::as_select())
                .load(&mut conn)?;

            Ok((created, saved))
        })();

    match result {
        Ok((created, saved)) => (
            StatusCode::OK,
            Json(UserDetailResponse {
                id: user_id,
                username,
                created_at,
                created_recipes: created.into_iter().map(RecipeSummary::from).collect(),
                saved_recipes: saved.into_iter().map(RecipeSummary::from).collect(),
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!("Failed to fetch user recipes: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to fetch user".to_string(),
                }),
            )
                .into_response()
        }
    }
}
