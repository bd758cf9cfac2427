use crate::api::ErrorResponse;
use crate::db::DbPool;
use crate::get_conn;
use crate::schema::users;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use diesel::prelude::*;
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UserEntry {
    pub id: Uuid,
    pub username: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ListUsersResponse {
    pub users: Vec<UserEntry>,
}

#[utoipa::path(
    get,
    path = "/api/users",
    tag = "users",
    responses(
        (status = 200, description = "All users", body = ListUsersResponse)
    )
)]
pub async fn list_users(State(pool): State<Arc<DbPool>>) -> impl IntoResponse {
    let mut conn = get_conn!(pool);

    let rows: Result<Vec<(Uuid, String)>, diesel::result::Error> = users::table
        .filter(users::deleted_at.is_null())
        .order(users::username.asc())
        .select((users::id, users::username))
        .load(&mut conn);

    match rows {
        Ok(rows) => (
            StatusCode::OK,
            Json(ListUsersResponse {
                users: rows
                    .into_iter()
                    .map(|(id, username)| UserEntry { id, username })
                    .collect(),
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!("Failed to list users: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to list users".to_string(),
                }),
            )
                .into_response()
        }
    }
}
