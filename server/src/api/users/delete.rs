use crate::api::ErrorResponse;
use crate::auth::{delete_sessions_for_user, AuthUser};
use crate::db::DbPool;
use crate::get_conn;
use crate::schema::users;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use diesel::prelude::*;
use std::sync::Arc;

#[utoipa::path(
    delete,
    path = "/api/users/me",
    tag = "users",
    responses(
        (status = 204, description = "Account deleted"),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn delete_account(
    AuthUser(user): AuthUser,
    State(pool): State<Arc<DbPool>>,
) -> impl IntoResponse {
    let mut conn = get_conn!(pool);

    // Soft-delete the user and revoke every session; created recipes stay,
    // with creator_id intact, but the creator no longer resolves publicly.
    let result: Result<(), diesel::result::Error> = conn.transaction(|conn| {
        diesel::update(users::table.find(user.id))
            .set(users::deleted_at.eq(Some(chrono::Utc::now())))
            .execute(conn)?;
        delete_sessions_for_user(conn, user.id)?;
        Ok(())
    });

    match result {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => {
            tracing::error!("Failed to delete account: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to delete account".to_string(),
                }),
            )
                .into_response()
        }
    }
}
