use crate::api::ErrorResponse;
use crate::auth::AuthUser;
use crate::db::DbPool;
use crate::get_conn;
use crate::models::NewRelatedRecipe;
use crate::schema::{recipes, related_recipes};
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct LinkRelatedRequest {
    /// External identifier of the source recipe
    pub source_url: String,
    /// External identifiers of the recipes to relate to it
    pub related_source_urls: Vec<String>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct LinkRelatedResponse {
    /// Number of related recipes linked (self-references skipped)
    pub linked: usize,
}

/// Resolves every external identifier before writing anything; a single
/// unknown identifier fails the whole request so the operator tooling can
/// abort its pass.
#[utoipa::path(
    post,
    path = "/api/import/related",
    tag = "import",
    request_body = LinkRelatedRequest,
    responses(
        (status = 200, description = "Edges linked in both directions", body = LinkRelatedResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "An external identifier did not resolve", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn link_related(
    AuthUser(_user): AuthUser,
    State(pool): State<Arc<DbPool>>,
    Json(request): Json<LinkRelatedRequest>,
) -> impl IntoResponse {
    let mut conn = get_conn!(pool);

    let recipe_id = match resolve(&mut conn, &request.source_url) {
        Ok(Some(id)) => id,
        Ok(None) => return missing(&request.source_url),
        Err(e) => return query_failed(e),
    };

    let mut related_ids = Vec::with_capacity(request.related_source_urls.len());
    for url in &request.related_source_urls {
        match resolve(&mut conn, url) {
            Ok(Some(id)) => related_ids.push(id),
            Ok(None) => return missing(url),
            Err(e) => return query_failed(e),
        }
    }

    // Both directions per edge, so the symmetry the recommendation query
    // relies on is written down rather than assumed.
    let result: Result<usize, diesel::result::Error> = conn.transaction(|conn| {
        let mut linked = 0;
        for related_id in related_ids {
            if related_id == recipe_id {
                continue;
            }
            let edges = [
                NewRelatedRecipe {
                    recipe_id,
                    related_id,
                },
                NewRelatedRecipe {
                    recipe_id: related_id,
                    related_id: recipe_id,
                },
            ];
            diesel::insert_into(related_recipes::table)
                .values(&edges[..])
                .on_conflict((related_recipes::recipe_id, related_recipes::related_id))
                .do_nothing()
                .execute(conn)?;
            linked += 1;
        }
        Ok(linked)
    });

    match result {
        Ok(linked) => (StatusCode::OK, Json(LinkRelatedResponse { linked })).into_response(),
        Err(e) => query_failed(e),
    }
}

fn resolve(conn: &mut PgConnection, source_url: &str) -> QueryResult<Option<Uuid>> {
    recipes::table
        .filter(recipes::source_url.eq(source_url))
        .filter(recipes::deleted_at.is_null())
        .select(recipes::id)
        .first(conn)
        .optional()
}

fn missing(source_url: &str) -> axum::response::Response {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: format!("No recipe with source URL '{}'", source_url),
        }),
    )
        .into_response()
}

fn query_failed(e: diesel::result::Error) -> axum::response::Response {
    tracing::error!("Failed to link related recipes: {}", e);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: "Failed to link related recipes".to_string(),
        }),
    )
        .into_response()
}
