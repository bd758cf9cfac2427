//! Bulk import boundary used by the operator CLI: one endpoint creating an
//! imported recipe per external-source row, one linking related-recipe
//! edges by external identifier.

pub mod recipe;
pub mod related;

use crate::AppState;
use axum::routing::post;
use axum::Router;
use utoipa::OpenApi;

/// Returns the router for /api/import endpoints (mounted at /api/import)
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/recipe", post(recipe::import_recipe))
        .route("/related", post(related::link_related))
}

#[derive(OpenApi)]
#[openapi(
    paths(recipe::import_recipe, related::link_related),
    components(schemas(
        recipe::ImportRecipeRequest,
        recipe::ImportRecipeResponse,
        related::LinkRelatedRequest,
        related::LinkRelatedResponse,
    ))
)]
pub struct ApiDoc;
