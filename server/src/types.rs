use std::collections::HashMap;

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use tureen_core::FlavorProfile;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::schema::recipes;

/// Compact recipe projection used by list, search-adjacent, recommendation
/// and user-detail responses.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RecipeSummary {
    pub id: Uuid,
    pub name: String,
    pub is_imported: bool,
    pub is_user_created: bool,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Queryable, Selectable)]
#[diesel(table_name = recipes)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct RecipeSummaryRow {
    pub id: Uuid,
    pub name: String,
    pub is_imported: bool,
    pub is_user_created: bool,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<RecipeSummaryRow> for RecipeSummary {
    fn from(row: RecipeSummaryRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            is_imported: row.is_imported,
            is_user_created: row.is_user_created,
            image_url: row.image_url,
            created_at: row.created_at,
        }
    }
}

/// Loads summaries for the given ids, returned in the order of `ids`.
/// Soft-deleted recipes and unknown ids are skipped.
pub fn summaries_in_order(
    conn: &mut PgConnection,
    ids: &[Uuid],
) -> QueryResult<Vec<RecipeSummary>> {
    let rows: Vec<RecipeSummaryRow> = recipes::table
        .filter(recipes::id.eq_any(ids))
        .filter(recipes::deleted_at.is_null())
        .select(RecipeSummaryRow::as_select())
        .load(conn)?;

    let mut by_id: HashMap<Uuid, RecipeSummaryRow> =
        rows.into_iter().map(|row| (row.id, row)).collect();

    Ok(ids
        .iter()
        .filter_map(|id| by_id.remove(id))
        .map(RecipeSummary::from)
        .collect())
}

/// Flat wire form of the six flavor attributes.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, ToSchema)]
pub struct FlavorValues {
    pub bitter: f64,
    pub meaty: f64,
    pub salty: f64,
    pub sour: f64,
    pub sweet: f64,
    pub piquant: f64,
}

impl From<FlavorValues> for FlavorProfile {
    fn from(v: FlavorValues) -> Self {
        Self {
            bitter: v.bitter,
            meaty: v.meaty,
            salty: v.salty,
            sour: v.sour,
            sweet: v.sweet,
            piquant: v.piquant,
        }
    }
}

impl From<FlavorProfile> for FlavorValues {
    fn from(p: FlavorProfile) -> Self {
        Self {
            bitter: p.bitter,
            meaty: p.meaty,
            salty: p.salty,
            sour: p.sour,
            sweet: p.sweet,
            piquant: p.piquant,
        }
    }
}
