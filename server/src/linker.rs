//! Ingredient linking against the store.
//!
//! Invoked explicitly by the create/update/import paths after the recipe's
//! ingredient list text has been written. Linking is a union: ingredients
//! from earlier texts are never removed here.

use diesel::prelude::*;
use tureen_core::ingredient::{parse_ingredient_list, ListFormat};
use uuid::Uuid;

use crate::models::{NewIngredient, NewRecipeIngredient};
use crate::schema::{ingredients, recipe_ingredients};

/// Parses the ingredient list text, gets or creates each normalized
/// ingredient, and associates it with the recipe. Idempotent: re-linking
/// with unchanged text changes nothing. Returns the number of distinct
/// ingredients in the parsed text.
pub fn link_ingredients(
    conn: &mut PgConnection,
    recipe_id: Uuid,
    ingredient_list: &str,
    format: ListFormat,
) -> QueryResult<usize> {
    let parsed = parse_ingredient_list(ingredient_list, format);

    for entry in &parsed {
        // Get-or-create. Two concurrent first uses of the same key race;
        // the unique index on raw_key makes the loser's insert a no-op.
        diesel::insert_into(ingredients::table)
            .values(NewIngredient {
                raw_key: &entry.raw_key,
                display_name: &entry.display_name,
            })
            .on_conflict(ingredients::raw_key)
            .do_nothing()
            .execute(conn)?;

        let ingredient_id: Uuid = ingredients::table
            .filter(ingredients::raw_key.eq(&entry.raw_key))
            .select(ingredients::id)
            .first(conn)?;

        diesel::insert_into(recipe_ingredients::table)
            .values(NewRecipeIngredient {
                recipe_id,
                ingredient_id,
            })
            .on_conflict((
                recipe_ingredients::recipe_id,
                recipe_ingredients::ingredient_id,
            ))
            .do_nothing()
            .execute(conn)?;
    }

    Ok(parsed.len())
}
