use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

#[derive(Queryable, Selectable, Debug)]
#[diesel(table_name = crate::schema::users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
#[allow(dead_code)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::users)]
pub struct NewUser<'a> {
    pub username: &'a str,
    pub password_hash: &'a str,
}

#[derive(Queryable, Selectable, Debug)]
#[diesel(table_name = crate::schema::sessions)]
#[diesel(check_for_backend(diesel::pg::Pg))]
#[allow(dead_code)]
pub struct Session {
    pub id: Uuid,
    pub user_id: Uuid,
    pub token_hash: String,
    pub expires_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::sessions)]
pub struct NewSession<'a> {
    pub user_id: Uuid,
    pub token_hash: &'a str,
    pub expires_at: DateTime<Utc>,
}

#[derive(Queryable, Selectable, Debug)]
#[diesel(table_name = crate::schema::ingredients)]
#[diesel(check_for_backend(diesel::pg::Pg))]
#[allow(dead_code)]
pub struct Ingredient {
    pub id: Uuid,
    pub raw_key: String,
    pub display_name: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::ingredients)]
pub struct NewIngredient<'a> {
    pub raw_key: &'a str,
    pub display_name: &'a str,
}

#[derive(Queryable, Selectable, Debug)]
#[diesel(table_name = crate::schema::recipes)]
#[diesel(check_for_backend(diesel::pg::Pg))]
#[allow(dead_code)]
pub struct Recipe {
    pub id: Uuid,
    pub name: String,
    pub creator_id: Option<Uuid>,
    pub is_imported: bool,
    pub is_user_created: bool,
    pub ingredient_list: String,
    pub instructions: String,
    pub image_url: Option<String>,
    pub source_url: Option<String>,
    pub source_name: Option<String>,
    pub source_rating: i32,
    pub source_time_seconds: i32,
    pub bitter: f64,
    pub meaty: f64,
    pub salty: f64,
    pub sour: f64,
    pub sweet: f64,
    pub piquant: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

#[derive(Insertable, Default)]
#[diesel(table_name = crate::schema::recipes)]
pub struct NewRecipe<'a> {
    pub name: &'a str,
    pub creator_id: Option<Uuid>,
    pub is_imported: bool,
    pub is_user_created: bool,
    pub ingredient_list: &'a str,
    pub instructions: &'a str,
    pub image_url: Option<&'a str>,
    pub source_url: Option<&'a str>,
    pub source_name: Option<&'a str>,
    pub source_rating: i32,
    pub source_time_seconds: i32,
    pub bitter: f64,
    pub meaty: f64,
    pub salty: f64,
    pub sour: f64,
    pub sweet: f64,
    pub piquant: f64,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::recipe_ingredients)]
pub struct NewRecipeIngredient {
    pub recipe_id: Uuid,
    pub ingredient_id: Uuid,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::related_recipes)]
pub struct NewRelatedRecipe {
    pub recipe_id: Uuid,
    pub related_id: Uuid,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::saved_recipes)]
pub struct NewSavedRecipe {
    pub user_id: Uuid,
    pub recipe_id: Uuid,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::liked_recipes)]
pub struct NewLikedRecipe {
    pub user_id: Uuid,
    pub recipe_id: Uuid,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::disliked_recipes)]
pub struct NewDislikedRecipe {
    pub user_id: Uuid,
    pub recipe_id: Uuid,
}
