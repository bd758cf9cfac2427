//! Bulk CSV import: external-source recipe rows and related-recipe edges.
//!
//! Recipe CSV columns:
//! `id,bitter,meaty,salty,sour,sweet,piquant,ingredients,recipeName,smallImageUrls,totalTimeInSeconds,rating,sourceDisplayName`
//!
//! Recommendations CSV columns: a source identifier followed by the
//! identifiers of its related recipes.

use std::io::Write;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::client::ApiClient;

#[derive(Serialize)]
struct Flavor {
    bitter: f64,
    meaty: f64,
    salty: f64,
    sour: f64,
    sweet: f64,
    piquant: f64,
}

#[derive(Serialize)]
struct ImportRecipeRequest {
    name: String,
    ingredient_list: String,
    source_url: String,
    source_name: Option<String>,
    source_rating: Option<i32>,
    source_time_seconds: Option<i32>,
    image_url: Option<String>,
    flavor: Flavor,
}

#[derive(Deserialize)]
struct ImportRecipeResponse {
    #[allow(dead_code)]
    id: String,
}

#[derive(Serialize)]
struct LinkRelatedRequest {
    source_url: String,
    related_source_urls: Vec<String>,
}

#[derive(Deserialize)]
struct LinkRelatedResponse {
    #[allow(dead_code)]
    linked: usize,
}

fn field(record: &csv::StringRecord, index: usize) -> String {
    record.get(index).unwrap_or("").trim().to_string()
}

fn parse_flavor(record: &csv::StringRecord, index: usize) -> f64 {
    field(record, index).parse().unwrap_or(0.0)
}

/// Takes the first of the space-separated image URLs and upgrades plain
/// http to https, the way the source exported them.
fn first_image_url(raw: &str) -> Option<String> {
    let url = raw.split(' ').next().unwrap_or("");
    if url.is_empty() {
        return None;
    }
    match url.strip_prefix("http:") {
        Some(rest) => Some(format!("https:{}", rest)),
        None => Some(url.to_string()),
    }
}

pub async fn import_recipes(client: &ApiClient, file: &str) -> Result<()> {
    let mut reader = csv::Reader::from_path(file)
        .with_context(|| format!("Failed to open recipe file {}", file))?;

    print!("Creating recipes...");
    std::io::stdout().flush().ok();

    let mut imported = 0usize;
    let mut failed = 0usize;

    for (row_number, record) in reader.records().enumerate() {
        let record = record.with_context(|| format!("Failed to read row {}", row_number + 1))?;

        let request = ImportRecipeRequest {
            name: field(&record, 8),
            ingredient_list: field(&record, 7).to_lowercase(),
            source_url: field(&record, 0),
            source_name: Some(field(&record, 12)).filter(|s| !s.is_empty()),
            source_rating: field(&record, 11).parse().ok(),
            source_time_seconds: field(&record, 10).parse().ok(),
            image_url: first_image_url(&field(&record, 9)),
            flavor: Flavor {
                bitter: parse_flavor(&record, 1),
                meaty: parse_flavor(&record, 2),
                salty: parse_flavor(&record, 3),
                sour: parse_flavor(&record, 4),
                sweet: parse_flavor(&record, 5),
                piquant: parse_flavor(&record, 6),
            },
        };

        match client
            .post_json::<_, ImportRecipeResponse>("/api/import/recipe", &request)
            .await
        {
            Ok(_) => imported += 1,
            Err(e) => {
                failed += 1;
                eprintln!("\n    - Row {} ('{}') failed: {}", row_number + 1, request.name, e);
            }
        }

        if (imported + failed) % 100 == 0 {
            print!(".");
            std::io::stdout().flush().ok();
        }
    }

    println!();
    println!("Finished importing {}: {} recipes, {} failures.", file, imported, failed);
    Ok(())
}

pub async fn link_related(client: &ApiClient, file: &str) -> Result<()> {
    let mut reader = csv::Reader::from_path(file)
        .with_context(|| format!("Failed to open recommendations file {}", file))?;

    print!("Linking related recipes...");
    std::io::stdout().flush().ok();

    let mut linked_rows = 0usize;

    for (row_number, record) in reader.records().enumerate() {
        let record = record.with_context(|| format!("Failed to read row {}", row_number + 1))?;

        let request = LinkRelatedRequest {
            source_url: field(&record, 0),
            related_source_urls: (1..record.len())
                .map(|i| field(&record, i))
                .filter(|s| !s.is_empty())
                .collect(),
        };

        match client
            .post_json::<_, LinkRelatedResponse>("/api/import/related", &request)
            .await
        {
            Ok(_) => linked_rows += 1,
            Err(e) => {
                // A missing external id aborts the rest of the pass.
                println!();
                println!("    - Row {} failed: {}", row_number + 1, e);
                println!("Aborting after {} linked rows.", linked_rows);
                return Ok(());
            }
        }

        if linked_rows % 100 == 0 {
            print!(".");
            std::io::stdout().flush().ok();
        }
    }

    println!();
    println!("Finished linking related recipes ({} rows).", linked_rows);
    Ok(())
}
