//! Scenario tests for the preference and recommendation flow.
//!
//! These walk the end-to-end sequences the service performs: a user likes
//! and dislikes recipes, then the home view computes candidates from the
//! related-recipes graph.

use std::collections::HashSet;

use tureen_core::ingredient::{parse_ingredient_list, ListFormat};
use tureen_core::prefs::{ProfilePrefs, ToggleOutcome};
use tureen_core::related::candidates;
use uuid::Uuid;

/// recipe1 related to recipe2 and recipe3; user likes recipe1 only.
#[test]
fn test_liking_one_recipe_recommends_its_neighbors() {
    let (r1, r2, r3) = (Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4());
    let edges = vec![(r1, r2), (r1, r3)];

    let mut prefs = ProfilePrefs::default();
    prefs.toggle_like(r1);

    let result = candidates(&prefs, edges);
    assert_eq!(result, HashSet::from([r2, r3]));
}

/// Same graph, but the user also dislikes recipe2.
#[test]
fn test_disliking_a_neighbor_removes_it_from_recommendations() {
    let (r1, r2, r3) = (Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4());
    let edges = vec![(r1, r2), (r1, r3)];

    let mut prefs = ProfilePrefs::default();
    prefs.toggle_like(r1);
    prefs.toggle_dislike(r2);

    let result = candidates(&prefs, edges.clone());
    assert_eq!(result, HashSet::from([r3]));

    // Toggling the dislike off restores the neighbor.
    prefs.toggle_dislike(r2);
    let result = candidates(&prefs, edges);
    assert_eq!(result, HashSet::from([r2, r3]));
}

/// Recommendations never intersect the liked or disliked sets, whatever
/// sequence of toggles produced them.
#[test]
fn test_recommendations_disjoint_from_preference_sets() {
    let recipes: Vec<Uuid> = (0..6).map(|_| Uuid::new_v4()).collect();
    let edges: Vec<(Uuid, Uuid)> = recipes
        .windows(2)
        .map(|pair| (pair[0], pair[1]))
        .collect();

    let mut prefs = ProfilePrefs::default();
    prefs.toggle_like(recipes[0]);
    prefs.toggle_like(recipes[2]);
    prefs.toggle_dislike(recipes[3]);
    prefs.toggle_save(recipes[4]);

    let result = candidates(&prefs, edges);
    assert!(result.is_disjoint(&prefs.liked));
    assert!(result.is_disjoint(&prefs.disliked));
    assert!(!result.is_empty());
}

/// A recipe with no edge into any liked recipe is never recommended; there
/// is no popularity fallback.
#[test]
fn test_unconnected_recipes_are_never_recommended() {
    let (liked, neighbor, island) = (Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4());
    let mut prefs = ProfilePrefs::default();
    prefs.toggle_like(liked);

    let result = candidates(&prefs, vec![(liked, neighbor)]);
    assert!(!result.contains(&island));
}

/// The save toggle round-trips through Added/Removed without affecting what
/// the recommendation query sees.
#[test]
fn test_save_toggle_round_trip() {
    let (r1, r2) = (Uuid::new_v4(), Uuid::new_v4());
    let mut prefs = ProfilePrefs::default();
    prefs.toggle_like(r1);

    let effect = prefs.toggle_save(r2);
    assert_eq!(effect.outcome, ToggleOutcome::Added);
    assert_eq!(candidates(&prefs, vec![(r1, r2)]), HashSet::from([r2]));

    let effect = prefs.toggle_save(r2);
    assert_eq!(effect.outcome, ToggleOutcome::Removed);
    assert_eq!(candidates(&prefs, vec![(r1, r2)]), HashSet::from([r2]));
}

/// The "Chicken Rice" scenario: four whitespace tokens, three distinct
/// ingredients, stable across re-parsing.
#[test]
fn test_chicken_rice_links_three_ingredients() {
    let parsed = parse_ingredient_list("chicken chicken rice bacon", ListFormat::Whitespace);
    assert_eq!(parsed.len(), 3);

    let reparsed = parse_ingredient_list("chicken chicken rice bacon", ListFormat::Whitespace);
    assert_eq!(parsed, reparsed);
}
