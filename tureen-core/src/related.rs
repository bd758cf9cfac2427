//! Recommendation candidates from the related-recipes graph.

use std::collections::HashSet;

use uuid::Uuid;

use crate::prefs::ProfilePrefs;

/// Computes the recommendation candidate set for a user.
///
/// `edges` is any collection of related-recipe pairs. Every pair is treated
/// as symmetric regardless of stored orientation, so data written before
/// edges were stored bidirectionally still recommends in both directions.
///
/// A recipe is a candidate when it shares an edge with a liked recipe and is
/// itself neither liked nor disliked. Saved recipes are not excluded. An
/// empty liked set yields an empty result. Set semantics: a recipe reachable
/// through several liked recipes appears once.
pub fn candidates<I>(prefs: &ProfilePrefs, edges: I) -> HashSet<Uuid>
where
    I: IntoIterator<Item = (Uuid, Uuid)>,
{
    let mut out = HashSet::new();
    if prefs.liked.is_empty() {
        return out;
    }

    for (a, b) in edges {
        for (from, to) in [(a, b), (b, a)] {
            if prefs.liked.contains(&from)
                && !prefs.liked.contains(&to)
                && !prefs.disliked.contains(&to)
            {
                out.insert(to);
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_liked_set_recommends_nothing() {
        let prefs = ProfilePrefs::default();
        let edges = vec![(Uuid::new_v4(), Uuid::new_v4())];
        assert!(candidates(&prefs, edges).is_empty());
    }

    #[test]
    fn test_neighbors_of_liked_recipe_are_candidates() {
        let (r1, r2, r3) = (Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4());
        let mut prefs = ProfilePrefs::default();
        prefs.liked.insert(r1);

        let result = candidates(&prefs, vec![(r1, r2), (r1, r3)]);
        assert_eq!(result, HashSet::from([r2, r3]));
    }

    #[test]
    fn test_edges_are_symmetric() {
        let (r1, r2) = (Uuid::new_v4(), Uuid::new_v4());
        let mut prefs = ProfilePrefs::default();
        prefs.liked.insert(r1);

        // Edge stored pointing at the liked recipe, not from it.
        let result = candidates(&prefs, vec![(r2, r1)]);
        assert_eq!(result, HashSet::from([r2]));
    }

    #[test]
    fn test_disliked_recipes_are_excluded() {
        let (r1, r2, r3) = (Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4());
        let mut prefs = ProfilePrefs::default();
        prefs.liked.insert(r1);
        prefs.disliked.insert(r2);

        let result = candidates(&prefs, vec![(r1, r2), (r1, r3)]);
        assert_eq!(result, HashSet::from([r3]));
    }

    #[test]
    fn test_liked_recipes_never_recommend_themselves() {
        let (r1, r2) = (Uuid::new_v4(), Uuid::new_v4());
        let mut prefs = ProfilePrefs::default();
        prefs.liked.insert(r1);
        prefs.liked.insert(r2);

        // Cyclically related liked recipes produce no candidates.
        let result = candidates(&prefs, vec![(r1, r2), (r2, r1)]);
        assert!(result.is_empty());
    }

    #[test]
    fn test_saved_recipes_are_not_excluded() {
        let (r1, r2) = (Uuid::new_v4(), Uuid::new_v4());
        let mut prefs = ProfilePrefs::default();
        prefs.liked.insert(r1);
        prefs.saved.insert(r2);

        let result = candidates(&prefs, vec![(r1, r2)]);
        assert_eq!(result, HashSet::from([r2]));
    }

    #[test]
    fn test_candidate_reachable_twice_appears_once() {
        let (r1, r2, r3) = (Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4());
        let mut prefs = ProfilePrefs::default();
        prefs.liked.insert(r1);
        prefs.liked.insert(r2);

        let result = candidates(&prefs, vec![(r1, r3), (r2, r3)]);
        assert_eq!(result.len(), 1);
        assert!(result.contains(&r3));
    }
}
