//! Per-user preference sets with toggle semantics.
//!
//! A toggle adds the recipe when absent and removes it when present; there
//! are no separate add/remove operations. Liking and disliking are mutually
//! exclusive: adding to one set removes from the other in the same step.
//! Saving has no interaction with either.
//!
//! Toggles return the explicit list of membership changes to persist, so
//! the store layer can apply them in one transaction instead of relying on
//! hidden write-time side effects.

use std::collections::HashSet;

use uuid::Uuid;

/// Which preference set a change applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrefSet {
    Saved,
    Liked,
    Disliked,
}

/// Whether a toggle ended up adding or removing the recipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    Added,
    Removed,
}

/// One membership change to persist. A `Delete` of an absent row is a no-op
/// at the store layer, which is why the opposite-set removal on like/dislike
/// can be issued unconditionally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeOp {
    Insert,
    Delete,
}

/// The result of a toggle: the outcome for the caller's response message and
/// the changes (all targeting the toggled recipe) for the store layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleEffect {
    pub outcome: ToggleOutcome,
    pub changes: Vec<(PrefSet, ChangeOp)>,
}

/// A user's three preference sets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfilePrefs {
    pub saved: HashSet<Uuid>,
    pub liked: HashSet<Uuid>,
    pub disliked: HashSet<Uuid>,
}

impl ProfilePrefs {
    pub fn toggle_save(&mut self, recipe: Uuid) -> ToggleEffect {
        if self.saved.remove(&recipe) {
            ToggleEffect {
                outcome: ToggleOutcome::Removed,
                changes: vec![(PrefSet::Saved, ChangeOp::Delete)],
            }
        } else {
            self.saved.insert(recipe);
            ToggleEffect {
                outcome: ToggleOutcome::Added,
                changes: vec![(PrefSet::Saved, ChangeOp::Insert)],
            }
        }
    }

    pub fn toggle_like(&mut self, recipe: Uuid) -> ToggleEffect {
        if self.liked.remove(&recipe) {
            ToggleEffect {
                outcome: ToggleOutcome::Removed,
                changes: vec![(PrefSet::Liked, ChangeOp::Delete)],
            }
        } else {
            self.liked.insert(recipe);
            self.disliked.remove(&recipe);
            ToggleEffect {
                outcome: ToggleOutcome::Added,
                changes: vec![
                    (PrefSet::Liked, ChangeOp::Insert),
                    (PrefSet::Disliked, ChangeOp::Delete),
                ],
            }
        }
    }

    pub fn toggle_dislike(&mut self, recipe: Uuid) -> ToggleEffect {
        if self.disliked.remove(&recipe) {
            ToggleEffect {
                outcome: ToggleOutcome::Removed,
                changes: vec![(PrefSet::Disliked, ChangeOp::Delete)],
            }
        } else {
            self.disliked.insert(recipe);
            self.liked.remove(&recipe);
            ToggleEffect {
                outcome: ToggleOutcome::Added,
                changes: vec![
                    (PrefSet::Disliked, ChangeOp::Insert),
                    (PrefSet::Liked, ChangeOp::Delete),
                ],
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recipe() -> Uuid {
        Uuid::new_v4()
    }

    #[test]
    fn test_toggle_save_adds_then_removes() {
        let mut prefs = ProfilePrefs::default();
        let r = recipe();

        let effect = prefs.toggle_save(r);
        assert_eq!(effect.outcome, ToggleOutcome::Added);
        assert!(prefs.saved.contains(&r));

        let effect = prefs.toggle_save(r);
        assert_eq!(effect.outcome, ToggleOutcome::Removed);
        assert!(!prefs.saved.contains(&r));
    }

    #[test]
    fn test_toggle_save_does_not_touch_like_sets() {
        let mut prefs = ProfilePrefs::default();
        let r = recipe();
        prefs.liked.insert(r);

        prefs.toggle_save(r);
        assert!(prefs.liked.contains(&r));
        assert!(prefs.disliked.is_empty());
    }

    #[test]
    fn test_toggle_like_twice_restores_original_state() {
        let mut prefs = ProfilePrefs::default();
        let r = recipe();
        let before = prefs.clone();

        prefs.toggle_like(r);
        prefs.toggle_like(r);
        assert_eq!(prefs, before);
    }

    #[test]
    fn test_like_removes_from_disliked() {
        let mut prefs = ProfilePrefs::default();
        let r = recipe();

        prefs.toggle_dislike(r);
        assert!(prefs.disliked.contains(&r));

        let effect = prefs.toggle_like(r);
        assert_eq!(effect.outcome, ToggleOutcome::Added);
        assert!(prefs.liked.contains(&r));
        assert!(!prefs.disliked.contains(&r));
    }

    #[test]
    fn test_dislike_removes_from_liked() {
        let mut prefs = ProfilePrefs::default();
        let r = recipe();

        prefs.toggle_like(r);
        prefs.toggle_dislike(r);
        assert!(prefs.disliked.contains(&r));
        assert!(!prefs.liked.contains(&r));
    }

    #[test]
    fn test_like_effect_lists_opposite_set_delete() {
        let mut prefs = ProfilePrefs::default();
        let effect = prefs.toggle_like(recipe());
        assert_eq!(
            effect.changes,
            vec![
                (PrefSet::Liked, ChangeOp::Insert),
                (PrefSet::Disliked, ChangeOp::Delete),
            ]
        );
    }

    #[test]
    fn test_unlike_effect_only_deletes_liked() {
        let mut prefs = ProfilePrefs::default();
        let r = recipe();
        prefs.toggle_like(r);

        let effect = prefs.toggle_like(r);
        assert_eq!(effect.changes, vec![(PrefSet::Liked, ChangeOp::Delete)]);
    }
}
