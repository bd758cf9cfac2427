pub mod error;
pub mod flavor;
pub mod ingredient;
pub mod prefs;
pub mod related;

pub use error::FlavorError;
pub use flavor::FlavorProfile;
pub use ingredient::{normalize, parse_ingredient_list, ListFormat, NormalizedIngredient};
pub use prefs::{ChangeOp, PrefSet, ProfilePrefs, ToggleEffect, ToggleOutcome};
pub use related::candidates;
