//! Flavor profile attributes carried by imported recipes.

use serde::{Deserialize, Serialize};

use crate::error::FlavorError;

/// Six bounded flavor attributes, each in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FlavorProfile {
    pub bitter: f64,
    pub meaty: f64,
    pub salty: f64,
    pub sour: f64,
    pub sweet: f64,
    pub piquant: f64,
}

impl FlavorProfile {
    /// Checks every attribute against the [0, 1] bound, reporting the first
    /// offender. NaN fails the bound check too.
    pub fn validate(&self) -> Result<(), FlavorError> {
        let fields = [
            ("bitter", self.bitter),
            ("meaty", self.meaty),
            ("salty", self.salty),
            ("sour", self.sour),
            ("sweet", self.sweet),
            ("piquant", self.piquant),
        ];
        for (field, value) in fields {
            if !(0.0..=1.0).contains(&value) {
                return Err(FlavorError::OutOfRange { field, value });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_profile_is_valid() {
        assert!(FlavorProfile::default().validate().is_ok());
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let profile = FlavorProfile {
            bitter: 0.0,
            meaty: 1.0,
            salty: 0.5,
            sour: 0.1666,
            sweet: 0.8333,
            piquant: 1.0,
        };
        assert!(profile.validate().is_ok());
    }

    #[test]
    fn test_out_of_range_reports_field() {
        let profile = FlavorProfile {
            sweet: 1.5,
            ..Default::default()
        };
        assert_eq!(
            profile.validate(),
            Err(FlavorError::OutOfRange {
                field: "sweet",
                value: 1.5
            })
        );
    }

    #[test]
    fn test_nan_is_rejected() {
        let profile = FlavorProfile {
            piquant: f64::NAN,
            ..Default::default()
        };
        assert!(profile.validate().is_err());
    }

    #[test]
    fn test_serializes_flat() {
        let json = serde_json::to_value(FlavorProfile::default()).unwrap();
        assert_eq!(json["bitter"], 0.0);
        assert_eq!(json["piquant"], 0.0);
    }
}
