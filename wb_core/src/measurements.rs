//! # Measurements
//!
//! Raw inputs describing one aircraft: either scale readings from a fresh
//! weighing, or the figures from a previous weighing plus a single component
//! change.
//!
//! Wing panel numbering:
//!
//! | Panels | Readings used                                             |
//! |--------|-----------------------------------------------------------|
//! | 1      | wing 1                                                    |
//! | 2      | left + right inner (1, 2)                                 |
//! | 3      | left + right inner + centre or outer (1, 2, 3)            |
//! | 4      | left + right inner + left + right tip or winglet (1 to 4) |
//! | 6      | inner, outer and winglet on each side (1 to 6)            |

use serde::{Deserialize, Serialize};

/// Scale readings taken from a specific aircraft (kg).
///
/// Readings that were not taken default to zero, so a two-panel weighing may
/// leave wings 3 to 6 out entirely.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WeightAndBalanceMeasurement {
    pub undercarriage1_weight: f64,
    pub undercarriage2_weight: f64,

    /// Only taken for three point undercarriage layouts
    pub undercarriage3_weight: f64,

    pub wing1_weight: f64,
    pub wing2_weight: f64,
    pub wing3_weight: f64,
    pub wing4_weight: f64,
    pub wing5_weight: f64,
    pub wing6_weight: f64,
}

impl WeightAndBalanceMeasurement {
    /// Readings for a two wheel, two panel weighing.
    pub fn two_point(undercarriage1: f64, undercarriage2: f64, wing1: f64, wing2: f64) -> Self {
        WeightAndBalanceMeasurement {
            undercarriage1_weight: undercarriage1,
            undercarriage2_weight: undercarriage2,
            wing1_weight: wing1,
            wing2_weight: wing2,
            ..Default::default()
        }
    }
}

/// A previous weighing plus an optional single component change.
///
/// With no item change this is simply an externally calculated starting point.
///
/// ## JSON Example
///
/// ```json
/// {
///   "aircraft_weight": 279.0,
///   "aircraft_arm": 551.0,
///   "non_lifting_parts_weight": 133.0,
///   "item_weight_change": -3.0,
///   "item_arm": 3768.0,
///   "weight_change_in_fuselage": true
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct WeightAndBalanceComponentChange {
    /// Existing empty weight Ge (kg)
    pub aircraft_weight: f64,

    /// Existing empty CG arm Xe (mm)
    pub aircraft_arm: f64,

    /// Existing non-lifting parts weight Gwft (kg)
    pub non_lifting_parts_weight: f64,

    /// Change in weight from the old to the new component (kg). Negative for removal.
    #[serde(default)]
    pub item_weight_change: Option<f64>,

    /// Arm of the changed component (mm)
    #[serde(default)]
    pub item_arm: Option<f64>,

    /// Whether the change is in the fuselage (and so alters the non-lifting
    /// parts weight). Unspecified means yes.
    #[serde(default)]
    pub weight_change_in_fuselage: Option<bool>,
}

impl WeightAndBalanceComponentChange {
    /// Starting point with no component change.
    pub fn unchanged(aircraft_weight: f64, aircraft_arm: f64, non_lifting_parts_weight: f64) -> Self {
        WeightAndBalanceComponentChange {
            aircraft_weight,
            aircraft_arm,
            non_lifting_parts_weight,
            ..Default::default()
        }
    }

    /// Add an item change at the given arm.
    pub fn with_item(mut self, weight_change: f64, arm: f64) -> Self {
        self.item_weight_change = Some(weight_change);
        self.item_arm = Some(arm);
        self
    }

    /// Mark the item change as being in the wings rather than the fuselage.
    pub fn in_wings(mut self) -> Self {
        self.weight_change_in_fuselage = Some(false);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_readings_default_to_zero() {
        let measured: WeightAndBalanceMeasurement = serde_json::from_str(
            r#"{"undercarriage1_weight":246.0,"undercarriage2_weight":33.0,"wing1_weight":72.0,"wing2_weight":74.0}"#,
        )
        .unwrap();
        assert_eq!(measured, WeightAndBalanceMeasurement::two_point(246.0, 33.0, 72.0, 74.0));
        assert_eq!(measured.undercarriage3_weight, 0.0);
        assert_eq!(measured.wing6_weight, 0.0);
    }

    #[test]
    fn test_component_change_builder() {
        let change = WeightAndBalanceComponentChange::unchanged(279.0, 551.0, 133.0)
            .with_item(-3.0, 3768.0)
            .in_wings();
        assert_eq!(change.item_weight_change, Some(-3.0));
        assert_eq!(change.item_arm, Some(3768.0));
        assert_eq!(change.weight_change_in_fuselage, Some(false));
    }

    #[test]
    fn test_component_change_json() {
        let change: WeightAndBalanceComponentChange = serde_json::from_str(
            r#"{"aircraft_weight":279.0,"aircraft_arm":551.0,"non_lifting_parts_weight":133.0}"#,
        )
        .unwrap();
        assert_eq!(change, WeightAndBalanceComponentChange::unchanged(279.0, 551.0, 133.0));
    }
}
