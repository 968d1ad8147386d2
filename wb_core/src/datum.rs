//! # Weight and Balance Datum
//!
//! Certified reference data for a type certificate. Three keys identify the
//! datum to use: the type certificate id, the certification category and the
//! wingspan, since many modern gliders certify different weights per span.
//!
//! All arms are in millimetres from the datum point and all weights in
//! kilograms. Arms forward of the datum are negative.

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Largest max seat weight accepted (kg). The loading chart steps up to it.
pub const MAX_SEAT_WEIGHT: f64 = 500.0;

/// JAR-22 certification category.
///
/// JAR-22 only defines utility and aerobatic. Some older types (the K13 for
/// one) have a more restricted category allowing higher cockpit weights, kept
/// here as `Special`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CertificationCategory {
    #[default]
    Utility,
    Aerobatic,
    Special,
}

/// Where the ground contact points sit relative to the datum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DatumCalculationModel {
    #[default]
    #[serde(rename = "model_1")]
    Model1,
    #[serde(rename = "model_1a")]
    Model1A,
    #[serde(rename = "model_2")]
    Model2,
    #[serde(rename = "model_3")]
    Model3,
}

/// Reference geometry and limits for one type certificate / category / span.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WeightAndBalanceDatum {
    pub type_certificate_id: String,

    pub category: CertificationCategory,

    /// Wingspan (m) this datum applies to
    pub wingspan: f64,

    /// Plain text description of where the datum is on the airframe
    pub location: String,

    /// How to level the aircraft for weighing
    pub levelling_instructions: String,

    pub calculation_model: DatumCalculationModel,

    pub max_all_up_weight: f64,

    pub max_dry_weight: f64,

    pub max_non_lifting_parts_weight: f64,

    /// Max load on a single seat
    pub max_seat_weight: f64,

    /// Minimum pilot weight from the flight manual. A repaired aircraft may
    /// need more than this, never less.
    pub min_allowed_pilot_weight: f64,

    pub forward_cg_limit: f64,

    pub aft_cg_limit: f64,

    /// P1 arm. When the manual gives a range this is the end nearest the datum.
    pub pilot1_arm: f64,

    /// Far end of the P1 arm range, if the manual gives one
    pub pilot1_arm_max: Option<f64>,

    /// P2 arm, tandem two seaters only
    pub pilot2_arm: Option<f64>,

    pub cockpit_ballast_block_arm: Option<f64>,

    /// Arm to the tail ballast. Tank and blocks are assumed to share it.
    pub tail_ballast_arm: Option<f64>,

    /// Arm to a fuselage fuel tank, for self-launching types
    pub fuselage_fuel_arm: Option<f64>,

    /// Front wheel to datum (a)
    pub distance_front_wheel_to_datum: f64,

    /// Front wheel to rear wheel (b)
    pub distance_front_wheel_to_rear_wheel: f64,
}

impl WeightAndBalanceDatum {
    /// Validate the record before it is used in a calculation.
    pub fn validate(&self) -> CalcResult<()> {
        if !(self.forward_cg_limit < self.aft_cg_limit) {
            return Err(CalcError::invalid_datum(
                &self.type_certificate_id,
                format!(
                    "forward CG limit {} must be forward of aft CG limit {}",
                    self.forward_cg_limit, self.aft_cg_limit
                ),
            ));
        }
        if !(self.max_seat_weight > 0.0 && self.max_seat_weight <= MAX_SEAT_WEIGHT) {
            return Err(CalcError::invalid_datum(
                &self.type_certificate_id,
                format!(
                    "max seat weight {} must be positive and at most {} kg",
                    self.max_seat_weight, MAX_SEAT_WEIGHT
                ),
            ));
        }
        if !(0.0..=self.max_seat_weight).contains(&self.min_allowed_pilot_weight) {
            return Err(CalcError::invalid_datum(
                &self.type_certificate_id,
                format!(
                    "min allowed pilot weight {} must be between 0 and max seat weight {}",
                    self.min_allowed_pilot_weight, self.max_seat_weight
                ),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ReferenceAircraft;

    #[test]
    fn test_catalog_datums_validate() {
        for aircraft in ReferenceAircraft::ALL {
            assert!(aircraft.datum().validate().is_ok(), "{:?}", aircraft);
        }
    }

    #[test]
    fn test_inverted_cg_limits_rejected() {
        let mut datum = ReferenceAircraft::JantarStd2.datum();
        datum.forward_cg_limit = 400.0;
        let err = datum.validate().unwrap_err();
        assert!(err.is_configuration_error());
        assert_eq!(err.error_code(), "INVALID_DATUM");
    }

    #[test]
    fn test_seat_weight_bounds() {
        let mut datum = ReferenceAircraft::Dg1000s.datum();
        for seat in [0.0, 500.5, 1e9, f64::NAN] {
            datum.max_seat_weight = seat;
            assert_eq!(datum.validate().unwrap_err().error_code(), "INVALID_DATUM", "seat {}", seat);
        }
        datum.max_seat_weight = MAX_SEAT_WEIGHT;
        assert!(datum.validate().is_ok());

        datum.min_allowed_pilot_weight = -1.0;
        assert_eq!(datum.validate().unwrap_err().error_code(), "INVALID_DATUM");
    }

    #[test]
    fn test_calculation_model_serialization() {
        let json = serde_json::to_string(&DatumCalculationModel::Model1A).unwrap();
        assert_eq!(json, "\"model_1a\"");
        let category: CertificationCategory = serde_json::from_str("\"aerobatic\"").unwrap();
        assert_eq!(category, CertificationCategory::Aerobatic);
    }
}
