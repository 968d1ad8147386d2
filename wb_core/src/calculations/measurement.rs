//! # Measurement Resolution
//!
//! Turns raw scale readings into the three figures every other calculation
//! starts from: empty weight `Ge`, empty CG arm `Xe` and non-lifting parts
//! weight `Gwft`.
//!
//! The wheel readings are first folded into a forward group `G1` and an aft
//! group `G2`:
//!
//! | Undercarriage      | G1                | G2                |
//! |--------------------|-------------------|-------------------|
//! | inline             | wheel 1           | wheel 2           |
//! | nosewheel trike    | wheel 1           | wheel 2 + wheel 3 |
//! | taildragger        | wheel 1 + wheel 2 | wheel 3           |
//!
//! The result is cross-checked by computing the empty moment two ways. A
//! disagreement means the readings are unusable and no envelope is produced.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::configuration::{AircraftConfiguration, UndercarriageConfiguration};
use crate::datum::WeightAndBalanceDatum;
use crate::equations::{combined_arm, empty_cg_arm, wheel_moment, MOMENT_CHECKSUM_TOLERANCE};
use crate::errors::{CalcError, CalcResult};
use crate::measurements::WeightAndBalanceMeasurement;

/// Empty aircraft figures derived from a weighing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EmptyAircraft {
    /// Empty weight Ge (kg)
    pub empty_weight: f64,

    /// Empty CG arm Xe (mm), unrounded
    pub empty_cg_arm: f64,

    /// Non-lifting parts weight Gwft (kg)
    pub non_lifting_parts_weight: f64,
}

impl EmptyAircraft {
    /// The same aircraft with an item of `weight` fitted at `arm`.
    ///
    /// A negative weight removes the item. Items in the wings do not count
    /// towards the non-lifting parts.
    pub fn with_item(&self, weight: f64, arm: f64, in_fuselage: bool) -> EmptyAircraft {
        EmptyAircraft {
            empty_weight: self.empty_weight + weight,
            empty_cg_arm: combined_arm(self.empty_weight, self.empty_cg_arm, weight, arm),
            non_lifting_parts_weight: if in_fuselage {
                self.non_lifting_parts_weight + weight
            } else {
                self.non_lifting_parts_weight
            },
        }
    }
}

/// Forward and aft load groups (G1, G2) for the undercarriage layout.
pub fn load_groups(
    config: &AircraftConfiguration,
    measured: &WeightAndBalanceMeasurement,
) -> CalcResult<(f64, f64)> {
    match config.undercarriage_type {
        UndercarriageConfiguration::Inline => Ok((measured.undercarriage1_weight, measured.undercarriage2_weight)),
        UndercarriageConfiguration::TrikeNosewheel => Ok((
            measured.undercarriage1_weight,
            measured.undercarriage2_weight + measured.undercarriage3_weight,
        )),
        UndercarriageConfiguration::TrikeTaildragger => Ok((
            measured.undercarriage1_weight + measured.undercarriage2_weight,
            measured.undercarriage3_weight,
        )),
        UndercarriageConfiguration::Unspecified => {
            Err(CalcError::unsupported_undercarriage(config.undercarriage_type.code()))
        }
    }
}

/// Total wing weight for the configured panel count.
///
/// Readings beyond the first two panels are optional, so a four panel wing
/// weighed as two assembled halves gives the same total.
pub fn wing_weight(config: &AircraftConfiguration, measured: &WeightAndBalanceMeasurement) -> CalcResult<f64> {
    let m = measured;
    let weight = match config.wing_panel_count {
        1 => m.wing1_weight,
        2 => m.wing1_weight + m.wing2_weight,
        3 => m.wing1_weight + m.wing2_weight + m.wing3_weight,
        4 => m.wing1_weight + m.wing2_weight + m.wing3_weight + m.wing4_weight,
        6 => {
            m.wing1_weight + m.wing2_weight + m.wing3_weight + m.wing4_weight + m.wing5_weight + m.wing6_weight
        }
        other => return Err(CalcError::UnsupportedWingPanelCount { panel_count: other }),
    };
    Ok(weight)
}

/// Check the empty moment computed from the wheels against `Ge × Xe`.
///
/// Non-finite moments (a zero total weight, for instance) also fail.
pub fn verify_moment_checksum(
    datum: &WeightAndBalanceDatum,
    g1: f64,
    g2: f64,
    empty_weight: f64,
    empty_cg_arm: f64,
) -> CalcResult<()> {
    let moment_from_wheels = wheel_moment(
        g1,
        g2,
        datum.distance_front_wheel_to_datum,
        datum.distance_front_wheel_to_rear_wheel,
    );
    let moment_from_cg = empty_weight * empty_cg_arm;

    if !((moment_from_wheels - moment_from_cg).abs() <= MOMENT_CHECKSUM_TOLERANCE) {
        return Err(CalcError::ChecksumMismatch {
            moment_from_wheels,
            moment_from_cg,
        });
    }
    Ok(())
}

/// Resolve scale readings into Ge, Xe and Gwft.
///
/// # Errors
///
/// - `UnsupportedUndercarriage` / `UnsupportedWingPanelCount` for
///   configurations the readings cannot be mapped onto
/// - `ChecksumMismatch` when the two moment computations disagree
pub fn resolve(
    datum: &WeightAndBalanceDatum,
    config: &AircraftConfiguration,
    measured: &WeightAndBalanceMeasurement,
) -> CalcResult<EmptyAircraft> {
    let (g1, g2) = load_groups(config, measured)?;
    let wings = wing_weight(config, measured)?;

    let ge = g1 + g2;
    let gwft = ge - wings;
    let xe = empty_cg_arm(
        g2,
        ge,
        datum.distance_front_wheel_to_datum,
        datum.distance_front_wheel_to_rear_wheel,
    );

    debug!(g1, g2, wings, ge, xe, gwft, "resolved scale readings");

    verify_moment_checksum(datum, g1, g2, ge, xe)?;

    Ok(EmptyAircraft {
        empty_weight: ge,
        empty_cg_arm: xe,
        non_lifting_parts_weight: gwft,
    })
}
