//! # Single Occupant CG Envelope
//!
//! Minimum and maximum pilot weight for the front (or only) seat.
//!
//! - The minimum keeps the loaded CG at or forward of the usable aft limit.
//! - The maximum is the lowest of four ceilings: all-up weight, dry weight,
//!   non-lifting parts weight and the forward CG limit.
//!
//! The raw figures are kept unrounded so the tandem sweep and ballast charts
//! can build on them. [`placard_range`] applies the certified seat limits and
//! the placard rounding (minimum up, maximum down).

use serde::{Deserialize, Serialize};

use super::EmptyAircraft;
use crate::datum::WeightAndBalanceDatum;
use crate::equations::{aft_limited_min_weight, forward_limited_max_weight};
use crate::errors::CalcResult;
use crate::options::p1_arm_fraction;
use crate::results::WeightCeiling;

/// P1 arms used for the minimum and maximum weight cases.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PilotArms {
    /// Arm for the lightest pilot
    pub min_weight_arm: f64,

    /// Arm for the heaviest pilot
    pub max_weight_arm: f64,

    /// True when the datum gives a range and the conservative min/max method applies
    pub min_max_used: bool,
}

/// Pick the P1 arm(s) from the datum.
///
/// - Single arm: used for both cases.
/// - Range with a percentage: one interpolated arm,
///   `pilot1_arm + p × (pilot1_arm - pilot1_arm_max)`, used for both cases.
/// - Range without a percentage: lightest pilot on the near arm, heaviest on
///   the far arm.
///
/// # Errors
///
/// `InvalidInput` when the percentage is outside 0 to 100.
pub fn resolve_pilot1_arms(datum: &WeightAndBalanceDatum, p1_arm_range_percentage: Option<f64>) -> CalcResult<PilotArms> {
    let arms = match (datum.pilot1_arm_max, p1_arm_range_percentage) {
        (None, _) => PilotArms {
            min_weight_arm: datum.pilot1_arm,
            max_weight_arm: datum.pilot1_arm,
            min_max_used: false,
        },
        (Some(far_arm), Some(percentage)) => {
            let arm = datum.pilot1_arm + (datum.pilot1_arm - far_arm) * p1_arm_fraction(percentage)?;
            PilotArms {
                min_weight_arm: arm,
                max_weight_arm: arm,
                min_max_used: false,
            }
        }
        (Some(far_arm), None) => PilotArms {
            min_weight_arm: datum.pilot1_arm,
            max_weight_arm: far_arm,
            min_max_used: true,
        },
    };
    Ok(arms)
}

/// Unrounded single occupant limits.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CgLimits {
    /// Weight that brings the CG onto the usable aft limit
    pub min_pilot_weight: f64,

    pub max_pilot_weight: f64,

    pub max_pilot_weight_limited_by: WeightCeiling,

    /// Lowest of the weight ceilings, ignoring CG
    pub max_fuselage_load: f64,

    pub fuselage_load_limited_by: WeightCeiling,
}

/// Lowest of a set of ceilings. The first listed wins a tie.
pub(crate) fn lowest_ceiling(ceilings: &[(WeightCeiling, f64)]) -> (WeightCeiling, f64) {
    ceilings
        .iter()
        .copied()
        .fold((ceilings[0].0, f64::INFINITY), |lowest, candidate| {
            if candidate.1 < lowest.1 {
                candidate
            } else {
                lowest
            }
        })
}

/// Compute the unrounded pilot weight limits for one empty aircraft state.
pub fn base_limits(
    datum: &WeightAndBalanceDatum,
    aircraft: &EmptyAircraft,
    aft_limit: f64,
    arms: &PilotArms,
) -> CgLimits {
    let ge = aircraft.empty_weight;
    let xe = aircraft.empty_cg_arm;

    let min_pilot_weight = aft_limited_min_weight(ge, xe, aft_limit, arms.min_weight_arm, 0.0, 0.0);

    let weight_ceilings = [
        (WeightCeiling::AllUpWeight, datum.max_all_up_weight - ge),
        (WeightCeiling::DryWeight, datum.max_dry_weight - ge),
        (
            WeightCeiling::NonLiftingParts,
            datum.max_non_lifting_parts_weight - aircraft.non_lifting_parts_weight,
        ),
    ];
    let (fuselage_load_limited_by, fuselage_load) = lowest_ceiling(&weight_ceilings);

    let forward_cg = forward_limited_max_weight(ge, xe, datum.forward_cg_limit, arms.max_weight_arm, 0.0, 0.0);
    let (max_pilot_weight_limited_by, max_pilot_weight) = lowest_ceiling(&[
        (fuselage_load_limited_by, fuselage_load),
        (WeightCeiling::ForwardCg, forward_cg),
    ]);

    CgLimits {
        min_pilot_weight,
        max_pilot_weight,
        max_pilot_weight_limited_by,
        max_fuselage_load: fuselage_load.floor(),
        fuselage_load_limited_by,
    }
}

/// Clamp to the certified seat limits and round for the placard.
///
/// # Returns
/// (min pilot weight, max pilot weight, ceiling that set the max)
pub fn placard_range(datum: &WeightAndBalanceDatum, limits: &CgLimits) -> (f64, f64, WeightCeiling) {
    let min = limits.min_pilot_weight.max(datum.min_allowed_pilot_weight).ceil();

    let (limited_by, max) = if datum.max_seat_weight < limits.max_pilot_weight {
        (WeightCeiling::SeatWeight, datum.max_seat_weight)
    } else {
        (limits.max_pilot_weight_limited_by, limits.max_pilot_weight)
    };

    (min, max.floor(), limited_by)
}
