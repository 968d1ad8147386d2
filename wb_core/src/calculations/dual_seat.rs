//! # Tandem Loading Chart
//!
//! Sweeps the front seat weight from zero to the seat limit and, for each
//! step, solves the weight range allowed in the rear seat.
//!
//! ```text
//!   P1 (front)     P2 (rear)
//!   -------------------------
//!        0       min .. max
//!       10       min .. max
//!      ...
//!      110       min .. max
//! ```
//!
//! The front occupant is treated as preload: it is placed on its arm first
//! and the rear seat weight is solved against the remaining margin.

use super::envelope::PilotArms;
use super::EmptyAircraft;
use crate::datum::WeightAndBalanceDatum;
use crate::equations::{aft_limited_min_weight, forward_limited_max_weight};
use crate::errors::{CalcError, CalcResult};
use crate::results::TwoSeatWeightRange;

/// Build the P1/P2 loading chart.
///
/// Rows where the rear seat minimum already exceeds the seat limit are left
/// out, as are rows with no valid rear seat weight at all.
///
/// # Errors
///
/// `MissingPilot2Arm` when the datum has no rear seat arm.
pub fn loading_chart(
    datum: &WeightAndBalanceDatum,
    aircraft: &EmptyAircraft,
    aft_limit: f64,
    arms: &PilotArms,
    increment: f64,
) -> CalcResult<Vec<TwoSeatWeightRange>> {
    let pilot2_arm = datum
        .pilot2_arm
        .ok_or_else(|| CalcError::missing_pilot2_arm(&datum.type_certificate_id))?;

    let ge = aircraft.empty_weight;
    let xe = aircraft.empty_cg_arm;
    let seat = datum.max_seat_weight;

    let mut rows = Vec::new();
    let mut step = 0u32;
    loop {
        // Stepping by index keeps the front seat weights exact multiples
        let pilot1 = f64::from(step) * increment;
        if pilot1 > seat {
            break;
        }
        step += 1;

        let min_pilot2 = aft_limited_min_weight(ge, xe, aft_limit, pilot2_arm, pilot1, arms.min_weight_arm);
        if min_pilot2 > seat {
            continue;
        }

        let max_pilot2 = [
            datum.max_all_up_weight - ge - pilot1,
            datum.max_dry_weight - ge - pilot1,
            datum.max_non_lifting_parts_weight - aircraft.non_lifting_parts_weight - pilot1,
            forward_limited_max_weight(ge, xe, datum.forward_cg_limit, pilot2_arm, pilot1, arms.max_weight_arm),
            seat,
        ]
        .into_iter()
        .fold(f64::INFINITY, f64::min);

        let row = TwoSeatWeightRange {
            pilot1_weight: pilot1,
            min_pilot2_weight: min_pilot2.max(0.0).ceil(),
            max_pilot2_weight: max_pilot2.floor(),
        };
        if row.min_pilot2_weight <= row.max_pilot2_weight {
            rows.push(row);
        }
    }

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::envelope::resolve_pilot1_arms;
    use crate::catalog::ReferenceAircraft;
    use crate::equations::combined_arm;

    fn dg1000() -> EmptyAircraft {
        EmptyAircraft {
            empty_weight: 411.5,
            empty_cg_arm: 114.0 + 47.0 * 5189.0 / 411.5,
            non_lifting_parts_weight: 224.5,
        }
    }

    #[test]
    fn test_missing_pilot2_arm() {
        let mut datum = ReferenceAircraft::Ask21.datum();
        datum.pilot2_arm = None;
        let arms = resolve_pilot1_arms(&datum, None).unwrap();

        let err = loading_chart(&datum, &dg1000(), datum.aft_cg_limit, &arms, 10.0).unwrap_err();
        assert_eq!(err.error_code(), "MISSING_PILOT2_ARM");
        assert!(err.is_configuration_error());
    }

    #[test]
    fn test_chart_rows_are_ordered_and_valid() {
        let datum = ReferenceAircraft::Dg1000s.datum();
        let arms = resolve_pilot1_arms(&datum, None).unwrap();
        let rows = loading_chart(&datum, &dg1000(), datum.aft_cg_limit, &arms, 10.0).unwrap();

        // A light front seat cannot balance a rear occupant within the seat limit
        assert!(!rows.is_empty());
        assert_eq!(rows[0].pilot1_weight, 20.0);
        assert_eq!(rows.last().unwrap().pilot1_weight, 110.0);
        for pair in rows.windows(2) {
            assert!(pair[1].pilot1_weight > pair[0].pilot1_weight);
        }
        for row in &rows {
            assert!(row.pilot1_weight <= datum.max_seat_weight);
            assert!(row.min_pilot2_weight >= 0.0);
            assert!(row.min_pilot2_weight <= row.max_pilot2_weight);
            assert!(row.max_pilot2_weight <= datum.max_seat_weight);
        }
    }

    #[test]
    fn test_rear_seat_minimum_keeps_cg_forward_of_aft_limit() {
        let datum = ReferenceAircraft::Dg1000s.datum();
        let aircraft = dg1000();
        let arms = resolve_pilot1_arms(&datum, None).unwrap();
        let rows = loading_chart(&datum, &aircraft, datum.aft_cg_limit, &arms, 10.0).unwrap();
        let pilot2_arm = datum.pilot2_arm.unwrap();

        for row in rows.iter().filter(|row| row.min_pilot2_weight > 0.0) {
            let loaded = aircraft.empty_weight + row.pilot1_weight;
            let loaded_arm = combined_arm(
                aircraft.empty_weight,
                aircraft.empty_cg_arm,
                row.pilot1_weight,
                arms.min_weight_arm,
            );
            let cg = combined_arm(loaded, loaded_arm, row.min_pilot2_weight, pilot2_arm);
            assert!(cg <= datum.aft_cg_limit + 1e-9, "P1 {} gives CG {}", row.pilot1_weight, cg);
        }
    }

    #[test]
    fn test_heavier_front_seat_leaves_less_for_rear() {
        let datum = ReferenceAircraft::Dg1000s.datum();
        let arms = resolve_pilot1_arms(&datum, None).unwrap();
        let rows = loading_chart(&datum, &dg1000(), datum.aft_cg_limit, &arms, 10.0).unwrap();

        let first = rows.first().unwrap();
        let last = rows.last().unwrap();
        assert!(last.max_pilot2_weight <= first.max_pilot2_weight);
        assert!(last.min_pilot2_weight <= first.min_pilot2_weight);
    }

    #[test]
    fn test_increment_sets_row_spacing() {
        let datum = ReferenceAircraft::Dg1000s.datum();
        let arms = resolve_pilot1_arms(&datum, None).unwrap();
        let rows = loading_chart(&datum, &dg1000(), datum.aft_cg_limit, &arms, 5.0).unwrap();
        for row in &rows {
            assert_eq!(row.pilot1_weight % 5.0, 0.0);
        }
    }
}
