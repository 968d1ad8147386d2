//! # Helpers
//!
//! Small utilities built on finished results.

use tracing::debug;

use crate::datum::WeightAndBalanceDatum;
use crate::equations::item_arm_from_weighings;
use crate::errors::{CalcError, CalcResult};
use crate::results::WeightAndBalanceResult;

/// Arm of an item from the results before and after it was fitted.
///
/// Uses the rounded empty CG arms stored in the results. When the empty
/// weight did not change the arm cannot be solved, and the earlier result's
/// empty CG arm is returned.
pub fn derive_arm(before: &WeightAndBalanceResult, after: &WeightAndBalanceResult) -> f64 {
    item_arm_from_weighings(
        before.empty_weight(),
        before.empty_cg_arm(),
        after.empty_weight(),
        after.empty_cg_arm(),
    )
    .unwrap_or_else(|| before.empty_cg_arm())
}

/// Ballast needed to place the loaded CG at `mac_percent` of the mean
/// aerodynamic chord.
///
/// The datum carries no MAC reference yet, so no ballast amount can be
/// solved. The inputs are still checked:
///
/// # Returns
/// - `Ok(NaN)` when the cockpit weight is outside the certified pilot range
/// - `Ok(0.0)` otherwise
///
/// # Errors
///
/// `InvalidInput` when `mac_percent` is outside 0 to 100.
pub fn ballast_for_target_cg_position(
    datum: &WeightAndBalanceDatum,
    base_result: &WeightAndBalanceResult,
    cockpit_weight: f64,
    mac_percent: f64,
) -> CalcResult<f64> {
    if !(0.0..=100.0).contains(&mac_percent) {
        return Err(CalcError::invalid_input(
            "mac_percent",
            mac_percent.to_string(),
            "Must be between 0 and 100",
        ));
    }

    if cockpit_weight > datum.max_seat_weight || cockpit_weight < datum.min_allowed_pilot_weight {
        debug!(cockpit_weight, "cockpit weight outside certified range");
        return Ok(f64::NAN);
    }

    debug!(
        empty_weight = base_result.empty_weight(),
        empty_cg_arm = base_result.empty_cg_arm(),
        mac_percent,
        "no MAC reference on datum, target CG ballast not solved"
    );
    Ok(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::generate_envelope;
    use crate::catalog::ReferenceAircraft;
    use crate::options::WeightAndBalanceOptions;

    fn jantar(empty_weight: f64, empty_cg_arm: f64) -> WeightAndBalanceResult {
        let datum = ReferenceAircraft::JantarStd2.datum();
        let config = ReferenceAircraft::JantarStd2.configuration();
        generate_envelope(
            &datum,
            &config,
            empty_weight,
            empty_cg_arm,
            133.0,
            &WeightAndBalanceOptions::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_derive_arm() {
        let before = jantar(276.0, 516.0);
        let after = jantar(279.0, 553.0);
        // (553 * 279 - 516 * 276) / 3
        let arm = derive_arm(&before, &after);
        assert!((arm - 3957.0).abs() < 0.01, "arm = {}", arm);
    }

    #[test]
    fn test_derive_arm_without_weight_change() {
        let before = jantar(279.0, 551.0);
        let after = jantar(279.0, 560.0);
        assert_eq!(derive_arm(&before, &after), 551.0);
    }

    #[test]
    fn test_target_cg_input_checks() {
        let datum = ReferenceAircraft::JantarStd2.datum();
        let base = jantar(279.0, 551.0);

        let err = ballast_for_target_cg_position(&datum, &base, 80.0, 120.0).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
        assert!(ballast_for_target_cg_position(&datum, &base, 80.0, -1.0).is_err());

        assert!(ballast_for_target_cg_position(&datum, &base, 120.0, 30.0).unwrap().is_nan());
        assert!(ballast_for_target_cg_position(&datum, &base, 50.0, 30.0).unwrap().is_nan());
        assert_eq!(ballast_for_target_cg_position(&datum, &base, 80.0, 30.0).unwrap(), 0.0);
    }
}
