//! # Calculation Options
//!
//! Caller-selectable settings applied to every entry point. Missing fields
//! take their defaults when deserialized, so `{}` is a valid options object.
//!
//! ## JSON Example
//!
//! ```json
//! {
//!   "use_safety_buffer": true,
//!   "placard_weight_increment": 5.0,
//!   "p1_arm_range_percentage": 50.0
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Default minimum spread between min and max occupant weights (kg)
pub const DEFAULT_MIN_ALLOWED_WEIGHT_DIFFERENCE: f64 = 10.0;

/// Default step between rows of the placard charts (kg)
pub const DEFAULT_PLACARD_WEIGHT_INCREMENT: f64 = 10.0;

/// Smallest accepted placard step (kg). Finer steps only lengthen the charts.
pub const MIN_PLACARD_WEIGHT_INCREMENT: f64 = 0.5;

/// Largest accepted placard step (kg)
pub const MAX_PLACARD_WEIGHT_INCREMENT: f64 = 100.0;

/// Options for generating a weight and balance envelope.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeightAndBalanceOptions {
    /// Narrow the usable aft CG limit by 5% of the CG range (GFA safety option).
    /// Off by default, so the certified aft limit is used.
    pub use_safety_buffer: bool,

    /// Minimum spread between min and max pilot weights a caller regards as a
    /// usable envelope.
    pub min_allowed_weight_difference: f64,

    /// Pilot weight step for the wing ballast chart and the dual loading chart.
    pub placard_weight_increment: f64,

    /// Where in the datum's P1 arm range to place the pilot, 0 to 100.
    ///
    /// Ignored when the datum gives a single arm. When the datum gives a range
    /// and this is `None`, the conservative min/max arm method is used:
    /// lightest pilot on the nearest arm, heaviest on the farthest.
    pub p1_arm_range_percentage: Option<f64>,
}

impl Default for WeightAndBalanceOptions {
    fn default() -> Self {
        WeightAndBalanceOptions {
            use_safety_buffer: false,
            min_allowed_weight_difference: DEFAULT_MIN_ALLOWED_WEIGHT_DIFFERENCE,
            placard_weight_increment: DEFAULT_PLACARD_WEIGHT_INCREMENT,
            p1_arm_range_percentage: None,
        }
    }
}

impl WeightAndBalanceOptions {
    pub fn with_safety_buffer(mut self, enabled: bool) -> Self {
        self.use_safety_buffer = enabled;
        self
    }

    pub fn with_placard_weight_increment(mut self, increment: f64) -> Self {
        self.placard_weight_increment = increment;
        self
    }

    pub fn with_p1_arm_range_percentage(mut self, percentage: f64) -> Self {
        self.p1_arm_range_percentage = Some(percentage);
        self
    }

    /// Validate option values. Out-of-range values are rejected, never clamped.
    pub fn validate(&self) -> CalcResult<()> {
        let increment = self.placard_weight_increment;
        if !(MIN_PLACARD_WEIGHT_INCREMENT..=MAX_PLACARD_WEIGHT_INCREMENT).contains(&increment) {
            return Err(CalcError::invalid_input(
                "placard_weight_increment",
                increment.to_string(),
                format!(
                    "Increment must be between {} and {} kg",
                    MIN_PLACARD_WEIGHT_INCREMENT, MAX_PLACARD_WEIGHT_INCREMENT
                ),
            ));
        }
        if !(self.min_allowed_weight_difference >= 0.0) {
            return Err(CalcError::invalid_input(
                "min_allowed_weight_difference",
                self.min_allowed_weight_difference.to_string(),
                "Weight difference cannot be negative",
            ));
        }
        if let Some(percentage) = self.p1_arm_range_percentage {
            p1_arm_fraction(percentage)?;
        }
        Ok(())
    }
}

/// Convert a P1 arm range percentage to a fraction of the range.
///
/// The value is always a percentage: `50` is half way and `1` is one percent.
pub fn p1_arm_fraction(percentage: f64) -> CalcResult<f64> {
    if !(0.0..=100.0).contains(&percentage) {
        return Err(CalcError::invalid_input(
            "p1_arm_range_percentage",
            percentage.to_string(),
            "P1 arm percentage must be between 0 and 100",
        ));
    }
    Ok(percentage / 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = WeightAndBalanceOptions::default();
        assert!(!options.use_safety_buffer);
        assert_eq!(options.min_allowed_weight_difference, 10.0);
        assert_eq!(options.placard_weight_increment, 10.0);
        assert_eq!(options.p1_arm_range_percentage, None);
        assert!(options.validate().is_ok());
    }

    #[test]
    fn test_empty_json_uses_defaults() {
        let options: WeightAndBalanceOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(options, WeightAndBalanceOptions::default());

        let options: WeightAndBalanceOptions = serde_json::from_str(r#"{"use_safety_buffer":true}"#).unwrap();
        assert!(options.use_safety_buffer);
        assert_eq!(options.placard_weight_increment, 10.0);
    }

    #[test]
    fn test_percentage_out_of_range_rejected() {
        let low = WeightAndBalanceOptions::default().with_p1_arm_range_percentage(-1.0);
        assert_eq!(low.validate().unwrap_err().error_code(), "INVALID_INPUT");

        let high = WeightAndBalanceOptions::default().with_p1_arm_range_percentage(100.5);
        assert!(high.validate().is_err());

        let edge = WeightAndBalanceOptions::default().with_p1_arm_range_percentage(100.0);
        assert!(edge.validate().is_ok());
    }

    #[test]
    fn test_percentage_fraction() {
        assert_eq!(p1_arm_fraction(50.0).unwrap(), 0.5);
        assert_eq!(p1_arm_fraction(1.0).unwrap(), 0.01);
        assert_eq!(p1_arm_fraction(0.5).unwrap(), 0.005);
        assert_eq!(p1_arm_fraction(100.0).unwrap(), 1.0);
        assert_eq!(p1_arm_fraction(0.0).unwrap(), 0.0);
    }

    #[test]
    fn test_bad_increment_rejected() {
        let options = WeightAndBalanceOptions::default().with_placard_weight_increment(0.0);
        assert!(options.validate().is_err());
    }

    #[test]
    fn test_increment_bounds() {
        for increment in [1e-9, 0.25, 100.5, f64::INFINITY, f64::NAN] {
            let options = WeightAndBalanceOptions::default().with_placard_weight_increment(increment);
            let err = options.validate().unwrap_err();
            assert_eq!(err.error_code(), "INVALID_INPUT", "increment {}", increment);
        }

        for increment in [0.5, 5.0, 100.0] {
            let options = WeightAndBalanceOptions::default().with_placard_weight_increment(increment);
            assert!(options.validate().is_ok(), "increment {}", increment);
        }
    }
}
