//! # Weight and Balance Results
//!
//! Output records. Weights are in kilograms and arms in millimetres, the same
//! units as the datum. Pilot weight bounds are already rounded for a placard:
//! minimums up, maximums down.
//!
//! ## JSON Example (single seat)
//!
//! ```json
//! {
//!   "seating": "SingleSeat",
//!   "calculation_input_options": {
//!     "use_safety_buffer": false,
//!     "min_allowed_weight_difference": 10.0,
//!     "placard_weight_increment": 10.0,
//!     "p1_arm_range_percentage": null
//!   },
//!   "max_all_up_weight": 535.0,
//!   "empty_cg_arm": 551.0,
//!   "empty_weight": 279.0,
//!   "non_lifting_parts_weight": 133.0,
//!   "max_fuselage_load": 106.0,
//!   "fuselage_load_limited_by": "DryWeight",
//!   "pilot_arm_min_max_used": false,
//!   "pilot1_arm_used": -616.0,
//!   "cockpit_ballast": null,
//!   "allowed_wing_ballast": null,
//!   "min_pilot_weight": 70.0,
//!   "max_pilot_weight": 106.0,
//!   "max_pilot_weight_limited_by": "DryWeight",
//!   "tail_ballast_adjusted_pilot_weights": null
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::options::WeightAndBalanceOptions;

/// The limit that caps a maximum weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeightCeiling {
    AllUpWeight,
    DryWeight,
    NonLiftingParts,
    ForwardCg,
    SeatWeight,
}

impl WeightCeiling {
    /// Human-readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            WeightCeiling::AllUpWeight => "Max all-up weight",
            WeightCeiling::DryWeight => "Max dry weight",
            WeightCeiling::NonLiftingParts => "Max non-lifting parts weight",
            WeightCeiling::ForwardCg => "Forward CG limit",
            WeightCeiling::SeatWeight => "Max seat weight",
        }
    }
}

/// Minimum pilot weight with a number of cockpit ballast blocks fitted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CockpitBallast {
    pub block_count: u32,
    pub min_pilot_weight: f64,
}

/// Maximum wing water ballast for a given pilot weight.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WingBallastAmount {
    pub pilot_weight: f64,
    pub max_ballast: f64,
}

/// A fitted set of ballast blocks of one size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FittedBallastBlock {
    pub label: String,
    pub weight_per_block: f64,
    pub block_count: u32,
}

impl FittedBallastBlock {
    pub fn total_weight(&self) -> f64 {
        self.weight_per_block * f64::from(self.block_count)
    }
}

/// Total weight of a fitted block combination
pub fn combination_weight(blocks: &[FittedBallastBlock]) -> f64 {
    blocks.iter().map(FittedBallastBlock::total_weight).sum()
}

/// Tail ballast fitted for one row of an adjusted envelope table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TailBallastAmount {
    /// Water in the tail tank (kg)
    Water(f64),
    /// Block combination with the fewest blocks for this weight
    Blocks(Vec<FittedBallastBlock>),
}

impl TailBallastAmount {
    pub fn total_weight(&self) -> f64 {
        match self {
            TailBallastAmount::Water(amount) => *amount,
            TailBallastAmount::Blocks(blocks) => combination_weight(blocks),
        }
    }
}

/// One row of the tandem loading chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TwoSeatWeightRange {
    pub pilot1_weight: f64,
    pub min_pilot2_weight: f64,
    pub max_pilot2_weight: f64,
}

/// Single seat pilot weight range with some tail ballast fitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SingleSeatTailBallastAdjustment {
    pub ballast_amount: TailBallastAmount,
    pub min_pilot_weight: f64,
    pub max_pilot_weight: f64,
}

/// Tandem solo range and loading chart with some tail ballast fitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TwoSeatTailBallastAdjustment {
    pub ballast_amount: TailBallastAmount,
    pub solo_min_pilot_weight: f64,
    pub solo_max_pilot_weight: f64,
    pub dual_pilot_weight_ranges: Vec<TwoSeatWeightRange>,
}

/// Fields shared by every result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultSummary {
    /// Options the result was calculated with
    pub calculation_input_options: WeightAndBalanceOptions,

    /// Copied from the datum so a printed placard stands alone
    pub max_all_up_weight: f64,

    /// Empty CG arm Xe, rounded to the nearest millimetre
    pub empty_cg_arm: f64,

    /// Empty weight Ge
    pub empty_weight: f64,

    /// Non-lifting parts weight Gwft
    pub non_lifting_parts_weight: f64,

    /// Largest load the fuselage may carry before the CG is considered
    pub max_fuselage_load: f64,

    pub fuselage_load_limited_by: WeightCeiling,

    /// True when the conservative min/max P1 arm method was used. In that case
    /// `pilot1_arm_used` is the arm nearest the datum.
    pub pilot_arm_min_max_used: bool,

    pub pilot1_arm_used: f64,

    /// Minimum pilot weight per number of cockpit ballast blocks fitted
    pub cockpit_ballast: Option<Vec<CockpitBallast>>,

    /// Maximum wing water ballast per pilot weight
    pub allowed_wing_ballast: Option<Vec<WingBallastAmount>>,
}

/// Single seat (or side-by-side) result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SingleSeatResult {
    #[serde(flatten)]
    pub summary: ResultSummary,

    /// Minimum pilot weight with no ballast blocks fitted
    pub min_pilot_weight: f64,

    pub max_pilot_weight: f64,

    pub max_pilot_weight_limited_by: WeightCeiling,

    pub tail_ballast_adjusted_pilot_weights: Option<Vec<SingleSeatTailBallastAdjustment>>,
}

/// Tandem two seat result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TwoSeatResult {
    #[serde(flatten)]
    pub summary: ResultSummary,

    pub solo_min_pilot_weight: f64,

    pub solo_max_pilot_weight: f64,

    pub solo_max_pilot_weight_limited_by: WeightCeiling,

    /// P2 range for each P1 weight, in increasing P1 weight
    pub dual_pilot_weight_ranges: Vec<TwoSeatWeightRange>,

    pub tail_ballast_adjusted_pilot_weights: Option<Vec<TwoSeatTailBallastAdjustment>>,
}

/// Result of any envelope calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "seating")]
pub enum WeightAndBalanceResult {
    SingleSeat(SingleSeatResult),
    TwoSeat(TwoSeatResult),
}

impl WeightAndBalanceResult {
    pub fn summary(&self) -> &ResultSummary {
        match self {
            WeightAndBalanceResult::SingleSeat(result) => &result.summary,
            WeightAndBalanceResult::TwoSeat(result) => &result.summary,
        }
    }

    pub fn empty_weight(&self) -> f64 {
        self.summary().empty_weight
    }

    pub fn empty_cg_arm(&self) -> f64 {
        self.summary().empty_cg_arm
    }

    pub fn as_single_seat(&self) -> Option<&SingleSeatResult> {
        match self {
            WeightAndBalanceResult::SingleSeat(result) => Some(result),
            WeightAndBalanceResult::TwoSeat(_) => None,
        }
    }

    pub fn as_two_seat(&self) -> Option<&TwoSeatResult> {
        match self {
            WeightAndBalanceResult::SingleSeat(_) => None,
            WeightAndBalanceResult::TwoSeat(result) => Some(result),
        }
    }

    /// Pilot weight range for flying solo (the only range for single seaters)
    pub fn pilot_weight_range(&self) -> (f64, f64) {
        match self {
            WeightAndBalanceResult::SingleSeat(result) => (result.min_pilot_weight, result.max_pilot_weight),
            WeightAndBalanceResult::TwoSeat(result) => (result.solo_min_pilot_weight, result.solo_max_pilot_weight),
        }
    }

    /// Whether the envelope is at least `min_allowed_weight_difference` wide.
    ///
    /// For tandem aircraft either the solo range or some row of the loading
    /// chart has to be wide enough.
    pub fn has_usable_range(&self) -> bool {
        let required = self.summary().calculation_input_options.min_allowed_weight_difference;
        let (min, max) = self.pilot_weight_range();
        if max - min >= required {
            return true;
        }
        match self {
            WeightAndBalanceResult::SingleSeat(_) => false,
            WeightAndBalanceResult::TwoSeat(result) => result
                .dual_pilot_weight_ranges
                .iter()
                .any(|row| row.max_pilot2_weight - row.min_pilot2_weight >= required),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary() -> ResultSummary {
        ResultSummary {
            calculation_input_options: WeightAndBalanceOptions::default(),
            max_all_up_weight: 535.0,
            empty_cg_arm: 551.0,
            empty_weight: 279.0,
            non_lifting_parts_weight: 133.0,
            max_fuselage_load: 106.0,
            fuselage_load_limited_by: WeightCeiling::DryWeight,
            pilot_arm_min_max_used: true,
            pilot1_arm_used: -616.0,
            cockpit_ballast: None,
            allowed_wing_ballast: None,
        }
    }

    #[test]
    fn test_result_serialization_is_flat() {
        let result = WeightAndBalanceResult::SingleSeat(SingleSeatResult {
            summary: summary(),
            min_pilot_weight: 70.0,
            max_pilot_weight: 106.0,
            max_pilot_weight_limited_by: WeightCeiling::DryWeight,
            tail_ballast_adjusted_pilot_weights: None,
        });
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"seating\":\"SingleSeat\""));
        assert!(json.contains("\"empty_weight\":279.0"));
        assert!(!json.contains("summary"));

        let roundtrip: WeightAndBalanceResult = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip, result);
    }

    #[test]
    fn test_tail_ballast_amount_weight() {
        let blocks = TailBallastAmount::Blocks(vec![
            FittedBallastBlock {
                label: "Large".to_string(),
                weight_per_block: 2.0,
                block_count: 4,
            },
            FittedBallastBlock {
                label: "Small".to_string(),
                weight_per_block: 1.0,
                block_count: 1,
            },
        ]);
        assert_eq!(blocks.total_weight(), 9.0);
        assert_eq!(TailBallastAmount::Water(5.5).total_weight(), 5.5);
    }

    #[test]
    fn test_usable_range() {
        let single = |min: f64, max: f64| {
            WeightAndBalanceResult::SingleSeat(SingleSeatResult {
                summary: summary(),
                min_pilot_weight: min,
                max_pilot_weight: max,
                max_pilot_weight_limited_by: WeightCeiling::SeatWeight,
                tail_ballast_adjusted_pilot_weights: None,
            })
        };
        assert!(single(70.0, 106.0).has_usable_range());
        assert!(!single(100.0, 105.0).has_usable_range());

        let two_seat = WeightAndBalanceResult::TwoSeat(TwoSeatResult {
            summary: summary(),
            solo_min_pilot_weight: 100.0,
            solo_max_pilot_weight: 104.0,
            solo_max_pilot_weight_limited_by: WeightCeiling::SeatWeight,
            dual_pilot_weight_ranges: vec![TwoSeatWeightRange {
                pilot1_weight: 70.0,
                min_pilot2_weight: 0.0,
                max_pilot2_weight: 110.0,
            }],
            tail_ballast_adjusted_pilot_weights: None,
        });
        assert!(two_seat.has_usable_range());
        assert_eq!(two_seat.pilot_weight_range(), (100.0, 104.0));
    }
}
