//! # Ballast Charts
//!
//! Placard tables for the three kinds of ballast a glider may carry:
//!
//! - **Wing water**: maximum load per pilot weight, capped by all-up weight
//!   and tank capacity
//! - **Cockpit blocks**: minimum pilot weight per number of blocks fitted
//! - **Tail ballast**: the whole envelope recomputed for each amount of water
//!   or each block combination
//!
//! Tail block combinations pair at most two block sizes. Where several
//! combinations give the same weight, the one with the fewest blocks is kept.

use std::collections::BTreeMap;
use std::iter;

use tracing::{debug, warn};

use super::dual_seat::loading_chart;
use super::envelope::{base_limits, placard_range, PilotArms};
use super::EmptyAircraft;
use crate::configuration::{BallastBlockCapacity, TailBallastCapacity};
use crate::datum::WeightAndBalanceDatum;
use crate::equations::aft_limited_min_weight;
use crate::errors::CalcResult;
use crate::results::{
    combination_weight, CockpitBallast, FittedBallastBlock, SingleSeatTailBallastAdjustment, TailBallastAmount,
    TwoSeatTailBallastAdjustment, WingBallastAmount,
};

// ============================================================================
// Wing Water
// ============================================================================

/// Maximum wing water for pilot weights from `min_pilot_weight` to
/// `max_pilot_weight`.
///
/// The first row is the minimum itself, then every multiple of `increment`
/// above it, then the exact maximum. Amounts are rounded down and never
/// negative.
pub fn wing_ballast_chart(
    datum: &WeightAndBalanceDatum,
    min_pilot_weight: f64,
    max_pilot_weight: f64,
    empty_weight: f64,
    capacity: f64,
    increment: f64,
) -> Vec<WingBallastAmount> {
    let entry = |pilot_weight: f64| WingBallastAmount {
        pilot_weight,
        max_ballast: (datum.max_all_up_weight - pilot_weight - empty_weight)
            .min(capacity)
            .max(0.0)
            .floor(),
    };

    let mut chart = vec![entry(min_pilot_weight)];

    let mut step = (min_pilot_weight / increment).floor() + 1.0;
    while step * increment < max_pilot_weight {
        chart.push(entry(step * increment));
        step += 1.0;
    }

    if max_pilot_weight > min_pilot_weight {
        chart.push(entry(max_pilot_weight));
    }

    chart
}

// ============================================================================
// Cockpit Blocks
// ============================================================================

/// Minimum pilot weight with 1 to `block_count` cockpit blocks fitted.
///
/// # Returns
/// `None` when the aircraft carries no cockpit blocks, or when the datum has
/// no arm for them.
pub fn cockpit_ballast_chart(
    datum: &WeightAndBalanceDatum,
    aircraft: &EmptyAircraft,
    aft_limit: f64,
    pilot1_arm: f64,
    block_count: u32,
    weight_per_block: Option<f64>,
) -> Option<Vec<CockpitBallast>> {
    if block_count == 0 {
        return None;
    }
    let Some(block_weight) = weight_per_block.filter(|w| *w > 0.0) else {
        warn!(
            type_certificate_id = %datum.type_certificate_id,
            block_count,
            "cockpit ballast blocks configured without a positive block weight"
        );
        return None;
    };
    let Some(block_arm) = datum.cockpit_ballast_block_arm else {
        warn!(
            type_certificate_id = %datum.type_certificate_id,
            "cockpit ballast blocks configured but datum has no block arm"
        );
        return None;
    };

    let chart = (1..=block_count)
        .map(|blocks| CockpitBallast {
            block_count: blocks,
            min_pilot_weight: aft_limited_min_weight(
                aircraft.empty_weight,
                aircraft.empty_cg_arm,
                aft_limit,
                pilot1_arm,
                f64::from(blocks) * block_weight,
                block_arm,
            )
            .ceil(),
        })
        .collect();
    Some(chart)
}

// ============================================================================
// Tail Ballast
// ============================================================================

fn fitted(size: &BallastBlockCapacity, block_count: u32) -> FittedBallastBlock {
    FittedBallastBlock {
        label: size.label.clone(),
        weight_per_block: size.weight_per_block,
        block_count,
    }
}

fn total_blocks(combination: &[FittedBallastBlock]) -> u32 {
    combination.iter().map(|b| b.block_count).sum()
}

fn offer(best: &mut BTreeMap<i64, Vec<FittedBallastBlock>>, combination: Vec<FittedBallastBlock>) {
    // Gram resolution, so 2 x 1.2 and 1 x 2.4 land on the same key
    let key = (combination_weight(&combination) * 1000.0).round() as i64;
    let replace = match best.get(&key) {
        Some(existing) => total_blocks(&combination) < total_blocks(existing),
        None => true,
    };
    if replace {
        best.insert(key, combination);
    }
}

/// Every distinct tail ballast weight reachable with up to two block sizes.
///
/// # Returns
/// One combination per weight in ascending weight order. Each combination
/// lists the heavier size first.
pub fn enumerate_block_combinations(sizes: &[BallastBlockCapacity]) -> Vec<Vec<FittedBallastBlock>> {
    let mut sorted = sizes.to_vec();
    sorted.sort_by(|a, b| b.weight_per_block.total_cmp(&a.weight_per_block));

    let mut best = BTreeMap::new();
    for (i, size) in sorted.iter().enumerate() {
        for count in 1..=size.max_block_count {
            offer(&mut best, vec![fitted(size, count)]);

            for other in &sorted[i + 1..] {
                for other_count in 1..=other.max_block_count {
                    offer(&mut best, vec![fitted(size, count), fitted(other, other_count)]);
                }
            }
        }
    }

    best.into_values().collect()
}

/// Tail ballast amounts to tabulate: whole litres of water up to the tank
/// capacity (and the capacity itself), or every block combination.
pub fn tail_ballast_amounts(capacity: &TailBallastCapacity) -> Vec<TailBallastAmount> {
    match capacity {
        TailBallastCapacity::None => Vec::new(),
        TailBallastCapacity::Water(tank) if *tank <= 0.0 => Vec::new(),
        TailBallastCapacity::Water(tank) => (1u32..)
            .map(f64::from)
            .take_while(|litres| litres < tank)
            .chain(iter::once(*tank))
            .map(TailBallastAmount::Water)
            .collect(),
        TailBallastCapacity::Blocks(sizes) => enumerate_block_combinations(sizes)
            .into_iter()
            .map(TailBallastAmount::Blocks)
            .collect(),
    }
}

/// Empty aircraft state for each tail ballast amount.
fn tail_ballast_states(
    datum: &WeightAndBalanceDatum,
    aircraft: &EmptyAircraft,
    capacity: &TailBallastCapacity,
) -> Option<Vec<(TailBallastAmount, EmptyAircraft)>> {
    if capacity.is_none() {
        return None;
    }
    let Some(tail_arm) = datum.tail_ballast_arm else {
        warn!(
            type_certificate_id = %datum.type_certificate_id,
            ballast = capacity.code(),
            "tail ballast configured but datum has no tail ballast arm"
        );
        return None;
    };

    let amounts = tail_ballast_amounts(capacity);
    if amounts.is_empty() {
        return None;
    }
    debug!(count = amounts.len(), tail_arm, "tabulating tail ballast");

    let states = amounts
        .into_iter()
        .map(|amount| {
            let ballasted = aircraft.with_item(amount.total_weight(), tail_arm, true);
            (amount, ballasted)
        })
        .collect();
    Some(states)
}

/// Single seat pilot weight range for each tail ballast amount.
pub fn single_seat_tail_adjustments(
    datum: &WeightAndBalanceDatum,
    aircraft: &EmptyAircraft,
    aft_limit: f64,
    arms: &PilotArms,
    capacity: &TailBallastCapacity,
) -> Option<Vec<SingleSeatTailBallastAdjustment>> {
    let states = tail_ballast_states(datum, aircraft, capacity)?;
    let adjustments = states
        .into_iter()
        .map(|(ballast_amount, ballasted)| {
            let limits = base_limits(datum, &ballasted, aft_limit, arms);
            let (min_pilot_weight, max_pilot_weight, _) = placard_range(datum, &limits);
            SingleSeatTailBallastAdjustment {
                ballast_amount,
                min_pilot_weight,
                max_pilot_weight,
            }
        })
        .collect();
    Some(adjustments)
}

/// Solo range and loading chart for each tail ballast amount.
pub fn two_seat_tail_adjustments(
    datum: &WeightAndBalanceDatum,
    aircraft: &EmptyAircraft,
    aft_limit: f64,
    arms: &PilotArms,
    capacity: &TailBallastCapacity,
    increment: f64,
) -> CalcResult<Option<Vec<TwoSeatTailBallastAdjustment>>> {
    let Some(states) = tail_ballast_states(datum, aircraft, capacity) else {
        return Ok(None);
    };

    let mut adjustments = Vec::with_capacity(states.len());
    for (ballast_amount, ballasted) in states {
        let limits = base_limits(datum, &ballasted, aft_limit, arms);
        let (solo_min_pilot_weight, solo_max_pilot_weight, _) = placard_range(datum, &limits);
        adjustments.push(TwoSeatTailBallastAdjustment {
            ballast_amount,
            solo_min_pilot_weight,
            solo_max_pilot_weight,
            dual_pilot_weight_ranges: loading_chart(datum, &ballasted, aft_limit, arms, increment)?,
        });
    }
    Ok(Some(adjustments))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::envelope::resolve_pilot1_arms;
    use crate::catalog::ReferenceAircraft;

    fn ls6() -> EmptyAircraft {
        EmptyAircraft {
            empty_weight: 272.3,
            empty_cg_arm: 613.5,
            non_lifting_parts_weight: 131.3,
        }
    }

    fn dg1000() -> EmptyAircraft {
        EmptyAircraft {
            empty_weight: 411.5,
            empty_cg_arm: 114.0 + 47.0 * 5189.0 / 411.5,
            non_lifting_parts_weight: 224.5,
        }
    }

    fn weights(combinations: &[Vec<FittedBallastBlock>]) -> Vec<f64> {
        combinations.iter().map(|c| combination_weight(c)).collect()
    }

    #[test]
    fn test_wing_chart_capacity_bound() {
        let datum = ReferenceAircraft::JantarStd2.datum();
        let chart = wing_ballast_chart(&datum, 70.0, 106.0, 279.0, 150.0, 10.0);

        let pilots: Vec<f64> = chart.iter().map(|e| e.pilot_weight).collect();
        assert_eq!(pilots, vec![70.0, 80.0, 90.0, 100.0, 106.0]);
        assert!(chart.iter().all(|e| e.max_ballast == 150.0));
    }

    #[test]
    fn test_wing_chart_all_up_weight_bound() {
        let datum = ReferenceAircraft::Dg1000s.datum();
        let chart = wing_ballast_chart(&datum, 70.0, 203.0, 411.5, 160.0, 10.0);

        assert_eq!(chart[0], WingBallastAmount { pilot_weight: 70.0, max_ballast: 160.0 });
        let at_200 = chart.iter().find(|e| e.pilot_weight == 200.0).unwrap();
        assert_eq!(at_200.max_ballast, 138.0);
        assert_eq!(chart.last().unwrap(), &WingBallastAmount { pilot_weight: 203.0, max_ballast: 135.0 });
        for pair in chart.windows(2) {
            assert!(pair[1].max_ballast <= pair[0].max_ballast);
        }
    }

    #[test]
    fn test_wing_chart_boundaries() {
        let datum = ReferenceAircraft::JantarStd2.datum();

        // Minimum off the increment grid, maximum on it
        let chart = wing_ballast_chart(&datum, 73.0, 100.0, 279.0, 150.0, 10.0);
        let pilots: Vec<f64> = chart.iter().map(|e| e.pilot_weight).collect();
        assert_eq!(pilots, vec![73.0, 80.0, 90.0, 100.0]);

        let single = wing_ballast_chart(&datum, 90.0, 90.0, 279.0, 150.0, 10.0);
        assert_eq!(single.len(), 1);

        // Overweight empty aircraft cannot carry water
        let heavy = wing_ballast_chart(&datum, 70.0, 80.0, 470.0, 150.0, 10.0);
        assert!(heavy.iter().all(|e| e.max_ballast == 0.0));
    }

    #[test]
    fn test_cockpit_chart() {
        let datum = ReferenceAircraft::Ls6c.datum();
        let chart = cockpit_ballast_chart(&datum, &ls6(), datum.aft_cg_limit, datum.pilot1_arm, 5, Some(1.0)).unwrap();

        assert_eq!(chart.len(), 5);
        assert_eq!(chart[0], CockpitBallast { block_count: 1, min_pilot_weight: 68.0 });
        assert_eq!(chart[4], CockpitBallast { block_count: 5, min_pilot_weight: 60.0 });
        for pair in chart.windows(2) {
            assert!(pair[1].min_pilot_weight <= pair[0].min_pilot_weight);
        }
    }

    #[test]
    fn test_cockpit_chart_absent() {
        let mut datum = ReferenceAircraft::Ls6c.datum();
        let aft = datum.aft_cg_limit;
        let arm = datum.pilot1_arm;

        assert!(cockpit_ballast_chart(&datum, &ls6(), aft, arm, 0, Some(1.0)).is_none());
        assert!(cockpit_ballast_chart(&datum, &ls6(), aft, arm, 5, None).is_none());
        assert!(cockpit_ballast_chart(&datum, &ls6(), aft, arm, 5, Some(0.0)).is_none());

        datum.cockpit_ballast_block_arm = None;
        assert!(cockpit_ballast_chart(&datum, &ls6(), aft, arm, 5, Some(1.0)).is_none());
    }

    #[test]
    fn test_block_combinations() {
        let sizes = vec![BallastBlockCapacity::new("Small", 1.0, 2), BallastBlockCapacity::new("Large", 2.0, 4)];
        let combinations = enumerate_block_combinations(&sizes);

        assert_eq!(weights(&combinations), (1..=10).map(f64::from).collect::<Vec<_>>());
        assert_eq!(combinations[8], vec![fitted(&sizes[1], 4), fitted(&sizes[0], 1)]);
        assert_eq!(combinations[9], vec![fitted(&sizes[1], 4), fitted(&sizes[0], 2)]);

        // 2 kg as one large block rather than two small ones
        assert_eq!(combinations[1], vec![fitted(&sizes[1], 1)]);
        // Caller's order is untouched
        assert_eq!(sizes[0].label, "Small");
    }

    #[test]
    fn test_block_combinations_tie_keeps_first_found() {
        let sizes = vec![
            BallastBlockCapacity::new("A", 4.0, 1),
            BallastBlockCapacity::new("B", 3.0, 1),
            BallastBlockCapacity::new("C", 2.0, 1),
            BallastBlockCapacity::new("D", 1.0, 1),
        ];
        let combinations = enumerate_block_combinations(&sizes);
        assert_eq!(weights(&combinations), (1..=7).map(f64::from).collect::<Vec<_>>());

        // A + D and B + C both make 5 kg with two blocks; A + D is reached first
        let five = combinations
            .iter()
            .find(|c| combination_weight(c) == 5.0)
            .unwrap();
        assert_eq!(five, &vec![fitted(&sizes[0], 1), fitted(&sizes[3], 1)]);

        // One A block rather than B + D
        let four = combinations
            .iter()
            .find(|c| combination_weight(c) == 4.0)
            .unwrap();
        assert_eq!(four, &vec![fitted(&sizes[0], 1)]);
    }

    #[test]
    fn test_block_combinations_same_weight_keys() {
        let sizes = vec![BallastBlockCapacity::new("Large", 2.4, 4), BallastBlockCapacity::new("Small", 1.2, 2)];
        let combinations = enumerate_block_combinations(&sizes);

        assert_eq!(combinations.len(), 10);
        assert!(combinations
            .iter()
            .all(|c| c.len() <= 2 && total_blocks(c) <= 6));
        assert!(enumerate_block_combinations(&[]).is_empty());
    }

    #[test]
    fn test_water_amounts() {
        let amounts = tail_ballast_amounts(&TailBallastCapacity::Water(5.5));
        let litres: Vec<f64> = amounts.iter().map(|a| a.total_weight()).collect();
        assert_eq!(litres, vec![1.0, 2.0, 3.0, 4.0, 5.0, 5.5]);

        let whole = tail_ballast_amounts(&TailBallastCapacity::Water(3.0));
        assert_eq!(whole.len(), 3);

        assert!(tail_ballast_amounts(&TailBallastCapacity::Water(0.0)).is_empty());
        assert!(tail_ballast_amounts(&TailBallastCapacity::None).is_empty());
    }

    #[test]
    fn test_tail_adjustments_need_tail_arm() {
        let datum = ReferenceAircraft::Ls6c.datum();
        let config = ReferenceAircraft::Ls6c.configuration();
        let arms = resolve_pilot1_arms(&datum, None).unwrap();

        let adjustments =
            single_seat_tail_adjustments(&datum, &ls6(), datum.aft_cg_limit, &arms, &config.tail_cg_adjust_ballast);
        assert!(adjustments.is_none());
    }

    #[test]
    fn test_single_seat_tail_water_raises_minimum() {
        let mut datum = ReferenceAircraft::Ls6c.datum();
        datum.tail_ballast_arm = Some(4000.0);
        let arms = resolve_pilot1_arms(&datum, None).unwrap();

        let adjustments = single_seat_tail_adjustments(
            &datum,
            &ls6(),
            datum.aft_cg_limit,
            &arms,
            &TailBallastCapacity::Water(5.5),
        )
        .unwrap();

        assert_eq!(adjustments.len(), 6);
        for pair in adjustments.windows(2) {
            assert!(pair[1].min_pilot_weight >= pair[0].min_pilot_weight);
        }
    }

    #[test]
    fn test_two_seat_tail_blocks() {
        let datum = ReferenceAircraft::Dg1000s.datum();
        let config = ReferenceAircraft::Dg1000s.configuration();
        let arms = resolve_pilot1_arms(&datum, None).unwrap();

        let adjustments = two_seat_tail_adjustments(
            &datum,
            &dg1000(),
            datum.aft_cg_limit,
            &arms,
            &config.tail_cg_adjust_ballast,
            10.0,
        )
        .unwrap()
        .unwrap();

        assert_eq!(adjustments.len(), 10);
        assert!(adjustments.iter().all(|a| !a.dual_pilot_weight_ranges.is_empty()));
        let lightest = &adjustments[0];
        let heaviest = &adjustments[9];
        assert!(heaviest.ballast_amount.total_weight() > lightest.ballast_amount.total_weight());
        assert!(heaviest.solo_min_pilot_weight >= lightest.solo_min_pilot_weight);
    }
}
