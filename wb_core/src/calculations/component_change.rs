//! # Component Changes
//!
//! Updates a known empty weight and CG for an item fitted or removed since
//! the last weighing (a radio, an oxygen bottle, a battery box), so the
//! envelope can be regenerated without weighing the aircraft again.
//!
//! ## Formula
//!
//! ```text
//! Ge'   = Ge + ΔW
//! Xe'   = (ΔW·X_item + Ge·Xe) / Ge'
//! Gwft' = Gwft + ΔW        (fuselage items only)
//! ```

use super::EmptyAircraft;
use crate::errors::{CalcError, CalcResult};
use crate::measurements::WeightAndBalanceComponentChange;

/// Apply a component change to the recorded empty aircraft figures.
///
/// A change with no weight delta (or a zero one) returns the recorded
/// figures unchanged.
///
/// # Errors
///
/// `InvalidInput` when a weight delta is given without the item's arm, or
/// when the change would leave no empty weight.
pub fn apply_change(change: &WeightAndBalanceComponentChange) -> CalcResult<EmptyAircraft> {
    let recorded = EmptyAircraft {
        empty_weight: change.aircraft_weight,
        empty_cg_arm: change.aircraft_arm,
        non_lifting_parts_weight: change.non_lifting_parts_weight,
    };

    let delta = match change.item_weight_change {
        Some(delta) if delta != 0.0 => delta,
        _ => return Ok(recorded),
    };

    let arm = change.item_arm.ok_or_else(|| {
        CalcError::invalid_input(
            "item_arm",
            "none",
            "An item arm is required when the weight changes",
        )
    })?;

    if recorded.empty_weight + delta <= 0.0 {
        return Err(CalcError::invalid_input(
            "item_weight_change",
            delta.to_string(),
            "Change would leave the aircraft with no empty weight",
        ));
    }

    let in_fuselage = change.weight_change_in_fuselage.unwrap_or(true);
    Ok(recorded.with_item(delta, arm, in_fuselage))
}
