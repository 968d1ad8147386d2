//! # Moment Balance Formulas
//!
//! Every weight and balance figure comes from balancing moments about the
//! datum. The formulas here are the building blocks the calculations combine.
//!
//! ## Notation (GFA weighing sheet)
//!
//! - `G1`, `G2` = forward and aft scale readings
//! - `Ge` = empty weight, `Xe` = empty CG arm
//! - `a` = front wheel to datum, `b` = front wheel to rear wheel
//! - `Xfwd`, `Xaft` = forward and aft CG limits
//! - `X` = arm of the load being solved for
//!
//! ```text
//!        a         b
//!   |<------->|<---------------->|
//!   datum    G1                 G2
//! ```
//!
//! ## Sign Conventions
//!
//! - Arms: positive aft of the datum, negative forward
//! - Weights: positive when added, negative when removed

/// Fraction of the CG range the safety buffer takes off the aft limit
pub const SAFETY_BUFFER_FRACTION: f64 = 0.05;

/// Largest disagreement allowed between the two checksum moments (kg·mm)
pub const MOMENT_CHECKSUM_TOLERANCE: f64 = 0.2;

/// Empty CG arm from two scale groups.
///
/// # Formula
/// - Xe = G2·b / Ge + a
#[inline]
pub fn empty_cg_arm(g2: f64, ge: f64, front_wheel_to_datum: f64, wheelbase: f64) -> f64 {
    (g2 * wheelbase) / ge + front_wheel_to_datum
}

/// Moment about the datum computed directly from the wheel loads.
///
/// # Formula
/// - M = G1·a + G2·(a + b)
#[inline]
pub fn wheel_moment(g1: f64, g2: f64, front_wheel_to_datum: f64, wheelbase: f64) -> f64 {
    g1 * front_wheel_to_datum + g2 * (front_wheel_to_datum + wheelbase)
}

/// Arm of two weights combined.
///
/// # Formula
/// - X = (W1·X1 + W2·X2) / (W1 + W2)
#[inline]
pub fn combined_arm(w1: f64, x1: f64, w2: f64, x2: f64) -> f64 {
    (w1 * x1 + w2 * x2) / (w1 + w2)
}

/// Aft CG limit actually used for the calculation.
///
/// # Formula
/// - Xaft_used = Xaft - 0.05·(Xaft - Xfwd) with the buffer, Xaft without
#[inline]
pub fn usable_aft_limit(forward_limit: f64, aft_limit: f64, use_safety_buffer: bool) -> f64 {
    if use_safety_buffer {
        aft_limit - SAFETY_BUFFER_FRACTION * (aft_limit - forward_limit)
    } else {
        aft_limit
    }
}

/// Minimum weight at arm `X` that brings the CG forward onto the aft limit,
/// given `preload` already placed at `preload_arm` (0 for none).
///
/// # Formula
/// - W = (Ge·(Xe - Xaft) - Wp·(Xaft - Xp)) / (Xaft - X)
///
/// # Returns
/// The weight needed. Zero or negative when the aircraft is already forward
/// of the aft limit.
#[inline]
pub fn aft_limited_min_weight(ge: f64, xe: f64, xaft: f64, arm: f64, preload: f64, preload_arm: f64) -> f64 {
    (ge * (xe - xaft) - preload * (xaft - preload_arm)) / (xaft - arm)
}

/// Maximum weight at arm `X` before the CG reaches the forward limit, given
/// `preload` already placed at `preload_arm` (0 for none).
///
/// # Formula
/// - W = (Ge·(Xe - Xfwd) - Wp·(Xfwd - Xp)) / (Xfwd - X)
#[inline]
pub fn forward_limited_max_weight(ge: f64, xe: f64, xfwd: f64, arm: f64, preload: f64, preload_arm: f64) -> f64 {
    (ge * (xe - xfwd) - preload * (xfwd - preload_arm)) / (xfwd - arm)
}

/// Arm of an item from the weighings before and after it was fitted.
///
/// # Formula (AIRW-D011 eq. 26)
/// - Xp = (Xe2·Ge2 - Xe1·Ge1) / (Ge2 - Ge1)
///
/// # Returns
/// `None` when the weight did not change.
#[inline]
pub fn item_arm_from_weighings(ge_before: f64, xe_before: f64, ge_after: f64, xe_after: f64) -> Option<f64> {
    let weight_difference = ge_after - ge_before;
    if weight_difference == 0.0 {
        return None;
    }
    Some((xe_after * ge_after - xe_before * ge_before) / weight_difference)
}
