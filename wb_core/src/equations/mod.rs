//! # Weight and Balance Equations
//!
//! All moment balance formulas used by the calculations live here, so they can
//! be checked against the GFA weighing sheet and AIRW-D011 in one place.
//!
//! ## Modules
//!
//! - [`moment`] - Empty CG, combined arms, occupant weight limits
//!
//! ## Units
//!
//! - Weights in kilograms
//! - Arms in millimetres from the datum, positive aft
//! - Moments in kg·mm

pub mod moment;

pub use moment::{
    aft_limited_min_weight,
    combined_arm,
    empty_cg_arm,
    forward_limited_max_weight,
    item_arm_from_weighings,
    usable_aft_limit,
    wheel_moment,
    MOMENT_CHECKSUM_TOLERANCE,
    SAFETY_BUFFER_FRACTION,
};
