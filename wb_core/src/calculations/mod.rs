//! # Weight and Balance Calculations
//!
//! The envelope pipeline. Each entry point is a pure function of its inputs:
//!
//! - [`calculate_from_measurements`] - scale readings to placard
//! - [`generate_envelope`] - known empty weight, CG and non-lifting parts weight
//! - [`update_envelope`] - known figures plus a component change
//!
//! All three validate the records, apply the safety buffer (if selected) to
//! the aft CG limit once, and then build either a single seat or a tandem
//! result. Side-by-side two seaters share one arm, so they take the single
//! seat path.
//!
//! ## Stages
//!
//! - [`measurement`] - undercarriage mapping, wing weight, checksum
//! - [`envelope`] - P1 arm, min/max pilot weight, seat clamping
//! - [`dual_seat`] - tandem P1/P2 loading chart
//! - [`ballast`] - wing water, cockpit block and tail ballast charts
//! - [`component_change`] - empty figures after fitting or removing an item
//! - [`helpers`] - item arm from two results, target CG ballast
//!
//! ## Example
//!
//! ```rust
//! use wb_core::calculations::generate_envelope;
//! use wb_core::catalog::ReferenceAircraft;
//! use wb_core::options::WeightAndBalanceOptions;
//!
//! let datum = ReferenceAircraft::JantarStd2.datum();
//! let config = ReferenceAircraft::JantarStd2.configuration();
//! let result = generate_envelope(&datum, &config, 279.0, 551.0, 133.0, &WeightAndBalanceOptions::default()).unwrap();
//!
//! assert_eq!(result.pilot_weight_range(), (70.0, 106.0));
//! ```

pub mod ballast;
pub mod component_change;
pub mod dual_seat;
pub mod envelope;
pub mod helpers;
pub mod measurement;

use tracing::{debug, warn};

use crate::configuration::AircraftConfiguration;
use crate::datum::WeightAndBalanceDatum;
use crate::equations::usable_aft_limit;
use crate::errors::{CalcError, CalcResult};
use crate::measurements::{WeightAndBalanceComponentChange, WeightAndBalanceMeasurement};
use crate::options::WeightAndBalanceOptions;
use crate::results::{ResultSummary, SingleSeatResult, TwoSeatResult, WeightAndBalanceResult, WingBallastAmount};

use ballast::{
    cockpit_ballast_chart, single_seat_tail_adjustments, two_seat_tail_adjustments, wing_ballast_chart,
};
use envelope::{base_limits, placard_range, resolve_pilot1_arms, CgLimits, PilotArms};

// Re-export commonly used items
pub use ballast::enumerate_block_combinations;
pub use component_change::apply_change;
pub use helpers::{ballast_for_target_cg_position, derive_arm};
pub use measurement::EmptyAircraft;

/// Build the envelope from scale readings.
///
/// # Errors
///
/// - Configuration errors for unsupported undercarriage or panel count,
///   or a tandem datum with no P2 arm
/// - `ChecksumMismatch` for inconsistent readings
/// - `InvalidInput` for bad options
/// - `NoSafeEnvelope` when no pilot weight is within limits
pub fn calculate_from_measurements(
    datum: &WeightAndBalanceDatum,
    config: &AircraftConfiguration,
    measured: &WeightAndBalanceMeasurement,
    options: &WeightAndBalanceOptions,
) -> CalcResult<WeightAndBalanceResult> {
    validate_records(datum, config, options)?;
    let aircraft = measurement::resolve(datum, config, measured)?;
    build_envelope(datum, config, &aircraft, options)
}

/// Build the envelope from a known empty weight, empty CG arm and non-lifting
/// parts weight.
pub fn generate_envelope(
    datum: &WeightAndBalanceDatum,
    config: &AircraftConfiguration,
    empty_weight: f64,
    empty_cg_arm: f64,
    non_lifting_parts_weight: f64,
    options: &WeightAndBalanceOptions,
) -> CalcResult<WeightAndBalanceResult> {
    validate_records(datum, config, options)?;
    let aircraft = EmptyAircraft {
        empty_weight,
        empty_cg_arm,
        non_lifting_parts_weight,
    };
    build_envelope(datum, config, &aircraft, options)
}

/// Rebuild the envelope after a component change.
///
/// With no item weight change this gives the same result as
/// [`generate_envelope`] on the recorded figures.
pub fn update_envelope(
    datum: &WeightAndBalanceDatum,
    config: &AircraftConfiguration,
    change: &WeightAndBalanceComponentChange,
    options: &WeightAndBalanceOptions,
) -> CalcResult<WeightAndBalanceResult> {
    validate_records(datum, config, options)?;
    let aircraft = apply_change(change)?;
    debug!(
        empty_weight = aircraft.empty_weight,
        empty_cg_arm = aircraft.empty_cg_arm,
        "applied component change"
    );
    build_envelope(datum, config, &aircraft, options)
}

fn validate_records(
    datum: &WeightAndBalanceDatum,
    config: &AircraftConfiguration,
    options: &WeightAndBalanceOptions,
) -> CalcResult<()> {
    options.validate()?;
    datum.validate()?;
    config.validate()?;
    if config.is_tandem() && datum.pilot2_arm.is_none() {
        return Err(CalcError::missing_pilot2_arm(&datum.type_certificate_id));
    }
    Ok(())
}

/// Figures shared by both seating layouts.
struct EnvelopeContext<'a> {
    datum: &'a WeightAndBalanceDatum,
    config: &'a AircraftConfiguration,
    options: &'a WeightAndBalanceOptions,
    aircraft: EmptyAircraft,
    aft_limit: f64,
    arms: PilotArms,
    limits: CgLimits,
}

impl EnvelopeContext<'_> {
    fn summary(&self) -> ResultSummary {
        ResultSummary {
            calculation_input_options: *self.options,
            max_all_up_weight: self.datum.max_all_up_weight,
            empty_cg_arm: self.aircraft.empty_cg_arm.round(),
            empty_weight: self.aircraft.empty_weight,
            non_lifting_parts_weight: self.aircraft.non_lifting_parts_weight,
            max_fuselage_load: self.limits.max_fuselage_load,
            fuselage_load_limited_by: self.limits.fuselage_load_limited_by,
            pilot_arm_min_max_used: self.arms.min_max_used,
            pilot1_arm_used: self.arms.min_weight_arm,
            cockpit_ballast: cockpit_ballast_chart(
                self.datum,
                &self.aircraft,
                self.aft_limit,
                self.arms.min_weight_arm,
                self.config.cockpit_ballast_block_count,
                self.config.cockpit_ballast_weight_per_block,
            ),
            allowed_wing_ballast: None,
        }
    }

    fn wing_ballast(&self, min_pilot_weight: f64, max_pilot_weight: f64) -> Option<Vec<WingBallastAmount>> {
        self.config.wing_ballast_capacity().map(|capacity| {
            wing_ballast_chart(
                self.datum,
                min_pilot_weight,
                max_pilot_weight,
                self.aircraft.empty_weight,
                capacity,
                self.options.placard_weight_increment,
            )
        })
    }
}

fn build_envelope(
    datum: &WeightAndBalanceDatum,
    config: &AircraftConfiguration,
    aircraft: &EmptyAircraft,
    options: &WeightAndBalanceOptions,
) -> CalcResult<WeightAndBalanceResult> {
    let aft_limit = usable_aft_limit(datum.forward_cg_limit, datum.aft_cg_limit, options.use_safety_buffer);
    let arms = resolve_pilot1_arms(datum, options.p1_arm_range_percentage)?;
    let limits = base_limits(datum, aircraft, aft_limit, &arms);

    debug!(
        type_certificate_id = %datum.type_certificate_id,
        seating = config.seating_type.code(),
        aft_limit,
        min_weight_arm = arms.min_weight_arm,
        max_weight_arm = arms.max_weight_arm,
        "building envelope"
    );

    let ctx = EnvelopeContext {
        datum,
        config,
        options,
        aircraft: *aircraft,
        aft_limit,
        arms,
        limits,
    };

    if config.is_tandem() {
        two_seat(&ctx).map(WeightAndBalanceResult::TwoSeat)
    } else {
        single_seat(&ctx).map(WeightAndBalanceResult::SingleSeat)
    }
}

fn single_seat(ctx: &EnvelopeContext<'_>) -> CalcResult<SingleSeatResult> {
    let (min_pilot_weight, max_pilot_weight, max_pilot_weight_limited_by) = placard_range(ctx.datum, &ctx.limits);
    if min_pilot_weight > max_pilot_weight {
        return Err(CalcError::NoSafeEnvelope {
            min_pilot_weight,
            max_pilot_weight,
        });
    }

    let mut summary = ctx.summary();
    summary.allowed_wing_ballast = ctx.wing_ballast(min_pilot_weight, max_pilot_weight);

    Ok(SingleSeatResult {
        summary,
        min_pilot_weight,
        max_pilot_weight,
        max_pilot_weight_limited_by,
        tail_ballast_adjusted_pilot_weights: single_seat_tail_adjustments(
            ctx.datum,
            &ctx.aircraft,
            ctx.aft_limit,
            &ctx.arms,
            &ctx.config.tail_cg_adjust_ballast,
        ),
    })
}

fn two_seat(ctx: &EnvelopeContext<'_>) -> CalcResult<TwoSeatResult> {
    let (solo_min_pilot_weight, solo_max_pilot_weight, solo_max_pilot_weight_limited_by) =
        placard_range(ctx.datum, &ctx.limits);
    let increment = ctx.options.placard_weight_increment;

    let dual_pilot_weight_ranges =
        dual_seat::loading_chart(ctx.datum, &ctx.aircraft, ctx.aft_limit, &ctx.arms, increment)?;

    if dual_pilot_weight_ranges.is_empty() {
        warn!(
            type_certificate_id = %ctx.datum.type_certificate_id,
            "no front seat weight gives a valid rear seat range"
        );
        if solo_min_pilot_weight > solo_max_pilot_weight {
            return Err(CalcError::NoSafeEnvelope {
                min_pilot_weight: solo_min_pilot_weight,
                max_pilot_weight: solo_max_pilot_weight,
            });
        }
    }

    let mut summary = ctx.summary();
    // Wing water is sized for the heaviest crew in the loading chart
    summary.allowed_wing_ballast = dual_pilot_weight_ranges.last().and_then(|heaviest| {
        ctx.wing_ballast(
            solo_min_pilot_weight,
            heaviest.pilot1_weight + heaviest.max_pilot2_weight,
        )
    });

    let tail_ballast_adjusted_pilot_weights = two_seat_tail_adjustments(
        ctx.datum,
        &ctx.aircraft,
        ctx.aft_limit,
        &ctx.arms,
        &ctx.config.tail_cg_adjust_ballast,
        increment,
    )?;

    Ok(TwoSeatResult {
        summary,
        solo_min_pilot_weight,
        solo_max_pilot_weight,
        solo_max_pilot_weight_limited_by,
        dual_pilot_weight_ranges,
        tail_ballast_adjusted_pilot_weights,
    })
}
