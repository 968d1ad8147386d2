//! # wb_core - Glider Weight and Balance Engine
//!
//! `wb_core` turns a glider's weighing into its cockpit placard: the allowed
//! pilot weight range, the tandem loading chart and the ballast tables. All
//! inputs and outputs are JSON-serializable, so the engine can sit behind a
//! web form, a script or an AI assistant equally well.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take records and return a result
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **No partial results**: A call either succeeds or says why it could not
//!
//! ## Quick Start
//!
//! ```rust
//! use wb_core::catalog::ReferenceAircraft;
//! use wb_core::{calculate_from_measurements, WeightAndBalanceMeasurement, WeightAndBalanceOptions};
//!
//! let datum = ReferenceAircraft::JantarStd2.datum();
//! let config = ReferenceAircraft::JantarStd2.configuration();
//! let measured = WeightAndBalanceMeasurement::two_point(246.0, 33.0, 72.0, 74.0);
//!
//! let result = calculate_from_measurements(&datum, &config, &measured, &WeightAndBalanceOptions::default()).unwrap();
//! assert_eq!(result.pilot_weight_range(), (70.0, 106.0));
//!
//! let json = serde_json::to_string_pretty(&result).unwrap();
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - The envelope pipeline and its stages
//! - [`configuration`] - Aircraft options: undercarriage, seating, ballast
//! - [`datum`] - Type certificate weight and CG limits
//! - [`measurements`] - Scale readings and component changes
//! - [`options`] - Caller-selectable calculation options
//! - [`results`] - Output records
//! - [`equations`] - Moment balance formulas
//! - [`catalog`] - Reference aircraft records
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod catalog;
pub mod configuration;
pub mod datum;
pub mod equations;
pub mod errors;
pub mod measurements;
pub mod options;
pub mod results;

// Re-export commonly used types at crate root for convenience
pub use calculations::{
    ballast_for_target_cg_position, calculate_from_measurements, derive_arm, enumerate_block_combinations,
    generate_envelope, update_envelope,
};
pub use configuration::{AircraftConfiguration, SeatingConfiguration, TailBallastCapacity, UndercarriageConfiguration};
pub use datum::WeightAndBalanceDatum;
pub use errors::{CalcError, CalcResult};
pub use measurements::{WeightAndBalanceComponentChange, WeightAndBalanceMeasurement};
pub use options::WeightAndBalanceOptions;
pub use results::WeightAndBalanceResult;
