//! # Error Types
//!
//! Structured error types for wb_core. Every entry point returns either a
//! complete result or one of these errors, never a partially populated result,
//! so a caller cannot mistake a truncated envelope for a valid placard.
//!
//! The variants fall into the groups a maintainer has to act on differently:
//!
//! - **Configuration errors**: the configuration or datum record cannot
//!   describe this calculation (unsupported undercarriage, unsupported wing
//!   panel count, tandem seating without a P2 arm, inverted CG limits).
//! - **Consistency errors**: the records are fine but the scale readings are
//!   not (moment checksum mismatch).
//! - **Input errors**: an option or argument is out of range.
//!
//! ## Example
//!
//! ```rust
//! use wb_core::errors::{CalcError, CalcResult};
//!
//! fn validate_percentage(value: f64) -> CalcResult<()> {
//!     if !(0.0..=100.0).contains(&value) {
//!         return Err(CalcError::invalid_input(
//!             "p1_arm_range_percentage",
//!             value.to_string(),
//!             "Percentage must be between 0 and 100",
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for wb_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for weight and balance calculations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input value is invalid (out of range, non-finite, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// The undercarriage layout is unset or not one the calculator understands
    #[error("Unsupported undercarriage configuration: {undercarriage}")]
    UnsupportedUndercarriage { undercarriage: String },

    /// Wing panel count other than 1, 2, 3, 4 or 6
    #[error("Unsupported wing panel count: {panel_count}")]
    UnsupportedWingPanelCount { panel_count: u8 },

    /// Tandem seating needs a P2 arm to build the dual loading chart
    #[error("No P2 arm defined for tandem type certificate '{type_certificate_id}'")]
    MissingPilot2Arm { type_certificate_id: String },

    /// The datum record itself is inconsistent
    #[error("Invalid datum for '{type_certificate_id}': {reason}")]
    InvalidDatum {
        type_certificate_id: String,
        reason: String,
    },

    /// The two independent moment computations from the scale readings disagree
    #[error("Moment checksum mismatch: {moment_from_wheels} (wheels) vs {moment_from_cg} (Ge x Xe)")]
    ChecksumMismatch {
        moment_from_wheels: f64,
        moment_from_cg: f64,
    },

    /// Minimum pilot weight exceeds maximum: the aircraft cannot be flown as weighed
    #[error("No safe loading envelope: min pilot weight {min_pilot_weight} kg exceeds max {max_pilot_weight} kg")]
    NoSafeEnvelope {
        min_pilot_weight: f64,
        max_pilot_weight: f64,
    },
}

impl CalcError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an UnsupportedUndercarriage error
    pub fn unsupported_undercarriage(undercarriage: impl Into<String>) -> Self {
        CalcError::UnsupportedUndercarriage {
            undercarriage: undercarriage.into(),
        }
    }

    /// Create a MissingPilot2Arm error
    pub fn missing_pilot2_arm(type_certificate_id: impl Into<String>) -> Self {
        CalcError::MissingPilot2Arm {
            type_certificate_id: type_certificate_id.into(),
        }
    }

    /// Create an InvalidDatum error
    pub fn invalid_datum(type_certificate_id: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidDatum {
            type_certificate_id: type_certificate_id.into(),
            reason: reason.into(),
        }
    }

    /// True when the configuration or datum record must be corrected before retrying
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            CalcError::UnsupportedUndercarriage { .. }
                | CalcError::UnsupportedWingPanelCount { .. }
                | CalcError::MissingPilot2Arm { .. }
                | CalcError::InvalidDatum { .. }
        )
    }

    /// True when the scale readings are at fault rather than the records
    pub fn is_consistency_error(&self) -> bool {
        matches!(self, CalcError::ChecksumMismatch { .. })
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::UnsupportedUndercarriage { .. } => "UNSUPPORTED_UNDERCARRIAGE",
            CalcError::UnsupportedWingPanelCount { .. } => "UNSUPPORTED_WING_PANEL_COUNT",
            CalcError::MissingPilot2Arm { .. } => "MISSING_PILOT2_ARM",
            CalcError::InvalidDatum { .. } => "INVALID_DATUM",
            CalcError::ChecksumMismatch { .. } => "CHECKSUM_MISMATCH",
            CalcError::NoSafeEnvelope { .. } => "NO_SAFE_ENVELOPE",
        }
    }
}
