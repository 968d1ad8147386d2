//! # Aircraft Configuration
//!
//! The capability set of a type certificate: how the seats, wheels, wings and
//! removable ballast are laid out. An individual aircraft may not have every
//! option the type certificate allows (a DG-300 could be ordered with or
//! without a tail tank), so the record is per aircraft, keyed by type
//! certificate id.
//!
//! ## JSON Example
//!
//! ```json
//! {
//!   "type_certificate_id": "DG1000S",
//!   "undercarriage_type": "inline",
//!   "seating_type": "tandem",
//!   "wing_panel_count": 4,
//!   "wing_max_ballast_amount": 160.0,
//!   "tail_cg_adjust_ballast": {
//!     "type": "blocks",
//!     "capacity": [
//!       { "label": "Large", "weight_per_block": 2.4, "max_block_count": 4 },
//!       { "label": "Small", "weight_per_block": 1.2, "max_block_count": 2 }
//!     ]
//!   },
//!   "cockpit_ballast_block_count": 4,
//!   "cockpit_ballast_weight_per_block": 2.4,
//!   "wing_span_primary": 18.0
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Wing panel counts the measurement resolver knows how to sum
pub const SUPPORTED_WING_PANEL_COUNTS: [u8; 5] = [1, 2, 3, 4, 6];

/// Largest tail water tank accepted (kg). One envelope row is built per litre.
pub const MAX_TAIL_WATER_CAPACITY: f64 = 50.0;

/// Most blocks of one size accepted in the tail
pub const MAX_TAIL_BLOCK_COUNT: u32 = 50;

/// Layout of the ground contact points used when weighing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UndercarriageConfiguration {
    /// Not recorded. Weighing from scale readings is impossible.
    #[default]
    Unspecified,
    /// Two wheels (or wheel and skid) in line, fore and aft
    Inline,
    /// Nosewheel forward, two main wheels aft
    TrikeNosewheel,
    /// Two main wheels forward, tailwheel aft
    TrikeTaildragger,
}

impl UndercarriageConfiguration {
    /// Identifier as written in configuration tables
    pub fn code(&self) -> &'static str {
        match self {
            UndercarriageConfiguration::Unspecified => "unspecified",
            UndercarriageConfiguration::Inline => "inline",
            UndercarriageConfiguration::TrikeNosewheel => "trike_nosewheel",
            UndercarriageConfiguration::TrikeTaildragger => "trike_taildragger",
        }
    }
}

/// How the seat(s) are arranged in the cockpit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeatingConfiguration {
    #[default]
    Single,
    Tandem,
    /// Both occupants share one arm, so the cockpit is treated as a single seat
    SideBySide,
}

impl SeatingConfiguration {
    /// Identifier as written in configuration tables
    pub fn code(&self) -> &'static str {
        match self {
            SeatingConfiguration::Single => "single",
            SeatingConfiguration::Tandem => "tandem",
            SeatingConfiguration::SideBySide => "side_by_side",
        }
    }

    /// Human-readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            SeatingConfiguration::Single => "Single seat",
            SeatingConfiguration::Tandem => "Tandem two seat",
            SeatingConfiguration::SideBySide => "Side-by-side two seat",
        }
    }
}

/// A ballast block size: label, unit weight and how many of them can be fitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BallastBlockCapacity {
    pub label: String,

    /// Weight of one block (kg)
    pub weight_per_block: f64,

    pub max_block_count: u32,
}

impl BallastBlockCapacity {
    pub fn new(label: impl Into<String>, weight_per_block: f64, max_block_count: u32) -> Self {
        BallastBlockCapacity {
            label: label.into(),
            weight_per_block,
            max_block_count,
        }
    }
}

/// Removable ballast carried in the tail to move the CG aft.
///
/// The shape of the capacity depends on the kind of ballast, so the two are
/// carried together.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "type", content = "capacity", rename_all = "snake_case")]
pub enum TailBallastCapacity {
    #[default]
    None,
    /// Tail tank holding up to this many litres (kg) of water
    Water(f64),
    /// Lead or steel blocks in the fin
    Blocks(Vec<BallastBlockCapacity>),
}

impl TailBallastCapacity {
    /// Identifier as written in configuration tables
    pub fn code(&self) -> &'static str {
        match self {
            TailBallastCapacity::None => "none",
            TailBallastCapacity::Water(_) => "water",
            TailBallastCapacity::Blocks(_) => "blocks",
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, TailBallastCapacity::None)
    }
}

/// Configuration of an aircraft built to a given type certificate.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AircraftConfiguration {
    /// Type certificate the configuration belongs to. Not used by the calculator.
    pub type_certificate_id: String,

    pub has_flaps: bool,

    /// Separate elevator trim tab (K13, IS-28 and similar)
    pub has_elevator_trim: bool,

    /// V-tail aircraft
    pub has_rudder_vators: bool,

    /// Any fixed undercarriage, including skid-only aircraft
    pub has_fixed_undercarriage: bool,

    pub undercarriage_type: UndercarriageConfiguration,

    pub seating_type: SeatingConfiguration,

    /// Maximum water ballast in the (single) fuselage tank (kg)
    pub fuselage_max_ballast_amount: Option<f64>,

    /// Maximum water ballast in the wings (kg)
    pub wing_max_ballast_amount: Option<f64>,

    /// Tail ballast available for CG adjustment
    pub tail_cg_adjust_ballast: TailBallastCapacity,

    /// Tail tank capacity reserved for offsetting wing water ballast (kg)
    pub tail_wing_ballast_compensation_amount: Option<f64>,

    /// Primary (usually shorter) wingspan in metres
    pub wing_span_primary: f64,

    /// Alternate wingspan in metres, if the type has one
    pub wing_span_alternate: Option<f64>,

    /// Number of panels making up the whole wing (1, 2, 3, 4 or 6)
    pub wing_panel_count: u8,

    /// Separate winglet and flat tips for the same span
    pub has_winglet_option: bool,

    /// Number of ballast blocks that can be fixed in the cockpit
    pub cockpit_ballast_block_count: u32,

    /// Weight of one cockpit ballast block (kg). Use the smaller size when
    /// the type has two.
    pub cockpit_ballast_weight_per_block: Option<f64>,
}

impl AircraftConfiguration {
    /// Validate the record before it is used in a calculation.
    pub fn validate(&self) -> CalcResult<()> {
        if !SUPPORTED_WING_PANEL_COUNTS.contains(&self.wing_panel_count) {
            return Err(CalcError::UnsupportedWingPanelCount {
                panel_count: self.wing_panel_count,
            });
        }

        match &self.tail_cg_adjust_ballast {
            TailBallastCapacity::None => {}
            TailBallastCapacity::Water(capacity) => {
                if !(0.0..=MAX_TAIL_WATER_CAPACITY).contains(capacity) {
                    return Err(CalcError::invalid_input(
                        "tail_cg_adjust_ballast",
                        capacity.to_string(),
                        format!("Water capacity must be between 0 and {} kg", MAX_TAIL_WATER_CAPACITY),
                    ));
                }
            }
            TailBallastCapacity::Blocks(blocks) => {
                if let Some(block) = blocks
                    .iter()
                    .find(|b| !(b.weight_per_block > 0.0) || !b.weight_per_block.is_finite())
                {
                    return Err(CalcError::invalid_input(
                        "tail_cg_adjust_ballast",
                        format!("{} ({} kg)", block.label, block.weight_per_block),
                        "Block weight must be positive",
                    ));
                }
                if let Some(block) = blocks.iter().find(|b| b.max_block_count > MAX_TAIL_BLOCK_COUNT) {
                    return Err(CalcError::invalid_input(
                        "tail_cg_adjust_ballast",
                        format!("{} (x{})", block.label, block.max_block_count),
                        format!("At most {} blocks of one size", MAX_TAIL_BLOCK_COUNT),
                    ));
                }
            }
        }

        Ok(())
    }

    /// Wing water ballast capacity, if the aircraft carries any
    pub fn wing_ballast_capacity(&self) -> Option<f64> {
        self.wing_max_ballast_amount.filter(|amount| *amount > 0.0)
    }

    pub fn is_tandem(&self) -> bool {
        self.seating_type == SeatingConfiguration::Tandem
    }
}
