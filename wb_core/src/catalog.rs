//! # Reference Aircraft
//!
//! A handful of type certificates with published datum values, used for
//! demonstrations and as known-good inputs. Each call returns a fresh owned
//! record, so callers can adjust a copy without affecting anyone else.
//!
//! ## Example
//!
//! ```rust
//! use wb_core::catalog::ReferenceAircraft;
//!
//! let datum = ReferenceAircraft::JantarStd2.datum();
//! assert_eq!(datum.max_all_up_weight, 535.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::configuration::{
    AircraftConfiguration, BallastBlockCapacity, SeatingConfiguration, TailBallastCapacity,
    UndercarriageConfiguration,
};
use crate::datum::{CertificationCategory, DatumCalculationModel, WeightAndBalanceDatum};

/// Built-in reference type certificates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReferenceAircraft {
    /// SZD-48-1 Jantar Standard 2: single seat, two panel wing, wing water
    JantarStd2,
    /// LS6-c: single seat, four panel wing, cockpit blocks, tail tank
    Ls6c,
    /// ASK 21: tandem trainer, cockpit blocks
    Ask21,
    /// DG-1000S: tandem, ranged P1 arm, wing water, tail blocks
    Dg1000s,
}

impl ReferenceAircraft {
    pub const ALL: [ReferenceAircraft; 4] = [
        ReferenceAircraft::JantarStd2,
        ReferenceAircraft::Ls6c,
        ReferenceAircraft::Ask21,
        ReferenceAircraft::Dg1000s,
    ];

    /// Human-readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            ReferenceAircraft::JantarStd2 => "SZD-48-1 Jantar Standard 2",
            ReferenceAircraft::Ls6c => "LS6-c",
            ReferenceAircraft::Ask21 => "ASK 21",
            ReferenceAircraft::Dg1000s => "DG-1000S",
        }
    }

    /// Datum for the primary wingspan, utility category.
    pub fn datum(&self) -> WeightAndBalanceDatum {
        match self {
            ReferenceAircraft::JantarStd2 => WeightAndBalanceDatum {
                type_certificate_id: "SZD481".to_string(),
                category: CertificationCategory::Utility,
                wingspan: 15.0,
                location: "Wing leading edge at root rib".to_string(),
                levelling_instructions: "Fuselage top line horizontal".to_string(),
                calculation_model: DatumCalculationModel::Model1,
                max_all_up_weight: 535.0,
                max_dry_weight: 385.0,
                max_non_lifting_parts_weight: 245.0,
                max_seat_weight: 110.0,
                min_allowed_pilot_weight: 70.0,
                // Latest TCDS. Older manuals give 148.
                forward_cg_limit: 158.0,
                aft_cg_limit: 336.0,
                pilot1_arm: -616.0,
                distance_front_wheel_to_datum: 120.0,
                distance_front_wheel_to_rear_wheel: 3648.0,
                ..Default::default()
            },
            ReferenceAircraft::Ls6c => WeightAndBalanceDatum {
                type_certificate_id: "LS6C".to_string(),
                category: CertificationCategory::Utility,
                wingspan: 15.0,
                location: "Wing leading edge at root rib".to_string(),
                levelling_instructions: "Wedge 100:4.5 on rear fuselage top horizontal".to_string(),
                calculation_model: DatumCalculationModel::Model1,
                max_all_up_weight: 525.0,
                max_dry_weight: 425.0,
                max_non_lifting_parts_weight: 243.0,
                max_seat_weight: 110.0,
                min_allowed_pilot_weight: 70.0,
                forward_cg_limit: 294.0,
                aft_cg_limit: 386.0,
                pilot1_arm: -500.0,
                cockpit_ballast_block_arm: Some(-1400.0),
                distance_front_wheel_to_datum: 179.0,
                distance_front_wheel_to_rear_wheel: 4181.0,
                ..Default::default()
            },
            ReferenceAircraft::Ask21 => WeightAndBalanceDatum {
                type_certificate_id: "ASK21".to_string(),
                category: CertificationCategory::Utility,
                wingspan: 17.0,
                location: "Wing leading edge at root rib".to_string(),
                levelling_instructions: "Wedge 100:4.5 on rear fuselage top horizontal".to_string(),
                calculation_model: DatumCalculationModel::Model3,
                max_all_up_weight: 600.0,
                max_dry_weight: 600.0,
                max_non_lifting_parts_weight: 410.0,
                max_seat_weight: 110.0,
                min_allowed_pilot_weight: 0.0,
                forward_cg_limit: 234.0,
                aft_cg_limit: 469.0,
                // Short pilots sit at -1250. Assume a tall, light pilot.
                pilot1_arm: -1185.0,
                pilot2_arm: Some(-80.0),
                cockpit_ballast_block_arm: Some(-2300.0),
                distance_front_wheel_to_datum: -1600.0,
                distance_front_wheel_to_rear_wheel: 6871.0,
                ..Default::default()
            },
            ReferenceAircraft::Dg1000s => WeightAndBalanceDatum {
                type_certificate_id: "DG1000S".to_string(),
                category: CertificationCategory::Utility,
                wingspan: 18.0,
                location: "Wing leading edge at root rib".to_string(),
                levelling_instructions: "Wedge 100:2.6 on rear fuselage top horizontal".to_string(),
                calculation_model: DatumCalculationModel::Model1,
                max_all_up_weight: 750.0,
                max_dry_weight: 630.0,
                max_non_lifting_parts_weight: 469.0,
                max_seat_weight: 110.0,
                min_allowed_pilot_weight: 70.0,
                forward_cg_limit: 190.0,
                aft_cg_limit: 440.0,
                pilot1_arm: -1250.0,
                pilot1_arm_max: Some(-1350.0),
                pilot2_arm: Some(-272.0),
                cockpit_ballast_block_arm: Some(-1960.0),
                tail_ballast_arm: Some(5400.0),
                distance_front_wheel_to_datum: 114.0,
                distance_front_wheel_to_rear_wheel: 5189.0,
                ..Default::default()
            },
        }
    }

    /// Configuration with every option the type certificate allows.
    pub fn configuration(&self) -> AircraftConfiguration {
        match self {
            ReferenceAircraft::JantarStd2 => AircraftConfiguration {
                type_certificate_id: "SZD481".to_string(),
                undercarriage_type: UndercarriageConfiguration::Inline,
                seating_type: SeatingConfiguration::Single,
                wing_span_primary: 15.0,
                wing_panel_count: 2,
                wing_max_ballast_amount: Some(150.0),
                ..Default::default()
            },
            ReferenceAircraft::Ls6c => AircraftConfiguration {
                type_certificate_id: "LS6C".to_string(),
                has_flaps: true,
                undercarriage_type: UndercarriageConfiguration::Inline,
                seating_type: SeatingConfiguration::Single,
                wing_span_primary: 15.0,
                wing_span_alternate: Some(17.5),
                wing_panel_count: 4,
                has_winglet_option: true,
                wing_max_ballast_amount: Some(140.0),
                cockpit_ballast_block_count: 5,
                cockpit_ballast_weight_per_block: Some(1.0),
                tail_cg_adjust_ballast: TailBallastCapacity::Water(5.5),
                ..Default::default()
            },
            ReferenceAircraft::Ask21 => AircraftConfiguration {
                type_certificate_id: "ASK21".to_string(),
                has_fixed_undercarriage: true,
                undercarriage_type: UndercarriageConfiguration::Inline,
                seating_type: SeatingConfiguration::Tandem,
                wing_span_primary: 17.0,
                wing_panel_count: 2,
                cockpit_ballast_block_count: 10,
                cockpit_ballast_weight_per_block: Some(1.25),
                ..Default::default()
            },
            ReferenceAircraft::Dg1000s => AircraftConfiguration {
                type_certificate_id: "DG1000S".to_string(),
                undercarriage_type: UndercarriageConfiguration::Inline,
                seating_type: SeatingConfiguration::Tandem,
                wing_span_primary: 18.0,
                wing_span_alternate: Some(20.0),
                wing_panel_count: 4,
                has_winglet_option: true,
                wing_max_ballast_amount: Some(160.0),
                cockpit_ballast_block_count: 4,
                cockpit_ballast_weight_per_block: Some(2.4),
                tail_cg_adjust_ballast: TailBallastCapacity::Blocks(vec![
                    BallastBlockCapacity::new("Large", 2.4, 4),
                    BallastBlockCapacity::new("Small", 1.2, 2),
                ]),
                ..Default::default()
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configurations_validate() {
        for aircraft in ReferenceAircraft::ALL {
            assert!(aircraft.configuration().validate().is_ok(), "{:?}", aircraft);
        }
    }

    #[test]
    fn test_tandem_types_have_p2_arm() {
        for aircraft in ReferenceAircraft::ALL {
            if aircraft.configuration().is_tandem() {
                assert!(aircraft.datum().pilot2_arm.is_some(), "{:?}", aircraft);
            }
        }
    }

    #[test]
    fn test_records_are_independent_copies() {
        let mut first = ReferenceAircraft::Ls6c.datum();
        first.cockpit_ballast_block_arm = None;
        assert_eq!(ReferenceAircraft::Ls6c.datum().cockpit_ballast_block_arm, Some(-1400.0));
    }
}
