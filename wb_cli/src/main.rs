//! # Placard CLI Application
//!
//! Interactive demo of the weight and balance engine. Prompts for the scale
//! readings of a Jantar Standard 2 and prints the cockpit placard.
//!
//! Set `RUST_LOG=debug` to follow the calculation steps.

use std::io::{self, BufRead, Write};

use tracing::info;
use tracing_subscriber::EnvFilter;

use wb_core::catalog::ReferenceAircraft;
use wb_core::results::WeightAndBalanceResult;
use wb_core::{calculate_from_measurements, WeightAndBalanceMeasurement, WeightAndBalanceOptions};

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default;
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default;
    }

    input.trim().parse().unwrap_or(default)
}

fn prompt_yes(prompt: &str) -> bool {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return false;
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return false;
    }

    matches!(input.trim(), "y" | "Y" | "yes")
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();

    let aircraft = ReferenceAircraft::JantarStd2;
    let datum = aircraft.datum();
    let config = aircraft.configuration();

    println!("Placard CLI - Glider Weight and Balance");
    println!("=======================================");
    println!();
    println!("Aircraft: {} ({})", aircraft.display_name(), config.seating_type.display_name());
    println!();

    let measured = WeightAndBalanceMeasurement::two_point(
        prompt_f64("Front wheel reading (kg) [246.0]: ", 246.0),
        prompt_f64("Tail wheel reading (kg) [33.0]: ", 33.0),
        prompt_f64("Left wing (kg) [72.0]: ", 72.0),
        prompt_f64("Right wing (kg) [74.0]: ", 74.0),
    );
    let options = WeightAndBalanceOptions::default()
        .with_safety_buffer(prompt_yes("Apply 5% aft CG safety buffer? [y/N]: "));

    println!();
    info!(type_certificate_id = %datum.type_certificate_id, "calculating envelope");

    match calculate_from_measurements(&datum, &config, &measured, &options) {
        Ok(result) => {
            print_placard(&result);

            println!();
            println!("JSON Output (for LLM/API use):");
            if let Ok(json) = serde_json::to_string_pretty(&result) {
                println!("{}", json);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
        }
    }
}

fn print_placard(result: &WeightAndBalanceResult) {
    let summary = result.summary();
    let (min, max) = result.pilot_weight_range();

    println!("═══════════════════════════════════════");
    println!("  WEIGHT AND BALANCE PLACARD");
    println!("═══════════════════════════════════════");
    println!();
    println!("Empty aircraft:");
    println!("  Weight:         {:.1} kg", summary.empty_weight);
    println!("  CG arm:         {:.0} mm", summary.empty_cg_arm);
    println!("  Non-lifting:    {:.1} kg", summary.non_lifting_parts_weight);
    println!(
        "  Fuselage load:  {:.0} kg ({})",
        summary.max_fuselage_load,
        summary.fuselage_load_limited_by.display_name()
    );
    println!();

    match result {
        WeightAndBalanceResult::SingleSeat(single) => {
            println!("Pilot weight (incl. parachute):");
            println!("  Minimum:  {:.0} kg", min);
            println!(
                "  Maximum:  {:.0} kg ({})",
                max,
                single.max_pilot_weight_limited_by.display_name()
            );
        }
        WeightAndBalanceResult::TwoSeat(tandem) => {
            println!("Solo pilot weight: {:.0} - {:.0} kg", min, max);
            println!();
            println!("  P1 (kg)   P2 min   P2 max");
            for row in &tandem.dual_pilot_weight_ranges {
                println!(
                    "  {:>7.0}  {:>7.0}  {:>7.0}",
                    row.pilot1_weight, row.min_pilot2_weight, row.max_pilot2_weight
                );
            }
        }
    }

    if let Some(blocks) = &summary.cockpit_ballast {
        println!();
        println!("Cockpit ballast:");
        for entry in blocks {
            println!("  {} block(s): min pilot {:.0} kg", entry.block_count, entry.min_pilot_weight);
        }
    }

    if let Some(chart) = &summary.allowed_wing_ballast {
        println!();
        println!("Wing water ballast:");
        for entry in chart {
            println!("  Pilot {:>4.0} kg: max {:.0} kg", entry.pilot_weight, entry.max_ballast);
        }
    }

    println!();
    println!("═══════════════════════════════════════");
    if result.has_usable_range() {
        println!("  RESULT: {:.0} - {:.0} kg [OK]", min, max);
    } else {
        println!(
            "  RESULT: range narrower than {:.0} kg [CHECK]",
            summary.calculation_input_options.min_allowed_weight_difference
        );
    }
    println!("═══════════════════════════════════════");
}
