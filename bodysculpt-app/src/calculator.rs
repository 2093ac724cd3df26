//! The ideal-proportions calculator workflow: seeded defaults, an optional
//! raw-measurement input file applied on top, and a printed report of the
//! ideals and body-ratio indices.

use anyhow::{Context, Result};
use bodysculpt_core::proportions::{
    self, BodyRatio, IdealMeasurements, UserMeasurements, FIELD_GUIDE,
};
use std::path::Path;

pub fn run(input: Option<&Path>) -> Result<()> {
    println!("--- Calculadora de Proporciones Ideales ---");

    let user = match input {
        Some(path) => {
            println!("Loading measurements from '{}'...", path.display());
            UserMeasurements::from_yaml_file(path)
                .with_context(|| format!("Failed to load calculator input {}", path.display()))?
        }
        None => {
            println!("No input file given; using the seeded default measurements.");
            UserMeasurements::default()
        }
    };

    let ideals = proportions::ideal_measurements(&user);
    let ratios = proportions::body_ratios(&user);

    print_measurements(&user);
    print_ideals(&ideals);
    print_ratios(&ratios);
    Ok(())
}

fn print_measurements(user: &UserMeasurements) {
    println!("\nTus Medidas Actuales:");
    for field in FIELD_GUIDE {
        // Every guide entry resolves; fields() and the guide are kept in sync.
        let value = user.get(field.name).unwrap_or_default();
        println!("  - {:<18} {:>7.1}   ({})", field.label, value, field.info);
    }
}

fn print_ideals(ideals: &IdealMeasurements) {
    println!("\nTus Medidas Ideales:");
    for (name, value) in ideals.entries() {
        println!("  - {name:<10} {value:>7.1} cm");
    }
}

fn print_ratios(ratios: &[BodyRatio]) {
    println!("\nTus Índices Corporales:");
    for ratio in ratios {
        let badge = if ratio.ok { "✓" } else { " " };
        println!(
            "  - {:<30} {:>7.3}  Objetivo: {:<6} [{}]",
            ratio.label, ratio.value, ratio.target, badge
        );
    }
}
