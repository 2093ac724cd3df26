//! The anthropometric profile and goal targets that parameterize every
//! derivation. Hoisting these into one explicit object keeps the frame
//! constants (height, wrist) and the taped circumferences from drifting apart
//! between the KPI, comparison, and calculator views.

use serde::{Deserialize, Serialize};

/// Frame constants and most recently taped circumferences, all in
/// centimeters. The waist is the one zone read live from the measurement
/// series; `default_waist` covers measurements taken without a tape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnthroProfile {
    pub height_cm: f64,
    /// Wrist circumference, the McCallum frame reference.
    pub wrist_cm: f64,
    pub shoulders: f64,
    pub chest: f64,
    pub biceps: f64,
    pub forearm: f64,
    pub thigh: f64,
    pub calf: f64,
    pub neck: f64,
    pub hip: f64,
    pub default_waist: f64,
}

impl Default for AnthroProfile {
    fn default() -> Self {
        Self {
            height_cm: 190.0,
            wrist_cm: 17.5,
            shoulders: 125.0,
            chest: 113.0,
            biceps: 38.0,
            forearm: 33.0,
            thigh: 56.0,
            calf: 39.0,
            neck: 42.0,
            hip: 94.0,
            default_waist: 88.0,
        }
    }
}

impl AnthroProfile {
    /// McCallum-style ideal waist, the anchor for the torso ideals.
    pub fn ideal_waist(&self) -> f64 {
        self.height_cm * 0.45
    }
}

/// End-state targets the dashboard tracks progress toward. The start values
/// pin the denominators for series the measurement log does not cover from
/// day one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalTargets {
    pub weight_kg: f64,
    pub body_fat_pct: f64,
    pub muscle_mass_kg: f64,
    pub muscle_mass_start_kg: f64,
    pub visceral_fat: f64,
    pub visceral_fat_start: f64,
}

impl Default for GoalTargets {
    fn default() -> Self {
        Self {
            weight_kg: 83.0,
            body_fat_pct: 13.0,
            muscle_mass_kg: 69.0,
            muscle_mass_start_kg: 65.65,
            visceral_fat: 5.0,
            visceral_fat_start: 14.0,
        }
    }
}
