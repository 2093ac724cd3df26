use crate::{
    measurement::{BodyComposition, Measurement, NutritionEntry},
    profile::{AnthroProfile, GoalTargets},
};
use serde::Deserialize;
use std::collections::BTreeMap;

#[derive(Debug, Deserialize)]
pub struct ProfileFile {
    pub schema_version: String,
    pub profile: AnthroProfile,
    pub goals: Option<GoalTargets>,
}

#[derive(Debug, Deserialize)]
pub struct TrackingLogFile {
    pub schema_version: String,
    pub measurements: Vec<Measurement>,
    pub body_compositions: Vec<BodyComposition>,
    pub nutrition: Vec<NutritionEntry>,
}

/// Calculator input keeps raw text values; parsing is lenient downstream so a
/// stray non-numeric entry degrades to zero instead of failing the run.
#[derive(Debug, Deserialize)]
pub struct CalculatorInputFile {
    pub schema_version: String,
    pub measurements: BTreeMap<String, String>,
}
