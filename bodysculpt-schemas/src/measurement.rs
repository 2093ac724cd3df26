//! Defines the tracked time series of the dashboard: daily body measurements,
//! bioimpedance body-composition samples, and nutrition entries. Each series is
//! ordered chronologically and aligned by its `date` field.

use serde::{Deserialize, Serialize};

/// A single day's scale reading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    /// Calendar date in `YYYY-MM-DD` form.
    pub date: String,
    /// Body weight in kilograms.
    pub weight: f64,
    /// Body fat percentage.
    pub body_fat: f64,
    pub bmi: f64,
    /// Waist circumference in centimeters. Not every scale session records it.
    pub waist: Option<f64>,
}

/// A bioimpedance body-composition sample. Sampled less often than
/// [`Measurement`], typically every other day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyComposition {
    pub date: String,
    /// Skeletal muscle mass in kilograms.
    pub muscle_mass: f64,
    /// Device-reported visceral fat level (integer index, 1-20).
    pub visceral_fat: u8,
    /// Bone mass in kilograms.
    pub bone_mass: Option<f64>,
    /// Total body water percentage.
    pub water: Option<f64>,
}

/// One day's calorie ledger, aligned with the measurement dates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutritionEntry {
    pub date: String,
    pub calories_consumed: f64,
    pub calories_burned: f64,
    /// Protein intake in grams.
    pub protein: Option<f64>,
    /// Carbohydrate intake in grams.
    pub carbs: Option<f64>,
    /// Fat intake in grams.
    pub fat: Option<f64>,
}
