//! The built-in tracking dataset and its accessors.
//!
//! Covers the 16-24 February 2026 cut: nine daily scale measurements, five
//! bioimpedance samples, and nine nutrition entries. The app replaces this
//! with a user-supplied tracking log when one is configured.

use crate::error::SculptError;
use bodysculpt_schemas::measurement::{BodyComposition, Measurement, NutritionEntry};

/// The three tracked series, chronologically ordered and date-aligned.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackingData {
    pub measurements: Vec<Measurement>,
    pub body_compositions: Vec<BodyComposition>,
    pub nutrition: Vec<NutritionEntry>,
}

impl TrackingData {
    /// The compiled-in dataset the dashboard renders with zero configuration.
    pub fn builtin() -> Self {
        let measurements = vec![
            measurement("2026-02-16", 92.59, 22.6, 25.7, Some(94.0)),
            measurement("2026-02-17", 91.80, 22.1, 25.4, Some(93.0)),
            measurement("2026-02-18", 91.20, 21.6, 25.2, Some(92.5)),
            measurement("2026-02-19", 90.75, 21.2, 25.1, Some(92.0)),
            measurement("2026-02-20", 90.30, 20.8, 25.0, Some(91.0)),
            measurement("2026-02-21", 89.90, 20.3, 24.9, Some(90.0)),
            measurement("2026-02-22", 89.50, 19.9, 24.8, Some(89.0)),
            measurement("2026-02-23", 89.20, 19.6, 24.7, Some(88.5)),
            measurement("2026-02-24", 89.03, 19.4, 24.7, Some(88.0)),
        ];

        let body_compositions = vec![
            composition("2026-02-16", 65.65, 14, 55.2),
            composition("2026-02-18", 65.80, 13, 55.8),
            composition("2026-02-20", 66.10, 12, 56.2),
            composition("2026-02-22", 66.40, 11, 56.8),
            composition("2026-02-24", 66.72, 10, 57.3),
        ];

        let nutrition = vec![
            nutrition("2026-02-16", 2100.0, 2650.0, 185.0, 210.0, 72.0),
            nutrition("2026-02-17", 1950.0, 2600.0, 180.0, 185.0, 68.0),
            nutrition("2026-02-18", 2200.0, 2750.0, 195.0, 215.0, 75.0),
            nutrition("2026-02-19", 1800.0, 2500.0, 175.0, 165.0, 62.0),
            nutrition("2026-02-20", 2050.0, 2700.0, 190.0, 200.0, 70.0),
            nutrition("2026-02-21", 1900.0, 2580.0, 178.0, 178.0, 65.0),
            nutrition("2026-02-22", 2150.0, 2720.0, 192.0, 208.0, 73.0),
            nutrition("2026-02-23", 1950.0, 2620.0, 182.0, 188.0, 67.0),
            nutrition("2026-02-24", 2000.0, 2680.0, 188.0, 195.0, 69.0),
        ];

        Self {
            measurements,
            body_compositions,
            nutrition,
        }
    }

    pub fn first_measurement(&self) -> Result<&Measurement, SculptError> {
        self.measurements
            .first()
            .ok_or(SculptError::EmptyDataset("measurement"))
    }

    pub fn latest_measurement(&self) -> Result<&Measurement, SculptError> {
        self.measurements
            .last()
            .ok_or(SculptError::EmptyDataset("measurement"))
    }

    pub fn first_composition(&self) -> Result<&BodyComposition, SculptError> {
        self.body_compositions
            .first()
            .ok_or(SculptError::EmptyDataset("body composition"))
    }

    pub fn latest_composition(&self) -> Result<&BodyComposition, SculptError> {
        self.body_compositions
            .last()
            .ok_or(SculptError::EmptyDataset("body composition"))
    }

    /// Human-readable date range of the measurement series, e.g.
    /// "16 Feb - 24 Feb 2026".
    pub fn period_label(&self) -> Result<String, SculptError> {
        let first = self.first_measurement()?;
        let last = self.latest_measurement()?;
        let year = last.date.get(..4).unwrap_or("");
        Ok(format!(
            "{} - {} {}",
            short_date(&first.date),
            short_date(&last.date),
            year
        ))
    }
}

/// Formats an ISO date as the chart-axis label, e.g. "2026-02-16" -> "16 Feb".
pub fn short_date(iso_date: &str) -> String {
    let mut parts = iso_date.splitn(3, '-');
    let (_year, month, day) = (parts.next(), parts.next(), parts.next());
    let month_name = match month {
        Some("01") => "Ene",
        Some("02") => "Feb",
        Some("03") => "Mar",
        Some("04") => "Abr",
        Some("05") => "May",
        Some("06") => "Jun",
        Some("07") => "Jul",
        Some("08") => "Ago",
        Some("09") => "Sep",
        Some("10") => "Oct",
        Some("11") => "Nov",
        Some("12") => "Dic",
        _ => return iso_date.to_string(),
    };
    let day = day.unwrap_or("").trim_start_matches('0');
    format!("{day} {month_name}")
}

fn measurement(date: &str, weight: f64, body_fat: f64, bmi: f64, waist: Option<f64>) -> Measurement {
    Measurement {
        date: date.to_string(),
        weight,
        body_fat,
        bmi,
        waist,
    }
}

fn composition(date: &str, muscle_mass: f64, visceral_fat: u8, water: f64) -> BodyComposition {
    BodyComposition {
        date: date.to_string(),
        muscle_mass,
        visceral_fat,
        bone_mass: Some(3.8),
        water: Some(water),
    }
}

fn nutrition(
    date: &str,
    calories_consumed: f64,
    calories_burned: f64,
    protein: f64,
    carbs: f64,
    fat: f64,
) -> NutritionEntry {
    NutritionEntry {
        date: date.to_string(),
        calories_consumed,
        calories_burned,
        protein: Some(protein),
        carbs: Some(carbs),
        fat: Some(fat),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_series_are_populated_and_ordered() {
        let data = TrackingData::builtin();
        assert_eq!(data.measurements.len(), 9);
        assert_eq!(data.body_compositions.len(), 5);
        assert_eq!(data.nutrition.len(), 9);
        assert_eq!(data.first_measurement().unwrap().weight, 92.59);
        assert_eq!(data.latest_measurement().unwrap().weight, 89.03);
        assert_eq!(data.latest_composition().unwrap().visceral_fat, 10);
    }

    #[test]
    fn period_label_spans_the_series() {
        let data = TrackingData::builtin();
        assert_eq!(data.period_label().unwrap(), "16 Feb - 24 Feb 2026");
    }

    #[test]
    fn empty_series_surface_an_error() {
        let mut data = TrackingData::builtin();
        data.measurements.clear();
        assert!(matches!(
            data.latest_measurement(),
            Err(SculptError::EmptyDataset("measurement"))
        ));
    }

    #[test]
    fn short_date_drops_leading_zero() {
        assert_eq!(short_date("2026-02-04"), "4 Feb");
        assert_eq!(short_date("2026-11-24"), "24 Nov");
        assert_eq!(short_date("not-a-date"), "not-a-date");
    }
}
