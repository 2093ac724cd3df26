//! The ideal-proportions calculator: a user-entered measurement set, the
//! McCallum/golden-ratio ideals scaled from the live wrist and height, and
//! the five labeled body-ratio indices.
//!
//! Unlike the dashboard views, which read circumference constants from a
//! configured [`AnthroProfile`](bodysculpt_schemas::profile::AnthroProfile)
//! snapshot, everything here derives from the values the user typed in.

use crate::error::SculptError;
use bodysculpt_schemas::file_formats::CalculatorInputFile;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// One calculator form field: name used in input files, display label, and
/// the measuring instruction shown under the input.
pub struct FieldGuide {
    pub name: &'static str,
    pub label: &'static str,
    pub info: &'static str,
}

/// The thirteen form fields, in display order.
pub const FIELD_GUIDE: [FieldGuide; 13] = [
    FieldGuide { name: "height", label: "Estatura (cm)", info: "De pie, descalzo, desde la coronilla" },
    FieldGuide { name: "weight", label: "Peso (kg)", info: "Por la mañana, en ayunas, sin ropa" },
    FieldGuide { name: "body_fat", label: "% Grasa Corporal", info: "Báscula bioimpedancia o calibre" },
    FieldGuide { name: "wrist", label: "Muñeca (cm)", info: "Punto más estrecho, debajo del hueso" },
    FieldGuide { name: "shoulders", label: "Hombros (cm)", info: "Contorno por deltoides, brazos relajados" },
    FieldGuide { name: "chest", label: "Pecho (cm)", info: "A la altura de los pezones, sin flexionar" },
    FieldGuide { name: "waist", label: "Cintura (cm)", info: "Punto más estrecho, ombligo" },
    FieldGuide { name: "hip", label: "Cadera (cm)", info: "Punto más ancho de los glúteos" },
    FieldGuide { name: "biceps", label: "Bíceps (cm)", info: "Brazo flexionado, punto más alto" },
    FieldGuide { name: "forearm", label: "Antebrazo (cm)", info: "Punto más grueso, puño cerrado" },
    FieldGuide { name: "thigh", label: "Muslo (cm)", info: "Punto más grueso, debajo del glúteo" },
    FieldGuide { name: "calf", label: "Pantorrilla (cm)", info: "Punto más grueso, de pie" },
    FieldGuide { name: "neck", label: "Cuello (cm)", info: "Punto medio, debajo de la nuez" },
];

/// The user-entered measurement set, seeded with the dashboard defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserMeasurements {
    pub height: f64,
    pub weight: f64,
    pub body_fat: f64,
    pub wrist: f64,
    pub shoulders: f64,
    pub chest: f64,
    pub waist: f64,
    pub hip: f64,
    pub biceps: f64,
    pub forearm: f64,
    pub thigh: f64,
    pub calf: f64,
    pub neck: f64,
}

impl Default for UserMeasurements {
    fn default() -> Self {
        Self {
            height: 190.0,
            weight: 88.59,
            body_fat: 22.6,
            wrist: 17.5,
            shoulders: 125.0,
            chest: 113.0,
            waist: 94.0,
            hip: 94.0,
            biceps: 38.0,
            forearm: 33.0,
            thigh: 56.0,
            calf: 39.0,
            neck: 42.0,
        }
    }
}

/// Lenient numeric parse for form input: anything that is not a finite
/// number degrades to 0.0 rather than erroring.
pub fn parse_value(raw: &str) -> f64 {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

impl UserMeasurements {
    /// Updates one field from raw text. The value goes through
    /// [`parse_value`]; only the field name itself can be rejected.
    pub fn set(&mut self, field: &str, raw: &str) -> Result<(), SculptError> {
        let value = parse_value(raw);
        match field {
            "height" => self.height = value,
            "weight" => self.weight = value,
            "body_fat" => self.body_fat = value,
            "wrist" => self.wrist = value,
            "shoulders" => self.shoulders = value,
            "chest" => self.chest = value,
            "waist" => self.waist = value,
            "hip" => self.hip = value,
            "biceps" => self.biceps = value,
            "forearm" => self.forearm = value,
            "thigh" => self.thigh = value,
            "calf" => self.calf = value,
            "neck" => self.neck = value,
            other => return Err(SculptError::UnknownField(other.to_string())),
        }
        Ok(())
    }

    pub fn get(&self, field: &str) -> Option<f64> {
        match field {
            "height" => Some(self.height),
            "weight" => Some(self.weight),
            "body_fat" => Some(self.body_fat),
            "wrist" => Some(self.wrist),
            "shoulders" => Some(self.shoulders),
            "chest" => Some(self.chest),
            "waist" => Some(self.waist),
            "hip" => Some(self.hip),
            "biceps" => Some(self.biceps),
            "forearm" => Some(self.forearm),
            "thigh" => Some(self.thigh),
            "calf" => Some(self.calf),
            "neck" => Some(self.neck),
            _ => None,
        }
    }

    /// Applies a batch of raw text entries over the current values.
    pub fn apply(&mut self, entries: &BTreeMap<String, String>) -> Result<(), SculptError> {
        for (field, raw) in entries {
            self.set(field, raw)?;
        }
        Ok(())
    }

    /// Loads a calculator input file: defaults overlaid with the file's raw
    /// entries.
    pub fn from_yaml_file(path: &Path) -> Result<Self, SculptError> {
        let display = path.display().to_string();
        let content =
            fs::read_to_string(path).map_err(|e| SculptError::FileIO(display.clone(), e))?;
        let file: CalculatorInputFile =
            serde_yaml::from_str(&content).map_err(|e| SculptError::YamlParsing(display, e))?;
        let mut measurements = Self::default();
        measurements.apply(&file.measurements)?;
        Ok(measurements)
    }
}

/// The nine ideal circumferences derived from the live wrist and height.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdealMeasurements {
    pub biceps: f64,
    pub forearm: f64,
    pub chest: f64,
    pub waist: f64,
    pub shoulders: f64,
    pub hip: f64,
    pub calf: f64,
    pub thigh: f64,
    pub neck: f64,
}

impl IdealMeasurements {
    /// Display entries in the calculator's card order.
    pub fn entries(&self) -> [(&'static str, f64); 9] {
        [
            ("biceps", self.biceps),
            ("forearm", self.forearm),
            ("chest", self.chest),
            ("waist", self.waist),
            ("shoulders", self.shoulders),
            ("hip", self.hip),
            ("calf", self.calf),
            ("thigh", self.thigh),
            ("neck", self.neck),
        ]
    }
}

/// McCallum/golden-ratio ideals scaled from the user's wrist and height.
pub fn ideal_measurements(user: &UserMeasurements) -> IdealMeasurements {
    let ideal_waist = user.height * 0.45;
    IdealMeasurements {
        biceps: user.wrist * 2.5,
        forearm: (user.wrist * 2.5) * 0.8,
        chest: user.wrist * 6.5,
        waist: ideal_waist,
        shoulders: ideal_waist * 1.618,
        hip: ideal_waist * 1.1,
        calf: user.wrist * 2.5,
        thigh: ideal_waist * 0.78,
        neck: ideal_waist * 0.37,
    }
}

/// One labeled body-ratio index with its acceptance verdict.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyRatio {
    pub label: String,
    pub value: f64,
    pub target: String,
    pub ok: bool,
}

/// A zeroed field must not take the calculator down; an impossible ratio
/// reports 0.0 instead.
fn ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}

/// The five body-ratio indices, each flagged against its acceptance band.
/// V-Taper is the Adonis computation under a second label; the two stay in
/// lockstep on purpose.
pub fn body_ratios(user: &UserMeasurements) -> Vec<BodyRatio> {
    let adonis = ratio(user.shoulders, user.waist);
    let golden = ratio(user.chest, user.waist);
    let v_taper = adonis;
    let whtr = ratio(user.waist, user.height);
    let whr = ratio(user.waist, user.hip);

    vec![
        BodyRatio {
            label: "Adonis Index".to_string(),
            value: adonis,
            target: "1.618".to_string(),
            ok: (1.55..=1.65).contains(&adonis),
        },
        BodyRatio {
            label: "Golden Ratio (Pecho/Cintura)".to_string(),
            value: golden,
            target: "1.4".to_string(),
            ok: (1.33..=1.45).contains(&golden),
        },
        BodyRatio {
            label: "V-Taper".to_string(),
            value: v_taper,
            target: "1.6".to_string(),
            ok: (1.55..=1.65).contains(&v_taper),
        },
        BodyRatio {
            label: "WHtR (Cintura/Estatura)".to_string(),
            value: whtr,
            target: "<0.50".to_string(),
            ok: whtr < 0.50,
        },
        BodyRatio {
            label: "WHR (Cintura/Cadera)".to_string(),
            value: whr,
            target: "0.92".to_string(),
            ok: (0.90..=0.95).contains(&whr),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn parse_is_lenient() {
        assert_eq!(parse_value("17.5"), 17.5);
        assert_eq!(parse_value("  94 "), 94.0);
        assert_eq!(parse_value(""), 0.0);
        assert_eq!(parse_value("abc"), 0.0);
        assert_eq!(parse_value("NaN"), 0.0);
        assert_eq!(parse_value("inf"), 0.0);
    }

    #[test]
    fn set_rejects_unknown_fields_only() {
        let mut user = UserMeasurements::default();
        user.set("waist", "90.5").unwrap();
        assert_eq!(user.waist, 90.5);
        user.set("waist", "not a number").unwrap();
        assert_eq!(user.waist, 0.0);
        assert!(matches!(
            user.set("elbow", "30"),
            Err(SculptError::UnknownField(_))
        ));
    }

    #[test]
    fn every_guide_field_resolves() {
        let user = UserMeasurements::default();
        for field in FIELD_GUIDE {
            assert!(user.get(field.name).is_some(), "missing {}", field.name);
        }
    }

    #[test]
    fn ideals_scale_from_wrist_and_height() {
        let ideals = ideal_measurements(&UserMeasurements::default());
        assert!((ideals.waist - 85.5).abs() < EPS);
        assert!((ideals.shoulders - 85.5 * 1.618).abs() < EPS);
        assert!((ideals.biceps - 43.75).abs() < EPS);
        assert!((ideals.forearm - 35.0).abs() < EPS);
        assert!((ideals.chest - 113.75).abs() < EPS);
        assert!((ideals.neck - 85.5 * 0.37).abs() < EPS);

        let mut small = UserMeasurements::default();
        small.set("wrist", "16").unwrap();
        let scaled = ideal_measurements(&small);
        assert!((scaled.biceps - 40.0).abs() < EPS);
    }

    #[test]
    fn ratios_match_the_seeded_measurements() {
        let ratios = body_ratios(&UserMeasurements::default());
        assert_eq!(ratios.len(), 5);
        let labels: Vec<&str> = ratios.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(
            labels,
            [
                "Adonis Index",
                "Golden Ratio (Pecho/Cintura)",
                "V-Taper",
                "WHtR (Cintura/Estatura)",
                "WHR (Cintura/Cadera)"
            ]
        );
        // 125 / 94, below the acceptance band.
        assert!((ratios[0].value - 1.3298).abs() < 0.001);
        assert!(!ratios[0].ok);
        // V-Taper mirrors Adonis exactly.
        assert_eq!(ratios[0].value, ratios[2].value);
        // 94 / 190 just clears the WHtR band.
        assert!((ratios[3].value - 0.4947).abs() < 0.001);
        assert!(ratios[3].ok);
        // 94 / 94 sits above the WHR band.
        assert!((ratios[4].value - 1.0).abs() < EPS);
        assert!(!ratios[4].ok);
    }

    #[test]
    fn zeroed_fields_do_not_panic_the_ratios() {
        let mut user = UserMeasurements::default();
        user.set("waist", "garbage").unwrap();
        let ratios = body_ratios(&user);
        assert_eq!(ratios[0].value, 0.0);
        assert_eq!(ratios[3].value, 0.0);
        let ideals = ideal_measurements(&user);
        assert!((ideals.waist - 85.5).abs() < EPS);
    }
}
