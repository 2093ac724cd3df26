use anyhow::{ensure, Context, Result};
use bodysculpt_core::dataset::TrackingData;
use bodysculpt_schemas::{
    file_formats::{ProfileFile, TrackingLogFile},
    profile::{AnthroProfile, GoalTargets},
};
use std::{fs, path::Path};

/// Everything a dashboard run derives from: the anthropometric profile, the
/// goal targets, and the tracked series. Falls back to the built-in defaults
/// for any part no file was given for.
pub struct UserData {
    pub profile: AnthroProfile,
    pub goals: GoalTargets,
    pub data: TrackingData,
}

impl UserData {
    pub fn load(profile_path: Option<&Path>, tracking_path: Option<&Path>) -> Result<Self> {
        let (profile, goals) = match profile_path {
            Some(path) => {
                println!("Loading profile from '{}'...", path.display());
                let content = fs::read_to_string(path)
                    .with_context(|| format!("Failed to read profile file {}", path.display()))?;
                let file: ProfileFile = serde_yaml::from_str(&content)
                    .with_context(|| format!("Failed to parse YAML from {}", path.display()))?;
                (file.profile, file.goals.unwrap_or_default())
            }
            None => (AnthroProfile::default(), GoalTargets::default()),
        };

        let data = match tracking_path {
            Some(path) => {
                println!("Loading tracking log from '{}'...", path.display());
                let content = fs::read_to_string(path)
                    .with_context(|| format!("Failed to read tracking log {}", path.display()))?;
                let file: TrackingLogFile = serde_yaml::from_str(&content)
                    .with_context(|| format!("Failed to parse YAML from {}", path.display()))?;
                ensure!(
                    !file.measurements.is_empty(),
                    "Tracking log {} contains no measurements",
                    path.display()
                );
                TrackingData {
                    measurements: file.measurements,
                    body_compositions: file.body_compositions,
                    nutrition: file.nutrition,
                }
            }
            None => TrackingData::builtin(),
        };
        ensure!(
            !data.body_compositions.is_empty(),
            "The body-composition series is empty"
        );

        Ok(Self {
            profile,
            goals,
            data,
        })
    }
}
