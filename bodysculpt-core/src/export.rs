use crate::{dataset::TrackingData, error::SculptError};
use bodysculpt_schemas::{comparison::BodyComparison, kpi::Kpi};
use csv::Writer;
use serde::Serialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Serialize)]
struct TrendRow {
    date: String,
    weight_kg: f64,
    body_fat_pct: f64,
    bmi: f64,
    waist_cm: Option<f64>,
    calories_consumed: Option<f64>,
    calories_burned: Option<f64>,
    calorie_balance: Option<f64>,
}

/// Writes the daily trend table as CSV, one row per measurement date with the
/// nutrition ledger joined on.
pub struct TrendExporter {
    writer: Writer<fs::File>,
    path: String,
}

impl TrendExporter {
    pub fn new(path: &Path) -> Result<Self, SculptError> {
        let display = path.display().to_string();
        let writer =
            Writer::from_path(path).map_err(|e| SculptError::CsvError(display.clone(), e))?;
        Ok(Self {
            writer,
            path: display,
        })
    }

    pub fn write_trends(&mut self, data: &TrackingData) -> Result<(), SculptError> {
        for measurement in &data.measurements {
            let nutrition = data.nutrition.iter().find(|n| n.date == measurement.date);
            let row = TrendRow {
                date: measurement.date.clone(),
                weight_kg: measurement.weight,
                body_fat_pct: measurement.body_fat,
                bmi: measurement.bmi,
                waist_cm: measurement.waist,
                calories_consumed: nutrition.map(|n| n.calories_consumed),
                calories_burned: nutrition.map(|n| n.calories_burned),
                calorie_balance: nutrition.map(|n| n.calories_consumed - n.calories_burned),
            };
            self.writer
                .serialize(row)
                .map_err(|e| SculptError::CsvError(self.path.clone(), e))?;
        }
        self.writer
            .flush()
            .map_err(|e| SculptError::FileIO(self.path.clone(), e))?;
        Ok(())
    }
}

/// Snapshot of the derived dashboard state, serializable for any downstream
/// rendering layer.
#[derive(Debug, Serialize)]
pub struct DerivedSnapshot<'a> {
    pub kpis: &'a [Kpi],
    pub comparisons: &'a [BodyComparison],
    pub quick_wins: &'a [BodyComparison],
}

pub fn write_snapshot_json(path: &Path, snapshot: &DerivedSnapshot) -> Result<(), SculptError> {
    let json = serde_json::to_string_pretty(snapshot)?;
    fs::write(path, json).map_err(|e| SculptError::FileIO(path.display().to_string(), e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trend_export_joins_nutrition_by_date() {
        let data = TrackingData::builtin();
        let file = tempfile::NamedTempFile::new().unwrap();
        let mut exporter = TrendExporter::new(file.path()).unwrap();
        exporter.write_trends(&data).unwrap();
        drop(exporter);

        let content = std::fs::read_to_string(file.path()).unwrap();
        let mut lines = content.lines();
        assert_eq!(
            lines.next().unwrap(),
            "date,weight_kg,body_fat_pct,bmi,waist_cm,calories_consumed,calories_burned,calorie_balance"
        );
        // Header plus one row per measurement day.
        assert_eq!(content.lines().count(), 10);
        assert!(content.contains("2026-02-16,92.59,22.6,25.7,94.0,2100.0,2650.0,-550.0"));
    }

    #[test]
    fn trend_export_leaves_unmatched_dates_blank() {
        let mut data = TrackingData::builtin();
        data.nutrition.clear();
        let file = tempfile::NamedTempFile::new().unwrap();
        let mut exporter = TrendExporter::new(file.path()).unwrap();
        exporter.write_trends(&data).unwrap();
        drop(exporter);

        let content = std::fs::read_to_string(file.path()).unwrap();
        assert!(content.contains("2026-02-16,92.59,22.6,25.7,94.0,,,"));
    }
}
