use serde::{Deserialize, Serialize};

/// A derived key performance indicator. Never stored; recomputed from the
/// latest measurement plus the anthropometric profile on every render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Kpi {
    pub name: String,
    pub actual: f64,
    pub target: f64,
    pub description: String,
    /// Actionable recommendation, phrased from the live gap to the target.
    pub tip: String,
}

/// Qualitative standing of a KPI against its target band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KpiStatus {
    Optimal,
    InProgress,
}
