//! Zone-by-zone comparison records between current and ideal circumferences.

use serde::{Deserialize, Serialize};

/// Urgency tier of a body-zone recommendation. Lower tiers sort first, so an
/// ascending sort yields critical work before medium work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Priority {
    Critical,
    High,
    Medium,
}

impl Priority {
    /// Numeric tier as shown on the dashboard (1 = critical).
    pub fn tier(self) -> u8 {
        match self {
            Priority::Critical => 1,
            Priority::High => 2,
            Priority::Medium => 3,
        }
    }

    /// Badge label used by the quick-win cards.
    pub fn label(self) -> &'static str {
        match self {
            Priority::Critical => "CRÍTICO",
            Priority::High => "ALTA",
            Priority::Medium => "MEDIA",
        }
    }
}

impl From<Priority> for u8 {
    fn from(priority: Priority) -> u8 {
        priority.tier()
    }
}

impl TryFrom<u8> for Priority {
    type Error = String;

    fn try_from(tier: u8) -> Result<Self, Self::Error> {
        match tier {
            1 => Ok(Priority::Critical),
            2 => Ok(Priority::High),
            3 => Ok(Priority::Medium),
            other => Err(format!("priority tier must be 1-3, got {other}")),
        }
    }
}

/// Current-versus-ideal record for one tracked body zone, annotated with the
/// editorial guidance shown on its card.
///
/// `difference` keeps the per-zone sign policy of the dashboard: the waist
/// reports `actual - ideal` (centimeters still to lose), every other zone
/// reports `ideal - actual` (centimeters still to gain).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyComparison {
    pub zone: String,
    pub actual: f64,
    pub ideal: f64,
    pub unit: String,
    pub title: String,
    pub reason: String,
    pub impact: String,
    pub difference: f64,
    pub timeline: String,
    pub actions: Vec<String>,
    pub priority: Priority,
}
