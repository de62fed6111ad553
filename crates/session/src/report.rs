use careerfit_core::{Career, TraitScores};
use careerfit_scoring::FitBand;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Read-only export of a finished assessment, for renderers.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSnapshot {
    pub career: Career,
    pub user_traits: TraitScores,
    pub compatibility_score: u8,
    pub fit: FitBand,
    pub completed_at: DateTime<Utc>,
}
