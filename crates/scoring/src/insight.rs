//! Score interpretation: trait levels, fit bands and per-trait gap analysis.

use crate::compatibility::trait_match;
use careerfit_core::{TraitKey, TraitScores};
use serde::Serialize;
use std::fmt;

/// Qualitative level of a single trait score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TraitLevel {
    Strong,
    Good,
    Developing,
    NeedsGrowth,
}

impl TraitLevel {
    pub fn from_score(score: u8) -> Self {
        match score {
            80.. => TraitLevel::Strong,
            60..80 => TraitLevel::Good,
            40..60 => TraitLevel::Developing,
            _ => TraitLevel::NeedsGrowth,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TraitLevel::Strong => "Strong",
            TraitLevel::Good => "Good",
            TraitLevel::Developing => "Developing",
            TraitLevel::NeedsGrowth => "Needs Growth",
        }
    }
}

impl fmt::Display for TraitLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// How well the overall compatibility score fits the career.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FitBand {
    StrongFit,
    ModerateFit,
    NeedsAlignment,
}

impl FitBand {
    pub fn from_score(score: u8) -> Self {
        match score {
            80.. => FitBand::StrongFit,
            60..80 => FitBand::ModerateFit,
            _ => FitBand::NeedsAlignment,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FitBand::StrongFit => "Strong Fit",
            FitBand::ModerateFit => "Moderate Fit",
            FitBand::NeedsAlignment => "Needs Alignment",
        }
    }
}

impl fmt::Display for FitBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Where a user's trait sits relative to the requirement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GapStatus {
    /// Within 10 points either way
    ExcellentMatch,
    /// Within 25 points either way
    GoodFit,
    RoomToGrow,
    Overqualified,
}

impl GapStatus {
    pub fn analyze(user: u8, required: u8) -> Self {
        match user.abs_diff(required) {
            0..=10 => GapStatus::ExcellentMatch,
            11..=25 => GapStatus::GoodFit,
            _ if user < required => GapStatus::RoomToGrow,
            _ => GapStatus::Overqualified,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            GapStatus::ExcellentMatch => "Excellent Match",
            GapStatus::GoodFit => "Good Fit",
            GapStatus::RoomToGrow => "Room to Grow",
            GapStatus::Overqualified => "Overqualified",
        }
    }
}

impl fmt::Display for GapStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A requirement counts as met within this many points below it.
const MEETS_TOLERANCE: u8 = 10;

/// Side-by-side view of one trait.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TraitInsight {
    pub key: TraitKey,
    pub name: &'static str,
    pub user_score: u8,
    pub required_score: u8,
    pub level: TraitLevel,
    pub gap: GapStatus,
    /// Per-trait closeness used by the compatibility score
    pub match_score: u8,
    pub meets_requirement: bool,
    /// Points to develop when the requirement is not met
    pub development_needed: u8,
}

impl TraitInsight {
    pub fn new(key: TraitKey, user: u8, required: u8) -> Self {
        let meets_requirement = user >= required.saturating_sub(MEETS_TOLERANCE);
        Self {
            key,
            name: key.display_name(),
            user_score: user,
            required_score: required,
            level: TraitLevel::from_score(user),
            gap: GapStatus::analyze(user, required),
            match_score: trait_match(user, required),
            meets_requirement,
            development_needed: if meets_requirement { 0 } else { required - user },
        }
    }
}

/// Insights for all six traits, in canonical order.
pub fn trait_insights(user: &TraitScores, required: &TraitScores) -> Vec<TraitInsight> {
    TraitKey::ALL
        .into_iter()
        .map(|k| TraitInsight::new(k, user[k], required[k]))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trait_level_thresholds() {
        assert_eq!(TraitLevel::from_score(100), TraitLevel::Strong);
        assert_eq!(TraitLevel::from_score(80), TraitLevel::Strong);
        assert_eq!(TraitLevel::from_score(79), TraitLevel::Good);
        assert_eq!(TraitLevel::from_score(60), TraitLevel::Good);
        assert_eq!(TraitLevel::from_score(40), TraitLevel::Developing);
        assert_eq!(TraitLevel::from_score(39), TraitLevel::NeedsGrowth);
        assert_eq!(TraitLevel::NeedsGrowth.to_string(), "Needs Growth");
    }

    #[test]
    fn fit_band_thresholds() {
        assert_eq!(FitBand::from_score(80), FitBand::StrongFit);
        assert_eq!(FitBand::from_score(60), FitBand::ModerateFit);
        assert_eq!(FitBand::from_score(59), FitBand::NeedsAlignment);
        assert_eq!(FitBand::StrongFit.to_string(), "Strong Fit");
    }

    #[test]
    fn gap_analysis() {
        assert_eq!(GapStatus::analyze(80, 90), GapStatus::ExcellentMatch);
        assert_eq!(GapStatus::analyze(100, 90), GapStatus::ExcellentMatch);
        assert_eq!(GapStatus::analyze(65, 90), GapStatus::GoodFit);
        assert_eq!(GapStatus::analyze(50, 90), GapStatus::RoomToGrow);
        assert_eq!(GapStatus::analyze(100, 55), GapStatus::Overqualified);
    }

    #[test]
    fn insight_development_needed() {
        let met = TraitInsight::new(TraitKey::Creativity, 75, 85);
        assert!(met.meets_requirement);
        assert_eq!(met.development_needed, 0);

        let unmet = TraitInsight::new(TraitKey::StressTolerance, 50, 90);
        assert!(!unmet.meets_requirement);
        assert_eq!(unmet.development_needed, 40);
        assert_eq!(unmet.gap, GapStatus::RoomToGrow);
        assert_eq!(unmet.match_score, 60);
        assert_eq!(unmet.name, "Stress Tolerance");
    }

    #[test]
    fn insights_cover_all_traits() {
        let user = TraitScores::uniform(75);
        let required = TraitScores::new([90, 85, 80, 55, 85, 75]);
        let insights = trait_insights(&user, &required);
        assert_eq!(insights.len(), 6);
        assert_eq!(insights[3].key, TraitKey::Creativity);
        assert_eq!(insights[3].gap, GapStatus::GoodFit);
        assert_eq!(insights[5].gap, GapStatus::ExcellentMatch);
    }
}
