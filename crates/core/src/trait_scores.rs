//! The six measured traits and fixed-shape score vectors over them.
//!
//! A [`TraitScores`] value is used both for a career's requirement vector
//! and for a user's derived vector. Every value is clamped to `0..=100` on
//! construction, including when deserialized.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Index;
use std::str::FromStr;

/// Upper bound of every trait score.
pub const MAX_TRAIT_SCORE: u8 = 100;

/// One of the six measured personal attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TraitKey {
    StressTolerance,
    LogicalThinking,
    EmotionalRegulation,
    Creativity,
    AnalyticalSkills,
    Communication,
}

impl TraitKey {
    /// All keys in canonical order.
    pub const ALL: [TraitKey; 6] = [
        TraitKey::StressTolerance,
        TraitKey::LogicalThinking,
        TraitKey::EmotionalRegulation,
        TraitKey::Creativity,
        TraitKey::AnalyticalSkills,
        TraitKey::Communication,
    ];

    /// Position of this key in [`TraitKey::ALL`].
    pub const fn index(self) -> usize {
        match self {
            TraitKey::StressTolerance => 0,
            TraitKey::LogicalThinking => 1,
            TraitKey::EmotionalRegulation => 2,
            TraitKey::Creativity => 3,
            TraitKey::AnalyticalSkills => 4,
            TraitKey::Communication => 5,
        }
    }

    /// Wire name (camelCase).
    pub const fn as_str(self) -> &'static str {
        match self {
            TraitKey::StressTolerance => "stressTolerance",
            TraitKey::LogicalThinking => "logicalThinking",
            TraitKey::EmotionalRegulation => "emotionalRegulation",
            TraitKey::Creativity => "creativity",
            TraitKey::AnalyticalSkills => "analyticalSkills",
            TraitKey::Communication => "communication",
        }
    }

    /// Human-readable name, e.g. "Stress Tolerance".
    pub const fn display_name(self) -> &'static str {
        match self {
            TraitKey::StressTolerance => "Stress Tolerance",
            TraitKey::LogicalThinking => "Logical Thinking",
            TraitKey::EmotionalRegulation => "Emotional Regulation",
            TraitKey::Creativity => "Creativity",
            TraitKey::AnalyticalSkills => "Analytical Skills",
            TraitKey::Communication => "Communication",
        }
    }
}

impl fmt::Display for TraitKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TraitKey {
    type Err = String;

    /// Accepts the camelCase wire name as well as snake_case and kebab-case
    /// spellings, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .collect::<String>()
            .to_lowercase();
        TraitKey::ALL
            .into_iter()
            .find(|k| k.as_str().to_lowercase() == normalized)
            .ok_or_else(|| format!("unknown trait: {s}"))
    }
}

/// A score in `0..=100` for each of the six traits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "ScoresRepr", into = "ScoresRepr")]
pub struct TraitScores {
    values: [u8; 6],
}

impl TraitScores {
    /// Build from values in canonical [`TraitKey::ALL`] order, clamping each
    /// to `0..=100`.
    pub fn new(values: [u32; 6]) -> Self {
        Self {
            values: values.map(clamp_score),
        }
    }

    /// Every trait set to the same value.
    pub fn uniform(value: u32) -> Self {
        Self::new([value; 6])
    }

    /// Build by evaluating `f` for each key.
    pub fn from_fn(mut f: impl FnMut(TraitKey) -> u32) -> Self {
        Self::new(TraitKey::ALL.map(&mut f))
    }

    pub fn get(&self, key: TraitKey) -> u8 {
        self.values[key.index()]
    }

    /// A copy with one trait replaced (clamped).
    pub fn with(mut self, key: TraitKey, value: u32) -> Self {
        self.values[key.index()] = clamp_score(value);
        self
    }

    /// `(key, score)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (TraitKey, u8)> + '_ {
        TraitKey::ALL.into_iter().map(|k| (k, self.get(k)))
    }

    pub fn as_array(&self) -> [u8; 6] {
        self.values
    }
}

impl Index<TraitKey> for TraitScores {
    type Output = u8;

    fn index(&self, key: TraitKey) -> &u8 {
        &self.values[key.index()]
    }
}

fn clamp_score(value: u32) -> u8 {
    value.min(MAX_TRAIT_SCORE as u32) as u8
}

/// Wire shape: one named field per trait.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ScoresRepr {
    stress_tolerance: u32,
    logical_thinking: u32,
    emotional_regulation: u32,
    creativity: u32,
    analytical_skills: u32,
    communication: u32,
}

impl From<ScoresRepr> for TraitScores {
    fn from(r: ScoresRepr) -> Self {
        TraitScores::new([
            r.stress_tolerance,
            r.logical_thinking,
            r.emotional_regulation,
            r.creativity,
            r.analytical_skills,
            r.communication,
        ])
    }
}

impl From<TraitScores> for ScoresRepr {
    fn from(s: TraitScores) -> Self {
        let [a, b, c, d, e, f] = s.values.map(u32::from);
        ScoresRepr {
            stress_tolerance: a,
            logical_thinking: b,
            emotional_regulation: c,
            creativity: d,
            analytical_skills: e,
            communication: f,
        }
    }
}

/// Display metadata for a trait.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TraitDefinition {
    pub key: TraitKey,
    pub name: String,
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_are_clamped_on_construction() {
        let scores = TraitScores::new([0, 50, 100, 101, 250, u32::MAX]);
        assert_eq!(scores.as_array(), [0, 50, 100, 100, 100, 100]);
    }

    #[test]
    fn index_by_key() {
        let scores = TraitScores::new([90, 85, 80, 55, 85, 75]);
        assert_eq!(scores[TraitKey::StressTolerance], 90);
        assert_eq!(scores[TraitKey::Creativity], 55);
        assert_eq!(scores.get(TraitKey::Communication), 75);
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let scores = TraitScores::new([90, 85, 80, 55, 85, 75]);
        let json = serde_json::to_value(scores).unwrap();
        assert_eq!(json["stressTolerance"], 90);
        assert_eq!(json["analyticalSkills"], 85);
        assert_eq!(json.as_object().unwrap().len(), 6);
    }

    #[test]
    fn deserialization_clamps() {
        let json = r#"{"stressTolerance":140,"logicalThinking":1,"emotionalRegulation":2,
            "creativity":3,"analyticalSkills":4,"communication":5}"#;
        let scores: TraitScores = serde_json::from_str(json).unwrap();
        assert_eq!(scores[TraitKey::StressTolerance], 100);
    }

    #[test]
    fn trait_key_parses_several_spellings() {
        assert_eq!("stressTolerance".parse::<TraitKey>(), Ok(TraitKey::StressTolerance));
        assert_eq!("analytical_skills".parse::<TraitKey>(), Ok(TraitKey::AnalyticalSkills));
        assert_eq!("Emotional-Regulation".parse::<TraitKey>(), Ok(TraitKey::EmotionalRegulation));
        assert!("charisma".parse::<TraitKey>().is_err());
    }

    #[test]
    fn with_replaces_a_single_trait() {
        let scores = TraitScores::uniform(40).with(TraitKey::Creativity, 90);
        assert_eq!(scores[TraitKey::Creativity], 90);
        assert_eq!(scores[TraitKey::Communication], 40);
    }
}
