//! Academic streams and the careers that belong to them.

use crate::trait_scores::TraitScores;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the four academic/career streams used to filter the library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Domain {
    /// Physics, Chemistry, Biology
    Pcb,
    /// Physics, Chemistry, Mathematics
    Pcm,
    Commerce,
    Humanities,
}

impl Domain {
    pub const ALL: [Domain; 4] = [Domain::Pcb, Domain::Pcm, Domain::Commerce, Domain::Humanities];

    pub const fn as_str(self) -> &'static str {
        match self {
            Domain::Pcb => "pcb",
            Domain::Pcm => "pcm",
            Domain::Commerce => "commerce",
            Domain::Humanities => "humanities",
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Domain {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        Domain::ALL
            .into_iter()
            .find(|d| d.as_str() == lower)
            .ok_or_else(|| format!("unknown domain: {s} (expected pcb, pcm, commerce or humanities)"))
    }
}

/// Display metadata for a domain.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DomainInfo {
    pub id: Domain,
    pub name: String,
    pub full_name: String,
    pub description: String,
    pub tag_label: String,
}

/// A career in the reference library with its requirement vector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Career {
    pub id: String,
    pub name: String,
    pub description: String,
    pub domain: Domain,
    #[serde(alias = "required_traits")]
    pub required_traits: TraitScores,
}

impl Career {
    /// Case-insensitive substring match on name and description.
    /// `needle` must already be lowercase.
    pub fn matches_lowercase(&self, needle: &str) -> bool {
        needle.is_empty()
            || self.name.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doctor() -> Career {
        Career {
            id: "doctor".into(),
            name: "Doctor (MBBS)".into(),
            description: "Diagnose and treat illnesses; make high-stakes clinical decisions.".into(),
            domain: Domain::Pcb,
            required_traits: TraitScores::new([90, 85, 80, 55, 85, 75]),
        }
    }

    #[test]
    fn domain_round_trips_through_strings() {
        for d in Domain::ALL {
            assert_eq!(d.to_string().parse::<Domain>(), Ok(d));
        }
        assert_eq!("PCM".parse::<Domain>(), Ok(Domain::Pcm));
        assert!("science".parse::<Domain>().is_err());
    }

    #[test]
    fn domain_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Domain::Humanities).unwrap(), "\"humanities\"");
    }

    #[test]
    fn career_matching_is_case_insensitive() {
        let c = doctor();
        assert!(c.matches_lowercase("mbbs"));
        assert!(c.matches_lowercase("clinical"));
        assert!(c.matches_lowercase(""));
        assert!(!c.matches_lowercase("bridges"));
    }

    #[test]
    fn career_serializes_required_traits_camel_case() {
        let json = serde_json::to_value(doctor()).unwrap();
        assert_eq!(json["requiredTraits"]["stressTolerance"], 90);
        assert_eq!(json["domain"], "pcb");
    }
}
