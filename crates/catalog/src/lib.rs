//! Reference data store for CareerFit.
//!
//! The built-in catalog is compiled into the binary from `data/catalog.toml`.
//! A replacement catalog with the same shape can be loaded from disk (see
//! `[catalog] path` in the config). Either way the data is validated once at
//! load time and is read-only afterwards.

use careerfit_config::CatalogConfig;
use careerfit_core::{
    AnswerOption, Career, Catalog, CatalogError, DomainInfo, Question, TraitDefinition, TraitKey,
};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, info};

/// The catalog that ships with CareerFit.
const BUILTIN_CATALOG: &str = include_str!("../data/catalog.toml");

/// Questions each trait must have.
pub const QUESTIONS_PER_TRAIT: usize = 3;

/// On-disk shape of a catalog document.
#[derive(Debug, Deserialize)]
struct CatalogDocument {
    #[serde(default)]
    traits: Vec<TraitDefinition>,
    #[serde(default)]
    domains: Vec<DomainInfo>,
    #[serde(default)]
    answer_options: Vec<AnswerOption>,
    questions: Vec<Question>,
    careers: Vec<Career>,
}

/// An immutable, validated catalog held in memory.
#[derive(Debug, Clone)]
pub struct StaticCatalog {
    questions: Vec<Question>,
    answer_options: Vec<AnswerOption>,
    traits: Vec<TraitDefinition>,
    domains: Vec<DomainInfo>,
    careers: Vec<Career>,
}

impl StaticCatalog {
    /// The built-in catalog.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_toml_str(BUILTIN_CATALOG)
    }

    /// Parse and validate a catalog document.
    pub fn from_toml_str(content: &str) -> Result<Self, CatalogError> {
        let doc: CatalogDocument =
            toml::from_str(content).map_err(|e| CatalogError::ParseError(e.to_string()))?;

        let mut catalog = Self {
            questions: doc.questions,
            answer_options: doc.answer_options,
            traits: doc.traits,
            domains: doc.domains,
            careers: doc.careers,
        };
        catalog.questions.sort_by_key(|q| q.id);
        catalog.validate()?;

        debug!(
            questions = catalog.questions.len(),
            careers = catalog.careers.len(),
            "Catalog parsed"
        );
        Ok(catalog)
    }

    /// Load a catalog document from a file.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path).map_err(|e| CatalogError::ReadError {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        let catalog = Self::from_toml_str(&content)?;
        info!(path = %path.display(), careers = catalog.careers.len(), "Loaded catalog");
        Ok(catalog)
    }

    /// The configured catalog, or the built-in one when no path is set.
    pub fn from_config(config: &CatalogConfig) -> Result<Self, CatalogError> {
        match &config.path {
            Some(path) => Self::load(Path::new(path)),
            None => Self::builtin(),
        }
    }

    fn validate(&self) -> Result<(), CatalogError> {
        let mut seen = HashSet::new();
        for q in &self.questions {
            if !seen.insert(q.id) {
                return Err(CatalogError::Invalid(format!("duplicate question id {}", q.id)));
            }
        }

        for key in TraitKey::ALL {
            let count = self.questions.iter().filter(|q| q.trait_key == key).count();
            if count != QUESTIONS_PER_TRAIT {
                return Err(CatalogError::Invalid(format!(
                    "trait {key} has {count} questions, expected {QUESTIONS_PER_TRAIT}"
                )));
            }
        }

        if self.careers.is_empty() {
            return Err(CatalogError::Invalid("catalog has no careers".into()));
        }

        let mut ids = HashSet::new();
        for career in &self.careers {
            if !ids.insert(career.id.as_str()) {
                return Err(CatalogError::Invalid(format!(
                    "duplicate career id {}",
                    career.id
                )));
            }
        }

        if let Some(opt) = self
            .answer_options
            .iter()
            .find(|o| !(careerfit_core::MIN_ANSWER_VALUE..=careerfit_core::MAX_ANSWER_VALUE).contains(&o.value))
        {
            return Err(CatalogError::Invalid(format!(
                "answer option '{}' has value {} outside 1-4",
                opt.label, opt.value
            )));
        }

        Ok(())
    }
}

impl Catalog for StaticCatalog {
    fn questions(&self) -> &[Question] {
        &self.questions
    }

    fn answer_options(&self) -> &[AnswerOption] {
        &self.answer_options
    }

    fn traits(&self) -> &[TraitDefinition] {
        &self.traits
    }

    fn domains(&self) -> &[DomainInfo] {
        &self.domains
    }

    fn careers(&self) -> &[Career] {
        &self.careers
    }
}
