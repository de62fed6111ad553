//! Subcommand implementations.

pub mod careers;
pub mod config_cmd;
pub mod onboard;
pub mod questions;
pub mod quiz;
pub mod recommend;
pub mod score;
pub mod status;

use careerfit_catalog::StaticCatalog;
use careerfit_config::AppConfig;
use careerfit_core::{Answer, Catalog, TraitScores};
use careerfit_scoring::Orchestrator;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::debug;

/// Loaded configuration and catalog shared by the commands.
pub struct Context {
    pub config: AppConfig,
    pub catalog: Arc<StaticCatalog>,
    /// Where the catalog came from, for display
    pub catalog_source: String,
}

impl Context {
    /// `catalog_override` (the `--catalog` flag) wins over `catalog.path`.
    pub fn new(
        mut config: AppConfig,
        catalog_override: Option<PathBuf>,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        if let Some(path) = catalog_override {
            config.catalog.path = Some(path.display().to_string());
        }
        let catalog = StaticCatalog::from_config(&config.catalog)
            .map_err(|e| format!("Failed to load catalog: {e}"))?;
        let catalog_source = config
            .catalog
            .path
            .clone()
            .unwrap_or_else(|| "built-in".into());
        debug!(source = %catalog_source, careers = catalog.careers().len(), "Catalog ready");
        Ok(Self {
            config,
            catalog: Arc::new(catalog),
            catalog_source,
        })
    }

    pub fn orchestrator(&self) -> Orchestrator {
        Orchestrator::from_config(self.catalog.clone(), &self.config.scoring)
    }
}

/// Parse `"1,2,3,…"` into answers numbered by position in the question
/// bank.
pub fn parse_answers(raw: &str, catalog: &dyn Catalog) -> Result<Vec<Answer>, String> {
    let values: Vec<&str> = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();

    values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            let value: u8 = v
                .parse()
                .map_err(|_| format!("answer {} is not a number: '{v}'", i + 1))?;
            let question_id = catalog
                .questions()
                .get(i)
                .map(|q| q.id)
                .unwrap_or(i as u32);
            Ok(Answer::new(question_id, value))
        })
        .collect()
}

/// `█████░░░░░` style bar for a 0-100 value.
pub fn bar(value: u8) -> String {
    let filled = (usize::from(value.min(100)) + 5) / 10;
    format!("{}{}", "█".repeat(filled), "░".repeat(10 - filled))
}

pub fn print_traits(traits: &TraitScores) {
    for (key, value) in traits.iter() {
        println!("  {:<22} {} {:>3}", key.display_name(), bar(value), value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_answers_by_position() {
        let catalog = StaticCatalog::builtin().unwrap();
        let answers = parse_answers("4, 3,2 ,1", &catalog).unwrap();
        assert_eq!(answers.len(), 4);
        assert_eq!(answers[0], Answer::new(0, 4));
        assert_eq!(answers[3], Answer::new(3, 1));
    }

    #[test]
    fn parse_answers_rejects_text() {
        let catalog = StaticCatalog::builtin().unwrap();
        let err = parse_answers("1,x,3", &catalog).unwrap_err();
        assert!(err.contains("answer 2"));
    }

    #[test]
    fn out_of_range_values_pass_through_to_validation() {
        let catalog = StaticCatalog::builtin().unwrap();
        let answers = parse_answers("5", &catalog).unwrap();
        assert_eq!(answers[0].value, 5);
    }

    #[test]
    fn bar_width() {
        assert_eq!(bar(0), "░░░░░░░░░░");
        assert_eq!(bar(100), "██████████");
        assert_eq!(bar(75).chars().filter(|c| *c == '█').count(), 8);
    }

    #[test]
    fn catalog_override_wins() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.toml");
        let err = Context::new(AppConfig::default(), Some(path)).err().unwrap();
        assert!(err.to_string().contains("Failed to load catalog"));

        let ctx = Context::new(AppConfig::default(), None).unwrap();
        assert_eq!(ctx.catalog_source, "built-in");
        assert_eq!(ctx.catalog.careers().len(), 48);
    }
}
