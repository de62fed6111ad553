//! Catalog trait — read-only access to the reference data.
//!
//! The catalog supplies the question bank, the answer scale, trait and
//! domain metadata, and the career library. Scoring and session code only
//! ever read from it. Implementations live in the `careerfit-catalog` crate.

use crate::career::{Career, Domain, DomainInfo};
use crate::question::{AnswerOption, Question};
use crate::trait_scores::{TraitDefinition, TraitKey};

pub trait Catalog: Send + Sync {
    /// All questions in presentation order.
    fn questions(&self) -> &[Question];

    fn answer_options(&self) -> &[AnswerOption];

    fn traits(&self) -> &[TraitDefinition];

    fn domains(&self) -> &[DomainInfo];

    fn careers(&self) -> &[Career];

    fn get_question_by_id(&self, id: u32) -> Option<&Question> {
        self.questions().iter().find(|q| q.id == id)
    }

    fn get_questions_by_trait(&self, key: TraitKey) -> Vec<&Question> {
        self.questions().iter().filter(|q| q.trait_key == key).collect()
    }

    fn get_career_by_id(&self, id: &str) -> Option<&Career> {
        self.careers().iter().find(|c| c.id == id)
    }

    fn get_careers_by_domain(&self, domain: Domain) -> Vec<&Career> {
        self.careers().iter().filter(|c| c.domain == domain).collect()
    }

    /// Case-insensitive substring search over name and description,
    /// optionally restricted to one domain. An empty query matches every
    /// career in scope.
    fn search_careers(&self, query: &str, domain: Option<Domain>) -> Vec<&Career> {
        let needle = query.trim().to_lowercase();
        self.careers()
            .iter()
            .filter(|c| domain.is_none_or(|d| c.domain == d))
            .filter(|c| c.matches_lowercase(&needle))
            .collect()
    }

    fn get_domain_info(&self, domain: Domain) -> Option<&DomainInfo> {
        self.domains().iter().find(|d| d.id == domain)
    }

    fn get_trait_definition(&self, key: TraitKey) -> Option<&TraitDefinition> {
        self.traits().iter().find(|t| t.key == key)
    }
}
