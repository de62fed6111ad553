//! Rank the whole career library against a user's trait profile.

use crate::compatibility::{compatibility_score, match_total};
use careerfit_core::{Career, Catalog, TraitScores};
use serde::Serialize;

/// One ranked career.
#[derive(Debug, Clone, Serialize)]
pub struct CareerMatch {
    pub career: Career,
    pub score: u8,
}

/// Top `limit` careers by compatibility, best first.
///
/// Ranking uses the unrounded match total so two careers that round to
/// the same score still order correctly. Ties keep catalog order.
pub fn recommend_careers(catalog: &dyn Catalog, user: &TraitScores, limit: usize) -> Vec<CareerMatch> {
    let mut ranked: Vec<(u32, &Career)> = catalog
        .careers()
        .iter()
        .map(|c| (match_total(user, &c.required_traits), c))
        .collect();
    ranked.sort_by(|a, b| b.0.cmp(&a.0));

    ranked
        .into_iter()
        .take(limit)
        .map(|(_, career)| CareerMatch {
            score: compatibility_score(user, &career.required_traits),
            career: career.clone(),
        })
        .collect()
}
