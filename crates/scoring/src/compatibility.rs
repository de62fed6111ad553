//! Distance-based compatibility between a user's traits and a career's
//! requirement vector.

use careerfit_core::{TraitKey, TraitScores};

/// Per-trait closeness: `max(0, 100 - |user - required|)`.
pub fn trait_match(user: u8, required: u8) -> u8 {
    100u8.saturating_sub(user.abs_diff(required))
}

/// Closeness for every trait, in canonical order.
pub fn trait_matches(user: &TraitScores, required: &TraitScores) -> TraitScores {
    TraitScores::from_fn(|k| u32::from(trait_match(user[k], required[k])))
}

/// Overall compatibility: the rounded mean of the six per-trait matches.
///
/// Symmetric in its arguments and always in `0..=100`. Rounding means a
/// mean of 99.5 or more already reports 100.
pub fn compatibility_score(user: &TraitScores, required: &TraitScores) -> u8 {
    let total = match_total(user, required);
    let n = TraitKey::ALL.len() as u32;
    ((2 * total + n) / (2 * n)) as u8
}

/// Sum of the per-trait matches (0..=600). Used for ranking without
/// rounding loss.
pub(crate) fn match_total(user: &TraitScores, required: &TraitScores) -> u32 {
    TraitKey::ALL
        .into_iter()
        .map(|k| u32::from(trait_match(user[k], required[k])))
        .sum()
}
