//! # CareerFit Scoring
//!
//! The assessment pipeline and its interpretation:
//!
//! - [`validate_answers`]: reject incomplete or malformed answer sets
//! - [`aggregate_traits`]: answers → six 0–100 trait scores
//! - [`compatibility_score`]: distance-based match against a career
//! - [`Orchestrator`]: the [`careerfit_core::AssessmentProcessor`] tying the three together
//! - [`trait_insights`], [`Guidance`], [`recommend_careers`]: what the
//!   result means for the user

pub mod aggregate;
pub mod compatibility;
pub mod guidance;
pub mod insight;
pub mod orchestrator;
pub mod recommend;
pub mod validate;

pub use aggregate::aggregate_traits;
pub use compatibility::{compatibility_score, trait_match, trait_matches};
pub use guidance::Guidance;
pub use insight::{FitBand, GapStatus, TraitInsight, TraitLevel, trait_insights};
pub use orchestrator::Orchestrator;
pub use recommend::{CareerMatch, recommend_careers};
pub use validate::{validate_answer_list, validate_answers};
