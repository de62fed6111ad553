//! # CareerFit Core
//!
//! Domain types, traits, and error definitions for the CareerFit aptitude
//! assessment. This crate has **no framework dependencies**: it defines the
//! domain model that all other crates implement against.
//!
//! ## Design Philosophy
//!
//! The two seams are defined as traits here:
//! - [`Catalog`]: read-only reference data (questions, careers, domains)
//! - [`AssessmentProcessor`]: turns answers into a scored result
//!
//! Implementations live in `careerfit-catalog` and `careerfit-scoring`, so
//! the session state machine can be exercised with stubs.

pub mod assessment;
pub mod career;
pub mod catalog;
pub mod error;
pub mod event;
pub mod question;
pub mod trait_scores;

// Re-export key types at crate root for ergonomics
pub use assessment::{AssessmentProcessor, AssessmentResult};
pub use career::{Career, Domain, DomainInfo};
pub use catalog::Catalog;
pub use error::{CatalogError, Error, ProcessingError, Result, ValidationError};
pub use event::{DomainEvent, EventBus};
pub use question::{Answer, AnswerOption, AnswerSet, Question, MAX_ANSWER_VALUE, MIN_ANSWER_VALUE};
pub use trait_scores::{TraitDefinition, TraitKey, TraitScores, MAX_TRAIT_SCORE};
