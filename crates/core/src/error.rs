//! Error types for the CareerFit domain.
//!
//! Uses `thiserror` for ergonomic error definitions.
//! Each bounded context has its own error variant.

use crate::trait_scores::TraitKey;
use thiserror::Error;

/// The top-level error type for all CareerFit operations.
#[derive(Debug, Error)]
pub enum Error {
    // --- Answer validation ---
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    // --- Assessment processing ---
    #[error("Processing error: {0}")]
    Processing(#[from] ProcessingError),

    // --- Reference data ---
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

}

/// Result type alias using our Error.
pub type Result<T> = std::result::Result<T, Error>;

// --- Bounded context errors ---

/// An answer set was rejected before any scoring took place.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("expected {expected} answers, got {actual}")]
    WrongCount { expected: usize, actual: usize },

    #[error("answer to question {question_id} has value {value}, expected 1-4")]
    OutOfRange { question_id: u32, value: u8 },

    #[error("answer references unknown question {0}")]
    UnknownQuestion(u32),

    #[error("question {0} has not been answered")]
    MissingQuestion(u32),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProcessingError {
    #[error("no answers for trait {0}")]
    EmptyTraitGroup(TraitKey),

    #[error("career not found: {0}")]
    CareerNotFound(String),

    #[error("assessment processor failed: {0}")]
    Failed(String),
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog at {path}: {reason}")]
    ReadError { path: String, reason: String },

    #[error("Failed to parse catalog: {0}")]
    ParseError(String),

    #[error("Invalid catalog: {0}")]
    Invalid(String),
}
