use thiserror::Error;

use crate::database::manager::DatabaseError;

/// Failures of the concept resolution workflow
#[derive(Debug, Error)]
pub enum ConceptError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    InvalidArgument(String),

    #[error(transparent)]
    Database(#[from] DatabaseError),
}

impl ConceptError {
    pub fn concept_not_found(id: i64) -> Self {
        ConceptError::NotFound(format!("Concept {} not found", id))
    }

    pub fn no_term_match(name: &str) -> Self {
        ConceptError::NotFound(format!("No concept has a term containing '{}'", name))
    }

    pub fn term_not_found(id: i64, term: &str) -> Self {
        ConceptError::NotFound(format!("Term '{}' not found in concept {}", term, id))
    }

    pub fn not_one_of_terms(term: &str) -> Self {
        ConceptError::InvalidArgument(format!(
            "Preferred term '{}' must be one of the terms",
            term
        ))
    }
}
