//! Resolution rules for concepts.
//!
//! A concept is resolved once a preferred term has been chosen among its terms.
//! The rules here are pure; persistence lives in the repository and the
//! service decides when each rule applies.

use super::{ConceptError, ConceptStatus};

/// Status implied by the presence of a non-empty preferred term.
pub fn derive_status(preferred_term: Option<&str>) -> ConceptStatus {
    match normalize_preferred_term(preferred_term) {
        Some(_) => ConceptStatus::Resolved,
        None => ConceptStatus::NotResolved,
    }
}

/// Empty preferred terms are treated as absent.
pub fn normalize_preferred_term(preferred_term: Option<&str>) -> Option<&str> {
    preferred_term.filter(|t| !t.is_empty())
}

/// Collapse duplicates to their first occurrence, keeping order.
///
/// Rejects lists that end up empty; a concept always carries at least one term.
pub fn normalize_terms(terms: Vec<String>) -> Result<Vec<String>, ConceptError> {
    let mut unique: Vec<String> = Vec::with_capacity(terms.len());
    for term in terms {
        if term.is_empty() {
            continue;
        }
        if !unique.contains(&term) {
            unique.push(term);
        }
    }

    if unique.is_empty() {
        return Err(ConceptError::InvalidArgument(
            "A concept must have at least one term".to_string(),
        ));
    }
    Ok(unique)
}

pub fn validate_description(description: &str) -> Result<(), ConceptError> {
    if description.trim().is_empty() {
        return Err(ConceptError::InvalidArgument(
            "Description must not be empty".to_string(),
        ));
    }
    Ok(())
}

/// A preferred term must be one of the concept's current terms (exact match).
pub fn validate_preferred_term(terms: &[String], candidate: &str) -> Result<(), ConceptError> {
    if candidate.is_empty() || !terms.iter().any(|t| t == candidate) {
        return Err(ConceptError::not_one_of_terms(candidate));
    }
    Ok(())
}

/// Remove a single term, keeping at least one behind.
pub fn remove_term(terms: &[String], id: i64, term: &str) -> Result<Vec<String>, ConceptError> {
    if !terms.iter().any(|t| t == term) {
        return Err(ConceptError::term_not_found(id, term));
    }
    let remaining: Vec<String> = terms.iter().filter(|t| *t != term).cloned().collect();
    if remaining.is_empty() {
        return Err(ConceptError::InvalidArgument(format!(
            "Cannot remove '{}': a concept must have at least one term",
            term
        )));
    }
    Ok(remaining)
}
