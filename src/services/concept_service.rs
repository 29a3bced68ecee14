use crate::concept::{rules, Concept, ConceptError, ConceptStatus, NewConcept};
use crate::database::manager::DatabaseError;
use crate::database::ConceptRepository;

/// The concept store: CRUD over concepts plus the resolution rules.
#[derive(Clone)]
pub struct ConceptService {
    repository: ConceptRepository,
}

impl ConceptService {
    pub fn new(repository: ConceptRepository) -> Self {
        Self { repository }
    }

    /// List every concept in storage order with derived status
    pub async fn list_concepts(&self) -> Result<Vec<Concept>, ConceptError> {
        let rows = self.repository.select_any().await?;
        tracing::debug!("Listed {} concepts", rows.len());
        Ok(rows.into_iter().map(Concept::from).collect())
    }

    /// Fetch one concept with derived status
    pub async fn get_concept(&self, id: i64) -> Result<Concept, ConceptError> {
        let row = self.load(id).await?;
        Ok(row.into_concept())
    }

    /// Create a concept. The declared status is persisted as given and the
    /// declared preferred term is not checked against the terms.
    pub async fn create_concept(&self, new: NewConcept) -> Result<Concept, ConceptError> {
        rules::validate_description(&new.description)?;
        let terms = rules::normalize_terms(new.terms)?;
        let preferred_term = rules::normalize_preferred_term(new.preferred_term.as_deref());

        let status = match new.status {
            Some(declared) => declared,
            None => rules::derive_status(preferred_term).to_string(),
        };

        let row = self
            .repository
            .insert(&new.description, &terms, preferred_term, &status)
            .await?;

        tracing::info!("Created concept {} with {} terms", row.id, terms.len());
        Ok(row.into_concept())
    }

    /// Choose the preferred term among the concept's current terms.
    ///
    /// The stored status is rewritten to "resolved" in the same statement.
    pub async fn set_preferred_term(&self, id: i64, candidate: &str) -> Result<(), ConceptError> {
        let row = self.load(id).await?;
        if let Err(e) = rules::validate_preferred_term(row.terms(), candidate) {
            tracing::warn!("Rejected preferred term '{}' for concept {}", candidate, id);
            return Err(e);
        }

        let changed = self
            .repository
            .update_preferred_term(id, candidate, ConceptStatus::RESOLVED)
            .await?;
        if changed == 0 {
            // Terms were replaced between the read and the write
            return Err(ConceptError::not_one_of_terms(candidate));
        }

        tracing::info!("Concept {} resolved with preferred term '{}'", id, candidate);
        Ok(())
    }

    /// Replace the term list wholesale. The preferred term is left as is and
    /// may no longer be among the terms afterwards.
    pub async fn update_terms(&self, id: i64, terms: Vec<String>) -> Result<Vec<String>, ConceptError> {
        let terms = rules::normalize_terms(terms)?;
        let changed = self.repository.update_terms(id, &terms).await?;
        if changed == 0 {
            return Err(ConceptError::concept_not_found(id));
        }

        tracing::info!("Concept {} now has {} terms", id, terms.len());
        Ok(terms)
    }

    /// Remove one term from a concept, returning the remaining terms
    pub async fn remove_term(&self, id: i64, term: &str) -> Result<Vec<String>, ConceptError> {
        let row = self.load(id).await?;
        let remaining = rules::remove_term(row.terms(), id, term)?;

        let changed = self.repository.update_terms(id, &remaining).await?;
        if changed == 0 {
            return Err(ConceptError::concept_not_found(id));
        }

        tracing::info!("Removed term '{}' from concept {}", term, id);
        Ok(remaining)
    }

    /// Overwrite the stored status of the first concept whose terms contain
    /// `name` as a substring. Returns the id of the concept that was updated.
    pub async fn update_status_by_name(&self, name: &str, status: &str) -> Result<i64, ConceptError> {
        if name.is_empty() {
            return Err(ConceptError::InvalidArgument("Name must not be empty".to_string()));
        }

        let id = self
            .repository
            .update_status_by_term_substring(name, status)
            .await?
            .ok_or_else(|| ConceptError::no_term_match(name))?;

        tracing::info!("Concept {} status set to '{}' via name '{}'", id, status, name);
        Ok(id)
    }

    async fn load(&self, id: i64) -> Result<crate::database::models::ConceptRow, ConceptError> {
        match self.repository.select_404(id).await {
            Ok(row) => Ok(row),
            Err(DatabaseError::NotFound(_)) => Err(ConceptError::concept_not_found(id)),
            Err(other) => Err(other.into()),
        }
    }
}
