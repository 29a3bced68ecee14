use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;

use crate::concept::{rules, Concept};

/// A row of the `concepts` table. `status` is the stored column, which may
/// differ from the status derived on read.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ConceptRow {
    pub id: i64,
    pub description: String,
    pub terms: Json<Vec<String>>,
    pub preferred_term: Option<String>,
    pub status: String,
}

impl ConceptRow {
    pub fn terms(&self) -> &[String] {
        &self.terms.0
    }

    /// Read-path view: status is recomputed from the preferred term.
    pub fn into_concept(self) -> Concept {
        let status = rules::derive_status(self.preferred_term.as_deref()).to_string();
        Concept {
            id: self.id,
            description: self.description,
            terms: self.terms.0,
            preferred_term: self.preferred_term,
            status,
        }
    }
}

impl From<ConceptRow> for Concept {
    fn from(row: ConceptRow) -> Self {
        row.into_concept()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(preferred_term: Option<&str>, status: &str) -> ConceptRow {
        ConceptRow {
            id: 7,
            description: "desc".to_string(),
            terms: Json(vec!["a".to_string(), "b".to_string()]),
            preferred_term: preferred_term.map(str::to_string),
            status: status.to_string(),
        }
    }

    #[test]
    fn read_path_ignores_stored_status() {
        let concept = row(None, "resolved").into_concept();
        assert_eq!(concept.status, "not resolved");

        let concept = row(Some("a"), "whatever").into_concept();
        assert_eq!(concept.status, "resolved");
        assert_eq!(concept.terms, vec!["a".to_string(), "b".to_string()]);
    }
}
