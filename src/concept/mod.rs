//! Concepts: terminology entries with synonym terms and a resolution status.

pub mod error;
pub mod rules;

use serde::{Deserialize, Serialize};
use std::fmt;

pub use error::ConceptError;

/// Resolution status as derived from the preferred term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConceptStatus {
    #[serde(rename = "resolved")]
    Resolved,
    #[serde(rename = "not resolved")]
    NotResolved,
}

impl ConceptStatus {
    pub const RESOLVED: &'static str = "resolved";
    pub const NOT_RESOLVED: &'static str = "not resolved";

    pub fn as_str(&self) -> &'static str {
        match self {
            ConceptStatus::Resolved => Self::RESOLVED,
            ConceptStatus::NotResolved => Self::NOT_RESOLVED,
        }
    }
}

impl fmt::Display for ConceptStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A concept as returned to callers. `status` is always the derived status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Concept {
    pub id: i64,
    pub description: String,
    pub terms: Vec<String>,
    pub preferred_term: Option<String>,
    pub status: String,
}

/// Input for creating a concept. A declared `status` is stored exactly as given;
/// when omitted the derived status is stored instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewConcept {
    pub description: String,
    pub terms: Vec<String>,
    #[serde(default)]
    pub preferred_term: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}
