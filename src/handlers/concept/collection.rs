use axum::extract::rejection::JsonRejection;
use axum::extract::{Json, State};

use crate::app::AppState;
use crate::concept::{Concept, NewConcept};
use crate::middleware::{ApiResponse, ApiResult};

use super::utils::json_body;

/// GET /all-concepts - every concept, status derived from the preferred term
pub async fn list(State(state): State<AppState>) -> ApiResult<Vec<Concept>> {
    let concepts = state.concepts.list_concepts().await?;
    Ok(ApiResponse::success(concepts))
}

/// POST /concepts - create a concept
///
/// Expected Input:
/// ```json
/// {
///   "description": "string",      // Required, non-empty
///   "terms": ["string"],          // Required, at least one
///   "preferred_term": "string",   // Optional, stored as given
///   "status": "string"            // Optional, stored as given
/// }
/// ```
pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<NewConcept>, JsonRejection>,
) -> ApiResult<Concept> {
    let new = json_body(body)?;
    let concept = state.concepts.create_concept(new).await?;
    Ok(ApiResponse::created(concept))
}
