use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Json, Path, State};
use serde::{Deserialize, Serialize};

use crate::app::AppState;
use crate::concept::Concept;
use crate::middleware::{ApiResponse, ApiResult, Message};

use super::utils::{json_body, path_param};

#[derive(Debug, Deserialize)]
pub struct PreferredTermBody {
    pub preferred_term: String,
}

#[derive(Debug, Deserialize)]
pub struct TermsBody {
    pub terms: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct TermsUpdated {
    pub message: String,
    pub terms: Vec<String>,
}

/// GET /concept/:id - Get a single concept by ID
pub async fn get(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> ApiResult<Concept> {
    let id = path_param(id)?;
    let concept = state.concepts.get_concept(id).await?;
    Ok(ApiResponse::success(concept))
}

/// PUT /concept/:id/preferred-term - choose the preferred term among the concept's terms
pub async fn preferred_term_put(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    body: Result<Json<PreferredTermBody>, JsonRejection>,
) -> ApiResult<Message> {
    let id = path_param(id)?;
    let body = json_body(body)?;

    state.concepts.set_preferred_term(id, &body.preferred_term).await?;
    Ok(ApiResponse::success(Message::new("Preferred term updated successfully")))
}

/// PUT /concept/:id/update-terms - replace the concept's terms
pub async fn terms_put(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    body: Result<Json<TermsBody>, JsonRejection>,
) -> ApiResult<TermsUpdated> {
    let id = path_param(id)?;
    let body = json_body(body)?;

    let terms = state.concepts.update_terms(id, body.terms).await?;
    Ok(ApiResponse::success(TermsUpdated {
        message: "Terms updated successfully".to_string(),
        terms,
    }))
}

/// DELETE /concept/:id/terms/:term - remove a single term
pub async fn term_delete(
    State(state): State<AppState>,
    params: Result<Path<(i64, String)>, PathRejection>,
) -> ApiResult<TermsUpdated> {
    let (id, term) = path_param(params)?;

    let terms = state.concepts.remove_term(id, &term).await?;
    Ok(ApiResponse::success(TermsUpdated {
        message: format!("Term '{}' removed", term),
        terms,
    }))
}
