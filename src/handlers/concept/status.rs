use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Json, Path, State};
use serde::{Deserialize, Serialize};

use crate::app::AppState;
use crate::middleware::{ApiResponse, ApiResult};

use super::utils::{json_body, path_param};

#[derive(Debug, Deserialize)]
pub struct StatusBody {
    pub status: String,
}

#[derive(Debug, Serialize)]
pub struct StatusUpdated {
    pub message: String,
    pub id: i64,
}

/// PUT /update-status/:name - overwrite the stored status of the first concept
/// having a term that contains `name`
pub async fn put(
    State(state): State<AppState>,
    name: Result<Path<String>, PathRejection>,
    body: Result<Json<StatusBody>, JsonRejection>,
) -> ApiResult<StatusUpdated> {
    let name = path_param(name)?;
    let body = json_body(body)?;

    let id = state.concepts.update_status_by_name(&name, &body.status).await?;
    Ok(ApiResponse::success(StatusUpdated {
        message: "Status updated successfully".to_string(),
        id,
    }))
}
