use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::{json, Value};

use crate::app::AppState;

/// GET / - service information
pub async fn root() -> Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    Json(json!({
        "success": true,
        "data": {
            "name": "Terminology Hub",
            "version": version,
            "description": "Concept and synonym curation API",
            "endpoints": {
                "home": "GET /",
                "health": "GET /health",
                "list": "GET /all-concepts",
                "show": "GET /concept/:id",
                "create": "POST /concepts",
                "preferred_term": "PUT /concept/:id/preferred-term",
                "update_terms": "PUT /concept/:id/update-terms",
                "remove_term": "DELETE /concept/:id/terms/:term",
                "update_status": "PUT /update-status/:name",
            }
        }
    }))
}

/// GET /health - pings the database pool
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let now = chrono::Utc::now();

    match state.database.health_check().await {
        Ok(_) => (
            StatusCode::OK,
            Json(json!({
                "success": true,
                "data": {
                    "status": "ok",
                    "timestamp": now,
                    "database": "ok"
                }
            })),
        ),
        Err(e) => {
            tracing::error!("Health check failed: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({
                    "success": false,
                    "error": "database unavailable",
                    "data": {
                        "status": "degraded",
                        "timestamp": now,
                        "database_error": e.to_string()
                    }
                })),
            )
        }
    }
}
