use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Json, Path};

use crate::error::ApiError;

/// Unwrap a JSON body, turning extractor failures into the API error envelope
pub fn json_body<T>(body: Result<Json<T>, JsonRejection>) -> Result<T, ApiError> {
    match body {
        Ok(Json(value)) => Ok(value),
        Err(rejection) => Err(ApiError::bad_request(rejection.body_text())),
    }
}

/// Unwrap a path parameter, turning extractor failures into the API error envelope
pub fn path_param<T>(param: Result<Path<T>, PathRejection>) -> Result<T, ApiError> {
    match param {
        Ok(Path(value)) => Ok(value),
        Err(rejection) => Err(ApiError::bad_request(rejection.body_text())),
    }
}
