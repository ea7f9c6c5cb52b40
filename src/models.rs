use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use crate::metrics::{RATE_LIMITED_TOTAL, UPSTREAM_FAILURES};
use crate::upstream::UpstreamError;

// Workout form payload. Field names are fixed by the browser client; every
// field is free text and may be empty or missing entirely.
#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct WorkoutRequest {
    pub primary_goal_text: String,
    pub equipment_text: String,
    pub days_text: String,
    pub experience_text: String,
    pub time_text: String,
    pub information_form_text: String,
}

// Everything that can go wrong while producing a workout. Full detail is
// logged server-side; the client only ever sees the fixed generic bodies.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("rate limit exceeded")]
    RateLimited,
    #[error("malformed request body: {0}")]
    MalformedInput(#[from] serde_json::Error),
    #[error(transparent)]
    Upstream(#[from] UpstreamError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            ApiError::RateLimited => {
                RATE_LIMITED_TOTAL.inc();
                tracing::warn!("too many requests in window, rejecting");
                (StatusCode::TOO_MANY_REQUESTS, "<h3>Rate Limit Exceeded</h3>")
            }
            ApiError::MalformedInput(err) => {
                tracing::warn!(error = %err, "rejecting malformed request body");
                (StatusCode::BAD_REQUEST, "Malformed Request")
            }
            ApiError::Upstream(err) => {
                UPSTREAM_FAILURES.inc();
                tracing::error!(error = %err, "workout generation failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
            }
        };
        (status, Json(body)).into_response()
    }
}
