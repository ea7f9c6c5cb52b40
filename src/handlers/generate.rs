use std::sync::Arc;
use std::time::Instant;

use axum::Json;
use axum::body::Bytes;
use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use crate::metrics::{REQUEST_LATENCY, REQUEST_TOTAL};
use crate::models::{ApiError, WorkoutRequest};
use crate::state::AppState;

// Admission runs as route middleware so a rejected request is turned away
// before its body is even read.
pub async fn rate_limit(
    State(state): State<Arc<AppState>>,
    request: Request,
    next: Next,
) -> Response {
    REQUEST_TOTAL.inc();
    if state.limiter.admit() {
        next.run(request).await
    } else {
        ApiError::RateLimited.into_response()
    }
}

pub async fn generate_handler(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<String>, ApiError> {
    let start = Instant::now();

    let request: WorkoutRequest = serde_json::from_slice(&body)?;
    let workout = state.upstream.generate(&request).await?;

    REQUEST_LATENCY.observe(start.elapsed().as_secs_f64());
    Ok(Json(workout))
}
