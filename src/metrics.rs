use lazy_static::lazy_static;
use prometheus::{Counter, Histogram, register_counter, register_histogram};

lazy_static! {
    pub static ref REQUEST_TOTAL: Counter = register_counter!(
        "workout_requests_total",
        "Total generation requests received"
    )
    .unwrap();
    pub static ref RATE_LIMITED_TOTAL: Counter = register_counter!(
        "workout_rate_limited_total",
        "Generation requests rejected by the rate limiter"
    )
    .unwrap();
    pub static ref UPSTREAM_FAILURES: Counter = register_counter!(
        "workout_upstream_failures_total",
        "Failed calls to the completion API"
    )
    .unwrap();
    pub static ref TOKENS_USED: Counter = register_counter!(
        "workout_tokens_used_total",
        "Tokens consumed by the completion API"
    )
    .unwrap();
    pub static ref REQUEST_LATENCY: Histogram = register_histogram!(
        "workout_request_latency_seconds",
        "Generation request latency in seconds"
    )
    .unwrap();
}
