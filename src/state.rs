use std::path::PathBuf;

use crate::rate_limit::RateLimiter;
use crate::upstream::CompletionClient;

// app's shared state
pub struct AppState {
    pub limiter: RateLimiter,
    pub upstream: CompletionClient,
    pub asset_root: PathBuf, // directory served to GET requests
}
