mod assets;
mod generate;
mod health;
mod metrics;

pub use assets::{method_not_allowed, static_handler};
pub use generate::{generate_handler, rate_limit};
pub use health::health_handler;
pub use metrics::metrics_handler;
