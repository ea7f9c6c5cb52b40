use std::sync::Arc;
use std::time::Duration;

use clap::Parser;

use workout_gateway::config::Args;
use workout_gateway::rate_limit::RateLimiter;
use workout_gateway::state::AppState;
use workout_gateway::upstream::CompletionClient;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    // the gateway is useless without a credential, refuse to start
    let api_key = match std::env::var("OPENAI_API") {
        Ok(key) if !key.is_empty() => key,
        _ => {
            tracing::error!("OPENAI_API is not set");
            std::process::exit(1);
        }
    };

    let state = Arc::new(AppState {
        limiter: RateLimiter::new(args.rate_limit, Duration::from_secs(args.rate_window)),
        upstream: CompletionClient::new(
            args.upstream_url.clone(),
            api_key,
            args.model.clone(),
            args.max_tokens,
            Duration::from_secs(args.upstream_timeout),
        ),
        asset_root: args.asset_root.clone(),
    });

    let app = workout_gateway::app(state);

    let addr = format!("0.0.0.0:{}", args.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind port");

    tracing::info!("Gateway running on http://localhost:{}", args.port);
    tracing::info!("Serving assets from {}", args.asset_root.display());
    tracing::info!(
        "Rate limit: {} requests per {} seconds",
        args.rate_limit,
        args.rate_window
    );
    axum::serve(listener, app).await.expect("server error");
}
