use std::path::PathBuf;

use clap::Parser;

// CLI argument structure
#[derive(Parser, Debug, Clone)]
#[command(name = "workout-gateway")]
#[command(about = "Workout program generator backed by a chat-completion API")]
pub struct Args {
    // Port to run the server on
    #[arg(short, long, default_value_t = 3000)]
    pub port: u16,

    // Directory served to GET requests
    #[arg(long, default_value = "client")]
    pub asset_root: PathBuf,

    // Base URL of the completion API
    #[arg(long, default_value = "https://api.openai.com")]
    pub upstream_url: String,

    // Model requested from the completion API
    #[arg(short, long, default_value = "gpt-3.5-turbo")]
    pub model: String,

    // Max tokens per generated program
    #[arg(long, default_value_t = 2000)]
    pub max_tokens: u32,

    // Rate limit max requests per window
    #[arg(long, default_value_t = 10)]
    pub rate_limit: usize,

    // Rate limit window in seconds
    #[arg(long, default_value_t = 600)]
    pub rate_window: u64,

    // Upstream request timeout in seconds
    #[arg(long, default_value_t = 60)]
    pub upstream_timeout: u64,
}
