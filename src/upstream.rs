use std::time::Duration;

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

use crate::metrics::TOKENS_USED;
use crate::models::WorkoutRequest;
use crate::sanitize::sanitize;

const PERSONA_PROMPT: &str = "you are a gym professional who creates workout \
    programs based off information given by the user.";

const FORMAT_PROMPT: &str = "Please format your response in <html> without an \
    <html> or <body> tag. The titles for each day should be in <h2> tags, and \
    the workouts under each day should be in a <ul> with <li> elements for \
    each workout. Any notes should be at the end with <p> tags. Do not add a \
    disclaimer.";

#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    #[error("completion request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("completion API returned status {0}")]
    Status(StatusCode),
    #[error("completion API returned no choices")]
    EmptyResponse,
}

// Chat-completion wire format, request side
#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    messages: Vec<ChatMessage>,
}

#[derive(Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

// Chat-completion wire format, response side
#[derive(Deserialize)]
struct ChatCompletion {
    choices: Vec<Choice>,
    usage: Usage,
}

#[derive(Deserialize)]
struct Choice {
    message: AssistantMessage,
}

#[derive(Deserialize)]
struct AssistantMessage {
    content: String,
}

#[derive(Deserialize)]
struct Usage {
    total_tokens: u64,
}

/// Wraps the single call this service makes to the completion API. Every
/// failure mode (connect error, timeout, bad status, undecodable body, empty
/// choice list) comes back as an [`UpstreamError`]; nothing panics past here.
pub struct CompletionClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
    max_tokens: u32,
}

impl CompletionClient {
    pub fn new(
        base_url: String,
        api_key: String,
        model: String,
        max_tokens: u32,
        timeout: Duration,
    ) -> Self {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .expect("failed to build http client");
        Self {
            http,
            base_url,
            api_key,
            model,
            max_tokens,
        }
    }

    pub async fn generate(&self, request: &WorkoutRequest) -> Result<String, UpstreamError> {
        let body = ChatRequest {
            model: &self.model,
            max_tokens: self.max_tokens,
            messages: build_messages(request),
        };

        let response = self
            .http
            .post(format!(
                "{}/v1/chat/completions",
                self.base_url.trim_end_matches('/')
            ))
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::Status(status));
        }

        let completion: ChatCompletion = response.json().await?;
        tracing::info!(tokens = completion.usage.total_tokens, "workout generated");
        TOKENS_USED.inc_by(completion.usage.total_tokens as f64);

        let choice = completion
            .choices
            .into_iter()
            .next()
            .ok_or(UpstreamError::EmptyResponse)?;
        Ok(choice.message.content.trim().to_string())
    }
}

// Fixed three-part prompt: persona, output shape, then the user's form fields.
// Fields pass through sanitize() so markup and control characters never reach
// the prompt.
fn build_messages(request: &WorkoutRequest) -> Vec<ChatMessage> {
    let details = format!(
        "Create a workout program using some of the following information.\n\
         Primary goal: {},\n\
         Equipment available to use: {},\n\
         Days per week: {},\n\
         Current experience level: {},\n\
         Workout duration preference: {},\n\
         Extra information to help create a personalized workout program: {}",
        sanitize(&request.primary_goal_text),
        sanitize(&request.equipment_text),
        sanitize(&request.days_text),
        sanitize(&request.experience_text),
        sanitize(&request.time_text),
        sanitize(&request.information_form_text),
    );

    vec![
        ChatMessage {
            role: "system",
            content: PERSONA_PROMPT.to_string(),
        },
        ChatMessage {
            role: "system",
            content: FORMAT_PROMPT.to_string(),
        },
        ChatMessage {
            role: "user",
            content: details,
        },
    ]
}
