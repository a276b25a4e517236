//! OpenAI chat-completions backend for meal advice.

use std::time::Duration;

use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::advice::AdviceService;
use crate::error::{MealError, Result};

/// Default chat-completions endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1/chat/completions";

/// Sampling parameters for advice requests.
#[derive(Debug, Clone)]
pub struct AdviceParams {
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
}

impl Default for AdviceParams {
    fn default() -> Self {
        Self {
            model: "gpt-4".to_string(),
            temperature: 0.7,
            max_tokens: 300,
        }
    }
}

/// Blocking OpenAI client.
pub struct OpenAiClient {
    client: Client,
    base_url: String,
    api_key: String,
    params: AdviceParams,
}

impl OpenAiClient {
    pub fn new(
        api_key: String,
        base_url: Option<String>,
        params: AdviceParams,
        timeout: Duration,
    ) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            api_key,
            params,
        })
    }

    fn request_body<'a>(&'a self, prompt: &'a str) -> ChatRequest<'a> {
        ChatRequest {
            model: &self.params.model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            temperature: self.params.temperature,
            max_tokens: self.params.max_tokens,
        }
    }
}

impl AdviceService for OpenAiClient {
    fn generate(&self, prompt: &str) -> Result<String> {
        debug!(
            model = %self.params.model,
            max_tokens = self.params.max_tokens,
            temperature = self.params.temperature,
            "Requesting meal advice"
        );

        let response = self
            .client
            .post(&self.base_url)
            .bearer_auth(&self.api_key)
            .json(&self.request_body(prompt))
            .send()?;

        let status = response.status();
        let body = response.text()?;
        if !status.is_success() {
            return Err(MealError::AdviceUnavailable(format!(
                "provider returned {}",
                status
            )));
        }

        parse_completion(&body)
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

/// Pull the first choice's text out of a chat-completions body.
pub fn parse_completion(body: &str) -> Result<String> {
    let response: ChatResponse = serde_json::from_str(body)
        .map_err(|e| MealError::AdviceUnavailable(format!("malformed response: {}", e)))?;

    let content = response
        .choices
        .into_iter()
        .next()
        .and_then(|c| c.message.content)
        .ok_or_else(|| MealError::AdviceUnavailable("response missing content".to_string()))?;

    Ok(content.trim().to_string())
}
