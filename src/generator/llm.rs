//! Chat-completion-backed name generation.

use super::{validate_prompt, NameGenerator, PatternGenerator};
use crate::error::{GenerationErrorKind, NameVerifyError, Result};
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

const SYSTEM_PROMPT: &str = "You are a name generator. Generate exactly ONE name based on the user's prompt. Return ONLY the name, nothing else.";

/// Chat-completion client configuration.
#[derive(Debug, Clone)]
pub struct LlmGeneratorConfig {
    pub api_key: String,
    pub model: String,
    /// Full chat-completions URL
    pub endpoint: String,
    pub timeout: Duration,
    pub temperature: f32,
    pub max_tokens: u32,
}

impl LlmGeneratorConfig {
    /// Defaults for the given API key.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: crate::config::DEFAULT_MODEL.to_string(),
            endpoint: crate::config::DEFAULT_ENDPOINT.to_string(),
            timeout: Duration::from_secs(crate::config::DEFAULT_TIMEOUT_SECS),
            temperature: 0.7,
            max_tokens: 50,
        }
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
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
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatReply,
}

#[derive(Debug, Deserialize)]
struct ChatReply {
    #[serde(default)]
    content: String,
}

/// Asks a chat-completion API for a name, falling back to
/// [`PatternGenerator`] when the request fails.
pub struct LlmGenerator {
    client: Client,
    config: LlmGeneratorConfig,
    fallback: PatternGenerator,
}

fn api_error(msg: impl Into<String>) -> NameVerifyError {
    NameVerifyError::generation("chat completion", GenerationErrorKind::Api(msg.into()))
}

impl LlmGenerator {
    /// Create a generator; fails only if the HTTP client cannot be built.
    pub fn new(config: LlmGeneratorConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()
            .map_err(|e| {
                NameVerifyError::generation(
                    "building HTTP client",
                    GenerationErrorKind::Unavailable(e.to_string()),
                )
            })?;

        Ok(Self {
            client,
            config,
            fallback: PatternGenerator::new(),
        })
    }

    /// Request a name without falling back.
    pub fn request_name(&self, prompt: &str) -> Result<String> {
        let body = ChatRequest {
            model: &self.config.model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
            temperature: self.config.temperature,
            max_tokens: self.config.max_tokens,
        };

        let response = self
            .client
            .post(&self.config.endpoint)
            .bearer_auth(&self.config.api_key)
            .json(&body)
            .send()
            .map_err(|e| api_error(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(api_error(format!("status {}", status.as_u16())));
        }

        let parsed: ChatResponse = response.json().map_err(|e| {
            NameVerifyError::generation(
                "parsing chat completion",
                GenerationErrorKind::InvalidResponse(e.to_string()),
            )
        })?;

        parsed
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content.trim().to_string())
            .filter(|name| !name.is_empty())
            .ok_or_else(|| {
                NameVerifyError::generation(
                    "parsing chat completion",
                    GenerationErrorKind::InvalidResponse("no name in response".to_string()),
                )
            })
    }
}

impl NameGenerator for LlmGenerator {
    fn generate(&self, prompt: &str) -> Result<String> {
        validate_prompt(prompt)?;
        match self.request_name(prompt) {
            Ok(name) => Ok(name),
            Err(e) => {
                tracing::warn!("LLM generation failed, using pattern generation: {e}");
                self.fallback.generate(prompt)
            }
        }
    }

    fn name(&self) -> &'static str {
        "llm"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_body_shape() {
        let body = ChatRequest {
            model: "gpt-3.5-turbo",
            messages: [
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                ChatMessage {
                    role: "user",
                    content: "a slavic name",
                },
            ],
            temperature: 0.7,
            max_tokens: 50,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["messages"][1]["content"], "a slavic name");
        assert_eq!(json["max_tokens"], 50);
    }

    #[test]
    fn test_unreachable_endpoint_falls_back() {
        let mut config = LlmGeneratorConfig::new("test-key");
        config.endpoint = "http://127.0.0.1:9/v1/chat/completions".to_string();
        config.timeout = Duration::from_millis(200);
        let generator = LlmGenerator::new(config).unwrap();

        assert!(generator.request_name("a western name").is_err());
        let name = generator.generate("a western name").unwrap();
        assert_eq!(name.split(' ').count(), 2);
    }
}
