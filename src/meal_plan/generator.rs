use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

use super::prompt::MealPrompt;
use crate::config::MealPlanConfig;

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("meal generator not configured. Set the {env_var} environment variable")]
    NotConfigured { env_var: String },
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("generator returned HTTP {status}: {body}")]
    Status { status: u16, body: String },
    #[error("could not parse generator response: {0}")]
    Malformed(String),
    #[error("no response within {0:?}")]
    TimedOut(Duration),
    #[error("request was cancelled")]
    Cancelled,
    #[error("response contained no valid days")]
    NoValidDays,
}

impl From<serde_json::Error> for GenerationError {
    fn from(err: serde_json::Error) -> Self {
        GenerationError::Malformed(err.to_string())
    }
}

/// External function producing a JSON meal plan for a prompt. Implementations block;
/// the planner runs them on a worker thread under a timeout.
pub trait MealGenerator: Send + Sync {
    /// Label reported as `generated_by` on success.
    fn name(&self) -> String;

    fn generate(&self, prompt: &MealPrompt) -> Result<Value, GenerationError>;
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    kind: &'static str,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
    response_format: ResponseFormat,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatReply,
}

#[derive(Deserialize)]
struct ChatReply {
    #[serde(default)]
    content: Option<String>,
}

/// Client for OpenAI-compatible chat completion endpoints in JSON response mode.
pub struct ChatCompletionsGenerator {
    client: reqwest::blocking::Client,
    endpoint: String,
    model: String,
    api_key_env: String,
    api_key: Option<String>,
    temperature: f32,
    max_tokens: u32,
}

impl ChatCompletionsGenerator {
    /// Reads the API key from the configured environment variable. A missing key is not
    /// an error here; every request then fails as not configured.
    pub fn from_config(config: &MealPlanConfig) -> Result<Self, GenerationError> {
        let api_key = std::env::var(&config.api_key_env)
            .ok()
            .filter(|key| !key.trim().is_empty());
        Self::with_api_key(config, api_key)
    }

    pub fn with_api_key(
        config: &MealPlanConfig,
        api_key: Option<String>,
    ) -> Result<Self, GenerationError> {
        // The worker thread is abandoned on timeout; the client timeout bounds how long it lingers.
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs.max(1)))
            .build()?;
        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            model: config.model.clone(),
            api_key_env: config.api_key_env.clone(),
            api_key,
            temperature: config.temperature,
            max_tokens: config.max_tokens,
        })
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }
}

impl MealGenerator for ChatCompletionsGenerator {
    fn name(&self) -> String {
        format!("{} (chat completions)", self.model)
    }

    fn generate(&self, prompt: &MealPrompt) -> Result<Value, GenerationError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| GenerationError::NotConfigured {
                env_var: self.api_key_env.clone(),
            })?;

        let request = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: &prompt.system,
                },
                ChatMessage {
                    role: "user",
                    content: &prompt.user,
                },
            ],
            temperature: self.temperature,
            max_tokens: self.max_tokens,
            response_format: ResponseFormat {
                kind: "json_object",
            },
        };

        tracing::debug!(endpoint = %self.endpoint, model = %self.model, "requesting meal plan");
        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(api_key)
            .json(&request)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(GenerationError::Status {
                status: status.as_u16(),
                body: body.chars().take(500).collect(),
            });
        }

        let reply: ChatResponse = response.json()?;
        let content = reply
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| GenerationError::Malformed("response has no message content".to_string()))?;
        Ok(serde_json::from_str(&content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_key_fails_without_a_request() {
        let config = MealPlanConfig {
            endpoint: "http://127.0.0.1:9/unreachable".to_string(),
            ..MealPlanConfig::default()
        };
        let generator = ChatCompletionsGenerator::with_api_key(&config, None).unwrap();
        assert!(!generator.is_configured());

        let prompt = MealPrompt {
            system: String::new(),
            user: String::new(),
            days: 1,
        };
        match generator.generate(&prompt) {
            Err(GenerationError::NotConfigured { env_var }) => assert_eq!(env_var, "GROQ_API_KEY"),
            other => panic!("expected NotConfigured, got {:?}", other),
        }
    }

    #[test]
    fn request_body_uses_json_mode() {
        let request = ChatRequest {
            model: "m",
            messages: vec![ChatMessage {
                role: "user",
                content: "hi",
            }],
            temperature: 0.5,
            max_tokens: 10,
            response_format: ResponseFormat {
                kind: "json_object",
            },
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["response_format"]["type"], "json_object");
        assert_eq!(value["messages"][0]["role"], "user");
    }
}
