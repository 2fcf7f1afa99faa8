//! OpenAI-style chat completion backend

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use sakina_config::GeneratorSettings;
use sakina_core::{Error, Generator, Result};
use serde::{Deserialize, Serialize};

use crate::cache::ResponseCache;

/// Generator backed by an OpenAI-style `/chat/completions` endpoint
///
/// Retries transient failures with exponential backoff and serves repeated
/// prompt pairs from a bounded cache.
pub struct ChatApiBackend {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
    model: String,
    temperature: f32,
    max_retries: u32,
    cache: ResponseCache,
    // Outcome of the most recent generation, reported by readiness checks
    last_call_ok: AtomicBool,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: u32,
    temperature: f32,
    frequency_penalty: f32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Deserialize)]
struct ChatResponseMessage {
    content: String,
}

impl ChatApiBackend {
    pub fn new(settings: &GeneratorSettings) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.timeout_seconds))
            .build()
            .map_err(|e| Error::Configuration(format!("http client: {e}")))?;

        Ok(Self {
            client,
            endpoint: settings.endpoint.clone(),
            api_key: settings.api_key.clone(),
            model: settings.model.clone(),
            temperature: settings.temperature,
            max_retries: settings.max_retries,
            cache: ResponseCache::new(settings.cache_capacity),
            last_call_ok: AtomicBool::new(true),
        })
    }

    async fn request_once(
        &self,
        system_prompt: &str,
        user_prompt: &str,
        max_tokens: u32,
    ) -> Result<String> {
        let body = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system_prompt,
                },
                ChatMessage {
                    role: "user",
                    content: user_prompt,
                },
            ],
            max_tokens,
            temperature: self.temperature,
            frequency_penalty: 0.2,
        };

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| Error::GeneratorUnavailable(format!("request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::GeneratorUnavailable(format!(
                "endpoint returned {status}"
            )));
        }

        let parsed: ChatResponse = response
            .json()
            .await
            .map_err(|e| Error::GeneratorUnavailable(format!("malformed response: {e}")))?;

        parsed
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or_else(|| Error::GeneratorUnavailable("response carried no choices".into()))
    }
}

/// Server-side and transport failures are worth retrying; client errors
/// (bad key, bad payload) are not
fn is_retryable(err: &Error) -> bool {
    match err {
        Error::GeneratorUnavailable(msg) => {
            msg.contains("request failed")
                || msg.contains("500")
                || msg.contains("502")
                || msg.contains("503")
                || msg.contains("504")
                || msg.contains("429")
        }
        _ => false,
    }
}

#[async_trait]
impl Generator for ChatApiBackend {
    async fn generate(
        &self,
        system_prompt: &str,
        user_prompt: &str,
        max_tokens: u32,
    ) -> Result<String> {
        let key = ResponseCache::key(system_prompt, user_prompt, max_tokens);
        if let Some(cached) = self.cache.get(key) {
            tracing::debug!("generator cache hit");
            return Ok(cached);
        }

        let mut backoff = Duration::from_millis(500);
        let mut last_err = Error::GeneratorUnavailable("no attempts made".into());

        for attempt in 0..=self.max_retries {
            match self.request_once(system_prompt, user_prompt, max_tokens).await {
                Ok(reply) => {
                    self.last_call_ok.store(true, Ordering::Relaxed);
                    self.cache.insert(key, reply.clone());
                    return Ok(reply);
                }
                Err(err) => {
                    if attempt < self.max_retries && is_retryable(&err) {
                        tracing::warn!(attempt, error = %err, "generator call failed, retrying");
                        tokio::time::sleep(backoff).await;
                        backoff *= 2;
                    }
                    last_err = err;
                }
            }
            if !is_retryable(&last_err) {
                break;
            }
        }

        self.last_call_ok.store(false, Ordering::Relaxed);
        Err(last_err)
    }

    /// Reports the outcome of the most recent generation attempt
    async fn is_available(&self) -> bool {
        self.last_call_ok.load(Ordering::Relaxed)
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retry_classification() {
        assert!(is_retryable(&Error::GeneratorUnavailable(
            "endpoint returned 503 Service Unavailable".into()
        )));
        assert!(is_retryable(&Error::GeneratorUnavailable(
            "request failed: connection refused".into()
        )));
        assert!(!is_retryable(&Error::GeneratorUnavailable(
            "endpoint returned 401 Unauthorized".into()
        )));
        assert!(!is_retryable(&Error::EmptyInput));
    }

    #[test]
    fn test_backend_from_settings() {
        let settings = GeneratorSettings::default();
        let backend = ChatApiBackend::new(&settings).unwrap();
        assert_eq!(backend.model_name(), settings.model);
    }

    #[tokio::test]
    async fn test_fresh_backend_reports_available() {
        let backend = ChatApiBackend::new(&GeneratorSettings::default()).unwrap();
        assert!(backend.is_available().await);
    }
}
