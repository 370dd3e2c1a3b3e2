//! Gemini `generateContent` REST adapter.
//!
//! Stateless HTTP binding: the one-shot plan call sends a single user turn,
//! the chat path replays the full history each call. HTTP and body-level
//! failures are folded into the closed [`CoachError`] taxonomy here so no
//! caller ever inspects status codes or response text.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::{json, Value};
use std::time::Duration;

use crate::coach::{plan_prompt, profile_context, CoachBackend, CoachError, Turn, SYSTEM_INSTRUCTION};
use crate::config::AiConfig;
use crate::engine::types::UserProfile;

const MAX_ERROR_DETAIL: usize = 320;

pub struct GeminiClient {
    http: Client,
    endpoint: String,
    model: String,
    api_key: String,
    temperature: f64,
}

impl GeminiClient {
    pub fn new(config: &AiConfig, api_key: &str) -> anyhow::Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            http,
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            api_key: api_key.to_string(),
            temperature: config.temperature,
        })
    }

    fn url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.endpoint, self.model, self.api_key
        )
    }

    async fn generate(
        &self,
        system_instruction: &str,
        contents: Value,
    ) -> Result<String, CoachError> {
        let payload = json!({
            "contents": contents,
            "systemInstruction": { "parts": [ { "text": system_instruction } ] },
            "generationConfig": { "temperature": self.temperature },
        });

        let response = self
            .http
            .post(self.url())
            .json(&payload)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(status_error(status.as_u16(), &body));
        }

        let body: GenerateResponse = response.json().await.map_err(|e| CoachError::Api {
            status: status.as_u16(),
            detail: format!("invalid response body: {e}"),
        })?;

        extract_text(body)
    }
}

#[async_trait]
impl CoachBackend for GeminiClient {
    async fn generate_plan(&self, profile: &UserProfile) -> Result<String, CoachError> {
        let contents = json!([ { "role": "user", "parts": [ { "text": plan_prompt(profile) } ] } ]);
        let system = format!("{SYSTEM_INSTRUCTION}\n{}", profile_context(profile));
        self.generate(&system, contents).await
    }

    async fn converse(
        &self,
        system_instruction: &str,
        history: &[Turn],
    ) -> Result<String, CoachError> {
        let contents: Vec<Value> = history
            .iter()
            .map(|turn| {
                json!({ "role": turn.role.as_str(), "parts": [ { "text": turn.text } ] })
            })
            .collect();
        self.generate(system_instruction, Value::Array(contents)).await
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<CandidateContent>,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

fn transport_error(err: reqwest::Error) -> CoachError {
    if err.is_timeout() {
        CoachError::NetworkUnreachable("request timed out".into())
    } else {
        CoachError::NetworkUnreachable(err.to_string())
    }
}

/// Map a non-2xx HTTP status (plus the error body) to a category.
fn status_error(status: u16, body: &str) -> CoachError {
    match status {
        401 | 403 => CoachError::AuthFailed,
        429 => {
            if body.contains("RESOURCE_EXHAUSTED") || body.to_lowercase().contains("quota") {
                CoachError::QuotaExhausted
            } else {
                CoachError::RateLimited
            }
        }
        500..=599 => CoachError::ServerUnavailable,
        _ => CoachError::Api {
            status,
            detail: truncate(body, MAX_ERROR_DETAIL),
        },
    }
}

/// Pull the reply text out of a successful response, surfacing safety blocks
/// and empty replies as their own categories.
fn extract_text(body: GenerateResponse) -> Result<String, CoachError> {
    if let Some(feedback) = &body.prompt_feedback {
        if feedback.block_reason.is_some() {
            return Err(CoachError::SafetyRejected);
        }
    }

    let candidate = body.candidates.into_iter().next().ok_or(CoachError::EmptyResponse)?;

    if candidate.finish_reason.as_deref() == Some("SAFETY") {
        return Err(CoachError::SafetyRejected);
    }

    let text = candidate
        .content
        .map(|c| {
            c.parts
                .into_iter()
                .filter_map(|p| p.text)
                .collect::<Vec<_>>()
                .join("\n")
        })
        .unwrap_or_default();

    let text = text.trim().to_string();
    if text.is_empty() {
        return Err(CoachError::EmptyResponse);
    }
    Ok(text)
}

fn truncate(s: &str, max: usize) -> String {
    if s.len() <= max {
        s.to_string()
    } else {
        let mut end = max;
        while !s.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}…", &s[..end])
    }
}
