//! Closed error taxonomy for the AI collaborator.
//!
//! Callers branch on variants, never on message text. Each variant carries a
//! fixed user-facing sentence so the CLI shows the same wording everywhere.

use thiserror::Error;

/// Everything that can go wrong talking to the hosted model.
#[derive(Debug, Error)]
pub enum CoachError {
    #[error("rate limited by the model API")]
    RateLimited,
    #[error("model API quota exhausted")]
    QuotaExhausted,
    #[error("model API unavailable (server error)")]
    ServerUnavailable,
    #[error("request rejected by safety filters")]
    SafetyRejected,
    #[error("model API authentication failed")]
    AuthFailed,
    #[error("network unreachable: {0}")]
    NetworkUnreachable(String),
    #[error("model returned an empty response")]
    EmptyResponse,
    #[error("chat session not initialized")]
    SessionNotInitialized,
    #[error("model API error ({status}): {detail}")]
    Api { status: u16, detail: String },
}

impl CoachError {
    /// The fixed sentence shown to the user for this category.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::RateLimited => "Traffic limit exceeded. Cooling down systems. Please wait 60s.",
            Self::QuotaExhausted => "Daily capacity spent. Systems resume at next quota window.",
            Self::ServerUnavailable => "Central core maintenance. Brief standby required.",
            Self::SafetyRejected => "Safety protocols engaged. Query rejected.",
            Self::AuthFailed => "Access credentials rejected. Check your API key.",
            Self::NetworkUnreachable(_) => {
                "Network uplinks offline. Check your internet connection."
            }
            Self::EmptyResponse => "Signal received but empty. Please rephrase.",
            Self::SessionNotInitialized => "Neural link unstable. Re-initializing...",
            Self::Api { .. } => "Unknown system failure. Maintain discipline and retry.",
        }
    }

    /// True for failures that warrant one silent session re-initialization.
    pub fn is_session_failure(&self) -> bool {
        matches!(self, Self::SessionNotInitialized)
    }
}
