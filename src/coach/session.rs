//! Owned chat session.
//!
//! The session is an explicit value held by the chat command, not an ambient
//! module-level handle. History lives client-side and is replayed to the
//! backend on every send; a send before [`CoachSession::start`] fails with
//! [`CoachError::SessionNotInitialized`].

use crate::coach::{profile_context, CoachBackend, CoachError, Role, Turn, SYSTEM_INSTRUCTION};
use crate::engine::types::UserProfile;

struct ActiveSession {
    system_instruction: String,
    history: Vec<Turn>,
}

/// Multi-turn conversation handle over a [`CoachBackend`].
pub struct CoachSession<B: CoachBackend> {
    backend: B,
    active: Option<ActiveSession>,
}

impl<B: CoachBackend> CoachSession<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            active: None,
        }
    }

    /// Begin (or re-begin) a conversation seeded with the user's profile
    /// context. Any prior history is discarded.
    pub fn start(&mut self, profile: &UserProfile) {
        self.active = Some(ActiveSession {
            system_instruction: format!("{SYSTEM_INSTRUCTION}\n{}", profile_context(profile)),
            history: Vec::new(),
        });
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Number of turns exchanged so far (user and model).
    pub fn turn_count(&self) -> usize {
        self.active.as_ref().map_or(0, |s| s.history.len())
    }

    /// Send one user message and return the model's reply.
    ///
    /// The failed user turn is rolled back on error so a later retry does not
    /// replay it twice.
    pub async fn send(&mut self, message: &str) -> Result<String, CoachError> {
        let session = self
            .active
            .as_mut()
            .ok_or(CoachError::SessionNotInitialized)?;

        session.history.push(Turn {
            role: Role::User,
            text: message.to_string(),
        });

        match self
            .backend
            .converse(&session.system_instruction, &session.history)
            .await
        {
            Ok(reply) => {
                session.history.push(Turn {
                    role: Role::Model,
                    text: reply.clone(),
                });
                Ok(reply)
            }
            Err(err) => {
                session.history.pop();
                Err(err)
            }
        }
    }
}
