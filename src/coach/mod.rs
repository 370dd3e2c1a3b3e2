//! The AI coaching layer.
//!
//! Provides the [`CoachBackend`] trait (the seam between Titan and the hosted
//! model), the [`GeminiClient`] HTTP adapter, the owned [`CoachSession`]
//! chat handle, and the closed [`CoachError`] taxonomy.

pub mod error;
pub mod gemini;
pub mod session;

pub use error::CoachError;

use async_trait::async_trait;

use crate::engine::types::UserProfile;

/// The coach persona. Kept fixed so plan and chat output stay in one voice.
pub const SYSTEM_INSTRUCTION: &str = "\
You are Titan, a strict, disciplined, but encouraging AI Health OS.
Your goal is to optimize the user's life across 5 engines: Body, Diet, Mind, Discipline, and Accountability.

KEY GUIDELINES:
1. **Brevity is King**: Keep responses short (under 3 sentences unless asked for a plan). Action-oriented.
2. **Indian Context**: The user is likely Indian. Suggest Indian foods (Dal, Roti, Sabzi, Paneer, Chicken Tikka, Curd/Yogurt). Understand Indian lifestyle constraints.
3. **No Fluff**: Do not use \"I hope this helps\". Just give the order/advice.
4. **Discipline First**: Emphasize consistency over intensity.
5. **Next Step**: Always end with a tiny, immediate next step.

When the user asks for a workout, give a concise list.
When the user asks for diet, give specific Indian meal examples fitting their goal.";

/// One turn of a chat conversation, replayed to the model on every send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub role: Role,
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Model,
}

impl Role {
    /// Wire name used by the generateContent API.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Model => "model",
        }
    }
}

/// Seam to the hosted text-generation service. Mocked in tests.
#[async_trait]
pub trait CoachBackend: Send + Sync {
    /// One-shot daily plan generation for the given profile.
    async fn generate_plan(&self, profile: &UserProfile) -> Result<String, CoachError>;

    /// Multi-turn conversation: the full history is sent each call and the
    /// model's next reply comes back.
    async fn converse(
        &self,
        system_instruction: &str,
        history: &[Turn],
    ) -> Result<String, CoachError>;
}

/// Per-user context appended to the persona when a session starts.
pub fn profile_context(profile: &UserProfile) -> String {
    format!(
        "User Profile:\nName: {}\nGoal: {}\nDiet: {}\nWake Up: {}",
        profile.name, profile.primary_goal, profile.diet_preference, profile.wake_up_time
    )
}

/// Prompt for the one-shot daily plan.
pub fn plan_prompt(profile: &UserProfile) -> String {
    format!(
        "Generate a very brief bulleted daily plan for {} focusing on {}. \
         Include 1 specific Indian meal idea and 1 workout task. Format: Markdown.",
        profile.name, profile.primary_goal
    )
}
