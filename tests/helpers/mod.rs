#![allow(dead_code)]

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use tempfile::TempDir;

use titan::coach::{CoachBackend, CoachError, Turn};
use titan::engine::types::{DietPreference, NotificationConfig, PrimaryGoal, UserProfile};
use titan::store::Store;

/// Open a store backed by a fresh temp directory. Keep the `TempDir` alive
/// for the lifetime of the test.
pub fn disk_store() -> (TempDir, Store) {
    let dir = TempDir::new().unwrap();
    let store = Store::open(dir.path().join("titan.db")).unwrap();
    (dir, store)
}

/// A typical onboarded profile.
pub fn sample_profile() -> UserProfile {
    UserProfile {
        name: "Arjun".into(),
        age: 29,
        weight_kg: Some(74.0),
        height_cm: Some(178.0),
        diet_preference: DietPreference::Veg,
        primary_goal: PrimaryGoal::FatLoss,
        wake_up_time: "06:00".into(),
        has_consented: true,
        notifications: NotificationConfig::default(),
    }
}

/// What the mock coach should do on each call.
pub enum MockBehavior {
    Reply(String),
    Fail(fn() -> CoachError),
}

/// Counting mock for the AI collaborator.
pub struct MockCoach {
    pub behavior: MockBehavior,
    calls: AtomicUsize,
}

impl MockCoach {
    pub fn replying(text: &str) -> Self {
        Self {
            behavior: MockBehavior::Reply(text.to_string()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing(make: fn() -> CoachError) -> Self {
        Self {
            behavior: MockBehavior::Fail(make),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn answer(&self) -> Result<String, CoachError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.behavior {
            MockBehavior::Reply(text) => Ok(text.clone()),
            MockBehavior::Fail(make) => Err(make()),
        }
    }
}

#[async_trait]
impl CoachBackend for MockCoach {
    async fn generate_plan(&self, _profile: &UserProfile) -> Result<String, CoachError> {
        self.answer()
    }

    async fn converse(
        &self,
        _system_instruction: &str,
        _history: &[Turn],
    ) -> Result<String, CoachError> {
        self.answer()
    }
}
