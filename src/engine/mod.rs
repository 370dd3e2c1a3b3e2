//! Core domain: the five engines, daily progress, the per-day brief cache,
//! and the evening check-in.

pub mod brief;
pub mod checkin;
pub mod progress;
pub mod registry;
pub mod types;

/// Load the stored user profile, if onboarding has completed.
pub fn load_profile(store: &crate::store::Store) -> anyhow::Result<Option<types::UserProfile>> {
    store.get_json(crate::store::keys::USER)
}

/// Persist the user profile (onboarding completion or settings change).
pub fn save_profile(
    store: &crate::store::Store,
    profile: &types::UserProfile,
) -> anyhow::Result<()> {
    store.set_json(crate::store::keys::USER, profile)
}
