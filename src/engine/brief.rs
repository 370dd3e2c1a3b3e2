//! Daily brief cache — one AI-generated plan per device-local calendar day.
//!
//! Load order: cache hit (unless forced) → external generation → degraded
//! fallback. The fallback is persisted too, so a forced refresh that fails
//! still overwrites the day's entry and the UI always has a displayable
//! string. There is no automatic retry; a forced reload is the only
//! re-attempt path.

use anyhow::{Context, Result};
use chrono::NaiveDate;

use crate::coach::CoachBackend;
use crate::engine::types::UserProfile;
use crate::store::{keys, Store};

/// Fixed degraded text shown (and cached) when generation fails.
pub const FALLBACK_TEXT: &str = "System standby. AI Core currently unavailable.";

/// Where a brief came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BriefSource {
    /// Served from the store without an external call.
    Cached,
    /// Freshly generated by the model this call.
    Generated,
    /// Generation failed; the fixed fallback text was used.
    Degraded,
}

/// A displayable brief plus its provenance.
#[derive(Debug, Clone)]
pub struct BriefOutcome {
    pub text: String,
    pub source: BriefSource,
}

/// The cached brief for `date`, if one exists.
pub fn cached(store: &Store, date: NaiveDate) -> Result<Option<String>> {
    store.get(&keys::brief(date))
}

/// Load the brief for `date`, generating one if needed.
///
/// With `force = false` a cached entry short-circuits and the backend is
/// never called. Otherwise the backend is called exactly once and its result
/// (or the fallback) overwrites the day's entry.
pub async fn load(
    store: &Store,
    backend: &dyn CoachBackend,
    profile: &UserProfile,
    date: NaiveDate,
    force: bool,
) -> Result<BriefOutcome> {
    if !force {
        if let Some(text) = cached(store, date)? {
            return Ok(BriefOutcome {
                text,
                source: BriefSource::Cached,
            });
        }
    }

    let (text, source) = match backend.generate_plan(profile).await {
        Ok(text) => (text, BriefSource::Generated),
        Err(err) => {
            tracing::warn!(error = %err, "daily plan generation failed, serving fallback");
            (FALLBACK_TEXT.to_string(), BriefSource::Degraded)
        }
    };

    store
        .set(&keys::brief(date), &text)
        .context("failed to persist daily brief")?;

    Ok(BriefOutcome { text, source })
}

/// Re-persist `text` under the day's key. Idempotent when unchanged.
pub fn save(store: &Store, date: NaiveDate, text: &str) -> Result<()> {
    store
        .set(&keys::brief(date), text)
        .context("failed to save daily brief")
}
