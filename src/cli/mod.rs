pub mod brief;
pub mod chat;
pub mod checkin;
pub mod dashboard;
pub mod onboard;
pub mod reset;
pub mod settings;
pub mod stats;
pub mod toggle;

use anyhow::{Context, Result};
use std::io::Write;

use crate::coach::gemini::GeminiClient;
use crate::config::TitanConfig;
use crate::engine::types::UserProfile;
use crate::store::Store;

/// Open the store at the configured path.
pub(crate) fn open_store(config: &TitanConfig) -> Result<Store> {
    Store::open(config.resolved_db_path())
}

/// The stored profile, or an error pointing the user at `titan onboard`.
pub(crate) fn require_profile(store: &Store) -> Result<UserProfile> {
    crate::engine::load_profile(store)?
        .context("no profile found — run `titan onboard` first")
}

/// Build the Gemini client from config. Fails without an API key.
pub(crate) fn build_coach(config: &TitanConfig) -> Result<GeminiClient> {
    let api_key = config.require_api_key()?;
    GeminiClient::new(&config.ai, api_key)
}

/// Print `prompt` and read one trimmed line from stdin.
/// Returns `None` on end of input.
pub(crate) fn prompt_line_opt(prompt: &str) -> Result<Option<String>> {
    print!("{prompt}");
    std::io::stdout().flush()?;
    let mut input = String::new();
    let bytes = std::io::stdin().read_line(&mut input)?;
    if bytes == 0 {
        return Ok(None);
    }
    Ok(Some(input.trim().to_string()))
}

/// Like [`prompt_line_opt`], treating end of input as an empty answer.
pub(crate) fn prompt_line(prompt: &str) -> Result<String> {
    Ok(prompt_line_opt(prompt)?.unwrap_or_default())
}

/// Ask a yes/no question; anything starting with y/Y counts as yes.
pub(crate) fn prompt_yes_no(prompt: &str) -> Result<bool> {
    let answer = prompt_line(&format!("{prompt} [y/n]: "))?;
    Ok(answer.to_lowercase().starts_with('y'))
}
