//! CLI `reset` command — delete all tracker state after user confirmation.

use anyhow::{bail, Result};

use crate::config::TitanConfig;
use crate::store::keys;

/// Delete the profile, engines, briefs, and check-in logs.
pub fn reset(config: &TitanConfig) -> Result<()> {
    let db_path = config.resolved_db_path();

    println!("WARNING: This will permanently delete your profile, engine streaks,");
    println!("daily briefs, and check-in logs.");
    println!("Store: {}", db_path.display());

    let input = super::prompt_line("\nType YES to confirm: ")?;
    if input != "YES" {
        bail!("reset cancelled");
    }

    let store = super::open_store(config)?;
    store.remove(keys::USER)?;
    store.remove(keys::ENGINES)?;
    let briefs = store.remove_prefix(keys::BRIEF_PREFIX)?;
    let logs = store.remove_prefix(keys::LOG_PREFIX)?;

    println!("Reset complete ({briefs} briefs, {logs} check-ins removed).");
    Ok(())
}
