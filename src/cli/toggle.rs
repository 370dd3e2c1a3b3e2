//! CLI `toggle` command — flip one engine's completion for today.

use anyhow::Result;

use crate::config::TitanConfig;
use crate::engine::progress;
use crate::engine::types::EngineKind;

pub fn toggle(config: &TitanConfig, engine: EngineKind) -> Result<()> {
    let store = super::open_store(config)?;
    super::require_profile(&store)?;

    let updated = progress::toggle(&store, engine)?;
    let records = progress::load(&store)?;
    let readiness = progress::readiness(&records);

    let state = if updated.is_complete {
        "complete"
    } else {
        "incomplete"
    };
    println!(
        "{} marked {state} (streak {})",
        updated.display_name, updated.streak
    );
    println!(
        "Daily readiness: {:.0}% ({}/{})",
        readiness.percent(),
        readiness.completed,
        readiness.total
    );

    Ok(())
}
