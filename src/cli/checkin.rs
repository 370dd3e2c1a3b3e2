//! CLI `checkin` command — the evening audit.

use anyhow::Result;
use std::collections::BTreeMap;

use crate::config::TitanConfig;
use crate::engine::types::EngineKind;
use crate::engine::{checkin, progress};
use crate::store::keys;

pub fn checkin(config: &TitanConfig, notes: Option<String>) -> Result<()> {
    let store = super::open_store(config)?;
    super::require_profile(&store)?;
    let today = keys::local_today();

    if checkin::for_date(&store, today)?.is_some() {
        println!("A check-in for today already exists — answers will overwrite it.");
        println!();
    }

    println!("Evening Check-In — {today}");
    println!("{}", "=".repeat(50));

    let mut answers: BTreeMap<EngineKind, bool> = BTreeMap::new();
    for kind in EngineKind::ALL {
        let yes = super::prompt_yes_no(checkin::question(kind))?;
        answers.insert(kind, yes);
    }

    let affirmed = answers.values().filter(|&&v| v).count();
    checkin::submit(&store, today, answers, notes)?;

    let records = progress::load(&store)?;
    let streak = progress::max_streak(&records);

    println!();
    println!("Protocol Saved — {affirmed}/5 engines affirmed.");
    if streak > 0 {
        println!("Best active streak: {streak} days.");
    }
    println!();
    println!("\"{}\"", checkin::random_quote());

    Ok(())
}
