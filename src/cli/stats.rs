//! CLI `stats` command — tracker state at a glance.

use anyhow::Result;

use crate::config::TitanConfig;
use crate::engine::{checkin, progress};
use crate::store::keys;

pub fn stats(config: &TitanConfig) -> Result<()> {
    let db_path = config.resolved_db_path();
    let store = super::open_store(config)?;
    super::require_profile(&store)?;

    let records = progress::load(&store)?;
    progress::verify_collection(&records)?;
    let readiness = progress::readiness(&records);
    let today = keys::local_today();

    println!("Engine Statistics");
    println!("{}", "=".repeat(50));
    for record in &records {
        let mark = if record.is_complete { "x" } else { " " };
        println!(
            "  [{mark}] {:<16} streak {:>3}  score {:>3}",
            record.kind, record.streak, record.score
        );
    }
    println!();
    println!(
        "Completed today:       {}/{} ({:.0}%)",
        readiness.completed,
        readiness.total,
        readiness.percent()
    );
    println!("Best active streak:    {}", progress::max_streak(&records));
    println!();

    println!(
        "Today's brief:         {}",
        presence(crate::engine::brief::cached(&store, today)?.is_some())
    );
    println!(
        "Today's check-in:      {}",
        presence(checkin::for_date(&store, today)?.is_some())
    );
    println!();

    println!("Stored keys:           {}", store.len()?);
    if let Ok(meta) = std::fs::metadata(&db_path) {
        println!("Store size:            {} bytes", meta.len());
    }

    Ok(())
}

fn presence(present: bool) -> &'static str {
    if present {
        "recorded"
    } else {
        "not yet"
    }
}
