//! CLI `dashboard` command — engines, readiness, and today's brief.

use anyhow::Result;

use crate::config::TitanConfig;
use crate::engine::brief::{self, BriefSource};
use crate::engine::{progress, types::EngineProgress};
use crate::store::keys;

/// Render the daily dashboard.
pub async fn dashboard(config: &TitanConfig) -> Result<()> {
    let store = super::open_store(config)?;
    let profile = super::require_profile(&store)?;
    let engines = progress::load(&store)?;
    let readiness = progress::readiness(&engines);

    println!("Protocol Active — {}", profile.primary_goal);
    println!("Daily Readiness: {:.0}%", readiness.percent());
    println!();

    println!("Daily Intelligence");
    println!("{}", "=".repeat(50));
    let today = keys::local_today();
    match brief::cached(&store, today)? {
        Some(text) => print_brief(&text, BriefSource::Cached),
        None => match super::build_coach(config) {
            Ok(coach) => {
                let outcome = brief::load(&store, &coach, &profile, today, false).await?;
                print_brief(&outcome.text, outcome.source);
            }
            Err(_) => {
                println!("  (no brief yet — set TITAN_API_KEY and run `titan brief`)");
            }
        },
    }
    println!();

    println!("System Engines");
    println!("{}", "=".repeat(50));
    for engine in &engines {
        print_engine(engine);
    }

    Ok(())
}

fn print_brief(text: &str, source: BriefSource) {
    for line in text.lines() {
        println!("  {line}");
    }
    if source == BriefSource::Degraded {
        println!("  (degraded — run `titan brief --refresh` to retry)");
    }
}

fn print_engine(engine: &EngineProgress) {
    let mark = if engine.is_complete { "[x]" } else { "[ ]" };
    println!(
        "  {mark} {:<22} streak {:>3}  score {:>3}  — {}",
        engine.display_name, engine.streak, engine.score, engine.daily_task
    );
}
