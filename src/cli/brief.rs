//! CLI `brief` command — show, refresh, or save today's plan.

use anyhow::Result;

use crate::config::TitanConfig;
use crate::engine::brief::{self, BriefSource};
use crate::store::keys;

pub async fn brief(config: &TitanConfig, refresh: bool, save: bool) -> Result<()> {
    let store = super::open_store(config)?;
    let profile = super::require_profile(&store)?;
    let today = keys::local_today();

    let outcome = if !refresh {
        match brief::cached(&store, today)? {
            Some(text) => brief::BriefOutcome {
                text,
                source: BriefSource::Cached,
            },
            None => {
                let coach = super::build_coach(config)?;
                brief::load(&store, &coach, &profile, today, false).await?
            }
        }
    } else {
        let coach = super::build_coach(config)?;
        brief::load(&store, &coach, &profile, today, true).await?
    };

    match outcome.source {
        BriefSource::Cached => println!("Daily brief (cached):"),
        BriefSource::Generated => println!("Daily brief (fresh):"),
        BriefSource::Degraded => println!("Daily brief (degraded):"),
    }
    println!();
    println!("{}", outcome.text);

    if save {
        brief::save(&store, today, &outcome.text)?;
        // Clipboard is best-effort: the acknowledgement is the same either way
        crate::clipboard::copy_text(&outcome.text);
        println!();
        println!("Saved.");
    }

    Ok(())
}
