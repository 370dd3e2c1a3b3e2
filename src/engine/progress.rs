//! Engine progress tracking — load, self-healing migration, toggle, and the
//! daily readiness readout.
//!
//! The full collection is persisted after every mutation; a failed write is
//! surfaced as an error rather than leaving memory and disk silently
//! diverging.

use anyhow::{bail, Context, Result};
use rand::Rng;

use crate::engine::registry::{definition, DEFINITIONS};
use crate::engine::types::{EngineKind, EngineProgress, Readiness};
use crate::store::{keys, Store};

/// Initial score range for a fresh install, inclusive.
const INITIAL_SCORE_RANGE: std::ops::RangeInclusive<u8> = 50..=89;

/// Load the engine collection from the store, or synthesize and persist a
/// fresh one on first run.
///
/// Stored records get their display metadata re-attached from the static
/// definitions (older installs persisted progress without it); score, streak
/// and completion state are never altered by the migration. Missing progress
/// records are not invented — only metadata is back-filled.
pub fn load(store: &Store) -> Result<Vec<EngineProgress>> {
    match store.get_json::<Vec<EngineProgress>>(keys::ENGINES)? {
        Some(stored) => Ok(hydrate(stored)),
        None => {
            let fresh = synthesize(&mut rand::thread_rng());
            store
                .set_json(keys::ENGINES, &fresh)
                .context("failed to persist initial engine collection")?;
            tracing::info!("initialized fresh engine collection");
            Ok(fresh)
        }
    }
}

/// Re-attach display metadata from the static definitions.
fn hydrate(mut records: Vec<EngineProgress>) -> Vec<EngineProgress> {
    for record in &mut records {
        let def = definition(record.kind);
        record.display_name = def.display_name.to_string();
        record.description = def.description.to_string();
        record.color = def.color.to_string();
        record.icon = def.icon.to_string();
    }
    records
}

/// Build the first-run collection: one record per definition, randomized
/// score in [50, 89], streak 0, incomplete, the definition's default task.
fn synthesize(rng: &mut impl Rng) -> Vec<EngineProgress> {
    DEFINITIONS
        .iter()
        .map(|def| EngineProgress {
            kind: def.kind,
            display_name: def.display_name.to_string(),
            description: def.description.to_string(),
            score: rng.gen_range(INITIAL_SCORE_RANGE),
            streak: 0,
            daily_task: def.default_task.to_string(),
            is_complete: false,
            color: def.color.to_string(),
            icon: def.icon.to_string(),
        })
        .collect()
}

/// Flip the completion flag for one engine and persist the full collection.
///
/// Completing bumps the streak by one; un-completing takes it back down.
/// There is deliberately no floor at zero — toggling twice must restore both
/// the flag and the streak exactly. Returns the updated record.
pub fn toggle(store: &Store, kind: EngineKind) -> Result<EngineProgress> {
    let mut records = load(store)?;

    let record = records
        .iter_mut()
        .find(|r| r.kind == kind)
        .with_context(|| format!("no progress record for engine {kind}"))?;

    record.is_complete = !record.is_complete;
    if record.is_complete {
        record.streak += 1;
    } else {
        record.streak -= 1;
    }
    let updated = record.clone();

    store
        .set_json(keys::ENGINES, &records)
        .context("failed to persist engine collection after toggle")?;
    tracing::debug!(engine = %kind, complete = updated.is_complete, streak = updated.streak, "engine toggled");

    Ok(updated)
}

/// Completed count and percentage across the collection.
pub fn readiness(records: &[EngineProgress]) -> Readiness {
    Readiness {
        completed: records.iter().filter(|r| r.is_complete).count(),
        total: EngineKind::ALL.len(),
    }
}

/// Highest current streak across all engines.
pub fn max_streak(records: &[EngineProgress]) -> i32 {
    records.iter().map(|r| r.streak).max().unwrap_or(0)
}

/// The invariant check used by `titan stats`: exactly one record per kind.
pub fn verify_collection(records: &[EngineProgress]) -> Result<()> {
    if records.len() != EngineKind::ALL.len() {
        bail!(
            "engine collection has {} records, expected {}",
            records.len(),
            EngineKind::ALL.len()
        );
    }
    for kind in EngineKind::ALL {
        if !records.iter().any(|r| r.kind == kind) {
            bail!("engine collection is missing {kind}");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;

    fn test_store() -> Store {
        Store::open_in_memory().unwrap()
    }

    #[test]
    fn fresh_load_synthesizes_one_record_per_engine() {
        let store = test_store();
        let records = load(&store).unwrap();

        assert_eq!(records.len(), 5);
        verify_collection(&records).unwrap();
        for record in &records {
            assert_eq!(record.streak, 0);
            assert!(!record.is_complete);
            assert!((50..=89).contains(&record.score));
            assert!(!record.daily_task.is_empty());
        }

        // The synthesized collection was persisted immediately
        assert!(store.get(keys::ENGINES).unwrap().is_some());
    }

    #[test]
    fn synthesized_scores_cover_the_documented_range() {
        // StepRng walks the whole range; every score must stay inside it.
        let mut rng = StepRng::new(0, 0x9e3779b97f4a7c15);
        for _ in 0..20 {
            for record in synthesize(&mut rng) {
                assert!((50..=89).contains(&record.score));
            }
        }
    }

    #[test]
    fn toggle_roundtrip_restores_flag_and_streak() {
        let store = test_store();
        load(&store).unwrap();

        let before = load(&store)
            .unwrap()
            .into_iter()
            .find(|r| r.kind == EngineKind::Mind)
            .unwrap();

        let on = toggle(&store, EngineKind::Mind).unwrap();
        assert!(on.is_complete);
        assert_eq!(on.streak, before.streak + 1);

        let off = toggle(&store, EngineKind::Mind).unwrap();
        assert_eq!(off.is_complete, before.is_complete);
        assert_eq!(off.streak, before.streak);
    }

    #[test]
    fn toggle_sequence_from_streak_three() {
        let store = test_store();
        let mut records = load(&store).unwrap();
        for record in &mut records {
            if record.kind == EngineKind::Body {
                record.streak = 3;
                record.is_complete = false;
            }
        }
        store.set_json(keys::ENGINES, &records).unwrap();

        let first = toggle(&store, EngineKind::Body).unwrap();
        assert!(first.is_complete);
        assert_eq!(first.streak, 4);

        let second = toggle(&store, EngineKind::Body).unwrap();
        assert!(!second.is_complete);
        assert_eq!(second.streak, 3);
    }

    #[test]
    fn streak_can_go_negative_on_untoggle_from_zero() {
        let store = test_store();
        let mut records = load(&store).unwrap();
        for record in &mut records {
            if record.kind == EngineKind::Diet {
                record.is_complete = true;
                record.streak = 0;
            }
        }
        store.set_json(keys::ENGINES, &records).unwrap();

        let off = toggle(&store, EngineKind::Diet).unwrap();
        assert!(!off.is_complete);
        assert_eq!(off.streak, -1);
    }

    #[test]
    fn toggle_persists_the_full_collection() {
        let store = test_store();
        load(&store).unwrap();
        toggle(&store, EngineKind::Discipline).unwrap();

        let reloaded = load(&store).unwrap();
        let discipline = reloaded
            .iter()
            .find(|r| r.kind == EngineKind::Discipline)
            .unwrap();
        assert!(discipline.is_complete);
        assert_eq!(discipline.streak, 1);
        // Untouched engines survive the write
        assert_eq!(reloaded.len(), 5);
    }

    #[test]
    fn readiness_tracks_any_subset() {
        let store = test_store();
        let records = load(&store).unwrap();
        assert_eq!(readiness(&records).percent(), 0.0);

        toggle(&store, EngineKind::Body).unwrap();
        toggle(&store, EngineKind::Mind).unwrap();
        let records = load(&store).unwrap();
        let r = readiness(&records);
        assert_eq!(r.completed, 2);
        assert_eq!(r.percent(), 40.0);

        for kind in [
            EngineKind::Diet,
            EngineKind::Discipline,
            EngineKind::Accountability,
        ] {
            toggle(&store, kind).unwrap();
        }
        let records = load(&store).unwrap();
        assert_eq!(readiness(&records).percent(), 100.0);
    }

    #[test]
    fn migration_backfills_metadata_without_touching_state() {
        let store = test_store();
        // Stored shape from an older install: no display metadata.
        let raw = r#"[
            {"type":"Body","score":61,"streak":7,"daily_task":"Run 5k","is_complete":true},
            {"type":"Diet","score":55,"streak":2,"daily_task":"No sugar","is_complete":false},
            {"type":"Mind","score":80,"streak":0,"daily_task":"Meditate","is_complete":false},
            {"type":"Discipline","score":70,"streak":1,"daily_task":"Wake at 6","is_complete":false},
            {"type":"Accountability","score":66,"streak":3,"daily_task":"Log meals","is_complete":true}
        ]"#;
        store.set(keys::ENGINES, raw).unwrap();

        let records = load(&store).unwrap();
        let body = records.iter().find(|r| r.kind == EngineKind::Body).unwrap();
        assert_eq!(body.display_name, "Physical Performance");
        assert!(!body.description.is_empty());
        assert_eq!(body.score, 61);
        assert_eq!(body.streak, 7);
        assert!(body.is_complete);
        assert_eq!(body.daily_task, "Run 5k");
    }

    #[test]
    fn max_streak_reads_highest() {
        let store = test_store();
        load(&store).unwrap();
        toggle(&store, EngineKind::Body).unwrap();
        toggle(&store, EngineKind::Mind).unwrap();
        let records = load(&store).unwrap();
        assert_eq!(max_streak(&records), 1);
        assert_eq!(max_streak(&[]), 0);
    }
}
