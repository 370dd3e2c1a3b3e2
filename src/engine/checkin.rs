//! Evening check-in — five yes/no questions, one dated log per day.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use rand::seq::SliceRandom;
use std::collections::BTreeMap;

use crate::engine::types::{DailyLog, EngineKind};
use crate::store::{keys, Store};

/// The fixed check-in question for each engine.
pub fn question(kind: EngineKind) -> &'static str {
    match kind {
        EngineKind::Body => "Body: Did you move with intensity today?",
        EngineKind::Diet => "Fuel: Did you strictly adhere to the meal plan?",
        EngineKind::Mind => "Mind: Did you meditate or learn something new?",
        EngineKind::Discipline => "Will: Did you wake up on time & avoid distractions?",
        EngineKind::Accountability => "Truth: Are you logging this accurately?",
    }
}

const QUOTES: [&str; 9] = [
    "Discipline is doing what you hate to do, but doing it like you love it.",
    "The pain of discipline is far less than the pain of regret.",
    "You do not rise to the level of your goals. You fall to the level of your systems.",
    "The only easy day was yesterday.",
    "Your body can stand almost anything. It's your mind that you have to convince.",
    "Success is the sum of small efforts, repeated day in and day out.",
    "Do something today that your future self will thank you for.",
    "Motivation gets you going. Habit gets you there.",
    "The difference between who you are and who you want to be is what you do.",
];

/// A random motivational quote from the fixed pool.
pub fn random_quote() -> &'static str {
    QUOTES
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or(QUOTES[0])
}

/// Record a check-in for `date`, overwriting any earlier submission that day.
pub fn submit(
    store: &Store,
    date: NaiveDate,
    answers: BTreeMap<EngineKind, bool>,
    notes: Option<String>,
) -> Result<DailyLog> {
    let log = DailyLog {
        date,
        engines: answers,
        notes,
    };
    store
        .set_json(&keys::log(date), &log)
        .context("failed to persist check-in log")?;
    tracing::debug!(date = %date, "check-in recorded");
    Ok(log)
}

/// The check-in recorded for `date`, if any.
pub fn for_date(store: &Store, date: NaiveDate) -> Result<Option<DailyLog>> {
    store.get_json(&keys::log(date))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answers(yes: &[EngineKind]) -> BTreeMap<EngineKind, bool> {
        EngineKind::ALL
            .into_iter()
            .map(|k| (k, yes.contains(&k)))
            .collect()
    }

    #[test]
    fn submit_and_reload() {
        let store = Store::open_in_memory().unwrap();
        let date = NaiveDate::from_ymd_opt(2026, 8, 29).unwrap();

        submit(
            &store,
            date,
            answers(&[EngineKind::Body, EngineKind::Mind]),
            Some("tough day".into()),
        )
        .unwrap();

        let log = for_date(&store, date).unwrap().unwrap();
        assert_eq!(log.date, date);
        assert_eq!(log.engines.len(), 5);
        assert_eq!(log.engines[&EngineKind::Body], true);
        assert_eq!(log.engines[&EngineKind::Diet], false);
        assert_eq!(log.notes.as_deref(), Some("tough day"));
    }

    #[test]
    fn resubmission_overwrites_the_day() {
        let store = Store::open_in_memory().unwrap();
        let date = NaiveDate::from_ymd_opt(2026, 8, 29).unwrap();

        submit(&store, date, answers(&[]), None).unwrap();
        submit(&store, date, answers(&EngineKind::ALL), None).unwrap();

        let log = for_date(&store, date).unwrap().unwrap();
        assert!(log.engines.values().all(|&v| v));
    }

    #[test]
    fn every_engine_has_a_question() {
        for kind in EngineKind::ALL {
            assert!(!question(kind).is_empty());
        }
    }
}
