//! Titan — a terminal habit tracker and AI coach.
//!
//! Five fixed daily "engines" (Body, Diet, Mind, Discipline, Accountability)
//! are tracked with a completion flag, streak counter, and efficiency score.
//! A hosted model generates one coaching brief per calendar day and powers an
//! interactive chat coach, both speaking in a single fixed persona.
//!
//! # Architecture
//!
//! - **Storage**: a single SQLite-backed key-value table of JSON documents —
//!   profile, engine collection, one brief and one check-in log per day
//! - **AI**: Gemini `generateContent` over REST, behind the [`coach::CoachBackend`]
//!   trait with a closed error taxonomy
//! - **Surface**: clap subcommands (`dashboard`, `toggle`, `brief`, `chat`,
//!   `checkin`, ...)
//!
//! # Modules
//!
//! - [`config`] — Configuration loading from TOML files and environment variables
//! - [`store`] — Key-value persistence and the fixed key scheme
//! - [`engine`] — Engine registry, progress/streak tracking, daily brief cache, check-in
//! - [`coach`] — Gemini client, chat session, and error taxonomy
//! - [`clipboard`] — Best-effort copy for the brief save action

pub mod clipboard;
pub mod coach;
pub mod config;
pub mod engine;
pub mod store;
