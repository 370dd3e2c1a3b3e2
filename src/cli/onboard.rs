//! CLI `onboard` command — create the user profile.
//!
//! The disclaimer must be accepted before anything is persisted; the consent
//! flag is stored on the profile itself.

use anyhow::{bail, Result};

use crate::config::TitanConfig;
use crate::engine::types::{DietPreference, NotificationConfig, PrimaryGoal, UserProfile};

const DISCLAIMER: &str = "\
Titan is an AI-powered lifestyle optimization tool. It is NOT a medical
device. The workout routines and diet plans generated are for informational
purposes only. By accepting, you acknowledge you are using this tool at your
own risk. Consult a physician before starting any program.";

#[allow(clippy::too_many_arguments)]
pub fn onboard(
    config: &TitanConfig,
    name: String,
    age: u8,
    weight_kg: Option<f32>,
    height_cm: Option<f32>,
    diet: DietPreference,
    goal: PrimaryGoal,
    wake_up: String,
    accept_risks: bool,
) -> Result<()> {
    let store = super::open_store(config)?;

    if crate::engine::load_profile(&store)?.is_some() {
        println!("An existing profile will be replaced.");
        println!();
    }

    println!("Legal Disclaimer");
    println!("{}", "=".repeat(50));
    println!("{DISCLAIMER}");
    println!();

    let consented = accept_risks || super::prompt_yes_no("I understand & agree")?;
    if !consented {
        bail!("onboarding cancelled — consent is required");
    }

    let profile = UserProfile {
        name,
        age,
        weight_kg,
        height_cm,
        diet_preference: diet,
        primary_goal: goal,
        wake_up_time: wake_up,
        has_consented: true,
        notifications: NotificationConfig::default(),
    };
    crate::engine::save_profile(&store, &profile)?;

    // First load also synthesizes the engine collection
    let engines = crate::engine::progress::load(&store)?;

    println!("Welcome, {}. Profile stored.", profile.name);
    println!(
        "Goal: {} | Diet: {} | Wake-up: {}",
        profile.primary_goal, profile.diet_preference, profile.wake_up_time
    );
    println!("{} engines initialized. Run `titan dashboard` to begin.", engines.len());

    Ok(())
}
