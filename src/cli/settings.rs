//! CLI `settings` command — view and update profile preferences.

use anyhow::Result;

use crate::config::TitanConfig;
use crate::engine::types::{DietPreference, PrimaryGoal};

#[derive(Debug, Default)]
pub struct SettingsUpdate {
    pub goal: Option<PrimaryGoal>,
    pub diet: Option<DietPreference>,
    pub wake_up: Option<String>,
    pub daily_check_in: Option<bool>,
    pub morning_brief: Option<bool>,
    pub workout_reminders: Option<bool>,
}

impl SettingsUpdate {
    pub fn is_empty(&self) -> bool {
        self.goal.is_none()
            && self.diet.is_none()
            && self.wake_up.is_none()
            && self.daily_check_in.is_none()
            && self.morning_brief.is_none()
            && self.workout_reminders.is_none()
    }
}

pub fn settings(config: &TitanConfig, update: SettingsUpdate) -> Result<()> {
    let store = super::open_store(config)?;
    let mut profile = super::require_profile(&store)?;

    if !update.is_empty() {
        if let Some(goal) = update.goal {
            profile.primary_goal = goal;
        }
        if let Some(diet) = update.diet {
            profile.diet_preference = diet;
        }
        if let Some(wake_up) = update.wake_up {
            profile.wake_up_time = wake_up;
        }
        if let Some(v) = update.daily_check_in {
            profile.notifications.daily_check_in = v;
        }
        if let Some(v) = update.morning_brief {
            profile.notifications.morning_brief = v;
        }
        if let Some(v) = update.workout_reminders {
            profile.notifications.workout_reminders = v;
        }
        crate::engine::save_profile(&store, &profile)?;
        println!("Settings updated.");
        println!();
    }

    println!("Profile");
    println!("{}", "=".repeat(40));
    println!("  Name:              {}", profile.name);
    println!("  Age:               {}", profile.age);
    println!("  Goal:              {}", profile.primary_goal);
    println!("  Diet:              {}", profile.diet_preference);
    println!("  Wake-up:           {}", profile.wake_up_time);
    println!();
    println!("Notifications");
    println!("{}", "=".repeat(40));
    println!("  Daily check-in:    {}", on_off(profile.notifications.daily_check_in));
    println!("  Morning brief:     {}", on_off(profile.notifications.morning_brief));
    println!("  Workout reminders: {}", on_off(profile.notifications.workout_reminders));

    Ok(())
}

fn on_off(v: bool) -> &'static str {
    if v {
        "on"
    } else {
        "off"
    }
}
