//! CLI `chat` command — interactive coaching session.
//!
//! On a session-category failure the session is re-initialized exactly once,
//! silently; the failed message is not re-sent.

use anyhow::Result;

use crate::coach::session::CoachSession;
use crate::config::TitanConfig;

pub async fn chat(config: &TitanConfig) -> Result<()> {
    let store = super::open_store(config)?;
    let profile = super::require_profile(&store)?;
    let backend = super::build_coach(config)?;

    let mut session = CoachSession::new(backend);
    session.start(&profile);

    println!(
        "Titan Systems Online. I am ready to optimize your {}. What is your status?",
        profile.primary_goal
    );
    println!("(type 'exit' to leave)");

    loop {
        let Some(input) = super::prompt_line_opt("> ")? else {
            break;
        };
        if input.is_empty() {
            continue;
        }
        if input.eq_ignore_ascii_case("exit") || input.eq_ignore_ascii_case("quit") {
            break;
        }

        match session.send(&input).await {
            Ok(reply) => {
                println!();
                println!("{reply}");
                println!();
            }
            Err(err) => {
                println!();
                println!("SYSTEM ALERT: {}", err.user_message());
                println!();
                if err.is_session_failure() {
                    // One silent re-init so the next message has a chance
                    session.start(&profile);
                }
            }
        }
    }

    println!("Session closed. Stay disciplined.");
    Ok(())
}
