mod helpers;

use helpers::{sample_profile, MockCoach};
use titan::coach::session::CoachSession;
use titan::coach::CoachError;

#[tokio::test]
async fn session_failure_triggers_one_reinit_without_resend() {
    // The caller's contract: on a session-category failure, re-initialize the
    // session exactly once and do NOT re-send the failed message.
    let coach = MockCoach::replying("acknowledged");
    let mut session = CoachSession::new(coach);

    // Not started yet — the send fails with the session category
    let err = session.send("status report").await.unwrap_err();
    assert!(err.is_session_failure());

    // One silent re-init, no resend
    session.start(&sample_profile());
    assert!(session.is_active());
    assert_eq!(session.turn_count(), 0);

    // The user's NEXT message goes through
    let reply = session.send("status report, again").await.unwrap();
    assert_eq!(reply, "acknowledged");
    assert_eq!(session.turn_count(), 2);
}

#[tokio::test]
async fn non_session_failures_do_not_reset_history() {
    let coach = MockCoach::failing(|| CoachError::RateLimited);
    let mut session = CoachSession::new(coach);
    session.start(&sample_profile());

    let err = session.send("hello").await.unwrap_err();
    assert!(!err.is_session_failure());
    assert!(session.is_active());
}

#[tokio::test]
async fn user_messages_never_replay_after_an_error() {
    let coach = MockCoach::failing(|| CoachError::ServerUnavailable);
    let mut session = CoachSession::new(coach);
    session.start(&sample_profile());

    session.send("a").await.unwrap_err();
    session.send("b").await.unwrap_err();

    // Both failed turns were rolled back
    assert_eq!(session.turn_count(), 0);
}
