//! Pre-game countdown: 3, 2, 1, go.
//!
//! Each step spans one scale-in/hold/fade cycle. When the counter
//! reaches zero the session enters Playing and the spawner is armed.

use asterfall_core::constants::{COUNTDOWN_START, COUNTDOWN_STEP_TICKS};
use asterfall_core::enums::GamePhase;
use asterfall_core::events::FeedbackEvent;

use crate::session::GameSession;

/// Advance the countdown by one tick.
pub fn run(session: &mut GameSession, events: &mut Vec<FeedbackEvent>) {
    debug_assert!(session.countdown <= COUNTDOWN_START);
    debug_assert!(session.countdown > 0, "countdown ran past zero");

    if session.countdown_step_ticks > 0 {
        session.countdown_step_ticks -= 1;
        return;
    }

    session.countdown -= 1;
    if session.countdown == 0 {
        session.phase = GamePhase::Playing;
        session.arm_spawner();
        events.push(FeedbackEvent::GameStarted);
    } else {
        events.push(FeedbackEvent::CountdownStep {
            value: session.countdown,
        });
        session.countdown_step_ticks = COUNTDOWN_STEP_TICKS;
    }
}
