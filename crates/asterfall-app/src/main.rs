//! Headless ASTERFALL session: spawn the game loop, let the scripted
//! pilot play one round, and narrate the feedback events.

use std::sync::mpsc;

use anyhow::{anyhow, Result};

use asterfall_app::pilot::Pilot;
use asterfall_app::state::{self, GameLoopCommand};
use asterfall_app::{game_loop, prefs};
use asterfall_core::events::FeedbackEvent;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // The tutorial notice shows exactly once across runs.
    let prefs_path = prefs::prefs_path();
    let mut preferences = prefs::load(&prefs_path);
    if !preferences.force_touch_notice_shown {
        log::info!("tip: press firmly on the ship while dragging to shoot lasers");
        preferences.force_touch_notice_shown = true;
        if let Err(err) = prefs::store(&prefs_path, &preferences) {
            log::warn!("could not save preferences: {err:#}");
        }
    }

    let latest_snapshot = state::new_shared_snapshot();
    let (snapshot_tx, snapshot_rx) = mpsc::channel();
    let (cmd_tx, handle) = game_loop::spawn_game_loop(latest_snapshot, snapshot_tx);

    let mut pilot = Pilot::new();
    let mut final_score = 0;
    for snapshot in snapshot_rx.iter() {
        for event in &snapshot.events {
            narrate(event);
        }
        final_score = snapshot.score.max(final_score);

        for command in pilot.react(&snapshot) {
            state::send_player_command(&cmd_tx, command)?;
        }
        if pilot.done() {
            break;
        }
    }

    cmd_tx.send(GameLoopCommand::Shutdown)?;
    handle
        .join()
        .map_err(|_| anyhow!("game loop thread panicked"))?;

    log::info!("session complete, final score {final_score}");
    Ok(())
}

fn narrate(event: &FeedbackEvent) {
    match event {
        FeedbackEvent::CountdownStep { value } => log::info!("countdown: {value}"),
        FeedbackEvent::GameStarted => log::info!("go!"),
        FeedbackEvent::LaserFired { .. } => log::debug!("laser away"),
        FeedbackEvent::AsteroidShot { x, y } => {
            log::info!("asteroid destroyed at ({x:.0}, {y:.0})")
        }
        FeedbackEvent::AsteroidDodged => log::debug!("asteroid dodged"),
        FeedbackEvent::ShipDestroyed { score } => {
            log::info!("ship destroyed — final score {score}")
        }
    }
}
