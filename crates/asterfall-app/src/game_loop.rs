//! Game loop thread — runs the simulation engine at 60 Hz.
//!
//! The engine is created inside the thread because it's cleaner for
//! ownership. Commands arrive via an `mpsc` channel; each snapshot is
//! streamed to the subscriber channel and stored in shared state for
//! synchronous polling.

use std::sync::mpsc;
use std::sync::Mutex;
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use asterfall_core::constants::TICK_RATE;
use asterfall_core::state::GameStateSnapshot;
use asterfall_sim::engine::{SimConfig, SimulationEngine};

use crate::state::{GameLoopCommand, SharedSnapshot};

/// Nominal duration of one tick.
const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// Spawn the game loop in a new thread.
///
/// Returns the command sender and the thread handle for joining after
/// a Shutdown command.
pub fn spawn_game_loop(
    latest_snapshot: SharedSnapshot,
    snapshot_tx: mpsc::Sender<GameStateSnapshot>,
) -> (mpsc::Sender<GameLoopCommand>, JoinHandle<()>) {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    let handle = std::thread::Builder::new()
        .name("asterfall-game-loop".into())
        .spawn(move || {
            run_game_loop(cmd_rx, &latest_snapshot, &snapshot_tx);
        })
        .expect("failed to spawn game loop thread");

    (cmd_tx, handle)
}

/// The game loop. Runs until Shutdown command or channel disconnect.
fn run_game_loop(
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &Mutex<Option<GameStateSnapshot>>,
    snapshot_tx: &mpsc::Sender<GameStateSnapshot>,
) {
    let mut engine = SimulationEngine::new(SimConfig::default());
    let mut next_tick_time = Instant::now();

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::PlayerCommand(cmd)) => {
                    engine.queue_command(cmd);
                }
                Ok(GameLoopCommand::Shutdown) => return,
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => return,
            }
        }

        // 2. Advance one tick (the engine handles pause semantics)
        let snapshot = engine.tick();

        // 3. Stream to the subscriber, if still listening
        let _ = snapshot_tx.send(snapshot.clone());

        // 4. Store the latest snapshot for synchronous polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        // 5. Sleep until the next tick boundary
        next_tick_time += TICK_DURATION;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > TICK_DURATION * 2 {
            // Too far behind — reset to avoid a catch-up spiral
            next_tick_time = now;
        }
    }
}
