//! Scripted pilot — plays one full session for the headless binary.
//!
//! Reacts to each snapshot with the commands a player would issue:
//! pick a difficulty, start, weave the ship while squeezing off shots,
//! try the pause menu once, and quit back to the menu when the session
//! ends. Everything is keyed off the snapshot's tick counter, so a
//! given engine seed replays identically.

use asterfall_core::commands::PlayerCommand;
use asterfall_core::enums::{DifficultyTier, GamePhase};
use asterfall_core::state::GameStateSnapshot;

/// Menu ticks before picking a difficulty.
const SELECT_AT_TICK: u64 = 30;
/// Menu ticks before pressing play.
const START_AT_TICK: u64 = 60;
/// Playing tick at which to try the pause menu.
const PAUSE_AT_TICK: u64 = 300;
/// Give up and quit out if the ship survives this long.
const MAX_PLAYING_TICKS: u64 = 3600;
/// Menu dwell after the session before finishing.
const FAREWELL_TICKS: u64 = 120;
/// One squeeze per this many playing ticks.
const SQUEEZE_PERIOD: u64 = 90;

/// Driver state for one scripted session.
#[derive(Debug, Default)]
pub struct Pilot {
    selected: bool,
    started: bool,
    paused_once: bool,
    quit_sent: bool,
    playing_ticks: u64,
    farewell_ticks: u64,
    done: bool,
}

impl Pilot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the scripted session has run its course.
    pub fn done(&self) -> bool {
        self.done
    }

    /// Commands to issue in response to the latest snapshot.
    pub fn react(&mut self, snap: &GameStateSnapshot) -> Vec<PlayerCommand> {
        match snap.phase {
            GamePhase::Menu => self.react_menu(snap),
            GamePhase::Countdown => Vec::new(),
            GamePhase::Playing => self.react_playing(snap),
            GamePhase::Paused => {
                if self.quit_sent {
                    Vec::new()
                } else {
                    vec![PlayerCommand::Resume]
                }
            }
            GamePhase::GameOver => {
                if self.quit_sent {
                    Vec::new()
                } else {
                    self.quit_sent = true;
                    vec![PlayerCommand::QuitToMenu]
                }
            }
        }
    }

    fn react_menu(&mut self, snap: &GameStateSnapshot) -> Vec<PlayerCommand> {
        if self.quit_sent {
            // Back on the menu after the session: linger, then finish.
            self.farewell_ticks += 1;
            if self.farewell_ticks >= FAREWELL_TICKS {
                self.done = true;
            }
            return Vec::new();
        }
        if !self.selected && snap.time.tick >= SELECT_AT_TICK {
            self.selected = true;
            return vec![PlayerCommand::SelectDifficulty {
                tier: DifficultyTier::Easy,
            }];
        }
        if self.selected && !self.started && snap.time.tick >= START_AT_TICK {
            self.started = true;
            return vec![PlayerCommand::StartGame];
        }
        Vec::new()
    }

    fn react_playing(&mut self, snap: &GameStateSnapshot) -> Vec<PlayerCommand> {
        self.playing_ticks += 1;

        if !self.paused_once && self.playing_ticks == PAUSE_AT_TICK {
            self.paused_once = true;
            return vec![PlayerCommand::Pause];
        }

        if self.playing_ticks >= MAX_PLAYING_TICKS && !self.quit_sent {
            // The pause menu is the only way out of a running game.
            self.quit_sent = true;
            return vec![PlayerCommand::Pause, PlayerCommand::QuitToMenu];
        }

        let ship = match &snap.ship {
            Some(ship) => ship,
            None => return Vec::new(),
        };

        // Weave side to side; squeeze sharply on a fixed cadence so the
        // trigger sees a fast rise, then eases off and re-arms.
        let dx = if (self.playing_ticks / 30) % 2 == 0 {
            20.0
        } else {
            -20.0
        };
        let force = if self.playing_ticks % SQUEEZE_PERIOD == 0 {
            5.0
        } else {
            0.0
        };
        vec![PlayerCommand::DragShip {
            x: ship.position.x + dx,
            y: ship.position.y,
            force,
        }]
    }
}
