//! Session data model — the mutable state of one play-through.
//!
//! Owned by `SimulationEngine` and mutated only through its command and
//! system handlers, never shared as ambient state.

use asterfall_core::constants::{COUNTDOWN_START, COUNTDOWN_STEP_TICKS, MENU_SPAWN_INTERVAL_TICKS};
use asterfall_core::difficulty::DifficultyProfile;
use asterfall_core::enums::GamePhase;
use asterfall_input::TriggerState;

/// The state of the current session: phase, tuning, score, and the
/// timer/trigger bookkeeping the systems advance each tick.
#[derive(Debug, Clone)]
pub struct GameSession {
    pub phase: GamePhase,
    /// Selected at game start, read-only afterwards.
    pub difficulty: DifficultyProfile,
    /// Monotone while Playing; reset when a countdown begins.
    pub score: u32,
    /// Remaining countdown value (meaningful only in Countdown).
    pub countdown: u8,
    /// Ticks left in the current countdown step.
    pub countdown_step_ticks: u64,
    /// Ticks until the next asteroid spawn (meaningful only in Playing).
    pub spawn_ticks: u64,
    /// Ticks until the next decorative menu drifter.
    pub menu_ticks: u64,
    /// Firing trigger debounce state.
    pub trigger: TriggerState,
    /// Whether a drag is in progress (selects the exhaust sprite).
    pub dragging: bool,
}

impl Default for GameSession {
    fn default() -> Self {
        Self {
            phase: GamePhase::Menu,
            difficulty: DifficultyProfile::default(),
            score: 0,
            countdown: 0,
            countdown_step_ticks: 0,
            spawn_ticks: 0,
            menu_ticks: MENU_SPAWN_INTERVAL_TICKS,
            trigger: TriggerState::default(),
            dragging: false,
        }
    }
}

impl GameSession {
    /// Reset for a fresh countdown, keeping the selected difficulty.
    pub fn begin_countdown(&mut self) {
        self.phase = GamePhase::Countdown;
        self.score = 0;
        self.countdown = COUNTDOWN_START;
        self.countdown_step_ticks = COUNTDOWN_STEP_TICKS;
        self.spawn_ticks = 0;
        self.trigger.release();
        self.dragging = false;
    }

    /// Arm the spawn scheduler for a full period.
    pub fn arm_spawner(&mut self) {
        self.spawn_ticks = self.difficulty.spawn_interval_ticks();
    }
}
