//! Firing trigger finite state machine.
//!
//! Each touch-movement sample carries a pressure reading. The trigger
//! differentiates the series (delta, then jerk), fires on a hard press
//! or a fast rise, and latches until the pressure eases off so one
//! squeeze produces one bolt.

use serde::{Deserialize, Serialize};

use asterfall_core::constants::{FIRE_DELTA_THRESHOLD, TOUCH_FORCE_MAX};

/// Where the trigger is in its press cycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TriggerPhase {
    /// No touch in progress.
    #[default]
    Idle,
    /// Touch in progress, eligible to fire.
    Armed,
    /// Fired and latched; pressure has not eased yet.
    Fired,
    /// Pressure eased after a shot; eligible to fire again.
    Cooling,
}

/// Decision returned for each pressure sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FireDecision {
    Hold,
    Fire,
}

/// Differentiator state carried between samples.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TriggerState {
    pub phase: TriggerPhase,
    /// Last sampled pressure.
    pub force: f64,
    /// force - previous force.
    pub delta: f64,
    /// delta - previous delta.
    pub jerk: f64,
}

impl TriggerState {
    /// Feed one pressure sample and decide whether to fire.
    pub fn sample(&mut self, force: f64) -> FireDecision {
        let delta = force - self.force;
        let jerk = delta - self.delta;
        self.force = force;
        self.delta = delta;
        self.jerk = jerk;

        // Easing off unlatches before this sample is evaluated.
        if delta < 0.0 && self.phase == TriggerPhase::Fired {
            self.phase = TriggerPhase::Cooling;
        }

        match self.phase {
            TriggerPhase::Fired => FireDecision::Hold,
            TriggerPhase::Idle | TriggerPhase::Armed | TriggerPhase::Cooling => {
                // A pegged reading fires outright; otherwise a fast rise
                // fires regardless of the jerk's sign.
                if force >= TOUCH_FORCE_MAX || delta > FIRE_DELTA_THRESHOLD {
                    self.phase = TriggerPhase::Fired;
                    FireDecision::Fire
                } else {
                    if self.phase == TriggerPhase::Idle {
                        self.phase = TriggerPhase::Armed;
                    }
                    FireDecision::Hold
                }
            }
        }
    }

    /// The touch ended: zero the differentiators and disarm.
    pub fn release(&mut self) {
        *self = TriggerState::default();
    }

    /// Whether the latch is currently held.
    pub fn latched(&self) -> bool {
        self.phase == TriggerPhase::Fired
    }
}
