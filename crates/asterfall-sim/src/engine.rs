//! Simulation engine — the core of the game.
//!
//! `SimulationEngine` owns the hecs ECS world and the session state,
//! processes player commands at tick boundaries, runs all systems, and
//! produces `GameStateSnapshot`s. Completely headless, enabling
//! deterministic testing.

use std::collections::VecDeque;

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use asterfall_core::commands::PlayerCommand;
use asterfall_core::components::{BodySize, Collider, MenuDrift};
use asterfall_core::constants::*;
use asterfall_core::difficulty::DifficultyProfile;
use asterfall_core::enums::{EntityKind, GamePhase};
use asterfall_core::events::FeedbackEvent;
use asterfall_core::state::GameStateSnapshot;
use asterfall_core::types::{Position, Rect, SimTime, Velocity};
use asterfall_input::FireDecision;

use crate::arena_setup;
use crate::session::GameSession;
use crate::systems;
use crate::systems::contact::ContactLedger;

/// Configuration for starting a new simulation.
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self { seed: 42 }
    }
}

/// The simulation engine. Owns the ECS world and all session state.
pub struct SimulationEngine {
    world: World,
    time: SimTime,
    session: GameSession,
    rng: ChaCha8Rng,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<hecs::Entity>,
    ledger: ContactLedger,
    events: Vec<FeedbackEvent>,
}

impl SimulationEngine {
    /// Create a new simulation engine with the given config.
    /// Starts on the main menu.
    pub fn new(config: SimConfig) -> Self {
        Self {
            world: World::new(),
            time: SimTime::default(),
            session: GameSession::default(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            ledger: ContactLedger::default(),
            events: Vec::new(),
        }
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    pub fn tick(&mut self) -> GameStateSnapshot {
        self.process_commands();

        match self.session.phase {
            GamePhase::Menu => {
                systems::menu_field::run(&mut self.world, &mut self.rng, &mut self.session);
                systems::movement::run(&mut self.world);
                systems::cleanup::run(&mut self.world, &mut self.despawn_buffer);
                self.time.advance();
            }
            GamePhase::Countdown => {
                systems::countdown::run(&mut self.session, &mut self.events);
                self.time.advance();
            }
            GamePhase::Playing => {
                self.run_playing_systems();
                self.time.advance();
            }
            // Frozen: timers and motion resume exactly where they left off.
            GamePhase::Paused | GamePhase::GameOver => {}
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(&self.world, &self.time, &self.session, events)
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.session.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get a read-only reference to the session state.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command. Commands that are not legal in
    /// the current phase are ignored.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::SelectDifficulty { tier } => {
                if self.session.phase == GamePhase::Menu {
                    self.session.difficulty = DifficultyProfile::for_tier(tier);
                }
            }
            PlayerCommand::StartGame => {
                if self.session.phase == GamePhase::Menu {
                    self.clear_menu_field();
                    self.begin_countdown();
                }
            }
            PlayerCommand::Pause => {
                if self.session.phase == GamePhase::Playing {
                    self.session.phase = GamePhase::Paused;
                    // Dropping the dynamic behaviors loses the one-shot
                    // impulses: in-flight bodies freeze for good.
                    self.freeze_bodies();
                }
            }
            PlayerCommand::Resume => {
                if self.session.phase == GamePhase::Paused {
                    self.session.phase = GamePhase::Playing;
                    // The spawn period restarts in full from here.
                    self.session.arm_spawner();
                }
            }
            PlayerCommand::Restart => {
                if matches!(
                    self.session.phase,
                    GamePhase::GameOver | GamePhase::Paused
                ) {
                    self.clear_bodies();
                    self.begin_countdown();
                }
            }
            PlayerCommand::QuitToMenu => {
                if matches!(
                    self.session.phase,
                    GamePhase::GameOver | GamePhase::Paused
                ) {
                    self.clear_bodies();
                    self.enter_menu();
                }
            }
            PlayerCommand::DragShip { x, y, force } => {
                if self.session.phase == GamePhase::Playing {
                    self.handle_drag(x, y, force);
                }
            }
            PlayerCommand::EndDrag => {
                if self.session.phase == GamePhase::Playing {
                    self.session.dragging = false;
                    self.session.trigger.release();
                }
            }
        }
    }

    /// Run all playing-phase systems in order.
    fn run_playing_systems(&mut self) {
        // 1. Spawn scheduling
        systems::spawner::run(&mut self.world, &mut self.rng, &mut self.session);
        // 2. Kinematic integration
        systems::movement::run(&mut self.world);
        // 3. Contact detection + physical response
        let contacts = systems::contact::run(&mut self.world, &mut self.ledger);
        // 4. Policy resolution (scoring, removal, game over)
        systems::resolution::run(&mut self.world, &mut self.session, contacts, &mut self.events);
        // 5. Out-of-arena sweep
        systems::cleanup::run(&mut self.world, &mut self.despawn_buffer);
    }

    /// A drag sample: move the ship if the point is on it, and feed the
    /// firing trigger.
    fn handle_drag(&mut self, x: f64, y: f64, force: f64) {
        let ship = {
            let mut query = self.world.query::<(&Collider, &Position, &BodySize)>();
            query
                .iter()
                .find(|(_, (collider, _, _))| collider.kind == EntityKind::Ship)
                .map(|(entity, (_, pos, size))| (entity, *pos, *size))
        };
        let (entity, pos, size) = match ship {
            Some(s) => s,
            None => return,
        };

        // Samples landing off the ship are ignored entirely.
        let rect = Rect::from_center(pos, size.width, size.height);
        if !rect.contains(Position::new(x, y)) {
            return;
        }

        // The ship rides the finger, confined to the visible screen.
        let screen = arena_setup::screen_rect();
        let clamped = Position::new(
            x.clamp(screen.min_x + size.width / 2.0, screen.max_x - size.width / 2.0),
            y.clamp(
                screen.min_y + size.height / 2.0,
                screen.max_y - size.height / 2.0,
            ),
        );
        if let Ok(mut ship_pos) = self.world.get::<&mut Position>(entity) {
            *ship_pos = clamped;
        }
        self.session.dragging = true;

        if self.session.trigger.sample(force) == FireDecision::Fire {
            arena_setup::spawn_laser(&mut self.world, clamped);
            self.events.push(FeedbackEvent::LaserFired {
                x: clamped.x,
                y: clamped.y - LASER_MUZZLE_OFFSET,
            });
        }
    }

    /// Tear down the menu field and start a fresh countdown.
    fn begin_countdown(&mut self) {
        self.session.begin_countdown();
        self.ledger.clear();
        arena_setup::spawn_ship(&mut self.world);
        self.events.push(FeedbackEvent::CountdownStep {
            value: COUNTDOWN_START,
        });
    }

    /// Back to the menu: reset the drifter cadence and throw the
    /// welcome burst.
    fn enter_menu(&mut self) {
        self.session.phase = GamePhase::Menu;
        self.session.menu_ticks = MENU_SPAWN_INTERVAL_TICKS;
        for _ in 0..MENU_RETURN_BURST {
            arena_setup::throw_menu_drifter(&mut self.world, &mut self.rng);
        }
    }

    /// Despawn every collidable body (ship included).
    fn clear_bodies(&mut self) {
        let doomed: Vec<hecs::Entity> = {
            let mut query = self.world.query::<&Collider>();
            query.iter().map(|(entity, _)| entity).collect()
        };
        for entity in doomed {
            let _ = self.world.despawn(entity);
        }
        self.ledger.clear();
    }

    /// Despawn every decorative drifter.
    fn clear_menu_field(&mut self) {
        let doomed: Vec<hecs::Entity> = {
            let mut query = self.world.query::<&MenuDrift>();
            query.iter().map(|(entity, _)| entity).collect()
        };
        for entity in doomed {
            let _ = self.world.despawn(entity);
        }
    }

    /// Zero every body's velocity (the pause impulse loss).
    fn freeze_bodies(&mut self) {
        for (_entity, (_collider, vel)) in self.world.query_mut::<(&Collider, &mut Velocity)>() {
            *vel = Velocity::default();
        }
    }

    // --- Test support ---

    /// Spawn an asteroid at an explicit position and velocity.
    #[cfg(test)]
    pub fn spawn_test_asteroid(&mut self, x: f64, y: f64, vx: f64, vy: f64) -> hecs::Entity {
        let size = self.session.difficulty.asteroid_size;
        self.world.spawn((
            Collider {
                kind: EntityKind::Asteroid,
            },
            Position::new(x, y),
            Velocity::new(vx, vy),
            BodySize {
                width: size,
                height: size,
            },
        ))
    }

    /// Spawn a laser bolt at an explicit position and velocity.
    #[cfg(test)]
    pub fn spawn_test_laser(&mut self, x: f64, y: f64, vx: f64, vy: f64) -> hecs::Entity {
        self.world.spawn((
            Collider {
                kind: EntityKind::Laser,
            },
            Position::new(x, y),
            Velocity::new(vx, vy),
            BodySize {
                width: LASER_WIDTH,
                height: LASER_HEIGHT,
            },
        ))
    }

    /// The live ship entity, if any.
    #[cfg(test)]
    pub fn ship_entity(&self) -> Option<hecs::Entity> {
        let mut query = self.world.query::<&Collider>();
        query
            .iter()
            .find(|(_, collider)| collider.kind == EntityKind::Ship)
            .map(|(entity, _)| entity)
    }

    /// Deliver a synthetic contact batch straight to the resolution
    /// policy, bypassing detection.
    #[cfg(test)]
    pub fn resolve_contacts(&mut self, contacts: Vec<systems::contact::ContactEvent>) {
        systems::resolution::run(&mut self.world, &mut self.session, contacts, &mut self.events);
    }

    /// Drain pending feedback events without ticking.
    #[cfg(test)]
    pub fn drain_events(&mut self) -> Vec<FeedbackEvent> {
        std::mem::take(&mut self.events)
    }
}
