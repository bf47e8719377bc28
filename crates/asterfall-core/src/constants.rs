//! Simulation constants and tuning parameters.

use std::f64::consts::PI;

/// Simulation tick rate (Hz). 60 makes every timer in the game an
/// integral number of ticks (0.25 s, 0.5 s, 0.8 s, 0.9 s).
pub const TICK_RATE: u32 = 60;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- Screen and arena ---

/// Visible screen width in points.
pub const SCREEN_WIDTH: f64 = 375.0;

/// Visible screen height in points.
pub const SCREEN_HEIGHT: f64 = 667.0;

/// The arena extends this far past every screen edge.
pub const ARENA_MARGIN: f64 = 80.0;

/// An asteroid reaching this far past the bottom screen edge counts as
/// dodged (the bottom arena edge lies exactly here).
pub const BOTTOM_DODGE_MARGIN: f64 = 80.0;

// --- Ship ---

pub const SHIP_WIDTH: f64 = 60.0;
pub const SHIP_HEIGHT: f64 = 100.0;

/// Ship staging position after the fly-in, roughly a third up the screen.
pub const SHIP_STAGE_X: f64 = SCREEN_WIDTH / 2.0;
pub const SHIP_STAGE_Y: f64 = SCREEN_HEIGHT - 150.0;

// --- Asteroid spawning ---

/// Spawn y: 20 points below the arena's top edge (above the visible screen).
pub const SPAWN_EDGE_INSET: f64 = 20.0;

/// Base launch angle: straight down in y-down coordinates.
pub const SPAWN_ANGLE_BASE: f64 = PI / 2.0;

/// Maximum deviation from the base angle (±22.5°).
pub const SPAWN_ANGLE_SPREAD: f64 = PI / 8.0;

/// Impulse magnitude floor; the roll adds `uniform(0..speed_scale)`.
pub const SPAWN_MAGNITUDE_FLOOR: f64 = 0.5;

// --- Impulse model ---

/// Points/s per unit impulse magnitude on a reference-mass body.
pub const IMPULSE_SPEED_SCALE: f64 = 120.0;

/// Mass 1.0 corresponds to a 60×60 body; mass scales with area.
pub const REFERENCE_BODY_AREA: f64 = 3600.0;

// --- Laser ---

pub const LASER_WIDTH: f64 = 2.0;
pub const LASER_HEIGHT: f64 = 40.0;

/// Muzzle offset: the bolt appears this far above the ship's center.
pub const LASER_MUZZLE_OFFSET: f64 = 95.0;

/// Fixed upward launch angle.
pub const LASER_ANGLE: f64 = -PI / 2.0;

/// Fixed impulse magnitude for a bolt.
pub const LASER_IMPULSE_MAGNITUDE: f64 = 0.2;

// --- Firing trigger ---

/// Maximum reportable touch pressure.
pub const TOUCH_FORCE_MAX: f64 = 6.67;

/// A single-sample force rise above this fires the trigger.
pub const FIRE_DELTA_THRESHOLD: f64 = 0.3;

// --- Countdown ---

/// The pre-game countdown starts here and steps down to zero.
pub const COUNTDOWN_START: u8 = 3;

/// One countdown step: 0.2 s scale-in + 0.2 s hold + 0.5 s fade.
pub const COUNTDOWN_STEP_SECS: f64 = 0.9;

pub const COUNTDOWN_STEP_TICKS: u64 = (COUNTDOWN_STEP_SECS * TICK_RATE as f64) as u64;

// --- Menu field ---

/// Decorative drifter size on the main menu.
pub const MENU_ASTEROID_SIZE: f64 = 30.0;

/// One drifter is thrown every half second.
pub const MENU_SPAWN_INTERVAL_SECS: f64 = 0.5;

pub const MENU_SPAWN_INTERVAL_TICKS: u64 = (MENU_SPAWN_INTERVAL_SECS * TICK_RATE as f64) as u64;

/// Drifters thrown immediately when returning to the menu.
pub const MENU_RETURN_BURST: u32 = 3;
