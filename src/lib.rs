//! Hit The Island - deflect balls into the Dynamic Island
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, power-ups, frame controller)
//! - `input`: Pointer/touch input state sampled once per frame
//! - `shop`: Mock in-app purchase flow and its effect on the session
//! - `view`: Per-frame snapshot handed to whatever draws the game
//! - `tuning`: Data-driven game balance

pub mod input;
pub mod shop;
pub mod sim;
pub mod tuning;
pub mod view;

pub use input::PointerInput;
pub use shop::{Shop, StatusMessage};
pub use tuning::{DifficultyPreset, Tuning};
pub use view::{BonusStyle, FrameView};

/// Game configuration constants (defaults for [`Tuning`])
pub mod consts {
    /// Frame interval used by the native runner (~60 Hz)
    pub const FRAME_MS: u64 = 16;

    /// Playfield dimensions
    pub const FIELD_WIDTH: f32 = 400.0;
    pub const FIELD_HEIGHT: f32 = 600.0;

    /// Paddle defaults
    pub const PADDLE_START_WIDTH: f32 = 80.0;
    pub const PADDLE_MIN_WIDTH: f32 = 40.0;
    pub const PADDLE_HEIGHT: f32 = 12.0;
    /// Distance from the paddle top to the bottom of the field
    pub const PADDLE_Y_OFFSET: f32 = 30.0;
    /// Width change for one shrink/grow step
    pub const PADDLE_SHRINK_AMOUNT: f32 = 10.0;
    pub const PADDLE_SHRINK_INTERVAL_MS: u64 = 10_000;

    /// Ball defaults (speeds are pixels per frame)
    pub const BALL_RADIUS: f32 = 8.0;
    pub const INITIAL_BALL_SPEED: f32 = 3.0;
    pub const INITIAL_BALL_SPEED_X: f32 = 2.0;
    pub const BALL_MAX_SPEED_X: f32 = 6.0;
    /// Horizontal kick per unit of off-centre paddle hit
    pub const PADDLE_DEFLECTION: f32 = 2.0;
    pub const BALL_SPEED_INCREMENT: f32 = 1.5;
    pub const HITS_TO_SPEEDUP: u32 = 5;

    /// Island (target) defaults
    pub const ISLAND_WIDTH: f32 = 120.0;
    pub const ISLAND_HEIGHT: f32 = 30.0;
    pub const ISLAND_Y: f32 = 40.0;

    /// Bonus defaults
    pub const BONUS_SIZE: f32 = 24.0;
    pub const BONUS_FALL_SPEED: f32 = 2.0;
    pub const BONUS_DURATION_MS: u64 = 15_000;
    /// Chance per frame of spawning a bonus
    pub const BONUS_SPAWN_CHANCE: f64 = 0.01;
    pub const MULTIBALL_EXTRA_BALLS: u32 = 2;
    /// Multiball spawns get a horizontal speed in [-spread, spread)
    pub const MULTIBALL_SPREAD: f32 = 2.0;
    /// Gap between a freshly spawned multiball ball and the paddle top
    pub const MULTIBALL_SPAWN_GAP: f32 = 2.0;
}

/// Clamp `value` into `[min, max]`
///
/// Unlike [`f32::clamp`] this never panics: if `min > max` the result is `max`.
#[inline]
pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
    value.max(min).min(max)
}
