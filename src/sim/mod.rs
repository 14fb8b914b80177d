//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Simulation clock only (no wall-clock reads)
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod bonus;
pub mod collision;
pub mod rect;
pub mod state;
pub mod tick;

pub use bonus::{apply_bonus, expire_bonuses, roll_spawn};
pub use rect::Rect;
pub use state::{
    ActiveBonuses, Ball, BallEvent, Bonus, BonusKind, BonusTimers, GameEvent, GamePhase,
    GameState, Island, Paddle,
};
pub use tick::{TickInput, tick};
