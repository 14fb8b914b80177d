//! Data-driven game balance
//!
//! Every gameplay number lives in [`Tuning`] so sessions can be replayed or
//! rebalanced from JSON without touching the simulation.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Difficulty preset levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum DifficultyPreset {
    Casual,
    #[default]
    Normal,
    Hard,
}

impl DifficultyPreset {
    pub fn as_str(&self) -> &'static str {
        match self {
            DifficultyPreset::Casual => "Casual",
            DifficultyPreset::Normal => "Normal",
            DifficultyPreset::Hard => "Hard",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "casual" | "easy" => Some(DifficultyPreset::Casual),
            "normal" => Some(DifficultyPreset::Normal),
            "hard" => Some(DifficultyPreset::Hard),
            _ => None,
        }
    }
}

/// Gameplay constants for one session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Field ===
    pub field_width: f32,
    pub field_height: f32,

    // === Paddle ===
    pub paddle_start_width: f32,
    pub paddle_min_width: f32,
    pub paddle_height: f32,
    pub paddle_y_offset: f32,
    pub paddle_shrink_amount: f32,
    pub paddle_shrink_interval_ms: u64,

    // === Ball ===
    pub ball_radius: f32,
    pub initial_ball_speed: f32,
    pub initial_ball_speed_x: f32,
    pub ball_max_speed_x: f32,
    pub paddle_deflection: f32,
    pub ball_speed_increment: f32,
    pub hits_to_speedup: u32,

    // === Island ===
    pub island_width: f32,
    pub island_height: f32,
    pub island_y: f32,

    // === Bonuses ===
    pub bonus_size: f32,
    pub bonus_fall_speed: f32,
    pub bonus_duration_ms: u64,
    pub bonus_spawn_chance: f64,
    pub multiball_extra_balls: u32,
    pub multiball_spread: f32,
    pub multiball_spawn_gap: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,

            paddle_start_width: PADDLE_START_WIDTH,
            paddle_min_width: PADDLE_MIN_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_y_offset: PADDLE_Y_OFFSET,
            paddle_shrink_amount: PADDLE_SHRINK_AMOUNT,
            paddle_shrink_interval_ms: PADDLE_SHRINK_INTERVAL_MS,

            ball_radius: BALL_RADIUS,
            initial_ball_speed: INITIAL_BALL_SPEED,
            initial_ball_speed_x: INITIAL_BALL_SPEED_X,
            ball_max_speed_x: BALL_MAX_SPEED_X,
            paddle_deflection: PADDLE_DEFLECTION,
            ball_speed_increment: BALL_SPEED_INCREMENT,
            hits_to_speedup: HITS_TO_SPEEDUP,

            island_width: ISLAND_WIDTH,
            island_height: ISLAND_HEIGHT,
            island_y: ISLAND_Y,

            bonus_size: BONUS_SIZE,
            bonus_fall_speed: BONUS_FALL_SPEED,
            bonus_duration_ms: BONUS_DURATION_MS,
            bonus_spawn_chance: BONUS_SPAWN_CHANCE,
            multiball_extra_balls: MULTIBALL_EXTRA_BALLS,
            multiball_spread: MULTIBALL_SPREAD,
            multiball_spawn_gap: MULTIBALL_SPAWN_GAP,
        }
    }
}

impl Tuning {
    /// Create tuning from a difficulty preset
    pub fn from_preset(preset: DifficultyPreset) -> Self {
        let mut tuning = Self::default();
        tuning.apply_preset(preset);
        tuning
    }

    /// Apply a difficulty preset on top of the current values
    pub fn apply_preset(&mut self, preset: DifficultyPreset) {
        match preset {
            DifficultyPreset::Casual => {
                self.paddle_shrink_interval_ms = 15_000;
                self.ball_speed_increment = 1.25;
                self.bonus_spawn_chance = 0.015;
            }
            DifficultyPreset::Normal => {}
            DifficultyPreset::Hard => {
                self.paddle_shrink_interval_ms = 7_000;
                self.hits_to_speedup = 4;
                self.bonus_duration_ms = 10_000;
            }
        }
    }

    /// Parse tuning from JSON; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let tuning: Self = serde_json::from_str(json)?;
        Ok(tuning.sanitized())
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Paddle top edge (y)
    #[inline]
    pub fn paddle_y(&self) -> f32 {
        self.field_height - self.paddle_y_offset
    }

    /// Fix values the simulation can't run with instead of rejecting the config
    pub(crate) fn sanitized(mut self) -> Self {
        if self.paddle_start_width > self.field_width {
            log::warn!(
                "paddle_start_width {} exceeds field_width {}, capping",
                self.paddle_start_width,
                self.field_width
            );
            self.paddle_start_width = self.field_width;
        }
        if self.paddle_min_width > self.field_width {
            log::warn!(
                "paddle_min_width {} exceeds field_width {}, capping",
                self.paddle_min_width,
                self.field_width
            );
            self.paddle_min_width = self.field_width;
        }
        if self.paddle_min_width > self.paddle_start_width {
            log::warn!(
                "paddle_min_width {} exceeds paddle_start_width {}, swapping",
                self.paddle_min_width,
                self.paddle_start_width
            );
            std::mem::swap(&mut self.paddle_min_width, &mut self.paddle_start_width);
        }
        if self.hits_to_speedup == 0 {
            log::warn!("hits_to_speedup must be at least 1");
            self.hits_to_speedup = 1;
        }
        self.bonus_spawn_chance = self.bonus_spawn_chance.clamp(0.0, 1.0);
        self.multiball_spread = self.multiball_spread.abs();
        self
    }
}
