//! Game state and core simulation types
//!
//! Entities own only their own geometry. Anything that touches another
//! entity or the session is reported back to the frame controller as an event.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision;
use super::rect::Rect;
use crate::clamp;
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Running,
    /// Every ball fell past the paddle; terminal until restart
    GameOver,
}

/// Something the frame produced that the presentation layer may care about
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    PaddleHit,
    IslandHit { score: u64 },
    SpeedUp { hits: u32 },
    ShieldConsumed,
    BallLost,
    BonusSpawned(BonusKind),
    BonusCollected(BonusKind),
    BonusExpired(BonusKind),
    PaddleShrunk { width: f32 },
    GameOver { score: u64 },
    Restarted,
}

/// The player's paddle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    /// Left edge
    pub x: f32,
    /// Top edge
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Narrowest the paddle can shrink to
    pub min_width: f32,
    /// Starting width, also the widest the paddle can grow to
    pub max_width: f32,
    /// Width change per shrink/grow
    pub step: f32,
}

impl Paddle {
    /// Centered paddle sitting `paddle_y_offset` above the bottom of the field
    pub fn new(tuning: &Tuning) -> Self {
        let width = tuning.paddle_start_width;
        Self {
            x: (tuning.field_width - width) / 2.0,
            y: tuning.paddle_y(),
            width,
            height: tuning.paddle_height,
            min_width: tuning.paddle_min_width,
            max_width: tuning.paddle_start_width,
            step: tuning.paddle_shrink_amount,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    #[inline]
    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }

    /// Center the paddle on `target_x`, kept inside the field
    pub fn update(&mut self, target_x: f32, field_width: f32) {
        self.x = clamp(target_x - self.width / 2.0, 0.0, field_width - self.width);
    }

    /// Narrow by one step, never below `min_width`
    pub fn shrink(&mut self) {
        if self.width > self.min_width {
            self.width = (self.width - self.step).max(self.min_width);
        }
    }

    /// Widen by one step, never above `max_width`
    pub fn grow(&mut self) {
        if self.width < self.max_width {
            self.width = (self.width + self.step).min(self.max_width);
        }
    }
}

/// What happened to a ball during its update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BallEvent {
    /// Bounced off the paddle
    PaddleHit,
    /// Bounced off the island; scores a point
    IslandHit,
    /// Fell past the bottom of the field; the caller decides its fate
    ExitedBottom,
}

/// A ball entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub id: u32,
    /// Center position
    pub pos: Vec2,
    /// Velocity in pixels per frame
    pub vel: Vec2,
    pub radius: f32,
    pub active: bool,
}

impl Ball {
    pub fn new(id: u32, pos: Vec2, vel: Vec2, radius: f32) -> Self {
        Self {
            id,
            pos,
            vel,
            radius,
            active: true,
        }
    }

    /// Advance one frame and resolve wall, paddle and island contacts.
    ///
    /// Returns at most one event; a bottom exit outranks an island hit, which
    /// outranks a paddle hit. Inactive balls don't move.
    pub fn update(&mut self, paddle: &Paddle, island: &Island, tuning: &Tuning) -> Option<BallEvent> {
        if !self.active {
            return None;
        }

        self.pos += self.vel;
        collision::bounce_off_walls(&mut self.pos, &mut self.vel, self.radius, tuning.field_width);

        let mut event = None;

        let paddle_rect = paddle.rect();
        if collision::ball_hits_paddle(self.pos, self.radius, &paddle_rect) {
            self.pos.y = paddle_rect.top() - self.radius;
            self.vel = collision::paddle_deflection(
                self.vel,
                self.pos.x,
                &paddle_rect,
                tuning.paddle_deflection,
                tuning.ball_max_speed_x,
            );
            event = Some(BallEvent::PaddleHit);
        }

        if collision::ball_hits_island(self.pos, self.radius, &island.rect) {
            self.pos.y = island.rect.bottom() + self.radius;
            self.vel.y = self.vel.y.abs();
            event = Some(BallEvent::IslandHit);
        }

        if collision::ball_below_field(self.pos, self.radius, tuning.field_height) {
            event = Some(BallEvent::ExitedBottom);
        }

        event
    }

    /// Remove the ball from play
    pub fn deactivate(&mut self) {
        self.active = false;
    }

    /// Put a ball that fell out back on the bottom edge, heading up.
    ///
    /// A shield save does more than keep the ball active: left below the
    /// field it would be lost again on the next frame, so it is bounced back in.
    pub fn rescue(&mut self, field_height: f32) {
        self.pos.y = field_height - self.radius;
        self.vel.y = -self.vel.y.abs();
    }

    /// Scale both velocity components
    pub fn speed_up(&mut self, factor: f32) {
        self.vel *= factor;
    }
}

/// The target; never moves during a session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Island {
    pub rect: Rect,
}

impl Island {
    /// Horizontally centered at `island_y`
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            rect: Rect::new(
                (tuning.field_width - tuning.island_width) / 2.0,
                tuning.island_y,
                tuning.island_width,
                tuning.island_height,
            ),
        }
    }
}

/// Power-up types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BonusKind {
    MultiBall,
    Shield,
    Shrink,
    Grow,
}

impl BonusKind {
    /// Spawn table; each kind is equally likely
    pub const ALL: [BonusKind; 4] = [
        BonusKind::MultiBall,
        BonusKind::Shield,
        BonusKind::Shrink,
        BonusKind::Grow,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BonusKind::MultiBall => "multiball",
            BonusKind::Shield => "shield",
            BonusKind::Shrink => "shrink",
            BonusKind::Grow => "grow",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "multiball" => Some(BonusKind::MultiBall),
            "shield" => Some(BonusKind::Shield),
            "shrink" => Some(BonusKind::Shrink),
            "grow" => Some(BonusKind::Grow),
            _ => None,
        }
    }

    /// Timed kinds stay active for `bonus_duration_ms`; the rest apply instantly
    pub fn is_timed(&self) -> bool {
        matches!(self, BonusKind::MultiBall | BonusKind::Shield)
    }
}

/// A falling power-up pickup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bonus {
    pub id: u32,
    pub kind: BonusKind,
    /// Top-left corner
    pub pos: Vec2,
    pub size: f32,
    pub active: bool,
}

impl Bonus {
    pub fn new(id: u32, kind: BonusKind, pos: Vec2, size: f32) -> Self {
        Self {
            id,
            kind,
            pos,
            size,
            active: true,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, self.size, self.size)
    }

    /// Fall one frame. Returns the kind exactly once, on the frame the
    /// paddle catches it.
    pub fn update(&mut self, paddle: &Paddle, fall_speed: f32, field_height: f32) -> Option<BonusKind> {
        if !self.active {
            return None;
        }

        self.pos.y += fall_speed;
        if self.pos.y > field_height {
            self.active = false;
            return None;
        }

        if collision::bonus_hits_paddle(&self.rect(), &paddle.rect()) {
            self.active = false;
            return Some(self.kind);
        }

        None
    }
}

/// Timed power-ups currently in effect
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveBonuses {
    pub shield: bool,
    pub multiball: bool,
}

/// Activation times (simulation ms) of the timed power-ups
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BonusTimers {
    pub shield_ms: u64,
    pub multiball_ms: u64,
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub tuning: Tuning,
    /// Simulation clock, advanced by each tick
    pub time_ms: u64,
    pub phase: GamePhase,
    pub score: u64,
    /// Island hits this session; drives the speed-up
    pub hits_on_island: u32,
    pub paddle: Paddle,
    pub island: Island,
    /// Balls in spawn order
    pub balls: Vec<Ball>,
    /// Falling pickups in spawn order
    pub bonuses: Vec<Bonus>,
    pub active_bonuses: ActiveBonuses,
    pub bonus_timers: BonusTimers,
    /// Last time the paddle shrank on its own
    pub paddle_shrink_timer_ms: u64,
    pub(crate) rng: Pcg32,
    next_id: u32,
}

impl GameState {
    /// Create a new session with default tuning
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    /// Create a new session; tuning values the simulation can't run with are
    /// fixed up rather than rejected
    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        let tuning = tuning.sanitized();
        let mut state = Self {
            seed,
            paddle: Paddle::new(&tuning),
            island: Island::new(&tuning),
            tuning,
            time_ms: 0,
            phase: GamePhase::Running,
            score: 0,
            hits_on_island: 0,
            balls: Vec::new(),
            bonuses: Vec::new(),
            active_bonuses: ActiveBonuses::default(),
            bonus_timers: BonusTimers::default(),
            paddle_shrink_timer_ms: 0,
            rng: Pcg32::seed_from_u64(seed),
            next_id: 1,
        };
        state.restart();
        log::info!("Session started (seed {})", seed);
        state
    }

    /// Reset the session in place: fresh paddle, island and ball, no bonuses,
    /// all timers restarted at the current clock. The RNG keeps its stream.
    pub fn restart(&mut self) {
        self.phase = GamePhase::Running;
        self.score = 0;
        self.hits_on_island = 0;
        self.paddle = Paddle::new(&self.tuning);
        self.island = Island::new(&self.tuning);
        self.balls.clear();
        self.bonuses.clear();
        self.active_bonuses = ActiveBonuses::default();
        self.bonus_timers = BonusTimers::default();
        self.paddle_shrink_timer_ms = self.time_ms;
        self.spawn_serve_ball();
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Spawn the opening ball in the middle of the field, heading up and right
    pub fn spawn_serve_ball(&mut self) {
        let id = self.next_entity_id();
        let t = &self.tuning;
        let pos = Vec2::new(t.field_width / 2.0, t.field_height / 2.0);
        let vel = Vec2::new(t.initial_ball_speed_x, -t.initial_ball_speed);
        let radius = t.ball_radius;
        self.balls.push(Ball::new(id, pos, vel, radius));
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// True when no ball is left in play (also true for an empty set)
    pub fn all_balls_inactive(&self) -> bool {
        self.balls.iter().all(|b| !b.active)
    }

    pub fn active_ball_count(&self) -> usize {
        self.balls.iter().filter(|b| b.active).count()
    }

    /// Score line shown to the player
    pub fn score_text(&self) -> String {
        format!("Score: {}", self.score)
    }
}
