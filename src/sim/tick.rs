//! Frame controller
//!
//! One call to [`tick`] is one frame. The update order is fixed and matters
//! for determinism: paddle, island, balls, bonuses, pruning, paddle shrink
//! timer, power-up timeouts, spawn roll.

use super::bonus::{apply_bonus, expire_bonuses, roll_spawn};
use super::state::{BallEvent, GameEvent, GamePhase, GameState};

/// Input commands for a single frame
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Where the player wants the paddle centered (pointer or touch x)
    pub target_x: Option<f32>,
    /// Start a fresh session before simulating this frame
    pub restart: bool,
    /// Demo mode - the paddle steers itself
    pub autopilot: bool,
}

/// Advance the game by one frame of `dt_ms` simulated milliseconds.
///
/// Returns the events of this frame in the order they happened. After game
/// over every tick is a no-op until one arrives with `restart` set.
pub fn tick(state: &mut GameState, input: &TickInput, dt_ms: u64) -> Vec<GameEvent> {
    let mut events = Vec::new();

    if input.restart {
        state.restart();
        log::info!("Session restarted at {} ms", state.time_ms);
        events.push(GameEvent::Restarted);
    }

    if state.phase == GamePhase::GameOver {
        return events;
    }

    state.time_ms += dt_ms;

    // 1. Paddle follows the input target (or holds its center)
    let target_x = if input.autopilot {
        autopilot_target(state)
    } else {
        input.target_x
    };
    let target_x = target_x.unwrap_or_else(|| state.paddle.center_x());
    state.paddle.update(target_x, state.tuning.field_width);

    // 2. Island is static; nothing to update

    // 3. Balls
    for i in 0..state.balls.len() {
        let Some(event) = state.balls[i].update(&state.paddle, &state.island, &state.tuning) else {
            continue;
        };
        match event {
            BallEvent::PaddleHit => events.push(GameEvent::PaddleHit),
            BallEvent::IslandHit => on_island_hit(state, &mut events),
            BallEvent::ExitedBottom => {
                // First ball out takes the shield
                if state.active_bonuses.shield {
                    state.active_bonuses.shield = false;
                    state.balls[i].rescue(state.tuning.field_height);
                    log::info!("Shield saved ball {}", state.balls[i].id);
                    events.push(GameEvent::ShieldConsumed);
                } else {
                    state.balls[i].deactivate();
                    events.push(GameEvent::BallLost);
                }
            }
        }
    }

    if state.all_balls_inactive() {
        state.phase = GamePhase::GameOver;
        log::info!("Game over - final score {}", state.score);
        events.push(GameEvent::GameOver { score: state.score });
    }

    // 4. Bonuses
    let (fall_speed, field_height) = (state.tuning.bonus_fall_speed, state.tuning.field_height);
    for i in 0..state.bonuses.len() {
        if let Some(kind) = state.bonuses[i].update(&state.paddle, fall_speed, field_height) {
            log::debug!("Collected {} bonus", kind.as_str());
            events.push(GameEvent::BonusCollected(kind));
            apply_bonus(state, kind, &mut events);
        }
    }

    // 5. Prune
    state.balls.retain(|b| b.active);
    state.bonuses.retain(|b| b.active);

    // 6. Paddle shrinks over time
    if state.time_ms.saturating_sub(state.paddle_shrink_timer_ms) > state.tuning.paddle_shrink_interval_ms {
        state.paddle.shrink();
        state.paddle_shrink_timer_ms = state.time_ms;
        events.push(GameEvent::PaddleShrunk {
            width: state.paddle.width,
        });
    }

    // 7. Power-up timeouts
    expire_bonuses(state, &mut events);

    // 8. Maybe drop a new bonus
    roll_spawn(state, &mut events);

    events
}

/// Score a point; every `hits_to_speedup`-th hit speeds up every ball
fn on_island_hit(state: &mut GameState, events: &mut Vec<GameEvent>) {
    state.score += 1;
    state.hits_on_island += 1;
    log::debug!("Island hit #{} (score {})", state.hits_on_island, state.score);
    events.push(GameEvent::IslandHit { score: state.score });

    if state.hits_on_island % state.tuning.hits_to_speedup.max(1) == 0 {
        let factor = state.tuning.ball_speed_increment;
        for ball in &mut state.balls {
            ball.speed_up(factor);
        }
        log::debug!("Speed up x{} after {} hits", factor, state.hits_on_island);
        events.push(GameEvent::SpeedUp {
            hits: state.hits_on_island,
        });
    }
}

/// Demo-mode paddle target.
///
/// Tracks the lowest ball that is falling toward the paddle; when nothing is
/// threatening, goes after the lowest falling bonus instead.
fn autopilot_target(state: &GameState) -> Option<f32> {
    let danger_line = state.tuning.field_height / 2.0;

    let falling_ball = state
        .balls
        .iter()
        .filter(|b| b.active && b.vel.y > 0.0)
        .max_by(|a, b| a.pos.y.total_cmp(&b.pos.y));

    let threatening = falling_ball.filter(|b| b.pos.y > danger_line);
    if let Some(ball) = threatening {
        // Aim slightly off center so the ball drifts toward the island
        let island_x = state.island.rect.center().x;
        let lean = if ball.pos.x < island_x { -0.2 } else { 0.2 };
        return Some(ball.pos.x + lean * state.paddle.width);
    }

    let bonus = state
        .bonuses
        .iter()
        .filter(|b| b.active)
        .max_by(|a, b| a.pos.y.total_cmp(&b.pos.y));
    if let Some(bonus) = bonus {
        return Some(bonus.rect().center().x);
    }

    falling_ball
        .or_else(|| state.balls.iter().find(|b| b.active))
        .map(|b| b.pos.x)
}
