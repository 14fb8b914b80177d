//! Power-up manager: effects, spawning and timeouts

use glam::Vec2;
use rand::Rng;

use super::state::{Ball, Bonus, BonusKind, GameEvent, GameState};

/// Apply a collected (or purchased) power-up to the session
pub fn apply_bonus(state: &mut GameState, kind: BonusKind, events: &mut Vec<GameEvent>) {
    match kind {
        BonusKind::MultiBall => {
            // Latch: a second pickup while active does nothing
            if state.active_bonuses.multiball {
                return;
            }
            state.active_bonuses.multiball = true;
            state.bonus_timers.multiball_ms = state.time_ms;
            spawn_multiball(state);
            log::info!("Multiball active ({} balls)", state.balls.len());
        }
        BonusKind::Shield => {
            state.active_bonuses.shield = true;
            state.bonus_timers.shield_ms = state.time_ms;
            log::info!("Shield active");
        }
        BonusKind::Shrink => {
            state.paddle.shrink();
            events.push(GameEvent::PaddleShrunk {
                width: state.paddle.width,
            });
        }
        BonusKind::Grow => {
            state.paddle.grow();
        }
    }
}

/// Launch the extra multiball balls from the paddle center
fn spawn_multiball(state: &mut GameState) {
    let t = &state.tuning;
    let origin = Vec2::new(
        state.paddle.center_x(),
        state.paddle.y - t.ball_radius - t.multiball_spawn_gap,
    );
    let (count, spread, speed, radius) = (
        t.multiball_extra_balls,
        t.multiball_spread,
        t.initial_ball_speed,
        t.ball_radius,
    );

    for _ in 0..count {
        let speed_x = state.rng.random::<f32>() * 2.0 * spread - spread;
        let id = state.next_entity_id();
        state
            .balls
            .push(Ball::new(id, origin, Vec2::new(speed_x, -speed), radius));
    }
}

/// Roll the per-frame spawn chance; on success drop a random bonus from the top
pub fn roll_spawn(state: &mut GameState, events: &mut Vec<GameEvent>) {
    if state.rng.random::<f64>() >= state.tuning.bonus_spawn_chance {
        return;
    }

    let kind = BonusKind::ALL[state.rng.random_range(0..BonusKind::ALL.len())];
    let size = state.tuning.bonus_size;
    let x = state.rng.random::<f32>() * (state.tuning.field_width - size);
    let id = state.next_entity_id();
    state.bonuses.push(Bonus::new(id, kind, Vec2::new(x, -size), size));

    log::debug!("Spawned {} bonus at x={:.1}", kind.as_str(), x);
    events.push(GameEvent::BonusSpawned(kind));
}

/// Switch off timed power-ups that outlived their duration.
///
/// Multiball ending drops every ball but the first.
pub fn expire_bonuses(state: &mut GameState, events: &mut Vec<GameEvent>) {
    let now = state.time_ms;
    let duration = state.tuning.bonus_duration_ms;

    if state.active_bonuses.shield && now.saturating_sub(state.bonus_timers.shield_ms) > duration {
        state.active_bonuses.shield = false;
        log::info!("Shield expired");
        events.push(GameEvent::BonusExpired(BonusKind::Shield));
    }

    if state.active_bonuses.multiball && now.saturating_sub(state.bonus_timers.multiball_ms) > duration {
        state.active_bonuses.multiball = false;
        state.balls.truncate(1);
        log::info!("Multiball expired");
        events.push(GameEvent::BonusExpired(BonusKind::MultiBall));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;

    #[test]
    fn test_multiball_is_latched() {
        let mut state = GameState::new(42);
        let mut events = Vec::new();

        apply_bonus(&mut state, BonusKind::MultiBall, &mut events);
        apply_bonus(&mut state, BonusKind::MultiBall, &mut events);

        assert_eq!(state.balls.len(), 3);
        assert!(state.active_bonuses.multiball);
    }

    #[test]
    fn test_multiball_spawn_from_paddle() {
        let mut state = GameState::new(7);
        let mut events = Vec::new();
        apply_bonus(&mut state, BonusKind::MultiBall, &mut events);

        let paddle_center = state.paddle.center_x();
        for ball in &state.balls[1..] {
            assert_eq!(ball.pos.x, paddle_center);
            assert_eq!(ball.pos.y, state.paddle.y - BALL_RADIUS - MULTIBALL_SPAWN_GAP);
            assert_eq!(ball.vel.y, -INITIAL_BALL_SPEED);
            assert!(ball.vel.x >= -MULTIBALL_SPREAD && ball.vel.x < MULTIBALL_SPREAD);
        }
    }

    #[test]
    fn test_shield_reactivation_resets_timer() {
        let mut state = GameState::new(1);
        let mut events = Vec::new();
        apply_bonus(&mut state, BonusKind::Shield, &mut events);
        state.time_ms = 10_000;
        apply_bonus(&mut state, BonusKind::Shield, &mut events);
        assert_eq!(state.bonus_timers.shield_ms, 10_000);

        // 15s after the first pickup, but not after the second
        state.time_ms = 15_001;
        expire_bonuses(&mut state, &mut events);
        assert!(state.active_bonuses.shield);

        state.time_ms = 25_001;
        expire_bonuses(&mut state, &mut events);
        assert!(!state.active_bonuses.shield);
        assert_eq!(events, vec![GameEvent::BonusExpired(BonusKind::Shield)]);
    }

    #[test]
    fn test_multiball_timeout_keeps_first_ball() {
        let mut state = GameState::new(9);
        let mut events = Vec::new();
        let first_id = state.balls[0].id;
        apply_bonus(&mut state, BonusKind::MultiBall, &mut events);

        state.time_ms = BONUS_DURATION_MS;
        expire_bonuses(&mut state, &mut events);
        assert_eq!(state.balls.len(), 3, "timeout is strictly greater than duration");

        state.time_ms = BONUS_DURATION_MS + 1;
        expire_bonuses(&mut state, &mut events);
        assert!(!state.active_bonuses.multiball);
        assert_eq!(state.balls.len(), 1);
        assert_eq!(state.balls[0].id, first_id);

        // Latch released: multiball works again
        apply_bonus(&mut state, BonusKind::MultiBall, &mut events);
        assert_eq!(state.balls.len(), 3);
    }

    #[test]
    fn test_shrink_and_grow_effects() {
        let mut state = GameState::new(1);
        let mut events = Vec::new();
        apply_bonus(&mut state, BonusKind::Shrink, &mut events);
        assert_eq!(state.paddle.width, PADDLE_START_WIDTH - PADDLE_SHRINK_AMOUNT);
        apply_bonus(&mut state, BonusKind::Grow, &mut events);
        assert_eq!(state.paddle.width, PADDLE_START_WIDTH);
    }

    #[test]
    fn test_spawn_always_and_never() {
        let mut state = GameState::new(5);
        let mut events = Vec::new();

        state.tuning.bonus_spawn_chance = 0.0;
        for _ in 0..100 {
            roll_spawn(&mut state, &mut events);
        }
        assert!(state.bonuses.is_empty());

        state.tuning.bonus_spawn_chance = 1.0;
        roll_spawn(&mut state, &mut events);
        assert_eq!(state.bonuses.len(), 1);
        let bonus = &state.bonuses[0];
        assert_eq!(bonus.pos.y, -BONUS_SIZE);
        assert!(bonus.pos.x >= 0.0 && bonus.pos.x <= FIELD_WIDTH - BONUS_SIZE);
        assert!(matches!(events.as_slice(), [GameEvent::BonusSpawned(_)]));
    }
}
