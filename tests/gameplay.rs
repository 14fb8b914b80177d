use glam::Vec2;
use proptest::prelude::*;

use hit_island::consts::*;
use hit_island::sim::collision::bounce_off_walls;
use hit_island::sim::{Ball, BonusKind, GameEvent, GamePhase, GameState, TickInput, apply_bonus, tick};
use hit_island::{PointerInput, Shop, Tuning};

/// Session with spawning switched off so scenarios stay exact
fn quiet_state() -> GameState {
    let mut state = GameState::new(2024);
    state.tuning.bonus_spawn_chance = 0.0;
    state
}

/// Put the ball just under the island, heading up into it
fn aim_at_island(state: &mut GameState) {
    let ball = &mut state.balls[0];
    ball.pos = Vec2::new(200.0, 80.0);
    ball.vel = Vec2::new(ball.vel.x, -ball.vel.y.abs());
}

#[test]
fn three_hits_score_without_speedup() {
    let mut state = quiet_state();
    let input = TickInput::default();

    for _ in 0..3 {
        aim_at_island(&mut state);
        tick(&mut state, &input, FRAME_MS);
    }

    assert_eq!(state.score, 3);
    assert_eq!(state.hits_on_island, 3);
    assert_eq!(state.balls[0].vel.x.abs(), 2.0);
    assert_eq!(state.balls[0].vel.y.abs(), 3.0);
}

#[test]
fn speedup_fires_only_on_multiples() {
    let mut state = quiet_state();
    let input = TickInput::default();
    let mut speedups = Vec::new();

    for hit in 1..=15u32 {
        aim_at_island(&mut state);
        let speed_before = state.balls[0].vel.y.abs();
        let events = tick(&mut state, &input, FRAME_MS);

        let sped_up = events.contains(&GameEvent::SpeedUp { hits: hit });
        if sped_up {
            speedups.push(hit);
            let ratio = state.balls[0].vel.y.abs() / speed_before;
            assert!((ratio - BALL_SPEED_INCREMENT).abs() < 1e-4);
        } else {
            assert_eq!(state.balls[0].vel.y.abs(), speed_before);
        }
    }

    assert_eq!(speedups, vec![5, 10, 15]);
}

#[test]
fn paddle_width_floors_at_minimum() {
    let mut state = quiet_state();
    let mut events = Vec::new();
    for _ in 0..5 {
        apply_bonus(&mut state, BonusKind::Shrink, &mut events);
    }
    assert_eq!(state.paddle.width, PADDLE_MIN_WIDTH);
}

#[test]
fn multiball_twice_adds_two_balls() {
    let mut state = quiet_state();
    let mut events = Vec::new();
    apply_bonus(&mut state, BonusKind::MultiBall, &mut events);
    apply_bonus(&mut state, BonusKind::MultiBall, &mut events);
    assert_eq!(state.balls.len(), 3);
}

#[test]
fn shield_saves_exactly_one_ball() {
    let mut state = quiet_state();
    state.balls[0].pos = Vec2::new(50.0, 606.0);
    state.balls[0].vel = Vec2::new(0.0, 3.0);
    let id = state.next_entity_id();
    state
        .balls
        .push(Ball::new(id, Vec2::new(350.0, 606.0), Vec2::new(0.0, 3.0), BALL_RADIUS));
    apply_bonus(&mut state, BonusKind::Shield, &mut Vec::new());

    tick(&mut state, &TickInput::default(), FRAME_MS);

    assert!(!state.active_bonuses.shield);
    assert_eq!(state.active_ball_count(), 1);
    assert_eq!(state.phase, GamePhase::Running);
}

#[test]
fn losing_every_ball_ends_the_session() {
    let mut state = quiet_state();
    let mut events = Vec::new();
    apply_bonus(&mut state, BonusKind::MultiBall, &mut events);
    for ball in &mut state.balls {
        ball.pos = Vec2::new(100.0, 607.0);
        ball.vel = Vec2::new(0.0, 3.0);
    }

    let events = tick(&mut state, &TickInput::default(), FRAME_MS);
    assert!(events.contains(&GameEvent::GameOver { score: 0 }));
    assert_eq!(state.phase, GamePhase::GameOver);

    let snapshot = serde_json::to_string(&state).unwrap();
    for _ in 0..10 {
        assert!(tick(&mut state, &TickInput::default(), FRAME_MS).is_empty());
    }
    assert_eq!(serde_json::to_string(&state).unwrap(), snapshot);
}

#[test]
fn purchased_multiball_expires_back_to_one_ball() {
    let mut state = quiet_state();
    let mut shop = Shop::new();
    shop.purchase_bonus_pack("multiball", &mut state);
    assert_eq!(state.balls.len(), 3);

    // Keep every ball bouncing high in the field so none is lost
    let input = TickInput::default();
    let frames = BONUS_DURATION_MS / FRAME_MS + 2;
    let mut expired = false;
    for _ in 0..frames {
        for ball in &mut state.balls {
            ball.pos.y = 300.0;
        }
        let events = tick(&mut state, &input, FRAME_MS);
        expired |= events.contains(&GameEvent::BonusExpired(BonusKind::MultiBall));
    }

    assert!(expired);
    assert!(!state.active_bonuses.multiball);
    assert_eq!(state.balls.len(), 1);
}

#[test]
fn pointer_input_drives_paddle() {
    let mut state = quiet_state();
    let mut pointer = PointerInput::new(FIELD_WIDTH);
    pointer.mouse_move(30.0);
    pointer.touch_move(&[330.0]);

    tick(&mut state, &pointer.take_tick_input(), FRAME_MS);
    assert_eq!(state.paddle.center_x(), 330.0);

    pointer.touch_end();
    tick(&mut state, &pointer.take_tick_input(), FRAME_MS);
    assert_eq!(state.paddle.x, 0.0);
}

#[test]
fn custom_field_from_json() {
    let tuning = Tuning::from_json(r#"{ "field_width": 320.0, "field_height": 480.0 }"#).unwrap();
    let state = GameState::with_tuning(1, tuning);
    assert_eq!(state.paddle.y, 480.0 - PADDLE_Y_OFFSET);
    assert_eq!(state.balls[0].pos, Vec2::new(160.0, 240.0));
}

#[test]
fn hand_built_zero_speedup_session_keeps_scoring() {
    let tuning = Tuning {
        hits_to_speedup: 0,
        bonus_spawn_chance: 0.0,
        ..Default::default()
    };
    let mut state = GameState::with_tuning(7, tuning);

    for _ in 0..3 {
        aim_at_island(&mut state);
        tick(&mut state, &TickInput::default(), FRAME_MS);
    }
    assert_eq!(state.score, 3);
}

#[test]
fn paddle_wider_than_field_is_capped() {
    let tuning = Tuning::from_json(r#"{ "paddle_start_width": 500.0 }"#).unwrap();
    let mut state = GameState::with_tuning(7, tuning);

    for target in [0.0, FIELD_WIDTH, -100.0] {
        let input = TickInput { target_x: Some(target), ..Default::default() };
        tick(&mut state, &input, FRAME_MS);
        assert!(state.paddle.x >= 0.0);
        assert!(state.paddle.x <= FIELD_WIDTH - state.paddle.width);
    }
    assert_eq!(state.paddle.width, FIELD_WIDTH);
}

proptest! {
    #[test]
    fn paddle_stays_in_field(target in -2000.0f32..2000.0, shrinks in 0usize..8) {
        let mut state = quiet_state();
        for _ in 0..shrinks {
            state.paddle.shrink();
        }
        let input = TickInput { target_x: Some(target), ..Default::default() };
        tick(&mut state, &input, FRAME_MS);

        prop_assert!(state.paddle.x >= 0.0);
        prop_assert!(state.paddle.x <= FIELD_WIDTH - state.paddle.width);
        prop_assert!(state.paddle.width >= PADDLE_MIN_WIDTH);
    }

    #[test]
    fn wall_bounce_mirrors_velocity(
        x in -10.0f32..410.0,
        y in -10.0f32..600.0,
        vx in -8.0f32..8.0,
        vy in -8.0f32..8.0,
    ) {
        let mut pos = Vec2::new(x, y);
        let mut vel = Vec2::new(vx, vy);
        bounce_off_walls(&mut pos, &mut vel, BALL_RADIUS, FIELD_WIDTH);

        let hit_side = x - BALL_RADIUS < 0.0 || x + BALL_RADIUS > FIELD_WIDTH;
        let hit_top = y - BALL_RADIUS < 0.0;

        prop_assert_eq!(vel.x, if hit_side { -vx } else { vx });
        prop_assert_eq!(vel.y, if hit_top { -vy } else { vy });
        prop_assert!(pos.x - BALL_RADIUS >= 0.0 && pos.x + BALL_RADIUS <= FIELD_WIDTH);
        prop_assert!(pos.y - BALL_RADIUS >= 0.0);
    }

    #[test]
    fn one_island_hit_per_update(x in 140.0f32..260.0, vx in -6.0f32..6.0) {
        let mut state = quiet_state();
        state.balls[0].pos = Vec2::new(x, 80.0);
        state.balls[0].vel = Vec2::new(vx, -3.0);

        let events = tick(&mut state, &TickInput::default(), FRAME_MS);
        let hits = events.iter().filter(|e| matches!(e, GameEvent::IslandHit { .. })).count();
        prop_assert!(hits <= 1);
        prop_assert!(state.score <= 1);
    }
}
