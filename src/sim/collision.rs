//! Collision detection and response for the rectangular playfield
//!
//! All checks are deliberately loose: the ball's leading edge is tested
//! against a band, and its center against the target's horizontal span.
//! Balls move a few pixels per frame, so no sweep is needed.

use glam::Vec2;

use super::rect::Rect;
use crate::clamp;

/// Reflect off the left, right and top walls, clamping the ball back inside.
///
/// Returns true if any wall was touched. The bottom is open.
pub fn bounce_off_walls(pos: &mut Vec2, vel: &mut Vec2, radius: f32, field_width: f32) -> bool {
    let mut hit = false;

    if pos.x - radius < 0.0 {
        pos.x = radius;
        vel.x = -vel.x;
        hit = true;
    } else if pos.x + radius > field_width {
        pos.x = field_width - radius;
        vel.x = -vel.x;
        hit = true;
    }

    if pos.y - radius < 0.0 {
        pos.y = radius;
        vel.y = -vel.y;
        hit = true;
    }

    hit
}

/// Ball's bottom edge inside the paddle's vertical band and its center over the paddle
pub fn ball_hits_paddle(pos: Vec2, radius: f32, paddle: &Rect) -> bool {
    paddle.contains_y(pos.y + radius) && paddle.contains_x(pos.x)
}

/// Ball's top edge inside the island's vertical band and its center under the island
pub fn ball_hits_island(pos: Vec2, radius: f32, island: &Rect) -> bool {
    island.contains_y(pos.y - radius) && island.contains_x(pos.x)
}

/// Ball completely below the field
pub fn ball_below_field(pos: Vec2, radius: f32, field_height: f32) -> bool {
    pos.y - radius > field_height
}

/// Where along the paddle the ball landed: -0.5 at the left edge, 0.5 at the right
#[inline]
pub fn hit_offset(x: f32, paddle: &Rect) -> f32 {
    (x - paddle.x) / paddle.width - 0.5
}

/// Velocity after a paddle bounce.
///
/// Vertical speed is forced upward; off-center hits push the ball sideways,
/// with horizontal speed capped at `max_speed_x`.
pub fn paddle_deflection(vel: Vec2, x: f32, paddle: &Rect, deflection: f32, max_speed_x: f32) -> Vec2 {
    let speed_x = vel.x + hit_offset(x, paddle) * deflection;
    Vec2::new(clamp(speed_x, -max_speed_x, max_speed_x), -vel.y.abs())
}

/// Pickup box overlapping the paddle box
pub fn bonus_hits_paddle(bonus: &Rect, paddle: &Rect) -> bool {
    bonus.overlaps(paddle)
}
