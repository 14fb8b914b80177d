//! Axis-aligned rectangle geometry for the paddle, island and bonuses
//!
//! Screen space: x grows to the right, y grows downward, (0, 0) is the
//! top-left corner of the field.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle anchored at its top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Check if `x` lies within the horizontal span (edges included)
    #[inline]
    pub fn contains_x(&self, x: f32) -> bool {
        x >= self.left() && x <= self.right()
    }

    /// Check if `y` lies within the vertical span (edges included)
    #[inline]
    pub fn contains_y(&self, y: f32) -> bool {
        y >= self.top() && y <= self.bottom()
    }

    /// Loose AABB overlap; touching edges count as overlapping
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.bottom() >= other.top()
            && self.top() <= other.bottom()
            && self.right() >= other.left()
            && self.left() <= other.right()
    }
}
