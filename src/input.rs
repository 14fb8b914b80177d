//! Pointer and touch input
//!
//! Event handlers write here whenever the browser (or a test) reports a
//! move; the frame loop reads it once per tick. Only the latest sample
//! matters, so there is no queue.

use crate::sim::TickInput;

/// Latest pointer state in canvas coordinates
#[derive(Debug, Clone, Default)]
pub struct PointerInput {
    pub mouse_x: f32,
    /// Present while a finger is on the screen; wins over the mouse
    pub touch_x: Option<f32>,
    /// Restart requested since the last frame
    restart: bool,
}

impl PointerInput {
    /// Mouse starts at the middle of the field
    pub fn new(field_width: f32) -> Self {
        Self {
            mouse_x: field_width / 2.0,
            touch_x: None,
            restart: false,
        }
    }

    pub fn mouse_move(&mut self, x: f32) {
        self.mouse_x = x;
    }

    /// Record the first touch point, if any
    pub fn touch_move(&mut self, touches: &[f32]) {
        if let Some(&x) = touches.first() {
            self.touch_x = Some(x);
        }
    }

    pub fn touch_end(&mut self) {
        self.touch_x = None;
    }

    pub fn request_restart(&mut self) {
        self.restart = true;
    }

    /// Where the paddle should center
    pub fn target_x(&self) -> f32 {
        self.touch_x.unwrap_or(self.mouse_x)
    }

    /// Build this frame's input, consuming one-shot requests
    pub fn take_tick_input(&mut self) -> TickInput {
        TickInput {
            target_x: Some(self.target_x()),
            restart: std::mem::take(&mut self.restart),
            autopilot: false,
        }
    }
}
