//! Per-frame snapshot for the presentation layer
//!
//! The simulation never draws. After each tick the frame loop captures a
//! [`FrameView`] and hands it to whatever renders (canvas, terminal, JSON).

use glam::Vec2;
use serde::Serialize;

use crate::sim::{BonusKind, GameState, Rect};

/// Paddle fill (indigo-600)
pub const PADDLE_COLOR: &str = "#4f46e5";
/// Shield ring around the paddle (yellow-400)
pub const SHIELD_COLOR: &str = "#facc15";
/// Ball fill (amber-400)
pub const BALL_COLOR: &str = "#fbbf24";
/// Island fill (emerald-500)
pub const ISLAND_COLOR: &str = "#10b981";
pub const ISLAND_LABEL: &str = "Dynamic Island";
/// Shield ring sits this far outside half the paddle width
const SHIELD_RING_PADDING: f32 = 6.0;

/// Colour and icon for a bonus pickup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BonusStyle {
    pub color: &'static str,
    /// Font Awesome glyph
    pub icon: &'static str,
}

impl BonusStyle {
    /// Style lookup; unknown kinds get a grey "?"
    pub fn for_kind(kind: Option<BonusKind>) -> Self {
        let (color, icon) = match kind {
            Some(BonusKind::MultiBall) => ("#3b82f6", "\u{f0c2}"),
            Some(BonusKind::Shield) => ("#fbbf24", "\u{f132}"),
            Some(BonusKind::Shrink) => ("#ef4444", "\u{f068}"),
            Some(BonusKind::Grow) => ("#22c55e", "\u{f067}"),
            None => ("#9ca3af", "?"),
        };
        Self { color, icon }
    }

    /// Style for a kind name as it might arrive from outside
    pub fn for_name(name: &str) -> Self {
        Self::for_kind(BonusKind::from_str(name))
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct BallView {
    pub center: Vec2,
    pub radius: f32,
}

#[derive(Debug, Clone, Serialize)]
pub struct BonusView {
    pub rect: Rect,
    pub kind: BonusKind,
    pub style: BonusStyle,
}

/// Everything needed to draw one frame
#[derive(Debug, Clone, Serialize)]
pub struct FrameView {
    pub paddle: Rect,
    /// Radius of the shield ring around the paddle center, while shielded
    pub shield_ring: Option<f32>,
    pub island: Rect,
    pub balls: Vec<BallView>,
    pub bonuses: Vec<BonusView>,
    pub score_text: String,
    pub game_over: bool,
}

impl FrameView {
    /// Snapshot the drawable parts of the session; inactive entities are skipped
    pub fn capture(state: &GameState) -> Self {
        let paddle = state.paddle.rect();
        let shield_ring = state
            .active_bonuses
            .shield
            .then(|| paddle.width / 2.0 + SHIELD_RING_PADDING);

        Self {
            paddle,
            shield_ring,
            island: state.island.rect,
            balls: state
                .balls
                .iter()
                .filter(|b| b.active)
                .map(|b| BallView {
                    center: b.pos,
                    radius: b.radius,
                })
                .collect(),
            bonuses: state
                .bonuses
                .iter()
                .filter(|b| b.active)
                .map(|b| BonusView {
                    rect: b.rect(),
                    kind: b.kind,
                    style: BonusStyle::for_kind(Some(b.kind)),
                })
                .collect(),
            score_text: state.score_text(),
            game_over: state.is_game_over(),
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
