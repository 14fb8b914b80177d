//! Mock in-app purchases
//!
//! Nothing here talks to a store: every purchase succeeds immediately and
//! flips a flag. The only purchase that touches gameplay is the multiball
//! bonus pack, which fires the multiball effect on the running session.

use serde::{Deserialize, Serialize};

use crate::sim::{BonusKind, GameEvent, GameState, apply_bonus};

/// How long a status line stays visible (simulation ms)
pub const STATUS_DISPLAY_MS: u64 = 4_000;

/// A transient message for the purchase status line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusMessage {
    pub text: String,
    /// When the message was posted
    pub shown_at_ms: u64,
}

impl StatusMessage {
    pub fn is_visible(&self, now_ms: u64) -> bool {
        now_ms.saturating_sub(self.shown_at_ms) < STATUS_DISPLAY_MS
    }
}

/// Purchase flags plus the current status line
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Shop {
    pub remove_ads: bool,
    pub bonus_pack: bool,
    pub vip: bool,
    status: Option<StatusMessage>,
}

impl Shop {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn purchase_remove_ads(&mut self, now_ms: u64) {
        self.remove_ads = true;
        self.post("Ads removed successfully.", now_ms);
    }

    /// Buy a bonus pack by id. Only `"multiball"` exists; it applies the
    /// multiball effect right away, without a pickup.
    pub fn purchase_bonus_pack(&mut self, pack_id: &str, state: &mut GameState) -> Vec<GameEvent> {
        let mut events = Vec::new();
        match BonusKind::from_str(pack_id) {
            Some(BonusKind::MultiBall) => {
                apply_bonus(state, BonusKind::MultiBall, &mut events);
                self.bonus_pack = true;
                self.post("Bonus pack purchased: Multiball.", state.time_ms);
            }
            _ => {
                log::warn!("Unknown bonus pack '{}'", pack_id);
                self.post("Unknown bonus pack.", state.time_ms);
            }
        }
        events
    }

    /// Mock restore: grants everything
    pub fn restore_purchases(&mut self, now_ms: u64) {
        self.remove_ads = true;
        self.bonus_pack = true;
        self.vip = true;
        self.post("Purchases restored.", now_ms);
    }

    pub fn activate_vip_mode(&mut self, now_ms: u64) {
        self.vip = true;
        self.post("VIP mode activated.", now_ms);
    }

    pub fn is_vip(&self) -> bool {
        self.vip
    }

    /// Status text to show at `now_ms`, if any
    pub fn status(&self, now_ms: u64) -> Option<&str> {
        self.status
            .as_ref()
            .filter(|s| s.is_visible(now_ms))
            .map(|s| s.text.as_str())
    }

    fn post(&mut self, text: &str, now_ms: u64) {
        log::info!("{}", text);
        self.status = Some(StatusMessage {
            text: text.to_string(),
            shown_at_ms: now_ms,
        });
    }
}
