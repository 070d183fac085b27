//! PlayerStatState - Persistent attribute state for the player

mod aggregator;
mod computed;

pub use aggregator::{Contribution, ModifierAccumulator};

use crate::types::{Attribute, PlayerKind, StatArray};
use serde::{Deserialize, Serialize};

/// Dirty flags for the display layer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RedrawFlags {
    pub stats: StatArray<bool>,
    pub armour_class: bool,
    pub evasion: bool,
}

impl RedrawFlags {
    pub fn any(&self) -> bool {
        self.armour_class || self.evasion || self.stats.iter().any(|(_, dirty)| dirty)
    }
}

/// Complete attribute state for the player
///
/// Derived values (current and maximum attributes) are never stored; they
/// are recomputed from this state and the world on every query.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerStatState {
    // === Identity ===
    #[serde(default)]
    pub kind: PlayerKind,

    // === Persistent values ===
    /// Permanent values set by level gain and base drain
    pub base_stats: StatArray<i32>,
    /// Accumulated temporary drain
    #[serde(default)]
    pub stat_loss: StatArray<i32>,
    /// Zero-stat turn counter
    #[serde(default)]
    pub stat_zero: StatArray<i32>,
    /// A level-gain choice is still owed
    #[serde(default)]
    pub stat_gain_prompt: bool,

    // === Display ===
    #[serde(skip)]
    pub redraw_stats: StatArray<bool>,
    #[serde(skip)]
    pub redraw_armour_class: bool,
    #[serde(skip)]
    pub redraw_evasion: bool,
}

impl Default for PlayerStatState {
    fn default() -> Self {
        Self::new(PlayerKind::Standard, [10, 10, 10])
    }
}

impl PlayerStatState {
    /// Create state for a new character from its starting attributes
    /// (strength, intelligence, dexterity)
    pub fn new(kind: PlayerKind, base: [i32; 3]) -> Self {
        PlayerStatState {
            kind,
            base_stats: StatArray(base),
            stat_loss: StatArray::splat(0),
            stat_zero: StatArray::splat(0),
            stat_gain_prompt: false,
            redraw_stats: StatArray::splat(true),
            redraw_armour_class: true,
            redraw_evasion: true,
        }
    }

    pub fn base(&self, attribute: Attribute) -> i32 {
        self.base_stats[attribute]
    }

    pub fn loss(&self, attribute: Attribute) -> i32 {
        self.stat_loss[attribute]
    }

    pub fn zero_turns(&self, attribute: Attribute) -> i32 {
        self.stat_zero[attribute]
    }

    /// Whether any attribute has accumulated loss
    pub fn has_loss(&self) -> bool {
        self.stat_loss.iter().any(|(_, loss)| loss > 0)
    }

    /// Read and clear the dirty flags
    pub fn take_redraw(&mut self) -> RedrawFlags {
        let flags = RedrawFlags {
            stats: self.redraw_stats,
            armour_class: self.redraw_armour_class,
            evasion: self.redraw_evasion,
        };
        self.redraw_stats = StatArray::splat(false);
        self.redraw_armour_class = false;
        self.redraw_evasion = false;
        flags
    }

    /// Clear everything a finished game leaves behind
    pub fn reset(&mut self, base: [i32; 3]) {
        *self = Self::new(self.kind, base);
    }
}
