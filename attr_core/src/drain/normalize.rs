//! Post-change normalization

use super::StatEngine;
use crate::types::Attribute;
use crate::world::PlayerWorld;
use rand::Rng;
use tracing::trace;

impl<'a, W: PlayerWorld, R: Rng> StatEngine<'a, W, R> {
    /// Run after every change to base, loss or modifiers of `attribute`
    pub fn handle_stat_change(&mut self, attribute: Attribute, see_source: bool) {
        if self.value(attribute) <= 0 && self.state.stat_zero[attribute] == 0 {
            self.enter_zero(attribute);
        }

        self.state.redraw_stats[attribute] = true;
        self.normalize(attribute);

        if attribute.profile().affects_defenses {
            self.state.redraw_armour_class = true;
            self.state.redraw_evasion = true;
        }

        trace!(attribute = %attribute, see_source, "stat change handled");
    }

    /// Re-run change handling for every attribute, e.g. after gear changes
    pub fn notify_all(&mut self) {
        for &attribute in Attribute::all() {
            self.handle_stat_change(attribute, true);
        }
    }

    /// Cap the base value; it is deliberately left unbounded below
    fn normalize(&mut self, attribute: Attribute) {
        debug_assert!(
            self.state.stat_loss[attribute] >= 0,
            "negative loss on {}",
            attribute
        );
        let max = self.rules.constants.limits.max_stat;
        if self.state.base_stats[attribute] > max {
            self.state.base_stats[attribute] = max;
        }
    }
}
