//! Permanent base changes

use super::StatEngine;
use crate::types::{Attribute, MessageChannel, StatDesc, StatSelector};
use crate::world::PlayerWorld;
use rand::Rng;
use tracing::debug;

impl<'a, W: PlayerWorld, R: Rng> StatEngine<'a, W, R> {
    /// Change the base value of an attribute
    ///
    /// Returns the attribute that changed, or `None` for a zero amount.
    pub fn modify_stat(
        &mut self,
        selector: impl Into<StatSelector>,
        amount: i32,
        suppress_msg: bool,
        source: &str,
        see_source: bool,
    ) -> Option<Attribute> {
        let attribute = self.announce_change(selector.into(), amount, suppress_msg)?;

        let base = &mut self.state.base_stats[attribute];
        *base = base.saturating_add(amount);
        debug!(
            attribute = %attribute,
            amount,
            source,
            see_source,
            base = self.state.base_stats[attribute],
            "base attribute changed"
        );

        self.handle_stat_change(attribute, see_source);
        Some(attribute)
    }

    /// Report a change already made elsewhere (a modifier source), without
    /// touching the base value
    pub fn notify_stat_change(
        &mut self,
        selector: impl Into<StatSelector>,
        amount: i32,
        suppress_msg: bool,
        see_source: bool,
    ) -> Option<Attribute> {
        let attribute = self.announce_change(selector.into(), amount, suppress_msg)?;
        self.handle_stat_change(attribute, see_source);
        Some(attribute)
    }

    fn announce_change(
        &mut self,
        selector: StatSelector,
        amount: i32,
        suppress_msg: bool,
    ) -> Option<Attribute> {
        if amount == 0 {
            return None;
        }
        if amount < 0 {
            self.world.interrupt_activity();
        }

        let attribute = selector.resolve(&mut *self.rng);
        if !suppress_msg {
            let (channel, desc) = if amount > 0 {
                (MessageChannel::IntrinsicGain, StatDesc::Increase)
            } else {
                (MessageChannel::Warn, StatDesc::Decrease)
            };
            self.world
                .announce(channel, &format!("You feel {}.", attribute.desc(desc)));
        }
        Some(attribute)
    }
}
