//! Zero-stat timer

use super::StatEngine;
use crate::types::{Attribute, DurationKind, MessageChannel};
use crate::world::PlayerWorld;
use rand::Rng;
use tracing::{debug, info};

impl<'a, W: PlayerWorld, R: Rng> StatEngine<'a, W, R> {
    /// Advance the zero-stat counters by one turn
    ///
    /// Counters climb while an attribute is at or below zero and fall once it
    /// is positive again. Returns the attributes that finished recovering.
    pub fn tick(&mut self) -> Vec<Attribute> {
        let cap = self.rules.constants.limits.stat_zero_turn_cap;
        let mut recovered = Vec::new();

        for &attribute in Attribute::all() {
            if self.value(attribute) <= 0 {
                if self.state.stat_zero[attribute] < cap {
                    self.state.stat_zero[attribute] += 1;
                }
            } else if self.state.stat_zero[attribute] > 0 {
                self.state.stat_zero[attribute] -= 1;
                if self.state.stat_zero[attribute] == 0 {
                    self.world.announce(
                        MessageChannel::Plain,
                        &format!("Your {} has recovered.", attribute),
                    );
                    self.state.redraw_stats[attribute] = true;
                    info!(attribute = %attribute, "attribute recovered from zero");
                    recovered.push(attribute);
                }
            }
        }

        recovered
    }

    /// First transition to zero: start the timer and stun the player
    pub(super) fn enter_zero(&mut self, attribute: Attribute) {
        let zero = &self.rules.constants.zero;
        let turns = zero.recovery_turns.roll(&mut *self.rng);
        let paralysis = zero.paralysis_turns.roll(&mut *self.rng);
        self.state.stat_zero[attribute] = turns;

        self.world.announce(
            MessageChannel::Warn,
            &format!("You have lost your {}.", attribute),
        );
        self.world.log_note(&format!("Lost {}.", attribute));
        self.world.extend_duration(DurationKind::Paralysis, paralysis);

        debug!(attribute = %attribute, turns, paralysis, "attribute reached zero");
    }
}

#[cfg(test)]
mod tests {
    use crate::drain::StatEngine;
    use crate::rules::StatRules;
    use crate::stat_block::PlayerStatState;
    use crate::testing::FakeWorld;
    use crate::types::{Attribute, PlayerKind};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_tick_counts_up_while_zeroed() {
        let rules = StatRules::default();
        let mut world = FakeWorld::new();
        let mut rng = StdRng::seed_from_u64(1);
        let mut state = PlayerStatState::new(PlayerKind::Standard, [10, 10, 10]);
        state.stat_loss[Attribute::Dexterity] = 10;
        state.stat_zero[Attribute::Dexterity] = 5;

        let mut engine = StatEngine::new(&mut state, &mut world, &mut rng, &rules);
        assert!(engine.tick().is_empty());
        assert!(engine.tick().is_empty());
        assert_eq!(engine.state().zero_turns(Attribute::Dexterity), 7);
        assert_eq!(engine.state().zero_turns(Attribute::Strength), 0);
    }

    #[test]
    fn test_tick_caps_counter() {
        let rules = StatRules::default();
        let mut world = FakeWorld::new();
        let mut rng = StdRng::seed_from_u64(1);
        let mut state = PlayerStatState::new(PlayerKind::Standard, [10, 10, 10]);
        state.stat_loss[Attribute::Strength] = 20;
        state.stat_zero[Attribute::Strength] = 199;

        let mut engine = StatEngine::new(&mut state, &mut world, &mut rng, &rules);
        engine.tick();
        engine.tick();
        engine.tick();
        assert_eq!(engine.state().zero_turns(Attribute::Strength), 200);
    }

    #[test]
    fn test_recovery_after_nineteen_ticks() {
        let rules = StatRules::default();
        let mut world = FakeWorld::new();
        let mut rng = StdRng::seed_from_u64(1);
        let mut state = PlayerStatState::new(PlayerKind::Standard, [10, 10, 10]);
        state.stat_zero[Attribute::Intelligence] = 19;
        state.take_redraw();

        let mut engine = StatEngine::new(&mut state, &mut world, &mut rng, &rules);
        for _ in 0..18 {
            assert!(engine.tick().is_empty());
        }
        assert_eq!(engine.tick(), vec![Attribute::Intelligence]);
        assert_eq!(engine.state().zero_turns(Attribute::Intelligence), 0);
        assert!(engine.tick().is_empty());

        assert_eq!(world.count("Your intelligence has recovered."), 1);
        assert!(state.take_redraw().stats[Attribute::Intelligence]);
    }

    #[test]
    fn test_healthy_attributes_untouched() {
        let rules = StatRules::default();
        let mut world = FakeWorld::new();
        let mut rng = StdRng::seed_from_u64(1);
        let mut state = PlayerStatState::new(PlayerKind::Standard, [10, 10, 10]);

        let mut engine = StatEngine::new(&mut state, &mut world, &mut rng, &rules);
        for _ in 0..50 {
            engine.tick();
        }
        assert_eq!(state.stat_zero.0, [0, 0, 0]);
        assert!(world.messages.is_empty());
    }
}
