//! Computed attribute values for PlayerStatState

use crate::rules::StatRules;
use crate::stat_block::PlayerStatState;
use crate::types::{Attribute, DrainState};
use crate::world::ModifierQueries;

impl PlayerStatState {
    /// Maximum value: base plus every modifier, capped
    pub fn max_stat(
        &self,
        attribute: Attribute,
        rules: &StatRules,
        world: &dyn ModifierQueries,
    ) -> i32 {
        let modifier = rules.modifier(attribute, false, world);
        let value = self.base_stats[attribute].saturating_add(modifier);
        value.min(rules.constants.limits.max_stat)
    }

    /// Current value: maximum minus accumulated loss, optionally clamped at zero
    pub fn stat(
        &self,
        attribute: Attribute,
        nonneg: bool,
        rules: &StatRules,
        world: &dyn ModifierQueries,
    ) -> i32 {
        let value = self
            .max_stat(attribute, rules, world)
            .saturating_sub(self.stat_loss[attribute]);
        if nonneg {
            value.max(0)
        } else {
            value
        }
    }

    /// Base value including innate mutations only; stable against
    /// equipment and timed effects
    pub fn innate_base(
        &self,
        attribute: Attribute,
        rules: &StatRules,
        world: &dyn ModifierQueries,
    ) -> i32 {
        let modifier = rules.modifier(attribute, true, world);
        let value = self.base_stats[attribute].saturating_add(modifier);
        value.min(rules.constants.limits.max_stat)
    }

    /// Where this attribute is in its drain lifecycle
    pub fn drain_state(
        &self,
        attribute: Attribute,
        rules: &StatRules,
        world: &dyn ModifierQueries,
    ) -> DrainState {
        if self.stat(attribute, false, rules, world) <= 0 {
            DrainState::Zeroed
        } else if self.stat_zero[attribute] > 0 {
            DrainState::Recovering
        } else if self.stat_loss[attribute] > 0 {
            DrainState::Drained
        } else {
            DrainState::Healthy
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeWorld;
    use crate::types::{DurationKind, EgoKind, MutationKind, PlayerKind};

    #[test]
    fn test_stat_subtracts_loss() {
        let rules = StatRules::default();
        let world = FakeWorld::new();
        let mut state = PlayerStatState::new(PlayerKind::Standard, [10, 10, 10]);
        state.stat_loss[Attribute::Strength] = 4;

        assert_eq!(state.max_stat(Attribute::Strength, &rules, &world), 10);
        assert_eq!(state.stat(Attribute::Strength, true, &rules, &world), 6);
    }

    #[test]
    fn test_stat_clamps_only_when_asked() {
        let rules = StatRules::default();
        let world = FakeWorld::new();
        let mut state = PlayerStatState::new(PlayerKind::Standard, [10, 10, 10]);
        state.stat_loss[Attribute::Strength] = 15;

        assert_eq!(state.stat(Attribute::Strength, true, &rules, &world), 0);
        assert_eq!(state.stat(Attribute::Strength, false, &rules, &world), -5);
    }

    #[test]
    fn test_max_stat_capped() {
        let rules = StatRules::default();
        let mut world = FakeWorld::new();
        world.durations.insert(DurationKind::Fortitude);
        world.egos.insert(EgoKind::Strength, 3);
        let state = PlayerStatState::new(PlayerKind::Standard, [70, 10, 10]);

        assert_eq!(state.max_stat(Attribute::Strength, &rules, &world), 72);
    }

    #[test]
    fn test_innate_base_ignores_transient_sources() {
        let rules = StatRules::default();
        let mut world = FakeWorld::new();
        world.durations.insert(DurationKind::Agility);
        world.set_mutation(MutationKind::Agile, 1, 1);
        let state = PlayerStatState::new(PlayerKind::Standard, [10, 10, 10]);

        assert_eq!(state.innate_base(Attribute::Dexterity, &rules, &world), 12);
        assert_eq!(state.max_stat(Attribute::Dexterity, &rules, &world), 17);
    }

    #[test]
    fn test_drain_states() {
        let rules = StatRules::default();
        let world = FakeWorld::new();
        let mut state = PlayerStatState::new(PlayerKind::Standard, [10, 10, 10]);
        let a = Attribute::Intelligence;

        assert_eq!(state.drain_state(a, &rules, &world), DrainState::Healthy);
        state.stat_loss[a] = 3;
        assert_eq!(state.drain_state(a, &rules, &world), DrainState::Drained);
        state.stat_loss[a] = 10;
        state.stat_zero[a] = 12;
        assert_eq!(state.drain_state(a, &rules, &world), DrainState::Zeroed);
        state.stat_loss[a] = 2;
        assert_eq!(state.drain_state(a, &rules, &world), DrainState::Recovering);
    }
}
