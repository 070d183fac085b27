//! TimedBoostSource - Flat bonuses from active timed effects

use crate::config::BoostConfig;
use crate::source::ModifierSource;
use crate::stat_block::ModifierAccumulator;
use crate::types::Attribute;
use crate::world::ModifierQueries;

/// Might, berserk, fortitude, brilliance, agility and the like
#[derive(Debug, Clone)]
pub struct TimedBoostSource {
    boosts: Vec<BoostConfig>,
}

impl TimedBoostSource {
    pub fn new(boosts: Vec<BoostConfig>) -> Self {
        TimedBoostSource { boosts }
    }

    pub fn boosts(&self) -> &[BoostConfig] {
        &self.boosts
    }
}

impl ModifierSource for TimedBoostSource {
    fn id(&self) -> &str {
        "timed_boosts"
    }

    fn priority(&self) -> i32 {
        200
    }

    fn apply(
        &self,
        attribute: Attribute,
        world: &dyn ModifierQueries,
        _innate_only: bool,
        acc: &mut ModifierAccumulator,
    ) {
        for boost in self.boosts.iter().filter(|b| b.attribute == attribute) {
            if boost.durations.iter().any(|d| world.has_duration(*d)) {
                acc.add("timed effects", boost.bonus);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ModifierConstants;
    use crate::testing::FakeWorld;
    use crate::types::DurationKind;

    fn strength_boost(world: &FakeWorld) -> i32 {
        let source = TimedBoostSource::new(ModifierConstants::default().boosts);
        let mut acc = ModifierAccumulator::new();
        source.apply(Attribute::Strength, world, false, &mut acc);
        acc.total()
    }

    #[test]
    fn test_might_and_fortitude() {
        let mut world = FakeWorld::new();
        world.durations.insert(DurationKind::Might);
        assert_eq!(strength_boost(&world), 5);

        world.durations.insert(DurationKind::Fortitude);
        assert_eq!(strength_boost(&world), 15);
    }

    #[test]
    fn test_might_and_berserk_do_not_stack() {
        let mut world = FakeWorld::new();
        world.durations.insert(DurationKind::Might);
        world.durations.insert(DurationKind::Berserk);
        assert_eq!(strength_boost(&world), 5);
    }

    #[test]
    fn test_boost_only_for_its_attribute() {
        let mut world = FakeWorld::new();
        world.durations.insert(DurationKind::Brilliance);
        assert_eq!(strength_boost(&world), 0);

        let source = TimedBoostSource::new(ModifierConstants::default().boosts);
        let mut acc = ModifierAccumulator::new();
        source.apply(Attribute::Intelligence, &world, false, &mut acc);
        assert_eq!(acc.total(), 5);
    }
}
