//! DivineSource - Divine stamina and favor bonuses

use crate::source::ModifierSource;
use crate::stat_block::ModifierAccumulator;
use crate::types::{Attribute, DurationKind};
use crate::world::ModifierQueries;

/// Divine stamina (while its duration lasts) and the standing favor boost
pub struct DivineSource;

impl ModifierSource for DivineSource {
    fn id(&self) -> &str {
        "divine"
    }

    fn priority(&self) -> i32 {
        300
    }

    fn apply(
        &self,
        _attribute: Attribute,
        world: &dyn ModifierQueries,
        _innate_only: bool,
        acc: &mut ModifierAccumulator,
    ) {
        if world.has_duration(DurationKind::DivineStamina) {
            acc.add("divine stamina", world.divine_stamina());
        }
        acc.add("divine favor", world.divine_boost());
    }
}
