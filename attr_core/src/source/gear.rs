//! GearSource - Modifiers from worn equipment

use crate::source::ModifierSource;
use crate::stat_block::ModifierAccumulator;
use crate::types::{Attribute, WornSlot};
use crate::world::ModifierQueries;

/// Ego armour, ring plusses and artefact properties
pub struct GearSource {
    /// Bonus per worn item carrying the matching ego
    pub ego_bonus: i32,
}

impl GearSource {
    pub fn new(ego_bonus: i32) -> Self {
        GearSource { ego_bonus }
    }
}

impl ModifierSource for GearSource {
    fn id(&self) -> &str {
        "gear"
    }

    fn priority(&self) -> i32 {
        0 // Gear applies at default priority
    }

    fn apply(
        &self,
        attribute: Attribute,
        world: &dyn ModifierQueries,
        _innate_only: bool,
        acc: &mut ModifierAccumulator,
    ) {
        let profile = attribute.profile();
        acc.add("ego", self.ego_bonus * world.count_worn_ego(profile.ego));
        acc.add("rings", world.wearing(WornSlot::RingsPlus, profile.ring));
        acc.add("artefacts", world.scan_artefacts(profile.artefact));
    }
}
