//! MutationSource - Attribute changes from mutations

use crate::source::ModifierSource;
use crate::stat_block::ModifierAccumulator;
use crate::types::{Attribute, MutationKind};
use crate::world::ModifierQueries;

/// Mutation pairs plus the dexterity-only structural mutations
///
/// Counts in both modes; `innate_only` selects permanent levels.
pub struct MutationSource {
    /// Multiplier on the positive/negative level difference
    pub weight: i32,
}

impl MutationSource {
    pub fn new(weight: i32) -> Self {
        MutationSource { weight }
    }
}

impl ModifierSource for MutationSource {
    fn id(&self) -> &str {
        "mutations"
    }

    fn priority(&self) -> i32 {
        -100
    }

    fn is_innate(&self) -> bool {
        true
    }

    fn apply(
        &self,
        attribute: Attribute,
        world: &dyn ModifierQueries,
        innate_only: bool,
        acc: &mut ModifierAccumulator,
    ) {
        let profile = attribute.profile();
        let level = |mutation| world.mutation_level(mutation, innate_only);

        acc.add(
            "mutations",
            self.weight * (level(profile.positive_mutation) - level(profile.negative_mutation)),
        );

        if attribute == Attribute::Dexterity {
            acc.add(
                "thin skeletal structure",
                self.weight * level(MutationKind::ThinSkeletalStructure),
            );
            acc.add("rough black scales", -level(MutationKind::RoughBlackScales));
        }
    }
}
