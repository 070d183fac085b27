//! ModifierSource - Trait and implementations for attribute modifier providers

mod divine;
mod form;
mod gear;
mod mutation;
mod timed;

pub use divine::DivineSource;
pub use form::FormSource;
pub use gear::GearSource;
pub use mutation::MutationSource;
pub use timed::TimedBoostSource;

use crate::config::ModifierConstants;
use crate::stat_block::ModifierAccumulator;
use crate::types::Attribute;
use crate::world::ModifierQueries;

/// Trait for anything that contributes to an attribute modifier
pub trait ModifierSource: Send + Sync {
    /// Unique identifier for this source
    fn id(&self) -> &str;

    /// Priority for application order (higher = applied later)
    /// Default priority is 0.
    /// Suggested priorities:
    /// - Mutations: -100
    /// - Gear: 0
    /// - Body form: 100
    /// - Timed effects: 200
    /// - Divine favor: 300
    fn priority(&self) -> i32 {
        0
    }

    /// Whether this source still counts when only innate modifiers are asked for
    fn is_innate(&self) -> bool {
        false
    }

    /// Add this source's contribution for `attribute`
    fn apply(
        &self,
        attribute: Attribute,
        world: &dyn ModifierQueries,
        innate_only: bool,
        acc: &mut ModifierAccumulator,
    );
}

/// Ordered collection of modifier sources
pub struct ModifierSet {
    sources: Vec<Box<dyn ModifierSource>>,
}

impl ModifierSet {
    /// Create a set from arbitrary sources, ordered by priority
    pub fn new(mut sources: Vec<Box<dyn ModifierSource>>) -> Self {
        sources.sort_by_key(|s| s.priority());
        ModifierSet { sources }
    }

    /// The standard sources: mutations, gear, body form, timed effects, divine favor
    pub fn from_constants(constants: &ModifierConstants) -> Self {
        Self::new(vec![
            Box::new(MutationSource::new(constants.mutation_weight)),
            Box::new(GearSource::new(constants.ego_bonus)),
            Box::new(FormSource),
            Box::new(TimedBoostSource::new(constants.boosts.clone())),
            Box::new(DivineSource),
        ])
    }

    /// Add a custom source
    pub fn push(&mut self, source: Box<dyn ModifierSource>) {
        self.sources.push(source);
        self.sources.sort_by_key(|s| s.priority());
    }

    /// Source ids in application order
    pub fn ids(&self) -> Vec<&str> {
        self.sources.iter().map(|s| s.id()).collect()
    }

    /// Every contribution to the modifier of `attribute`
    pub fn breakdown(
        &self,
        attribute: Attribute,
        innate_only: bool,
        world: &dyn ModifierQueries,
    ) -> ModifierAccumulator {
        let mut acc = ModifierAccumulator::new();
        for source in &self.sources {
            if innate_only && !source.is_innate() {
                continue;
            }
            source.apply(attribute, world, innate_only, &mut acc);
        }
        tracing::trace!(
            attribute = %attribute,
            innate_only,
            total = acc.total(),
            "aggregated attribute modifier"
        );
        acc
    }

    /// Summed modifier for `attribute`
    pub fn modifier(
        &self,
        attribute: Attribute,
        innate_only: bool,
        world: &dyn ModifierQueries,
    ) -> i32 {
        self.breakdown(attribute, innate_only, world).total()
    }
}

impl std::fmt::Debug for ModifierSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModifierSet")
            .field("sources", &self.ids())
            .finish()
    }
}
