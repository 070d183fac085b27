//! StatRules - Constants plus the modifier sources built from them

use crate::config::{default_constants, StatConstants};
use crate::source::{ModifierSet, ModifierSource};
use crate::stat_block::ModifierAccumulator;
use crate::types::{Attribute, PlayerKind};
use crate::world::ModifierQueries;

/// Everything about attribute arithmetic that is not per-player state
#[derive(Debug)]
pub struct StatRules {
    pub constants: StatConstants,
    sources: ModifierSet,
}

impl StatRules {
    pub fn new(constants: StatConstants) -> Self {
        let sources = ModifierSet::from_constants(&constants.modifiers);
        StatRules { constants, sources }
    }

    /// Rules from the bundled `constants.toml`
    pub fn standard() -> Self {
        Self::new(default_constants())
    }

    /// Register an extra modifier source
    pub fn with_source(mut self, source: Box<dyn ModifierSource>) -> Self {
        self.sources.push(source);
        self
    }

    pub fn sources(&self) -> &ModifierSet {
        &self.sources
    }

    /// Transient modifier for `attribute`
    pub fn modifier(
        &self,
        attribute: Attribute,
        innate_only: bool,
        world: &dyn ModifierQueries,
    ) -> i32 {
        self.sources.modifier(attribute, innate_only, world)
    }

    /// Per-source contributions to the modifier of `attribute`
    pub fn breakdown(
        &self,
        attribute: Attribute,
        innate_only: bool,
        world: &dyn ModifierQueries,
    ) -> ModifierAccumulator {
        self.sources.breakdown(attribute, innate_only, world)
    }

    /// Points gained per level-up choice
    pub fn stat_gain(&self, kind: PlayerKind) -> i32 {
        match kind {
            PlayerKind::Standard => self.constants.growth.standard_gain,
            PlayerKind::Demigod => self.constants.growth.demigod_gain,
        }
    }
}

impl Default for StatRules {
    fn default() -> Self {
        Self::standard()
    }
}
