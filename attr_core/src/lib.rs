//! attr_core - Primary attribute engine for a roguelike player
//!
//! This library provides:
//! - PlayerStatState: Persistent base values, drain and zero-stat counters
//! - ModifierSet: Aggregated transient modifiers from gear, mutations, forms and gods
//! - StatEngine: Stat loss, restoration, base changes and zero-stat recovery
//! - Drivers: Level-up attribute choice and deity rebalancing

pub mod config;
pub mod drain;
pub mod driver;
pub mod prelude;
pub mod rules;
pub mod source;
pub mod stat_block;
pub mod types;
pub mod world;

#[cfg(test)]
mod testing;

// Re-export core types for convenience
pub use config::{default_constants, ConfigError, StatConstants};
pub use drain::StatEngine;
pub use driver::{attribute_increase, deity_rebalance};
pub use rules::StatRules;
pub use source::{
    DivineSource, FormSource, GearSource, ModifierSet, ModifierSource, MutationSource,
    TimedBoostSource,
};
pub use stat_block::{Contribution, ModifierAccumulator, PlayerStatState, RedrawFlags};
pub use types::{
    ActorId, Attribute, DrainState, DurationKind, KillCause, MessageChannel, PlayerKind,
    RestoreSelector, StatArray, StatSelector,
};
pub use world::{
    KeyInput, KeyPress, NoResponder, PlayerWorld, SkillGroup, SkillProfile, StatGainResponder,
};
