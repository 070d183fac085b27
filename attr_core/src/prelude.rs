//! Prelude module for convenient imports
//!
//! ```rust
//! use attr_core::prelude::*;
//! ```

// State and rules
pub use crate::rules::StatRules;
pub use crate::stat_block::{PlayerStatState, RedrawFlags};
pub use crate::types::{
    ActorId, Attribute, DrainState, DurationKind, MessageChannel, PlayerKind, RestoreSelector,
    StatArray, StatSelector,
};

// Engine and drivers
pub use crate::drain::StatEngine;
pub use crate::driver::{attribute_increase, deity_rebalance};

// Collaborators
pub use crate::world::{
    Actors, BodyForms, DamageSink, Divinity, Equipment, FormModifiers, KeyInput, KeyPress,
    ModifierQueries, Mutations, NoResponder, Notifier, PlayerWorld, SkillGroup, SkillProfile,
    StatGainResponder, StatusSink, Training,
};

// Config
pub use crate::config::{default_constants, StatConstants};
