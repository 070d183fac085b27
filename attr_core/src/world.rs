//! Collaborator traits implemented by the host game
//!
//! The engine never owns equipment, mutations, religion or the message log.
//! It asks the game through these traits and reports back through the sink
//! traits. `PlayerWorld` is the full set `StatEngine` needs.

use crate::types::{
    ActorId, ArtefactProperty, DurationKind, EgoKind, KillCause, MessageChannel, MutationKind,
    RingKind, WornSlot,
};
use serde::{Deserialize, Serialize};

/// Worn equipment scanning
pub trait Equipment {
    /// Number of worn items carrying this ego
    fn count_worn_ego(&self, ego: EgoKind) -> i32;

    /// Summed value of worn items of this subtype in the slot group
    fn wearing(&self, slot: WornSlot, ring: RingKind) -> i32;

    /// Summed value of this property across all equipped artefacts
    fn scan_artefacts(&self, property: ArtefactProperty) -> i32;
}

/// Mutation levels
pub trait Mutations {
    /// Level of a mutation; with `innate_only` only permanent,
    /// form-independent levels count
    fn mutation_level(&self, mutation: MutationKind, innate_only: bool) -> i32;
}

/// Attribute modifiers of the current body form
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormModifiers {
    pub str_mod: i32,
    pub dex_mod: i32,
}

/// Current body form
pub trait BodyForms {
    fn current_form(&self) -> FormModifiers;
}

/// Timed effects and divine favor
pub trait Divinity {
    fn has_duration(&self, duration: DurationKind) -> bool;

    /// Stored divine stamina amount, counted while the duration is active
    fn divine_stamina(&self) -> i32;

    /// Unconditional favor bonus applied to every attribute
    fn divine_boost(&self) -> i32;

    /// Number of halvings applied to unforced stat loss
    fn sustain_level(&self) -> u32;

    fn god_name(&self) -> String;
}

/// Everything the modifier aggregator reads
pub trait ModifierQueries: Equipment + Mutations + BodyForms + Divinity {}

impl<T: Equipment + Mutations + BodyForms + Divinity + ?Sized> ModifierQueries for T {}

/// Monster lookup for monster-inflicted loss
pub trait Actors {
    fn is_valid(&self, actor: ActorId) -> bool;
    fn is_visible(&self, actor: ActorId) -> bool;
    fn display_name(&self, actor: ActorId) -> String;
}

/// Skill groups used by deity rebalancing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillGroup {
    Magic,
    Other,
}

/// Training summary consumed by deity rebalancing
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillProfile {
    /// Unadjusted body armour encumbrance
    pub armour_penalty: i32,
    /// Every trained skill with its group and level
    pub skills: Vec<(SkillGroup, i32)>,
    /// Dodging skill, scaled by 10
    pub dodging: i32,
}

impl SkillProfile {
    /// Summed levels of magic skills and of all other skills
    pub fn weights(&self) -> (i32, i32) {
        self.skills
            .iter()
            .fold((0, 0), |(magic, other), (group, level)| match group {
                SkillGroup::Magic => (magic + level, other),
                SkillGroup::Other => (magic, other + level),
            })
    }
}

pub trait Training {
    fn skill_profile(&self) -> SkillProfile;
}

/// Damage and death
pub trait DamageSink {
    fn hp_max(&self) -> i32;
    fn apply_damage(&mut self, amount: i32, cause: KillCause, source: Option<&str>);
}

/// Status durations on the player
pub trait StatusSink {
    fn extend_duration(&mut self, duration: DurationKind, turns: i32);

    /// Stop multi-turn activities; called when a stat drops
    fn interrupt_activity(&mut self) {}
}

/// Message log and notes
pub trait Notifier {
    fn announce(&mut self, channel: MessageChannel, text: &str);
    fn log_note(&mut self, text: &str);
}

/// Full collaborator set required by `StatEngine`
pub trait PlayerWorld:
    ModifierQueries + Actors + Training + DamageSink + StatusSink + Notifier
{
}

impl<T> PlayerWorld for T where
    T: ModifierQueries + Actors + Training + DamageSink + StatusSink + Notifier
{
}

/// Scripted answer to the level-gain prompt, consulted before the keyboard
pub trait StatGainResponder {
    /// A key to use, or `None` for no answer
    fn choose_stat_gain(&mut self) -> Option<char>;
}

/// Responder that never answers
pub struct NoResponder;

impl StatGainResponder for NoResponder {
    fn choose_stat_gain(&mut self) -> Option<char> {
        None
    }
}

/// A key read at a prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyPress {
    Char(char),
    Escape,
}

/// Blocking keyboard input
pub trait KeyInput {
    fn read_key(&mut self) -> KeyPress;

    /// The session was told to save and exit (hangup)
    fn session_interrupted(&self) -> bool;
}
