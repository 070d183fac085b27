//! Core types for the attribute engine

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Index, IndexMut};

/// One of the three primary attributes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Attribute {
    Strength,
    Intelligence,
    Dexterity,
}

impl Attribute {
    /// Get all attributes, in storage order
    pub fn all() -> &'static [Attribute] {
        &[
            Attribute::Strength,
            Attribute::Intelligence,
            Attribute::Dexterity,
        ]
    }

    /// Storage index of this attribute
    pub fn index(self) -> usize {
        match self {
            Attribute::Strength => 0,
            Attribute::Intelligence => 1,
            Attribute::Dexterity => 2,
        }
    }

    /// Pick one of the three attributes uniformly
    pub fn random(rng: &mut impl Rng) -> Attribute {
        Attribute::all()[rng.gen_range(0..Attribute::all().len())]
    }

    /// Static per-attribute data (descriptions, equipment and mutation keys)
    pub fn profile(self) -> &'static AttributeProfile {
        &PROFILES[self.index()]
    }

    /// Descriptive word for this attribute
    pub fn desc(self, desc: StatDesc) -> &'static str {
        let words = &self.profile().descs;
        match desc {
            StatDesc::Name => words[0],
            StatDesc::Loss => words[1],
            StatDesc::Decrease => words[2],
            StatDesc::Increase => words[3],
        }
    }

    /// Short label used in prompts ("Str", "Int", "Dex")
    pub fn short_name(self) -> &'static str {
        self.profile().short
    }

    /// Key that selects this attribute at the level-gain prompt
    pub fn key(self) -> char {
        self.profile().key
    }

    /// Attribute selected by a prompt key, case-insensitive
    pub fn from_key(key: char) -> Option<Attribute> {
        let key = key.to_ascii_lowercase();
        Attribute::all().iter().copied().find(|a| a.key() == key)
    }

    /// How death from depleting this attribute is recorded
    pub fn kill_cause(self) -> KillCause {
        self.profile().kill_cause
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.desc(StatDesc::Name))
    }
}

/// Descriptive word kinds for messages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatDesc {
    /// "strength"
    Name,
    /// "weakened"
    Loss,
    /// "weaker"
    Decrease,
    /// "stronger"
    Increase,
}

/// Static data describing how one attribute is fed and reported
#[derive(Debug)]
pub struct AttributeProfile {
    pub short: &'static str,
    pub key: char,
    /// name, loss, decrease, increase
    pub descs: [&'static str; 4],
    pub kill_cause: KillCause,
    pub ego: EgoKind,
    pub ring: RingKind,
    pub artefact: ArtefactProperty,
    pub positive_mutation: MutationKind,
    pub negative_mutation: MutationKind,
    /// Changes to this attribute feed armour class and evasion
    pub affects_defenses: bool,
}

static PROFILES: [AttributeProfile; 3] = [
    AttributeProfile {
        short: "Str",
        key: 's',
        descs: ["strength", "weakened", "weaker", "stronger"],
        kill_cause: KillCause::Weakness,
        ego: EgoKind::Strength,
        ring: RingKind::Strength,
        artefact: ArtefactProperty::Strength,
        positive_mutation: MutationKind::Strong,
        negative_mutation: MutationKind::Weak,
        affects_defenses: true,
    },
    AttributeProfile {
        short: "Int",
        key: 'i',
        descs: ["intelligence", "dopey", "stupid", "clever"],
        kill_cause: KillCause::Stupidity,
        ego: EgoKind::Intelligence,
        ring: RingKind::Intelligence,
        artefact: ArtefactProperty::Intelligence,
        positive_mutation: MutationKind::Clever,
        negative_mutation: MutationKind::Dopey,
        affects_defenses: false,
    },
    AttributeProfile {
        short: "Dex",
        key: 'd',
        descs: ["dexterity", "clumsy", "clumsy", "agile"],
        kill_cause: KillCause::Clumsiness,
        ego: EgoKind::Dexterity,
        ring: RingKind::Dexterity,
        artefact: ArtefactProperty::Dexterity,
        positive_mutation: MutationKind::Agile,
        negative_mutation: MutationKind::Clumsy,
        affects_defenses: true,
    },
];

/// Target of a stat loss or base change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatSelector {
    Stat(Attribute),
    /// Resolved uniformly at the moment of use
    Random,
}

impl StatSelector {
    pub fn resolve(self, rng: &mut impl Rng) -> Attribute {
        match self {
            StatSelector::Stat(attribute) => attribute,
            StatSelector::Random => Attribute::random(rng),
        }
    }
}

impl From<Attribute> for StatSelector {
    fn from(attribute: Attribute) -> Self {
        StatSelector::Stat(attribute)
    }
}

/// Target of a restoration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RestoreSelector {
    Stat(Attribute),
    /// One of the currently drained attributes
    Random,
    /// Every attribute independently
    All,
}

impl From<Attribute> for RestoreSelector {
    fn from(attribute: Attribute) -> Self {
        RestoreSelector::Stat(attribute)
    }
}

/// Fixed-size per-attribute storage
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatArray<T>(pub [T; 3]);

impl<T: Copy> StatArray<T> {
    pub fn splat(value: T) -> Self {
        StatArray([value; 3])
    }

    pub fn iter(&self) -> impl Iterator<Item = (Attribute, T)> + '_ {
        Attribute::all().iter().map(move |a| (*a, self.0[a.index()]))
    }
}

impl<T> Index<Attribute> for StatArray<T> {
    type Output = T;

    fn index(&self, attribute: Attribute) -> &T {
        &self.0[attribute.index()]
    }
}

impl<T> IndexMut<Attribute> for StatArray<T> {
    fn index_mut(&mut self, attribute: Attribute) -> &mut T {
        &mut self.0[attribute.index()]
    }
}

/// Character kind, as far as stat growth is concerned
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayerKind {
    #[default]
    Standard,
    /// Gains more per level-up choice
    Demigod,
}

/// Timed effects the engine cares about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DurationKind {
    Might,
    Berserk,
    Fortitude,
    Brilliance,
    Agility,
    DivineStamina,
    Paralysis,
}

/// Mutations that feed attribute modifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MutationKind {
    Strong,
    Weak,
    Clever,
    Dopey,
    Agile,
    Clumsy,
    ThinSkeletalStructure,
    RoughBlackScales,
}

/// Armour egos granting an attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EgoKind {
    Strength,
    Intelligence,
    Dexterity,
}

/// Ring subtypes granting an attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RingKind {
    Strength,
    Intelligence,
    Dexterity,
}

/// Equipment slot groups scanned for worn items
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WornSlot {
    /// Sum of the plusses of all matching worn rings
    RingsPlus,
}

/// Artefact properties granting an attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArtefactProperty {
    Strength,
    Intelligence,
    Dexterity,
}

/// Recorded cause of death by attribute depletion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KillCause {
    Weakness,
    Stupidity,
    Clumsiness,
}

/// Message channels used by the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageChannel {
    Plain,
    Prompt,
    Warn,
    Danger,
    IntrinsicGain,
    Recovery,
    God,
}

/// Opaque handle for a monster inflicting stat loss
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActorId(pub u32);

/// Lifecycle of one attribute's drain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DrainState {
    /// No accumulated loss
    Healthy,
    /// Some loss, still above zero
    Drained,
    /// At or below zero
    Zeroed,
    /// Above zero again, still counting down
    Recovering,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_attribute_index_matches_all() {
        for (i, attribute) in Attribute::all().iter().enumerate() {
            assert_eq!(attribute.index(), i);
        }
    }

    #[test]
    fn test_descriptions() {
        assert_eq!(Attribute::Strength.desc(StatDesc::Loss), "weakened");
        assert_eq!(Attribute::Intelligence.desc(StatDesc::Decrease), "stupid");
        assert_eq!(Attribute::Dexterity.desc(StatDesc::Increase), "agile");
        assert_eq!(Attribute::Dexterity.to_string(), "dexterity");
    }

    #[test]
    fn test_from_key_is_case_insensitive() {
        assert_eq!(Attribute::from_key('S'), Some(Attribute::Strength));
        assert_eq!(Attribute::from_key('i'), Some(Attribute::Intelligence));
        assert_eq!(Attribute::from_key('D'), Some(Attribute::Dexterity));
        assert_eq!(Attribute::from_key('x'), None);
    }

    #[test]
    fn test_kill_causes() {
        assert_eq!(Attribute::Strength.kill_cause(), KillCause::Weakness);
        assert_eq!(Attribute::Intelligence.kill_cause(), KillCause::Stupidity);
        assert_eq!(Attribute::Dexterity.kill_cause(), KillCause::Clumsiness);
    }

    #[test]
    fn test_only_intelligence_skips_defenses() {
        assert!(Attribute::Strength.profile().affects_defenses);
        assert!(!Attribute::Intelligence.profile().affects_defenses);
        assert!(Attribute::Dexterity.profile().affects_defenses);
    }

    #[test]
    fn test_random_selector_covers_all() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut seen = StatArray::splat(false);
        for _ in 0..200 {
            seen[StatSelector::Random.resolve(&mut rng)] = true;
        }
        assert!(seen.iter().all(|(_, hit)| hit));
    }

    #[test]
    fn test_stat_array_indexing() {
        let mut values = StatArray::splat(0);
        values[Attribute::Dexterity] = 4;
        assert_eq!(values.0, [0, 0, 4]);
    }
}
