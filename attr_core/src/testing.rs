//! In-memory collaborators for unit tests

use crate::types::{
    ActorId, ArtefactProperty, DurationKind, EgoKind, KillCause, MessageChannel, MutationKind,
    RingKind, WornSlot,
};
use crate::world::{
    Actors, BodyForms, DamageSink, Divinity, Equipment, FormModifiers, KeyInput, KeyPress,
    Mutations, Notifier, SkillProfile, StatGainResponder, StatusSink, Training,
};
use std::collections::{HashMap, HashSet, VecDeque};

/// A world whose every answer is a public field
#[derive(Debug, Default)]
pub struct FakeWorld {
    pub egos: HashMap<EgoKind, i32>,
    pub rings: HashMap<RingKind, i32>,
    pub artefacts: HashMap<ArtefactProperty, i32>,
    /// (innate level, full level)
    pub mutations: HashMap<MutationKind, (i32, i32)>,
    pub form: FormModifiers,
    pub durations: HashSet<DurationKind>,
    pub stamina: i32,
    pub boost: i32,
    pub sustain: u32,
    pub hp_max: i32,
    pub skills: SkillProfile,
    pub monsters: HashMap<ActorId, (String, bool)>,

    pub messages: Vec<(MessageChannel, String)>,
    pub notes: Vec<String>,
    pub damage: Vec<(i32, KillCause, Option<String>)>,
    pub extended: Vec<(DurationKind, i32)>,
    pub interruptions: usize,
}

impl FakeWorld {
    pub fn new() -> Self {
        FakeWorld {
            hp_max: 50,
            ..Default::default()
        }
    }

    pub fn set_mutation(&mut self, mutation: MutationKind, innate: i32, full: i32) {
        self.mutations.insert(mutation, (innate, full));
    }

    pub fn said(&self, text: &str) -> bool {
        self.messages.iter().any(|(_, m)| m.contains(text))
    }

    pub fn count(&self, text: &str) -> usize {
        self.messages.iter().filter(|(_, m)| m.contains(text)).count()
    }
}

impl Equipment for FakeWorld {
    fn count_worn_ego(&self, ego: EgoKind) -> i32 {
        self.egos.get(&ego).copied().unwrap_or(0)
    }

    fn wearing(&self, _slot: WornSlot, ring: RingKind) -> i32 {
        self.rings.get(&ring).copied().unwrap_or(0)
    }

    fn scan_artefacts(&self, property: ArtefactProperty) -> i32 {
        self.artefacts.get(&property).copied().unwrap_or(0)
    }
}

impl Mutations for FakeWorld {
    fn mutation_level(&self, mutation: MutationKind, innate_only: bool) -> i32 {
        let (innate, full) = self.mutations.get(&mutation).copied().unwrap_or((0, 0));
        if innate_only {
            innate
        } else {
            full
        }
    }
}

impl BodyForms for FakeWorld {
    fn current_form(&self) -> FormModifiers {
        self.form
    }
}

impl Divinity for FakeWorld {
    fn has_duration(&self, duration: DurationKind) -> bool {
        self.durations.contains(&duration)
    }

    fn divine_stamina(&self) -> i32 {
        self.stamina
    }

    fn divine_boost(&self) -> i32 {
        self.boost
    }

    fn sustain_level(&self) -> u32 {
        self.sustain
    }

    fn god_name(&self) -> String {
        "Jiyva".to_string()
    }
}

impl Actors for FakeWorld {
    fn is_valid(&self, actor: ActorId) -> bool {
        self.monsters.contains_key(&actor)
    }

    fn is_visible(&self, actor: ActorId) -> bool {
        self.monsters.get(&actor).map(|(_, seen)| *seen).unwrap_or(false)
    }

    fn display_name(&self, actor: ActorId) -> String {
        self.monsters
            .get(&actor)
            .map(|(name, _)| name.clone())
            .unwrap_or_default()
    }
}

impl Training for FakeWorld {
    fn skill_profile(&self) -> SkillProfile {
        self.skills.clone()
    }
}

impl DamageSink for FakeWorld {
    fn hp_max(&self) -> i32 {
        self.hp_max
    }

    fn apply_damage(&mut self, amount: i32, cause: KillCause, source: Option<&str>) {
        self.damage.push((amount, cause, source.map(str::to_string)));
    }
}

impl StatusSink for FakeWorld {
    fn extend_duration(&mut self, duration: DurationKind, turns: i32) {
        self.extended.push((duration, turns));
    }

    fn interrupt_activity(&mut self) {
        self.interruptions += 1;
    }
}

impl Notifier for FakeWorld {
    fn announce(&mut self, channel: MessageChannel, text: &str) {
        self.messages.push((channel, text.to_string()));
    }

    fn log_note(&mut self, text: &str) {
        self.notes.push(text.to_string());
    }
}

/// Keys fed from a queue; reading past the end fails the test
#[derive(Debug, Default)]
pub struct ScriptedKeys {
    pub keys: VecDeque<KeyPress>,
    pub interrupted: bool,
    pub reads: usize,
}

impl ScriptedKeys {
    pub fn new(keys: &[KeyPress]) -> Self {
        ScriptedKeys {
            keys: keys.iter().copied().collect(),
            ..Default::default()
        }
    }
}

impl KeyInput for ScriptedKeys {
    fn read_key(&mut self) -> KeyPress {
        self.reads += 1;
        self.keys
            .pop_front()
            .expect("prompt read more keys than scripted")
    }

    fn session_interrupted(&self) -> bool {
        self.interrupted
    }
}

/// Responder with a fixed answer that counts how often it was asked
#[derive(Debug, Default)]
pub struct FixedResponder {
    pub answer: Option<char>,
    pub calls: usize,
}

impl StatGainResponder for FixedResponder {
    fn choose_stat_gain(&mut self) -> Option<char> {
        self.calls += 1;
        self.answer
    }
}
