//! Minimal host world for integration tests

#![allow(dead_code)]

use attr_core::prelude::*;
use attr_core::types::{
    ArtefactProperty, EgoKind, KillCause, MutationKind, RingKind, WornSlot,
};
use std::collections::{HashMap, HashSet};

#[derive(Default)]
pub struct TestWorld {
    pub egos: HashMap<EgoKind, i32>,
    pub rings: HashMap<RingKind, i32>,
    pub mutations: HashMap<MutationKind, i32>,
    pub form: FormModifiers,
    pub durations: HashSet<DurationKind>,
    pub stamina: i32,
    pub sustain: u32,
    pub skills: SkillProfile,
    pub hp: i32,
    pub hp_max: i32,
    pub paralysis: i32,
    pub messages: Vec<(MessageChannel, String)>,
    pub notes: Vec<String>,
    pub deaths: Vec<KillCause>,
}

impl TestWorld {
    pub fn new() -> Self {
        TestWorld {
            hp: 40,
            hp_max: 40,
            ..Default::default()
        }
    }

    pub fn said(&self, text: &str) -> bool {
        self.messages.iter().any(|(_, m)| m == text)
    }
}

impl Equipment for TestWorld {
    fn count_worn_ego(&self, ego: EgoKind) -> i32 {
        self.egos.get(&ego).copied().unwrap_or(0)
    }

    fn wearing(&self, _slot: WornSlot, ring: RingKind) -> i32 {
        self.rings.get(&ring).copied().unwrap_or(0)
    }

    fn scan_artefacts(&self, _property: ArtefactProperty) -> i32 {
        0
    }
}

impl Mutations for TestWorld {
    fn mutation_level(&self, mutation: MutationKind, _innate_only: bool) -> i32 {
        self.mutations.get(&mutation).copied().unwrap_or(0)
    }
}

impl BodyForms for TestWorld {
    fn current_form(&self) -> FormModifiers {
        self.form
    }
}

impl Divinity for TestWorld {
    fn has_duration(&self, duration: DurationKind) -> bool {
        self.durations.contains(&duration)
    }

    fn divine_stamina(&self) -> i32 {
        self.stamina
    }

    fn divine_boost(&self) -> i32 {
        0
    }

    fn sustain_level(&self) -> u32 {
        self.sustain
    }

    fn god_name(&self) -> String {
        "Vehumet".to_string()
    }
}

impl Actors for TestWorld {
    fn is_valid(&self, actor: ActorId) -> bool {
        actor.0 == 1
    }

    fn is_visible(&self, _actor: ActorId) -> bool {
        true
    }

    fn display_name(&self, _actor: ActorId) -> String {
        "the wight".to_string()
    }
}

impl Training for TestWorld {
    fn skill_profile(&self) -> SkillProfile {
        self.skills.clone()
    }
}

impl DamageSink for TestWorld {
    fn hp_max(&self) -> i32 {
        self.hp_max
    }

    fn apply_damage(&mut self, amount: i32, cause: KillCause, _source: Option<&str>) {
        self.hp -= amount;
        if self.hp <= 0 {
            self.deaths.push(cause);
        }
    }
}

impl StatusSink for TestWorld {
    fn extend_duration(&mut self, duration: DurationKind, turns: i32) {
        if duration == DurationKind::Paralysis {
            self.paralysis += turns;
        }
    }
}

impl Notifier for TestWorld {
    fn announce(&mut self, channel: MessageChannel, text: &str) {
        self.messages.push((channel, text.to_string()));
    }

    fn log_note(&mut self, text: &str) {
        self.notes.push(text.to_string());
    }
}

/// Keys from a list; runs out as Escape
pub struct ListKeys {
    pub keys: Vec<KeyPress>,
    pub interrupted: bool,
}

impl KeyInput for ListKeys {
    fn read_key(&mut self) -> KeyPress {
        if self.keys.is_empty() {
            KeyPress::Escape
        } else {
            self.keys.remove(0)
        }
    }

    fn session_interrupted(&self) -> bool {
        self.interrupted
    }
}
