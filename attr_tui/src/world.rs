//! In-memory game world behind the sandbox

use attr_core::prelude::*;
use attr_core::types::{
    ArtefactProperty, EgoKind, KillCause, MutationKind, RingKind, WornSlot,
};
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// Body forms the sandbox can cycle through
pub const FORMS: &[(&str, FormModifiers)] = &[
    ("none", FormModifiers { str_mod: 0, dex_mod: 0 }),
    ("statue", FormModifiers { str_mod: 2, dex_mod: -2 }),
    ("spider", FormModifiers { str_mod: 0, dex_mod: 5 }),
    ("dragon", FormModifiers { str_mod: 10, dex_mod: 0 }),
];

#[derive(Debug, Clone)]
pub struct Monster {
    pub name: String,
    pub visible: bool,
}

#[derive(Debug, Clone)]
pub struct LogEntry {
    pub turn: u64,
    pub channel: MessageChannel,
    pub text: String,
}

pub struct SandboxWorld {
    // === Modifier inputs ===
    pub egos: HashMap<EgoKind, i32>,
    pub rings: HashMap<RingKind, i32>,
    pub artefacts: HashMap<ArtefactProperty, i32>,
    pub mutations: HashMap<MutationKind, i32>,
    pub form: usize,
    pub durations: HashSet<DurationKind>,
    pub stamina: i32,
    pub favor: i32,
    pub sustain: u32,
    pub god: String,
    pub skills: SkillProfile,

    // === Player ===
    pub hp: i32,
    pub hp_max: i32,
    pub paralysis: i32,
    pub deaths: u32,

    pub monsters: Vec<Monster>,

    // === Output ===
    pub turn: u64,
    pub log: Vec<LogEntry>,
    pub notes: Vec<String>,
    pub interruptions: u32,
}

impl SandboxWorld {
    pub fn new(hp_max: i32, god: &str, stamina: i32, skills: SkillProfile) -> Self {
        SandboxWorld {
            egos: HashMap::new(),
            rings: HashMap::new(),
            artefacts: HashMap::new(),
            mutations: HashMap::new(),
            form: 0,
            durations: HashSet::new(),
            stamina,
            favor: 0,
            sustain: 0,
            god: god.to_string(),
            skills,
            hp: hp_max,
            hp_max,
            paralysis: 0,
            deaths: 0,
            monsters: vec![
                Monster {
                    name: "the shadow wraith".to_string(),
                    visible: true,
                },
                Monster {
                    name: "something unseen".to_string(),
                    visible: false,
                },
            ],
            turn: 0,
            log: Vec::new(),
            notes: Vec::new(),
            interruptions: 0,
        }
    }

    pub fn form_name(&self) -> &'static str {
        FORMS.get(self.form).map(|(name, _)| *name).unwrap_or("none")
    }

    pub fn cycle_form(&mut self) {
        self.form = (self.form + 1) % FORMS.len();
    }

    /// Flip a boolean-style modifier input; returns the new level
    pub fn toggle_ego(&mut self, ego: EgoKind) -> i32 {
        let level = self.egos.entry(ego).or_insert(0);
        *level = if *level > 0 { 0 } else { 1 };
        *level
    }

    pub fn toggle_mutation(&mut self, mutation: MutationKind) -> i32 {
        let level = self.mutations.entry(mutation).or_insert(0);
        *level = if *level > 0 { 0 } else { 1 };
        *level
    }

    pub fn toggle_duration(&mut self, duration: DurationKind) -> bool {
        if self.durations.remove(&duration) {
            false
        } else {
            self.durations.insert(duration);
            true
        }
    }

    /// Advance non-engine timers by one turn
    pub fn pass_turn(&mut self) {
        self.turn += 1;
        if self.paralysis > 0 {
            self.paralysis -= 1;
        }
    }

    fn push(&mut self, channel: MessageChannel, text: String) {
        self.log.push(LogEntry {
            turn: self.turn,
            channel,
            text,
        });
    }
}

impl Equipment for SandboxWorld {
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

impl Mutations for SandboxWorld {
    // Sandbox mutations are all permanent
    fn mutation_level(&self, mutation: MutationKind, _innate_only: bool) -> i32 {
        self.mutations.get(&mutation).copied().unwrap_or(0)
    }
}

impl BodyForms for SandboxWorld {
    fn current_form(&self) -> FormModifiers {
        FORMS
            .get(self.form)
            .map(|(_, modifiers)| *modifiers)
            .unwrap_or_default()
    }
}

impl Divinity for SandboxWorld {
    fn has_duration(&self, duration: DurationKind) -> bool {
        match duration {
            DurationKind::Paralysis => self.paralysis > 0,
            _ => self.durations.contains(&duration),
        }
    }

    fn divine_stamina(&self) -> i32 {
        self.stamina
    }

    fn divine_boost(&self) -> i32 {
        self.favor
    }

    fn sustain_level(&self) -> u32 {
        self.sustain
    }

    fn god_name(&self) -> String {
        self.god.clone()
    }
}

impl Actors for SandboxWorld {
    fn is_valid(&self, actor: ActorId) -> bool {
        (actor.0 as usize) < self.monsters.len()
    }

    fn is_visible(&self, actor: ActorId) -> bool {
        self.monsters
            .get(actor.0 as usize)
            .map(|m| m.visible)
            .unwrap_or(false)
    }

    fn display_name(&self, actor: ActorId) -> String {
        self.monsters
            .get(actor.0 as usize)
            .map(|m| m.name.clone())
            .unwrap_or_default()
    }
}

impl Training for SandboxWorld {
    fn skill_profile(&self) -> SkillProfile {
        self.skills.clone()
    }
}

impl DamageSink for SandboxWorld {
    fn hp_max(&self) -> i32 {
        self.hp_max
    }

    fn apply_damage(&mut self, amount: i32, cause: KillCause, source: Option<&str>) {
        self.hp -= amount;
        debug!(amount, ?cause, source, hp = self.hp, "player damaged");
        if self.hp <= 0 {
            self.deaths += 1;
            let killer = match source {
                Some(name) => format!("{:?}, caused by {}", cause, name),
                None => format!("{:?}", cause),
            };
            self.push(MessageChannel::Danger, format!("You die... ({}).", killer));
            self.hp = self.hp_max;
        }
    }
}

impl StatusSink for SandboxWorld {
    fn extend_duration(&mut self, duration: DurationKind, turns: i32) {
        match duration {
            DurationKind::Paralysis => self.paralysis += turns,
            _ => {
                self.durations.insert(duration);
            }
        }
    }

    fn interrupt_activity(&mut self) {
        self.interruptions += 1;
    }
}

impl Notifier for SandboxWorld {
    fn announce(&mut self, channel: MessageChannel, text: &str) {
        self.push(channel, text.to_string());
    }

    fn log_note(&mut self, text: &str) {
        self.notes.push(format!("turn {}: {}", self.turn, text));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn world() -> SandboxWorld {
        SandboxWorld::new(30, "Okawaru", 4, SkillProfile::default())
    }

    #[test]
    fn test_death_resets_hp() {
        let mut world = world();
        world.apply_damage(12, KillCause::Weakness, None);
        assert_eq!(world.hp, 18);
        world.apply_damage(20, KillCause::Clumsiness, Some("the shadow wraith"));
        assert_eq!(world.deaths, 1);
        assert_eq!(world.hp, 30);
        assert!(world.log.last().unwrap().text.contains("the shadow wraith"));
    }

    #[test]
    fn test_paralysis_counts_down() {
        let mut world = world();
        world.extend_duration(DurationKind::Paralysis, 2);
        assert!(world.has_duration(DurationKind::Paralysis));
        world.pass_turn();
        world.pass_turn();
        assert!(!world.has_duration(DurationKind::Paralysis));
        assert_eq!(world.turn, 2);
    }

    #[test]
    fn test_form_cycles_back() {
        let mut world = world();
        for _ in 0..FORMS.len() {
            world.cycle_form();
        }
        assert_eq!(world.form_name(), "none");
        world.cycle_form();
        assert_eq!(world.current_form().str_mod, 2);
    }

    #[test]
    fn test_monster_lookup() {
        let world = world();
        assert!(world.is_valid(ActorId(1)));
        assert!(!world.is_visible(ActorId(1)));
        assert!(!world.is_valid(ActorId(5)));
        assert_eq!(world.display_name(ActorId(0)), "the shadow wraith");
    }

    #[test]
    fn test_toggles() {
        let mut world = world();
        assert_eq!(world.toggle_ego(EgoKind::Strength), 1);
        assert_eq!(world.count_worn_ego(EgoKind::Strength), 1);
        assert_eq!(world.toggle_ego(EgoKind::Strength), 0);
        assert!(world.toggle_duration(DurationKind::Might));
        assert!(!world.toggle_duration(DurationKind::Might));
    }
}
