//! Application state

use crate::config::{SandboxConfig, SandboxError};
use crate::input::ConfiguredResponder;
use crate::world::SandboxWorld;
use attr_core::prelude::*;
use attr_core::stat_block::ModifierAccumulator;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

/// Amount drained by a single keypress
const DRAIN_STEP: i32 = 3;
/// Monster used by the monster-drain key
const DRAINER: ActorId = ActorId(0);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Stats,
    Breakdown,
    Help,
}

impl Tab {
    pub fn all() -> &'static [Tab] {
        &[Tab::Stats, Tab::Breakdown, Tab::Help]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Tab::Stats => "Stats",
            Tab::Breakdown => "Modifiers",
            Tab::Help => "Help",
        }
    }
}

/// One row of the attribute table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeRow {
    pub attribute: Attribute,
    pub base: i32,
    pub innate: i32,
    pub max: i32,
    pub current: i32,
    pub loss: i32,
    pub zero: i32,
    pub state: DrainState,
    pub dirty: bool,
}

pub struct App {
    pub current_tab: Tab,
    pub state: PlayerStatState,
    pub world: SandboxWorld,
    pub rules: StatRules,
    pub rng: StdRng,
    pub responder: ConfiguredResponder,
    pub selected: usize,
    pub log_scroll: usize,
    pub prompting: bool,
    /// Dirty flags consumed on the last action, used for highlighting
    pub redraw: RedrawFlags,
    config: SandboxConfig,
}

impl App {
    pub fn new(config: SandboxConfig) -> Result<Self, SandboxError> {
        let rules = config.rules()?;
        let world = SandboxWorld::new(
            config.hp_max,
            &config.god,
            config.divine_stamina,
            config.skills.clone(),
        );
        let mut app = App {
            current_tab: Tab::Stats,
            state: PlayerStatState::new(config.kind, config.base),
            world,
            rules,
            rng: StdRng::seed_from_u64(config.seed),
            responder: ConfiguredResponder {
                answer: config.auto_stat_gain,
            },
            selected: 0,
            log_scroll: 0,
            prompting: false,
            redraw: RedrawFlags::default(),
            config,
        };
        app.after_action();
        Ok(app)
    }

    fn engine(&mut self) -> StatEngine<'_, SandboxWorld, StdRng> {
        StatEngine::new(&mut self.state, &mut self.world, &mut self.rng, &self.rules)
    }

    fn after_action(&mut self) {
        self.redraw = self.state.take_redraw();
        self.log_scroll = 0;
    }

    // === Navigation ===

    pub fn next_tab(&mut self) {
        let tabs = Tab::all();
        let idx = tabs.iter().position(|t| *t == self.current_tab).unwrap_or(0);
        self.current_tab = tabs[(idx + 1) % tabs.len()];
    }

    pub fn prev_tab(&mut self) {
        let tabs = Tab::all();
        let idx = tabs.iter().position(|t| *t == self.current_tab).unwrap_or(0);
        self.current_tab = tabs[(idx + tabs.len() - 1) % tabs.len()];
    }

    pub fn set_tab(&mut self, index: usize) {
        if let Some(tab) = Tab::all().get(index) {
            self.current_tab = *tab;
        }
    }

    pub fn toggle_help(&mut self) {
        self.current_tab = if self.current_tab == Tab::Help {
            Tab::Stats
        } else {
            Tab::Help
        };
    }

    pub fn on_up(&mut self) {
        let count = Attribute::all().len();
        self.selected = (self.selected + count - 1) % count;
    }

    pub fn on_down(&mut self) {
        self.selected = (self.selected + 1) % Attribute::all().len();
    }

    pub fn scroll_log(&mut self, up: bool) {
        if up {
            self.log_scroll = (self.log_scroll + 1).min(self.world.log.len().saturating_sub(1));
        } else {
            self.log_scroll = self.log_scroll.saturating_sub(1);
        }
    }

    pub fn selected_attribute(&self) -> Attribute {
        Attribute::all()[self.selected % Attribute::all().len()]
    }

    // === Engine actions ===

    pub fn drain(&mut self, forced: bool) {
        let attribute = self.selected_attribute();
        self.engine()
            .apply_loss(attribute, DRAIN_STEP, forced, Some("sandbox"), true);
        self.after_action();
    }

    pub fn drain_random(&mut self) {
        self.engine()
            .apply_loss(StatSelector::Random, DRAIN_STEP, false, Some("sandbox"), true);
        self.after_action();
    }

    pub fn drain_from_monster(&mut self) {
        let attribute = self.selected_attribute();
        self.engine()
            .apply_loss_from(attribute, DRAIN_STEP, DRAINER, false);
        self.after_action();
    }

    pub fn restore_selected(&mut self) {
        let attribute = self.selected_attribute();
        self.engine().restore(attribute, 0, false, false);
        self.after_action();
    }

    pub fn restore_random(&mut self) {
        self.engine().restore(RestoreSelector::Random, 1, false, true);
        self.after_action();
    }

    pub fn restore_all(&mut self) {
        self.engine().restore(RestoreSelector::All, 0, false, false);
        self.after_action();
    }

    pub fn tick(&mut self, turns: u32) {
        for _ in 0..turns {
            self.engine().tick();
            self.world.pass_turn();
        }
        self.after_action();
    }

    pub fn raise_base(&mut self, amount: i32) {
        let attribute = self.selected_attribute();
        self.engine().modify_stat(attribute, amount, false, "sandbox", true);
        self.after_action();
    }

    /// Run the level-up prompt to completion (or interruption)
    pub fn level_gain(&mut self, input: &mut dyn KeyInput) -> bool {
        let mut responder = self.responder.clone();
        let chosen = attribute_increase(&mut self.engine(), &mut responder, input);
        self.prompting = false;
        if !chosen {
            self.world.announce(
                MessageChannel::Plain,
                "Level-up deferred; press any key to choose.",
            );
        }
        self.after_action();
        chosen
    }

    /// An interrupted level-up prompt still owes a gain
    pub fn gain_pending(&self) -> bool {
        self.state.stat_gain_prompt
    }

    pub fn rebalance(&mut self) {
        if deity_rebalance(&mut self.engine()).is_none() {
            self.world.announce(
                MessageChannel::Plain,
                "Your attributes already suit your training.",
            );
        }
        self.after_action();
    }

    // === World toggles ===

    pub fn toggle_duration(&mut self, duration: DurationKind) {
        let on = self.world.toggle_duration(duration);
        info!(?duration, on, "duration toggled");
        self.engine().notify_all();
        self.after_action();
    }

    pub fn toggle_ego(&mut self) {
        let attribute = self.selected_attribute();
        let level = self.world.toggle_ego(attribute.profile().ego);
        let delta = if level > 0 {
            self.rules.constants.modifiers.ego_bonus
        } else {
            -self.rules.constants.modifiers.ego_bonus
        };
        self.engine().notify_stat_change(attribute, delta, false, true);
        self.after_action();
    }

    pub fn toggle_mutation(&mut self, positive: bool) {
        let attribute = self.selected_attribute();
        let profile = attribute.profile();
        let mutation = if positive {
            profile.positive_mutation
        } else {
            profile.negative_mutation
        };
        let level = self.world.toggle_mutation(mutation);
        let weight = self.rules.constants.modifiers.mutation_weight;
        let delta = match (positive, level > 0) {
            (true, true) | (false, false) => weight,
            _ => -weight,
        };
        self.engine().notify_stat_change(attribute, delta, false, true);
        self.after_action();
    }

    pub fn cycle_form(&mut self) {
        self.world.cycle_form();
        self.engine().notify_all();
        self.after_action();
    }

    pub fn cycle_sustain(&mut self) {
        self.world.sustain = (self.world.sustain + 1) % 4;
        self.after_action();
    }

    pub fn cycle_favor(&mut self) {
        self.world.favor = (self.world.favor + 1) % 4;
        self.engine().notify_all();
        self.after_action();
    }

    pub fn reset(&mut self) {
        let config = self.config.clone();
        self.state.reset(config.base);
        self.world = SandboxWorld::new(
            config.hp_max,
            &config.god,
            config.divine_stamina,
            config.skills.clone(),
        );
        self.rng = StdRng::seed_from_u64(config.seed);
        self.after_action();
    }

    // === Views ===

    pub fn rows(&self) -> Vec<AttributeRow> {
        Attribute::all()
            .iter()
            .map(|&attribute| AttributeRow {
                attribute,
                base: self.state.base(attribute),
                innate: self.state.innate_base(attribute, &self.rules, &self.world),
                max: self.state.max_stat(attribute, &self.rules, &self.world),
                current: self.state.stat(attribute, false, &self.rules, &self.world),
                loss: self.state.loss(attribute),
                zero: self.state.zero_turns(attribute),
                state: self.state.drain_state(attribute, &self.rules, &self.world),
                dirty: self.redraw.stats[attribute],
            })
            .collect()
    }

    pub fn breakdown(&self, attribute: Attribute) -> ModifierAccumulator {
        self.rules.breakdown(attribute, false, &self.world)
    }
}
