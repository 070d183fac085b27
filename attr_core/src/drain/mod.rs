//! StatEngine - Stat loss, restoration and the zero-stat lifecycle
//!
//! The engine borrows the player's persistent state, the host world and a
//! random source for the duration of one game action. All derived values
//! are recomputed from those on demand.

mod change;
mod normalize;
mod zero;

use crate::rules::StatRules;
use crate::stat_block::{ModifierAccumulator, PlayerStatState};
use crate::types::{
    ActorId, Attribute, DrainState, DurationKind, MessageChannel, RestoreSelector, StatDesc,
    StatSelector,
};
use crate::world::PlayerWorld;
use rand::Rng;
use tracing::debug;

/// Operations on one player's attributes
pub struct StatEngine<'a, W, R> {
    state: &'a mut PlayerStatState,
    world: &'a mut W,
    rng: &'a mut R,
    rules: &'a StatRules,
}

impl<'a, W: PlayerWorld, R: Rng> StatEngine<'a, W, R> {
    pub fn new(
        state: &'a mut PlayerStatState,
        world: &'a mut W,
        rng: &'a mut R,
        rules: &'a StatRules,
    ) -> Self {
        StatEngine {
            state,
            world,
            rng,
            rules,
        }
    }

    pub fn state(&self) -> &PlayerStatState {
        &*self.state
    }

    pub(crate) fn state_mut(&mut self) -> &mut PlayerStatState {
        &mut *self.state
    }

    pub fn world(&self) -> &W {
        &*self.world
    }

    pub fn world_mut(&mut self) -> &mut W {
        &mut *self.world
    }

    pub fn rules(&self) -> &'a StatRules {
        self.rules
    }

    pub(crate) fn rng(&mut self) -> &mut R {
        &mut *self.rng
    }

    // === Values ===

    /// Current value of an attribute
    pub fn current_value(&self, attribute: Attribute, nonneg: bool) -> i32 {
        self.state.stat(attribute, nonneg, self.rules, &*self.world)
    }

    /// Maximum value of an attribute
    pub fn max_value(&self, attribute: Attribute) -> i32 {
        self.state.max_stat(attribute, self.rules, &*self.world)
    }

    /// Base value with innate mutations only
    pub fn innate_base(&self, attribute: Attribute) -> i32 {
        self.state.innate_base(attribute, self.rules, &*self.world)
    }

    pub fn drain_state(&self, attribute: Attribute) -> DrainState {
        self.state.drain_state(attribute, self.rules, &*self.world)
    }

    /// Per-source contributions to an attribute's modifier
    pub fn modifier_breakdown(&self, attribute: Attribute, innate_only: bool) -> ModifierAccumulator {
        self.rules.breakdown(attribute, innate_only, &*self.world)
    }

    pub fn strength(&self, nonneg: bool) -> i32 {
        self.current_value(Attribute::Strength, nonneg)
    }

    pub fn intel(&self, nonneg: bool) -> i32 {
        self.current_value(Attribute::Intelligence, nonneg)
    }

    pub fn dex(&self, nonneg: bool) -> i32 {
        self.current_value(Attribute::Dexterity, nonneg)
    }

    pub fn max_strength(&self) -> i32 {
        self.max_value(Attribute::Strength)
    }

    pub fn max_intel(&self) -> i32 {
        self.max_value(Attribute::Intelligence)
    }

    pub fn max_dex(&self) -> i32 {
        self.max_value(Attribute::Dexterity)
    }

    // === Loss ===

    /// Drain an attribute
    ///
    /// Unforced loss is negated entirely by divine stamina and halved once
    /// per sustain level. Returns whether any loss was applied.
    pub fn apply_loss(
        &mut self,
        selector: impl Into<StatSelector>,
        amount: i32,
        forced: bool,
        cause: Option<&str>,
        see_source: bool,
    ) -> bool {
        let attribute = selector.into().resolve(&mut *self.rng);
        let mut loss = amount;

        if !forced {
            if self.world.has_duration(DurationKind::DivineStamina) {
                self.world.announce(
                    MessageChannel::Plain,
                    &format!("Your divine stamina protects you from {} loss.", attribute),
                );
                debug!(attribute = %attribute, amount, "stat loss negated by divine stamina");
                return false;
            }
            loss = loss.checked_shr(self.world.sustain_level()).unwrap_or(0);
        }

        let sustained = loss > 0 && self.world.sustain_level() > 0;
        self.world.announce(
            if loss > 0 {
                MessageChannel::Warn
            } else {
                MessageChannel::Plain
            },
            &format!(
                "You feel {}{}{}.",
                if sustained { "somewhat " } else { "" },
                attribute.desc(StatDesc::Loss),
                if loss > 0 { "" } else { " for a moment" }
            ),
        );

        if loss <= 0 {
            return false;
        }

        let was_zeroed = self.state.stat_zero[attribute] > 0 && self.value(attribute) <= 0;
        let cap = self.rules.constants.limits.max_stat_loss;
        let total = self.state.stat_loss[attribute].saturating_add(loss);
        self.state.stat_loss[attribute] = total.min(cap);

        debug!(
            attribute = %attribute,
            requested = amount,
            applied = loss,
            forced,
            cause = cause.unwrap_or("unknown"),
            total = self.state.stat_loss[attribute],
            "stat loss applied"
        );

        if was_zeroed && self.value(attribute) <= 0 {
            self.convulse(attribute, cause);
        }

        self.handle_stat_change(attribute, see_source);
        true
    }

    /// Drain inflicted by a monster; an unknown monster is an anonymous cause
    pub fn apply_loss_from(
        &mut self,
        selector: impl Into<StatSelector>,
        amount: i32,
        actor: ActorId,
        forced: bool,
    ) -> bool {
        if !self.world.is_valid(actor) {
            return self.apply_loss(selector, amount, forced, None, true);
        }

        let visible = self.world.is_visible(actor);
        let name = self.world.display_name(actor);
        self.apply_loss(selector, amount, forced, Some(&name), visible)
    }

    /// Further loss of an already zeroed attribute hurts
    fn convulse(&mut self, attribute: Attribute, cause: Option<&str>) {
        let zero = &self.rules.constants.zero;
        let spread = self.world.hp_max() / zero.convulse_hp_divisor;
        let extra = if spread > 0 {
            self.rng.gen_range(0..spread)
        } else {
            0
        };
        let damage = zero.convulse_damage_base + extra;

        self.world.announce(
            MessageChannel::Danger,
            &format!("You convulse from lack of {}!", attribute),
        );
        debug!(attribute = %attribute, damage, "zeroed attribute drained further");
        self.world
            .apply_damage(damage, attribute.kill_cause(), cause);
    }

    // === Restoration ===

    /// Undo drain; an amount of 0 restores fully
    ///
    /// Returns whether anything was restored.
    pub fn restore(
        &mut self,
        selector: impl Into<RestoreSelector>,
        amount: i32,
        suppress_msg: bool,
        recovery: bool,
    ) -> bool {
        let attribute = match selector.into() {
            RestoreSelector::All => {
                let mut restored = false;
                for attribute in Attribute::all() {
                    if self.restore(*attribute, amount, suppress_msg, false) {
                        restored = true;
                    }
                }
                return restored;
            }
            RestoreSelector::Random => match self.random_lost_stat() {
                Some(attribute) => attribute,
                None => return false,
            },
            RestoreSelector::Stat(attribute) => attribute,
        };

        let loss = self.state.stat_loss[attribute];
        if loss == 0 {
            return false;
        }

        if !suppress_msg {
            self.world.announce(
                if recovery {
                    MessageChannel::Recovery
                } else {
                    MessageChannel::Plain
                },
                &format!("You feel your {} returning.", attribute),
            );
        }

        debug_assert!(amount >= 0, "negative restore amount {}", amount);
        let gain = if amount <= 0 || amount > loss {
            loss
        } else {
            amount
        };
        self.state.stat_loss[attribute] -= gain;

        debug!(
            attribute = %attribute,
            restored = gain,
            remaining = self.state.stat_loss[attribute],
            "stat restored"
        );

        self.handle_stat_change(attribute, true);
        true
    }

    /// Uniform choice among drained attributes
    fn random_lost_stat(&mut self) -> Option<Attribute> {
        let losses = self.state.stat_loss;
        let mut choice = None;
        let mut found = 0;
        for (attribute, loss) in losses.iter() {
            if loss > 0 {
                found += 1;
                if self.rng.gen_range(0..found) == 0 {
                    choice = Some(attribute);
                }
            }
        }
        choice
    }

    /// Unclamped current value, for transition checks
    fn value(&self, attribute: Attribute) -> i32 {
        self.current_value(attribute, false)
    }
}
