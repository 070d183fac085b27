//! Tunable attribute constants

use super::ConfigError;
use crate::types::{Attribute, DurationKind};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Tunable stat constants
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StatConstants {
    #[serde(default)]
    pub limits: StatLimits,
    #[serde(default)]
    pub zero: ZeroStatConstants,
    #[serde(default)]
    pub modifiers: ModifierConstants,
    #[serde(default)]
    pub growth: GrowthConstants,
    #[serde(default)]
    pub rebalance: RebalanceConstants,
}

impl StatConstants {
    /// Reject values the engine cannot work with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.limits.max_stat <= 0 {
            return Err(ConfigError::ValidationError(format!(
                "max_stat must be positive, got {}",
                self.limits.max_stat
            )));
        }
        if self.limits.max_stat_loss <= 0 {
            return Err(ConfigError::ValidationError(format!(
                "max_stat_loss must be positive, got {}",
                self.limits.max_stat_loss
            )));
        }
        if self.limits.stat_zero_turn_cap <= 0 {
            return Err(ConfigError::ValidationError(format!(
                "stat_zero_turn_cap must be positive, got {}",
                self.limits.stat_zero_turn_cap
            )));
        }
        self.zero.recovery_turns.validate("zero.recovery_turns")?;
        self.zero.paralysis_turns.validate("zero.paralysis_turns")?;
        if self.zero.recovery_turns.min <= 0 {
            return Err(ConfigError::ValidationError(
                "zero.recovery_turns must start above zero".to_string(),
            ));
        }
        if self.zero.convulse_hp_divisor <= 0 {
            return Err(ConfigError::ValidationError(format!(
                "zero.convulse_hp_divisor must be positive, got {}",
                self.zero.convulse_hp_divisor
            )));
        }
        if self.rebalance.fuzz < 0 {
            return Err(ConfigError::ValidationError(format!(
                "rebalance.fuzz must not be negative, got {}",
                self.rebalance.fuzz
            )));
        }
        Ok(())
    }
}

/// Inclusive range of turns, rolled uniformly
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRange {
    pub min: i32,
    pub max: i32,
}

impl TurnRange {
    pub fn roll(&self, rng: &mut impl Rng) -> i32 {
        rng.gen_range(self.min..=self.max)
    }

    fn validate(&self, name: &str) -> Result<(), ConfigError> {
        if self.min > self.max {
            return Err(ConfigError::ValidationError(format!(
                "{}: min {} exceeds max {}",
                name, self.min, self.max
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatLimits {
    /// Cap on base and maximum attribute values
    #[serde(default = "default_max_stat")]
    pub max_stat: i32,
    /// Cap on accumulated stat loss
    #[serde(default = "default_max_stat_loss")]
    pub max_stat_loss: i32,
    /// Cap on the zero-stat turn counter
    #[serde(default = "default_stat_zero_turn_cap")]
    pub stat_zero_turn_cap: i32,
}

impl Default for StatLimits {
    fn default() -> Self {
        StatLimits {
            max_stat: 72,
            max_stat_loss: 100,
            stat_zero_turn_cap: 200,
        }
    }
}

fn default_max_stat() -> i32 {
    72
}
fn default_max_stat_loss() -> i32 {
    100
}
fn default_stat_zero_turn_cap() -> i32 {
    200
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZeroStatConstants {
    /// Recovery countdown set when an attribute first hits zero
    #[serde(default = "default_recovery_turns")]
    pub recovery_turns: TurnRange,
    /// Paralysis inflicted on hitting zero
    #[serde(default = "default_paralysis_turns")]
    pub paralysis_turns: TurnRange,
    /// Flat part of the damage taken when losing more of a zeroed attribute
    #[serde(default = "default_convulse_damage_base")]
    pub convulse_damage_base: i32,
    /// Random part is below hp_max / divisor
    #[serde(default = "default_convulse_hp_divisor")]
    pub convulse_hp_divisor: i32,
}

impl Default for ZeroStatConstants {
    fn default() -> Self {
        ZeroStatConstants {
            recovery_turns: default_recovery_turns(),
            paralysis_turns: default_paralysis_turns(),
            convulse_damage_base: default_convulse_damage_base(),
            convulse_hp_divisor: default_convulse_hp_divisor(),
        }
    }
}

fn default_recovery_turns() -> TurnRange {
    TurnRange { min: 10, max: 19 }
}
fn default_paralysis_turns() -> TurnRange {
    TurnRange { min: 2, max: 4 }
}
fn default_convulse_damage_base() -> i32 {
    5
}
fn default_convulse_hp_divisor() -> i32 {
    10
}

/// Timed effects granting a flat attribute bonus; the bonus is counted
/// once while any of the listed durations is active
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoostConfig {
    pub durations: Vec<DurationKind>,
    pub attribute: Attribute,
    pub bonus: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModifierConstants {
    /// Bonus per worn item with a matching ego
    #[serde(default = "default_ego_bonus")]
    pub ego_bonus: i32,
    /// Multiplier on mutation level differences
    #[serde(default = "default_mutation_weight")]
    pub mutation_weight: i32,
    #[serde(default = "default_boosts")]
    pub boosts: Vec<BoostConfig>,
}

impl Default for ModifierConstants {
    fn default() -> Self {
        ModifierConstants {
            ego_bonus: default_ego_bonus(),
            mutation_weight: default_mutation_weight(),
            boosts: default_boosts(),
        }
    }
}

fn default_ego_bonus() -> i32 {
    3
}
fn default_mutation_weight() -> i32 {
    2
}

fn default_boosts() -> Vec<BoostConfig> {
    let boost = |durations: &[DurationKind], attribute, bonus| BoostConfig {
        durations: durations.to_vec(),
        attribute,
        bonus,
    };
    vec![
        boost(
            &[DurationKind::Might, DurationKind::Berserk],
            Attribute::Strength,
            5,
        ),
        boost(&[DurationKind::Fortitude], Attribute::Strength, 10),
        boost(&[DurationKind::Brilliance], Attribute::Intelligence, 5),
        boost(&[DurationKind::Agility], Attribute::Dexterity, 5),
    ]
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GrowthConstants {
    /// Points per level-up choice
    #[serde(default = "default_standard_gain")]
    pub standard_gain: i32,
    /// Points per level-up choice for demigods
    #[serde(default = "default_demigod_gain")]
    pub demigod_gain: i32,
}

impl Default for GrowthConstants {
    fn default() -> Self {
        GrowthConstants {
            standard_gain: default_standard_gain(),
            demigod_gain: default_demigod_gain(),
        }
    }
}

fn default_standard_gain() -> i32 {
    1
}
fn default_demigod_gain() -> i32 {
    2
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RebalanceConstants {
    /// Target floor for each attribute
    #[serde(default = "default_baseline")]
    pub baseline: i32,
    /// Targets are moved by up to this much either way
    #[serde(default = "default_fuzz")]
    pub fuzz: i32,
    /// An attribute at or below this is never lowered
    #[serde(default = "default_floor")]
    pub floor: i32,
}

impl Default for RebalanceConstants {
    fn default() -> Self {
        RebalanceConstants {
            baseline: default_baseline(),
            fuzz: default_fuzz(),
            floor: default_floor(),
        }
    }
}

fn default_baseline() -> i32 {
    9
}
fn default_fuzz() -> i32 {
    2
}
fn default_floor() -> i32 {
    1
}
