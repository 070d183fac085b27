//! Drivers that decide which attribute to change
//!
//! - `level_gain`: the player picks an attribute on level-up
//! - `rebalance`: a deity nudges attributes toward the player's training

mod level_gain;
mod rebalance;

pub use level_gain::attribute_increase;
pub use rebalance::{choose_shuffle, deity_rebalance, div_rand_round, rebalance_target};
