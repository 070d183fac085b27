use crate::config::RebalanceConstants;
use crate::drain::StatEngine;
use crate::types::{Attribute, MessageChannel, StatArray};
use crate::world::{PlayerWorld, SkillProfile};
use rand::Rng;
use tracing::{debug, info};

/// Integer division that rounds the remainder up with matching probability
pub fn div_rand_round(num: i32, den: i32, rng: &mut impl Rng) -> i32 {
    if den <= 0 {
        return 0;
    }
    let rem = num.rem_euclid(den);
    let quot = num.div_euclid(den);
    if rem > 0 && rng.gen_range(0..den) < rem {
        quot + 1
    } else {
        quot
    }
}

/// Attribute targets implied by the player's training, fuzzed
pub fn rebalance_target(
    current: StatArray<i32>,
    profile: &SkillProfile,
    constants: &RebalanceConstants,
    rng: &mut impl Rng,
) -> StatArray<i32> {
    let evp = profile.armour_penalty.max(0);
    let baseline = constants.baseline;
    let mut target = StatArray([baseline.max(evp), baseline, baseline]);

    let total: i32 = current.0.iter().sum();
    let remaining = total - 2 * baseline - target[Attribute::Strength];

    let (magic, other) = profile.weights();
    let other = (other - magic / 2).max(0);
    if remaining > 0 && magic + other > 0 {
        let magic_share = div_rand_round(remaining * magic, magic + other, rng);
        let other_share = remaining - magic_share;
        target[Attribute::Intelligence] += magic_share;

        let str_weight = 10 * evp;
        let dex_weight = 10 + profile.dodging.max(0);
        let str_share = div_rand_round(other_share * str_weight, str_weight + dex_weight, rng);
        target[Attribute::Strength] += str_share;
        target[Attribute::Dexterity] += other_share - str_share;
    }

    for &attribute in Attribute::all() {
        target[attribute] += rng.gen_range(-constants.fuzz..=constants.fuzz);
    }
    target
}

/// Pick one (raise, lower) pair that moves `current` toward `target`
pub fn choose_shuffle(
    current: StatArray<i32>,
    target: StatArray<i32>,
    max_stat: i32,
    floor: i32,
    rng: &mut impl Rng,
) -> Option<(Attribute, Attribute)> {
    let mut choice = None;
    let mut found = 0;

    for &up in Attribute::all() {
        for &down in Attribute::all() {
            if up == down || current[down] <= floor || current[up] >= max_stat {
                continue;
            }
            if target[up] - current[up] > target[down] - current[down] {
                found += 1;
                if rng.gen_range(0..found) == 0 {
                    choice = Some((up, down));
                }
            }
        }
    }
    choice
}

/// Move one point between attributes toward the player's training
///
/// Returns the (raised, lowered) pair, or `None` when no move helps.
pub fn deity_rebalance<W: PlayerWorld, R: Rng>(
    engine: &mut StatEngine<'_, W, R>,
) -> Option<(Attribute, Attribute)> {
    let rules = engine.rules();
    let mut current = StatArray::splat(0);
    for &attribute in Attribute::all() {
        current[attribute] = engine.current_value(attribute, false);
    }

    let profile = engine.world().skill_profile();
    let constants = &rules.constants.rebalance;
    let target = rebalance_target(current, &profile, constants, engine.rng());
    debug!(current = ?current.0, target = ?target.0, "rebalance target");

    let (up, down) = choose_shuffle(
        current,
        target,
        rules.constants.limits.max_stat,
        constants.floor,
        engine.rng(),
    )?;

    let god = engine.world().god_name();
    engine.world_mut().announce(
        MessageChannel::God,
        &format!("{}'s power touches on your attributes.", god),
    );
    engine.modify_stat(up, 1, true, "deity", true);
    engine.modify_stat(down, -1, true, "deity", true);

    info!(raised = %up, lowered = %down, "deity rebalanced attributes");
    Some((up, down))
}
