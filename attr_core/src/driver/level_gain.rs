//! Level-up attribute choice

use crate::drain::StatEngine;
use crate::types::{Attribute, MessageChannel};
use crate::world::{KeyInput, KeyPress, PlayerWorld, StatGainResponder};
use rand::Rng;
use tracing::info;

/// Ask the player which attribute to raise and apply the gain
///
/// The responder is asked once before the keyboard. Returns false only when
/// the prompt was escaped during an interrupted session; the owed gain then
/// stays pending in `stat_gain_prompt`.
pub fn attribute_increase<W: PlayerWorld, R: Rng>(
    engine: &mut StatEngine<'_, W, R>,
    responder: &mut dyn StatGainResponder,
    input: &mut dyn KeyInput,
) -> bool {
    engine.state_mut().stat_gain_prompt = true;
    engine.world_mut().announce(
        MessageChannel::IntrinsicGain,
        "Your experience leads to an increase in your attributes!",
    );

    let innate: Vec<i32> = Attribute::all()
        .iter()
        .map(|&a| engine.innate_base(a))
        .collect();
    let current: Vec<i32> = Attribute::all()
        .iter()
        .map(|&a| engine.current_value(a, true))
        .collect();
    if innate != current {
        engine.world_mut().announce(
            MessageChannel::Prompt,
            &format!(
                "Your base attributes are Str {}, Int {}, Dex {}.",
                innate[0], innate[1], innate[2]
            ),
        );
    }
    engine.world_mut().announce(
        MessageChannel::Prompt,
        "Increase (S)trength, (I)ntelligence, or (D)exterity? ",
    );

    let gain = engine.rules().stat_gain(engine.state().kind);
    let mut scripted = responder.choose_stat_gain().map(KeyPress::Char);

    loop {
        let key = match scripted.take() {
            Some(key) => key,
            None => input.read_key(),
        };

        match key {
            KeyPress::Escape => {
                if input.session_interrupted() {
                    info!("level-up choice deferred by interrupted session");
                    return false;
                }
            }
            KeyPress::Char(c) => {
                if let Some(attribute) = Attribute::from_key(c) {
                    for _ in 0..gain {
                        engine.modify_stat(attribute, 1, false, "level gain", true);
                    }
                    engine.state_mut().stat_gain_prompt = false;
                    info!(attribute = %attribute, gain, "level-up attribute chosen");
                    return true;
                }
            }
        }
    }
}
