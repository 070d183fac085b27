//! Property tests for the numeric bounds of attribute state

mod common;

use attr_core::prelude::*;
use attr_core::types::EgoKind;
use common::TestWorld;
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[derive(Debug, Clone, Copy)]
enum Action {
    Loss(usize, i32, bool),
    RandomLoss(i32),
    Restore(usize, i32),
    RestoreAll,
    Modify(usize, i32),
    Tick,
    ToggleMight,
    ToggleEgo(usize),
}

fn action() -> impl Strategy<Value = Action> {
    prop_oneof![
        (0..3usize, 0..40i32, any::<bool>()).prop_map(|(a, n, f)| Action::Loss(a, n, f)),
        (0..40i32).prop_map(Action::RandomLoss),
        (0..3usize, 0..20i32).prop_map(|(a, n)| Action::Restore(a, n)),
        Just(Action::RestoreAll),
        (0..3usize, -10..30i32).prop_map(|(a, n)| Action::Modify(a, n)),
        Just(Action::Tick),
        Just(Action::Tick),
        Just(Action::ToggleMight),
        (0..3usize).prop_map(Action::ToggleEgo),
    ]
}

fn attribute(index: usize) -> Attribute {
    Attribute::all()[index]
}

proptest! {
    #[test]
    fn test_bounds_hold_under_any_sequence(
        seed in any::<u64>(),
        start in prop::array::uniform3(1..40i32),
        sustain in 0..3u32,
        actions in prop::collection::vec(action(), 1..80),
    ) {
        let rules = StatRules::standard();
        let mut world = TestWorld::new();
        world.sustain = sustain;
        let mut rng = StdRng::seed_from_u64(seed);
        let mut state = PlayerStatState::new(PlayerKind::Standard, start);

        for action in actions {
            match action {
                Action::ToggleMight => {
                    if !world.durations.remove(&DurationKind::Might) {
                        world.durations.insert(DurationKind::Might);
                    }
                }
                Action::ToggleEgo(a) => {
                    let ego = attribute(a).profile().ego;
                    let level = world.egos.entry(ego).or_insert(0);
                    *level = 1 - *level;
                }
                _ => {}
            }

            let mut engine = StatEngine::new(&mut state, &mut world, &mut rng, &rules);
            match action {
                Action::Loss(a, n, forced) => {
                    engine.apply_loss(attribute(a), n, forced, None, true);
                }
                Action::RandomLoss(n) => {
                    engine.apply_loss(StatSelector::Random, n, false, None, true);
                }
                Action::Restore(a, n) => {
                    engine.restore(attribute(a), n, false, false);
                }
                Action::RestoreAll => {
                    engine.restore(RestoreSelector::All, 0, true, false);
                }
                Action::Modify(a, n) => {
                    engine.modify_stat(attribute(a), n, false, "property", true);
                }
                Action::Tick => {
                    engine.tick();
                }
                Action::ToggleMight | Action::ToggleEgo(_) => engine.notify_all(),
            }

            for &a in Attribute::all() {
                prop_assert!(engine.max_value(a) <= 72);
                prop_assert!(engine.state().base(a) <= 72);
                prop_assert!((0..=100).contains(&engine.state().loss(a)));
                prop_assert!((0..=200).contains(&engine.state().zero_turns(a)));
                prop_assert!(engine.current_value(a, true) >= 0);
                prop_assert_eq!(
                    engine.current_value(a, false),
                    engine.max_value(a) - engine.state().loss(a)
                );
            }
        }
    }

    #[test]
    fn test_zeroed_attribute_always_has_timer(
        seed in any::<u64>(),
        drains in prop::collection::vec((0..3usize, 1..15i32), 1..20),
    ) {
        let rules = StatRules::standard();
        let mut world = TestWorld::new();
        let mut rng = StdRng::seed_from_u64(seed);
        let mut state = PlayerStatState::new(PlayerKind::Standard, [10, 10, 10]);

        let mut engine = StatEngine::new(&mut state, &mut world, &mut rng, &rules);
        for (a, n) in drains {
            engine.apply_loss(attribute(a), n, true, None, true);
            for &a in Attribute::all() {
                if engine.current_value(a, false) <= 0 {
                    prop_assert!(engine.state().zero_turns(a) > 0);
                    prop_assert_eq!(engine.drain_state(a), DrainState::Zeroed);
                }
            }
        }
    }

    #[test]
    fn test_restore_all_clears_every_loss(
        seed in any::<u64>(),
        losses in prop::array::uniform3(0..100i32),
    ) {
        let rules = StatRules::standard();
        let mut world = TestWorld::new();
        let mut rng = StdRng::seed_from_u64(seed);
        let mut state = PlayerStatState::new(PlayerKind::Standard, [20, 20, 20]);
        state.stat_loss.0 = losses;

        let mut engine = StatEngine::new(&mut state, &mut world, &mut rng, &rules);
        let restored = engine.restore(RestoreSelector::All, 0, true, false);
        prop_assert_eq!(restored, losses.iter().any(|&l| l > 0));
        prop_assert!(!engine.state().has_loss());
    }
}

#[test]
fn test_every_attribute_has_an_ego() {
    let egos: Vec<EgoKind> = Attribute::all().iter().map(|a| a.profile().ego).collect();
    assert_eq!(
        egos,
        vec![EgoKind::Strength, EgoKind::Intelligence, EgoKind::Dexterity]
    );
}
