//! Animation lifecycle integration tests.
//!
//! These tests drive built-in chips through their whole life and check
//! the countdown, the finishing signal and the periodic bursts.

use chip_fx::anim::{Behavior, CompletionPolicy, FxContext, Interval, Launch, Lifecycle, Phase};
use chip_fx::board::{CellId, EntityId, GridBoard};
use chip_fx::catalog::Catalog;
use chip_fx::core::{AssetTable, FxRng, Position};
use chip_fx::emit::{EmissionKind, EmissionLog};
use chip_fx::Animation;
use proptest::prelude::*;

fn board() -> GridBoard {
    let mut board = GridBoard::new();
    board.add_cell(CellId(1), Position::new(0.0, 0.0));
    board.add_cell(CellId(2), Position::new(128.0, 64.0));
    board.place(EntityId(1), CellId(1), 60.0);
    board.place(EntityId(2), CellId(2), 60.0);
    board
}

fn launch_on(target: EntityId) -> Launch {
    Launch::new(Position::new(0.0, 0.0), Position::new(128.0, 64.0), CellId(2))
        .with_targets([target])
        .with_launcher(EntityId(1))
}

fn create(name: &str) -> (Animation, AssetTable) {
    let assets = AssetTable::with_builtin_names();
    let anim = Catalog::builtin().create(name, &assets).unwrap();
    (anim, assets)
}

// =============================================================================
// Status Families
// =============================================================================

/// Test that a shield completes in one tick and draws icon and aureol once.
#[test]
fn test_shield_single_tick() {
    let (mut anim, assets) = create("shield");
    let (mut log, mut board, mut rng) = (EmissionLog::new(), board(), FxRng::new(42));
    let mut ctx = FxContext::new(&mut log, &mut board, &mut rng);

    anim.launch(launch_on(EntityId(2)), &mut ctx);
    anim.update(60.0, &mut ctx);

    assert!(anim.is_done());
    assert_eq!(log.count_texture(assets.texture_id("chip_shield").unwrap()), 1);
    assert_eq!(log.count_texture(assets.texture_id("shield_aureol").unwrap()), 1);
    assert_eq!(log.count(EmissionKind::AreaMarker), 0);
    assert_eq!(log.count_sound(assets.sound_id("shield").unwrap()), 1);
}

/// Test that a wide boost marks its area once and sparkles every 2 units.
#[test]
fn test_boost_periodic_sparkles() {
    let (mut anim, assets) = create("adrenaline");
    let (mut log, mut board, mut rng) = (EmissionLog::new(), board(), FxRng::new(42));
    let mut ctx = FxContext::new(&mut log, &mut board, &mut rng);

    anim.launch(launch_on(EntityId(2)), &mut ctx);
    for _ in 0..60 {
        anim.update(1.0, &mut ctx);
    }

    assert!(anim.is_done());
    assert_eq!(log.count(EmissionKind::AreaMarker), 1);
    let Behavior::Buff(buff) = anim.behavior() else {
        panic!("adrenaline should be a buff");
    };
    assert_eq!(buff.bursts(), 30);
    assert_eq!(log.count_texture(assets.texture_id("halo").unwrap()), 30);
}

/// Test that a heal on a vanished target still runs to completion.
#[test]
fn test_heal_with_vanished_target() {
    let (mut anim, _) = create("cure");
    let (mut log, mut board, mut rng) = (EmissionLog::new(), board(), FxRng::new(42));
    board.remove(EntityId(2));
    let mut ctx = FxContext::new(&mut log, &mut board, &mut rng);

    anim.launch(launch_on(EntityId(2)), &mut ctx);
    for _ in 0..45 {
        anim.update(1.0, &mut ctx);
    }

    assert!(anim.is_done());
    assert_eq!(log.count(EmissionKind::Image), 0);
}

// =============================================================================
// Tick Contract
// =============================================================================

/// Test that a zero or negative dt changes nothing.
#[test]
fn test_zero_dt_is_idempotent() {
    let (mut anim, _) = create("winged_boots");
    let (mut log, mut board, mut rng) = (EmissionLog::new(), board(), FxRng::new(42));
    let mut ctx = FxContext::new(&mut log, &mut board, &mut rng);

    anim.launch(launch_on(EntityId(2)), &mut ctx);
    anim.update(7.0, &mut ctx);
    let remaining = anim.remaining();
    let emitted = log.len();

    let mut ctx = FxContext::new(&mut log, &mut board, &mut rng);
    anim.update(0.0, &mut ctx);
    anim.update(-3.0, &mut ctx);
    anim.update(f64::NAN, &mut ctx);

    assert_eq!(anim.remaining(), remaining);
    assert_eq!(log.len(), emitted);
    assert_eq!(anim.phase(), Phase::Active);
}

/// Test that ticking a finished animation emits nothing.
#[test]
fn test_post_completion_noop() {
    let (mut anim, _) = create("lightning");
    let (mut log, mut board, mut rng) = (EmissionLog::new(), board(), FxRng::new(42));
    let mut ctx = FxContext::new(&mut log, &mut board, &mut rng);

    anim.launch(launch_on(EntityId(2)), &mut ctx);
    while !anim.is_done() {
        anim.update(1.0, &mut ctx);
    }
    let emitted = log.len();
    let electrified = board.occupant(EntityId(2)).unwrap().electrified;

    let mut ctx = FxContext::new(&mut log, &mut board, &mut rng);
    for _ in 0..10 {
        anim.update(1.0, &mut ctx);
    }
    assert_eq!(log.len(), emitted);
    assert_eq!(board.occupant(EntityId(2)).unwrap().electrified, electrified);
}

/// Test that a second launch neither replays the sound nor resets the clock.
#[test]
fn test_double_launch_ignored() {
    let (mut anim, assets) = create("rage");
    let (mut log, mut board, mut rng) = (EmissionLog::new(), board(), FxRng::new(42));
    let mut ctx = FxContext::new(&mut log, &mut board, &mut rng);

    anim.launch(launch_on(EntityId(2)), &mut ctx);
    anim.update(10.0, &mut ctx);
    anim.launch(launch_on(EntityId(1)), &mut ctx);

    assert_eq!(anim.remaining(), 50.0);
    assert_eq!(anim.targets(), &[EntityId(2)]);
    assert_eq!(log.count_sound(assets.sound_id("buff").unwrap()), 1);
}

// =============================================================================
// Burst-Driven Completion
// =============================================================================

/// Test that a meteorite barrage finishes on its sixth burst, not on expiry.
#[test]
fn test_meteorite_finishes_on_last_burst() {
    let (mut anim, _) = create("meteorite");
    let (mut log, mut board, mut rng) = (EmissionLog::new(), board(), FxRng::new(42));
    let mut ctx = FxContext::new(&mut log, &mut board, &mut rng);
    assert_eq!(anim.policy(), CompletionPolicy::Bursts);

    anim.launch(launch_on(EntityId(2)), &mut ctx);
    let mut ticks = 0;
    while !anim.will_finish() {
        let Behavior::Meteorite(meteorite) = anim.behavior() else {
            panic!("meteorite should be a barrage");
        };
        assert!(meteorite.remaining_bursts() > 0);
        anim.update(1.0, &mut ctx);
        ticks += 1;
        assert!(ticks < 1_000, "barrage never finished");
    }

    let Behavior::Meteorite(meteorite) = anim.behavior() else {
        unreachable!();
    };
    assert_eq!(meteorite.remaining_bursts(), 0);
    assert_eq!(anim.phase(), Phase::Finishing);
    assert_eq!(log.count(EmissionKind::Meteorite), 5);
    assert!(anim.finish());
    assert!(anim.is_done());
}

/// Test that a meteorite's duration running out does not finish it.
#[test]
fn test_meteorite_outlives_duration() {
    let (mut anim, _) = create("meteorite");
    let (mut log, mut board, mut rng) = (EmissionLog::new(), board(), FxRng::new(3));
    let mut ctx = FxContext::new(&mut log, &mut board, &mut rng);

    anim.launch(launch_on(EntityId(2)), &mut ctx);
    // First burst fires, then the countdown is exhausted in one step.
    anim.update(1.0, &mut ctx);
    anim.update(anim.duration(), &mut ctx);

    assert!(anim.remaining() <= 0.0);
    assert!(!anim.will_finish());
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    /// Remaining duration never increases and `Done` is terminal.
    #[test]
    fn test_countdown_is_monotonic(
        duration in 1.0f64..500.0,
        steps in prop::collection::vec(-5.0f64..40.0, 1..80),
    ) {
        let mut clock = Lifecycle::new(duration, CompletionPolicy::Expire);
        prop_assert!(clock.start());

        let mut previous = clock.remaining();
        let mut was_done = false;
        for dt in steps {
            clock.advance(dt);
            prop_assert!(clock.remaining() <= previous);
            if was_done {
                prop_assert_eq!(clock.remaining(), previous);
                prop_assert!(clock.is_done());
            }
            was_done = clock.is_done();
            previous = clock.remaining();
        }
        prop_assert_eq!(clock.is_done(), clock.remaining() <= 0.0);
    }

    /// An interval of period `p` ticked by 1 fires `n / p` times over `n` ticks.
    #[test]
    fn test_interval_trigger_count(period in 1u32..10, ticks in 0u32..200) {
        let mut interval = Interval::every(f64::from(period));
        let fired = (0..ticks).filter(|_| interval.tick(1.0)).count();
        prop_assert_eq!(fired as u32, ticks / period);
    }

    /// Handoff lifecycles stop at `Finishing` until finished.
    #[test]
    fn test_handoff_waits_for_finish(duration in 1.0f64..100.0, extra in 1usize..20) {
        let mut clock = Lifecycle::new(duration, CompletionPolicy::Handoff);
        clock.start();
        clock.advance(duration);
        for _ in 0..extra {
            prop_assert!(!clock.advance(1.0));
        }
        prop_assert_eq!(clock.phase(), Phase::Finishing);
        prop_assert!(clock.finish());
        prop_assert!(!clock.finish());
        prop_assert!(clock.is_done());
    }
}
