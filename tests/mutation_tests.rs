//! Board mutation integration tests.
//!
//! Teleport, inversion and jump are the only chips that move entities.
//! Each must mutate the board exactly once, at its scheduled moment.

use chip_fx::anim::{Behavior, FxContext, Launch, Phase};
use chip_fx::board::{Board, BoardMove, CellId, EntityId, GridBoard, MoveKind};
use chip_fx::catalog::Catalog;
use chip_fx::core::{AssetTable, FxRng, Position};
use chip_fx::emit::{EmissionKind, EmissionLog};
use chip_fx::Animation;

const CASTER: EntityId = EntityId(1);
const VICTIM: EntityId = EntityId(2);
const CELL_A: CellId = CellId(10);
const CELL_B: CellId = CellId(20);
const CELL_C: CellId = CellId(30);

fn board() -> GridBoard {
    let mut board = GridBoard::new();
    board.add_cell(CELL_A, Position::new(0.0, 0.0));
    board.add_cell(CELL_B, Position::new(96.0, 48.0));
    board.add_cell(CELL_C, Position::new(192.0, 96.0));
    board.place(CASTER, CELL_A, 60.0);
    board.place(VICTIM, CELL_B, 60.0);
    board
}

fn create(name: &str) -> Animation {
    Catalog::builtin()
        .create(name, &AssetTable::with_builtin_names())
        .unwrap()
}

// =============================================================================
// Teleport
// =============================================================================

/// Test that teleport relocates once, on the first tick under 50 remaining.
#[test]
fn test_teleport_relocates_exactly_once() {
    let mut anim = create("teleportation");
    let (mut log, mut board, mut rng) = (EmissionLog::new(), board(), FxRng::new(42));
    let launch = Launch::new(Position::new(96.0, 48.0), Position::new(192.0, 96.0), CELL_C)
        .with_targets([VICTIM])
        .with_launcher(CASTER);

    {
        let mut ctx = FxContext::new(&mut log, &mut board, &mut rng);
        anim.launch(launch, &mut ctx);
        // remaining 130, 120, ..., 50
        for _ in 0..9 {
            anim.update(10.0, &mut ctx);
        }
    }
    assert_eq!(anim.remaining(), 50.0);
    assert_eq!(board.move_count(VICTIM), 0);

    {
        let mut ctx = FxContext::new(&mut log, &mut board, &mut rng);
        anim.update(10.0, &mut ctx);
    }
    assert_eq!(board.move_count(VICTIM), 1);
    assert_eq!(board.cell(VICTIM), Some(CELL_C));

    {
        let mut ctx = FxContext::new(&mut log, &mut board, &mut rng);
        while !anim.is_done() {
            anim.update(10.0, &mut ctx);
        }
    }
    assert_eq!(board.move_count(VICTIM), 1);
    assert_eq!(board.move_count(CASTER), 0);
    assert_eq!(anim.behavior().mutation_applied(), Some(true));
}

/// Test that teleport trails only ever come from the two endpoints.
#[test]
fn test_teleport_trails_are_cosmetic() {
    let mut anim = create("teleportation");
    let (mut log, mut board, mut rng) = (EmissionLog::new(), board(), FxRng::new(8));
    let mut ctx = FxContext::new(&mut log, &mut board, &mut rng);
    let launch = Launch::new(Position::new(96.0, 48.0), Position::new(192.0, 96.0), CELL_C).with_targets([VICTIM]);

    anim.launch(launch, &mut ctx);
    while !anim.is_done() {
        anim.update(1.0, &mut ctx);
    }

    assert!(log.count(EmissionKind::Trail) > 0);
    assert_eq!(log.count(EmissionKind::Trail), log.len());
}

// =============================================================================
// Inversion
// =============================================================================

/// Test that inversion swaps caster and target cells once.
#[test]
fn test_inversion_swaps_once() {
    let mut anim = create("inversion");
    let (mut log, mut board, mut rng) = (EmissionLog::new(), board(), FxRng::new(42));
    let launch = Launch::new(Position::new(0.0, 0.0), Position::new(96.0, 48.0), CELL_B)
        .with_targets([VICTIM])
        .with_launcher(CASTER);

    {
        let mut ctx = FxContext::new(&mut log, &mut board, &mut rng);
        anim.launch(launch, &mut ctx);
        while !anim.is_done() {
            anim.update(3.0, &mut ctx);
        }
        for _ in 0..5 {
            anim.update(3.0, &mut ctx);
        }
    }

    assert_eq!(board.cell(CASTER), Some(CELL_B));
    assert_eq!(board.cell(VICTIM), Some(CELL_A));
    assert_eq!(
        board.moves(),
        &[
            BoardMove { entity: CASTER, from: CELL_A, to: CELL_B, kind: MoveKind::Set },
            BoardMove { entity: VICTIM, from: CELL_B, to: CELL_A, kind: MoveKind::Set },
        ]
    );
}

/// Test that inversion against an entity that left the board skips the swap.
#[test]
fn test_inversion_with_vanished_target() {
    let mut anim = create("inversion");
    let (mut log, mut board, mut rng) = (EmissionLog::new(), board(), FxRng::new(42));
    board.remove(VICTIM);
    let launch = Launch::new(Position::new(0.0, 0.0), Position::new(96.0, 48.0), CELL_B)
        .with_targets([VICTIM])
        .with_launcher(CASTER);

    {
        let mut ctx = FxContext::new(&mut log, &mut board, &mut rng);
        anim.launch(launch, &mut ctx);
        while !anim.is_done() {
            anim.update(5.0, &mut ctx);
        }
    }

    assert!(board.moves().is_empty());
    assert_eq!(board.cell(CASTER), Some(CELL_A));
    assert_eq!(anim.behavior().mutation_applied(), Some(true));
}

// =============================================================================
// Jump
// =============================================================================

/// Test that jump moves the caster at launch and then hands off.
#[test]
fn test_jump_hands_off() {
    let mut anim = create("jump");
    let (mut log, mut board, mut rng) = (EmissionLog::new(), board(), FxRng::new(42));
    let launch = Launch::new(Position::new(0.0, 0.0), Position::new(192.0, 96.0), CELL_C).with_launcher(CASTER);

    {
        let mut ctx = FxContext::new(&mut log, &mut board, &mut rng);
        anim.launch(launch, &mut ctx);
    }
    assert_eq!(
        board.moves(),
        &[BoardMove { entity: CASTER, from: CELL_A, to: CELL_C, kind: MoveKind::Jump }]
    );

    {
        let mut ctx = FxContext::new(&mut log, &mut board, &mut rng);
        anim.update(100.0, &mut ctx);
        anim.update(1.0, &mut ctx);
    }
    assert_eq!(anim.phase(), Phase::Finishing);
    assert!(anim.will_finish());
    assert!(!anim.is_done());
    assert!(anim.finish());
    assert!(anim.is_done());
    assert_eq!(board.moves().len(), 1);
}

/// Test that only the board-mutating families report a mutation flag.
#[test]
fn test_mutation_flag_only_on_movers() {
    let catalog = Catalog::builtin();
    let assets = AssetTable::with_builtin_names();
    for name in catalog.names() {
        let anim = catalog.create(name, &assets).unwrap();
        let flag = anim.behavior().mutation_applied();
        assert_eq!(flag.is_some(), anim.kind().mutates_board(), "{name}");
        assert_ne!(flag, Some(true), "{name} mutated before launch");
        if let Behavior::Jump(jump) = anim.behavior() {
            assert!(!jump.jumped());
        }
    }
}
