//! In-memory board.
//!
//! Tracks which cell each entity stands on, where each cell is drawn, and
//! records every hook call so tests can assert on exactly what a cast did.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::{Position, Vec3};

use super::{Board, CellId, EntityId};

/// How an entity changed cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveKind {
    /// Instant relocation (teleport, swap).
    Set,
    /// Relocation through the entity's jump motion.
    Jump,
}

/// One recorded relocation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardMove {
    pub entity: EntityId,
    pub from: CellId,
    pub to: CellId,
    pub kind: MoveKind,
}

/// Per-entity state kept by the grid.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Occupant {
    pub cell: Option<CellId>,
    pub height: f64,
    /// Longest burn requested so far.
    pub burn: f64,
    pub electrified: u32,
    pub impacts: Vec<(Vec3, Vec3)>,
}

/// Board backed by hash maps.
///
/// ## Usage
///
/// ```
/// use chip_fx::board::{Board, CellId, EntityId, GridBoard};
/// use chip_fx::core::Position;
///
/// let mut board = GridBoard::new();
/// board.add_cell(CellId(1), Position::new(0.0, 0.0));
/// board.add_cell(CellId(2), Position::new(64.0, 32.0));
/// board.place(EntityId(7), CellId(1), 80.0);
///
/// board.set_cell(EntityId(7), CellId(2));
/// assert_eq!(board.position(EntityId(7)), Some(Position::new(64.0, 32.0)));
/// assert_eq!(board.moves().len(), 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct GridBoard {
    cells: FxHashMap<CellId, Position>,
    occupants: FxHashMap<EntityId, Occupant>,
    moves: Vec<BoardMove>,
}

impl GridBoard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a cell and where it is drawn.
    pub fn add_cell(&mut self, cell: CellId, position: Position) {
        self.cells.insert(cell, position);
    }

    /// Put an entity on a cell.
    ///
    /// Panics if the entity is already on the board.
    pub fn place(&mut self, entity: EntityId, cell: CellId, height: f64) {
        if self.occupants.contains_key(&entity) {
            panic!("Entity {:?} already placed on the board", entity);
        }
        self.occupants.insert(
            entity,
            Occupant {
                cell: Some(cell),
                height,
                ..Occupant::default()
            },
        );
    }

    /// Remove an entity; later reads of it return `None`.
    pub fn remove(&mut self, entity: EntityId) -> Option<Occupant> {
        self.occupants.remove(&entity)
    }

    #[must_use]
    pub fn occupant(&self, entity: EntityId) -> Option<&Occupant> {
        self.occupants.get(&entity)
    }

    /// Every relocation so far, in call order.
    #[must_use]
    pub fn moves(&self) -> &[BoardMove] {
        &self.moves
    }

    /// Number of relocations that moved `entity`.
    #[must_use]
    pub fn move_count(&self, entity: EntityId) -> usize {
        self.moves.iter().filter(|m| m.entity == entity).count()
    }

    /// Entities standing on `cell`.
    pub fn entities_on(&self, cell: CellId) -> impl Iterator<Item = EntityId> + '_ {
        self.occupants
            .iter()
            .filter(move |(_, o)| o.cell == Some(cell))
            .map(|(&e, _)| e)
    }

    fn relocate(&mut self, entity: EntityId, to: CellId, kind: MoveKind) {
        let Some(occupant) = self.occupants.get_mut(&entity) else {
            return;
        };
        if let Some(from) = occupant.cell.replace(to) {
            self.moves.push(BoardMove { entity, from, to, kind });
        }
    }
}

impl Board for GridBoard {
    fn position(&self, entity: EntityId) -> Option<Position> {
        let cell = self.occupants.get(&entity)?.cell?;
        self.cells.get(&cell).copied()
    }

    fn height(&self, entity: EntityId) -> Option<f64> {
        self.occupants.get(&entity).map(|o| o.height)
    }

    fn cell(&self, entity: EntityId) -> Option<CellId> {
        self.occupants.get(&entity)?.cell
    }

    fn set_cell(&mut self, entity: EntityId, cell: CellId) {
        self.relocate(entity, cell, MoveKind::Set);
    }

    fn jump_to_cell(&mut self, entity: EntityId, cell: CellId) {
        self.relocate(entity, cell, MoveKind::Jump);
    }

    fn burn(&mut self, entity: EntityId, duration: f64) {
        if let Some(occupant) = self.occupants.get_mut(&entity) {
            occupant.burn = occupant.burn.max(duration);
        }
    }

    fn electrify(&mut self, entity: EntityId) {
        if let Some(occupant) = self.occupants.get_mut(&entity) {
            occupant.electrified += 1;
        }
    }

    fn hurt(&mut self, entity: EntityId, origin: Vec3, velocity: Vec3) {
        if let Some(occupant) = self.occupants.get_mut(&entity) {
            occupant.impacts.push((origin, velocity));
        }
    }
}
