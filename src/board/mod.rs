//! Entity/board model contract.
//!
//! Animations never own entities. They hold `EntityId`s and go through the
//! `Board` trait to read where an entity is drawn and to call the handful
//! of mutation hooks a cast needs (relocation, burn, electrify, impact).
//!
//! `GridBoard` is an in-memory implementation for tests, tools and
//! headless simulation.

mod grid;

pub use grid::{BoardMove, GridBoard, MoveKind, Occupant};

use serde::{Deserialize, Serialize};

use crate::core::{Position, Vec3};

/// Reference to an entity (actor) on the board.
///
/// This is a weak reference: the board may no longer know the entity, in
/// which case reads return `None` and animations skip it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityId(pub u32);

impl EntityId {
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Entity({})", self.0)
    }
}

/// Identifier of a board cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellId(pub u32);

impl CellId {
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CellId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Cell({})", self.0)
    }
}

/// The slice of the game's entity model that animations touch.
///
/// Mutation hooks are assumed non-reentrant; the animations that call
/// `set_cell`/`jump_to_cell` guard them with one-time flags.
pub trait Board {
    /// Current draw position of an entity.
    fn position(&self, entity: EntityId) -> Option<Position>;

    /// Height of the entity's sprite, used to place effects above its head.
    fn height(&self, entity: EntityId) -> Option<f64>;

    /// Cell the entity currently occupies.
    fn cell(&self, entity: EntityId) -> Option<CellId>;

    /// Move the entity to `cell` instantly.
    fn set_cell(&mut self, entity: EntityId, cell: CellId);

    /// Move the entity to `cell` with the entity's own jump motion.
    fn jump_to_cell(&mut self, entity: EntityId, cell: CellId);

    /// Start the entity's burning animation for `duration` time units.
    fn burn(&mut self, entity: EntityId, duration: f64);

    /// Flash the entity as electrified.
    fn electrify(&mut self, entity: EntityId);

    /// Show a hit on the entity coming from `origin` with `velocity`.
    fn hurt(&mut self, entity: EntityId, origin: Vec3, velocity: Vec3);
}
