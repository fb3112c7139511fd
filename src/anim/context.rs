//! Launch parameters and the per-tick context.

use smallvec::SmallVec;

use crate::board::{Board, CellId, EntityId};
use crate::core::{FxRng, Position};
use crate::emit::{EffectSink, EmissionRequest};

/// Everything a cast hands to `Animation::launch`.
///
/// Once stored by the animation the launch is never modified: the target
/// list keeps the same entities, in the same order, for the whole run.
///
/// ```
/// use chip_fx::anim::Launch;
/// use chip_fx::board::{CellId, EntityId};
/// use chip_fx::core::Position;
///
/// let launch = Launch::new(Position::new(0.0, 0.0), Position::new(120.0, 60.0), CellId(14))
///     .with_targets([EntityId(3), EntityId(4)])
///     .with_launcher(EntityId(1));
///
/// assert_eq!(launch.targets(), &[EntityId(3), EntityId(4)]);
/// assert_eq!(launch.first_target(), Some(EntityId(3)));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Launch {
    origin: Position,
    target: Position,
    cell: CellId,
    targets: SmallVec<[EntityId; 4]>,
    launcher: Option<EntityId>,
}

impl Launch {
    /// Cast from `origin` at `target`, aimed at `cell`, with no targets yet.
    #[must_use]
    pub fn new(origin: Position, target: Position, cell: CellId) -> Self {
        Self {
            origin,
            target,
            cell,
            targets: SmallVec::new(),
            launcher: None,
        }
    }

    /// Set the affected entities.
    #[must_use]
    pub fn with_targets(mut self, targets: impl IntoIterator<Item = EntityId>) -> Self {
        self.targets = targets.into_iter().collect();
        self
    }

    /// Set the caster.
    #[must_use]
    pub fn with_launcher(mut self, launcher: EntityId) -> Self {
        self.launcher = Some(launcher);
        self
    }

    /// Where the cast started (the caster's position).
    #[must_use]
    pub fn origin(&self) -> Position {
        self.origin
    }

    /// Where the cast lands.
    #[must_use]
    pub fn target(&self) -> Position {
        self.target
    }

    /// Cell the cast is aimed at.
    #[must_use]
    pub fn cell(&self) -> CellId {
        self.cell
    }

    #[must_use]
    pub fn targets(&self) -> &[EntityId] {
        &self.targets
    }

    #[must_use]
    pub fn first_target(&self) -> Option<EntityId> {
        self.targets.first().copied()
    }

    #[must_use]
    pub fn launcher(&self) -> Option<EntityId> {
        self.launcher
    }
}

/// Collaborators an animation talks to while launching and ticking.
///
/// Built by the caller for each frame (or each call); animations keep no
/// reference to any of these between calls.
pub struct FxContext<'a> {
    pub sink: &'a mut dyn EffectSink,
    pub board: &'a mut dyn Board,
    pub rng: &'a mut FxRng,
}

impl<'a> FxContext<'a> {
    pub fn new(sink: &'a mut dyn EffectSink, board: &'a mut dyn Board, rng: &'a mut FxRng) -> Self {
        Self { sink, board, rng }
    }

    /// Submit a request to the sink.
    pub fn emit(&mut self, request: impl Into<EmissionRequest>) {
        self.sink.emit(request.into());
    }

    /// Draw position and head height of an entity, if the board knows it.
    #[must_use]
    pub fn anchor(&self, entity: EntityId) -> Option<(Position, f64)> {
        let position = self.board.position(entity)?;
        Some((position, self.board.height(entity).unwrap_or(0.0)))
    }
}
