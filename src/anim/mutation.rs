//! Board-mutating families: teleport, inversion, jump.
//!
//! Each of these changes cell occupancy exactly once per animation. The
//! mutation is guarded by a flag on the family state, so ticks after it
//! never repeat it whatever the remaining duration does.

use tracing::{debug, warn};

use super::behavior::{Family, FamilyKind};
use super::context::{FxContext, Launch};
use super::helpers::{trail, trail_color};
use super::lifecycle::{CompletionPolicy, Lifecycle};

/// Default duration of a teleport.
pub const TELEPORT_DURATION: f64 = 140.0;
/// Default duration of an inversion.
pub const INVERSION_DURATION: f64 = 120.0;
/// Default duration of a jump.
pub const JUMP_DURATION: f64 = 70.0;

/// Teleport: trails rise from both ends, then the target is relocated.
///
/// Origin trails stop once 70 units remain; target trails start once fewer
/// than 100 remain. The relocation happens the first tick with fewer than
/// 50 remaining.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Teleport {
    teleported: bool,
}

impl Teleport {
    pub const TRAIL_CHANCE: f64 = 0.4;
    const ORIGIN_UNTIL: f64 = 70.0;
    const TARGET_FROM: f64 = 100.0;
    const RELOCATE_AT: f64 = 50.0;

    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn teleported(&self) -> bool {
        self.teleported
    }
}

impl Family for Teleport {
    fn kind(&self) -> FamilyKind {
        FamilyKind::Teleport
    }

    fn on_launch(&mut self, _launch: &Launch, _ctx: &mut FxContext<'_>) {}

    fn on_tick(&mut self, _dt: f64, clock: &mut Lifecycle, launch: &Launch, ctx: &mut FxContext<'_>) {
        let remaining = clock.remaining();
        if ctx.rng.chance(Self::TRAIL_CHANCE) {
            let xx = ctx.rng.jitter(30.0);
            let yy = ctx.rng.jitter(15.0);
            let color = trail_color(ctx);
            if remaining > Self::ORIGIN_UNTIL {
                trail(ctx, launch.origin().offset(xx, yy), 0.5, color);
            }
            if remaining < Self::TARGET_FROM {
                trail(ctx, launch.target().offset(xx, yy), 0.5, color);
            }
        }

        if self.teleported || remaining >= Self::RELOCATE_AT {
            return;
        }
        self.teleported = true;
        match launch.first_target() {
            Some(entity) => {
                debug!(%entity, cell = %launch.cell(), "teleport");
                ctx.board.set_cell(entity, launch.cell());
            }
            None => warn!(cell = %launch.cell(), "teleport without a target, skipping relocation"),
        }
    }
}

/// Inversion: the caster and the target swap cells.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Inversion {
    inverted: bool,
}

impl Inversion {
    pub const TRAIL_CHANCE: f64 = 0.2;
    const SWAP_AT: f64 = 40.0;

    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn inverted(&self) -> bool {
        self.inverted
    }
}

impl Family for Inversion {
    fn kind(&self) -> FamilyKind {
        FamilyKind::Inversion
    }

    fn on_launch(&mut self, _launch: &Launch, _ctx: &mut FxContext<'_>) {}

    fn on_tick(&mut self, _dt: f64, clock: &mut Lifecycle, launch: &Launch, ctx: &mut FxContext<'_>) {
        let remaining = clock.remaining();
        if remaining > Self::SWAP_AT && ctx.rng.chance(Self::TRAIL_CHANCE) {
            let xx = ctx.rng.jitter(30.0);
            let color = trail_color(ctx);
            trail(ctx, launch.origin().offset(xx, 0.0), 0.6, color);
            trail(ctx, launch.target().offset(xx, 0.0), 0.6, color);
        }

        if self.inverted || remaining >= Self::SWAP_AT {
            return;
        }
        // Both ends must be known before the swap; otherwise retry next tick.
        let (Some(caster), Some(target)) = (launch.launcher(), launch.first_target()) else {
            return;
        };
        let (Some(from), Some(to)) = (ctx.board.cell(caster), ctx.board.cell(target)) else {
            warn!(%caster, %target, "inversion with an entity off the board, skipping swap");
            self.inverted = true;
            return;
        };
        self.inverted = true;
        debug!(%caster, %target, "inversion");
        ctx.board.set_cell(caster, to);
        ctx.board.set_cell(target, from);
    }
}

/// Jump: the caster jumps to the target cell at launch.
///
/// The entity's own jump motion is what the player watches, so the
/// animation raises the finishing signal on expiry and lets the driver
/// run its end-of-move sync before completing it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Jump {
    jumped: bool,
}

impl Jump {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn jumped(&self) -> bool {
        self.jumped
    }
}

impl Family for Jump {
    fn kind(&self) -> FamilyKind {
        FamilyKind::Jump
    }

    fn policy(&self) -> CompletionPolicy {
        CompletionPolicy::Handoff
    }

    fn on_launch(&mut self, launch: &Launch, ctx: &mut FxContext<'_>) {
        if self.jumped {
            return;
        }
        self.jumped = true;
        match launch.launcher() {
            Some(caster) => {
                debug!(%caster, cell = %launch.cell(), "jump");
                ctx.board.jump_to_cell(caster, launch.cell());
            }
            None => warn!(cell = %launch.cell(), "jump without a caster, skipping relocation"),
        }
    }
}
