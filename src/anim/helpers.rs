//! Emission patterns shared across families.
//!
//! Free functions over `FxContext` rather than methods on a base type, so
//! any family composes the ones it needs. Targets the board no longer knows
//! are skipped.

use serde::{Deserialize, Serialize};

use crate::board::{CellId, EntityId};
use crate::core::{Area, Color, Position, TextureId, Vec3};
use crate::emit::{EmissionRequest, ImageParticle};

use super::context::FxContext;

/// Colors a trail rectangle may take.
pub const TRAIL_COLORS: [Color; 4] = [Color::RED, Color::GREEN, Color::BLUE, Color::YELLOW];

/// Ring burst sinking onto the target's head.
pub fn aureol(ctx: &mut FxContext<'_>, targets: &[EntityId], texture: TextureId) {
    for &target in targets {
        let Some((at, height)) = ctx.anchor(target) else {
            continue;
        };
        ctx.emit(ImageParticle::new(at.at_height(height + 20.0), Vec3::up(-0.6), texture, 60.0));
    }
}

/// Chip icon floating up from above the target's head.
pub fn floating_icon(ctx: &mut FxContext<'_>, targets: &[EntityId], texture: TextureId) {
    for &target in targets {
        let Some((at, height)) = ctx.anchor(target) else {
            continue;
        };
        ctx.emit(ImageParticle::new(at.at_height(height + 40.0), Vec3::up(0.2), texture, 70.0));
    }
}

/// Randomized mote rising around a target (halo, heal cross).
///
/// Motes spawn up to 50 units left or right and 15 up or down of the
/// target, near the ground. The closer to the center, the faster they rise
/// and the longer they live.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sparkle {
    pub texture: TextureId,
}

impl Sparkle {
    #[must_use]
    pub const fn new(texture: TextureId) -> Self {
        Self { texture }
    }

    /// One mote on `target`. Returns `false` if the target is gone.
    pub fn emit(self, ctx: &mut FxContext<'_>, target: EntityId) -> bool {
        let Some(at) = ctx.board.position(target) else {
            return false;
        };
        let dx = ctx.rng.jitter(50.0);
        let dy = ctx.rng.jitter(15.0);
        let z = ctx.rng.range(0.0, 10.0);
        let speed = 1.5 + (50.0 - dx.abs()) / 50.0;
        let life = 80.0 - dx.abs();
        ctx.emit(ImageParticle::new(
            Vec3::new(at.x + dx, at.y + dy, z),
            Vec3::up(speed),
            self.texture,
            life,
        ));
        true
    }

    /// One mote per target; returns how many were emitted.
    pub fn emit_all(self, ctx: &mut FxContext<'_>, targets: &[EntityId]) -> usize {
        targets.iter().filter(|&&t| self.emit(ctx, t)).count()
    }
}

/// Colored ground marker over an area of effect.
pub fn mark_area(ctx: &mut FxContext<'_>, cell: CellId, area: Area, color: Color, duration: Option<f64>) {
    ctx.emit(EmissionRequest::area_marker(cell, area, color, duration));
}

/// Four clouds drifting together above `at`.
pub fn clouds(ctx: &mut FxContext<'_>, at: Position, texture: TextureId, z: f64, life: f64) {
    let layout = [(-50.0, 0.0, 0.5), (50.0, 0.0, -0.5), (10.0, 10.0, 0.2), (-10.0, 10.0, -0.2)];
    for (dx, dz, vx) in layout {
        ctx.emit(ImageParticle::new(
            Vec3::new(at.x + dx, at.y, z + dz),
            Vec3::new(vx, 0.0, 0.0),
            texture,
            life,
        ));
    }
}

/// A translucent rising rectangle, used for teleport trails.
pub fn trail(ctx: &mut FxContext<'_>, at: Position, stretch: f64, color: Color) {
    ctx.emit(EmissionRequest::Trail {
        position: at.at_height(0.0),
        velocity: Vec3::up(1.7),
        angle: 0.0,
        size: (10.0, 10.0),
        growth: (0.0, stretch),
        color,
        alpha: 0.4,
        life: 50.0,
    });
}

/// Pick one of the trail colors.
pub fn trail_color(ctx: &mut FxContext<'_>) -> Color {
    ctx.rng.choose(&TRAIL_COLORS).copied().unwrap_or(Color::WHITE)
}
