//! Halos radiating from the first target: liberation, antidote, alteration.

use std::f64::consts::{FRAC_PI_4, TAU};

use crate::core::{TextureId, Vec3};
use crate::emit::ImageParticle;

use super::behavior::{Family, FamilyKind};
use super::context::{FxContext, Launch};
use super::lifecycle::{Interval, Lifecycle};

/// Random halo flying off the first target, on about half the ticks.
#[derive(Clone, Debug, PartialEq)]
pub struct Orbit {
    halo: TextureId,
}

impl Orbit {
    pub const CHANCE: f64 = 0.5;

    #[must_use]
    pub fn new(halo: TextureId) -> Self {
        Self { halo }
    }
}

impl Family for Orbit {
    fn kind(&self) -> FamilyKind {
        FamilyKind::Orbit
    }

    fn on_launch(&mut self, _launch: &Launch, _ctx: &mut FxContext<'_>) {}

    fn on_tick(&mut self, _dt: f64, _clock: &mut Lifecycle, launch: &Launch, ctx: &mut FxContext<'_>) {
        let Some(target) = launch.first_target() else {
            return;
        };
        if !ctx.rng.chance(Self::CHANCE) {
            return;
        }
        let Some(at) = ctx.board.position(target) else {
            return;
        };
        let a = ctx.rng.angle();
        let (dx, dy) = (a.cos() * 2.0, a.sin());
        ctx.emit(
            ImageParticle::new(
                Vec3::new(at.x + dx * 10.0, at.y + dy * 10.0, 50.0),
                Vec3::new(dx, dy, 0.0),
                self.halo,
                60.0,
            )
            .with_rotation(dy.atan2(dx)),
        );
    }
}

/// Ten halos burst from the first target every 4 time units, along
/// directions fixed at launch.
#[derive(Clone, Debug, PartialEq)]
pub struct Alteration {
    texture: TextureId,
    directions: Vec<f64>,
    bursts: Interval,
}

impl Alteration {
    pub const RAYS: usize = 10;

    #[must_use]
    pub fn new(texture: TextureId) -> Self {
        Self {
            texture,
            directions: Vec::new(),
            bursts: Interval::starting_at(2.0, 4.0).exclusive(),
        }
    }

    /// Burst directions, drawn at launch.
    #[must_use]
    pub fn directions(&self) -> &[f64] {
        &self.directions
    }
}

impl Family for Alteration {
    fn kind(&self) -> FamilyKind {
        FamilyKind::Alteration
    }

    fn on_launch(&mut self, _launch: &Launch, ctx: &mut FxContext<'_>) {
        self.directions = (0..Self::RAYS)
            .map(|i| TAU * i as f64 / Self::RAYS as f64 + ctx.rng.range(0.0, FRAC_PI_4))
            .collect();
    }

    fn on_tick(&mut self, dt: f64, _clock: &mut Lifecycle, launch: &Launch, ctx: &mut FxContext<'_>) {
        let Some(target) = launch.first_target() else {
            return;
        };
        if !self.bursts.tick(dt) {
            return;
        }
        let Some(at) = ctx.board.position(target) else {
            return;
        };
        for &direction in &self.directions {
            let dx = direction.cos() * 2.6;
            let dy = direction.sin() * 1.3;
            ctx.emit(
                ImageParticle::new(
                    Vec3::new(at.x + dx * 5.0, at.y + dy * 5.0, 50.0),
                    Vec3::new(dx, dy, 0.0),
                    self.texture,
                    50.0,
                )
                .with_rotation(dy.atan2(dx)),
            );
        }
    }
}
