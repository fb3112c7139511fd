//! Barrages: things raining on an area over time.
//!
//! - `Meteorite` fires a fixed number of meteorites at random intervals and
//!   raises the finishing signal once the last one is out. Duration expiry
//!   does not end it.
//! - `Rockfall` drops a rock every 10 time units.
//! - `DevilStrike` fires a laser from above every 12 time units.

use std::f64::consts::FRAC_PI_2;

use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::core::{Area, Color, ConfigError, ConfigResult, SoundId, TextureId, Vec3};
use crate::emit::{EmissionRequest, ImageParticle};

use super::behavior::{Family, FamilyKind};
use super::context::{FxContext, Launch};
use super::helpers::mark_area;
use super::lifecycle::{CompletionPolicy, Interval, Lifecycle};

/// Meteorites in a default barrage.
pub const DEFAULT_METEORITES: u32 = 6;

/// Meteorite barrage.
#[derive(Clone, Debug, PartialEq)]
pub struct Meteorite {
    /// Horizontal drift shared by the whole barrage, drawn at launch.
    drift: f64,
    remaining_bursts: u32,
    bursts: u32,
    next: Interval,
}

impl Meteorite {
    pub const MARKER: Color = Color::rgb(0xf26304);
    pub const MARKER_DURATION: f64 = 180.0;

    /// `bursts` counts the delay expiries, including the last one that only
    /// ends the barrage; a barrage of `bursts` fires `bursts - 1` meteorites.
    #[must_use]
    pub fn new(bursts: u32) -> Self {
        Self {
            drift: 0.0,
            remaining_bursts: bursts,
            bursts,
            next: Interval::primed(0.0).exclusive(),
        }
    }

    /// Bursts still to come.
    #[must_use]
    pub fn remaining_bursts(&self) -> u32 {
        self.remaining_bursts
    }

    #[must_use]
    pub fn bursts(&self) -> u32 {
        self.bursts
    }
}

impl Default for Meteorite {
    fn default() -> Self {
        Self::new(DEFAULT_METEORITES)
    }
}

impl Family for Meteorite {
    fn kind(&self) -> FamilyKind {
        FamilyKind::Meteorite
    }

    fn policy(&self) -> CompletionPolicy {
        CompletionPolicy::Bursts
    }

    fn validate(&self, animation: &str) -> ConfigResult<()> {
        if self.bursts == 0 {
            return Err(ConfigError::EmptyBurst {
                animation: animation.to_owned(),
            });
        }
        Ok(())
    }

    fn on_launch(&mut self, launch: &Launch, ctx: &mut FxContext<'_>) {
        self.drift = ctx.rng.range(500.0, 800.0) * ctx.rng.sign();
        mark_area(ctx, launch.cell(), Area::Circle2, Self::MARKER, Some(Self::MARKER_DURATION));
    }

    fn on_tick(&mut self, dt: f64, clock: &mut Lifecycle, launch: &Launch, ctx: &mut FxContext<'_>) {
        self.next.elapse(dt);
        if !self.next.is_due() || self.remaining_bursts == 0 {
            return;
        }
        let delay = ctx.rng.range(5.0, 20.0);
        self.next.rearm_in(delay);
        self.remaining_bursts -= 1;

        if self.remaining_bursts == 0 {
            debug!("meteorite barrage exhausted");
            clock.begin_finishing();
            return;
        }
        let at = launch.target();
        let z = at.y + 200.0;
        let position = Vec3::new(at.x + self.drift + ctx.rng.jitter(60.0), at.y + ctx.rng.jitter(60.0), z);
        let size = ctx.rng.range(0.7, 1.2);
        let targets: SmallVec<[_; 4]> = launch.targets().iter().copied().collect();
        trace!(left = self.remaining_bursts, "meteorite");
        ctx.emit(EmissionRequest::Meteorite {
            position,
            angle: self.drift.atan2(z) + FRAC_PI_2,
            size,
            targets,
            last: self.remaining_bursts == 1,
        });
    }
}

/// Rocks falling on the area.
#[derive(Clone, Debug, PartialEq)]
pub struct Rockfall {
    rock: TextureId,
    drops: Interval,
}

impl Rockfall {
    pub const MARKER: Color = Color::rgb(0xc5c2c6);
    pub const MARKER_DURATION: f64 = 100.0;

    #[must_use]
    pub fn new(rock: TextureId) -> Self {
        Self {
            rock,
            drops: Interval::primed(10.0),
        }
    }
}

impl Family for Rockfall {
    fn kind(&self) -> FamilyKind {
        FamilyKind::Rockfall
    }

    fn on_launch(&mut self, launch: &Launch, ctx: &mut FxContext<'_>) {
        mark_area(ctx, launch.cell(), Area::Circle2, Self::MARKER, Some(Self::MARKER_DURATION));
    }

    fn on_tick(&mut self, dt: f64, _clock: &mut Lifecycle, launch: &Launch, ctx: &mut FxContext<'_>) {
        if !self.drops.tick(dt) {
            return;
        }
        let at = launch.target();
        let position = Vec3::new(
            at.x + ctx.rng.jitter(50.0),
            at.y + ctx.rng.jitter(50.0),
            120.0 + ctx.rng.range(0.0, 100.0),
        );
        let velocity = Vec3::up(-1.0 - ctx.rng.range(0.0, 3.0));
        let scale = 0.3 + ctx.rng.range(0.0, 0.5);
        ctx.emit(EmissionRequest::Debris {
            position,
            velocity,
            texture: self.rock,
            scale,
        });
    }
}

/// Daemon shadow over a red circle, lasers raining down around it.
#[derive(Clone, Debug, PartialEq)]
pub struct DevilStrike {
    circle: TextureId,
    shadow: TextureId,
    laser: TextureId,
    shot_sound: Option<SoundId>,
    shots: Interval,
}

impl DevilStrike {
    pub const LASER_LENGTH: f64 = 500.0;
    pub const LASER_HEIGHT: f64 = 230.0;

    #[must_use]
    pub fn new(circle: TextureId, shadow: TextureId, laser: TextureId) -> Self {
        Self {
            circle,
            shadow,
            laser,
            shot_sound: None,
            shots: Interval::primed(12.0),
        }
    }

    /// Sound played with every laser.
    #[must_use]
    pub fn with_shot_sound(mut self, sound: SoundId) -> Self {
        self.shot_sound = Some(sound);
        self
    }
}

impl Family for DevilStrike {
    fn kind(&self) -> FamilyKind {
        FamilyKind::DevilStrike
    }

    fn on_launch(&mut self, launch: &Launch, ctx: &mut FxContext<'_>) {
        let at = launch.target();
        mark_area(ctx, launch.cell(), Area::Circle3, Color::RED, Some(180.0));
        ctx.emit(
            ImageParticle::new(at.at_height(0.0), Vec3::ZERO, self.circle, 120.0)
                .with_scale(0.6)
                .on_ground(),
        );
        ctx.emit(ImageParticle::new(at.at_height(50.0), Vec3::up(1.2), self.shadow, 100.0).with_scale(0.9));
    }

    fn on_tick(&mut self, dt: f64, _clock: &mut Lifecycle, launch: &Launch, ctx: &mut FxContext<'_>) {
        if !self.shots.tick(dt) {
            return;
        }
        let at = launch.target();
        let origin = Vec3::new(
            at.x + ctx.rng.jitter(125.0),
            at.y + ctx.rng.jitter(62.5),
            Self::LASER_HEIGHT,
        );
        ctx.emit(EmissionRequest::Laser {
            origin,
            angle: FRAC_PI_2,
            length: Self::LASER_LENGTH,
            texture: self.laser,
        });
        if let Some(sound) = self.shot_sound {
            ctx.sink.play(sound);
        }
    }
}
