//! Electric families: storm clouds (shock, flash, lightning) and plasma.

use std::f64::consts::{FRAC_PI_2, PI};

use tracing::trace;

use crate::core::error::check_timing;
use crate::core::{Area, Color, ConfigResult, SoundId, TextureId, Vec3};
use crate::emit::EmissionRequest;

use super::behavior::{Family, FamilyKind};
use super::context::{FxContext, Launch};
use super::helpers::{clouds, mark_area};
use super::lifecycle::{Interval, Lifecycle};

/// Clouds gather over the target and bolts strike it on a fixed period.
///
/// Each bolt starts 200 units above the target, offset horizontally by up
/// to `spread`, and every target is electrified with it.
#[derive(Clone, Debug, PartialEq)]
pub struct Storm {
    cloud: TextureId,
    cloud_z: f64,
    cloud_life: f64,
    bolt: TextureId,
    spread: f64,
    strikes: Interval,
    area: Option<(Area, Color)>,
    bolts: u32,
}

impl Storm {
    #[must_use]
    pub fn new(cloud: TextureId, cloud_z: f64, cloud_life: f64, bolt: TextureId, spread: f64, period: f64) -> Self {
        Self {
            cloud,
            cloud_z,
            cloud_life,
            bolt,
            spread,
            strikes: Interval::every(period),
            area: None,
            bolts: 0,
        }
    }

    /// Mark the area at launch.
    #[must_use]
    pub fn with_area(mut self, area: Area, color: Color) -> Self {
        self.area = Some((area, color));
        self
    }

    #[must_use]
    pub fn bolts(&self) -> u32 {
        self.bolts
    }
}

impl Family for Storm {
    fn kind(&self) -> FamilyKind {
        FamilyKind::Storm
    }

    fn validate(&self, animation: &str) -> ConfigResult<()> {
        check_timing(animation, "period", self.strikes.period())?;
        check_timing(animation, "cloud_life", self.cloud_life)?;
        Ok(())
    }

    fn on_launch(&mut self, launch: &Launch, ctx: &mut FxContext<'_>) {
        clouds(ctx, launch.target(), self.cloud, self.cloud_z, self.cloud_life);
        if let Some((area, color)) = self.area {
            mark_area(ctx, launch.cell(), area, color, None);
        }
    }

    fn on_tick(&mut self, dt: f64, _clock: &mut Lifecycle, launch: &Launch, ctx: &mut FxContext<'_>) {
        if !self.strikes.tick(dt) {
            return;
        }
        let at = launch.target();
        let da = ctx.rng.jitter(PI / 40.0);
        let dx = ctx.rng.jitter(self.spread);
        let dy = ctx.rng.jitter(2.0);
        ctx.emit(EmissionRequest::lightning(
            Vec3::new(at.x + dx, at.y - 200.0 + dy, 0.0),
            FRAC_PI_2 + da,
            at,
            self.bolt,
        ));
        for &target in launch.targets() {
            ctx.board.electrify(target);
        }
        self.bolts += 1;
        trace!(bolt = self.bolts, "storm strike");
    }
}

/// A plasma orb hovering over the cell arcs to every target standing
/// elsewhere in its area.
#[derive(Clone, Debug, PartialEq)]
pub struct Plasma {
    orb: TextureId,
    bolts: [TextureId; 2],
    sounds: Vec<SoundId>,
    arcs: Interval,
    life: f64,
}

impl Plasma {
    /// Height of the orb above the cell.
    pub const HEIGHT: f64 = 20.0;
    /// Segments per arc.
    pub const SEGMENTS: u32 = 25;

    /// `life` is how long the orb and its marker stay; normally the
    /// animation's own duration.
    #[must_use]
    pub fn new(orb: TextureId, bolts: [TextureId; 2], life: f64) -> Self {
        Self {
            orb,
            bolts,
            sounds: Vec::new(),
            arcs: Interval::primed(1.0),
            life,
        }
    }

    /// Extra sounds played together at launch.
    #[must_use]
    pub fn with_sounds(mut self, sounds: impl IntoIterator<Item = SoundId>) -> Self {
        self.sounds = sounds.into_iter().collect();
        self
    }
}

impl Family for Plasma {
    fn kind(&self) -> FamilyKind {
        FamilyKind::Plasma
    }

    fn validate(&self, animation: &str) -> ConfigResult<()> {
        check_timing(animation, "life", self.life).map(drop)
    }

    fn on_launch(&mut self, launch: &Launch, ctx: &mut FxContext<'_>) {
        for &sound in &self.sounds {
            ctx.sink.play(sound);
        }
        ctx.emit(EmissionRequest::Plasma {
            position: launch.target().at_height(Self::HEIGHT),
            texture: self.orb,
            life: self.life,
        });
        mark_area(ctx, launch.cell(), Area::Plus2, Color::rgb(0x2400ff), Some(self.life));
    }

    fn on_tick(&mut self, dt: f64, _clock: &mut Lifecycle, launch: &Launch, ctx: &mut FxContext<'_>) {
        if !self.arcs.tick(dt) {
            return;
        }
        let orb = launch.target();
        for &target in launch.targets() {
            if ctx.board.cell(target) == Some(launch.cell()) {
                continue;
            }
            let Some(at) = ctx.board.position(target) else {
                continue;
            };
            let angle = ((at.y - orb.y + Self::HEIGHT) / 2.0).atan2(at.x - orb.x);
            let texture = ctx.rng.choose(&self.bolts).copied().unwrap_or(self.orb);
            ctx.emit(EmissionRequest::Lightning {
                origin: orb.at_height(Self::HEIGHT),
                angle,
                target: at,
                texture,
                segments: Some(Self::SEGMENTS),
            });
        }
        for &target in launch.targets() {
            ctx.board.electrify(target);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{CellId, EntityId, GridBoard};
    use crate::core::{FxRng, Position};
    use crate::emit::{EmissionKind, EmissionLog};

    fn board() -> GridBoard {
        let mut board = GridBoard::new();
        board.add_cell(CellId(1), Position::new(0.0, 0.0));
        board.add_cell(CellId(2), Position::new(64.0, 32.0));
        board.place(EntityId(1), CellId(1), 60.0);
        board.place(EntityId(2), CellId(2), 60.0);
        board
    }

    fn launch() -> Launch {
        Launch::new(Position::new(0.0, 0.0), Position::new(0.0, 0.0), CellId(1))
            .with_targets([EntityId(1), EntityId(2)])
    }

    #[test]
    fn test_storm_bolts_on_period() {
        let (mut log, mut board, mut rng) = (EmissionLog::new(), board(), FxRng::new(2));
        let mut ctx = FxContext::new(&mut log, &mut board, &mut rng);
        let mut clock = Lifecycle::new(60.0, Default::default());
        clock.start();

        let mut shock = Storm::new(TextureId(1), 220.0, 70.0, TextureId(2), 30.0, 2.0);
        shock.on_launch(&launch(), &mut ctx);
        while clock.advance(1.0) {
            shock.on_tick(1.0, &mut clock, &launch(), &mut ctx);
        }

        assert_eq!(shock.bolts(), 30);
        assert_eq!(log.count(EmissionKind::Lightning), 30);
        assert_eq!(log.count_texture(TextureId(1)), 4);
        assert_eq!(log.count(EmissionKind::AreaMarker), 0);
        assert_eq!(board.occupant(EntityId(2)).map(|o| o.electrified), Some(30));
    }

    #[test]
    fn test_storm_bolt_geometry() {
        let (mut log, mut board, mut rng) = (EmissionLog::new(), board(), FxRng::new(2));
        let mut ctx = FxContext::new(&mut log, &mut board, &mut rng);
        let mut clock = Lifecycle::new(80.0, Default::default());

        let mut storm = Storm::new(TextureId(1), 230.0, 90.0, TextureId(2), 40.0, 1.0).with_area(Area::Circle2, Color::RED);
        storm.on_launch(&launch(), &mut ctx);
        for _ in 0..50 {
            storm.on_tick(1.0, &mut clock, &launch(), &mut ctx);
        }

        assert_eq!(log.count(EmissionKind::AreaMarker), 1);
        for request in log.requests() {
            if let EmissionRequest::Lightning { origin, angle, target, .. } = request {
                assert!(origin.x.abs() <= 40.0);
                assert!((origin.y + 200.0).abs() <= 2.0);
                assert!((angle - FRAC_PI_2).abs() <= PI / 40.0);
                assert_eq!(*target, Position::new(0.0, 0.0));
            }
        }
    }

    #[test]
    fn test_plasma_arcs_skip_center_cell() {
        let (mut log, mut board, mut rng) = (EmissionLog::new(), board(), FxRng::new(2));
        let mut ctx = FxContext::new(&mut log, &mut board, &mut rng);
        let mut clock = Lifecycle::new(120.0, Default::default());

        let mut plasma = Plasma::new(TextureId(5), [TextureId(6), TextureId(7)], 120.0)
            .with_sounds([SoundId(1), SoundId(2)]);
        plasma.on_launch(&launch(), &mut ctx);
        for _ in 0..3 {
            plasma.on_tick(1.0, &mut clock, &launch(), &mut ctx);
        }

        assert_eq!(log.sounds(), &[SoundId(1), SoundId(2)]);
        assert_eq!(log.count(EmissionKind::Plasma), 1);
        assert_eq!(log.count(EmissionKind::Lightning), 3);
        assert_eq!(
            log.requests()[1],
            EmissionRequest::area_marker(CellId(1), Area::Plus2, Color::rgb(0x2400ff), Some(120.0))
        );
        let Some(EmissionRequest::Lightning { origin, target, segments, angle, texture }) = log.requests().last() else {
            panic!("Expected Lightning");
        };
        assert_eq!(*origin, Vec3::new(0.0, 0.0, 20.0));
        assert_eq!(*target, Position::new(64.0, 32.0));
        assert_eq!(*segments, Some(25));
        assert!((angle - (26.0f64).atan2(64.0)).abs() < 1e-12);
        assert!([TextureId(6), TextureId(7)].contains(texture));
        assert_eq!(board.occupant(EntityId(1)).map(|o| o.electrified), Some(3));
    }
}
