//! Fire: flame, spark and burning.
//!
//! Flame and spark set their targets burning at launch; flame then keeps
//! scorching them every 12 time units. Burning shows its chip icon over the
//! targets and marks a wide red area instead.

use tracing::trace;

use crate::core::error::check_timing;
use crate::core::{Area, Color, ConfigError, ConfigResult, TextureId, Vec3};

use super::behavior::{Family, FamilyKind};
use super::context::{FxContext, Launch};
use super::helpers::{floating_icon, mark_area};
use super::lifecycle::{Interval, Lifecycle};

/// Fire family state. Every part is optional; the variants differ only in
/// which parts they enable.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Fire {
    burn: Option<f64>,
    icon: Option<TextureId>,
    area: Option<(Area, Color)>,
    scorch: Option<Interval>,
}

impl Fire {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start every target burning for `duration` at launch.
    #[must_use]
    pub fn with_burn(mut self, duration: f64) -> Self {
        self.burn = Some(duration);
        self
    }

    /// Float `icon` over the targets at launch.
    #[must_use]
    pub fn with_icon(mut self, icon: TextureId) -> Self {
        self.icon = Some(icon);
        self
    }

    #[must_use]
    pub fn with_area(mut self, area: Area, color: Color) -> Self {
        self.area = Some((area, color));
        self
    }

    /// Hurt every target after `initial`, then every `period`.
    #[must_use]
    pub fn with_scorch(mut self, initial: f64, period: f64) -> Self {
        self.scorch = Some(Interval::starting_at(initial, period));
        self
    }
}

impl Family for Fire {
    fn kind(&self) -> FamilyKind {
        FamilyKind::Fire
    }

    fn validate(&self, animation: &str) -> ConfigResult<()> {
        if let Some(burn) = self.burn {
            check_timing(animation, "burn", burn)?;
        }
        if let Some(scorch) = &self.scorch {
            check_timing(animation, "scorch period", scorch.period())?;
            let initial = scorch.delay();
            if !(initial.is_finite() && initial >= 0.0) {
                return Err(ConfigError::InvalidTiming {
                    animation: animation.to_owned(),
                    field: "scorch delay",
                    value: initial,
                });
            }
        }
        Ok(())
    }

    fn on_launch(&mut self, launch: &Launch, ctx: &mut FxContext<'_>) {
        if let Some(duration) = self.burn {
            for &target in launch.targets() {
                ctx.board.burn(target, duration);
            }
        }
        if let Some(icon) = self.icon {
            floating_icon(ctx, launch.targets(), icon);
        }
        if let Some((area, color)) = self.area {
            mark_area(ctx, launch.cell(), area, color, None);
        }
    }

    fn on_tick(&mut self, dt: f64, _clock: &mut Lifecycle, launch: &Launch, ctx: &mut FxContext<'_>) {
        let Some(scorch) = self.scorch.as_mut() else {
            return;
        };
        if !scorch.tick(dt) {
            return;
        }
        trace!(targets = launch.targets().len(), "scorch");
        for &target in launch.targets() {
            let Some(at) = ctx.board.position(target) else {
                continue;
            };
            let z = 20.0 + ctx.rng.range(0.0, 30.0);
            let velocity = Vec3::new(ctx.rng.jitter(4.0), ctx.rng.jitter(4.0), 0.0);
            let origin = Vec3::new(at.x + ctx.rng.jitter(20.0), at.y + ctx.rng.jitter(20.0), z);
            ctx.board.hurt(target, origin, velocity);
        }
    }
}
