//! Steal effects: precipitation, covetousness, vampirization.
//!
//! The caster takes something from everyone in the area. At launch the
//! area is marked and the chip icon and aureol appear over the caster.
//! Then, every few time units during the first half of the animation,
//! every other target spins a particle towards the caster while the caster
//! gets its own sparkle. The sparkle is the only thing that differs
//! between the three variants.

use tracing::{trace, warn};

use crate::core::{Area, Color, TextureId};

use super::behavior::{Family, FamilyKind};
use super::context::{FxContext, Launch};
use super::helpers::{aureol, floating_icon, mark_area, Sparkle};
use super::lifecycle::{Interval, Lifecycle};
use crate::emit::EmissionRequest;

/// Default duration of a steal effect.
pub const STEAL_DURATION: f64 = 110.0;
/// Time between two steal pulses.
pub const STEAL_INTERVAL: f64 = 3.0;
/// Pulses stop once the remaining duration falls to this.
pub const STEAL_CUTOFF: f64 = 60.0;

/// State of a steal animation.
#[derive(Clone, Debug, PartialEq)]
pub struct Steal {
    icon: TextureId,
    aureol: TextureId,
    spinning: TextureId,
    caster_sparkle: Sparkle,
    area: Area,
    color: Color,
    pulse: Interval,
    pulses: u32,
}

impl Steal {
    #[must_use]
    pub fn new(
        icon: TextureId,
        aureol: TextureId,
        spinning: TextureId,
        caster_sparkle: Sparkle,
        area: Area,
        color: Color,
    ) -> Self {
        Self {
            icon,
            aureol,
            spinning,
            caster_sparkle,
            area,
            color,
            pulse: Interval::every(STEAL_INTERVAL).exclusive(),
            pulses: 0,
        }
    }

    /// Pulses fired so far.
    #[must_use]
    pub fn pulses(&self) -> u32 {
        self.pulses
    }
}

impl Family for Steal {
    fn kind(&self) -> FamilyKind {
        FamilyKind::Steal
    }

    fn on_launch(&mut self, launch: &Launch, ctx: &mut FxContext<'_>) {
        mark_area(ctx, launch.cell(), self.area, self.color, None);
        match launch.launcher() {
            Some(caster) => {
                floating_icon(ctx, &[caster], self.icon);
                aureol(ctx, &[caster], self.aureol);
            }
            None => warn!("steal effect launched without a caster"),
        }
    }

    fn on_tick(&mut self, dt: f64, clock: &mut Lifecycle, launch: &Launch, ctx: &mut FxContext<'_>) {
        self.pulse.elapse(dt);
        if !self.pulse.is_due() || clock.remaining() <= STEAL_CUTOFF {
            return;
        }
        self.pulses += 1;
        trace!(pulse = self.pulses, "steal pulse");
        for &target in launch.targets() {
            if Some(target) == launch.launcher() {
                self.caster_sparkle.emit(ctx, target);
            } else if let Some(at) = ctx.board.position(target) {
                ctx.emit(EmissionRequest::Spinning {
                    position: at,
                    angle: std::f64::consts::FRAC_PI_2,
                    texture: self.spinning,
                });
            }
        }
        self.pulse.rearm();
    }
}
