//! Punishment: four spikes close in on the target; a sword strike sounds
//! just before the end.

use tracing::trace;

use crate::core::{SoundId, TextureId};
use crate::emit::EmissionRequest;

use super::behavior::{Family, FamilyKind};
use super::context::{FxContext, Launch};
use super::lifecycle::Lifecycle;

#[derive(Clone, Debug, PartialEq)]
pub struct Punishment {
    spikes: [TextureId; 2],
    sword: Option<SoundId>,
    sword_played: bool,
}

impl Punishment {
    /// Spike thrust length.
    pub const THRUST: f64 = 40.0;
    /// Distance of the spikes from the target.
    pub const SPREAD: f64 = 60.0;
    pub const SPIKE_LIFE: f64 = 40.0;
    /// The sword sounds once fewer than this remain.
    pub const SWORD_AT: f64 = 7.0;

    #[must_use]
    pub fn new(spikes: [TextureId; 2]) -> Self {
        Self {
            spikes,
            sword: None,
            sword_played: false,
        }
    }

    #[must_use]
    pub fn with_sword(mut self, sound: SoundId) -> Self {
        self.sword = Some(sound);
        self
    }

    #[must_use]
    pub fn sword_played(&self) -> bool {
        self.sword_played
    }
}

impl Family for Punishment {
    fn kind(&self) -> FamilyKind {
        FamilyKind::Punishment
    }

    fn on_launch(&mut self, launch: &Launch, ctx: &mut FxContext<'_>) {
        let at = launch.target();
        let (s, d) = (Self::THRUST, Self::SPREAD);
        // Left pair thrusts right, right pair thrusts left (flipped).
        let layout = [
            (-d, d / 2.0, 40.0, (s, -s / 2.0), 0, false),
            (-d, -d / 2.0, 46.0, (s, s / 2.0), 1, false),
            (d, d / 2.0, 40.0, (-s, -s / 2.0), 0, true),
            (d, -d / 2.0, 46.0, (-s, s / 2.0), 1, true),
        ];
        for (dx, dy, z, direction, spike, flip) in layout {
            ctx.emit(EmissionRequest::Spike {
                position: at.offset(dx, dy).at_height(z),
                direction,
                texture: self.spikes[spike],
                life: Self::SPIKE_LIFE,
                flip,
            });
        }
    }

    fn on_tick(&mut self, _dt: f64, clock: &mut Lifecycle, _launch: &Launch, ctx: &mut FxContext<'_>) {
        if self.sword_played || clock.remaining() >= Self::SWORD_AT {
            return;
        }
        self.sword_played = true;
        if let Some(sound) = self.sword {
            trace!("sword");
            ctx.sink.play(sound);
        }
    }
}
