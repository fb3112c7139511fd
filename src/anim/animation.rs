//! The animation instance driven by the frame loop.

use tracing::{debug, warn};

use crate::board::EntityId;
use crate::core::error::check_timing;
use crate::core::{ConfigResult, SoundId};

use super::behavior::{Behavior, FamilyKind};
use super::context::{FxContext, Launch};
use super::lifecycle::{CompletionPolicy, Lifecycle, Phase};

/// One timed visual effect tied to a single cast.
///
/// ## Contract
///
/// - `launch` is called exactly once; it stores the launch parameters,
///   plays the launch sound and runs the family's one-time effects.
///   A second call is ignored.
/// - `update(dt)` is called once per frame; it counts the remaining
///   duration down and then runs the family's tick. It is a no-op before
///   launch, after the finishing signal, and for `dt <= 0`.
/// - The driver drops the instance once `is_done()`, or runs its final
///   sync step and calls `finish()` once `will_finish()` for handoff and
///   burst families.
#[derive(Clone, Debug)]
pub struct Animation {
    name: String,
    sound: Option<SoundId>,
    clock: Lifecycle,
    launch: Option<Launch>,
    behavior: Behavior,
}

impl Animation {
    /// Create an animation in the `Created` phase.
    ///
    /// Fails if `duration` is not a positive finite number, or if the
    /// family carries a bad period or an empty burst count.
    pub fn new(
        name: impl Into<String>,
        sound: Option<SoundId>,
        duration: f64,
        behavior: Behavior,
    ) -> ConfigResult<Self> {
        let name = name.into();
        let duration = check_timing(&name, "duration", duration)?;
        behavior.validate(&name)?;
        let clock = Lifecycle::new(duration, behavior.policy());
        Ok(Self {
            name,
            sound,
            clock,
            launch: None,
            behavior,
        })
    }

    /// Start the animation.
    pub fn launch(&mut self, launch: Launch, ctx: &mut FxContext<'_>) {
        if !self.clock.start() {
            warn!(animation = %self.name, "launch called twice, ignoring");
            return;
        }
        debug!(
            animation = %self.name,
            cell = %launch.cell(),
            targets = launch.targets().len(),
            "launch"
        );

        if let Some(sound) = self.sound {
            ctx.sink.play(sound);
        }
        self.behavior.family_mut().on_launch(&launch, ctx);
        self.launch = Some(launch);
    }

    /// Advance by `dt` time units.
    pub fn update(&mut self, dt: f64, ctx: &mut FxContext<'_>) {
        let Some(launch) = self.launch.as_ref() else {
            return;
        };
        if !self.clock.advance(dt) {
            return;
        }
        self.behavior
            .family_mut()
            .on_tick(dt, &mut self.clock, launch, ctx);

        if self.clock.phase() != Phase::Active {
            debug!(animation = %self.name, phase = ?self.clock.phase(), "leaving active phase");
        }
    }

    /// Acknowledge the finishing signal; returns whether the animation is
    /// now done because of this call.
    pub fn finish(&mut self) -> bool {
        let finished = self.clock.finish();
        if finished {
            debug!(animation = %self.name, "finished by driver");
        }
        finished
    }

    /// Catalog name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Launch sound, if any.
    #[must_use]
    pub fn sound(&self) -> Option<SoundId> {
        self.sound
    }

    /// Current lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.clock.phase()
    }

    /// How this animation ends.
    #[must_use]
    pub fn policy(&self) -> CompletionPolicy {
        self.clock.policy()
    }

    /// `true` once the driver may drop the instance.
    #[must_use]
    pub fn is_done(&self) -> bool {
        self.clock.is_done()
    }

    /// `true` once the finishing signal was raised; stays `true` when done.
    #[must_use]
    pub fn will_finish(&self) -> bool {
        self.clock.will_finish()
    }

    /// Remaining duration; negative once expired.
    #[must_use]
    pub fn remaining(&self) -> f64 {
        self.clock.remaining()
    }

    /// Configured total duration.
    #[must_use]
    pub fn duration(&self) -> f64 {
        self.clock.duration()
    }

    /// Stored launch parameters, once launched.
    #[must_use]
    pub fn launch_params(&self) -> Option<&Launch> {
        self.launch.as_ref()
    }

    /// Target list given at launch (empty before launch).
    #[must_use]
    pub fn targets(&self) -> &[EntityId] {
        self.launch.as_ref().map_or(&[], |l| l.targets())
    }

    /// Caster given at launch, if any.
    #[must_use]
    pub fn launcher(&self) -> Option<EntityId> {
        self.launch.as_ref().and_then(Launch::launcher)
    }

    /// Structural family.
    #[must_use]
    pub fn kind(&self) -> FamilyKind {
        self.behavior.kind()
    }

    /// Family-specific state.
    #[must_use]
    pub fn behavior(&self) -> &Behavior {
        &self.behavior
    }
}
