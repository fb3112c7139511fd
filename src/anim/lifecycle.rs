//! Animation lifecycle state machine.
//!
//! ```text
//! Created --launch--> Active --(policy)--> Finishing --finish()--> Done
//!                        \________(Expire)_______________________/
//! ```
//!
//! Every animation counts its remaining duration down by `dt` per tick.
//! What ends it depends on its `CompletionPolicy`:
//!
//! - `Expire`: remaining duration ≤ 0 moves straight to `Done`.
//! - `Handoff`: remaining duration ≤ 0 moves to `Finishing`; the driver
//!   runs its final sync step and calls `finish()`.
//! - `Bursts`: the family itself calls `begin_finishing()` once its burst
//!   counter is exhausted; duration expiry alone does nothing.
//!
//! `Done` is terminal. Ticks outside `Active` and ticks with `dt <= 0` are
//! no-ops.

use serde::{Deserialize, Serialize};

/// Where an animation is in its life.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Constructed, not launched yet.
    Created,
    /// Launched and ticking.
    Active,
    /// Waiting for the driver's final sync step.
    Finishing,
    /// Over. The driver may drop the instance.
    Done,
}

/// Which condition ends an animation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CompletionPolicy {
    /// Duration expiry completes the animation.
    #[default]
    Expire,
    /// Duration expiry raises the finishing signal; the driver completes.
    Handoff,
    /// An internal burst counter raises the finishing signal; the driver completes.
    Bursts,
}

/// Countdown plus phase.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Lifecycle {
    duration: f64,
    remaining: f64,
    phase: Phase,
    policy: CompletionPolicy,
}

impl Lifecycle {
    /// Create a lifecycle in `Created` with the full duration remaining.
    #[must_use]
    pub fn new(duration: f64, policy: CompletionPolicy) -> Self {
        Self {
            duration,
            remaining: duration,
            phase: Phase::Created,
            policy,
        }
    }

    /// `Created → Active`. Returns `false` if already started.
    pub fn start(&mut self) -> bool {
        if self.phase != Phase::Created {
            return false;
        }
        self.phase = Phase::Active;
        true
    }

    /// Count down by `dt`.
    ///
    /// Returns `true` if the tick happened, i.e. the animation was active
    /// and `dt` was a positive finite number. The tick that ends the
    /// countdown still returns `true` so the family can run its step.
    pub fn advance(&mut self, dt: f64) -> bool {
        if self.phase != Phase::Active || !(dt.is_finite() && dt > 0.0) {
            return false;
        }
        self.remaining -= dt;
        if self.remaining <= 0.0 {
            match self.policy {
                CompletionPolicy::Expire => self.phase = Phase::Done,
                CompletionPolicy::Handoff => self.phase = Phase::Finishing,
                CompletionPolicy::Bursts => {}
            }
        }
        true
    }

    /// Raise the finishing signal from inside the family.
    ///
    /// Only meaningful while `Active`; returns whether the phase changed.
    pub fn begin_finishing(&mut self) -> bool {
        if self.phase != Phase::Active {
            return false;
        }
        self.phase = Phase::Finishing;
        true
    }

    /// `Finishing → Done`. Returns whether the phase changed.
    pub fn finish(&mut self) -> bool {
        if self.phase != Phase::Finishing {
            return false;
        }
        self.phase = Phase::Done;
        true
    }

    /// Configured total duration.
    #[must_use]
    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Remaining duration; may be negative once expired.
    #[must_use]
    pub fn remaining(&self) -> f64 {
        self.remaining
    }

    /// Time ticked since launch.
    #[must_use]
    pub fn elapsed(&self) -> f64 {
        self.duration - self.remaining
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Condition that ends this lifecycle.
    #[must_use]
    pub fn policy(&self) -> CompletionPolicy {
        self.policy
    }

    /// Launched and still ticking.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.phase == Phase::Active
    }

    /// Over; nothing left to tick.
    #[must_use]
    pub fn is_done(&self) -> bool {
        self.phase == Phase::Done
    }

    /// `true` once the finishing signal was raised (stays `true` when done).
    #[must_use]
    pub fn will_finish(&self) -> bool {
        matches!(self.phase, Phase::Finishing | Phase::Done)
    }
}

/// Which side of zero a delay must cross to fire.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Edge {
    /// Fires when the delay reaches zero.
    #[default]
    Inclusive,
    /// Fires only once the delay is below zero.
    Exclusive,
}

/// Periodic delay accumulator.
///
/// Independent of the animation's own countdown: the delay drops by `dt`
/// each tick and, once it crosses zero, the caller fires its burst and the
/// delay is re-armed to the period. At most one burst fires per tick.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Interval {
    delay: f64,
    period: f64,
    edge: Edge,
}

impl Interval {
    /// First burst after one full period.
    #[must_use]
    pub fn every(period: f64) -> Self {
        Self::starting_at(period, period)
    }

    /// First burst on the first tick.
    #[must_use]
    pub fn primed(period: f64) -> Self {
        Self::starting_at(0.0, period)
    }

    /// First burst after `initial`, then every `period`.
    #[must_use]
    pub fn starting_at(initial: f64, period: f64) -> Self {
        Self {
            delay: initial,
            period,
            edge: Edge::Inclusive,
        }
    }

    /// Require the delay to go strictly below zero.
    #[must_use]
    pub fn exclusive(mut self) -> Self {
        self.edge = Edge::Exclusive;
        self
    }

    /// Count down and re-arm; returns `true` if a burst is due this tick.
    pub fn tick(&mut self, dt: f64) -> bool {
        self.elapse(dt);
        if self.is_due() {
            self.rearm();
            true
        } else {
            false
        }
    }

    /// Count down without re-arming.
    pub fn elapse(&mut self, dt: f64) {
        self.delay -= dt;
    }

    /// Whether the delay crossed zero on its configured edge.
    #[must_use]
    pub fn is_due(&self) -> bool {
        match self.edge {
            Edge::Inclusive => self.delay <= 0.0,
            Edge::Exclusive => self.delay < 0.0,
        }
    }

    /// Re-arm to the configured period.
    pub fn rearm(&mut self) {
        self.delay = self.period;
    }

    /// Re-arm to a one-off delay (randomized barrages).
    pub fn rearm_in(&mut self, delay: f64) {
        self.delay = delay;
    }

    /// Time left before the next burst.
    #[must_use]
    pub fn delay(&self) -> f64 {
        self.delay
    }

    /// Configured period between bursts.
    #[must_use]
    pub fn period(&self) -> f64 {
        self.period
    }
}
