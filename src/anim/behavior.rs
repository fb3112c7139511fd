//! Family dispatch.
//!
//! Each family is one structural type carrying its own state; `Behavior`
//! is the closed set of them. The instance runs the shared countdown first
//! and then hands the tick to the family, so there is no chain of
//! overridden `update`s to follow.

use serde::{Deserialize, Serialize};

use crate::core::ConfigResult;

use super::aura::{Alteration, Orbit};
use super::barrage::{DevilStrike, Meteorite, Rockfall};
use super::buff::Buff;
use super::context::{FxContext, Launch};
use super::debris::Debris;
use super::fire::Fire;
use super::lifecycle::{CompletionPolicy, Lifecycle};
use super::mutation::{Inversion, Jump, Teleport};
use super::punishment::Punishment;
use super::steal::Steal;
use super::storm::{Plasma, Storm};

/// Structural family of an animation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FamilyKind {
    Shield,
    Boost,
    Heal,
    Debuff,
    Poison,
    DamageReturn,
    Steal,
    Teleport,
    Inversion,
    Jump,
    Storm,
    Plasma,
    Meteorite,
    Rockfall,
    DevilStrike,
    Fire,
    Debris,
    Orbit,
    Alteration,
    Punishment,
}

impl FamilyKind {
    /// Families that change board occupancy.
    #[must_use]
    pub const fn mutates_board(self) -> bool {
        matches!(self, Self::Teleport | Self::Inversion | Self::Jump)
    }
}

/// Per-family hooks.
pub(crate) trait Family {
    fn kind(&self) -> FamilyKind;

    fn policy(&self) -> CompletionPolicy {
        CompletionPolicy::Expire
    }

    /// Reject state that would never fire or never end.
    fn validate(&self, _animation: &str) -> ConfigResult<()> {
        Ok(())
    }

    /// One-time effects, after the launch sound.
    fn on_launch(&mut self, launch: &Launch, ctx: &mut FxContext<'_>);

    /// Runs after the countdown on every tick that advanced it, including
    /// the one that ended it.
    fn on_tick(&mut self, _dt: f64, _clock: &mut Lifecycle, _launch: &Launch, _ctx: &mut FxContext<'_>) {}
}

/// Family-specific state of an animation.
#[derive(Clone, Debug, PartialEq)]
pub enum Behavior {
    Buff(Buff),
    Steal(Steal),
    Teleport(Teleport),
    Inversion(Inversion),
    Jump(Jump),
    Storm(Storm),
    Plasma(Plasma),
    Meteorite(Meteorite),
    Rockfall(Rockfall),
    DevilStrike(DevilStrike),
    Fire(Fire),
    Debris(Debris),
    Orbit(Orbit),
    Alteration(Alteration),
    Punishment(Punishment),
}

impl Behavior {
    pub(crate) fn family(&self) -> &dyn Family {
        match self {
            Self::Buff(f) => f,
            Self::Steal(f) => f,
            Self::Teleport(f) => f,
            Self::Inversion(f) => f,
            Self::Jump(f) => f,
            Self::Storm(f) => f,
            Self::Plasma(f) => f,
            Self::Meteorite(f) => f,
            Self::Rockfall(f) => f,
            Self::DevilStrike(f) => f,
            Self::Fire(f) => f,
            Self::Debris(f) => f,
            Self::Orbit(f) => f,
            Self::Alteration(f) => f,
            Self::Punishment(f) => f,
        }
    }

    pub(crate) fn family_mut(&mut self) -> &mut dyn Family {
        match self {
            Self::Buff(f) => f,
            Self::Steal(f) => f,
            Self::Teleport(f) => f,
            Self::Inversion(f) => f,
            Self::Jump(f) => f,
            Self::Storm(f) => f,
            Self::Plasma(f) => f,
            Self::Meteorite(f) => f,
            Self::Rockfall(f) => f,
            Self::DevilStrike(f) => f,
            Self::Fire(f) => f,
            Self::Debris(f) => f,
            Self::Orbit(f) => f,
            Self::Alteration(f) => f,
            Self::Punishment(f) => f,
        }
    }

    #[must_use]
    pub fn kind(&self) -> FamilyKind {
        self.family().kind()
    }

    #[must_use]
    pub fn policy(&self) -> CompletionPolicy {
        self.family().policy()
    }

    /// Check the family's timings and counters for `animation`.
    pub fn validate(&self, animation: &str) -> ConfigResult<()> {
        self.family().validate(animation)
    }

    /// For board-mutating families, whether the mutation already ran.
    #[must_use]
    pub fn mutation_applied(&self) -> Option<bool> {
        match self {
            Self::Teleport(t) => Some(t.teleported()),
            Self::Inversion(i) => Some(i.inverted()),
            Self::Jump(j) => Some(j.jumped()),
            _ => None,
        }
    }
}
