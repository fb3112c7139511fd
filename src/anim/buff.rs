//! Status families: shield, boost, heal, debuff, poison, damage return.
//!
//! All six share one shape. At launch: the chip icon floats above every
//! target, the family's aureol sinks onto them and, when the area is wider
//! than one cell, a colored marker covers it. Boost and heal then keep
//! re-emitting a sparkle burst over every target on a fixed interval.
//!
//! | Family        | Sound   | Duration | Aureol                 | Marker  | Periodic   |
//! |---------------|---------|----------|------------------------|---------|------------|
//! | Shield        | shield  | 60       | `shield_aureol`        | none    | none       |
//! | Boost         | buff    | 60       | `buff_aureol`          | blue    | halo       |
//! | Heal          | heal    | 45       | `cure_aureol`          | green   | heal cross |
//! | Debuff        | debuff  | 60       | `shackle_aureol`       | purple  | none       |
//! | Poison        | poison  | 60       | `poison_aureol`        | magenta | none       |
//! | DamageReturn  | buff    | 60       | `damage_return_aureol` | accent  | none       |

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::error::check_timing;
use crate::core::{Area, Color, ConfigResult, TextureId};

use super::behavior::{Family, FamilyKind};
use super::context::{FxContext, Launch};
use super::helpers::{aureol, floating_icon, mark_area, Sparkle};
use super::lifecycle::{Interval, Lifecycle};

/// Interval between sparkle bursts for boost and heal.
pub const SPARKLE_INTERVAL: f64 = 2.0;

/// Which status family a `Buff` belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BuffKind {
    Shield,
    Boost,
    Heal,
    Debuff,
    Poison,
    DamageReturn,
}

impl BuffKind {
    /// Launch sound name.
    #[must_use]
    pub const fn sound(self) -> &'static str {
        match self {
            Self::Shield => "shield",
            Self::Boost | Self::DamageReturn => "buff",
            Self::Heal => "heal",
            Self::Debuff => "debuff",
            Self::Poison => "poison",
        }
    }

    /// Default duration.
    #[must_use]
    pub const fn duration(self) -> f64 {
        match self {
            Self::Heal => 45.0,
            _ => 60.0,
        }
    }

    /// Aureol texture name.
    #[must_use]
    pub const fn aureol(self) -> &'static str {
        match self {
            Self::Shield => "shield_aureol",
            Self::Boost => "buff_aureol",
            Self::Heal => "cure_aureol",
            Self::Debuff => "shackle_aureol",
            Self::Poison => "poison_aureol",
            Self::DamageReturn => "damage_return_aureol",
        }
    }

    /// Area marker color; `None` for families that never draw one.
    #[must_use]
    pub const fn marker(self) -> Option<Color> {
        match self {
            Self::Shield => None,
            Self::Boost => Some(Color::BLUE),
            Self::Heal => Some(Color::GREEN),
            Self::Debuff => Some(Color::PURPLE),
            Self::Poison => Some(Color::MAGENTA),
            Self::DamageReturn => Some(Color::AGILITY),
        }
    }

    /// Texture name of the periodic sparkle, if the family has one.
    #[must_use]
    pub const fn sparkle(self) -> Option<&'static str> {
        match self {
            Self::Boost => Some("halo"),
            Self::Heal => Some("heal_cross"),
            _ => None,
        }
    }

    #[must_use]
    pub const fn family(self) -> FamilyKind {
        match self {
            Self::Shield => FamilyKind::Shield,
            Self::Boost => FamilyKind::Boost,
            Self::Heal => FamilyKind::Heal,
            Self::Debuff => FamilyKind::Debuff,
            Self::Poison => FamilyKind::Poison,
            Self::DamageReturn => FamilyKind::DamageReturn,
        }
    }
}

/// State of a status-family animation.
#[derive(Clone, Debug, PartialEq)]
pub struct Buff {
    kind: BuffKind,
    icon: TextureId,
    aureol: TextureId,
    area: Area,
    color: Option<Color>,
    sparkle: Option<(Sparkle, Interval)>,
    bursts: u32,
}

impl Buff {
    /// Build a status animation.
    ///
    /// `color` overrides the family's marker color; shields never draw a
    /// marker whatever the area.
    #[must_use]
    pub fn new(kind: BuffKind, icon: TextureId, aureol: TextureId, area: Area, color: Option<Color>) -> Self {
        Self {
            kind,
            icon,
            aureol,
            area,
            color: color.or(kind.marker()),
            sparkle: None,
            bursts: 0,
        }
    }

    /// Re-emit `sparkle` over every target each `interval`.
    #[must_use]
    pub fn with_sparkle(mut self, sparkle: Sparkle, interval: f64) -> Self {
        self.sparkle = Some((sparkle, Interval::every(interval)));
        self
    }

    #[must_use]
    pub fn buff_kind(&self) -> BuffKind {
        self.kind
    }

    #[must_use]
    pub fn area(&self) -> Area {
        self.area
    }

    /// Periodic bursts fired so far (including empty ones).
    #[must_use]
    pub fn bursts(&self) -> u32 {
        self.bursts
    }

    fn draws_marker(&self) -> Option<Color> {
        if self.kind == BuffKind::Shield || self.area.is_single_cell() {
            None
        } else {
            self.color
        }
    }
}

impl Family for Buff {
    fn kind(&self) -> FamilyKind {
        self.kind.family()
    }

    fn validate(&self, animation: &str) -> ConfigResult<()> {
        if let Some((_, interval)) = &self.sparkle {
            check_timing(animation, "interval", interval.period())?;
        }
        Ok(())
    }

    fn on_launch(&mut self, launch: &Launch, ctx: &mut FxContext<'_>) {
        floating_icon(ctx, launch.targets(), self.icon);
        aureol(ctx, launch.targets(), self.aureol);
        if let Some(color) = self.draws_marker() {
            mark_area(ctx, launch.cell(), self.area, color, None);
        }
    }

    fn on_tick(&mut self, dt: f64, _clock: &mut Lifecycle, launch: &Launch, ctx: &mut FxContext<'_>) {
        let Some((sparkle, interval)) = self.sparkle.as_mut() else {
            return;
        };
        if interval.tick(dt) {
            self.bursts += 1;
            let emitted = sparkle.emit_all(ctx, launch.targets());
            trace!(family = ?self.kind, emitted, "sparkle burst");
        }
    }
}
