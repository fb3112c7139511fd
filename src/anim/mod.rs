//! Chip animations.
//!
//! An `Animation` is one timed visual effect tied to a single cast. It is
//! launched once with a `Launch`, ticked by the frame loop, and reports
//! through its `Phase` when the driver may drop it.
//!
//! - `Lifecycle`: countdown, phase and completion policy shared by all
//! - `Behavior`: the family-specific state (one variant per family)
//! - `FxContext`: the sink, board and RNG handed in for each call
//! - `helpers`: emission patterns the families compose
//!
//! ## Families
//!
//! | Family                                   | Type          | Ends by   |
//! |------------------------------------------|---------------|-----------|
//! | shield, boost, heal, debuff, poison, ... | `Buff`        | expiry    |
//! | precipitation, covetousness, vampirization | `Steal`       | expiry    |
//! | teleportation                            | `Teleport`    | expiry    |
//! | inversion                                | `Inversion`   | expiry    |
//! | jump                                     | `Jump`        | handoff   |
//! | shock, flash, lightning                  | `Storm`       | expiry    |
//! | plasma                                   | `Plasma`      | expiry    |
//! | meteorite                                | `Meteorite`   | bursts    |
//! | rockfall                                 | `Rockfall`    | expiry    |
//! | devil strike                             | `DevilStrike` | expiry    |
//! | flame, spark, burning                    | `Fire`        | expiry    |
//! | ice, iceberg, pebble, rock, stalactite   | `Debris`      | expiry    |
//! | liberation, antidote                     | `Orbit`       | expiry    |
//! | alteration                               | `Alteration`  | expiry    |
//! | punishment                               | `Punishment`  | expiry    |

mod animation;
mod aura;
mod barrage;
mod behavior;
mod buff;
mod context;
mod debris;
mod fire;
pub mod helpers;
mod lifecycle;
mod mutation;
mod punishment;
mod steal;
mod storm;

pub use animation::Animation;
pub use aura::{Alteration, Orbit};
pub use barrage::{DevilStrike, Meteorite, Rockfall, DEFAULT_METEORITES};
pub use behavior::{Behavior, FamilyKind};
pub use buff::{Buff, BuffKind, SPARKLE_INTERVAL};
pub use context::{FxContext, Launch};
pub use debris::Debris;
pub use fire::Fire;
pub use helpers::Sparkle;
pub use lifecycle::{CompletionPolicy, Edge, Interval, Lifecycle, Phase};
pub use mutation::{Inversion, Jump, Teleport, INVERSION_DURATION, JUMP_DURATION, TELEPORT_DURATION};
pub use punishment::Punishment;
pub use steal::{Steal, STEAL_DURATION};
pub use storm::{Plasma, Storm};
