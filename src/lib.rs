//! # chip-fx
//!
//! Timed cast animations for a turn-based tactics game.
//!
//! Every chip (spell) cast on the board plays one `Animation`: a countdown
//! that emits particles, lightning bolts and sounds each frame, may mutate
//! the board once (teleport, swap, jump), and finally tells the frame loop
//! it can be dropped.
//!
//! ## Design Principles
//!
//! 1. **Fire and forget**: animations describe effects as requests to an
//!    `EffectSink`; they never own or track the particles they spawn.
//!
//! 2. **Weak entity references**: animations hold `EntityId`s and read the
//!    board through the `Board` trait. An entity that vanished mid-cast is
//!    skipped, never an error.
//!
//! 3. **Data-driven catalog**: chips are `Recipe`s (serde) resolved against
//!    an `AssetTable`, so a game can add or retune chips without code.
//!
//! 4. **Deterministic**: all cosmetic randomness comes from a seeded
//!    `FxRng`, so a replay with the same seed emits the same requests.
//!
//! ## Modules
//!
//! - `core`: geometry, RNG, asset ids, area shapes, errors
//! - `board`: the entity/board contract and an in-memory grid board
//! - `emit`: emission requests and the sink contract
//! - `anim`: lifecycle, families and the `Animation` instance
//! - `catalog`: named recipes and the built-in chip table
//! - `driver`: the frame driver owning live animations

pub mod anim;
pub mod board;
pub mod catalog;
pub mod core;
pub mod driver;
pub mod emit;

// Re-export commonly used types
pub use crate::core::{
    Area, AssetTable, Color, ConfigError, ConfigResult, FxRng, Position, SoundId, TextureId, Vec3,
};

pub use crate::board::{Board, CellId, EntityId, GridBoard};

pub use crate::emit::{EffectSink, EmissionKind, EmissionLog, EmissionRequest};

pub use crate::anim::{Animation, CompletionPolicy, FamilyKind, FxContext, Launch, Phase};

pub use crate::catalog::{Catalog, Recipe};

pub use crate::driver::{AnimationDriver, AnimationHandle, TickReport};
