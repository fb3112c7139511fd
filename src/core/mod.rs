//! Core building blocks: geometry, randomness, asset handles, areas, errors.
//!
//! Nothing in here knows about individual chips. Animations, the board
//! contract and the catalog are all written against these types.

pub mod area;
pub mod assets;
pub mod error;
pub mod geometry;
pub mod rng;

pub use area::{Area, Color};
pub use assets::{AssetTable, SoundId, TextureId};
pub use error::{ConfigError, ConfigResult};
pub use geometry::{Position, Vec3};
pub use rng::FxRng;
