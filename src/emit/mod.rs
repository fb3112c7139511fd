//! Effect Emission Facade contract.
//!
//! Animations describe what should appear on screen as `EmissionRequest`s
//! and hand them to an `EffectSink`. The particle engine behind the sink
//! owns the resulting particles; animations never track them.
//!
//! - `EmissionRequest`: one variant per facade call (image particle,
//!   lightning bolt, trail rectangle, area marker, ...)
//! - `EffectSink`: where requests and play-once sounds go
//! - `EmissionLog`: a sink that just records, for tests and replays

mod request;
mod sink;

pub use request::{EmissionKind, EmissionRequest, ImageParticle};
pub use sink::{EffectSink, EmissionLog};
