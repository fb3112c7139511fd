//! Frame driver for live animations.
//!
//! The game's frame loop owns one `AnimationDriver`. Each frame it calls
//! `tick` once; the driver updates every live animation exactly once, in
//! spawn order, and reports what changed:
//!
//! - `finishing`: animations that just raised the finishing signal, so the
//!   caller can run its end-of-move sync step (camera, turn order, ...)
//! - `removed`: animations that reached `Done` and were dropped
//!
//! A finishing animation the caller does not `finish` itself is finished
//! by the driver on the following tick.
//!
//! ## Example
//!
//! ```
//! use chip_fx::anim::{FxContext, Launch};
//! use chip_fx::board::{CellId, GridBoard};
//! use chip_fx::catalog::Catalog;
//! use chip_fx::core::{AssetTable, FxRng, Position};
//! use chip_fx::driver::AnimationDriver;
//! use chip_fx::emit::EmissionLog;
//!
//! let catalog = Catalog::builtin();
//! let assets = AssetTable::with_builtin_names();
//! let (mut sink, mut board, mut rng) = (EmissionLog::new(), GridBoard::new(), FxRng::new(7));
//! let mut ctx = FxContext::new(&mut sink, &mut board, &mut rng);
//!
//! let mut driver = AnimationDriver::new();
//! let launch = Launch::new(Position::new(0.0, 0.0), Position::new(0.0, 0.0), CellId(1));
//! let handle = driver.cast(&catalog, "shield", &assets, launch, &mut ctx).unwrap();
//!
//! let report = driver.tick(60.0, &mut ctx);
//! assert_eq!(report.removed, vec![handle]);
//! assert!(driver.is_empty());
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::anim::{Animation, FxContext, Launch, Phase};
use crate::catalog::Catalog;
use crate::core::{AssetTable, ConfigResult};

/// Identifier of a live animation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AnimationHandle(pub u64);

impl AnimationHandle {
    /// Raw handle value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for AnimationHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Anim({})", self.0)
    }
}

/// What one `tick` changed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TickReport {
    /// Entered `Finishing` during this tick.
    pub finishing: Vec<AnimationHandle>,
    /// Reached `Done` and dropped.
    pub removed: Vec<AnimationHandle>,
}

impl TickReport {
    /// Nothing changed this tick.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.finishing.is_empty() && self.removed.is_empty()
    }
}

#[derive(Clone, Debug)]
struct Slot {
    handle: AnimationHandle,
    animation: Animation,
    /// The finishing signal was reported to the caller.
    reported: bool,
}

/// Owner of every live animation.
#[derive(Clone, Debug, Default)]
pub struct AnimationDriver {
    slots: Vec<Slot>,
    next_handle: u64,
}

impl AnimationDriver {
    /// Create an empty driver.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Launch `animation` and take ownership of it.
    pub fn spawn(&mut self, mut animation: Animation, launch: Launch, ctx: &mut FxContext<'_>) -> AnimationHandle {
        let handle = AnimationHandle(self.next_handle);
        self.next_handle += 1;
        if animation.phase() != Phase::Created {
            warn!(%handle, animation = animation.name(), "spawning an animation that was already launched");
        }
        animation.launch(launch, ctx);
        debug!(%handle, animation = animation.name(), "spawned");
        self.slots.push(Slot {
            handle,
            animation,
            reported: false,
        });
        handle
    }

    /// Build `name` from the catalog and spawn it.
    pub fn cast(
        &mut self,
        catalog: &Catalog,
        name: &str,
        assets: &AssetTable,
        launch: Launch,
        ctx: &mut FxContext<'_>,
    ) -> ConfigResult<AnimationHandle> {
        let animation = catalog.create(name, assets)?;
        Ok(self.spawn(animation, launch, ctx))
    }

    /// Advance every live animation by `dt`.
    pub fn tick(&mut self, dt: f64, ctx: &mut FxContext<'_>) -> TickReport {
        let mut report = TickReport::default();
        for slot in &mut self.slots {
            if slot.reported && slot.animation.phase() == Phase::Finishing {
                slot.animation.finish();
            } else {
                slot.animation.update(dt, ctx);
            }
            if slot.animation.phase() == Phase::Finishing && !slot.reported {
                slot.reported = true;
                report.finishing.push(slot.handle);
            }
        }
        self.slots.retain(|slot| {
            if slot.animation.is_done() {
                debug!(handle = %slot.handle, animation = slot.animation.name(), "removed");
                report.removed.push(slot.handle);
                false
            } else {
                true
            }
        });
        report
    }

    /// Complete a finishing animation now instead of on the next tick.
    ///
    /// The instance is dropped on the next `tick`. Returns `false` if the
    /// handle is unknown or the animation is not finishing.
    pub fn finish(&mut self, handle: AnimationHandle) -> bool {
        self.slot_mut(handle).is_some_and(|slot| slot.animation.finish())
    }

    /// Drop an animation between ticks.
    pub fn cancel(&mut self, handle: AnimationHandle) -> Option<Animation> {
        let index = self.slots.iter().position(|slot| slot.handle == handle)?;
        let slot = self.slots.remove(index);
        debug!(%handle, animation = slot.animation.name(), "cancelled");
        Some(slot.animation)
    }

    /// Live animation for `handle`, if it was not dropped yet.
    #[must_use]
    pub fn get(&self, handle: AnimationHandle) -> Option<&Animation> {
        self.slots.iter().find(|slot| slot.handle == handle).map(|slot| &slot.animation)
    }

    /// Handles of every live animation, in spawn order.
    pub fn handles(&self) -> impl Iterator<Item = AnimationHandle> + '_ {
        self.slots.iter().map(|slot| slot.handle)
    }

    /// Number of live animations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// No animation is live.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Drop every animation.
    pub fn clear(&mut self) {
        self.slots.clear();
    }

    fn slot_mut(&mut self, handle: AnimationHandle) -> Option<&mut Slot> {
        self.slots.iter_mut().find(|slot| slot.handle == handle)
    }
}
