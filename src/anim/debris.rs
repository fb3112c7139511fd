//! Single drops: ice, iceberg, pebble, rock, stalactite.

use crate::core::{Area, Color, TextureId, Vec3};
use crate::emit::EmissionRequest;

use super::behavior::{Family, FamilyKind};
use super::context::{FxContext, Launch};
use super::helpers::mark_area;

/// One piece of debris dropped on the target position at launch.
#[derive(Clone, Debug, PartialEq)]
pub struct Debris {
    texture: TextureId,
    height: f64,
    fall: f64,
    area: Option<(Area, Color)>,
}

impl Debris {
    /// Drop `texture` from `height` with vertical speed `fall`.
    #[must_use]
    pub fn new(texture: TextureId, height: f64, fall: f64) -> Self {
        Self {
            texture,
            height,
            fall,
            area: None,
        }
    }

    #[must_use]
    pub fn with_area(mut self, area: Area, color: Color) -> Self {
        self.area = Some((area, color));
        self
    }
}

impl Family for Debris {
    fn kind(&self) -> FamilyKind {
        FamilyKind::Debris
    }

    fn on_launch(&mut self, launch: &Launch, ctx: &mut FxContext<'_>) {
        ctx.emit(EmissionRequest::debris(
            launch.target().at_height(self.height),
            Vec3::up(self.fall),
            self.texture,
        ));
        if let Some((area, color)) = self.area {
            mark_area(ctx, launch.cell(), area, color, None);
        }
    }
}
