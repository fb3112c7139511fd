//! Emission request definitions.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::board::{CellId, EntityId};
use crate::core::{Area, Color, Position, TextureId, Vec3};

/// A textured billboard particle.
///
/// Built with `ImageParticle::new` and the `with_*` modifiers, mirroring
/// the optional trailing arguments of the particle engine's call.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ImageParticle {
    pub position: Vec3,
    pub velocity: Vec3,
    pub rotation: f64,
    pub texture: TextureId,
    pub life: f64,
    pub scale: f64,
    pub rotation_speed: f64,
    /// Drawn flat on the ground instead of facing the camera.
    pub ground: bool,
}

impl ImageParticle {
    #[must_use]
    pub fn new(position: Vec3, velocity: Vec3, texture: TextureId, life: f64) -> Self {
        Self {
            position,
            velocity,
            rotation: 0.0,
            texture,
            life,
            scale: 1.0,
            rotation_speed: 0.0,
            ground: false,
        }
    }

    #[must_use]
    pub fn with_rotation(mut self, rotation: f64) -> Self {
        self.rotation = rotation;
        self
    }

    #[must_use]
    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    #[must_use]
    pub fn on_ground(mut self) -> Self {
        self.ground = true;
        self
    }
}

/// A request to the particle engine.
///
/// The variants map one-to-one onto the engine calls animations make.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum EmissionRequest {
    /// Textured particle (icons, halos, clouds, motes).
    Image(ImageParticle),

    /// Falling or thrown object that lands and breaks (ice, rocks).
    Debris {
        position: Vec3,
        velocity: Vec3,
        texture: TextureId,
        scale: f64,
    },

    /// Lightning bolt from `origin` towards `target`.
    Lightning {
        origin: Vec3,
        angle: f64,
        target: Position,
        texture: TextureId,
        /// Engine default when `None`.
        segments: Option<u32>,
    },

    /// Straight laser shot.
    Laser {
        origin: Vec3,
        angle: f64,
        length: f64,
        texture: TextureId,
    },

    /// Colored rectangle that rises and stretches (teleport trails).
    Trail {
        position: Vec3,
        velocity: Vec3,
        angle: f64,
        size: (f64, f64),
        growth: (f64, f64),
        color: Color,
        alpha: f64,
        life: f64,
    },

    /// Spike thrust out of the ground.
    Spike {
        position: Vec3,
        direction: (f64, f64),
        texture: TextureId,
        life: f64,
        flip: bool,
    },

    /// Particle spinning around its anchor (steal effects).
    Spinning {
        position: Position,
        angle: f64,
        texture: TextureId,
    },

    /// Meteorite falling on the targets.
    Meteorite {
        position: Vec3,
        angle: f64,
        size: f64,
        targets: SmallVec<[EntityId; 4]>,
        /// Last meteorite of the barrage.
        last: bool,
    },

    /// Plasma orb.
    Plasma {
        position: Vec3,
        texture: TextureId,
        life: f64,
    },

    /// Colored ground marker over an area of effect.
    AreaMarker {
        cell: CellId,
        area: Area,
        color: Color,
        /// Engine default when `None`.
        duration: Option<f64>,
    },
}

/// Discriminant of an `EmissionRequest`, for counting and filtering.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EmissionKind {
    Image,
    Debris,
    Lightning,
    Laser,
    Trail,
    Spike,
    Spinning,
    Meteorite,
    Plasma,
    AreaMarker,
}

impl EmissionRequest {
    /// Create an area marker request.
    pub fn area_marker(cell: CellId, area: Area, color: Color, duration: Option<f64>) -> Self {
        Self::AreaMarker { cell, area, color, duration }
    }

    /// Create a lightning bolt with the engine's default segment count.
    pub fn lightning(origin: Vec3, angle: f64, target: Position, texture: TextureId) -> Self {
        Self::Lightning { origin, angle, target, texture, segments: None }
    }

    /// Create a debris drop at unit scale.
    pub fn debris(position: Vec3, velocity: Vec3, texture: TextureId) -> Self {
        Self::Debris { position, velocity, texture, scale: 1.0 }
    }

    #[must_use]
    pub fn kind(&self) -> EmissionKind {
        match self {
            Self::Image(_) => EmissionKind::Image,
            Self::Debris { .. } => EmissionKind::Debris,
            Self::Lightning { .. } => EmissionKind::Lightning,
            Self::Laser { .. } => EmissionKind::Laser,
            Self::Trail { .. } => EmissionKind::Trail,
            Self::Spike { .. } => EmissionKind::Spike,
            Self::Spinning { .. } => EmissionKind::Spinning,
            Self::Meteorite { .. } => EmissionKind::Meteorite,
            Self::Plasma { .. } => EmissionKind::Plasma,
            Self::AreaMarker { .. } => EmissionKind::AreaMarker,
        }
    }

    /// Texture the request draws with, if it has one.
    #[must_use]
    pub fn texture(&self) -> Option<TextureId> {
        match self {
            Self::Image(image) => Some(image.texture),
            Self::Debris { texture, .. }
            | Self::Lightning { texture, .. }
            | Self::Laser { texture, .. }
            | Self::Spike { texture, .. }
            | Self::Spinning { texture, .. }
            | Self::Plasma { texture, .. } => Some(*texture),
            Self::Trail { .. } | Self::Meteorite { .. } | Self::AreaMarker { .. } => None,
        }
    }
}

impl From<ImageParticle> for EmissionRequest {
    fn from(image: ImageParticle) -> Self {
        Self::Image(image)
    }
}
