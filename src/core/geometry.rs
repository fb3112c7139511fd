//! Screen-space geometry used by emission requests.
//!
//! `Position` is a point on the board plane (the entity's draw origin),
//! `Vec3` adds height and doubles as a velocity.

use serde::{Deserialize, Serialize};

/// A point on the board plane.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Shift by `(dx, dy)`.
    #[must_use]
    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// Raise this point to height `z`.
    #[must_use]
    pub const fn at_height(self, z: f64) -> Vec3 {
        Vec3::new(self.x, self.y, z)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.1}, {:.1})", self.x, self.y)
    }
}

/// Three-component vector: a position with height, or a velocity.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Pure vertical motion.
    #[must_use]
    pub const fn up(z: f64) -> Self {
        Self::new(0.0, 0.0, z)
    }

    /// Drop the height component.
    #[must_use]
    pub const fn plane(self) -> Position {
        Position::new(self.x, self.y)
    }
}
