use crate::math::Vector2;

#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

/// Represents a transformation in 2D space (position and rotation angle)
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Transform {
    /// Position in 2D space
    pub position: Vector2,

    /// Rotation angle in radians
    pub angle: f32,
}

impl Transform {
    /// Creates a new transform with the given position and angle
    #[inline]
    pub fn new(position: Vector2, angle: f32) -> Self {
        Self { position, angle }
    }

    /// Creates a new identity transform (no translation, no rotation)
    #[inline]
    pub fn identity() -> Self {
        Self {
            position: Vector2::zero(),
            angle: 0.0,
        }
    }

    /// Creates a new transform from just a position
    #[inline]
    pub fn from_position(position: Vector2) -> Self {
        Self {
            position,
            angle: 0.0,
        }
    }

    /// Transforms a point from local space to world space
    #[inline]
    pub fn to_world(&self, point: Vector2) -> Vector2 {
        point.rotate(self.angle) + self.position
    }

    /// Transforms a point from world space to local space
    #[inline]
    pub fn to_local(&self, point: Vector2) -> Vector2 {
        (point - self.position).rotate(-self.angle)
    }

    /// Rotates a direction from local space to world space
    #[inline]
    pub fn rotate_direction(&self, direction: Vector2) -> Vector2 {
        direction.rotate(self.angle)
    }

    /// Composes this transform with a child transform expressed in this
    /// transform's local frame
    #[inline]
    pub fn compose(&self, local: &Transform) -> Transform {
        Transform {
            position: self.to_world(local.position),
            angle: self.angle + local.angle,
        }
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}
