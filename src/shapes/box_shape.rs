use crate::error::PhysicsError;
use crate::math::{Aabb, Vector2};
use crate::shapes::Convex;
use crate::Result;

/// A rectangular collision shape
///
/// A box is convex polygon data with width/height sugar; every box pair is
/// handled by the convex collision routines.
#[derive(Debug, Clone)]
pub struct BoxShape {
    /// The total width of the box
    width: f32,

    /// The total height of the box
    height: f32,

    /// The equivalent convex polygon (4 vertices, counter-clockwise)
    convex: Convex,
}

impl BoxShape {
    /// Creates a new box with the given full width and height
    pub fn new(width: f32, height: f32) -> Result<Self> {
        if width <= 0.0 || height <= 0.0 {
            return Err(PhysicsError::InvalidParameter(format!(
                "box dimensions must be positive, got {}x{}",
                width, height
            )));
        }

        Ok(Self::from_dimensions_unchecked(width, height))
    }

    pub(crate) fn from_dimensions_unchecked(width: f32, height: f32) -> Self {
        let hw = width * 0.5;
        let hh = height * 0.5;
        let vertices = vec![
            Vector2::new(-hw, -hh),
            Vector2::new(hw, -hh),
            Vector2::new(hw, hh),
            Vector2::new(-hw, hh),
        ];

        Self {
            width,
            height,
            convex: Convex::from_vertices_unchecked(vertices),
        }
    }

    /// Returns the width of the box
    pub fn get_width(&self) -> f32 {
        self.width
    }

    /// Returns the height of the box
    pub fn get_height(&self) -> f32 {
        self.height
    }

    /// Returns the box as a convex polygon
    pub fn as_convex(&self) -> &Convex {
        &self.convex
    }

    /// Returns the axis-aligned bounding box of the box in world space
    pub fn compute_aabb(&self, position: Vector2, angle: f32) -> Aabb {
        self.convex.compute_aabb(position, angle)
    }
}
