use crate::math::{Aabb, Vector2};

/// An infinite half-space collision shape
///
/// The plane surface passes through the shape origin with a local `+y`
/// normal; everything below the surface is solid. Rotating the shape
/// rotates the normal with it.
#[derive(Debug, Clone, Default)]
pub struct Plane;

impl Plane {
    /// Creates a new plane
    pub fn new() -> Self {
        Self
    }

    /// Returns the world-space normal of the plane for the given angle
    pub fn world_normal(&self, angle: f32) -> Vector2 {
        Vector2::unit_y().rotate(angle)
    }

    /// Returns the signed distance from a world point to the plane surface
    pub fn signed_distance_to(&self, point: Vector2, position: Vector2, angle: f32) -> f32 {
        self.world_normal(angle).dot(&(point - position))
    }

    /// Returns the axis-aligned bounding box of the plane in world space
    ///
    /// An infinite half-space has no finite AABB; a large but finite box is
    /// returned instead, matching the broadphase convention for planes.
    pub fn compute_aabb(&self, position: Vector2, angle: f32) -> Aabb {
        let large_number = 1.0e6;
        let normal = self.world_normal(angle);

        // Clip the huge box on the empty side of the plane for the axis
        // aligned orientations, where an exact bound is cheap
        let mut min = Vector2::new(-large_number, -large_number);
        let mut max = Vector2::new(large_number, large_number);

        if crate::math::approx_eq(normal.y, 1.0) {
            max.y = position.y;
        } else if crate::math::approx_eq(normal.y, -1.0) {
            min.y = position.y;
        } else if crate::math::approx_eq(normal.x, 1.0) {
            max.x = position.x;
        } else if crate::math::approx_eq(normal.x, -1.0) {
            min.x = position.x;
        }

        Aabb::new(min, max)
    }
}
