use crate::math::{Aabb, Vector2};

/// A point collision shape with no extent
///
/// Particles collide with circles, planes, capsules and convex polygons,
/// always producing at most one contact point.
#[derive(Debug, Clone, Default)]
pub struct Particle;

impl Particle {
    /// Creates a new particle shape
    pub fn new() -> Self {
        Self
    }

    /// Returns the axis-aligned bounding box of the particle in world space
    pub fn compute_aabb(&self, position: Vector2) -> Aabb {
        Aabb::new(position, position)
    }
}
