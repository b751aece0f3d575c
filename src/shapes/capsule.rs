use crate::math::{Aabb, Vector2};

/// A capsule collision shape (line segment with a radius)
///
/// The straight section is centered on the shape origin along the local
/// x axis; the rounded end caps extend `radius` beyond each endpoint.
#[derive(Debug, Clone)]
pub struct Capsule {
    /// The length of the straight section (excluding the end caps)
    length: f32,

    /// The radius of the capsule
    radius: f32,
}

impl Capsule {
    /// Creates a new capsule with the given straight-section length and radius
    pub fn new(length: f32, radius: f32) -> Self {
        Self {
            length: length.max(0.0),
            radius: radius.max(0.0),
        }
    }

    /// Returns the length of the straight section
    pub fn get_length(&self) -> f32 {
        self.length
    }

    /// Sets the length of the straight section
    pub fn set_length(&mut self, length: f32) {
        self.length = length.max(0.0);
    }

    /// Returns the radius of the capsule
    pub fn get_radius(&self) -> f32 {
        self.radius
    }

    /// Sets the radius of the capsule
    pub fn set_radius(&mut self, radius: f32) {
        self.radius = radius.max(0.0);
    }

    /// Returns the total length of the capsule (including both end caps)
    pub fn get_total_length(&self) -> f32 {
        self.length + 2.0 * self.radius
    }

    /// Returns the centers of the two end caps in world space
    pub fn world_end_caps(&self, position: Vector2, angle: f32) -> (Vector2, Vector2) {
        let half = Vector2::new(self.length * 0.5, 0.0).rotate(angle);
        (position - half, position + half)
    }

    /// Returns the axis-aligned bounding box of the capsule in world space
    pub fn compute_aabb(&self, position: Vector2, angle: f32) -> Aabb {
        let (v0, v1) = self.world_end_caps(position, angle);
        let r = Vector2::new(self.radius, self.radius);
        Aabb::new(
            Vector2::new(v0.x.min(v1.x), v0.y.min(v1.y)) - r,
            Vector2::new(v0.x.max(v1.x), v0.y.max(v1.y)) + r,
        )
    }
}
