use crate::math::{Aabb, Vector2};

/// A line segment collision shape
///
/// The segment is centered on the shape origin and extends along the local
/// x axis, from `(-length / 2, 0)` to `(length / 2, 0)`.
#[derive(Debug, Clone)]
pub struct Line {
    /// The total length of the segment
    length: f32,
}

impl Line {
    /// Creates a new line segment with the given length
    pub fn new(length: f32) -> Self {
        Self {
            length: length.max(0.0),
        }
    }

    /// Returns the length of the segment
    pub fn get_length(&self) -> f32 {
        self.length
    }

    /// Sets the length of the segment
    pub fn set_length(&mut self, length: f32) {
        self.length = length.max(0.0);
    }

    /// Returns the two endpoints of the segment in world space
    pub fn world_endpoints(&self, position: Vector2, angle: f32) -> (Vector2, Vector2) {
        let half = Vector2::new(self.length * 0.5, 0.0).rotate(angle);
        (position - half, position + half)
    }

    /// Returns the axis-aligned bounding box of the segment in world space
    pub fn compute_aabb(&self, position: Vector2, angle: f32) -> Aabb {
        let (v0, v1) = self.world_endpoints(position, angle);
        Aabb::new(
            Vector2::new(v0.x.min(v1.x), v0.y.min(v1.y)),
            Vector2::new(v0.x.max(v1.x), v0.y.max(v1.y)),
        )
    }
}
