use crate::math::{Aabb, Vector2};

/// A circular collision shape
#[derive(Debug, Clone)]
pub struct Circle {
    /// The radius of the circle
    radius: f32,
}

impl Circle {
    /// Creates a new circle with the given radius
    pub fn new(radius: f32) -> Self {
        Self {
            radius: radius.max(0.0),
        }
    }

    /// Returns the radius of the circle
    pub fn get_radius(&self) -> f32 {
        self.radius
    }

    /// Sets the radius of the circle
    pub fn set_radius(&mut self, radius: f32) {
        self.radius = radius.max(0.0);
    }

    /// Returns the axis-aligned bounding box of the circle in world space
    pub fn compute_aabb(&self, position: Vector2) -> Aabb {
        let half_size = Vector2::new(self.radius, self.radius);
        Aabb::new(position - half_size, position + half_size)
    }
}
