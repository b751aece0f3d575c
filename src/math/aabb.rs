use crate::math::Vector2;

#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

/// Axis-Aligned Bounding Box (AABB) for efficient collision detection
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Aabb {
    /// Minimum corner of the AABB
    pub min: Vector2,

    /// Maximum corner of the AABB
    pub max: Vector2,
}

impl Aabb {
    /// Creates a new AABB from minimum and maximum points
    #[inline]
    pub fn new(min: Vector2, max: Vector2) -> Self {
        Self { min, max }
    }

    /// Creates an AABB centered at a position with the given half extents
    #[inline]
    pub fn from_center_half_extents(center: Vector2, half_extents: Vector2) -> Self {
        Self {
            min: center - half_extents,
            max: center + half_extents,
        }
    }

    /// Creates an AABB from a set of points
    pub fn from_points(points: &[Vector2]) -> Option<Self> {
        if points.is_empty() {
            return None;
        }

        let mut min = points[0];
        let mut max = points[0];

        for point in points.iter().skip(1) {
            min.x = min.x.min(point.x);
            min.y = min.y.min(point.y);

            max.x = max.x.max(point.x);
            max.y = max.y.max(point.y);
        }

        Some(Self { min, max })
    }

    /// Returns the center of the AABB
    #[inline]
    pub fn center(&self) -> Vector2 {
        (self.min + self.max) * 0.5
    }

    /// Returns the extents of the AABB in each dimension
    #[inline]
    pub fn extents(&self) -> Vector2 {
        self.max - self.min
    }

    /// Returns half the extents of the AABB in each dimension
    #[inline]
    pub fn half_extents(&self) -> Vector2 {
        self.extents() * 0.5
    }

    /// Returns whether this AABB contains the given point
    #[inline]
    pub fn contains_point(&self, point: Vector2) -> bool {
        point.x >= self.min.x && point.x <= self.max.x && point.y >= self.min.y && point.y <= self.max.y
    }

    /// Returns whether this AABB overlaps another AABB
    #[inline]
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
    }

    /// Returns the union of this AABB with another AABB
    #[inline]
    pub fn union(&self, other: &Aabb) -> Aabb {
        Aabb {
            min: Vector2::new(self.min.x.min(other.min.x), self.min.y.min(other.min.y)),
            max: Vector2::new(self.max.x.max(other.max.x), self.max.y.max(other.max.y)),
        }
    }

    /// Expands the AABB by the given margin in all directions
    #[inline]
    pub fn expanded(&self, margin: f32) -> Aabb {
        let m = Vector2::new(margin, margin);
        Aabb {
            min: self.min - m,
            max: self.max + m,
        }
    }
}
