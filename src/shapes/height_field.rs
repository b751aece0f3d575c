use crate::error::PhysicsError;
use crate::math::{Aabb, Vector2};
use crate::Result;

/// A height field collision shape (terrain)
///
/// Height samples are evenly spaced along the local x axis starting at the
/// shape origin; sample `i` sits at `x = i * element_width`. Consecutive
/// samples are connected by straight segments.
#[derive(Debug, Clone)]
pub struct Heightfield {
    /// The height values of the terrain
    heights: Vec<f32>,

    /// The horizontal distance between two height samples
    element_width: f32,

    /// The minimum height value
    min_height: f32,

    /// The maximum height value
    max_height: f32,
}

impl Heightfield {
    /// Creates a new height field from the given samples and spacing
    pub fn new(heights: Vec<f32>, element_width: f32) -> Result<Self> {
        if heights.len() < 2 {
            return Err(PhysicsError::InvalidGeometry(format!(
                "height field needs at least 2 samples, got {}",
                heights.len()
            )));
        }
        if element_width <= 0.0 {
            return Err(PhysicsError::InvalidParameter(format!(
                "height field element width must be positive, got {}",
                element_width
            )));
        }

        let min_height = heights.iter().fold(f32::MAX, |min, &h| min.min(h));
        let max_height = heights.iter().fold(f32::MIN, |max, &h| max.max(h));

        Ok(Self {
            heights,
            element_width,
            min_height,
            max_height,
        })
    }

    /// Returns the height values of the terrain
    pub fn get_heights(&self) -> &[f32] {
        &self.heights
    }

    /// Returns the horizontal distance between two height samples
    pub fn get_element_width(&self) -> f32 {
        self.element_width
    }

    /// Returns the minimum height value
    pub fn get_min_height(&self) -> f32 {
        self.min_height
    }

    /// Returns the maximum height value
    pub fn get_max_height(&self) -> f32 {
        self.max_height
    }

    /// Returns the range of segment indices whose columns overlap the given
    /// world-space x interval, clamped to the valid sample range
    ///
    /// The returned `(first, last)` indices address samples; segments run
    /// from sample `i` to `i + 1` for `i` in `first..last`.
    pub fn clamped_segment_range(&self, min_x: f32, max_x: f32, position: Vector2) -> (usize, usize) {
        let idx_a = ((min_x - position.x) / self.element_width).floor();
        let idx_b = ((max_x - position.x) / self.element_width).ceil();

        let last = self.heights.len() - 1;
        let idx_a = if idx_a < 0.0 { 0 } else { (idx_a as usize).min(last) };
        let idx_b = if idx_b < 0.0 { 0 } else { (idx_b as usize).min(last) };

        (idx_a, idx_b)
    }

    /// Returns the world-space position of height sample `i`
    pub fn world_sample(&self, i: usize, position: Vector2) -> Vector2 {
        Vector2::new(i as f32 * self.element_width, self.heights[i]) + position
    }

    /// Returns the axis-aligned bounding box of the terrain in world space
    pub fn compute_aabb(&self, position: Vector2) -> Aabb {
        let span = (self.heights.len() - 1) as f32 * self.element_width;
        Aabb::new(
            Vector2::new(position.x, position.y + self.min_height - 1.0e6),
            Vector2::new(position.x + span, position.y + self.max_height),
        )
    }
}
