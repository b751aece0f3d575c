use crate::error::PhysicsError;
use crate::math::{Aabb, Vector2, EPSILON};
use crate::Result;

/// A convex polygon collision shape
///
/// Vertices are stored in counter-clockwise order in the shape's local
/// frame, together with the outward unit normal of each edge. Edge `i`
/// runs from vertex `i` to vertex `(i + 1) % len`.
#[derive(Debug, Clone)]
pub struct Convex {
    /// The polygon vertices in counter-clockwise order
    vertices: Vec<Vector2>,

    /// The outward unit normal of each edge
    normals: Vec<Vector2>,

    /// Radius of the smallest origin-centered circle containing all vertices
    bounding_radius: f32,
}

impl Convex {
    /// Creates a new convex polygon from the given vertices
    ///
    /// The vertices must describe a convex polygon wound counter-clockwise.
    /// Degenerate (fewer than 3 vertices, near-zero area) or clockwise
    /// polygons are rejected, so collision routines can assume valid input.
    pub fn new(vertices: Vec<Vector2>) -> Result<Self> {
        if vertices.len() < 3 {
            return Err(PhysicsError::InvalidGeometry(format!(
                "convex polygon needs at least 3 vertices, got {}",
                vertices.len()
            )));
        }

        let mut signed_area = 0.0;
        for i in 0..vertices.len() {
            let v0 = vertices[i];
            let v1 = vertices[(i + 1) % vertices.len()];
            signed_area += v0.cross(&v1);
        }
        signed_area *= 0.5;

        if signed_area.abs() < EPSILON {
            return Err(PhysicsError::InvalidGeometry(
                "convex polygon is degenerate (zero area)".to_string(),
            ));
        }
        if signed_area < 0.0 {
            return Err(PhysicsError::InvalidGeometry(
                "convex polygon must be wound counter-clockwise".to_string(),
            ));
        }

        // Every turn must be a left turn for the polygon to be convex, and
        // no edge may collapse to a point
        let len = vertices.len();
        for i in 0..len {
            let e0 = vertices[(i + 1) % len] - vertices[i];
            let e1 = vertices[(i + 2) % len] - vertices[(i + 1) % len];
            if e0.length_squared() < EPSILON * EPSILON {
                return Err(PhysicsError::InvalidGeometry(format!(
                    "polygon edge {} is degenerate",
                    i
                )));
            }
            if e0.cross(&e1) < -EPSILON {
                return Err(PhysicsError::InvalidGeometry(format!(
                    "polygon is not convex at vertex {}",
                    (i + 1) % len
                )));
            }
        }

        Ok(Self::from_vertices_unchecked(vertices))
    }

    /// Creates a convex polygon without validating the vertices
    ///
    /// Callers must guarantee counter-clockwise winding and convexity.
    pub(crate) fn from_vertices_unchecked(vertices: Vec<Vector2>) -> Self {
        let normals = Self::compute_normals(&vertices);
        let bounding_radius = vertices
            .iter()
            .map(|v| v.length())
            .fold(0.0f32, f32::max);

        Self {
            vertices,
            normals,
            bounding_radius,
        }
    }

    fn compute_normals(vertices: &[Vector2]) -> Vec<Vector2> {
        let len = vertices.len();
        let mut normals = Vec::with_capacity(len);
        for i in 0..len {
            let edge = vertices[(i + 1) % len] - vertices[i];
            normals.push(edge.rotate90cw().normalize());
        }
        normals
    }

    /// Returns the polygon vertices in counter-clockwise order
    pub fn get_vertices(&self) -> &[Vector2] {
        &self.vertices
    }

    /// Returns the outward unit normal of each edge
    pub fn get_normals(&self) -> &[Vector2] {
        &self.normals
    }

    /// Returns the bounding radius of the polygon
    pub fn get_bounding_radius(&self) -> f32 {
        self.bounding_radius
    }

    /// Returns whether the given local-space point is inside the polygon
    pub fn contains_local_point(&self, point: Vector2) -> bool {
        let len = self.vertices.len();
        for i in 0..len {
            let v0 = self.vertices[i];
            let v1 = self.vertices[(i + 1) % len];
            if (v1 - v0).cross(&(point - v0)) < 0.0 {
                return false;
            }
        }
        true
    }

    /// Returns the axis-aligned bounding box of the polygon in world space
    pub fn compute_aabb(&self, position: Vector2, angle: f32) -> Aabb {
        let mut min = Vector2::new(f32::MAX, f32::MAX);
        let mut max = Vector2::new(f32::MIN, f32::MIN);

        for vertex in &self.vertices {
            let world = vertex.rotate(angle) + position;
            min.x = min.x.min(world.x);
            min.y = min.y.min(world.y);
            max.x = max.x.max(world.x);
            max.y = max.y.max(world.y);
        }

        Aabb::new(min, max)
    }
}
