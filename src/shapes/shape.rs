use crate::bodies::Material;
use crate::collision::CollisionGroup;
use crate::math::{Aabb, Vector2};
use crate::shapes::{BoxShape, Capsule, Circle, Convex, Heightfield, Line, Particle, Plane};

/// The closed set of collision shape kinds
///
/// The set is fixed: collision routines are registered in an 8x8 dispatch
/// table indexed by these discriminants, built once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(usize)]
pub enum ShapeKind {
    Circle = 0,
    Particle = 1,
    Plane = 2,
    Convex = 3,
    Line = 4,
    Box = 5,
    Capsule = 6,
    Heightfield = 7,
}

impl ShapeKind {
    /// The number of shape kinds
    pub const COUNT: usize = 8;

    /// Returns the dispatch table index of this kind
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Kind-specific geometry of a collision shape
#[derive(Debug, Clone)]
pub enum ShapeGeometry {
    Circle(Circle),
    Particle(Particle),
    Plane(Plane),
    Convex(Convex),
    Line(Line),
    Box(BoxShape),
    Capsule(Capsule),
    Heightfield(Heightfield),
}

impl ShapeGeometry {
    /// Returns the kind of this geometry
    pub fn kind(&self) -> ShapeKind {
        match self {
            ShapeGeometry::Circle(_) => ShapeKind::Circle,
            ShapeGeometry::Particle(_) => ShapeKind::Particle,
            ShapeGeometry::Plane(_) => ShapeKind::Plane,
            ShapeGeometry::Convex(_) => ShapeKind::Convex,
            ShapeGeometry::Line(_) => ShapeKind::Line,
            ShapeGeometry::Box(_) => ShapeKind::Box,
            ShapeGeometry::Capsule(_) => ShapeKind::Capsule,
            ShapeGeometry::Heightfield(_) => ShapeKind::Heightfield,
        }
    }

    /// Returns the convex polygon data for convex and box shapes
    pub fn as_convex(&self) -> Option<&Convex> {
        match self {
            ShapeGeometry::Convex(convex) => Some(convex),
            ShapeGeometry::Box(box_shape) => Some(box_shape.as_convex()),
            _ => None,
        }
    }
}

/// A collision shape attached to a rigid body
///
/// Wraps the kind-specific geometry with the fields shared by all shapes:
/// the offset/angle relative to the owning body, collision group/mask,
/// sensor flag and material.
#[derive(Debug, Clone)]
pub struct Shape {
    /// The kind-specific geometry
    geometry: ShapeGeometry,

    /// The shape's offset relative to the owning body
    local_position: Vector2,

    /// The shape's angle relative to the owning body
    local_angle: f32,

    /// The collision group this shape belongs to
    collision_group: CollisionGroup,

    /// The groups this shape collides with
    collision_mask: CollisionGroup,

    /// Whether this shape only detects overlap without physical response
    sensor: bool,

    /// The shape's material properties
    material: Material,
}

impl Shape {
    /// Creates a new shape from the given geometry
    pub fn new(geometry: ShapeGeometry) -> Self {
        Self {
            geometry,
            local_position: Vector2::zero(),
            local_angle: 0.0,
            collision_group: CollisionGroup::DEFAULT,
            collision_mask: CollisionGroup::ALL,
            sensor: false,
            material: Material::default(),
        }
    }

    /// Sets the shape's offset and angle relative to the owning body
    pub fn with_local_transform(mut self, position: Vector2, angle: f32) -> Self {
        self.local_position = position;
        self.local_angle = angle;
        self
    }

    /// Sets the shape's collision group and mask
    pub fn with_collision_filter(mut self, group: CollisionGroup, mask: CollisionGroup) -> Self {
        self.collision_group = group;
        self.collision_mask = mask;
        self
    }

    /// Marks the shape as a sensor
    pub fn with_sensor(mut self, sensor: bool) -> Self {
        self.sensor = sensor;
        self
    }

    /// Sets the shape's material
    pub fn with_material(mut self, material: Material) -> Self {
        self.material = material;
        self
    }

    /// Returns the kind of this shape
    pub fn kind(&self) -> ShapeKind {
        self.geometry.kind()
    }

    /// Returns the kind-specific geometry
    pub fn get_geometry(&self) -> &ShapeGeometry {
        &self.geometry
    }

    /// Returns the shape's offset relative to the owning body
    pub fn get_local_position(&self) -> Vector2 {
        self.local_position
    }

    /// Returns the shape's angle relative to the owning body
    pub fn get_local_angle(&self) -> f32 {
        self.local_angle
    }

    /// Returns the collision group this shape belongs to
    pub fn get_collision_group(&self) -> CollisionGroup {
        self.collision_group
    }

    /// Returns the groups this shape collides with
    pub fn get_collision_mask(&self) -> CollisionGroup {
        self.collision_mask
    }

    /// Returns whether this shape is a sensor
    pub fn is_sensor(&self) -> bool {
        self.sensor
    }

    /// Returns the shape's material properties
    pub fn get_material(&self) -> Material {
        self.material
    }

    /// Returns the axis-aligned bounding box of the shape in world space
    pub fn compute_aabb(&self, world_position: Vector2, world_angle: f32) -> Aabb {
        match &self.geometry {
            ShapeGeometry::Circle(circle) => circle.compute_aabb(world_position),
            ShapeGeometry::Particle(particle) => particle.compute_aabb(world_position),
            ShapeGeometry::Plane(plane) => plane.compute_aabb(world_position, world_angle),
            ShapeGeometry::Convex(convex) => convex.compute_aabb(world_position, world_angle),
            ShapeGeometry::Line(line) => line.compute_aabb(world_position, world_angle),
            ShapeGeometry::Box(box_shape) => box_shape.compute_aabb(world_position, world_angle),
            ShapeGeometry::Capsule(capsule) => capsule.compute_aabb(world_position, world_angle),
            ShapeGeometry::Heightfield(field) => field.compute_aabb(world_position),
        }
    }
}
