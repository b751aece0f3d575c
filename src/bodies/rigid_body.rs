use crate::bodies::{RigidBodyType, SleepState};
use crate::math::{Aabb, Transform, Vector2};
use crate::shapes::Shape;

/// A rigid body for physics simulation
///
/// Narrowphase only consumes the thin surface modeled here: a world
/// transform, the owned shapes, and the type/sleep fields the eligibility
/// filters read. Mass properties, velocities and force accumulation live
/// with the integrator, which is a separate concern.
pub struct RigidBody {
    /// The body's unique identifier
    id: u32,

    /// The body's position in world space
    position: Vector2,

    /// The body's rotation angle in world space
    angle: f32,

    /// The body's type (dynamic, kinematic, or static)
    body_type: RigidBodyType,

    /// The body's sleep state
    sleep_state: SleepState,

    /// The body's collision shapes
    shapes: Vec<Shape>,
}

impl RigidBody {
    /// Creates a new rigid body with the given id, type and position
    pub fn new(id: u32, body_type: RigidBodyType, position: Vector2) -> Self {
        Self {
            id,
            position,
            angle: 0.0,
            body_type,
            sleep_state: SleepState::Awake,
            shapes: Vec::new(),
        }
    }

    /// Creates a new dynamic rigid body at the given position
    pub fn new_dynamic(id: u32, position: Vector2) -> Self {
        Self::new(id, RigidBodyType::Dynamic, position)
    }

    /// Creates a new kinematic rigid body at the given position
    pub fn new_kinematic(id: u32, position: Vector2) -> Self {
        Self::new(id, RigidBodyType::Kinematic, position)
    }

    /// Creates a new static rigid body at the given position
    pub fn new_static(id: u32, position: Vector2) -> Self {
        Self::new(id, RigidBodyType::Static, position)
    }

    /// Returns the body's unique identifier
    pub fn get_id(&self) -> u32 {
        self.id
    }

    /// Returns the body's position
    pub fn get_position(&self) -> Vector2 {
        self.position
    }

    /// Sets the body's position
    pub fn set_position(&mut self, position: Vector2) {
        self.position = position;
    }

    /// Returns the body's rotation angle
    pub fn get_angle(&self) -> f32 {
        self.angle
    }

    /// Sets the body's rotation angle
    pub fn set_angle(&mut self, angle: f32) {
        self.angle = angle;
    }

    /// Returns the body's world transform
    pub fn get_transform(&self) -> Transform {
        Transform::new(self.position, self.angle)
    }

    /// Returns the body's type
    pub fn get_body_type(&self) -> RigidBodyType {
        self.body_type
    }

    /// Returns the body's sleep state
    pub fn get_sleep_state(&self) -> SleepState {
        self.sleep_state
    }

    /// Returns whether the body is sleeping
    pub fn is_sleeping(&self) -> bool {
        self.sleep_state == SleepState::Sleeping
    }

    /// Puts the body to sleep
    pub fn put_to_sleep(&mut self) {
        if self.body_type == RigidBodyType::Dynamic {
            self.sleep_state = SleepState::Sleeping;
        }
    }

    /// Wakes the body up
    pub fn wake_up(&mut self) {
        self.sleep_state = SleepState::Awake;
    }

    /// Adds a collision shape to the body and returns its index
    pub fn add_shape(&mut self, shape: Shape) -> usize {
        self.shapes.push(shape);
        self.shapes.len() - 1
    }

    /// Returns the body's collision shapes
    pub fn get_shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// Returns the world position and angle of the given shape
    ///
    /// Composes the body transform with the shape's local offset/angle.
    pub fn world_transform_of(&self, shape: &Shape) -> (Vector2, f32) {
        (
            self.get_transform().to_world(shape.get_local_position()),
            self.angle + shape.get_local_angle(),
        )
    }

    /// Returns the world axis-aligned bounding box enclosing all shapes
    pub fn compute_aabb(&self) -> Aabb {
        let mut result: Option<Aabb> = None;

        for shape in &self.shapes {
            let (position, angle) = self.world_transform_of(shape);
            let aabb = shape.compute_aabb(position, angle);
            result = Some(match result {
                Some(acc) => acc.union(&aabb),
                None => aabb,
            });
        }

        result.unwrap_or_else(|| Aabb::new(self.position, self.position))
    }
}
