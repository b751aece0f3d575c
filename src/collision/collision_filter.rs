use crate::bodies::{RigidBody, RigidBodyType, SleepState};
use crate::shapes::Shape;
use bitflags::bitflags;

bitflags! {
    /// A bit mask representing a collision group
    #[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
    pub struct CollisionGroup: u32 {
        /// Default group (collides with everything)
        const DEFAULT  = 0x00000001;

        /// Static world objects
        const STATIC   = 0x00000002;

        /// Dynamic objects
        const DYNAMIC  = 0x00000004;

        /// Character objects
        const CHARACTER = 0x00000008;

        /// Projectile objects
        const PROJECTILE = 0x00000010;

        /// Sensor/trigger objects (detect but don't resolve)
        const SENSOR   = 0x00000020;

        /// Debris objects (may have simplified collision)
        const DEBRIS   = 0x00000040;

        /// Terrain objects
        const TERRAIN  = 0x00000080;

        /// All groups
        const ALL      = 0xFFFFFFFF;
    }
}

/// Type alias for a collision mask (what groups this object collides with)
pub type CollisionMask = CollisionGroup;

/// Returns whether two bodies are eligible for collision testing
///
/// A pair is rejected when neither body is dynamic, when both bodies are
/// sleeping, or when one body is sleeping and the other is static. This
/// runs before any geometry test.
pub fn bodies_can_collide(body_a: &RigidBody, body_b: &RigidBody) -> bool {
    // At least one body must be dynamic
    if body_a.get_body_type() != RigidBodyType::Dynamic
        && body_b.get_body_type() != RigidBodyType::Dynamic
    {
        return false;
    }

    // Two sleeping bodies cannot start colliding
    let sleeping_a = body_a.get_sleep_state() == SleepState::Sleeping;
    let sleeping_b = body_b.get_sleep_state() == SleepState::Sleeping;
    if sleeping_a && sleeping_b {
        return false;
    }

    // Neither can a sleeping body resting against a static one
    if (sleeping_a && body_b.get_body_type() == RigidBodyType::Static)
        || (sleeping_b && body_a.get_body_type() == RigidBodyType::Static)
    {
        return false;
    }

    true
}

/// Returns whether two shapes are allowed to collide by group and mask
///
/// A collides with B if A's mask includes B's group AND B's mask includes
/// A's group.
pub fn shapes_can_collide(shape_a: &Shape, shape_b: &Shape) -> bool {
    shape_a.get_collision_group().intersects(shape_b.get_collision_mask())
        && shape_b.get_collision_group().intersects(shape_a.get_collision_mask())
}
