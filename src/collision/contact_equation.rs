use crate::math::Vector2;

/// Default stiffness for contact and friction equations
pub const DEFAULT_STIFFNESS: f32 = 1.0e6;

/// Default relaxation for contact and friction equations
pub const DEFAULT_RELAXATION: f32 = 4.0;

/// A non-penetration constraint between two bodies at one contact point
///
/// Equations are acquired from a pool when a pair is found colliding and
/// released back when the coordinator resets at the start of the next step;
/// they never outlive one step.
#[derive(Debug, Clone)]
pub struct ContactEquation {
    /// Id of the first body
    pub body_a: u32,

    /// Id of the second body
    pub body_b: u32,

    /// Index of the contacting shape within body A's shape list
    pub shape_index_a: usize,

    /// Index of the contacting shape within body B's shape list
    pub shape_index_b: usize,

    /// Contact point on shape A, relative to body A's position
    pub contact_point_a: Vector2,

    /// Contact point on shape B, relative to body B's position
    pub contact_point_b: Vector2,

    /// World contact normal, pointing from body A toward body B
    pub normal: Vector2,

    /// Penetration depth at the contact point
    pub depth: f32,

    /// Coefficient of restitution for this contact
    pub restitution: f32,

    /// Constraint stiffness
    pub stiffness: f32,

    /// Constraint relaxation
    pub relaxation: f32,

    /// Contact skin offset: overlap allowed before the constraint pushes back
    pub offset: f32,

    /// Whether the solver should process this equation
    pub enabled: bool,

    /// Whether the bodies were not colliding in the previous step
    pub first_impact: bool,
}

impl Default for ContactEquation {
    fn default() -> Self {
        Self {
            body_a: 0,
            body_b: 0,
            shape_index_a: 0,
            shape_index_b: 0,
            contact_point_a: Vector2::zero(),
            contact_point_b: Vector2::zero(),
            normal: Vector2::zero(),
            depth: 0.0,
            restitution: 0.0,
            stiffness: DEFAULT_STIFFNESS,
            relaxation: DEFAULT_RELAXATION,
            offset: 0.0,
            enabled: true,
            first_impact: false,
        }
    }
}
