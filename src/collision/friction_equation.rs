use crate::collision::contact_equation::{DEFAULT_RELAXATION, DEFAULT_STIFFNESS};
use crate::math::Vector2;

/// A dry-friction constraint derived from one or more contact equations
///
/// With friction reduction enabled, a single friction equation can span a
/// whole multi-point manifold; it then redistributes the normal force of
/// all its contact equations so the friction budget is not counted twice.
/// Pooled and released symmetrically with contact equations.
#[derive(Debug, Clone)]
pub struct FrictionEquation {
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

    /// World tangent along which friction acts (contact normal rotated 90
    /// degrees clockwise)
    pub tangent: Vector2,

    /// Coefficient of friction
    pub friction_coefficient: f32,

    /// Upper bound on the friction force when no contact equations are
    /// attached to derive it from
    pub slip_force: f32,

    /// Relative surface velocity along the tangent (conveyor-belt effect)
    pub surface_velocity: f32,

    /// Constraint stiffness
    pub stiffness: f32,

    /// Constraint relaxation
    pub relaxation: f32,

    /// Whether the solver should process this equation
    pub enabled: bool,

    /// Pool indices of the contact equations this friction equation
    /// redistributes normal force across
    pub contact_equations: Vec<usize>,
}

impl Default for FrictionEquation {
    fn default() -> Self {
        Self {
            body_a: 0,
            body_b: 0,
            shape_index_a: 0,
            shape_index_b: 0,
            contact_point_a: Vector2::zero(),
            contact_point_b: Vector2::zero(),
            tangent: Vector2::zero(),
            friction_coefficient: 0.0,
            slip_force: 0.0,
            surface_velocity: 0.0,
            stiffness: DEFAULT_STIFFNESS,
            relaxation: DEFAULT_RELAXATION,
            enabled: true,
            contact_equations: Vec::new(),
        }
    }
}
