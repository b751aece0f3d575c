use crate::bodies::RigidBody;
use crate::collision::collision_filter::{bodies_can_collide, shapes_can_collide};
use crate::collision::collision_pair::CollisionPair;
use crate::collision::contact::{CollisionResult, PairContext};
use crate::collision::contact_equation::{ContactEquation, DEFAULT_RELAXATION, DEFAULT_STIFFNESS};
use crate::collision::dispatch::DispatchTable;
use crate::collision::equation_pool::EquationPool;
use crate::collision::friction_equation::FrictionEquation;
use crate::math::Vector2;

use std::collections::HashSet;

/// Parameters applied to the equations the narrowphase generates
#[derive(Debug, Clone)]
pub struct NarrowPhaseConfig {
    /// Stiffness of generated contact equations
    pub stiffness: f32,

    /// Relaxation of generated contact equations
    pub relaxation: f32,

    /// Stiffness of generated friction equations
    pub friction_stiffness: f32,

    /// Relaxation of generated friction equations
    pub friction_relaxation: f32,

    /// Whether to generate friction equations at all
    pub enable_friction: bool,

    /// Whether a multi-point manifold gets a single averaged friction
    /// equation instead of one per contact
    pub enable_friction_reduction: bool,

    /// Upper bound on friction forces
    pub slip_force: f32,

    /// Relative surface velocity applied to friction equations
    pub surface_velocity: f32,

    /// Overlap allowed before contact equations push back
    pub contact_skin_size: f32,

    /// Starting capacity of the equation pools
    pub initial_pool_capacity: usize,
}

impl Default for NarrowPhaseConfig {
    fn default() -> Self {
        Self {
            stiffness: DEFAULT_STIFFNESS,
            relaxation: DEFAULT_RELAXATION,
            friction_stiffness: DEFAULT_STIFFNESS,
            friction_relaxation: DEFAULT_RELAXATION,
            enable_friction: true,
            enable_friction_reduction: true,
            slip_force: 10.0,
            surface_velocity: 0.0,
            contact_skin_size: 0.01,
            initial_pool_capacity: 32,
        }
    }
}

/// The narrowphase coordinator
///
/// Runs the pairwise geometry for candidate shape pairs and turns raw
/// contacts into pooled contact and friction equations for the solver.
/// Owns the equation pools and the persistent table of body pairs that
/// were colliding in the previous step, which feeds each equation's
/// `first_impact` flag.
///
/// `reset` must run once per simulation step, before any new contacts are
/// generated. References into the equation slices must not be kept across
/// a reset, since the equations are recycled.
pub struct NarrowPhase {
    /// Parameters applied to generated equations
    pub config: NarrowPhaseConfig,

    dispatch: DispatchTable,
    contact_pool: EquationPool<ContactEquation>,
    friction_pool: EquationPool<FrictionEquation>,
    colliding_last_step: HashSet<CollisionPair>,
}

impl NarrowPhase {
    /// Creates a new narrowphase with default parameters
    pub fn new() -> Self {
        Self::with_config(NarrowPhaseConfig::default())
    }

    /// Creates a new narrowphase with the given parameters
    pub fn with_config(config: NarrowPhaseConfig) -> Self {
        let capacity = config.initial_pool_capacity;

        Self {
            config,
            dispatch: DispatchTable::new(),
            contact_pool: EquationPool::with_capacity(capacity),
            friction_pool: EquationPool::with_capacity(capacity),
            colliding_last_step: HashSet::new(),
        }
    }

    /// Returns the dispatch table of pairwise routines
    pub fn get_dispatch_table(&self) -> &DispatchTable {
        &self.dispatch
    }

    /// Returns the contact equations generated this step, as a dense slice
    pub fn contact_equations(&self) -> &[ContactEquation] {
        self.contact_pool.active()
    }

    /// Returns the friction equations generated this step, as a dense slice
    pub fn friction_equations(&self) -> &[FrictionEquation] {
        self.friction_pool.active()
    }

    /// Returns whether the two bodies were colliding as of the previous step
    pub fn colliding_in_last_step(&self, body_id_a: u32, body_id_b: u32) -> bool {
        self.colliding_last_step
            .contains(&CollisionPair::new(body_id_a, body_id_b))
    }

    /// Resets the narrowphase for a new simulation step
    ///
    /// Rebuilds the persistent contact-pair table from the equations of the
    /// step just finished (so `first_impact` lags exactly one step), then
    /// releases all equations back to their pools.
    pub fn reset(&mut self) {
        self.colliding_last_step.clear();
        for equation in self.contact_pool.active() {
            self.colliding_last_step
                .insert(CollisionPair::new(equation.body_a, equation.body_b));
        }

        self.contact_pool.release_all();
        self.friction_pool.release_all();
    }

    /// Runs detection and equation generation for one shape pair
    ///
    /// The world positions/angles are the fully composed shape transforms.
    /// Returns the number of contact equations generated: zero when the
    /// shapes don't overlap, and always zero for sensor shapes, which only
    /// run the boolean overlap test.
    #[allow(clippy::too_many_arguments)]
    pub fn collide_shapes(
        &mut self,
        body_a: &RigidBody,
        shape_index_a: usize,
        world_position_a: Vector2,
        world_angle_a: f32,
        body_b: &RigidBody,
        shape_index_b: usize,
        world_position_b: Vector2,
        world_angle_b: f32,
    ) -> usize {
        let Some(shape_a) = body_a.get_shapes().get(shape_index_a) else {
            return 0;
        };
        let Some(shape_b) = body_b.get_shapes().get(shape_index_b) else {
            return 0;
        };

        let sensor = shape_a.is_sensor() || shape_b.is_sensor();

        let context = PairContext {
            shape_a,
            shape_b,
            position_a: world_position_a,
            position_b: world_position_b,
            angle_a: world_angle_a,
            angle_b: world_angle_b,
            anchor_a: body_a.get_position(),
            anchor_b: body_b.get_position(),
        };

        let Some(result) = self.dispatch.collide(&context, sensor) else {
            return 0;
        };

        // Sensors only detect; they never produce equations
        if sensor {
            return 0;
        }

        let contacts = match &result {
            CollisionResult::Overlap => return 0,
            CollisionResult::Manifold(contacts) => contacts,
        };

        let material_a = shape_a.get_material();
        let material_b = shape_b.get_material();
        let restitution = material_a.restitution.max(material_b.restitution);
        let friction = material_a.friction.min(material_b.friction);

        let first_impact = !self.colliding_in_last_step(body_a.get_id(), body_b.get_id());
        let first_index = self.contact_pool.active_count();

        for contact in contacts {
            let index = self.contact_pool.acquire();
            let equation = self.contact_pool.get_mut(index);

            equation.body_a = body_a.get_id();
            equation.body_b = body_b.get_id();
            equation.shape_index_a = shape_index_a;
            equation.shape_index_b = shape_index_b;
            equation.contact_point_a = contact.contact_point_a;
            equation.contact_point_b = contact.contact_point_b;
            equation.normal = contact.normal;
            equation.depth = contact.depth;
            equation.restitution = restitution;
            equation.stiffness = self.config.stiffness;
            equation.relaxation = self.config.relaxation;
            equation.offset = self.config.contact_skin_size;
            equation.enabled = true;
            equation.first_impact = first_impact;
        }

        let count = contacts.len();

        if self.config.enable_friction && friction > 0.0 && count > 0 {
            if self.config.enable_friction_reduction && count > 1 {
                self.create_friction_from_average(first_index, count, friction);
            } else {
                for i in 0..count {
                    self.create_friction_from_contact(first_index + i, friction);
                }
            }
        }

        count
    }

    /// Runs detection and generation over every shape pair of two bodies
    ///
    /// Applies the body and shape eligibility gates, composes the world
    /// transform of each shape and collides the eligible pairs. Returns the
    /// total number of contact equations generated.
    pub fn collide_bodies(&mut self, body_a: &RigidBody, body_b: &RigidBody) -> usize {
        if !bodies_can_collide(body_a, body_b) {
            return 0;
        }

        let mut total = 0;

        for (i, shape_a) in body_a.get_shapes().iter().enumerate() {
            let (position_a, angle_a) = body_a.world_transform_of(shape_a);

            for (j, shape_b) in body_b.get_shapes().iter().enumerate() {
                if !shapes_can_collide(shape_a, shape_b) {
                    continue;
                }

                let (position_b, angle_b) = body_b.world_transform_of(shape_b);

                total += self.collide_shapes(
                    body_a, i, position_a, angle_a, body_b, j, position_b, angle_b,
                );
            }
        }

        total
    }

    /// Returns whether any shapes of the two bodies overlap
    ///
    /// Runs the boolean overlap test across all shape pairs without
    /// generating equations; used for sensor/trigger queries.
    pub fn bodies_overlap(&self, body_a: &RigidBody, body_b: &RigidBody) -> bool {
        for shape_a in body_a.get_shapes() {
            let (position_a, angle_a) = body_a.world_transform_of(shape_a);

            for shape_b in body_b.get_shapes() {
                let (position_b, angle_b) = body_b.world_transform_of(shape_b);

                let context = PairContext {
                    shape_a,
                    shape_b,
                    position_a,
                    position_b,
                    angle_a,
                    angle_b,
                    anchor_a: body_a.get_position(),
                    anchor_b: body_b.get_position(),
                };

                if self.dispatch.collide(&context, true).is_some() {
                    return true;
                }
            }
        }

        false
    }

    /// Creates one friction equation from a single contact equation
    fn create_friction_from_contact(&mut self, contact_index: usize, friction_coefficient: f32) {
        let contact = self.contact_pool.get(contact_index).clone();

        let index = self.friction_pool.acquire();
        let equation = self.friction_pool.get_mut(index);

        equation.body_a = contact.body_a;
        equation.body_b = contact.body_b;
        equation.shape_index_a = contact.shape_index_a;
        equation.shape_index_b = contact.shape_index_b;
        equation.contact_point_a = contact.contact_point_a;
        equation.contact_point_b = contact.contact_point_b;
        equation.tangent = contact.normal.rotate90cw();
        equation.friction_coefficient = friction_coefficient;
        equation.slip_force = self.config.slip_force;
        equation.surface_velocity = self.config.surface_velocity;
        equation.stiffness = self.config.friction_stiffness;
        equation.relaxation = self.config.friction_relaxation;
        equation.enabled = true;
        equation.contact_equations.clear();
        equation.contact_equations.push(contact_index);
    }

    /// Creates one friction equation averaged over a whole manifold
    ///
    /// The averaged equation holds every contact equation of the manifold,
    /// so the solver can redistribute their combined normal force instead
    /// of counting the friction budget once per contact point.
    fn create_friction_from_average(
        &mut self,
        first_index: usize,
        count: usize,
        friction_coefficient: f32,
    ) {
        let mut point_a = Vector2::zero();
        let mut point_b = Vector2::zero();
        let mut tangent = Vector2::zero();

        for i in first_index..first_index + count {
            let contact = self.contact_pool.get(i);
            point_a += contact.contact_point_a;
            point_b += contact.contact_point_b;
            tangent += contact.normal.rotate90cw();
        }

        let inv_count = 1.0 / count as f32;
        point_a *= inv_count;
        point_b *= inv_count;
        tangent = tangent.normalize();

        let first = self.contact_pool.get(first_index).clone();

        let index = self.friction_pool.acquire();
        let equation = self.friction_pool.get_mut(index);

        equation.body_a = first.body_a;
        equation.body_b = first.body_b;
        equation.shape_index_a = first.shape_index_a;
        equation.shape_index_b = first.shape_index_b;
        equation.contact_point_a = point_a;
        equation.contact_point_b = point_b;
        equation.tangent = tangent;
        equation.friction_coefficient = friction_coefficient;
        equation.slip_force = self.config.slip_force;
        equation.surface_velocity = self.config.surface_velocity;
        equation.stiffness = self.config.friction_stiffness;
        equation.relaxation = self.config.friction_relaxation;
        equation.enabled = true;
        equation.contact_equations.clear();
        equation.contact_equations.extend(first_index..first_index + count);
    }
}

impl Default for NarrowPhase {
    fn default() -> Self {
        Self::new()
    }
}
