mod collision_filter;
mod collision_pair;
mod contact;
mod contact_equation;
mod dispatch;
mod equation_pool;
mod friction_equation;
mod narrow_phase;
mod routines;

pub use self::collision_filter::{
    bodies_can_collide, shapes_can_collide, CollisionGroup, CollisionMask,
};
pub use self::collision_pair::CollisionPair;
pub use self::contact::{CollisionResult, PairContext, RawContact};
pub use self::contact_equation::{ContactEquation, DEFAULT_RELAXATION, DEFAULT_STIFFNESS};
pub use self::dispatch::{CollisionHandler, DispatchTable};
pub use self::equation_pool::EquationPool;
pub use self::friction_equation::FrictionEquation;
pub use self::narrow_phase::{NarrowPhase, NarrowPhaseConfig};
