pub mod math;
pub mod bodies;
pub mod shapes;
pub mod collision;

/// Re-export common types for easier usage
pub use crate::bodies::{RigidBody, RigidBodyType, Material, SleepState};
pub use crate::collision::NarrowPhase;
pub use crate::math::Vector2;
pub use crate::shapes::{Shape, ShapeKind};

/// Error types for the physics engine
pub mod error {
    use thiserror::Error;

    #[derive(Error, Debug)]
    pub enum PhysicsError {
        #[error("Invalid parameter: {0}")]
        InvalidParameter(String),

        #[error("Invalid geometry: {0}")]
        InvalidGeometry(String),

        #[error("Internal error: {0}")]
        InternalError(String),
    }
}

/// Result type for physics engine operations
pub type Result<T> = std::result::Result<T, error::PhysicsError>;

/// Engine version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
