mod body_type;
mod material;
mod rigid_body;

pub use self::body_type::{RigidBodyType, SleepState};
pub use self::material::Material;
pub use self::rigid_body::RigidBody;
