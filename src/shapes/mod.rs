mod box_shape;
mod capsule;
mod circle;
mod convex;
mod height_field;
mod line;
mod particle;
mod plane;
mod shape;

pub use self::box_shape::BoxShape;
pub use self::capsule::Capsule;
pub use self::circle::Circle;
pub use self::convex::Convex;
pub use self::height_field::Heightfield;
pub use self::line::Line;
pub use self::particle::Particle;
pub use self::plane::Plane;
pub use self::shape::{Shape, ShapeGeometry, ShapeKind};
