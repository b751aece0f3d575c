use approx::assert_relative_eq;
use phys2d::collision::{
    bodies_can_collide, shapes_can_collide, CollisionGroup, NarrowPhase, NarrowPhaseConfig,
};
use phys2d::math::Vector2;
use phys2d::shapes::{BoxShape, Circle, Plane, Shape, ShapeGeometry};
use phys2d::{Material, RigidBody};

fn circle_body(id: u32, position: Vector2, radius: f32) -> RigidBody {
    let mut body = RigidBody::new_dynamic(id, position);
    body.add_shape(Shape::new(ShapeGeometry::Circle(Circle::new(radius))));
    body
}

fn box_body(id: u32, position: Vector2, width: f32, height: f32) -> RigidBody {
    let mut body = RigidBody::new_dynamic(id, position);
    body.add_shape(Shape::new(ShapeGeometry::Box(
        BoxShape::new(width, height).unwrap(),
    )));
    body
}

fn plane_body(id: u32) -> RigidBody {
    let mut body = RigidBody::new_static(id, Vector2::zero());
    body.add_shape(Shape::new(ShapeGeometry::Plane(Plane::new())));
    body
}

#[test]
fn test_collide_bodies_generates_equations() {
    let mut narrowphase = NarrowPhase::new();
    let a = circle_body(1, Vector2::zero(), 1.0);
    let b = circle_body(2, Vector2::new(1.5, 0.0), 1.0);

    narrowphase.reset();
    let count = narrowphase.collide_bodies(&a, &b);

    assert_eq!(count, 1);
    let equations = narrowphase.contact_equations();
    assert_eq!(equations.len(), 1);

    let equation = &equations[0];
    assert_eq!(equation.body_a, 1);
    assert_eq!(equation.body_b, 2);
    assert_relative_eq!(equation.normal.x, 1.0, epsilon = 1.0e-6);
    assert_relative_eq!(equation.depth, 0.5, epsilon = 1.0e-6);
    assert!(equation.enabled);
    assert!(equation.first_impact);

    // Default materials on both sides
    assert_relative_eq!(equation.restitution, Material::default().restitution);
    assert_relative_eq!(equation.offset, narrowphase.config.contact_skin_size);
}

#[test]
fn test_no_equations_for_separated_bodies() {
    let mut narrowphase = NarrowPhase::new();
    let a = circle_body(1, Vector2::zero(), 1.0);
    let b = circle_body(2, Vector2::new(3.0, 0.0), 1.0);

    narrowphase.reset();
    assert_eq!(narrowphase.collide_bodies(&a, &b), 0);
    assert!(narrowphase.contact_equations().is_empty());
    assert!(narrowphase.friction_equations().is_empty());
}

#[test]
fn test_first_impact_lags_one_step() {
    let mut narrowphase = NarrowPhase::new();
    let a = circle_body(1, Vector2::zero(), 1.0);
    let b = circle_body(2, Vector2::new(1.5, 0.0), 1.0);

    // Step 1: the pair starts touching
    narrowphase.reset();
    narrowphase.collide_bodies(&a, &b);
    assert!(narrowphase.contact_equations()[0].first_impact);

    // Steps 2 and 3: still touching, no longer a first impact
    for _ in 0..2 {
        narrowphase.reset();
        narrowphase.collide_bodies(&a, &b);
        assert!(!narrowphase.contact_equations()[0].first_impact);
    }

    // The pair separates for one step
    let b_far = circle_body(2, Vector2::new(10.0, 0.0), 1.0);
    narrowphase.reset();
    assert_eq!(narrowphase.collide_bodies(&a, &b_far), 0);

    // Touching again counts as a fresh impact
    narrowphase.reset();
    narrowphase.collide_bodies(&a, &b);
    assert!(narrowphase.contact_equations()[0].first_impact);
}

#[test]
fn test_reset_releases_equations() {
    let mut narrowphase = NarrowPhase::new();
    let a = circle_body(1, Vector2::zero(), 1.0);
    let b = circle_body(2, Vector2::new(1.5, 0.0), 1.0);

    narrowphase.reset();
    narrowphase.collide_bodies(&a, &b);
    assert_eq!(narrowphase.contact_equations().len(), 1);
    assert!(!narrowphase.colliding_in_last_step(1, 2));

    narrowphase.reset();
    assert!(narrowphase.contact_equations().is_empty());
    assert!(narrowphase.friction_equations().is_empty());

    // The persistent table now remembers the pair, in either id order
    assert!(narrowphase.colliding_in_last_step(1, 2));
    assert!(narrowphase.colliding_in_last_step(2, 1));
}

#[test]
fn test_eligibility_gates() {
    let awake_a = circle_body(1, Vector2::zero(), 1.0);
    let awake_b = circle_body(2, Vector2::new(1.5, 0.0), 1.0);

    let mut sleeping_a = circle_body(1, Vector2::zero(), 1.0);
    sleeping_a.put_to_sleep();
    let mut sleeping_b = circle_body(2, Vector2::new(1.5, 0.0), 1.0);
    sleeping_b.put_to_sleep();

    let static_b = {
        let mut body = RigidBody::new_static(2, Vector2::new(1.5, 0.0));
        body.add_shape(Shape::new(ShapeGeometry::Circle(Circle::new(1.0))));
        body
    };
    let kinematic_b = {
        let mut body = RigidBody::new_kinematic(2, Vector2::new(1.5, 0.0));
        body.add_shape(Shape::new(ShapeGeometry::Circle(Circle::new(1.0))));
        body
    };

    // Two sleeping dynamic bodies never collide
    assert!(!bodies_can_collide(&sleeping_a, &sleeping_b));

    // A sleeping dynamic body and a static body never collide
    assert!(!bodies_can_collide(&sleeping_a, &static_b));

    // Two non-dynamic bodies never collide
    let static_a = RigidBody::new_static(1, Vector2::zero());
    assert!(!bodies_can_collide(&static_a, &static_b));
    assert!(!bodies_can_collide(&static_a, &kinematic_b));

    // Awake dynamic pairs proceed to geometry
    assert!(bodies_can_collide(&awake_a, &awake_b));
    assert!(bodies_can_collide(&awake_a, &static_b));
    assert!(bodies_can_collide(&awake_a, &kinematic_b));

    // A sleeping body facing an awake dynamic body still collides
    assert!(bodies_can_collide(&sleeping_a, &awake_b));

    // The coordinator applies the same gates
    let mut narrowphase = NarrowPhase::new();
    narrowphase.reset();
    assert_eq!(narrowphase.collide_bodies(&sleeping_a, &sleeping_b), 0);
    assert_eq!(narrowphase.collide_bodies(&sleeping_a, &static_b), 0);
    assert!(narrowphase.collide_bodies(&awake_a, &awake_b) > 0);
}

#[test]
fn test_collision_group_masks() {
    let debris = Shape::new(ShapeGeometry::Circle(Circle::new(1.0)))
        .with_collision_filter(CollisionGroup::DEBRIS, CollisionGroup::STATIC);
    let character = Shape::new(ShapeGeometry::Circle(Circle::new(1.0)))
        .with_collision_filter(CollisionGroup::CHARACTER, CollisionGroup::ALL);
    let world_geometry = Shape::new(ShapeGeometry::Circle(Circle::new(1.0)))
        .with_collision_filter(CollisionGroup::STATIC, CollisionGroup::ALL);

    // Debris ignores characters but hits world geometry
    assert!(!shapes_can_collide(&debris, &character));
    assert!(shapes_can_collide(&debris, &world_geometry));
    assert!(shapes_can_collide(&character, &world_geometry));

    // Masked-out shapes never reach the geometry stage
    let mut body_a = RigidBody::new_dynamic(1, Vector2::zero());
    body_a.add_shape(
        Shape::new(ShapeGeometry::Circle(Circle::new(1.0)))
            .with_collision_filter(CollisionGroup::DEBRIS, CollisionGroup::STATIC),
    );
    let mut body_b = RigidBody::new_dynamic(2, Vector2::new(1.5, 0.0));
    body_b.add_shape(
        Shape::new(ShapeGeometry::Circle(Circle::new(1.0)))
            .with_collision_filter(CollisionGroup::CHARACTER, CollisionGroup::ALL),
    );

    let mut narrowphase = NarrowPhase::new();
    narrowphase.reset();
    assert_eq!(narrowphase.collide_bodies(&body_a, &body_b), 0);
}

#[test]
fn test_sensors_detect_without_equations() {
    let mut narrowphase = NarrowPhase::new();

    let mut trigger = RigidBody::new_dynamic(1, Vector2::zero());
    trigger.add_shape(
        Shape::new(ShapeGeometry::Circle(Circle::new(1.0))).with_sensor(true),
    );
    let b = circle_body(2, Vector2::new(1.5, 0.0), 1.0);

    narrowphase.reset();
    assert_eq!(narrowphase.collide_bodies(&trigger, &b), 0);
    assert!(narrowphase.contact_equations().is_empty());

    // The overlap query still sees the pair
    assert!(narrowphase.bodies_overlap(&trigger, &b));
}

#[test]
fn test_bodies_overlap_query() {
    let narrowphase = NarrowPhase::new();

    let a = circle_body(1, Vector2::zero(), 1.0);
    let near = circle_body(2, Vector2::new(1.5, 0.0), 1.0);
    let far = circle_body(3, Vector2::new(5.0, 0.0), 1.0);

    assert!(narrowphase.bodies_overlap(&a, &near));
    assert!(!narrowphase.bodies_overlap(&a, &far));

    // Works for multi-point pairs too
    let ground = plane_body(4);
    let resting = box_body(5, Vector2::new(0.0, 0.4), 1.0, 1.0);
    assert!(narrowphase.bodies_overlap(&ground, &resting));
}

#[test]
fn test_friction_reduction_merges_manifold() {
    let mut narrowphase = NarrowPhase::new();
    let ground = plane_body(1);
    let resting = box_body(2, Vector2::new(0.0, 0.4), 1.0, 1.0);

    // Reduction on: a two point manifold yields one averaged friction
    // equation spanning both contacts
    narrowphase.config.enable_friction_reduction = true;
    narrowphase.reset();
    let count = narrowphase.collide_bodies(&ground, &resting);
    assert_eq!(count, 2);
    assert_eq!(narrowphase.friction_equations().len(), 1);

    let friction = &narrowphase.friction_equations()[0];
    assert_eq!(friction.contact_equations, vec![0, 1]);
    assert_relative_eq!(friction.tangent.length(), 1.0, epsilon = 1.0e-6);

    // The tangent is perpendicular to the contact normal
    let normal = narrowphase.contact_equations()[0].normal;
    assert_relative_eq!(friction.tangent.dot(&normal), 0.0, epsilon = 1.0e-6);

    // Reduction off: one friction equation per contact
    narrowphase.config.enable_friction_reduction = false;
    narrowphase.reset();
    narrowphase.collide_bodies(&ground, &resting);
    assert_eq!(narrowphase.friction_equations().len(), 2);
    for (i, friction) in narrowphase.friction_equations().iter().enumerate() {
        assert_eq!(friction.contact_equations, vec![i]);
    }

    // Friction disabled: none at all
    narrowphase.config.enable_friction = false;
    narrowphase.reset();
    narrowphase.collide_bodies(&ground, &resting);
    assert!(narrowphase.friction_equations().is_empty());
    assert_eq!(narrowphase.contact_equations().len(), 2);
}

#[test]
fn test_friction_uses_material_combination() {
    let mut narrowphase = NarrowPhase::new();

    let mut ground = RigidBody::new_static(1, Vector2::zero());
    ground.add_shape(
        Shape::new(ShapeGeometry::Plane(Plane::new())).with_material(Material::concrete()),
    );

    let mut crate_body = RigidBody::new_dynamic(2, Vector2::new(0.0, 0.4));
    crate_body.add_shape(
        Shape::new(ShapeGeometry::Box(BoxShape::new(1.0, 1.0).unwrap()))
            .with_material(Material::wood()),
    );

    narrowphase.reset();
    narrowphase.collide_bodies(&ground, &crate_body);

    // Friction takes the lower coefficient, restitution the higher one
    let friction = &narrowphase.friction_equations()[0];
    let expected_friction = Material::concrete().friction.min(Material::wood().friction);
    assert_relative_eq!(friction.friction_coefficient, expected_friction);

    let contact = &narrowphase.contact_equations()[0];
    let expected_restitution = Material::concrete()
        .restitution
        .max(Material::wood().restitution);
    assert_relative_eq!(contact.restitution, expected_restitution);
}

#[test]
fn test_multiple_shapes_per_body() {
    let mut narrowphase = NarrowPhase::new();

    // A dumbbell: two circles on one body
    let mut dumbbell = RigidBody::new_dynamic(1, Vector2::zero());
    dumbbell.add_shape(
        Shape::new(ShapeGeometry::Circle(Circle::new(0.5)))
            .with_local_transform(Vector2::new(-1.0, 0.0), 0.0),
    );
    dumbbell.add_shape(
        Shape::new(ShapeGeometry::Circle(Circle::new(0.5)))
            .with_local_transform(Vector2::new(1.0, 0.0), 0.0),
    );

    // A wide box below touching both circles
    let ground = box_body(2, Vector2::new(0.0, -0.9), 6.0, 1.0);

    narrowphase.reset();
    let count = narrowphase.collide_bodies(&dumbbell, &ground);
    assert_eq!(count, 2);

    let equations = narrowphase.contact_equations();
    assert_eq!(equations[0].shape_index_a, 0);
    assert_eq!(equations[1].shape_index_a, 1);
    for equation in equations {
        assert!(equation.depth >= 0.0);
    }
}

#[test]
fn test_pool_grows_on_exhaustion() {
    let mut narrowphase = NarrowPhase::with_config(NarrowPhaseConfig {
        initial_pool_capacity: 1,
        ..NarrowPhaseConfig::default()
    });

    let ground = plane_body(1);
    let resting = box_body(2, Vector2::new(0.0, 0.4), 1.0, 1.0);

    // Two contacts exceed the starting capacity of one
    narrowphase.reset();
    assert_eq!(narrowphase.collide_bodies(&ground, &resting), 2);
    assert_eq!(narrowphase.contact_equations().len(), 2);

    // The grown pool keeps working across steps
    narrowphase.reset();
    assert_eq!(narrowphase.collide_bodies(&ground, &resting), 2);
    assert_eq!(narrowphase.contact_equations().len(), 2);
}

#[test]
fn test_coordinator_is_deterministic() {
    let run = || {
        let mut narrowphase = NarrowPhase::new();
        let ground = plane_body(1);
        let resting = box_body(2, Vector2::new(0.05, 0.42), 1.0, 1.0);
        let ball = circle_body(3, Vector2::new(0.3, 1.2), 0.4);

        narrowphase.reset();
        narrowphase.collide_bodies(&ground, &resting);
        narrowphase.collide_bodies(&resting, &ball);

        narrowphase
            .contact_equations()
            .iter()
            .map(|eq| {
                (
                    eq.body_a,
                    eq.body_b,
                    eq.contact_point_a.x.to_bits(),
                    eq.contact_point_a.y.to_bits(),
                    eq.normal.x.to_bits(),
                    eq.normal.y.to_bits(),
                    eq.depth.to_bits(),
                )
            })
            .collect::<Vec<_>>()
    };

    assert_eq!(run(), run());
}
