use crate::collision::contact::{CollisionResult, PairContext, RawContact};
use crate::math::{Transform, Vector2, EPSILON};
use crate::shapes::{Convex, ShapeGeometry};

/// Circle vs circle
pub(crate) fn circle_circle(ctx: &PairContext, just_test: bool) -> Option<CollisionResult> {
    let (ShapeGeometry::Circle(a), ShapeGeometry::Circle(b)) =
        (ctx.shape_a.get_geometry(), ctx.shape_b.get_geometry())
    else {
        return None;
    };

    circle_circle_impl(
        ctx.position_a,
        a.get_radius(),
        ctx.anchor_a,
        ctx.position_b,
        b.get_radius(),
        ctx.anchor_b,
        just_test,
    )
}

/// Circle vs particle: a circle test with the particle as a zero radius circle
pub(crate) fn circle_particle(ctx: &PairContext, just_test: bool) -> Option<CollisionResult> {
    let ShapeGeometry::Circle(circle) = ctx.shape_a.get_geometry() else {
        return None;
    };

    circle_circle_impl(
        ctx.position_a,
        circle.get_radius(),
        ctx.anchor_a,
        ctx.position_b,
        0.0,
        ctx.anchor_b,
        just_test,
    )
}

/// Circle vs half-space plane
pub(crate) fn circle_plane(ctx: &PairContext, just_test: bool) -> Option<CollisionResult> {
    let ShapeGeometry::Circle(circle) = ctx.shape_a.get_geometry() else {
        return None;
    };

    circle_plane_impl(
        ctx.position_a,
        circle.get_radius(),
        ctx.anchor_a,
        ctx.position_b,
        ctx.angle_b,
        ctx.anchor_b,
        just_test,
    )
}

/// Particle vs half-space plane: a circle test with zero radius
pub(crate) fn particle_plane(ctx: &PairContext, just_test: bool) -> Option<CollisionResult> {
    let ShapeGeometry::Particle(_) = ctx.shape_a.get_geometry() else {
        return None;
    };

    circle_plane_impl(
        ctx.position_a,
        0.0,
        ctx.anchor_a,
        ctx.position_b,
        ctx.angle_b,
        ctx.anchor_b,
        just_test,
    )
}

/// Circle vs line segment
pub(crate) fn circle_line(ctx: &PairContext, just_test: bool) -> Option<CollisionResult> {
    let (ShapeGeometry::Circle(circle), ShapeGeometry::Line(line)) =
        (ctx.shape_a.get_geometry(), ctx.shape_b.get_geometry())
    else {
        return None;
    };

    circle_line_impl(
        ctx.position_a,
        circle.get_radius(),
        ctx.anchor_a,
        line.get_length(),
        ctx.position_b,
        ctx.angle_b,
        0.0,
        ctx.anchor_b,
        just_test,
    )
}

/// Circle vs capsule: the line test with the capsule radius added
pub(crate) fn circle_capsule(ctx: &PairContext, just_test: bool) -> Option<CollisionResult> {
    let (ShapeGeometry::Circle(circle), ShapeGeometry::Capsule(capsule)) =
        (ctx.shape_a.get_geometry(), ctx.shape_b.get_geometry())
    else {
        return None;
    };

    circle_line_impl(
        ctx.position_a,
        circle.get_radius(),
        ctx.anchor_a,
        capsule.get_length(),
        ctx.position_b,
        ctx.angle_b,
        capsule.get_radius(),
        ctx.anchor_b,
        just_test,
    )
}

/// Particle vs capsule: the line test with zero circle radius
pub(crate) fn particle_capsule(ctx: &PairContext, just_test: bool) -> Option<CollisionResult> {
    let (ShapeGeometry::Particle(_), ShapeGeometry::Capsule(capsule)) =
        (ctx.shape_a.get_geometry(), ctx.shape_b.get_geometry())
    else {
        return None;
    };

    circle_line_impl(
        ctx.position_a,
        0.0,
        ctx.anchor_a,
        capsule.get_length(),
        ctx.position_b,
        ctx.angle_b,
        capsule.get_radius(),
        ctx.anchor_b,
        just_test,
    )
}

/// Circle vs convex polygon
pub(crate) fn circle_convex(ctx: &PairContext, just_test: bool) -> Option<CollisionResult> {
    let ShapeGeometry::Circle(circle) = ctx.shape_a.get_geometry() else {
        return None;
    };
    let convex = ctx.shape_b.get_geometry().as_convex()?;

    circle_convex_impl(
        ctx.position_a,
        circle.get_radius(),
        ctx.anchor_a,
        convex,
        ctx.position_b,
        ctx.angle_b,
        ctx.anchor_b,
        just_test,
    )
}

/// Circle vs circle with explicit radii, shared by the capsule end-cap tests
pub(crate) fn circle_circle_impl(
    position_a: Vector2,
    radius_a: f32,
    anchor_a: Vector2,
    position_b: Vector2,
    radius_b: f32,
    anchor_b: Vector2,
    just_test: bool,
) -> Option<CollisionResult> {
    let delta = position_b - position_a;
    let radius_sum = radius_a + radius_b;

    if delta.length_squared() > radius_sum * radius_sum {
        return None;
    }
    if just_test {
        return Some(CollisionResult::Overlap);
    }

    let distance = delta.length();
    let normal = if distance > EPSILON {
        delta / distance
    } else {
        // Coincident centers leave the direction undefined
        Vector2::unit_y()
    };

    Some(CollisionResult::Manifold(vec![RawContact {
        contact_point_a: position_a + normal * radius_a - anchor_a,
        contact_point_b: position_b - normal * radius_b - anchor_b,
        normal,
        depth: radius_sum - distance,
    }]))
}

/// Circle vs half-space with an explicit radius, shared by the particle and
/// capsule end-cap tests
pub(crate) fn circle_plane_impl(
    circle_position: Vector2,
    radius: f32,
    anchor_a: Vector2,
    plane_position: Vector2,
    plane_angle: f32,
    anchor_b: Vector2,
    just_test: bool,
) -> Option<CollisionResult> {
    let plane_normal = Vector2::unit_y().rotate(plane_angle);
    let signed_distance = plane_normal.dot(&(circle_position - plane_position));

    if signed_distance > radius {
        return None;
    }
    if just_test {
        return Some(CollisionResult::Overlap);
    }

    // From the circle into the plane
    let normal = -plane_normal;
    let point_on_plane = circle_position - plane_normal * signed_distance;

    Some(CollisionResult::Manifold(vec![RawContact {
        contact_point_a: circle_position + normal * radius - anchor_a,
        contact_point_b: point_on_plane - anchor_b,
        normal,
        depth: radius - signed_distance,
    }]))
}

/// Circle vs line segment with explicit radii
///
/// `line_radius` turns the segment into a capsule; a zero `circle_radius`
/// turns the circle into a particle. The flat section is tested first; if
/// the circle center projects outside the segment span, both endpoints are
/// tested as circles instead.
#[allow(clippy::too_many_arguments)]
pub(crate) fn circle_line_impl(
    circle_position: Vector2,
    circle_radius: f32,
    anchor_a: Vector2,
    line_length: f32,
    line_position: Vector2,
    line_angle: f32,
    line_radius: f32,
    anchor_b: Vector2,
    just_test: bool,
) -> Option<CollisionResult> {
    let radius_sum = circle_radius + line_radius;

    let half = Vector2::new(line_length * 0.5, 0.0).rotate(line_angle);
    let vertex0 = line_position - half;
    let vertex1 = line_position + half;

    let edge_unit = (vertex1 - vertex0).normalize();
    let ortho_unit = edge_unit.rotate90cw();

    let to_circle = circle_position - vertex0;
    let side_distance = ortho_unit.dot(&to_circle);
    let span_distance = edge_unit.dot(&to_circle);

    // Contact on the flat section
    if span_distance > 0.0 && span_distance < line_length && side_distance.abs() < radius_sum {
        if just_test {
            return Some(CollisionResult::Overlap);
        }

        let line_to_circle = ortho_unit * side_distance;
        let normal = if line_to_circle.is_zero() {
            ortho_unit
        } else {
            -line_to_circle.normalize()
        };
        let projected = circle_position - line_to_circle;

        return Some(CollisionResult::Manifold(vec![RawContact {
            contact_point_a: circle_position + normal * circle_radius - anchor_a,
            contact_point_b: projected - normal * line_radius - anchor_b,
            normal,
            depth: radius_sum - side_distance.abs(),
        }]));
    }

    // Otherwise the nearest feature is one of the endpoints
    for vertex in [vertex0, vertex1] {
        let delta = circle_position - vertex;

        if delta.length_squared() < radius_sum * radius_sum {
            if just_test {
                return Some(CollisionResult::Overlap);
            }

            let distance = delta.length();
            let normal = if distance > EPSILON {
                -(delta / distance)
            } else {
                Vector2::unit_y()
            };

            return Some(CollisionResult::Manifold(vec![RawContact {
                contact_point_a: circle_position + normal * circle_radius - anchor_a,
                contact_point_b: vertex - normal * line_radius - anchor_b,
                normal,
                depth: radius_sum - distance,
            }]));
        }
    }

    None
}

/// Circle vs convex polygon with an explicit radius, shared by the capsule
/// end-cap tests
#[allow(clippy::too_many_arguments)]
pub(crate) fn circle_convex_impl(
    circle_position: Vector2,
    radius: f32,
    anchor_a: Vector2,
    convex: &Convex,
    convex_position: Vector2,
    convex_angle: f32,
    anchor_b: Vector2,
    just_test: bool,
) -> Option<CollisionResult> {
    let convex_transform = Transform::new(convex_position, convex_angle);
    let local_circle = convex_transform.to_local(circle_position);

    let vertices = convex.get_vertices();
    let normals = convex.get_normals();
    let count = vertices.len();

    // Find the edge of maximum separation from the circle center
    let mut max_separation = f32::MIN;
    let mut max_index = 0;
    for i in 0..count {
        let separation = normals[i].dot(&(local_circle - vertices[i]));
        if separation > max_separation {
            max_separation = separation;
            max_index = i;
        }
    }

    if max_separation > convex.get_bounding_radius() + radius {
        return None;
    }

    // Edge case: the circle center projects onto one of the three edges
    // around the max separation edge
    let mut best_edge: Option<(usize, f32)> = None;
    for offset in [count - 1, 0, 1] {
        let i = (max_index + offset) % count;
        let v0 = vertices[i];
        let v1 = vertices[(i + 1) % count];
        let edge = v1 - v0;
        let edge_length = edge.length();
        let edge_unit = edge / edge_length;

        let projection = edge_unit.dot(&(local_circle - v0));
        if projection >= 0.0 && projection <= edge_length {
            // The nearest edge is the one with the largest signed distance:
            // positive outside, closest-to-zero when the center is inside
            let distance = normals[i].dot(&(local_circle - v0));
            match best_edge {
                Some((_, best_distance)) if distance <= best_distance => {}
                _ => best_edge = Some((i, distance)),
            }
        }
    }

    if let Some((i, distance)) = best_edge {
        if distance <= radius {
            if just_test {
                return Some(CollisionResult::Overlap);
            }

            let v0 = vertices[i];
            let edge = vertices[(i + 1) % count] - v0;
            let edge_unit = edge.normalize();
            let projection = edge_unit.dot(&(local_circle - v0));

            let closest_world = convex_transform.to_world(v0 + edge_unit * projection);
            let normal = -(normals[i].rotate(convex_angle));

            return Some(CollisionResult::Manifold(vec![RawContact {
                contact_point_a: circle_position + normal * radius - anchor_a,
                contact_point_b: closest_world - anchor_b,
                normal,
                depth: radius - distance,
            }]));
        }
    }

    // Corner case: the two vertices of the max separation edge
    for i in [max_index, (max_index + 1) % count] {
        let delta = local_circle - vertices[i];

        if delta.length_squared() < radius * radius {
            if just_test {
                return Some(CollisionResult::Overlap);
            }

            let world_vertex = convex_transform.to_world(vertices[i]);
            let to_vertex = world_vertex - circle_position;
            let distance = to_vertex.length();
            let normal = if distance > EPSILON {
                to_vertex / distance
            } else {
                Vector2::unit_y()
            };

            return Some(CollisionResult::Manifold(vec![RawContact {
                contact_point_a: circle_position + normal * radius - anchor_a,
                contact_point_b: world_vertex - anchor_b,
                normal,
                depth: radius - distance,
            }]));
        }
    }

    None
}
