use crate::collision::contact::{CollisionResult, PairContext, RawContact};
use crate::math::Transform;
use crate::shapes::ShapeGeometry;

/// Particle vs convex polygon
///
/// A particle has no extent, so there is only a contact when the point is
/// strictly inside the polygon; the contact pushes it out through the
/// nearest edge.
pub(crate) fn particle_convex(ctx: &PairContext, just_test: bool) -> Option<CollisionResult> {
    let ShapeGeometry::Particle(_) = ctx.shape_a.get_geometry() else {
        return None;
    };
    let convex = ctx.shape_b.get_geometry().as_convex()?;

    let convex_transform = Transform::new(ctx.position_b, ctx.angle_b);
    let local_point = convex_transform.to_local(ctx.position_a);

    // Signed-crossing test over all edges
    if !convex.contains_local_point(local_point) {
        return None;
    }
    if just_test {
        return Some(CollisionResult::Overlap);
    }

    let vertices = convex.get_vertices();
    let normals = convex.get_normals();
    let count = vertices.len();

    // Inside the polygon every edge separation is non-positive; the nearest
    // edge is the one with the largest separation
    let mut max_separation = f32::MIN;
    let mut max_index = 0;
    for i in 0..count {
        let separation = normals[i].dot(&(local_point - vertices[i]));
        if separation > max_separation {
            max_separation = separation;
            max_index = i;
        }
    }

    let projected_local = local_point - normals[max_index] * max_separation;
    let projected_world = convex_transform.to_world(projected_local);
    let normal = -(normals[max_index].rotate(ctx.angle_b));

    Some(CollisionResult::Manifold(vec![RawContact {
        contact_point_a: ctx.position_a - ctx.anchor_a,
        contact_point_b: projected_world - ctx.anchor_b,
        normal,
        depth: -max_separation,
    }]))
}
