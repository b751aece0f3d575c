use crate::collision::contact::{CollisionResult, PairContext, RawContact};
use crate::collision::routines::circle::circle_plane_impl;
use crate::math::Vector2;
use crate::shapes::ShapeGeometry;

/// Half-space plane vs convex polygon
///
/// Every polygon vertex below the plane surface yields one contact, so a
/// flat-resting box produces a two point manifold.
pub(crate) fn plane_convex(ctx: &PairContext, just_test: bool) -> Option<CollisionResult> {
    let ShapeGeometry::Plane(_) = ctx.shape_a.get_geometry() else {
        return None;
    };
    let convex = ctx.shape_b.get_geometry().as_convex()?;

    let plane_normal = Vector2::unit_y().rotate(ctx.angle_a);
    let mut contacts = Vec::new();

    for vertex in convex.get_vertices() {
        let world_vertex = vertex.rotate(ctx.angle_b) + ctx.position_b;
        let signed_distance = plane_normal.dot(&(world_vertex - ctx.position_a));

        if signed_distance <= 0.0 {
            if just_test {
                return Some(CollisionResult::Overlap);
            }

            contacts.push(RawContact {
                contact_point_a: world_vertex - plane_normal * signed_distance - ctx.anchor_a,
                contact_point_b: world_vertex - ctx.anchor_b,
                normal: plane_normal,
                depth: -signed_distance,
            });
        }
    }

    if contacts.is_empty() {
        None
    } else {
        Some(CollisionResult::Manifold(contacts))
    }
}

/// Half-space plane vs line segment
///
/// Each endpoint below the plane surface yields one contact.
pub(crate) fn plane_line(ctx: &PairContext, just_test: bool) -> Option<CollisionResult> {
    let (ShapeGeometry::Plane(_), ShapeGeometry::Line(line)) =
        (ctx.shape_a.get_geometry(), ctx.shape_b.get_geometry())
    else {
        return None;
    };

    let plane_normal = Vector2::unit_y().rotate(ctx.angle_a);
    let (vertex0, vertex1) = line.world_endpoints(ctx.position_b, ctx.angle_b);
    let mut contacts = Vec::new();

    for world_vertex in [vertex0, vertex1] {
        let signed_distance = plane_normal.dot(&(world_vertex - ctx.position_a));

        if signed_distance <= 0.0 {
            if just_test {
                return Some(CollisionResult::Overlap);
            }

            contacts.push(RawContact {
                contact_point_a: world_vertex - plane_normal * signed_distance - ctx.anchor_a,
                contact_point_b: world_vertex - ctx.anchor_b,
                normal: plane_normal,
                depth: -signed_distance,
            });
        }
    }

    if contacts.is_empty() {
        None
    } else {
        Some(CollisionResult::Manifold(contacts))
    }
}

/// Half-space plane vs capsule
///
/// Runs the circle-plane test for a circle of the capsule's radius at each
/// end of the straight section. The sub-test sees the capsule in the circle
/// role, so its contacts come back with the roles reversed and are swapped
/// before being merged.
pub(crate) fn plane_capsule(ctx: &PairContext, just_test: bool) -> Option<CollisionResult> {
    let (ShapeGeometry::Plane(_), ShapeGeometry::Capsule(capsule)) =
        (ctx.shape_a.get_geometry(), ctx.shape_b.get_geometry())
    else {
        return None;
    };

    let (end0, end1) = capsule.world_end_caps(ctx.position_b, ctx.angle_b);
    let mut contacts = Vec::new();

    for end in [end0, end1] {
        let result = circle_plane_impl(
            end,
            capsule.get_radius(),
            ctx.anchor_b,
            ctx.position_a,
            ctx.angle_a,
            ctx.anchor_a,
            just_test,
        );

        if let Some(result) = result {
            if just_test {
                return Some(CollisionResult::Overlap);
            }
            contacts.extend(result.swapped().contacts().iter().copied());
        }
    }

    if contacts.is_empty() {
        None
    } else {
        Some(CollisionResult::Manifold(contacts))
    }
}
