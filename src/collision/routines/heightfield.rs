use crate::collision::contact::{CollisionResult, PairContext, RawContact};
use crate::collision::routines::convex::convex_convex_impl;
use crate::math::{Vector2, EPSILON};
use crate::shapes::{Convex, Heightfield, ShapeGeometry};

/// Depth of the throwaway convex tile built under each terrain segment
const TILE_DEPTH: f32 = 100.0;

/// Returns the largest height sample in the inclusive index range
fn max_height_in_range(field: &Heightfield, first: usize, last: usize) -> f32 {
    field.get_heights()[first..=last]
        .iter()
        .fold(f32::MIN, |max, &h| max.max(h))
}

/// Circle vs height field
///
/// Work is restricted to the terrain columns covered by the circle's
/// horizontal extent. Each segment in range is tested against the flat of
/// the circle (edge case), then each sample point in range is tested as a
/// vertex (vertex case); one contact per overlapping feature.
pub(crate) fn circle_heightfield(ctx: &PairContext, just_test: bool) -> Option<CollisionResult> {
    let (ShapeGeometry::Circle(circle), ShapeGeometry::Heightfield(field)) =
        (ctx.shape_a.get_geometry(), ctx.shape_b.get_geometry())
    else {
        return None;
    };

    let radius = circle.get_radius();
    let circle_position = ctx.position_a;
    let field_position = ctx.position_b;

    let (first, last) = field.clamped_segment_range(
        circle_position.x - radius,
        circle_position.x + radius,
        field_position,
    );

    // Early out when the circle floats above the covered terrain span
    if circle_position.y - radius > max_height_in_range(field, first, last) + field_position.y {
        return None;
    }

    let mut contacts = Vec::new();

    // Edge case: the circle's closest point falls within a segment's column
    for i in first..last {
        let v0 = field.world_sample(i, field_position);
        let v1 = field.world_sample(i + 1, field_position);

        // Terrain normals point up, out of the ground
        let out_normal = (v1 - v0).rotate90ccw().normalize();
        let candidate = circle_position - out_normal * radius;
        let distance = out_normal.dot(&(candidate - v0));

        if candidate.x >= v0.x && candidate.x < v1.x && distance <= 0.0 {
            if just_test {
                return Some(CollisionResult::Overlap);
            }

            let projected = candidate - out_normal * distance;
            let normal = -out_normal;

            contacts.push(RawContact {
                contact_point_a: circle_position + normal * radius - ctx.anchor_a,
                contact_point_b: projected - ctx.anchor_b,
                normal,
                depth: -distance,
            });
        }
    }

    // Vertex case: sample points inside the circle
    if radius > 0.0 {
        for i in first..=last {
            let vertex = field.world_sample(i, field_position);
            let delta = circle_position - vertex;

            if delta.length_squared() < radius * radius {
                if just_test {
                    return Some(CollisionResult::Overlap);
                }

                let distance = delta.length();
                let normal = if distance > EPSILON {
                    -(delta / distance)
                } else {
                    -Vector2::unit_y()
                };

                contacts.push(RawContact {
                    contact_point_a: circle_position + normal * radius - ctx.anchor_a,
                    contact_point_b: vertex - ctx.anchor_b,
                    normal,
                    depth: radius - distance,
                });
            }
        }
    }

    if contacts.is_empty() {
        None
    } else {
        Some(CollisionResult::Manifold(contacts))
    }
}

/// Convex polygon vs height field
///
/// For every terrain segment covered by the polygon's horizontal extent a
/// thin trapezoidal convex tile is built under the segment and run through
/// the polygon-polygon test; the per-tile manifolds are concatenated.
pub(crate) fn convex_heightfield(ctx: &PairContext, just_test: bool) -> Option<CollisionResult> {
    let ShapeGeometry::Heightfield(field) = ctx.shape_b.get_geometry() else {
        return None;
    };
    let convex = ctx.shape_a.get_geometry().as_convex()?;

    let field_position = ctx.position_b;
    let aabb = convex.compute_aabb(ctx.position_a, ctx.angle_a);

    let (first, last) = field.clamped_segment_range(aabb.min.x, aabb.max.x, field_position);

    if aabb.min.y > max_height_in_range(field, first, last) + field_position.y {
        return None;
    }

    let mut contacts = Vec::new();

    for i in first..last {
        let v0 = field.world_sample(i, field_position);
        let v1 = field.world_sample(i + 1, field_position);

        // Tile centered between the segment and its sunken copy
        let tile_position = Vector2::new((v0.x + v1.x) * 0.5, (v0.y + v1.y - TILE_DEPTH) * 0.5);
        let below = Vector2::new(0.0, TILE_DEPTH);
        let tile = Convex::from_vertices_unchecked(vec![
            v1 - tile_position,
            v0 - tile_position,
            v0 - tile_position - below,
            v1 - tile_position - below,
        ]);

        let result = convex_convex_impl(
            convex,
            ctx.position_a,
            ctx.angle_a,
            ctx.anchor_a,
            &tile,
            tile_position,
            0.0,
            ctx.anchor_b,
            just_test,
        );

        if let Some(result) = result {
            if just_test {
                return Some(CollisionResult::Overlap);
            }
            contacts.extend(result.contacts().iter().copied());
        }
    }

    if contacts.is_empty() {
        None
    } else {
        Some(CollisionResult::Manifold(contacts))
    }
}
