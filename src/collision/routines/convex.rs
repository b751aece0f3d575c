use crate::collision::contact::{CollisionResult, PairContext, RawContact};
use crate::collision::routines::circle::circle_convex_impl;
use crate::math::Vector2;
use crate::shapes::{BoxShape, Capsule, Convex, ShapeGeometry};

/// Convex polygon vs convex polygon
pub(crate) fn convex_convex(ctx: &PairContext, just_test: bool) -> Option<CollisionResult> {
    let convex_a = ctx.shape_a.get_geometry().as_convex()?;
    let convex_b = ctx.shape_b.get_geometry().as_convex()?;

    convex_convex_impl(
        convex_a,
        ctx.position_a,
        ctx.angle_a,
        ctx.anchor_a,
        convex_b,
        ctx.position_b,
        ctx.angle_b,
        ctx.anchor_b,
        just_test,
    )
}

/// Convex polygon vs capsule
pub(crate) fn convex_capsule(ctx: &PairContext, just_test: bool) -> Option<CollisionResult> {
    let convex = ctx.shape_a.get_geometry().as_convex()?;
    let ShapeGeometry::Capsule(capsule) = ctx.shape_b.get_geometry() else {
        return None;
    };

    convex_capsule_impl(
        convex,
        ctx.position_a,
        ctx.angle_a,
        ctx.anchor_a,
        capsule,
        ctx.position_b,
        ctx.angle_b,
        ctx.anchor_b,
        just_test,
    )
}

/// Finds the edge of `poly_a` with the maximum separation against `poly_b`
///
/// For each candidate edge normal the minimum projected separation over all
/// of the other polygon's vertices is taken; the edge with the largest such
/// minimum wins. A positive result proves the polygons disjoint.
fn find_max_separation(
    poly_a: &Convex,
    position_a: Vector2,
    angle_a: f32,
    poly_b: &Convex,
    position_b: Vector2,
    angle_b: f32,
) -> (f32, usize) {
    let mut best_separation = f32::MIN;
    let mut best_index = 0;

    for (i, normal) in poly_a.get_normals().iter().enumerate() {
        let world_normal = normal.rotate(angle_a);
        let world_vertex = poly_a.get_vertices()[i].rotate(angle_a) + position_a;

        let mut min_projection = f32::MAX;
        for other in poly_b.get_vertices() {
            let world_other = other.rotate(angle_b) + position_b;
            min_projection = min_projection.min(world_normal.dot(&(world_other - world_vertex)));
        }

        if min_projection > best_separation {
            best_separation = min_projection;
            best_index = i;
        }
    }

    (best_separation, best_index)
}

/// Finds the edge of `poly` whose normal is most anti-parallel to the
/// reference normal
fn find_incident_edge(poly: &Convex, angle: f32, reference_normal: Vector2) -> usize {
    let mut best_dot = f32::MAX;
    let mut best_index = 0;

    for (i, normal) in poly.get_normals().iter().enumerate() {
        let dot = normal.rotate(angle).dot(&reference_normal);
        if dot < best_dot {
            best_dot = dot;
            best_index = i;
        }
    }

    best_index
}

/// One-sided Sutherland-Hodgman clip of a segment against the half-plane
/// `dot(normal, p) - offset <= 0`
fn clip_segment_to_line(input: [Vector2; 2], normal: Vector2, offset: f32) -> ([Vector2; 2], usize) {
    let mut output = [Vector2::zero(); 2];
    let mut count = 0;

    let distance0 = normal.dot(&input[0]) - offset;
    let distance1 = normal.dot(&input[1]) - offset;

    if distance0 <= 0.0 {
        output[count] = input[0];
        count += 1;
    }
    if distance1 <= 0.0 {
        output[count] = input[1];
        count += 1;
    }

    // The points are on different sides: add the crossing point
    if distance0 * distance1 < 0.0 {
        let interp = distance0 / (distance0 - distance1);
        output[count] = input[0] + (input[1] - input[0]) * interp;
        count += 1;
    }

    (output, count)
}

/// Full 2D SAT with reference/incident edge clipping
///
/// Shared by the box, capsule middle-rect and heightfield tile tests.
#[allow(clippy::too_many_arguments)]
pub(crate) fn convex_convex_impl(
    convex_a: &Convex,
    position_a: Vector2,
    angle_a: f32,
    anchor_a: Vector2,
    convex_b: &Convex,
    position_b: Vector2,
    angle_b: f32,
    anchor_b: Vector2,
    just_test: bool,
) -> Option<CollisionResult> {
    let (separation_a, edge_a) =
        find_max_separation(convex_a, position_a, angle_a, convex_b, position_b, angle_b);
    if separation_a > 0.0 {
        return None;
    }

    let (separation_b, edge_b) =
        find_max_separation(convex_b, position_b, angle_b, convex_a, position_a, angle_a);
    if separation_b > 0.0 {
        return None;
    }

    if just_test {
        return Some(CollisionResult::Overlap);
    }

    // The polygon with the strictly larger separation provides the
    // reference edge; equal separations keep A as the reference. This
    // tie-break decides contact assignment in symmetric stacks, so it must
    // not change.
    let (reference, ref_position, ref_angle, ref_edge, incident, inc_position, inc_angle, flipped) =
        if separation_b > separation_a {
            (
                convex_b, position_b, angle_b, edge_b, convex_a, position_a, angle_a, true,
            )
        } else {
            (
                convex_a, position_a, angle_a, edge_a, convex_b, position_b, angle_b, false,
            )
        };

    let reference_normal = reference.get_normals()[ref_edge].rotate(ref_angle);
    let ref_count = reference.get_vertices().len();
    let ref_vertex0 = reference.get_vertices()[ref_edge].rotate(ref_angle) + ref_position;
    let ref_vertex1 =
        reference.get_vertices()[(ref_edge + 1) % ref_count].rotate(ref_angle) + ref_position;

    let incident_index = find_incident_edge(incident, inc_angle, reference_normal);
    let inc_count = incident.get_vertices().len();
    let incident_edge = [
        incident.get_vertices()[incident_index].rotate(inc_angle) + inc_position,
        incident.get_vertices()[(incident_index + 1) % inc_count].rotate(inc_angle) + inc_position,
    ];

    // Clip the incident edge against the side planes of the reference edge
    let tangent = (ref_vertex1 - ref_vertex0).normalize();
    let side_offset0 = -tangent.dot(&ref_vertex0);
    let side_offset1 = tangent.dot(&ref_vertex1);

    let (clipped, count) = clip_segment_to_line(incident_edge, -tangent, side_offset0);
    if count < 2 {
        return None;
    }
    let (clipped, count) = clip_segment_to_line(clipped, tangent, side_offset1);
    if count < 2 {
        return None;
    }

    let front_offset = reference_normal.dot(&ref_vertex0);
    let mut contacts = Vec::with_capacity(2);

    for point in clipped {
        let separation = reference_normal.dot(&point) - front_offset;

        if separation <= 0.0 {
            // Project the clipped point back onto the reference face
            let point_on_reference = point - reference_normal * separation;

            let (point_a, point_b, normal) = if flipped {
                (point, point_on_reference, -reference_normal)
            } else {
                (point_on_reference, point, reference_normal)
            };

            contacts.push(RawContact {
                contact_point_a: point_a - anchor_a,
                contact_point_b: point_b - anchor_b,
                normal,
                depth: -separation,
            });
        }
    }

    if contacts.is_empty() {
        None
    } else {
        Some(CollisionResult::Manifold(contacts))
    }
}

/// Returns the capsule's straight section as an axis-aligned rectangle in
/// its local frame: width = capsule length, height = twice the radius
pub(crate) fn capsule_middle_rect(capsule: &Capsule) -> BoxShape {
    BoxShape::from_dimensions_unchecked(capsule.get_length(), 2.0 * capsule.get_radius())
}

/// Convex polygon vs capsule
///
/// The capsule's rounded end caps are tested as circles against the
/// polygon, then the straight section is reduced to its middle rectangle
/// and run through the polygon-polygon test. All non-empty sub-results are
/// merged into one manifold; the end-cap sub-tests see the capsule in the
/// circle role, so their contacts are swapped back.
#[allow(clippy::too_many_arguments)]
pub(crate) fn convex_capsule_impl(
    convex: &Convex,
    convex_position: Vector2,
    convex_angle: f32,
    anchor_a: Vector2,
    capsule: &Capsule,
    capsule_position: Vector2,
    capsule_angle: f32,
    anchor_b: Vector2,
    just_test: bool,
) -> Option<CollisionResult> {
    let (end0, end1) = capsule.world_end_caps(capsule_position, capsule_angle);
    let mut contacts = Vec::new();

    for end in [end0, end1] {
        let result = circle_convex_impl(
            end,
            capsule.get_radius(),
            anchor_b,
            convex,
            convex_position,
            convex_angle,
            anchor_a,
            just_test,
        );

        if let Some(result) = result {
            if just_test {
                return Some(CollisionResult::Overlap);
            }
            contacts.extend(result.swapped().contacts().iter().copied());
        }
    }

    let rect = capsule_middle_rect(capsule);
    let result = convex_convex_impl(
        convex,
        convex_position,
        convex_angle,
        anchor_a,
        rect.as_convex(),
        capsule_position,
        capsule_angle,
        anchor_b,
        just_test,
    );

    if let Some(result) = result {
        if just_test {
            return Some(CollisionResult::Overlap);
        }
        contacts.extend(result.contacts().iter().copied());
    }

    if contacts.is_empty() {
        None
    } else {
        Some(CollisionResult::Manifold(contacts))
    }
}
