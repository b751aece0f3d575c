use crate::collision::contact::{CollisionResult, PairContext};
use crate::collision::routines::circle::circle_circle_impl;
use crate::collision::routines::convex::{capsule_middle_rect, convex_capsule_impl};
use crate::shapes::ShapeGeometry;

/// Capsule vs capsule
///
/// Three families of sub-tests cover the pair: the four end-cap circle
/// pairs, capsule A's middle rectangle against capsule B, and the mirrored
/// middle rectangle of B against capsule A (whose contacts come back with
/// the roles reversed and are swapped before merging).
pub(crate) fn capsule_capsule(ctx: &PairContext, just_test: bool) -> Option<CollisionResult> {
    let (ShapeGeometry::Capsule(capsule_a), ShapeGeometry::Capsule(capsule_b)) =
        (ctx.shape_a.get_geometry(), ctx.shape_b.get_geometry())
    else {
        return None;
    };

    let (a0, a1) = capsule_a.world_end_caps(ctx.position_a, ctx.angle_a);
    let (b0, b1) = capsule_b.world_end_caps(ctx.position_b, ctx.angle_b);

    let mut contacts = Vec::new();

    // All four end-cap combinations
    for end_a in [a0, a1] {
        for end_b in [b0, b1] {
            let result = circle_circle_impl(
                end_a,
                capsule_a.get_radius(),
                ctx.anchor_a,
                end_b,
                capsule_b.get_radius(),
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
    }

    // Capsule A's middle rectangle against capsule B
    let rect_a = capsule_middle_rect(capsule_a);
    let result = convex_capsule_impl(
        rect_a.as_convex(),
        ctx.position_a,
        ctx.angle_a,
        ctx.anchor_a,
        capsule_b,
        ctx.position_b,
        ctx.angle_b,
        ctx.anchor_b,
        just_test,
    );
    if let Some(result) = result {
        if just_test {
            return Some(CollisionResult::Overlap);
        }
        contacts.extend(result.contacts().iter().copied());
    }

    // Capsule B's middle rectangle against capsule A, roles reversed
    let rect_b = capsule_middle_rect(capsule_b);
    let result = convex_capsule_impl(
        rect_b.as_convex(),
        ctx.position_b,
        ctx.angle_b,
        ctx.anchor_b,
        capsule_a,
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

    if contacts.is_empty() {
        None
    } else {
        Some(CollisionResult::Manifold(contacts))
    }
}
