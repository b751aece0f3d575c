use crate::collision::contact::{CollisionResult, PairContext};
use crate::collision::routines;
use crate::shapes::ShapeKind;

/// A pairwise collision routine
///
/// Handlers receive the pair in the order they were registered for; the
/// dispatcher takes care of swapping roles for mirrored lookups.
pub type CollisionHandler = fn(&PairContext, bool) -> Option<CollisionResult>;

/// One dispatch table entry: a handler plus a bit telling the dispatcher to
/// exchange the A/B roles around the call
#[derive(Clone, Copy)]
pub struct DispatchEntry {
    handler: CollisionHandler,
    swap: bool,
}

/// Maps an ordered pair of shape kinds to its collision routine
///
/// The table is a fixed 8x8 array built once at startup; the shape kind set
/// is closed, so no entries are ever added later. Pairs without a
/// registered routine are a designed limitation and report "no collision".
pub struct DispatchTable {
    entries: [[Option<DispatchEntry>; ShapeKind::COUNT]; ShapeKind::COUNT],
}

impl DispatchTable {
    /// Builds the dispatch table with every supported shape pair registered
    pub fn new() -> Self {
        use ShapeKind::*;

        let mut table = Self {
            entries: [[None; ShapeKind::COUNT]; ShapeKind::COUNT],
        };

        table.register(Circle, Circle, routines::circle_circle, true);
        table.register(Circle, Particle, routines::circle_particle, true);
        table.register(Circle, Plane, routines::circle_plane, true);
        table.register(Circle, Line, routines::circle_line, true);
        table.register(Circle, Capsule, routines::circle_capsule, true);
        table.register(Circle, Convex, routines::circle_convex, true);
        table.register(Circle, Box, routines::circle_convex, true);
        table.register(Circle, Heightfield, routines::circle_heightfield, true);

        table.register(Particle, Plane, routines::particle_plane, true);
        table.register(Particle, Capsule, routines::particle_capsule, true);
        table.register(Particle, Convex, routines::particle_convex, true);
        table.register(Particle, Box, routines::particle_convex, true);

        table.register(Plane, Convex, routines::plane_convex, true);
        table.register(Plane, Box, routines::plane_convex, true);
        table.register(Plane, Line, routines::plane_line, true);
        table.register(Plane, Capsule, routines::plane_capsule, true);

        table.register(Convex, Convex, routines::convex_convex, true);
        table.register(Convex, Box, routines::convex_convex, true);
        table.register(Box, Box, routines::convex_convex, true);

        table.register(Convex, Capsule, routines::convex_capsule, true);
        table.register(Box, Capsule, routines::convex_capsule, true);
        table.register(Capsule, Capsule, routines::capsule_capsule, true);

        table.register(Convex, Heightfield, routines::convex_heightfield, true);
        table.register(Box, Heightfield, routines::convex_heightfield, true);

        // Line-line, line-box, line-capsule and line-convex have no
        // closed-form routine and stay unregistered on purpose.

        table
    }

    /// Registers a handler for the ordered pair `(kind_a, kind_b)`
    ///
    /// If `bidirectional` is set, the mirrored pair is installed as well
    /// with the swap bit set, so the A-to-B normal convention is preserved
    /// under role reversal.
    pub fn register(
        &mut self,
        kind_a: ShapeKind,
        kind_b: ShapeKind,
        handler: CollisionHandler,
        bidirectional: bool,
    ) {
        self.entries[kind_a.index()][kind_b.index()] = Some(DispatchEntry {
            handler,
            swap: false,
        });

        if bidirectional && kind_a != kind_b {
            self.entries[kind_b.index()][kind_a.index()] = Some(DispatchEntry {
                handler,
                swap: true,
            });
        }
    }

    /// Returns whether the ordered pair has a registered routine
    pub fn supports(&self, kind_a: ShapeKind, kind_b: ShapeKind) -> bool {
        self.entries[kind_a.index()][kind_b.index()].is_some()
    }

    /// Runs the collision routine for the given pair
    ///
    /// Returns `None` both for non-overlapping pairs and for pairs with no
    /// registered routine. Mirrored entries call the handler with the roles
    /// exchanged, then swap each contact's points and negate each normal so
    /// the result is expressed in the caller's A/B order.
    pub fn collide(&self, context: &PairContext, just_test: bool) -> Option<CollisionResult> {
        let entry = self.entries[context.shape_a.kind().index()][context.shape_b.kind().index()]?;

        if entry.swap {
            (entry.handler)(&context.swapped(), just_test).map(CollisionResult::swapped)
        } else {
            (entry.handler)(context, just_test)
        }
    }
}

impl Default for DispatchTable {
    fn default() -> Self {
        Self::new()
    }
}
