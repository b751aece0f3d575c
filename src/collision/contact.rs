use crate::math::Vector2;
use crate::shapes::Shape;

/// One penetration point produced by a collision routine
///
/// Contact points are stored relative to the owning body's position (world
/// orientation, body-local offset). The normal is in world space and always
/// points from the first ("A") shape toward the second ("B") shape of the
/// tested pair, regardless of which internal routine produced it.
#[derive(Debug, Clone, Copy)]
pub struct RawContact {
    /// Contact point on shape A, relative to body A's position
    pub contact_point_a: Vector2,

    /// Contact point on shape B, relative to body B's position
    pub contact_point_b: Vector2,

    /// Unit contact normal in world space, pointing from A toward B
    pub normal: Vector2,

    /// Penetration depth, non-negative for any emitted contact
    pub depth: f32,
}

impl RawContact {
    /// Returns this contact with the A/B roles exchanged
    pub fn swapped(self) -> Self {
        Self {
            contact_point_a: self.contact_point_b,
            contact_point_b: self.contact_point_a,
            normal: -self.normal,
            depth: self.depth,
        }
    }
}

/// The outcome of a pairwise collision test
#[derive(Debug, Clone)]
pub enum CollisionResult {
    /// Overlap confirmed in `just_test` mode; no manifold was built
    Overlap,

    /// The full contact manifold
    Manifold(Vec<RawContact>),
}

impl CollisionResult {
    /// Returns the number of contacts in the manifold
    ///
    /// The `just_test` sentinel reports zero contacts even though it
    /// signals an overlap.
    pub fn contact_count(&self) -> usize {
        match self {
            CollisionResult::Overlap => 0,
            CollisionResult::Manifold(contacts) => contacts.len(),
        }
    }

    /// Returns the contacts of the manifold
    pub fn contacts(&self) -> &[RawContact] {
        match self {
            CollisionResult::Overlap => &[],
            CollisionResult::Manifold(contacts) => contacts,
        }
    }

    /// Returns this result with the A/B roles of every contact exchanged
    /// and every normal negated
    pub fn swapped(self) -> Self {
        match self {
            CollisionResult::Overlap => CollisionResult::Overlap,
            CollisionResult::Manifold(contacts) => CollisionResult::Manifold(
                contacts.into_iter().map(RawContact::swapped).collect(),
            ),
        }
    }
}

/// Geometric inputs for one ordered shape-pair test
///
/// Shape positions/angles are fully composed world transforms (body
/// transform combined with the shape's local offset/angle); anchors are the
/// body world positions that contact points are stored relative to.
#[derive(Clone, Copy)]
pub struct PairContext<'a> {
    /// The first shape of the pair
    pub shape_a: &'a Shape,

    /// The second shape of the pair
    pub shape_b: &'a Shape,

    /// World position of shape A
    pub position_a: Vector2,

    /// World position of shape B
    pub position_b: Vector2,

    /// World angle of shape A
    pub angle_a: f32,

    /// World angle of shape B
    pub angle_b: f32,

    /// World position of the body owning shape A
    pub anchor_a: Vector2,

    /// World position of the body owning shape B
    pub anchor_b: Vector2,
}

impl<'a> PairContext<'a> {
    /// Returns this context with the A/B roles exchanged
    pub fn swapped(&self) -> PairContext<'a> {
        PairContext {
            shape_a: self.shape_b,
            shape_b: self.shape_a,
            position_a: self.position_b,
            position_b: self.position_a,
            angle_a: self.angle_b,
            angle_b: self.angle_a,
            anchor_a: self.anchor_b,
            anchor_b: self.anchor_a,
        }
    }
}
