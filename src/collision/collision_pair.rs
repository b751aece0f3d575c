/// An unordered pair of body ids, used as a key in the persistent
/// contact-pair table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CollisionPair {
    /// The smaller body id of the pair
    pub body_a: u32,

    /// The larger body id of the pair
    pub body_b: u32,
}

impl CollisionPair {
    /// Creates a new collision pair
    pub fn new(body_a: u32, body_b: u32) -> Self {
        // Always sort the ids to ensure consistent ordering
        if body_a <= body_b {
            Self { body_a, body_b }
        } else {
            Self {
                body_a: body_b,
                body_b: body_a,
            }
        }
    }

    /// Checks if this collision pair contains the specified body
    pub fn contains(&self, body: u32) -> bool {
        self.body_a == body || self.body_b == body
    }
}
