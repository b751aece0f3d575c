/// Type of rigid body, determining how it behaves in the simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RigidBodyType {
    /// Dynamic bodies are fully simulated (affected by forces, collisions, etc.)
    Dynamic,

    /// Kinematic bodies are moved programmatically but affect dynamic bodies
    Kinematic,

    /// Static bodies don't move and aren't affected by forces or collisions
    Static,
}

/// Sleep state of a rigid body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SleepState {
    /// The body is awake and fully simulated
    Awake,

    /// The body has been idle and is about to fall asleep
    Sleepy,

    /// The body is sleeping and skipped by most of the simulation
    Sleeping,
}
