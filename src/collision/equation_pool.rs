/// A growable pool of reusable equations
///
/// Equations live in a dense buffer the solver can iterate directly; the
/// pool hands out index handles in acquisition order. Releasing returns
/// every equation at once, matching the per-step lifecycle: acquire during
/// collision, release in the coordinator's reset. The buffer starts at a
/// fixed capacity and grows amortized-doubling on exhaustion, keeping
/// already-allocated equations (and their heap allocations) for reuse.
pub struct EquationPool<T> {
    items: Vec<T>,
    in_use: usize,
}

impl<T: Default> EquationPool<T> {
    /// Creates a new pool with the given starting capacity
    pub fn with_capacity(capacity: usize) -> Self {
        let mut items = Vec::with_capacity(capacity);
        items.resize_with(capacity, T::default);

        Self { items, in_use: 0 }
    }

    /// Acquires one equation and returns its index handle
    pub fn acquire(&mut self) -> usize {
        if self.in_use == self.items.len() {
            self.items.push(T::default());
        }

        let index = self.in_use;
        self.in_use += 1;
        index
    }

    /// Returns the equation at the given index
    pub fn get(&self, index: usize) -> &T {
        &self.items[index]
    }

    /// Returns the equation at the given index mutably
    pub fn get_mut(&mut self, index: usize) -> &mut T {
        &mut self.items[index]
    }

    /// Returns the dense slice of equations acquired this step
    pub fn active(&self) -> &[T] {
        &self.items[..self.in_use]
    }

    /// Returns the number of equations acquired this step
    pub fn active_count(&self) -> usize {
        self.in_use
    }

    /// Releases every acquired equation back to the pool
    pub fn release_all(&mut self) {
        self.in_use = 0;
    }
}
