//! Step observer trait for monitoring the cloth from the host.

/// Hooks into the simulation lifecycle.
///
/// The crate is `no_std` and does no logging of its own; implement this
/// to forward events to whatever sink the host has (console, profiler,
/// debug overlay). All methods default to no-ops.
pub trait StepObserver {
    /// Called after all particles have been integrated and confined.
    fn on_integrate(&mut self) {}

    /// Called after each full relaxation pass over the constraints.
    fn on_relax_iteration(&mut self, _iteration: usize) {}

    /// Called when a tear deactivates the constraint at `_index`.
    fn on_tear(&mut self, _index: usize) {}

    /// Called after a fresh mesh has been swapped in.
    fn on_reset(&mut self, _particles: usize, _constraints: usize) {}

    /// Called when a simulation step is fully complete.
    fn on_step_complete(&mut self) {}
}

/// A no-op observer that does nothing. Use as default when no observation needed.
pub struct NoOpStepObserver;

impl StepObserver for NoOpStepObserver {}
