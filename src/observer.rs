//! Step observer trait for monitoring world ticks.

use crate::resolver::StepStats;

/// Trait for observing physics simulation steps.
///
/// Implement this trait to monitor solver progress (e.g., for debugging,
/// visualization, or performance profiling). All methods have default
/// no-op implementations.
pub trait StepObserver {
    /// Called after every registered force has been accumulated.
    fn on_forces(&mut self) {}

    /// Called after all particles have been integrated.
    fn on_integrate(&mut self) {}

    /// Called once contact generation has produced `count` contacts.
    fn on_contacts_generated(&mut self, _count: usize) {}

    /// Called after each resolver iteration with the index of the contact
    /// it resolved.
    fn on_contact_resolved(&mut self, _iteration: usize, _contact: usize) {}

    /// Called when a tick is fully complete.
    fn on_step_complete(&mut self, _stats: &StepStats) {}
}

/// A no-op observer that does nothing. Use as default when no observation needed.
pub struct NoOpStepObserver;

impl StepObserver for NoOpStepObserver {}
