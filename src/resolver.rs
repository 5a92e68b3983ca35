//! Iterative contact resolver.
//!
//! Each iteration resolves the single worst contact: the most negative
//! separating velocity first, otherwise the deepest penetration. The
//! position correction is then folded into every contact sharing a
//! particle, so overlaps created by the fix are seen without re-running
//! detection. Work is capped at `max_iterations` resolutions.

use crate::contact::Contact;
use crate::float::Float;
use crate::observer::StepObserver;
use crate::set::ParticleSet;

/// Outcome of one `resolve_contacts` call.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ResolveStats {
    /// Number of contact resolutions performed.
    pub iterations: usize,
    /// `false` if the budget ran out while violations remained.
    pub converged: bool,
}

/// Diagnostics for one world tick.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct StepStats {
    pub contacts: usize,
    pub iterations: usize,
    pub converged: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactResolver {
    pub max_iterations: usize,
}

impl ContactResolver {
    pub fn new(max_iterations: usize) -> Self {
        ContactResolver { max_iterations }
    }

    /// Index of the next contact to resolve, or `None` when nothing that
    /// can move is closing or overlapping. Ties go to the earlier contact.
    fn select<F: Float>(particles: &ParticleSet<F>, contacts: &[Contact<F>]) -> Option<usize> {
        let mut min_separating = F::infinity();
        let mut min_index = None;
        let mut max_penetration = -F::infinity();
        let mut max_index = None;

        for (i, contact) in contacts.iter().enumerate() {
            if !contact.is_movable(particles) {
                continue;
            }
            let separating = contact.separating_velocity(particles);
            if separating < min_separating {
                min_separating = separating;
                min_index = Some(i);
            }
            if contact.penetration > max_penetration {
                max_penetration = contact.penetration;
                max_index = Some(i);
            }
        }

        if min_separating < F::zero() {
            min_index
        } else if max_penetration > F::zero() {
            max_index
        } else {
            None
        }
    }

    pub fn resolve_contacts<F: Float, O: StepObserver>(
        &self,
        particles: &mut ParticleSet<F>,
        contacts: &mut [Contact<F>],
        dt: F,
        observer: &mut O,
    ) -> ResolveStats {
        let mut iterations = 0;
        while iterations < self.max_iterations {
            let Some(index) = Self::select(particles, contacts) else {
                return ResolveStats { iterations, converged: true };
            };

            contacts[index].resolve(particles, dt);
            let resolved = contacts[index];
            for contact in contacts.iter_mut() {
                contact.absorb_movement(&resolved);
            }

            observer.on_contact_resolved(iterations, index);
            iterations += 1;
        }

        let converged = Self::select(particles, contacts).is_none();
        if !converged {
            log::debug!(
                "contact resolver exhausted {} iterations over {} contacts",
                iterations,
                contacts.len()
            );
        }
        ResolveStats { iterations, converged }
    }
}

impl Default for ContactResolver {
    fn default() -> Self {
        Self::new(100)
    }
}
