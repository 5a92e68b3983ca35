//! Contact generators: every source of contacts the world queries each tick.

use crate::collision::{BoundaryCollisions, ParticleCollisions};
use crate::contact::Contact;
use crate::float::Float;
use crate::link::{Cable, Rod};
use crate::set::{ParticleHandle, ParticleSet};
use alloc::vec::Vec as AllocVec;

/// Identity of a generator registered with a [`World`](crate::World).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GeneratorId(pub(crate) u64);

/// A contact generator, dispatched by variant.
#[derive(Clone, Debug, PartialEq)]
pub enum ContactGenerator<F: Float> {
    Collisions(ParticleCollisions<F>),
    Boundary(BoundaryCollisions<F>),
    Rod(Rod<F>),
    Cable(Cable<F>),
}

impl<F: Float> ContactGenerator<F> {
    /// Append this tick's contacts to `out`.
    pub fn generate_contacts(&self, particles: &ParticleSet<F>, out: &mut AllocVec<Contact<F>>) {
        match self {
            ContactGenerator::Collisions(g) => g.generate_contacts(particles, out),
            ContactGenerator::Boundary(g) => g.generate_contacts(particles, out),
            ContactGenerator::Rod(rod) => out.extend(rod.generate_contact(particles)),
            ContactGenerator::Cable(cable) => out.extend(cable.generate_contact(particles)),
        }
    }

    /// Whether this generator holds an explicit reference to `handle`.
    pub fn references(&self, handle: ParticleHandle) -> bool {
        match self {
            ContactGenerator::Rod(rod) => rod.particles.contains(&handle),
            ContactGenerator::Cable(cable) => cable.particles.contains(&handle),
            ContactGenerator::Collisions(_) | ContactGenerator::Boundary(_) => false,
        }
    }
}
