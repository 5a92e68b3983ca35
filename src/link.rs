//! Rods and cables: distance constraints between two particles expressed as
//! contacts, so they share the collision resolver.

use crate::contact::Contact;
use crate::float::Float;
use crate::set::{ParticleHandle, ParticleSet};

/// Current distance between two particles, `None` if either is gone.
fn current_length<F: Float>(particles: &ParticleSet<F>, pair: [ParticleHandle; 2]) -> Option<F> {
    let a = particles.get(pair[0])?;
    let b = particles.get(pair[1])?;
    Some(a.pos.distance(b.pos))
}

/// Holds two particles at exactly `length` apart.
#[derive(Clone, Debug, PartialEq)]
pub struct Rod<F: Float> {
    pub particles: [ParticleHandle; 2],
    pub length: F,
}

impl<F: Float> Rod<F> {
    pub fn new(a: ParticleHandle, b: ParticleHandle, length: F) -> Self {
        Rod { particles: [a, b], length }
    }

    pub fn current_length(&self, particles: &ParticleSet<F>) -> Option<F> {
        current_length(particles, self.particles)
    }

    /// A fully inelastic contact pulling the pair back to `length`, or
    /// `None` if the rod is exactly at length.
    pub fn generate_contact(&self, particles: &ParticleSet<F>) -> Option<Contact<F>> {
        let [a, b] = self.particles;
        let current = self.current_length(particles)?;
        if current == self.length {
            return None;
        }
        let toward_b = (particles.get(b)?.pos - particles.get(a)?.pos).normalize();
        let (normal, penetration) = if current > self.length {
            (toward_b, current - self.length)
        } else {
            (-toward_b, self.length - current)
        };
        Some(Contact::new(a, Some(b), F::zero(), normal, penetration))
    }
}

/// Keeps two particles no further than `max_length` apart.
#[derive(Clone, Debug, PartialEq)]
pub struct Cable<F: Float> {
    pub particles: [ParticleHandle; 2],
    pub max_length: F,
    pub restitution: F,
}

impl<F: Float> Cable<F> {
    pub fn new(a: ParticleHandle, b: ParticleHandle, max_length: F, restitution: F) -> Self {
        Cable { particles: [a, b], max_length, restitution }
    }

    pub fn current_length(&self, particles: &ParticleSet<F>) -> Option<F> {
        current_length(particles, self.particles)
    }

    /// A contact pulling the pair together once the cable is taut.
    pub fn generate_contact(&self, particles: &ParticleSet<F>) -> Option<Contact<F>> {
        let [a, b] = self.particles;
        let current = self.current_length(particles)?;
        if current < self.max_length {
            return None;
        }
        let toward_b = (particles.get(b)?.pos - particles.get(a)?.pos).normalize();
        Some(Contact::new(a, Some(b), self.restitution, toward_b, current - self.max_length))
    }
}
