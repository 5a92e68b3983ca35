//! Registry of (particle, force generator) associations.

use crate::float::Float;
use crate::force::ForceGenerator;
use crate::set::{ParticleHandle, ParticleSet};
use alloc::vec::Vec as AllocVec;

/// Identity of one registration, independent of the generator's value.
///
/// Two equal-valued generators attached to different particles (or to the
/// same particle twice) get distinct ids.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RegistrationId(u64);

#[derive(Clone, Debug)]
pub struct Registration<F: Float> {
    pub id: RegistrationId,
    pub particle: ParticleHandle,
    pub generator: ForceGenerator<F>,
}

/// Holds every force generator and the particle it drives. Registrations
/// are applied in insertion order.
#[derive(Clone, Debug)]
pub struct ForceRegistry<F: Float> {
    registrations: AllocVec<Registration<F>>,
    next_id: u64,
}

impl<F: Float> ForceRegistry<F> {
    pub fn new() -> Self {
        ForceRegistry {
            registrations: AllocVec::new(),
            next_id: 0,
        }
    }

    pub fn add(&mut self, particle: ParticleHandle, generator: ForceGenerator<F>) -> RegistrationId {
        let id = RegistrationId(self.next_id);
        self.next_id += 1;
        self.registrations.push(Registration { id, particle, generator });
        id
    }

    /// Remove the registration `id` if it drives `particle`.
    pub fn remove(&mut self, particle: ParticleHandle, id: RegistrationId) -> bool {
        let before = self.registrations.len();
        self.registrations.retain(|r| !(r.id == id && r.particle == particle));
        self.registrations.len() != before
    }

    /// Drop every registration that targets or reads `particle`.
    pub fn remove_particle(&mut self, particle: ParticleHandle) -> usize {
        let before = self.registrations.len();
        self.registrations.retain(|r| {
            r.particle != particle && r.generator.referenced_particle() != Some(particle)
        });
        before - self.registrations.len()
    }

    pub fn clear(&mut self) {
        self.registrations.clear();
    }

    pub fn get(&self, id: RegistrationId) -> Option<&Registration<F>> {
        self.registrations.iter().find(|r| r.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Registration<F>> {
        self.registrations.iter()
    }

    pub fn len(&self) -> usize {
        self.registrations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registrations.is_empty()
    }

    /// Accumulate every registered force for a step of `dt`.
    pub fn update_forces(&self, particles: &mut ParticleSet<F>, dt: F) {
        for r in self.registrations.iter() {
            r.generator.update_force(r.particle, particles, dt);
        }
    }
}

impl<F: Float> Default for ForceRegistry<F> {
    fn default() -> Self {
        Self::new()
    }
}
