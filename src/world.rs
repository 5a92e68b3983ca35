//! The particle world: owns particles, forces and contact generators, and
//! advances them one tick at a time.

use crate::collision::{BoundaryCollisions, Bounds, ParticleCollisions};
use crate::config::WorldConfig;
use crate::contact::Contact;
use crate::error::PhysicsError;
use crate::float::Float;
use crate::force::ForceGenerator;
use crate::generator::{ContactGenerator, GeneratorId};
use crate::link::{Cable, Rod};
use crate::observer::{NoOpStepObserver, StepObserver};
use crate::particle::Particle;
use crate::registry::{ForceRegistry, RegistrationId};
use crate::resolver::{ContactResolver, StepStats};
use crate::set::{ParticleHandle, ParticleSet};
use alloc::vec::Vec as AllocVec;

/// A bounded box of particles.
///
/// `step` is the only place simulation state changes; hosts read positions
/// and radii between ticks and add or remove particles, forces and links
/// between ticks.
pub struct World<F: Float> {
    particles: ParticleSet<F>,
    forces: ForceRegistry<F>,
    generators: AllocVec<(GeneratorId, ContactGenerator<F>)>,
    next_generator: u64,
    bounds: Bounds<F>,
    resolver: ContactResolver,
}

impl<F: Float> World<F> {
    pub fn new(bounds: Bounds<F>, config: &WorldConfig<F>) -> Result<Self, PhysicsError> {
        bounds.validate()?;
        config.validate()?;

        let mut world = World {
            particles: ParticleSet::new(),
            forces: ForceRegistry::new(),
            generators: AllocVec::new(),
            next_generator: 0,
            bounds,
            resolver: ContactResolver::new(config.max_iterations),
        };
        if config.collisions {
            world.add_contact_generator(ContactGenerator::Collisions(ParticleCollisions::new(
                config.collision_restitution,
            )));
        }
        if config.boundary {
            world.add_contact_generator(ContactGenerator::Boundary(BoundaryCollisions::new(
                bounds,
                config.boundary_restitution,
            )));
        }
        Ok(world)
    }

    /// A world with default configuration inside the given limits.
    pub fn with_limits(xlim: [F; 2], ylim: [F; 2], zlim: [F; 2]) -> Result<Self, PhysicsError> {
        World::new(Bounds::new(xlim, ylim, zlim), &WorldConfig::default())
    }

    pub fn bounds(&self) -> &Bounds<F> {
        &self.bounds
    }

    pub fn max_iterations(&self) -> usize {
        self.resolver.max_iterations
    }

    // ---- particles ----

    pub fn add_particle(&mut self, particle: Particle<F>) -> ParticleHandle {
        self.particles.insert(particle)
    }

    /// Remove a particle together with every force registration and link
    /// that refers to it.
    pub fn remove_particle(&mut self, handle: ParticleHandle) -> Result<Particle<F>, PhysicsError> {
        let particle = self.particles.remove(handle).ok_or(PhysicsError::StaleHandle)?;
        self.prune_references(handle);
        Ok(particle)
    }

    /// Drop the force registrations and links that name `handle`.
    fn prune_references(&mut self, handle: ParticleHandle) {
        let forces = self.forces.remove_particle(handle);
        let before = self.generators.len();
        self.generators.retain(|(_, g)| !g.references(handle));
        log::debug!(
            "removed particle {:?} with {} force registrations and {} links",
            handle,
            forces,
            before - self.generators.len()
        );
    }

    /// Keep only the particles for which `keep` returns true.
    pub fn retain_particles(&mut self, mut keep: impl FnMut(ParticleHandle, &Particle<F>) -> bool) {
        let doomed: AllocVec<ParticleHandle> = self
            .particles
            .iter()
            .filter(|(h, p)| !keep(*h, *p))
            .map(|(h, _)| h)
            .collect();
        for handle in doomed {
            if self.particles.remove(handle).is_some() {
                self.prune_references(handle);
            }
        }
    }

    pub fn particle(&self, handle: ParticleHandle) -> Option<&Particle<F>> {
        self.particles.get(handle)
    }

    pub fn particle_mut(&mut self, handle: ParticleHandle) -> Option<&mut Particle<F>> {
        self.particles.get_mut(handle)
    }

    pub fn particles(&self) -> impl Iterator<Item = (ParticleHandle, &Particle<F>)> {
        self.particles.iter()
    }

    pub fn particle_count(&self) -> usize {
        self.particles.len()
    }

    // ---- forces ----

    pub fn add_force(
        &mut self,
        handle: ParticleHandle,
        generator: ForceGenerator<F>,
    ) -> Result<RegistrationId, PhysicsError> {
        self.check_live(handle)?;
        if let Some(other) = generator.referenced_particle() {
            self.check_live(other)?;
            if other == handle {
                return Err(PhysicsError::SameParticle);
            }
        }
        Ok(self.forces.add(handle, generator))
    }

    /// Attach a spring between `a` and `b` as a pair of generators, one per
    /// endpoint.
    pub fn add_spring(
        &mut self,
        a: ParticleHandle,
        b: ParticleHandle,
        spring_constant: F,
        rest_length: F,
    ) -> Result<[RegistrationId; 2], PhysicsError> {
        self.check_pair(a, b)?;
        Ok([
            self.forces.add(a, ForceGenerator::spring(b, spring_constant, rest_length)),
            self.forces.add(b, ForceGenerator::spring(a, spring_constant, rest_length)),
        ])
    }

    pub fn remove_force(&mut self, handle: ParticleHandle, id: RegistrationId) -> bool {
        self.forces.remove(handle, id)
    }

    pub fn clear_forces(&mut self) {
        self.forces.clear();
    }

    pub fn forces(&self) -> &ForceRegistry<F> {
        &self.forces
    }

    // ---- contact generators ----

    pub fn add_contact_generator(&mut self, generator: ContactGenerator<F>) -> GeneratorId {
        let id = GeneratorId(self.next_generator);
        self.next_generator += 1;
        self.generators.push((id, generator));
        id
    }

    pub fn remove_contact_generator(&mut self, id: GeneratorId) -> Result<ContactGenerator<F>, PhysicsError> {
        let index = self
            .generators
            .iter()
            .position(|(gid, _)| *gid == id)
            .ok_or(PhysicsError::UnknownGenerator)?;
        Ok(self.generators.remove(index).1)
    }

    pub fn contact_generator(&self, id: GeneratorId) -> Option<&ContactGenerator<F>> {
        self.generators.iter().find(|(gid, _)| *gid == id).map(|(_, g)| g)
    }

    pub fn add_rod(&mut self, a: ParticleHandle, b: ParticleHandle, length: F) -> Result<GeneratorId, PhysicsError> {
        self.check_pair(a, b)?;
        Ok(self.add_contact_generator(ContactGenerator::Rod(Rod::new(a, b, length))))
    }

    pub fn add_cable(
        &mut self,
        a: ParticleHandle,
        b: ParticleHandle,
        max_length: F,
        restitution: F,
    ) -> Result<GeneratorId, PhysicsError> {
        self.check_pair(a, b)?;
        Ok(self.add_contact_generator(ContactGenerator::Cable(Cable::new(a, b, max_length, restitution))))
    }

    fn check_live(&self, handle: ParticleHandle) -> Result<(), PhysicsError> {
        if self.particles.contains(handle) {
            Ok(())
        } else {
            Err(PhysicsError::StaleHandle)
        }
    }

    fn check_pair(&self, a: ParticleHandle, b: ParticleHandle) -> Result<(), PhysicsError> {
        self.check_live(a)?;
        self.check_live(b)?;
        if a == b {
            return Err(PhysicsError::SameParticle);
        }
        Ok(())
    }

    /// All contacts the registered generators report for the current state,
    /// in generator insertion order.
    pub fn generate_contacts(&self) -> AllocVec<Contact<F>> {
        let mut contacts = AllocVec::new();
        for (_, generator) in self.generators.iter() {
            generator.generate_contacts(&self.particles, &mut contacts);
        }
        contacts
    }

    // ---- simulation ----

    pub fn step(&mut self, dt: F) -> StepStats {
        self.step_with_observer(dt, &mut NoOpStepObserver)
    }

    /// Advance the world by `dt`: accumulate forces, integrate, detect
    /// contacts and resolve them.
    pub fn step_with_observer<O: StepObserver>(&mut self, dt: F, observer: &mut O) -> StepStats {
        self.forces.update_forces(&mut self.particles, dt);
        observer.on_forces();

        for (_, p) in self.particles.iter_mut() {
            p.integrate(dt);
        }
        observer.on_integrate();

        let mut contacts = self.generate_contacts();
        observer.on_contacts_generated(contacts.len());

        let resolved = self
            .resolver
            .resolve_contacts(&mut self.particles, &mut contacts, dt, observer);

        let stats = StepStats {
            contacts: contacts.len(),
            iterations: resolved.iterations,
            converged: resolved.converged,
        };
        log::trace!(
            "step: {} particles, {} contacts, {} resolver iterations",
            self.particles.len(),
            stats.contacts,
            stats.iterations
        );
        observer.on_step_complete(&stats);
        stats
    }
}
