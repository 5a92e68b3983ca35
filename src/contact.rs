//! Pairwise contacts and their velocity / interpenetration resolution.

use crate::float::Float;
use crate::set::{ParticleHandle, ParticleSet};
use crate::particle::Particle;
use crate::vec::Vec3;

/// A violated non-interpenetration (or link) constraint between particle
/// `a` and either particle `b` or, when `b` is `None`, immovable scenery.
///
/// `normal` is unit length and points toward `a`'s side of the contact;
/// `penetration > 0` means the constraint is currently violated.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Contact<F: Float> {
    pub a: ParticleHandle,
    pub b: Option<ParticleHandle>,
    pub restitution: F,
    pub normal: Vec3<F>,
    pub penetration: F,
    /// Displacement applied to `a` and `b` by the last interpenetration
    /// resolution.
    pub movement: [Vec3<F>; 2],
}

impl<F: Float> Contact<F> {
    pub fn new(
        a: ParticleHandle,
        b: Option<ParticleHandle>,
        restitution: F,
        normal: Vec3<F>,
        penetration: F,
    ) -> Self {
        Contact {
            a,
            b,
            restitution,
            normal,
            penetration,
            movement: [Vec3::zero(); 2],
        }
    }

    /// `a - b` of some per-particle quantity; `b` contributes zero when
    /// absent.
    fn relative(&self, particles: &ParticleSet<F>, f: impl Fn(&Particle<F>) -> Vec3<F>) -> Vec3<F> {
        let a = particles.get(self.a).map(&f).unwrap_or_else(Vec3::zero);
        let b = self
            .b
            .and_then(|b| particles.get(b))
            .map(&f)
            .unwrap_or_else(Vec3::zero);
        a - b
    }

    fn inv_masses(&self, particles: &ParticleSet<F>) -> (F, F) {
        let a = particles.get(self.a).map_or(F::zero(), |p| p.inv_mass);
        let b = self
            .b
            .and_then(|b| particles.get(b))
            .map_or(F::zero(), |p| p.inv_mass);
        (a, b)
    }

    /// Whether resolving this contact can move anything at all.
    pub fn is_movable(&self, particles: &ParticleSet<F>) -> bool {
        let (a, b) = self.inv_masses(particles);
        a + b > F::zero()
    }

    /// Relative velocity along the normal; negative means closing.
    pub fn separating_velocity(&self, particles: &ParticleSet<F>) -> F {
        self.relative(particles, |p| p.vel).dot(self.normal)
    }

    pub fn resolve(&mut self, particles: &mut ParticleSet<F>, dt: F) {
        self.resolve_velocity(particles, dt);
        self.resolve_interpenetration(particles, dt);
    }

    /// Apply the impulse that turns a closing velocity into
    /// `-restitution * v_sep`, split by inverse mass.
    pub fn resolve_velocity(&self, particles: &mut ParticleSet<F>, dt: F) {
        let separating = self.separating_velocity(particles);
        if separating >= F::zero() {
            return;
        }

        let mut new_separating = -self.restitution * separating;

        // Velocity built up by acceleration over the last step alone. In a
        // resting contact this is the whole closing speed, and bouncing it
        // back causes jitter.
        let acc_caused = self.relative(particles, |p| p.acc).scale(dt).dot(self.normal);
        if acc_caused < F::zero() {
            new_separating += self.restitution * acc_caused;
            if new_separating < F::zero() {
                new_separating = F::zero();
            }
        }

        let delta = new_separating - separating;

        let (inv_a, inv_b) = self.inv_masses(particles);
        let total = inv_a + inv_b;
        if total <= F::zero() {
            return;
        }

        let impulse_per_inv_mass = self.normal.scale(delta / total);
        if let Some(p) = particles.get_mut(self.a) {
            p.vel += impulse_per_inv_mass.scale(inv_a);
        }
        if let Some(p) = self.b.and_then(|b| particles.get_mut(b)) {
            p.vel -= impulse_per_inv_mass.scale(inv_b);
        }
    }

    /// Push the pair apart along the normal by the penetration depth, split
    /// by inverse mass, and record each particle's displacement.
    pub fn resolve_interpenetration(&mut self, particles: &mut ParticleSet<F>, _dt: F) {
        self.movement = [Vec3::zero(); 2];
        if self.penetration <= F::zero() {
            return;
        }

        let (inv_a, inv_b) = self.inv_masses(particles);
        let total = inv_a + inv_b;
        if total <= F::zero() {
            return;
        }

        let move_per_inv_mass = self.normal.scale(self.penetration / total);
        self.movement[0] = move_per_inv_mass.scale(inv_a);
        if let Some(p) = particles.get_mut(self.a) {
            p.pos += self.movement[0];
        }
        if let Some(p) = self.b.and_then(|b| particles.get_mut(b)) {
            self.movement[1] = -move_per_inv_mass.scale(inv_b);
            p.pos += self.movement[1];
        }
    }

    /// How far `handle` was moved when `self` was last resolved.
    pub fn displacement_of(&self, handle: ParticleHandle) -> Option<Vec3<F>> {
        if handle == self.a {
            Some(self.movement[0])
        } else if Some(handle) == self.b {
            Some(self.movement[1])
        } else {
            None
        }
    }

    /// Update this contact's penetration for the displacements `resolved`
    /// just applied, without re-running detection.
    pub fn absorb_movement(&mut self, resolved: &Contact<F>) {
        if let Some(d) = resolved.displacement_of(self.a) {
            self.penetration -= d.dot(self.normal);
        }
        if let Some(d) = self.b.and_then(|b| resolved.displacement_of(b)) {
            self.penetration += d.dot(self.normal);
        }
    }
}
