//! Force generators: gravity, springs, bungees and the analytic stiff spring.
//!
//! Every generator *adds* to a particle's force accumulator. Fixed particles
//! (`inv_mass == 0`) and coincident spring endpoints receive no force.

use crate::float::Float;
use crate::particle::Particle;
use crate::set::{ParticleHandle, ParticleSet};
use crate::vec::Vec3;

/// A force generator, dispatched by variant.
#[derive(Clone, Debug, PartialEq)]
pub enum ForceGenerator<F: Float> {
    Gravity(Gravity<F>),
    Spring(ParticleSpring<F>),
    AnchoredSpring(AnchoredSpring<F>),
    AnchoredBungee(AnchoredBungee<F>),
    StiffAnchoredSpring(StiffAnchoredSpring<F>),
}

/// Constant gravitational acceleration, applied as `g * mass`.
#[derive(Clone, Debug, PartialEq)]
pub struct Gravity<F: Float> {
    pub gravity: Vec3<F>,
}

/// Spring to another particle. Symmetric springs need one generator per
/// endpoint, each pointing at the other.
#[derive(Clone, Debug, PartialEq)]
pub struct ParticleSpring<F: Float> {
    pub other: ParticleHandle,
    pub spring_constant: F,
    pub rest_length: F,
}

/// Spring to a fixed point in space.
#[derive(Clone, Debug, PartialEq)]
pub struct AnchoredSpring<F: Float> {
    pub anchor: Vec3<F>,
    pub spring_constant: F,
    pub rest_length: F,
}

/// Anchored spring that only pulls: no force while compressed or slack.
#[derive(Clone, Debug, PartialEq)]
pub struct AnchoredBungee<F: Float> {
    pub anchor: Vec3<F>,
    pub spring_constant: F,
    pub rest_length: F,
}

/// Zero-rest-length anchored spring solved in closed form.
///
/// The damped harmonic oscillator `p'' = -k p - d p'` is advanced exactly
/// over the step to a target position, which is then inverted through the
/// integrator's position update into a force. Stays stable for stiff `k` at
/// the cost of accurate velocities. Over- and critically damped
/// configurations (`k <= d² / 4`) produce no force.
#[derive(Clone, Debug, PartialEq)]
pub struct StiffAnchoredSpring<F: Float> {
    pub anchor: Vec3<F>,
    pub spring_constant: F,
    pub damping: F,
}

/// Hooke's law on the separation `d`: `-k (|d| - l0) d / |d|`.
fn hooke<F: Float>(d: Vec3<F>, spring_constant: F, rest_length: F) -> Option<Vec3<F>> {
    let len = d.length();
    if len.is_near_zero(F::from_f32(1e-10)) {
        return None; // coincident endpoints
    }
    Some(d.scale(-spring_constant * (len - rest_length) / len))
}

impl<F: Float> Gravity<F> {
    pub fn new(gravity: Vec3<F>) -> Self {
        Gravity { gravity }
    }

    pub fn force(&self, particle: &Particle<F>) -> Option<Vec3<F>> {
        if particle.is_fixed() {
            return None;
        }
        Some(self.gravity.scale(F::one() / particle.inv_mass))
    }
}

impl<F: Float> ParticleSpring<F> {
    pub fn new(other: ParticleHandle, spring_constant: F, rest_length: F) -> Self {
        ParticleSpring { other, spring_constant, rest_length }
    }

    pub fn force(&self, particle: &Particle<F>, other_pos: Vec3<F>) -> Option<Vec3<F>> {
        hooke(particle.pos - other_pos, self.spring_constant, self.rest_length)
    }
}

impl<F: Float> AnchoredSpring<F> {
    pub fn new(anchor: Vec3<F>, spring_constant: F, rest_length: F) -> Self {
        AnchoredSpring { anchor, spring_constant, rest_length }
    }

    pub fn force(&self, particle: &Particle<F>) -> Option<Vec3<F>> {
        hooke(particle.pos - self.anchor, self.spring_constant, self.rest_length)
    }
}

impl<F: Float> AnchoredBungee<F> {
    pub fn new(anchor: Vec3<F>, spring_constant: F, rest_length: F) -> Self {
        AnchoredBungee { anchor, spring_constant, rest_length }
    }

    pub fn force(&self, particle: &Particle<F>) -> Option<Vec3<F>> {
        let d = particle.pos - self.anchor;
        if d.length() <= self.rest_length {
            return None;
        }
        hooke(d, self.spring_constant, self.rest_length)
    }
}

impl<F: Float> StiffAnchoredSpring<F> {
    pub fn new(anchor: Vec3<F>, spring_constant: F, damping: F) -> Self {
        StiffAnchoredSpring { anchor, spring_constant, damping }
    }

    pub fn force(&self, particle: &Particle<F>, dt: F) -> Option<Vec3<F>> {
        if dt <= F::zero() {
            return None;
        }
        let d = self.damping;
        let freq2 = self.spring_constant - F::from_f32(0.25) * d * d;
        if freq2 <= F::zero() {
            return None;
        }
        let gamma = F::half() * freq2.sqrt();
        let p0 = particle.pos - self.anchor;
        let v = particle.vel;
        let c = p0.scale(d / (F::two() * gamma)) + v.scale(F::one() / gamma);

        let target = (p0.scale((gamma * dt).cos()) + c.scale((gamma * dt).sin()))
            .scale((-F::half() * d * dt).exp());

        let acc = (target - p0).scale(F::two() / (dt * dt)) - v.scale(F::two() / dt);
        Some(acc.scale(F::one() / particle.inv_mass))
    }
}

impl<F: Float> ForceGenerator<F> {
    pub fn gravity(gravity: Vec3<F>) -> Self {
        ForceGenerator::Gravity(Gravity::new(gravity))
    }

    pub fn spring(other: ParticleHandle, spring_constant: F, rest_length: F) -> Self {
        ForceGenerator::Spring(ParticleSpring::new(other, spring_constant, rest_length))
    }

    pub fn anchored_spring(anchor: Vec3<F>, spring_constant: F, rest_length: F) -> Self {
        ForceGenerator::AnchoredSpring(AnchoredSpring::new(anchor, spring_constant, rest_length))
    }

    pub fn anchored_bungee(anchor: Vec3<F>, spring_constant: F, rest_length: F) -> Self {
        ForceGenerator::AnchoredBungee(AnchoredBungee::new(anchor, spring_constant, rest_length))
    }

    pub fn stiff_anchored_spring(anchor: Vec3<F>, spring_constant: F, damping: F) -> Self {
        ForceGenerator::StiffAnchoredSpring(StiffAnchoredSpring::new(anchor, spring_constant, damping))
    }

    /// The particle this generator reads besides its target, if any.
    pub fn referenced_particle(&self) -> Option<ParticleHandle> {
        match self {
            ForceGenerator::Spring(s) => Some(s.other),
            _ => None,
        }
    }

    /// Add this generator's force for `dt` to `target`'s accumulator.
    ///
    /// Stale handles, fixed targets and degenerate geometry are no-ops.
    pub fn update_force(&self, target: ParticleHandle, particles: &mut ParticleSet<F>, dt: F) {
        let other_pos = match self.referenced_particle() {
            Some(other) => match particles.get(other) {
                Some(p) => Some(p.pos),
                None => return,
            },
            None => None,
        };
        let Some(particle) = particles.get_mut(target) else {
            return;
        };
        if particle.is_fixed() {
            return;
        }

        let force = match (self, other_pos) {
            (ForceGenerator::Gravity(g), _) => g.force(particle),
            (ForceGenerator::Spring(s), Some(other_pos)) => s.force(particle, other_pos),
            (ForceGenerator::Spring(_), None) => None,
            (ForceGenerator::AnchoredSpring(s), _) => s.force(particle),
            (ForceGenerator::AnchoredBungee(b), _) => b.force(particle),
            (ForceGenerator::StiffAnchoredSpring(s), _) => s.force(particle, dt),
        };
        if let Some(force) = force {
            particle.add_force(force);
        }
    }
}
