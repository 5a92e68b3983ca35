//! Point-mass particles integrated with semi-implicit Euler and decay damping.

use crate::float::Float;
use crate::vec::Vec3;

/// A point mass with a collision radius.
///
/// `inv_mass == 0` marks a fixed (infinite-mass) particle: forces never
/// accelerate it and contacts never move it.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle<F: Float> {
    pub pos: Vec3<F>,
    pub vel: Vec3<F>,
    /// Acceleration derived from the force accumulator at the end of the
    /// last integration.
    pub acc: Vec3<F>,
    pub inv_mass: F,
    /// Fraction of velocity kept per unit time, in (0, 1].
    pub damping: F,
    /// Acceleration due to gravity; always acting, never cleared.
    pub gravity: Vec3<F>,
    pub force_accum: Vec3<F>,
    /// Sphere radius used by collision detection and by renderers.
    pub radius: F,
}

impl<F: Float> Particle<F> {
    /// Gravity applied when none is given: 20 units/s² down the z axis.
    pub fn default_gravity() -> Vec3<F> {
        Vec3::new(F::zero(), F::zero(), F::from_f32(-20.0))
    }

    /// Damping applied when none is given.
    pub fn default_damping() -> F {
        F::from_f32(0.995)
    }

    pub fn new(pos: Vec3<F>, vel: Vec3<F>, acc: Vec3<F>, inv_mass: F, radius: F) -> Self {
        let mut particle = Particle {
            pos,
            vel,
            acc,
            inv_mass,
            damping: Self::default_damping(),
            gravity: Self::default_gravity(),
            force_accum: Vec3::zero(),
            radius,
        };
        particle.clear_accumulator();
        particle
    }

    /// A particle at rest with the given mass. Masses at or near zero give a
    /// fixed particle.
    pub fn with_mass(pos: Vec3<F>, mass: F, radius: F) -> Self {
        let inv_mass = if mass.is_near_zero(F::from_f32(1e-10)) {
            F::zero()
        } else {
            F::one() / mass
        };
        Particle::new(pos, Vec3::zero(), Vec3::zero(), inv_mass, radius)
    }

    /// An immovable particle.
    pub fn fixed(pos: Vec3<F>, radius: F) -> Self {
        Particle::new(pos, Vec3::zero(), Vec3::zero(), F::zero(), radius)
    }

    /// Light, fast, gravity-free projectile fired along `direction`.
    pub fn laser(pos: Vec3<F>, direction: Vec3<F>) -> Self {
        let vel = direction.normalize().scale(F::from_f32(100.0));
        Particle::new(pos, vel, Vec3::zero(), F::from_f32(10.0), F::one())
            .with_gravity(Vec3::zero())
    }

    /// Heavy unit-radius shell, launched with `vel`.
    pub fn firework(pos: Vec3<F>, vel: Vec3<F>) -> Self {
        Particle::new(pos, vel, Vec3::zero(), F::one() / F::from_f32(200.0), F::one())
    }

    pub fn with_gravity(mut self, gravity: Vec3<F>) -> Self {
        self.gravity = gravity;
        self.clear_accumulator();
        self
    }

    pub fn with_damping(mut self, damping: F) -> Self {
        self.damping = damping;
        self
    }

    pub fn is_fixed(&self) -> bool {
        self.inv_mass == F::zero()
    }

    /// Mass, infinite for fixed particles.
    pub fn mass(&self) -> F {
        if self.is_fixed() {
            F::infinity()
        } else {
            F::one() / self.inv_mass
        }
    }

    /// The force gravity exerts on this particle; zero when fixed.
    pub fn standing_force(&self) -> Vec3<F> {
        if self.is_fixed() {
            Vec3::zero()
        } else {
            self.gravity.scale(F::one() / self.inv_mass)
        }
    }

    /// Reset the accumulator to the standing gravity force.
    pub fn clear_accumulator(&mut self) {
        self.force_accum = self.standing_force();
    }

    pub fn add_force(&mut self, force: Vec3<F>) {
        self.force_accum += force;
    }

    /// Advance the particle by `dt`.
    ///
    /// Position and velocity use the acceleration from the previous step;
    /// the new acceleration comes from the forces accumulated this step,
    /// after which the accumulator falls back to standing gravity.
    pub fn integrate(&mut self, dt: F) {
        debug_assert!(dt > F::zero(), "integrate requires dt > 0");
        self.pos += self.vel.scale(dt) + self.acc.scale(F::half() * dt * dt);
        self.vel = self.vel.scale(self.damping.powf(dt)) + self.acc.scale(dt);
        self.acc = self.force_accum.scale(self.inv_mass);
        self.clear_accumulator();
    }
}
