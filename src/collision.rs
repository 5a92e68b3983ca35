//! Sphere collision detection: brute-force particle pairs and the world's
//! axis-aligned boundary box.

use crate::contact::Contact;
use crate::error::PhysicsError;
use crate::float::Float;
use crate::set::ParticleSet;
use crate::vec::{Axis, Vec3};
use alloc::vec::Vec as AllocVec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Axis-aligned world limits, each a `[min, max]` pair.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Bounds<F: Float> {
    pub x: [F; 2],
    pub y: [F; 2],
    pub z: [F; 2],
}

impl<F: Float> Bounds<F> {
    pub fn new(x: [F; 2], y: [F; 2], z: [F; 2]) -> Self {
        Bounds { x, y, z }
    }

    pub fn limits(&self, axis: Axis) -> [F; 2] {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }

    /// Reject any axis whose minimum exceeds its maximum.
    pub fn validate(&self) -> Result<(), PhysicsError> {
        for axis in Axis::ALL {
            let [min, max] = self.limits(axis);
            if !(min <= max) {
                return Err(PhysicsError::InvalidBounds { axis });
            }
        }
        Ok(())
    }

    pub fn contains(&self, point: Vec3<F>) -> bool {
        Axis::ALL.iter().all(|&axis| {
            let [min, max] = self.limits(axis);
            let v = point.axis(axis);
            v >= min && v <= max
        })
    }
}

/// Detects overlapping spheres among every unordered pair of particles.
#[derive(Clone, Debug, PartialEq)]
pub struct ParticleCollisions<F: Float> {
    pub restitution: F,
}

impl<F: Float> ParticleCollisions<F> {
    pub fn new(restitution: F) -> Self {
        ParticleCollisions { restitution }
    }

    pub fn generate_contacts(&self, particles: &ParticleSet<F>, out: &mut AllocVec<Contact<F>>) {
        let bodies: AllocVec<_> = particles.iter().collect();
        for (i, (ha, pa)) in bodies.iter().enumerate() {
            for (hb, pb) in bodies.iter().skip(i + 1) {
                let separation = pa.pos - pb.pos;
                let distance = separation.length();
                let reach = pa.radius + pb.radius;
                if distance >= reach {
                    continue;
                }
                // Concentric spheres have no separating direction; push
                // them apart vertically.
                let normal = if distance.is_near_zero(F::from_f32(1e-10)) {
                    Vec3::unit(Axis::Z, false)
                } else {
                    separation.scale(F::one() / distance)
                };
                out.push(Contact::new(*ha, Some(*hb), self.restitution, normal, reach - distance));
            }
        }
    }
}

/// Detects spheres touching or crossing the walls of a [`Bounds`] box.
/// Each violated wall yields its own single-particle contact.
///
/// At most one wall per axis is reported: a sphere wider than the box on
/// some axis only collides with the low wall of that axis.
#[derive(Clone, Debug, PartialEq)]
pub struct BoundaryCollisions<F: Float> {
    pub bounds: Bounds<F>,
    pub restitution: F,
}

impl<F: Float> BoundaryCollisions<F> {
    pub fn new(bounds: Bounds<F>, restitution: F) -> Self {
        BoundaryCollisions { bounds, restitution }
    }

    pub fn generate_contacts(&self, particles: &ParticleSet<F>, out: &mut AllocVec<Contact<F>>) {
        for (handle, p) in particles.iter() {
            for axis in Axis::ALL {
                let [min, max] = self.bounds.limits(axis);
                let v = p.pos.axis(axis);
                if v <= min + p.radius {
                    let penetration = min + p.radius - v;
                    out.push(Contact::new(handle, None, self.restitution, Vec3::unit(axis, false), penetration));
                } else if v >= max - p.radius {
                    let penetration = v + p.radius - max;
                    out.push(Contact::new(handle, None, self.restitution, Vec3::unit(axis, true), penetration));
                }
            }
        }
    }
}
