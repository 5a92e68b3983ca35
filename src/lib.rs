//! Point-mass particle physics with force generators and contact resolution.
//!
//! `pointmass` simulates spheres as point masses: a semi-implicit Euler
//! integrator with decay damping, pluggable force generators, brute-force
//! sphere and boundary collisions, rod and cable links, and an iterative
//! impulse/penetration contact resolver.
//!
//! # Features
//!
//! - **Forces**: gravity, particle and anchored springs, bungees, and an
//!   analytically integrated stiff spring
//! - **Contacts**: sphere-sphere, sphere-wall, rods (fixed distance) and
//!   cables (maximum distance) share one resolver
//! - **Resolver**: worst-first ordering with a bounded iteration budget
//! - **Handles**: particles live in a generational arena; removing one prunes
//!   the springs and links that referenced it
//! - **Observable**: Monitor ticks via the `StepObserver` trait
//! - **`no_std` compatible**: Works in embedded and WASM environments
//!
//! ```
//! use pointmass::{Particle, Vec3, World};
//!
//! let mut world = World::with_limits([-60.0, 60.0], [-60.0, 60.0], [0.0, 50.0]).unwrap();
//! let ball = world.add_particle(Particle::with_mass(Vec3::new(0.0, 0.0, 20.0), 10.0, 2.0));
//! for _ in 0..60 {
//!     world.step(1.0 / 60.0);
//! }
//! assert!(world.particle(ball).unwrap().pos.z < 20.0);
//! ```

#![no_std]

extern crate alloc;

pub mod float;
pub mod vec;
pub mod particle;
pub mod set;
pub mod force;
pub mod registry;
pub mod contact;
pub mod collision;
pub mod link;
pub mod generator;
pub mod resolver;
pub mod world;
pub mod observer;
pub mod config;
pub mod error;

// Re-export primary API
pub use float::Float;
pub use vec::{Axis, Vec3};
pub use particle::Particle;
pub use set::{ParticleHandle, ParticleSet};
pub use force::{ForceGenerator, Gravity, ParticleSpring, AnchoredSpring, AnchoredBungee, StiffAnchoredSpring};
pub use registry::{ForceRegistry, RegistrationId};
pub use contact::Contact;
pub use collision::{Bounds, ParticleCollisions, BoundaryCollisions};
pub use link::{Rod, Cable};
pub use generator::{ContactGenerator, GeneratorId};
pub use resolver::{ContactResolver, ResolveStats, StepStats};
pub use world::World;
pub use config::WorldConfig;
pub use observer::{StepObserver, NoOpStepObserver};
pub use error::PhysicsError;
