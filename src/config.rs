//! Configuration for a particle world.

use crate::error::PhysicsError;
use crate::float::Float;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for the contact resolver and built-in contact generators.
///
/// # Builder Pattern
/// ```
/// use pointmass::config::WorldConfig;
///
/// let config: WorldConfig<f32> = WorldConfig::new()
///     .with_max_iterations(20)
///     .with_collision_restitution(0.8)
///     .with_boundary(false);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct WorldConfig<F: Float> {
    /// Maximum contact resolutions per tick. Default: 100.
    pub max_iterations: usize,
    /// Restitution of particle-particle collisions. Default: 1 (elastic).
    pub collision_restitution: F,
    /// Restitution of boundary collisions. Default: 1 (elastic).
    pub boundary_restitution: F,
    /// Detect sphere-sphere collisions. Default: true.
    pub collisions: bool,
    /// Detect collisions with the world bounds. Default: true.
    pub boundary: bool,
}

impl<F: Float> WorldConfig<F> {
    /// Create a new config with default values.
    pub fn new() -> Self {
        WorldConfig {
            max_iterations: 100,
            collision_restitution: F::one(),
            boundary_restitution: F::one(),
            collisions: true,
            boundary: true,
        }
    }

    /// Set the resolver's iteration budget.
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    pub fn with_collision_restitution(mut self, restitution: F) -> Self {
        self.collision_restitution = restitution;
        self
    }

    pub fn with_boundary_restitution(mut self, restitution: F) -> Self {
        self.boundary_restitution = restitution;
        self
    }

    /// Enable or disable sphere-sphere collision detection.
    pub fn with_collisions(mut self, enabled: bool) -> Self {
        self.collisions = enabled;
        self
    }

    /// Enable or disable boundary collision detection.
    pub fn with_boundary(mut self, enabled: bool) -> Self {
        self.boundary = enabled;
        self
    }

    pub fn validate(&self) -> Result<(), PhysicsError> {
        if self.max_iterations == 0 {
            return Err(PhysicsError::InvalidMaxIterations);
        }
        for restitution in [self.collision_restitution, self.boundary_restitution] {
            if !(restitution >= F::zero() && restitution <= F::one()) {
                return Err(PhysicsError::InvalidRestitution);
            }
        }
        Ok(())
    }
}

impl<F: Float> Default for WorldConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}
