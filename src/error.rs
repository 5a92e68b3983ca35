//! Error types for world operations.

use core::fmt;

use crate::vec::Axis;

/// Errors returned at the world's API boundary. Numerical degeneracies
/// inside a tick are never errors; they resolve to no-ops.
#[derive(Debug, Clone, PartialEq)]
pub enum PhysicsError {
    /// The particle handle refers to a removed particle.
    StaleHandle,
    /// A link or spring was asked to connect a particle to itself.
    SameParticle,
    /// World bounds have `min > max` (or NaN) on this axis.
    InvalidBounds { axis: Axis },
    /// The resolver needs at least one iteration.
    InvalidMaxIterations,
    /// Restitution must be in [0, 1].
    InvalidRestitution,
    /// No contact generator with this id.
    UnknownGenerator,
}

impl fmt::Display for PhysicsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PhysicsError::StaleHandle => write!(f, "particle handle is stale"),
            PhysicsError::SameParticle => write!(f, "cannot link a particle to itself"),
            PhysicsError::InvalidBounds { axis } => {
                write!(f, "world bounds on axis {:?} have min > max", axis)
            }
            PhysicsError::InvalidMaxIterations => write!(f, "max_iterations must be at least 1"),
            PhysicsError::InvalidRestitution => write!(f, "restitution must be in [0, 1]"),
            PhysicsError::UnknownGenerator => write!(f, "no contact generator with this id"),
        }
    }
}
