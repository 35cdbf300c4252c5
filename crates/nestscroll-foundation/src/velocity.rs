//! Fling velocity introspection for fling handoff.
//!
//! The animator driving a list's fling exposes its velocity through
//! [`FlingVelocitySource`]. Reading it is best effort: [`VelocityProbe`]
//! turns every failure into a velocity of 0 so the caller simply starts the
//! continuation from rest.

use std::fmt;

use crate::engine::ListLayoutEngine;

/// Why a fling velocity could not be read.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VelocityReadError {
    /// No fling is running.
    Inactive,
    /// The animator's state could not be read.
    Unavailable { reason: String },
}

impl fmt::Display for VelocityReadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VelocityReadError::Inactive => write!(f, "no fling in progress"),
            VelocityReadError::Unavailable { reason } => {
                write!(f, "fling velocity unavailable: {reason}")
            }
        }
    }
}

impl std::error::Error for VelocityReadError {}

/// Capability a fling animator implements to take part in fling handoff.
pub trait FlingVelocitySource {
    /// Current vertical velocity in px/sec.
    fn current_velocity(&self) -> Result<f32, VelocityReadError>;
}

/// Reads the current vertical fling velocity of a list.
pub struct VelocityProbe<'a> {
    source: Option<&'a dyn FlingVelocitySource>,
}

impl<'a> VelocityProbe<'a> {
    pub fn new(source: Option<&'a dyn FlingVelocitySource>) -> Self {
        Self { source }
    }

    pub fn for_engine<E: ListLayoutEngine>(engine: &'a E) -> Self {
        Self::new(engine.fling_velocity_source())
    }

    /// Velocity in px/sec, or 0.0 when there is no readable fling.
    pub fn current_velocity_y(&self) -> f32 {
        let Some(source) = self.source else {
            return 0.0;
        };
        match source.current_velocity() {
            Ok(velocity) if velocity.is_finite() => velocity,
            Ok(velocity) => {
                log::warn!("discarding non-finite fling velocity {velocity}");
                0.0
            }
            Err(VelocityReadError::Inactive) => 0.0,
            Err(err) => {
                log::warn!("{err}; handing off fling at rest");
                0.0
            }
        }
    }
}
