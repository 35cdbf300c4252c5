use std::cell::RefCell;

use nestscroll_foundation::{FlingVelocitySource, VelocityReadError};

/// Fling animator stand-in whose readout tests set directly.
#[derive(Debug)]
pub struct FakeFlingSource {
    readout: RefCell<Result<f32, VelocityReadError>>,
}

impl FakeFlingSource {
    pub fn idle() -> Self {
        Self {
            readout: RefCell::new(Err(VelocityReadError::Inactive)),
        }
    }

    pub fn flinging(velocity: f32) -> Self {
        let source = Self::idle();
        source.set_velocity(velocity);
        source
    }

    pub fn set_velocity(&self, velocity: f32) {
        *self.readout.borrow_mut() = Ok(velocity);
    }

    pub fn stop(&self) {
        *self.readout.borrow_mut() = Err(VelocityReadError::Inactive);
    }

    /// Makes every read fail as if the animator state were inaccessible.
    pub fn break_readout(&self, reason: &str) {
        *self.readout.borrow_mut() = Err(VelocityReadError::Unavailable {
            reason: reason.to_owned(),
        });
    }
}

impl Default for FakeFlingSource {
    fn default() -> Self {
        Self::idle()
    }
}

impl FlingVelocitySource for FakeFlingSource {
    fn current_velocity(&self) -> Result<f32, VelocityReadError> {
        self.readout.borrow().clone()
    }
}
