use crate::runtime::RuntimeHandle;
use crate::PreDrawCallbackId;

/// What a pre-draw callback wants done with the frame about to be drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PreDrawOutcome {
    /// Draw the frame as laid out.
    #[default]
    Proceed,
    /// Skip this draw; layout changed and another pass is due first.
    CancelDraw,
}

impl PreDrawOutcome {
    /// Cancelling wins over proceeding.
    pub fn combine(self, other: PreDrawOutcome) -> PreDrawOutcome {
        match (self, other) {
            (PreDrawOutcome::Proceed, PreDrawOutcome::Proceed) => PreDrawOutcome::Proceed,
            _ => PreDrawOutcome::CancelDraw,
        }
    }

    pub fn should_draw(self) -> bool {
        self == PreDrawOutcome::Proceed
    }
}

/// Keeps a pre-draw callback queued. Dropping it withdraws the callback.
///
/// Cancelling a callback that already ran is a no-op, so holders never need
/// to track whether the frame fired.
pub struct PreDrawRegistration {
    runtime: RuntimeHandle,
    id: Option<PreDrawCallbackId>,
}

impl PreDrawRegistration {
    pub(crate) fn new(runtime: RuntimeHandle, id: PreDrawCallbackId) -> Self {
        Self {
            runtime,
            id: Some(id),
        }
    }

    pub(crate) fn inactive(runtime: RuntimeHandle) -> Self {
        Self { runtime, id: None }
    }

    /// Returns true while the callback is still waiting for a draw.
    pub fn is_active(&self) -> bool {
        self.id
            .is_some_and(|id| self.runtime.is_pre_draw_pending(id))
    }

    pub fn cancel(mut self) {
        if let Some(id) = self.id.take() {
            self.runtime.cancel_pre_draw(id);
        }
    }
}

impl Drop for PreDrawRegistration {
    fn drop(&mut self) {
        if let Some(id) = self.id.take() {
            self.runtime.cancel_pre_draw(id);
        }
    }
}

impl std::fmt::Debug for PreDrawRegistration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PreDrawRegistration")
            .field("id", &self.id)
            .field("active", &self.is_active())
            .finish()
    }
}
