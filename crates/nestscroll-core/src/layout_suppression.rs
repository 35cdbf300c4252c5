use crate::runtime::RuntimeHandle;

/// Scoped guard that swallows layout requests while alive.
///
/// Obtained from [`RuntimeHandle::suppress_layout_requests`]. Guards nest and
/// release on drop, including early returns and unwinding.
#[must_use = "layout requests are only suppressed while the guard is alive"]
pub struct LayoutSuppression {
    runtime: RuntimeHandle,
}

impl LayoutSuppression {
    pub(crate) fn new(runtime: RuntimeHandle) -> Self {
        Self { runtime }
    }
}

impl Drop for LayoutSuppression {
    fn drop(&mut self) {
        self.runtime.release_suppression();
    }
}
