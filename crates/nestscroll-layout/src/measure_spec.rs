//! One-axis layout constraints.
//!
//! A [`MeasureSpec`] is what a host hands to a child for a single axis: a size
//! and how strictly that size applies. Specs are values; the measurement loop
//! builds fresh ones per pass and never keeps them around.

use crate::EdgeInsets;

/// How strictly a [`MeasureSpec`] size applies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MeasureMode {
    /// The child must be exactly `size`.
    Exactly,
    /// The child may be any size up to `size`.
    AtMost,
    /// The host imposes no limit; `size` is only a hint (usually 0).
    Unspecified,
}

/// Size constraint for one axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MeasureSpec {
    pub size: i32,
    pub mode: MeasureMode,
}

impl MeasureSpec {
    /// Creates a spec, clamping negative sizes to zero.
    pub fn new(size: i32, mode: MeasureMode) -> Self {
        Self {
            size: size.max(0),
            mode,
        }
    }

    /// Creates a spec that forces exactly `size`.
    pub fn exactly(size: i32) -> Self {
        Self::new(size, MeasureMode::Exactly)
    }

    /// Creates a spec that allows anything up to `size`.
    pub fn at_most(size: i32) -> Self {
        Self::new(size, MeasureMode::AtMost)
    }

    /// Creates an unconstrained spec.
    pub fn unspecified() -> Self {
        Self::new(0, MeasureMode::Unspecified)
    }

    #[inline]
    pub fn is_exact(&self) -> bool {
        self.mode == MeasureMode::Exactly
    }

    /// Returns true if the spec carries a usable size.
    ///
    /// A zero size is what an unmeasured scrolling host passes down, whatever
    /// the mode, so it never counts as concrete.
    #[inline]
    pub fn has_concrete_size(&self) -> bool {
        self.size > 0
    }

    /// Picks the final size for a child that would like to be `desired`.
    pub fn resolve(&self, desired: i32) -> i32 {
        let desired = desired.max(0);
        match self.mode {
            MeasureMode::Exactly => self.size,
            MeasureMode::AtMost => desired.min(self.size),
            MeasureMode::Unspecified => desired,
        }
    }

    /// Vertical content extent left after removing `padding`, or `None` when
    /// the spec is unbounded.
    pub fn available(&self, padding: EdgeInsets) -> Option<i32> {
        match self.mode {
            MeasureMode::Unspecified => None,
            MeasureMode::Exactly | MeasureMode::AtMost => {
                Some((self.size - padding.vertical()).max(0))
            }
        }
    }
}

impl Default for MeasureSpec {
    fn default() -> Self {
        Self::unspecified()
    }
}
