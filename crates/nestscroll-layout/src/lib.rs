//! Measurement contracts for nestscroll

mod geometry;
mod measure_spec;

pub use geometry::*;
pub use measure_spec::*;

#[cfg(test)]
mod tests;

pub mod prelude {
    pub use crate::geometry::{EdgeInsets, Rect, Size};
    pub use crate::measure_spec::{MeasureMode, MeasureSpec};
}
