//! Type-level axis categories.
//!
//! The marker types are never instantiated. They only tag an
//! [`AxisChain`](super::AxisChain) with the orientation of its current
//! anchor so that pairing a horizontal anchor with a vertical one is a type
//! error instead of a runtime failure.

use super::kind::Orientation;

mod sealed {
    pub trait Sealed {}
}

/// Orientation carried at the type level.
pub trait AxisCategory: sealed::Sealed + 'static {
    const ORIENTATION: Orientation;
}

/// Marker for x-axis anchors (leading, trailing, left, right, centerX).
#[derive(Debug)]
pub enum Horizontal {}

/// Marker for y-axis anchors (top, bottom, centerY, baselines).
#[derive(Debug)]
pub enum Vertical {}

impl sealed::Sealed for Horizontal {}
impl sealed::Sealed for Vertical {}

impl AxisCategory for Horizontal {
    const ORIENTATION: Orientation = Orientation::Horizontal;
}

impl AxisCategory for Vertical {
    const ORIENTATION: Orientation = Orientation::Vertical;
}
