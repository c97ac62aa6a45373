// FILE: src/anchor/mod.rs

mod axis;
mod category;
mod dimension;
mod dynamic;
mod kind;
mod step;

pub use axis::{AxisChain, AxisStep};
pub use category::{AxisCategory, Horizontal, Vertical};
pub use dimension::{DimensionChain, DimensionStep};
pub use dynamic::{AnyAxisChain, AnyChain};
pub use kind::{AnchorKind, AxisKind, Category, DimensionKind, Orientation};
pub use step::Step;
