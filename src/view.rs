//! View and constraint capabilities consumed and produced by anchor chains.
//!
//! A layout backend implements [`View`] for its view handle type. Everything
//! else in the crate is written against these traits, so the same chains work
//! for the in-memory [`Scene`](crate::memory::Scene) and for any native
//! toolkit binding.
//!
//! Live constraints are usually owned by a UI thread in the host toolkit.
//! Nothing here enforces thread affinity; integrators resolve and activate
//! chains on whichever thread owns their view hierarchy.

use crate::anchor::{AxisChain, AxisKind, DimensionChain, DimensionKind, Horizontal, Vertical};

/// A view exposing positional and size anchors.
///
/// Implementors are expected to be cheap handles (an id, an `Rc`, a
/// reference) since every chain step keeps a clone of the view it was
/// selected on.
pub trait View: Clone {
    /// Native anchor handle.
    type Anchor: Clone + std::fmt::Debug;

    /// Native constraint produced by pairing two anchors.
    type Constraint: Constraint;

    fn axis_anchor(&self, kind: AxisKind) -> Self::Anchor;

    fn dimension_anchor(&self, kind: DimensionKind) -> Self::Anchor;

    /// Creates an inactive `first == second + constant` constraint. Both
    /// handles are guaranteed to share a category when called from a chain.
    fn constrain(first: &Self::Anchor, second: &Self::Anchor, constant: f64) -> Self::Constraint;
}

/// Activation flag and constant of a produced constraint.
pub trait Constraint {
    fn is_active(&self) -> bool;

    fn set_active(&mut self, active: bool);

    fn constant(&self) -> f64;

    fn set_constant(&mut self, constant: f64);

    /// Replaces the constant and hands the constraint back for chaining.
    fn offset(mut self, value: f64) -> Self
    where
        Self: Sized,
    {
        self.set_constant(value);
        self
    }
}

/// Anchor selectors available on every view.
pub trait AnchorSelect: View {
    fn leading(&self) -> AxisChain<Self, Horizontal> {
        AxisChain::select(self, AxisKind::Leading)
    }

    fn trailing(&self) -> AxisChain<Self, Horizontal> {
        AxisChain::select(self, AxisKind::Trailing)
    }

    fn left(&self) -> AxisChain<Self, Horizontal> {
        AxisChain::select(self, AxisKind::Left)
    }

    fn right(&self) -> AxisChain<Self, Horizontal> {
        AxisChain::select(self, AxisKind::Right)
    }

    fn top(&self) -> AxisChain<Self, Vertical> {
        AxisChain::select(self, AxisKind::Top)
    }

    fn bottom(&self) -> AxisChain<Self, Vertical> {
        AxisChain::select(self, AxisKind::Bottom)
    }

    fn center_x(&self) -> AxisChain<Self, Horizontal> {
        AxisChain::select(self, AxisKind::CenterX)
    }

    fn center_y(&self) -> AxisChain<Self, Vertical> {
        AxisChain::select(self, AxisKind::CenterY)
    }

    fn first_baseline(&self) -> AxisChain<Self, Vertical> {
        AxisChain::select(self, AxisKind::FirstBaseline)
    }

    fn last_baseline(&self) -> AxisChain<Self, Vertical> {
        AxisChain::select(self, AxisKind::LastBaseline)
    }

    fn width(&self) -> DimensionChain<Self> {
        DimensionChain::select(self, DimensionKind::Width)
    }

    fn height(&self) -> DimensionChain<Self> {
        DimensionChain::select(self, DimensionKind::Height)
    }
}

impl<V: View> AnchorSelect for V {}

/// Mass activation over any sequence of constraints.
pub trait ConstraintList {
    fn set_active(&mut self, active: bool);

    fn activate(&mut self) {
        self.set_active(true);
    }

    fn deactivate(&mut self) {
        self.set_active(false);
    }

    fn active_count(&self) -> usize;
}

impl<C: Constraint> ConstraintList for [C] {
    fn set_active(&mut self, active: bool) {
        for constraint in self.iter_mut() {
            constraint.set_active(active);
        }
    }

    fn active_count(&self) -> usize {
        self.iter().filter(|c| c.is_active()).count()
    }
}
