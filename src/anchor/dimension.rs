// FILE: src/anchor/dimension.rs

use super::kind::DimensionKind;
use super::step::Step;
use crate::view::{Constraint, View};
use im::Vector;
use std::fmt;
use std::iter;

pub type DimensionStep<V> = Step<V, DimensionKind>;

/// An ordered, immutable run of width/height selections. Kept apart from
/// [`AxisChain`](super::AxisChain) so size anchors never meet positional ones.
///
/// ```compile_fail
/// use anchor_chain::{AnchorSelect, Scene};
///
/// let mut scene = Scene::new();
/// let a = scene.add_view("a");
/// let b = scene.add_view("b");
/// a.width().align(&b.leading());
/// ```
///
/// ```compile_fail
/// use anchor_chain::{AnchorSelect, Scene};
///
/// let mut scene = Scene::new();
/// let a = scene.add_view("a");
/// let b = scene.add_view("b");
/// a.height().equal_to_anchor(&b.top(), true, 4.0);
/// ```
pub struct DimensionChain<V: View> {
    current: DimensionStep<V>,
    prior: Vector<DimensionStep<V>>,
}

impl<V: View> DimensionChain<V> {
    pub(crate) fn select(view: &V, kind: DimensionKind) -> Self {
        Self {
            current: Step::new(view, kind, view.dimension_anchor(kind)),
            prior: Vector::new(),
        }
    }

    pub(crate) fn extend(&self, kind: DimensionKind) -> Self {
        let mut next = Self::select(self.view(), kind);
        next.prior = self.prior.clone();
        next.prior.push_back(self.current.clone());
        next
    }

    pub fn width(&self) -> Self {
        self.extend(DimensionKind::Width)
    }

    pub fn height(&self) -> Self {
        self.extend(DimensionKind::Height)
    }

    pub fn then(&self, next: &DimensionChain<V>) -> Self {
        let mut prior = self.prior.clone();
        prior.push_back(self.current.clone());
        prior.append(next.prior.clone());
        Self {
            current: next.current.clone(),
            prior,
        }
    }

    pub fn kind(&self) -> DimensionKind {
        self.current.kind()
    }

    pub fn view(&self) -> &V {
        self.current.view()
    }

    pub fn anchor(&self) -> &V::Anchor {
        self.current.anchor()
    }

    pub fn steps(&self) -> impl DoubleEndedIterator<Item = &DimensionStep<V>> + '_ {
        self.prior.iter().chain(iter::once(&self.current))
    }

    pub fn kinds(&self) -> Vec<DimensionKind> {
        self.steps().map(Step::kind).collect()
    }

    /// Number of selected steps. A chain always holds at least one.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.prior.len() + 1
    }

    /// Matches every step against the same dimension of `target`, last
    /// selected first. Sizes have no far edge, so `inset` is never negated.
    pub fn equal_to(&self, target: &V, active: bool, inset: f64) -> Vec<V::Constraint> {
        log::debug!("Resolving {} dimension anchors against target view", self.len());
        self.steps()
            .rev()
            .map(|step| {
                let target_anchor = target.dimension_anchor(step.kind());
                log::trace!("{:?} == {:?} + {}", step.anchor(), target_anchor, inset);
                let mut constraint = V::constrain(step.anchor(), &target_anchor, inset);
                constraint.set_active(active);
                constraint
            })
            .collect()
    }

    pub fn pin(&self, target: &V) -> Vec<V::Constraint> {
        self.equal_to(target, true, 0.0)
    }

    pub fn equal_to_anchor(&self, other: &DimensionChain<V>, active: bool, offset: f64) -> V::Constraint {
        log::trace!("{:?} == {:?} + {}", self.anchor(), other.anchor(), offset);
        let mut constraint = V::constrain(self.anchor(), other.anchor(), offset);
        constraint.set_active(active);
        constraint
    }

    pub fn align(&self, other: &DimensionChain<V>) -> V::Constraint {
        self.equal_to_anchor(other, true, 0.0)
    }
}

impl<V: View> Clone for DimensionChain<V> {
    fn clone(&self) -> Self {
        Self {
            current: self.current.clone(),
            prior: self.prior.clone(),
        }
    }
}

impl<V: View> fmt::Debug for DimensionChain<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DimensionChain")
            .field("kinds", &self.kinds())
            .finish()
    }
}
