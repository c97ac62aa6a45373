// FILE: src/anchor/axis.rs

use super::category::{AxisCategory, Horizontal, Vertical};
use super::kind::AxisKind;
use super::step::Step;
use crate::view::{Constraint, View};
use im::Vector;
use std::fmt;
use std::iter;
use std::marker::PhantomData;

pub type AxisStep<V> = Step<V, AxisKind>;

/// An ordered, immutable run of axis selections.
///
/// `C` is the category of the most recently selected anchor. Earlier steps
/// may be of either orientation: they are only ever paired with the same
/// kind on a target view, so their category always matches.
///
/// Pairing anchors of different orientation does not compile:
///
/// ```compile_fail
/// use anchor_chain::{AnchorSelect, Scene};
///
/// let mut scene = Scene::new();
/// let a = scene.add_view("a");
/// let b = scene.add_view("b");
/// a.leading().align(&b.top());
/// ```
///
/// ```compile_fail
/// use anchor_chain::{AnchorSelect, Scene};
///
/// let mut scene = Scene::new();
/// let a = scene.add_view("a");
/// let b = scene.add_view("b");
/// a.bottom().align(&b.trailing());
/// ```
///
/// Neither does pairing an axis with a size anchor:
///
/// ```compile_fail
/// use anchor_chain::{AnchorSelect, Scene};
///
/// let mut scene = Scene::new();
/// let a = scene.add_view("a");
/// let b = scene.add_view("b");
/// a.top().align(&b.height());
/// ```
pub struct AxisChain<V: View, C: AxisCategory> {
    current: AxisStep<V>,
    prior: Vector<AxisStep<V>>,
    _category: PhantomData<fn() -> C>,
}

impl<V: View, C: AxisCategory> AxisChain<V, C> {
    pub(crate) fn select(view: &V, kind: AxisKind) -> Self {
        debug_assert_eq!(kind.orientation(), C::ORIENTATION);
        Self {
            current: Step::new(view, kind, view.axis_anchor(kind)),
            prior: Vector::new(),
            _category: PhantomData,
        }
    }

    /// Selects `kind` on the view of the current step, keeping this chain's
    /// history plus the current step as the new chain's prior steps.
    pub(crate) fn extend<D: AxisCategory>(&self, kind: AxisKind) -> AxisChain<V, D> {
        let mut next = AxisChain::<V, D>::select(self.view(), kind);
        next.prior = self.prior.clone();
        next.prior.push_back(self.current.clone());
        next
    }

    pub fn leading(&self) -> AxisChain<V, Horizontal> {
        self.extend(AxisKind::Leading)
    }

    pub fn trailing(&self) -> AxisChain<V, Horizontal> {
        self.extend(AxisKind::Trailing)
    }

    pub fn left(&self) -> AxisChain<V, Horizontal> {
        self.extend(AxisKind::Left)
    }

    pub fn right(&self) -> AxisChain<V, Horizontal> {
        self.extend(AxisKind::Right)
    }

    pub fn top(&self) -> AxisChain<V, Vertical> {
        self.extend(AxisKind::Top)
    }

    pub fn bottom(&self) -> AxisChain<V, Vertical> {
        self.extend(AxisKind::Bottom)
    }

    pub fn center_x(&self) -> AxisChain<V, Horizontal> {
        self.extend(AxisKind::CenterX)
    }

    pub fn center_y(&self) -> AxisChain<V, Vertical> {
        self.extend(AxisKind::CenterY)
    }

    pub fn first_baseline(&self) -> AxisChain<V, Vertical> {
        self.extend(AxisKind::FirstBaseline)
    }

    pub fn last_baseline(&self) -> AxisChain<V, Vertical> {
        self.extend(AxisKind::LastBaseline)
    }

    /// Continues with a chain started on another view. The result resolves
    /// this chain's steps followed by all of `next`'s steps.
    pub fn then<D: AxisCategory>(&self, next: &AxisChain<V, D>) -> AxisChain<V, D> {
        let mut prior = self.prior.clone();
        prior.push_back(self.current.clone());
        prior.append(next.prior.clone());
        AxisChain {
            current: next.current.clone(),
            prior,
            _category: PhantomData,
        }
    }

    pub fn kind(&self) -> AxisKind {
        self.current.kind()
    }

    pub fn view(&self) -> &V {
        self.current.view()
    }

    pub fn anchor(&self) -> &V::Anchor {
        self.current.anchor()
    }

    /// Every step in selection order, the current one last.
    pub fn steps(&self) -> impl DoubleEndedIterator<Item = &AxisStep<V>> + '_ {
        self.prior.iter().chain(iter::once(&self.current))
    }

    pub fn kinds(&self) -> Vec<AxisKind> {
        self.steps().map(Step::kind).collect()
    }

    /// Number of selected steps. A chain always holds at least one.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.prior.len() + 1
    }

    /// Pairs every step with the same kind of anchor on `target`, last
    /// selected first. Far-edge kinds receive `-inset`.
    pub fn equal_to(&self, target: &V, active: bool, inset: f64) -> Vec<V::Constraint> {
        log::debug!("Resolving {} axis anchors against target view", self.len());
        self.steps()
            .rev()
            .map(|step| {
                let kind = step.kind();
                let constant = if kind.is_far_edge() { -inset } else { inset };
                let target_anchor = target.axis_anchor(kind);
                log::trace!("{:?} == {:?} + {}", step.anchor(), target_anchor, constant);
                let mut constraint = V::constrain(step.anchor(), &target_anchor, constant);
                constraint.set_active(active);
                constraint
            })
            .collect()
    }

    /// `equal_to(target, true, 0.0)`
    pub fn pin(&self, target: &V) -> Vec<V::Constraint> {
        self.equal_to(target, true, 0.0)
    }

    /// Pairs the current step with the current step of `other`. Earlier
    /// steps of either chain are ignored.
    pub fn equal_to_anchor(&self, other: &AxisChain<V, C>, active: bool, offset: f64) -> V::Constraint {
        log::trace!("{:?} == {:?} + {}", self.anchor(), other.anchor(), offset);
        let mut constraint = V::constrain(self.anchor(), other.anchor(), offset);
        constraint.set_active(active);
        constraint
    }

    /// `equal_to_anchor(other, true, 0.0)`
    pub fn align(&self, other: &AxisChain<V, C>) -> V::Constraint {
        self.equal_to_anchor(other, true, 0.0)
    }
}

impl<V: View, C: AxisCategory> Clone for AxisChain<V, C> {
    fn clone(&self) -> Self {
        Self {
            current: self.current.clone(),
            prior: self.prior.clone(),
            _category: PhantomData,
        }
    }
}

impl<V: View, C: AxisCategory> fmt::Debug for AxisChain<V, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AxisChain")
            .field("orientation", &C::ORIENTATION)
            .field("kinds", &self.kinds())
            .finish()
    }
}
