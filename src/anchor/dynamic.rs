//! Runtime-selected chains.
//!
//! Layout documents name their anchors as strings, so the category of a chain
//! is only known after parsing. These wrappers carry the typed chains and
//! report category mismatches as errors instead of building a constraint.

use super::axis::AxisChain;
use super::category::{AxisCategory, Horizontal, Vertical};
use super::dimension::DimensionChain;
use super::kind::{AnchorKind, AxisKind, Category, Orientation};
use crate::error::{LayoutError, Result};
use crate::view::View;

#[derive(Debug)]
pub enum AnyAxisChain<V: View> {
    Horizontal(AxisChain<V, Horizontal>),
    Vertical(AxisChain<V, Vertical>),
}

impl<V: View> AnyAxisChain<V> {
    pub fn select(view: &V, kind: AxisKind) -> Self {
        match kind.orientation() {
            Orientation::Horizontal => Self::Horizontal(AxisChain::select(view, kind)),
            Orientation::Vertical => Self::Vertical(AxisChain::select(view, kind)),
        }
    }

    pub fn extend(&self, kind: AxisKind) -> Self {
        match self {
            Self::Horizontal(chain) => Self::wrap(chain, kind),
            Self::Vertical(chain) => Self::wrap(chain, kind),
        }
    }

    fn wrap<C: AxisCategory>(chain: &AxisChain<V, C>, kind: AxisKind) -> Self {
        match kind.orientation() {
            Orientation::Horizontal => Self::Horizontal(chain.extend(kind)),
            Orientation::Vertical => Self::Vertical(chain.extend(kind)),
        }
    }

    pub fn kind(&self) -> AxisKind {
        match self {
            Self::Horizontal(chain) => chain.kind(),
            Self::Vertical(chain) => chain.kind(),
        }
    }

    /// Number of selected steps. A chain always holds at least one.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        match self {
            Self::Horizontal(chain) => chain.len(),
            Self::Vertical(chain) => chain.len(),
        }
    }

    pub fn equal_to(&self, target: &V, active: bool, inset: f64) -> Vec<V::Constraint> {
        match self {
            Self::Horizontal(chain) => chain.equal_to(target, active, inset),
            Self::Vertical(chain) => chain.equal_to(target, active, inset),
        }
    }

    pub fn equal_to_anchor(&self, other: &AnyAxisChain<V>, active: bool, offset: f64) -> Result<V::Constraint> {
        match (self, other) {
            (Self::Horizontal(first), Self::Horizontal(second)) => {
                Ok(first.equal_to_anchor(second, active, offset))
            }
            (Self::Vertical(first), Self::Vertical(second)) => {
                Ok(first.equal_to_anchor(second, active, offset))
            }
            _ => Err(mismatch(self.kind().into(), other.kind().into())),
        }
    }
}

/// Either an axis chain or a dimension chain.
#[derive(Debug)]
pub enum AnyChain<V: View> {
    Axis(AnyAxisChain<V>),
    Dimension(DimensionChain<V>),
}

impl<V: View> AnyChain<V> {
    pub fn select(view: &V, kind: AnchorKind) -> Self {
        match kind {
            AnchorKind::Axis(kind) => Self::Axis(AnyAxisChain::select(view, kind)),
            AnchorKind::Dimension(kind) => Self::Dimension(DimensionChain::select(view, kind)),
        }
    }

    /// Selects `kind` on the current view. Fails when switching between axis
    /// and dimension anchors inside one chain.
    pub fn extend(&self, kind: AnchorKind) -> Result<Self> {
        match (self, kind) {
            (Self::Axis(chain), AnchorKind::Axis(kind)) => Ok(Self::Axis(chain.extend(kind))),
            (Self::Dimension(chain), AnchorKind::Dimension(kind)) => {
                Ok(Self::Dimension(chain.extend(kind)))
            }
            _ => Err(mismatch(self.kind(), kind)),
        }
    }

    /// Builds a chain from anchor kinds in selection order.
    pub fn from_kinds(view: &V, kinds: &[AnchorKind]) -> Result<Option<Self>> {
        let Some((first, rest)) = kinds.split_first() else {
            return Ok(None);
        };
        let mut chain = Self::select(view, *first);
        for kind in rest {
            chain = chain.extend(*kind)?;
        }
        Ok(Some(chain))
    }

    pub fn kind(&self) -> AnchorKind {
        match self {
            Self::Axis(chain) => chain.kind().into(),
            Self::Dimension(chain) => chain.kind().into(),
        }
    }

    pub fn category(&self) -> Category {
        self.kind().category()
    }

    /// Number of selected steps. A chain always holds at least one.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        match self {
            Self::Axis(chain) => chain.len(),
            Self::Dimension(chain) => chain.len(),
        }
    }

    pub fn equal_to(&self, target: &V, active: bool, inset: f64) -> Vec<V::Constraint> {
        match self {
            Self::Axis(chain) => chain.equal_to(target, active, inset),
            Self::Dimension(chain) => chain.equal_to(target, active, inset),
        }
    }

    pub fn equal_to_anchor(&self, other: &AnyChain<V>, active: bool, offset: f64) -> Result<V::Constraint> {
        match (self, other) {
            (Self::Axis(first), Self::Axis(second)) => first.equal_to_anchor(second, active, offset),
            (Self::Dimension(first), Self::Dimension(second)) => {
                Ok(first.equal_to_anchor(second, active, offset))
            }
            _ => Err(mismatch(self.kind(), other.kind())),
        }
    }
}

fn mismatch(first: AnchorKind, second: AnchorKind) -> LayoutError {
    LayoutError::CategoryMismatch {
        first: first.category(),
        first_name: first.name().to_string(),
        second: second.category(),
        second_name: second.name().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::Scene;
    use crate::view::Constraint;

    fn kinds(names: &[&str]) -> Vec<AnchorKind> {
        names.iter().filter_map(|n| AnchorKind::from_name(n)).collect()
    }

    #[test]
    fn test_runtime_chain_matches_typed_chain() {
        let mut scene = Scene::new();
        let root = scene.add_view("root");
        let label = scene.add_view("label");

        let chain = AnyChain::from_kinds(&label, &kinds(&["top", "centerX"]))
            .unwrap()
            .unwrap();
        assert_eq!(chain.len(), 2);
        assert_eq!(chain.category(), Category::Horizontal);

        let constraints = chain.equal_to(&root, true, 20.0);
        assert_eq!(constraints[0].first().kind, AnchorKind::Axis(AxisKind::CenterX));
        assert_eq!(constraints[1].first().kind, AnchorKind::Axis(AxisKind::Top));
        assert!(constraints.iter().all(|c| c.constant() == 20.0));
    }

    #[test]
    fn test_empty_kinds_yield_no_chain() {
        let mut scene = Scene::new();
        let label = scene.add_view("label");
        assert!(AnyChain::from_kinds(&label, &[]).unwrap().is_none());
    }

    #[test]
    fn test_mixing_axis_and_dimension_fails() {
        let mut scene = Scene::new();
        let label = scene.add_view("label");

        let result = AnyChain::from_kinds(&label, &kinds(&["top", "width"]));
        assert!(matches!(
            result,
            Err(LayoutError::CategoryMismatch {
                first: Category::Vertical,
                second: Category::Size,
                ..
            })
        ));
    }

    #[test]
    fn test_every_mismatched_pair_is_rejected() {
        let mut scene = Scene::new();
        let a = scene.add_view("a");
        let b = scene.add_view("b");

        for first in AnchorKind::all() {
            for second in AnchorKind::all() {
                let lhs = AnyChain::select(&a, first);
                let rhs = AnyChain::select(&b, second);
                let result = lhs.equal_to_anchor(&rhs, true, 0.0);
                if first.category() == second.category() {
                    let constraint = result.unwrap();
                    assert!(constraint.is_active());
                } else {
                    assert!(matches!(result, Err(LayoutError::CategoryMismatch { .. })));
                }
            }
        }
    }
}
