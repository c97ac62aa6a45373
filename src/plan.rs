//! Named constraint sets
//!
//! Alternative layouts (portrait/landscape, compact/regular, ...) are kept
//! as separate sets and swapped by mass (de)activation.

use crate::error::{LayoutError, Result};
use crate::view::{Constraint, ConstraintList};
use serde::Serialize;

pub const DEFAULT_SET: &str = "default";

#[derive(Debug, Clone, Serialize)]
pub struct ConstraintSet<C> {
    pub name: String,
    pub constraints: Vec<C>,
}

/// Constraint sets in declaration order.
#[derive(Debug, Clone, Serialize)]
pub struct LayoutPlan<C> {
    sets: Vec<ConstraintSet<C>>,
}

impl<C> Default for LayoutPlan<C> {
    fn default() -> Self {
        Self { sets: Vec::new() }
    }
}

impl<C: Constraint> LayoutPlan<C> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends constraints to the named set, creating it on first use.
    pub fn push(&mut self, set: &str, constraints: impl IntoIterator<Item = C>) {
        match self.sets.iter_mut().find(|s| s.name == set) {
            Some(existing) => existing.constraints.extend(constraints),
            None => self.sets.push(ConstraintSet {
                name: set.to_string(),
                constraints: constraints.into_iter().collect(),
            }),
        }
    }

    pub fn set(&self, name: &str) -> Option<&[C]> {
        self.sets
            .iter()
            .find(|s| s.name == name)
            .map(|s| s.constraints.as_slice())
    }

    pub fn set_mut(&mut self, name: &str) -> Option<&mut [C]> {
        self.sets
            .iter_mut()
            .find(|s| s.name == name)
            .map(|s| s.constraints.as_mut_slice())
    }

    pub fn activate(&mut self, name: &str) -> Result<()> {
        self.require_mut(name)?.activate();
        Ok(())
    }

    pub fn deactivate(&mut self, name: &str) -> Result<()> {
        self.require_mut(name)?.deactivate();
        Ok(())
    }

    /// Deactivates every other set, then activates `name`.
    pub fn activate_only(&mut self, name: &str) -> Result<()> {
        if self.set(name).is_none() {
            return Err(LayoutError::UnknownSet {
                name: name.to_string(),
            });
        }
        log::debug!("Activating constraint set '{}' exclusively", name);
        for set in self.sets.iter_mut().filter(|s| s.name != name) {
            set.constraints.deactivate();
        }
        self.activate(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.sets.iter().map(|s| s.name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &ConstraintSet<C>> {
        self.sets.iter()
    }

    pub fn constraint_count(&self) -> usize {
        self.sets.iter().map(|s| s.constraints.len()).sum()
    }

    pub fn active_count(&self) -> usize {
        self.sets.iter().map(|s| s.constraints.active_count()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    fn require_mut(&mut self, name: &str) -> Result<&mut [C]> {
        self.set_mut(name).ok_or_else(|| LayoutError::UnknownSet {
            name: name.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::{LinearConstraint, Scene};
    use crate::view::AnchorSelect;

    fn orientation_plan() -> LayoutPlan<LinearConstraint> {
        let mut scene = Scene::new();
        let root = scene.add_view("root");
        let title = scene.add_view("title");
        let emoji = scene.add_view("emoji");

        let mut plan = LayoutPlan::new();
        plan.push("portrait", [emoji.top().equal_to_anchor(&title.bottom(), true, 20.0)]);
        plan.push("portrait", title.center_x().center_y().pin(&root));
        plan.push("landscape", emoji.bottom().equal_to(&root, false, 0.0));
        plan.push("landscape", title.top().center_x().equal_to(&root, false, 0.0));
        plan
    }

    #[test]
    fn test_push_appends_to_existing_set() {
        let plan = orientation_plan();
        assert_eq!(plan.names().collect::<Vec<_>>(), vec!["portrait", "landscape"]);
        assert_eq!(plan.set("portrait").unwrap().len(), 3);
        assert_eq!(plan.set("landscape").unwrap().len(), 3);
        assert_eq!(plan.constraint_count(), 6);
        assert_eq!(plan.active_count(), 3);
    }

    #[test]
    fn test_activate_only_swaps_sets() {
        let mut plan = orientation_plan();

        plan.activate_only("landscape").unwrap();
        assert_eq!(plan.set("portrait").unwrap().active_count(), 0);
        assert_eq!(plan.set("landscape").unwrap().active_count(), 3);

        plan.activate_only("portrait").unwrap();
        assert_eq!(plan.set("portrait").unwrap().active_count(), 3);
        assert_eq!(plan.set("landscape").unwrap().active_count(), 0);
    }

    #[test]
    fn test_unknown_set() {
        let mut plan = orientation_plan();
        let err = plan.activate_only("compact").unwrap_err();
        assert!(matches!(err, LayoutError::UnknownSet { ref name } if name == "compact"));
        // nothing was deactivated
        assert_eq!(plan.active_count(), 3);
        assert!(plan.deactivate("compact").is_err());
    }
}
