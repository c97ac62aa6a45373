//! Turns a [`LayoutDocument`] into a [`LayoutPlan`].
//!
//! Every rule is validated before the first constraint is created, so a
//! document with a single bad rule produces no constraints at all.

use crate::anchor::{AnchorKind, AnyChain};
use crate::document::{LayoutDocument, LayoutRule, RuleTarget};
use crate::error::{LayoutError, Result};
use crate::memory::{Frame, LinearConstraint, Scene};
use crate::plan::LayoutPlan;

#[derive(Debug, Clone)]
enum Target {
    View(Frame),
    Anchor(Frame, AnchorKind),
}

/// A rule whose names have all been looked up.
#[derive(Debug, Clone)]
struct CheckedRule<'a> {
    rule: &'a LayoutRule,
    view: Frame,
    kinds: Vec<AnchorKind>,
    target: Target,
}

/// Counts reported after resolving a document.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct ResolutionStats {
    pub view_count: usize,
    pub rule_count: usize,
    pub set_count: usize,
    pub constraint_count: usize,
    pub active_count: usize,
}

pub struct Resolver {
    scene: Scene,
}

impl Resolver {
    /// Registers every view the document declares.
    pub fn new(document: &LayoutDocument) -> Self {
        let mut scene = Scene::new();
        for name in &document.views {
            scene.add_view(name);
        }
        Self { scene }
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Checks every rule without creating constraints.
    pub fn validate(&self, document: &LayoutDocument) -> Result<()> {
        self.check_all(document).map(|_| ())
    }

    pub fn resolve(&self, document: &LayoutDocument) -> Result<LayoutPlan<LinearConstraint>> {
        let checked = self.check_all(document)?;
        let mut plan = LayoutPlan::new();

        for (index, rule) in checked.iter().enumerate() {
            let number = index + 1;
            let Some(chain) = AnyChain::from_kinds(&rule.view, &rule.kinds)? else {
                return Err(LayoutError::invalid_rule(number, "no anchors selected"));
            };
            match &rule.target {
                Target::View(target) => {
                    let constraints = chain.equal_to(target, rule.rule.active, rule.rule.constant);
                    log::debug!(
                        "Rule {}: {} constraints into set '{}'",
                        number,
                        constraints.len(),
                        rule.rule.set
                    );
                    plan.push(&rule.rule.set, constraints);
                }
                Target::Anchor(target, kind) => {
                    let other = AnyChain::select(target, *kind);
                    let constraint =
                        chain.equal_to_anchor(&other, rule.rule.active, rule.rule.constant)?;
                    log::debug!("Rule {}: 1 constraint into set '{}'", number, rule.rule.set);
                    plan.push(&rule.rule.set, [constraint]);
                }
            }
        }

        Ok(plan)
    }

    pub fn stats(&self, document: &LayoutDocument, plan: &LayoutPlan<LinearConstraint>) -> ResolutionStats {
        ResolutionStats {
            view_count: self.scene.len(),
            rule_count: document.rules.len(),
            set_count: plan.iter().count(),
            constraint_count: plan.constraint_count(),
            active_count: plan.active_count(),
        }
    }

    fn check_all<'a>(&self, document: &'a LayoutDocument) -> Result<Vec<CheckedRule<'a>>> {
        document
            .rules
            .iter()
            .enumerate()
            .map(|(index, rule)| self.check(index + 1, rule))
            .collect()
    }

    fn check<'a>(&self, number: usize, rule: &'a LayoutRule) -> Result<CheckedRule<'a>> {
        let view = self.frame(number, &rule.view)?;

        if rule.anchors.is_empty() {
            return Err(LayoutError::invalid_rule(number, "no anchors selected"));
        }
        if !rule.constant.is_finite() {
            return Err(LayoutError::invalid_rule(
                number,
                format!("constant must be finite, got {}", rule.constant),
            ));
        }
        let kinds = rule
            .anchors
            .iter()
            .map(|name| parse_kind(number, name))
            .collect::<Result<Vec<_>>>()?;

        let first = kinds[0];
        if let Some(stray) = kinds.iter().find(|k| is_size(**k) != is_size(first)) {
            return Err(mismatch(first, *stray));
        }

        let target = match rule.target() {
            RuleTarget::View(name) => Target::View(self.frame(number, name)?),
            RuleTarget::Anchor { view, anchor } => {
                let frame = self.frame(number, view)?;
                let kind = parse_kind(number, anchor)?;
                if kinds.len() != 1 {
                    return Err(LayoutError::invalid_rule(
                        number,
                        format!(
                            "an anchor target pairs exactly one anchor, got {}",
                            kinds.len()
                        ),
                    ));
                }
                if kinds[0].category() != kind.category() {
                    return Err(mismatch(kinds[0], kind));
                }
                Target::Anchor(frame, kind)
            }
        };

        Ok(CheckedRule {
            rule,
            view,
            kinds,
            target,
        })
    }

    fn frame(&self, number: usize, name: &str) -> Result<Frame> {
        self.scene
            .view(name)
            .cloned()
            .ok_or_else(|| LayoutError::unknown_view(number, name))
    }
}

fn parse_kind(number: usize, name: &str) -> Result<AnchorKind> {
    AnchorKind::from_name(name).ok_or_else(|| LayoutError::unknown_anchor(number, name))
}

fn is_size(kind: AnchorKind) -> bool {
    matches!(kind, AnchorKind::Dimension(_))
}

fn mismatch(first: AnchorKind, second: AnchorKind) -> LayoutError {
    LayoutError::CategoryMismatch {
        first: first.category(),
        first_name: first.name().to_string(),
        second: second.category(),
        second_name: second.name().to_string(),
    }
}

/// Loads, validates and resolves a layout file.
pub fn resolve_file(path: impl AsRef<std::path::Path>) -> Result<(LayoutPlan<LinearConstraint>, ResolutionStats)> {
    let document = LayoutDocument::load(path)?;
    let resolver = Resolver::new(&document);
    let plan = resolver.resolve(&document)?;
    let stats = resolver.stats(&document, &plan);
    Ok((plan, stats))
}
