//! Fluent anchor chains
//!
//! Select anchors on a view one after another and resolve the whole chain
//! into layout constraints with a single call.
//!
//! # Features
//!
//! - Chains are immutable values: every selector returns a new chain that
//!   shares its history with the previous one
//! - Anchor categories live in the type system, so a horizontal anchor can
//!   never be paired with a vertical or a size anchor
//! - Any toolkit can plug in by implementing [`View`] and [`Constraint`]
//! - Named constraint sets for swapping between alternative layouts
//! - Declarative layout documents (TOML/JSON) resolved through a
//!   runtime-checked layer that rejects bad rules before creating anything
//!
//! # Basic Usage
//!
//! ```rust
//! use anchor_chain::{AnchorSelect, Constraint, ConstraintList, Scene};
//!
//! let mut scene = Scene::new();
//! let root = scene.add_view("root");
//! let title = scene.add_view("title");
//! let emoji = scene.add_view("emoji");
//!
//! // [centerY, centerX], last selected first
//! let mut centered = title.center_x().center_y().pin(&root);
//! let below = emoji.top().equal_to_anchor(&title.bottom(), true, 20.0);
//! assert_eq!(centered.len(), 2);
//! assert_eq!(below.constant(), 20.0);
//!
//! centered.deactivate();
//! assert_eq!(centered.active_count(), 0);
//! ```
//!
//! # Resolution rules
//!
//! 1. `equal_to(view, active, inset)` pairs every selected anchor with the
//!    same anchor of the target view, producing one constraint per step in
//!    reverse selection order
//! 2. Trailing, right, bottom and last-baseline anchors receive `-inset`
//! 3. `equal_to_anchor(other, active, offset)` pairs the current anchors of
//!    two chains of the same category

pub mod anchor;
pub mod cli;
pub mod document;
pub mod error;
pub mod memory;
pub mod plan;
pub mod resolver;
pub mod view;

// Re-export commonly used types and functions
pub use anchor::{
    AnchorKind, AnyAxisChain, AnyChain, AxisCategory, AxisChain, AxisKind, Category,
    DimensionChain, DimensionKind, Horizontal, Orientation, Vertical,
};
pub use cli::AnchorCli;
pub use document::{DocumentFormat, LayoutDocument, LayoutRule, RuleTarget};
pub use error::{LayoutError, Result};
pub use memory::{AnchorRef, Frame, FrameId, LinearConstraint, Scene};
pub use plan::{ConstraintSet, LayoutPlan, DEFAULT_SET};
pub use resolver::{resolve_file, ResolutionStats, Resolver};
pub use view::{AnchorSelect, Constraint, ConstraintList, View};

/// Crate version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_resolve_file_end_to_end() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("board.toml");
        fs::write(
            &path,
            r#"
views = ["root", "cover", "title"]

[[rules]]
view = "cover"
anchors = ["leading", "trailing", "top"]
to = "root"
constant = 16

[[rules]]
view = "cover"
anchors = ["height"]
to = "cover.width"

[[rules]]
view = "title"
anchors = ["top"]
to = "cover.bottom"
constant = 8
"#,
        )
        .unwrap();

        let (plan, stats) = resolve_file(&path).unwrap();
        assert_eq!(stats.constraint_count, 5);
        assert_eq!(stats.active_count, 5);

        let constraints = plan.set(DEFAULT_SET).unwrap();
        let constants: Vec<f64> = constraints.iter().map(|c| c.constant()).collect();
        assert_eq!(constants, vec![16.0, -16.0, 16.0, 0.0, 8.0]);
    }
}
