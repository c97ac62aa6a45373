//! In-memory layout backend
//!
//! Views are lightweight named handles registered in a [`Scene`]. Anchors
//! resolve to [`AnchorRef`] values and pairing two of them produces a
//! [`LinearConstraint`] record. The CLI and the test suite run on this
//! backend; native toolkits provide their own [`View`] implementation.

use crate::anchor::{AnchorKind, AxisKind, DimensionKind};
use crate::view::{Constraint, View};
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct FrameId(pub u32);

/// Handle to a view registered in a [`Scene`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    id: FrameId,
    name: Rc<str>,
}

impl Frame {
    pub fn id(&self) -> FrameId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    fn anchor_ref(&self, kind: AnchorKind) -> AnchorRef {
        AnchorRef {
            frame: self.id,
            frame_name: self.name.to_string(),
            kind,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnchorRef {
    pub frame: FrameId,
    pub frame_name: String,
    pub kind: AnchorKind,
}

impl fmt::Display for AnchorRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.frame_name, self.kind)
    }
}

/// `first == second + constant`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LinearConstraint {
    first: AnchorRef,
    second: AnchorRef,
    constant: f64,
    active: bool,
}

impl LinearConstraint {
    pub fn first(&self) -> &AnchorRef {
        &self.first
    }

    pub fn second(&self) -> &AnchorRef {
        &self.second
    }
}

impl Constraint for LinearConstraint {
    fn is_active(&self) -> bool {
        self.active
    }

    fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    fn constant(&self) -> f64 {
        self.constant
    }

    fn set_constant(&mut self, constant: f64) {
        self.constant = constant;
    }
}

impl fmt::Display for LinearConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} == {}", self.first, self.second)?;
        if self.constant > 0.0 {
            write!(f, " + {}", self.constant)?;
        } else if self.constant < 0.0 {
            write!(f, " - {}", -self.constant)?;
        }
        let state = if self.active { "active" } else { "inactive" };
        write!(f, " [{}]", state)
    }
}

impl View for Frame {
    type Anchor = AnchorRef;
    type Constraint = LinearConstraint;

    fn axis_anchor(&self, kind: AxisKind) -> AnchorRef {
        self.anchor_ref(kind.into())
    }

    fn dimension_anchor(&self, kind: DimensionKind) -> AnchorRef {
        self.anchor_ref(kind.into())
    }

    fn constrain(first: &AnchorRef, second: &AnchorRef, constant: f64) -> LinearConstraint {
        assert_eq!(
            first.kind.category(),
            second.kind.category(),
            "cannot constrain {} to {}: anchors belong to different categories",
            first,
            second
        );
        LinearConstraint {
            first: first.clone(),
            second: second.clone(),
            constant,
            active: false,
        }
    }
}

/// Registry of named views.
#[derive(Debug, Default)]
pub struct Scene {
    frames: Vec<Frame>,
    by_name: HashMap<String, FrameId>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a view, or returns the existing one with that name.
    pub fn add_view(&mut self, name: &str) -> Frame {
        if let Some(frame) = self.view(name) {
            return frame.clone();
        }
        let frame = Frame {
            id: FrameId(self.frames.len() as u32),
            name: Rc::from(name),
        };
        self.by_name.insert(name.to_string(), frame.id);
        self.frames.push(frame.clone());
        frame
    }

    pub fn view(&self, name: &str) -> Option<&Frame> {
        self.by_name
            .get(name)
            .map(|id| &self.frames[id.0 as usize])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}
