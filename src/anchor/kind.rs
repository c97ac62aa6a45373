// FILE: src/anchor/kind.rs

use serde::Serialize;
use std::fmt;

/// Direction an axis anchor runs along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// Pairing category of an anchor. Only anchors of the same category can be
/// constrained against each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Horizontal,
    Vertical,
    Size,
}

impl From<Orientation> for Category {
    fn from(orientation: Orientation) -> Self {
        match orientation {
            Orientation::Horizontal => Self::Horizontal,
            Orientation::Vertical => Self::Vertical,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Horizontal => "horizontal",
            Self::Vertical => "vertical",
            Self::Size => "size",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum AxisKind {
    Leading,
    Trailing,
    Left,
    Right,
    Top,
    Bottom,
    CenterX,
    CenterY,
    FirstBaseline,
    LastBaseline,
}

impl AxisKind {
    pub const ALL: [AxisKind; 10] = [
        Self::Leading,
        Self::Trailing,
        Self::Left,
        Self::Right,
        Self::Top,
        Self::Bottom,
        Self::CenterX,
        Self::CenterY,
        Self::FirstBaseline,
        Self::LastBaseline,
    ];

    pub fn orientation(self) -> Orientation {
        match self {
            Self::Leading | Self::Trailing | Self::Left | Self::Right | Self::CenterX => {
                Orientation::Horizontal
            }
            Self::Top | Self::Bottom | Self::CenterY | Self::FirstBaseline | Self::LastBaseline => {
                Orientation::Vertical
            }
        }
    }

    /// Anchors measured from the far side of a view. Insets against these
    /// edges are negated so a positive inset always moves inwards.
    pub fn is_far_edge(self) -> bool {
        matches!(
            self,
            Self::Trailing | Self::Right | Self::Bottom | Self::LastBaseline
        )
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Leading => "leading",
            Self::Trailing => "trailing",
            Self::Left => "left",
            Self::Right => "right",
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::CenterX => "centerX",
            Self::CenterY => "centerY",
            Self::FirstBaseline => "firstBaseline",
            Self::LastBaseline => "lastBaseline",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "leading" => Some(Self::Leading),
            "trailing" => Some(Self::Trailing),
            "left" => Some(Self::Left),
            "right" => Some(Self::Right),
            "top" => Some(Self::Top),
            "bottom" => Some(Self::Bottom),
            "centerX" | "center_x" => Some(Self::CenterX),
            "centerY" | "center_y" => Some(Self::CenterY),
            "firstBaseline" | "first_baseline" => Some(Self::FirstBaseline),
            "lastBaseline" | "last_baseline" => Some(Self::LastBaseline),
            _ => None,
        }
    }
}

impl fmt::Display for AxisKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DimensionKind {
    Width,
    Height,
}

impl DimensionKind {
    pub const ALL: [DimensionKind; 2] = [Self::Width, Self::Height];

    pub fn name(self) -> &'static str {
        match self {
            Self::Width => "width",
            Self::Height => "height",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "width" => Some(Self::Width),
            "height" => Some(Self::Height),
            _ => None,
        }
    }
}

impl fmt::Display for DimensionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Any anchor a view exposes, positional or size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum AnchorKind {
    Axis(AxisKind),
    Dimension(DimensionKind),
}

impl AnchorKind {
    pub fn category(self) -> Category {
        match self {
            Self::Axis(kind) => kind.orientation().into(),
            Self::Dimension(_) => Category::Size,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Axis(kind) => kind.name(),
            Self::Dimension(kind) => kind.name(),
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        AxisKind::from_name(name)
            .map(Self::Axis)
            .or_else(|| DimensionKind::from_name(name).map(Self::Dimension))
    }

    /// Every anchor kind, axes first.
    pub fn all() -> impl Iterator<Item = AnchorKind> {
        AxisKind::ALL
            .into_iter()
            .map(Self::Axis)
            .chain(DimensionKind::ALL.into_iter().map(Self::Dimension))
    }
}

impl From<AxisKind> for AnchorKind {
    fn from(kind: AxisKind) -> Self {
        Self::Axis(kind)
    }
}

impl From<DimensionKind> for AnchorKind {
    fn from(kind: DimensionKind) -> Self {
        Self::Dimension(kind)
    }
}

impl fmt::Display for AnchorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_far_edges() {
        let far: Vec<_> = AxisKind::ALL.into_iter().filter(|k| k.is_far_edge()).collect();
        assert_eq!(
            far,
            vec![
                AxisKind::Trailing,
                AxisKind::Right,
                AxisKind::Bottom,
                AxisKind::LastBaseline
            ]
        );
    }

    #[test]
    fn test_orientation_tags() {
        assert_eq!(AxisKind::CenterX.orientation(), Orientation::Horizontal);
        assert_eq!(AxisKind::Left.orientation(), Orientation::Horizontal);
        assert_eq!(AxisKind::FirstBaseline.orientation(), Orientation::Vertical);
        assert_eq!(AxisKind::CenterY.orientation(), Orientation::Vertical);
    }

    #[test]
    fn test_names_round_trip() {
        for kind in AnchorKind::all() {
            assert_eq!(AnchorKind::from_name(kind.name()), Some(kind));
        }
        assert_eq!(AxisKind::from_name("center_x"), Some(AxisKind::CenterX));
        assert_eq!(AnchorKind::from_name("middle"), None);
    }

    #[test]
    fn test_categories() {
        assert_eq!(AnchorKind::Axis(AxisKind::Top).category(), Category::Vertical);
        assert_eq!(AnchorKind::Axis(AxisKind::Leading).category(), Category::Horizontal);
        assert_eq!(AnchorKind::Dimension(DimensionKind::Width).category(), Category::Size);
        assert_eq!(AnchorKind::all().count(), 12);
    }
}
