//! Item dispatch: the closed set of pickable model entities.

use crate::{Axis, Cylinder, Node};
use armature_math::{Point3, Ray, Transform};
use serde::{Deserialize, Serialize};

/// Unique identifier for a model item (cylinder or node).
pub type ItemId = u64;

/// The kind of a model item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    /// A cylindrical bone.
    Cylinder,
    /// A junction node.
    Node,
}

/// The sub-position of an item a touch landed on.
///
/// Cylinder touches resolve to the body or one of six end handles;
/// node touches resolve to the body marker or one of three axis rings.
/// Each variant is a plain data row: the axis it edits and whether it
/// moves the top and/or bottom end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Element {
    /// The whole item; a move drags both ends.
    Body,
    /// Bottom-end handle perpendicular to X.
    BottomX,
    /// Bottom-end handle perpendicular to Y.
    BottomY,
    /// Bottom-end handle perpendicular to Z.
    BottomZ,
    /// Top-end handle perpendicular to X.
    TopX,
    /// Top-end handle perpendicular to Y.
    TopY,
    /// Top-end handle perpendicular to Z.
    TopZ,
    /// Node ring handle perpendicular to X.
    AxisX,
    /// Node ring handle perpendicular to Y.
    AxisY,
    /// Node ring handle perpendicular to Z.
    AxisZ,
}

impl Element {
    /// The axis this element edits, or `Axis::None` for the body.
    pub fn axis(self) -> Axis {
        match self {
            Self::Body => Axis::None,
            Self::BottomX | Self::TopX | Self::AxisX => Axis::X,
            Self::BottomY | Self::TopY | Self::AxisY => Axis::Y,
            Self::BottomZ | Self::TopZ | Self::AxisZ => Axis::Z,
        }
    }

    /// Whether a move of this element displaces the top end.
    pub fn moves_top(self) -> bool {
        matches!(self, Self::Body | Self::TopX | Self::TopY | Self::TopZ)
    }

    /// Whether a move of this element displaces the bottom end.
    pub fn moves_bottom(self) -> bool {
        matches!(
            self,
            Self::Body | Self::BottomX | Self::BottomY | Self::BottomZ
        )
    }
}

/// An ephemeral per-gesture pick record: which item was hit, where,
/// and on which element. Recomputed at every touch-down, never stored
/// across gestures.
#[derive(Debug, Clone, Copy)]
pub struct ItemTouch {
    /// Id of the touched item.
    pub item: ItemId,
    /// Kind of the touched item.
    pub kind: ItemKind,
    /// The exact 3D hit point.
    pub point: Point3,
    /// The sub-position hit.
    pub element: Element,
}

/// A borrowed view of one model item, dispatched by match.
#[derive(Debug, Clone, Copy)]
pub enum ItemRef<'a> {
    /// A cylinder.
    Cylinder(&'a Cylinder),
    /// A node.
    Node(&'a Node),
}

impl ItemRef<'_> {
    /// The item's id.
    pub fn id(&self) -> ItemId {
        match self {
            Self::Cylinder(c) => c.id(),
            Self::Node(n) => n.id(),
        }
    }

    /// The item's kind.
    pub fn kind(&self) -> ItemKind {
        match self {
            Self::Cylinder(_) => ItemKind::Cylinder,
            Self::Node(_) => ItemKind::Node,
        }
    }

    /// Whether the item is currently selected.
    pub fn selected(&self) -> bool {
        match self {
            Self::Cylinder(c) => c.selected,
            Self::Node(n) => n.selected,
        }
    }

    /// Whether the item can be moved at all.
    ///
    /// A cylinder with both ends joined into nodes is fully locked;
    /// a node always moves (dragging it carries its joined ends).
    pub fn can_move(&self) -> bool {
        match self {
            Self::Cylinder(c) => !(c.top_node().is_some() && c.bottom_node().is_some()),
            Self::Node(_) => true,
        }
    }

    /// Resolve the item's own pick candidates against a ray, returning
    /// the candidate closest to the viewer in camera space.
    pub fn find_intersection(&self, ray: &Ray, view: &Transform) -> Option<ItemTouch> {
        match self {
            Self::Cylinder(c) => c.find_intersection(ray, view),
            Self::Node(n) => n.find_intersection(ray, view),
        }
    }
}
