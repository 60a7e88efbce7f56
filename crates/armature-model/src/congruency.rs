//! Congruency classification between two endpoints.

use crate::Axis;
use armature_math::{Point3, Tolerance};

/// How closely two 3D points' coordinates match.
///
/// The classification is total over the 3-bit mask of per-coordinate
/// equality (within [`Tolerance::CONGRUENT`]): all three equal is an
/// identical point, two equal is a shared line, one equal is a shared
/// plane. `ExistingNode` is never produced by [`Congruency::classify`];
/// the interaction layer retags an identical-point match when the
/// target end already belongs to a junction node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Congruency {
    /// Identical point on an end already joined into a node.
    ExistingNode,
    /// All three coordinates match.
    IdenticalPoint,
    /// X and Y match: shared line along Z.
    LineXy,
    /// X and Z match: shared line along Y.
    LineXz,
    /// Y and Z match: shared line along X.
    LineYz,
    /// Only X matches: shared plane perpendicular to X.
    PlaneX,
    /// Only Y matches: shared plane perpendicular to Y.
    PlaneY,
    /// Only Z matches: shared plane perpendicular to Z.
    PlaneZ,
    /// No coordinates match.
    None,
}

impl Congruency {
    /// Classify the relationship between two points.
    pub fn classify(a: &Point3, b: &Point3) -> Self {
        let same_x = if (a.x - b.x).abs() < Tolerance::CONGRUENT { 4 } else { 0 };
        let same_y = if (a.y - b.y).abs() < Tolerance::CONGRUENT { 2 } else { 0 };
        let same_z = if (a.z - b.z).abs() < Tolerance::CONGRUENT { 1 } else { 0 };
        match same_x | same_y | same_z {
            0b111 => Self::IdenticalPoint,
            0b110 => Self::LineXy,
            0b101 => Self::LineXz,
            0b011 => Self::LineYz,
            0b100 => Self::PlaneX,
            0b010 => Self::PlaneY,
            0b001 => Self::PlaneZ,
            _ => Self::None,
        }
    }

    /// Whether this congruency calls for a guide plane.
    pub fn requires_plane(self) -> bool {
        matches!(self, Self::PlaneX | Self::PlaneY | Self::PlaneZ)
    }

    /// Whether this congruency calls for a guide line.
    pub fn requires_line(self) -> bool {
        matches!(self, Self::LineXy | Self::LineXz | Self::LineYz)
    }

    /// The axis a guide for this congruency is keyed to.
    ///
    /// For a plane match this is the shared axis (the guide plane's
    /// normal); for a line match it is the one unshared axis (the
    /// guide line's direction).
    pub fn axis(self) -> Axis {
        match self {
            Self::LineXy => Axis::Z,
            Self::LineXz => Axis::Y,
            Self::LineYz => Axis::X,
            Self::PlaneX => Axis::X,
            Self::PlaneY => Axis::Y,
            Self::PlaneZ => Axis::Z,
            Self::ExistingNode | Self::IdenticalPoint | Self::None => Axis::None,
        }
    }

    /// Priority score; higher-scoring congruencies dominate.
    pub fn score(self) -> u8 {
        match self {
            Self::ExistingNode => 4,
            Self::IdenticalPoint => 3,
            Self::LineXy | Self::LineXz | Self::LineYz => 2,
            Self::PlaneX | Self::PlaneY | Self::PlaneZ => 1,
            Self::None => 0,
        }
    }
}
