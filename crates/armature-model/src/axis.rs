//! Principal axes with a "no axis" sentinel.

use armature_math::Vec3;
use serde::{Deserialize, Serialize};

/// One of the three principal axes, or none.
///
/// Each real axis knows its coordinate index, the pair of complementary
/// indices, and its successor in the cycle X → Y → Z → X. `None` is
/// absorbing under [`Axis::next`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    /// The X axis (index 0).
    X,
    /// The Y axis (index 1).
    Y,
    /// The Z axis (index 2).
    Z,
    /// No axis.
    None,
}

impl Axis {
    /// Coordinate index of this axis (0/1/2), or `None` for the sentinel.
    pub fn index(self) -> Option<usize> {
        match self {
            Self::X => Some(0),
            Self::Y => Some(1),
            Self::Z => Some(2),
            Self::None => None,
        }
    }

    /// The two complementary coordinate indices.
    pub fn others(self) -> Option<[usize; 2]> {
        match self {
            Self::X => Some([1, 2]),
            Self::Y => Some([0, 2]),
            Self::Z => Some([0, 1]),
            Self::None => None,
        }
    }

    /// Successor in the cycle X → Y → Z → X; `None` maps to itself.
    pub fn next(self) -> Self {
        match self {
            Self::X => Self::Y,
            Self::Y => Self::Z,
            Self::Z => Self::X,
            Self::None => Self::None,
        }
    }

    /// Unit vector along this axis.
    pub fn unit(self) -> Option<Vec3> {
        match self {
            Self::X => Some(Vec3::x()),
            Self::Y => Some(Vec3::y()),
            Self::Z => Some(Vec3::z()),
            Self::None => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_cycle_closure() {
        for axis in [Axis::X, Axis::Y, Axis::Z] {
            assert_eq!(axis.next().next().next(), axis);
        }
    }

    #[test]
    fn test_none_absorbing() {
        assert_eq!(Axis::None.next(), Axis::None);
    }

    #[test]
    fn test_complementary_indices() {
        for axis in [Axis::X, Axis::Y, Axis::Z] {
            let index = axis.index().unwrap();
            let others = axis.others().unwrap();
            assert!(!others.contains(&index));
            assert_ne!(others[0], others[1]);
        }
        assert!(Axis::None.index().is_none());
        assert!(Axis::None.others().is_none());
    }
}
