use strum::VariantArray;

use crate::coordinate::Coordinate;

/// The four cardinal directions a pipe may open towards.
#[derive(Copy, Clone, VariantArray, Eq, PartialEq, Hash, Debug, Ord, PartialOrd)]
pub enum Direction {
    /// Up, towards row 0.
    North,
    /// Right, towards higher columns.
    East,
    /// Down, towards higher rows.
    South,
    /// Left, towards column 0.
    West,
}

impl Direction {
    /// Take one step from `coordinate` towards `self`.
    pub fn step_from(&self, coordinate: Coordinate) -> Coordinate {
        match self {
            Self::North => coordinate.offset_by((-1, 0)),
            Self::East => coordinate.offset_by((0, 1)),
            Self::South => coordinate.offset_by((1, 0)),
            Self::West => coordinate.offset_by((0, -1)),
        }
    }

    /// The opposite direction.
    pub fn invert(&self) -> Self {
        match self {
            Self::North => Self::South,
            Self::East => Self::West,
            Self::South => Self::North,
            Self::West => Self::East,
        }
    }
}
