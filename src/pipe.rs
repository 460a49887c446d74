use strum::VariantArray;
use unordered_pair::UnorderedPair;

use crate::direction::Direction;

/// The shape of a single tile in the maze.
///
/// Every variant except [`Empty`](Pipe::Empty) links exactly two cardinal directions.
#[derive(Clone, Copy, Debug, Default, VariantArray, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Pipe {
    /// `|`, north to south.
    Vertical,
    /// `-`, east to west.
    Horizontal,
    /// `L`, north to east.
    BendNE,
    /// `J`, north to west.
    BendNW,
    /// `7`, south to west.
    BendSW,
    /// `F`, south to east.
    BendSE,
    /// `.`, no pipe at all.
    #[default]
    Empty,
}

impl Pipe {
    /// The two directions this pipe links, or [`None`] for [`Pipe::Empty`].
    pub fn directions(&self) -> Option<(Direction, Direction)> {
        match self {
            Self::Vertical => Some((Direction::North, Direction::South)),
            Self::Horizontal => Some((Direction::East, Direction::West)),
            Self::BendNE => Some((Direction::North, Direction::East)),
            Self::BendNW => Some((Direction::North, Direction::West)),
            Self::BendSW => Some((Direction::South, Direction::West)),
            Self::BendSE => Some((Direction::East, Direction::South)),
            Self::Empty => None,
        }
    }

    /// Find the pipe linking exactly the two given directions, in either order.
    pub fn from_directions(directions: UnorderedPair<Direction>) -> Option<Self> {
        Self::VARIANTS.iter()
            .find(|pipe| pipe.directions().is_some_and(|pair| UnorderedPair::from(pair) == directions))
            .copied()
    }

    /// The character this pipe is drawn with.
    pub fn symbol(&self) -> char {
        match self {
            Self::Vertical => '|',
            Self::Horizontal => '-',
            Self::BendNE => 'L',
            Self::BendNW => 'J',
            Self::BendSW => '7',
            Self::BendSE => 'F',
            Self::Empty => '.',
        }
    }

    /// Whether a horizontal run opened by `self` and closed by `closing` passes through the loop
    /// boundary rather than touching it and turning back.
    pub(crate) fn run_crosses(&self, closing: Pipe) -> bool {
        matches!((self, closing), (Self::BendNE, Self::BendSW) | (Self::BendSE, Self::BendNW))
    }
}

impl TryFrom<char> for Pipe {
    type Error = char;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        Self::VARIANTS.iter()
            .find(|pipe| pipe.symbol() == value)
            .copied()
            .ok_or(value)
    }
}
