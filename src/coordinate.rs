use std::fmt::{Display, Formatter};

use ndarray::Ix;

pub(crate) type Coord = usize;

/// A `(row, column)` position on a grid. The top left corner is `Coordinate(0, 0)` and rows grow downward.
#[derive(Clone, Eq, Hash, Copy, PartialEq, Ord, PartialOrd, Debug)]
pub struct Coordinate(pub Coord, pub Coord);

impl Coordinate {
    /// The row, counted from the top.
    pub fn row(&self) -> Coord {
        self.0
    }

    /// The column, counted from the left.
    pub fn column(&self) -> Coord {
        self.1
    }

    pub(crate) fn as_index(&self) -> (Ix, Ix) {
        (self.0, self.1)
    }

    // stepping off the top or left edge wraps to a huge index, which bounds checks reject
    pub(crate) fn offset_by(self, rhs: (isize, isize)) -> Self {
        Self(self.0.wrapping_add_signed(rhs.0), self.1.wrapping_add_signed(rhs.1))
    }
}

impl From<(Ix, Ix)> for Coordinate {
    fn from(value: (Ix, Ix)) -> Self {
        Self(value.0, value.1)
    }
}

impl Display for Coordinate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.0, self.1)
    }
}
