use std::fmt::{Display, Formatter};

use crate::coordinate::Coordinate;
use crate::error::NetworkError;
use crate::pipe::Pipe;

/// A [`Pipe`] placed at a [`Coordinate`].
#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq, Ord, PartialOrd)]
pub struct Tile {
    /// The shape of the pipe on this tile.
    pub pipe: Pipe,
    /// Where the tile sits on its grid.
    pub coord: Coordinate,
}

impl Tile {
    /// Place `pipe` at `coord`.
    pub fn new(pipe: Pipe, coord: Coordinate) -> Self {
        Self { pipe, coord }
    }

    /// The first neighbor this tile's pipe links to.
    pub fn connection_a(&self) -> Coordinate {
        match self.pipe.directions() {
            Some((a, _)) => a.step_from(self.coord),
            // empty tiles point back at themselves
            None => self.coord,
        }
    }

    /// The second neighbor this tile's pipe links to.
    pub fn connection_b(&self) -> Coordinate {
        match self.pipe.directions() {
            Some((_, b)) => b.step_from(self.coord),
            None => self.coord,
        }
    }

    /// Whether the pipe on this tile opens towards `coord`.
    pub fn connects_to(&self, coord: Coordinate) -> bool {
        self.pipe != Pipe::Empty && (self.connection_a() == coord || self.connection_b() == coord)
    }

    /// Given the neighbor we arrived from, the neighbor to continue to.
    ///
    /// Fails with [`NetworkError::InvalidConnection`] if `from` is not one of this tile's connections.
    pub fn next_connection(&self, from: Coordinate) -> Result<Coordinate, NetworkError> {
        if !self.connects_to(from) {
            return Err(NetworkError::InvalidConnection { tile: *self, from });
        }

        if self.connection_a() == from {
            Ok(self.connection_b())
        } else {
            Ok(self.connection_a())
        }
    }
}

impl Display for Tile {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "'{}' at {}", self.pipe.symbol(), self.coord)
    }
}
