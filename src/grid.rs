use std::fmt::{Display, Formatter};

use ndarray::{Array2, ArrayView1};

use crate::coordinate::Coordinate;
use crate::error::NetworkError;
use crate::pipe::Pipe;
use crate::tile::Tile;

/// A fixed-size rectangular matrix of [`Tile`]s, indexed by [`Coordinate`].
///
/// Every access is bounds checked; a coordinate off the grid is an error, never clamped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    pub(crate) cells: Array2<Tile>,
}

impl Grid {
    pub(crate) fn from_pipes(pipes: &Array2<Pipe>) -> Self {
        Self {
            cells: Array2::from_shape_fn(pipes.raw_dim(), |ind| Tile::new(pipes[ind], Coordinate::from(ind))),
        }
    }

    pub(crate) fn empty(dims: (usize, usize)) -> Self {
        Self {
            cells: Array2::from_shape_fn(dims, |ind| Tile::new(Pipe::Empty, Coordinate::from(ind))),
        }
    }

    /// Dimensions in `(rows, columns)` order.
    pub fn dims(&self) -> (usize, usize) {
        self.cells.dim()
    }

    /// The tile at `coord`, or [`NetworkError::OutOfBounds`].
    pub fn get(&self, coord: Coordinate) -> Result<&Tile, NetworkError> {
        self.cells.get(coord.as_index()).ok_or(NetworkError::OutOfBounds(coord))
    }

    /// Overwrite the cell at `tile.coord` with `tile`.
    pub(crate) fn set(&mut self, tile: Tile) -> Result<(), NetworkError> {
        let cell = self.cells.get_mut(tile.coord.as_index()).ok_or(NetworkError::OutOfBounds(tile.coord))?;
        *cell = tile;
        Ok(())
    }

    /// Iterate over rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = ArrayView1<'_, Tile>> {
        self.cells.rows().into_iter()
    }

    /// Follow pipes from `start` through its first connection until the walk arrives back at `start`.
    ///
    /// Yields `start` first. A broken walk yields a single error and then ends.
    pub fn walk_loop(&self, start: Tile) -> LoopWalk<'_> {
        LoopWalk {
            grid: self,
            start,
            previous: None,
            current: Some(start),
            remaining: self.cells.len(),
        }
    }

    /// A grid of the same size holding only the tiles on the loop through `start`; every other cell is empty.
    ///
    /// Stray pipes that are not part of the loop are dropped, so the result is safe to scan for enclosure.
    pub fn clean(&self, start: Tile) -> Result<Grid, NetworkError> {
        let mut cleaned = Grid::empty(self.dims());
        for tile in self.walk_loop(start) {
            cleaned.set(tile?)?;
        }

        Ok(cleaned)
    }

    pub(crate) fn render(&self, symbol_of: impl Fn(&Tile) -> char) -> String {
        let mut out = String::with_capacity(self.cells.nrows() * (self.cells.ncols() + 1));

        for row in self.cells.rows() {
            for tile in row {
                out.push(symbol_of(tile));
            }
            out.push('\n');
        }

        out
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.render(|tile| tile.pipe.symbol()))
    }
}

/// Iterator returned by [`Grid::walk_loop`].
pub struct LoopWalk<'a> {
    grid: &'a Grid,
    start: Tile,
    previous: Option<Coordinate>,
    current: Option<Tile>,
    // a closed loop can visit each cell at most once
    remaining: usize,
}

impl Iterator for LoopWalk<'_> {
    type Item = Result<Tile, NetworkError>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.current.take()?;
        if self.remaining == 0 {
            return Some(Err(NetworkError::DisconnectedLoop { start: self.start.coord }));
        }
        self.remaining -= 1;

        let next = match self.previous {
            None => Ok(current.connection_a()),
            Some(previous) => current.next_connection(previous),
        }.and_then(|coord| self.grid.get(coord).copied());

        match next {
            Ok(tile) => {
                if tile != self.start {
                    self.current = Some(tile);
                }
                self.previous = Some(current.coord);
                Some(Ok(current))
            }
            Err(err) => Some(Err(err)),
        }
    }
}
