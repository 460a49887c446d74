//! Reading mazes from text.

use ndarray::Array2;

use crate::coordinate::Coordinate;
use crate::error::{GridInvalidReason, NetworkError};
use crate::grid::Grid;
use crate::network::Network;
use crate::pipe::Pipe;

const START_SYMBOL: char = 'S';

/// Reads a maze line by line and turns it into a [`Network`].
///
/// The builder records the first problem it finds and ignores any input after it.
/// Like the boards it produces, it can be [`Clone`]d to save its state part way through.
#[derive(Clone, Default, Debug)]
pub struct NetworkBuilder {
    rows: Vec<Vec<Pipe>>,
    start: Option<Coordinate>,
    invalid_reason: Option<GridInvalidReason>,
}

impl NetworkBuilder {
    /// A builder with no lines yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one row of the maze.
    ///
    /// May leave the builder invalid with [`RaggedLine`](GridInvalidReason::RaggedLine),
    /// [`UnrecognizedSymbol`](GridInvalidReason::UnrecognizedSymbol) or [`DuplicateStart`](GridInvalidReason::DuplicateStart).
    /// If the builder is already invalid, this function does nothing.
    pub fn add_line(&mut self, line: &str) -> &mut Self {
        if self.invalid_reason.is_some() {
            return self;
        }

        let row = self.rows.len();
        let actual = line.chars().count();
        if let Some(expected) = self.rows.first().map(Vec::len) {
            if actual != expected {
                self.invalid_reason = Some(GridInvalidReason::RaggedLine { line: row, expected, actual });
                return self;
            }
        }

        let mut pipes = Vec::with_capacity(actual);
        for (column, symbol) in line.chars().enumerate() {
            let coordinate = Coordinate(row, column);

            if symbol == START_SYMBOL {
                if let Some(first) = self.start {
                    self.invalid_reason = Some(GridInvalidReason::DuplicateStart { first, second: coordinate });
                    return self;
                }
                self.start = Some(coordinate);
                // filled in once the neighbors are known
                pipes.push(Pipe::Empty);
                continue;
            }

            match Pipe::try_from(symbol) {
                Ok(pipe) => pipes.push(pipe),
                Err(symbol) => {
                    self.invalid_reason = Some(GridInvalidReason::UnrecognizedSymbol { symbol, coordinate });
                    return self;
                }
            }
        }

        self.rows.push(pipes);
        self
    }

    /// Shorthand for repeated calls to [`Self::add_line`].
    pub fn add_lines<I, S>(&mut self, lines: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for line in lines {
            self.add_line(line.as_ref());
        }

        self
    }

    /// Returns `None` if the builder is valid so far, otherwise the problem that invalidated it.
    pub fn is_valid(&self) -> Option<GridInvalidReason> {
        self.invalid_reason
    }

    /// Finish the grid and infer the shape of the start tile from its neighbors.
    pub fn build(&self) -> Result<Network, NetworkError> {
        if let Some(reason) = self.invalid_reason {
            return Err(NetworkError::MalformedGrid(reason));
        }

        let columns = self.rows.first().map_or(0, Vec::len);
        if columns == 0 {
            return Err(GridInvalidReason::NoLines.into());
        }
        let start = self.start.ok_or(GridInvalidReason::MissingStart)?;

        let pipes = Array2::from_shape_fn((self.rows.len(), columns), |(row, column)| self.rows[row][column]);
        let mut grid = Grid::from_pipes(&pipes);
        let start = Network::infer_start(&grid, start)?;
        grid.set(start)?;

        Ok(Network::new(grid, start))
    }
}
