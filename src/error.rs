use thiserror::Error;

use crate::coordinate::Coordinate;
use crate::tile::Tile;

/// Reasons text input may fail to form a grid.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GridInvalidReason {
    /// The input had no lines, or only empty ones.
    NoLines,
    /// A line was not as long as the first one.
    RaggedLine {
        /// Zero-based index of the offending line.
        line: usize,
        /// Length of the first line.
        expected: usize,
        /// Length of the offending line.
        actual: usize,
    },
    /// A character outside `|-LJ7F.S` was found.
    UnrecognizedSymbol {
        /// The character found.
        symbol: char,
        /// Where it was found.
        coordinate: Coordinate,
    },
    /// No `S` marks the start tile.
    MissingStart,
    /// More than one `S` was found.
    DuplicateStart {
        /// The first `S` read.
        first: Coordinate,
        /// The `S` that made the input invalid.
        second: Coordinate,
    },
}

impl std::fmt::Display for GridInvalidReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoLines => write!(f, "no lines"),
            Self::RaggedLine { line, expected, actual } =>
                write!(f, "line {line} has length {actual}, expected {expected}"),
            Self::UnrecognizedSymbol { symbol, coordinate } =>
                write!(f, "unrecognized symbol {symbol:?} at {coordinate}"),
            Self::MissingStart => write!(f, "no start tile"),
            Self::DuplicateStart { first, second } =>
                write!(f, "second start tile at {second} after the first at {first}"),
        }
    }
}

/// Everything that can go wrong building or querying a [`Network`](crate::Network).
///
/// All of these are terminal for the grid they were raised on.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
pub enum NetworkError {
    /// The text could not be read as a grid.
    #[error("malformed grid: {0}")]
    MalformedGrid(GridInvalidReason),
    /// The start tile does not have exactly two neighbors opening towards it.
    #[error("start tile at {coordinate} has {found} connecting neighbors, expected 2")]
    AmbiguousStartTile {
        /// The start tile.
        coordinate: Coordinate,
        /// How many neighbors open towards it.
        found: usize,
    },
    /// A tile was entered from a neighbor its pipe does not link to.
    #[error("{from} is not a connection of {tile}")]
    InvalidConnection {
        /// The tile that was entered.
        tile: Tile,
        /// The neighbor it was entered from.
        from: Coordinate,
    },
    /// The walk from the start never closed back on itself.
    #[error("loop from {start} does not close")]
    DisconnectedLoop {
        /// Where the walk began.
        start: Coordinate,
    },
    /// A coordinate fell outside the grid.
    #[error("{0} is outside the grid")]
    OutOfBounds(Coordinate),
}

impl From<GridInvalidReason> for NetworkError {
    fn from(value: GridInvalidReason) -> Self {
        Self::MalformedGrid(value)
    }
}
