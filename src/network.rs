use std::collections::{HashMap, HashSet, VecDeque};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use itertools::Itertools;
use log::{debug, trace};
use petgraph::algo::dijkstra;
use petgraph::graphmap::UnGraphMap;
use strum::VariantArray;
use unordered_pair::UnorderedPair;

use crate::builder::NetworkBuilder;
use crate::coordinate::Coordinate;
use crate::direction::Direction;
use crate::error::NetworkError;
use crate::grid::Grid;
use crate::pipe::Pipe;
use crate::tile::Tile;

/// A pipe maze together with its resolved start tile.
///
/// Built once from text, immutable afterwards; every query is a pure function of the maze.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Network {
    grid: Grid,
    start: Tile,
}

impl Network {
    pub(crate) fn new(grid: Grid, start: Tile) -> Self {
        Self { grid, start }
    }

    /// Read a maze from equal-length lines over `|-LJ7F.S`, with exactly one `S`.
    pub fn parse<I, S>(lines: I) -> Result<Self, NetworkError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        NetworkBuilder::new().add_lines(lines).build()
    }

    /// The maze, with the start tile already resolved to a real pipe.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The start tile, with its inferred shape.
    pub fn start(&self) -> Tile {
        self.start
    }

    /// Work out the shape hidden under the start marker at `coordinate`.
    ///
    /// Exactly two in-bounds neighbors must open towards `coordinate`; the pipe linking those two
    /// directions is the answer. Any other count is reported as [`NetworkError::AmbiguousStartTile`].
    pub(crate) fn infer_start(grid: &Grid, coordinate: Coordinate) -> Result<Tile, NetworkError> {
        let connecting = Direction::VARIANTS.iter()
            .filter_map(|direction| grid.get(direction.step_from(coordinate)).ok().map(|tile| (*direction, tile)))
            // the neighbor must open back the way we came
            .filter(|(direction, neighbor)| neighbor.pipe.directions()
                .is_some_and(|(a, b)| a == direction.invert() || b == direction.invert()))
            .map(|(direction, _)| direction)
            .collect_vec();

        let &[a, b] = connecting.as_slice() else {
            return Err(NetworkError::AmbiguousStartTile { coordinate, found: connecting.len() });
        };

        let Some(pipe) = Pipe::from_directions(UnorderedPair(a, b)) else {
            unreachable!("every pair of distinct directions is linked by some pipe")
        };

        debug!("start at {coordinate} resolved to '{}'", pipe.symbol());
        Ok(Tile::new(pipe, coordinate))
    }

    /// Number of steps along the loop to the tile farthest from the start.
    ///
    /// Two cursors leave the start in opposite directions, breadth first; the depth at which a tile
    /// is reached for the second time is the answer.
    pub fn farthest_distance(&self) -> Result<usize, NetworkError> {
        let mut visited = HashSet::from([self.start]);
        let mut frontier = VecDeque::from([
            (*self.grid.get(self.start.connection_a())?, 1usize, self.start.coord),
            (*self.grid.get(self.start.connection_b())?, 1usize, self.start.coord),
        ]);

        while let Some((tile, depth, previous)) = frontier.pop_front() {
            if !visited.insert(tile) {
                debug!("farthest tile from {} is {tile}, {depth} steps away", self.start.coord);
                return Ok(depth);
            }

            let next = tile.next_connection(previous)?;
            trace!("{tile} at depth {depth}, continuing to {next}");
            frontier.push_back((*self.grid.get(next)?, depth + 1, tile.coord));
        }

        Err(NetworkError::DisconnectedLoop { start: self.start.coord })
    }

    /// The maze with everything but the loop replaced by empty tiles.
    pub fn clean_grid(&self) -> Result<Grid, NetworkError> {
        self.grid.clean(self.start)
    }

    /// Number of empty cells strictly inside the loop.
    ///
    /// Each row of the cleaned grid is scanned left to right, flipping between outside and inside
    /// every time the scan crosses the loop.
    pub fn enclosed_count(&self) -> Result<usize, NetworkError> {
        let cleaned = self.clean_grid()?;
        let enclosed: usize = cleaned.rows()
            .map(|row| enclosed_in_row(row.iter().map(|tile| tile.pipe)))
            .sum();

        debug!("{enclosed} tiles enclosed by the loop through {}", self.start.coord);
        Ok(enclosed)
    }

    /// The loop as an undirected graph over tile coordinates. Every node has degree two.
    pub fn loop_graph(&self) -> Result<UnGraphMap<Coordinate, ()>, NetworkError> {
        let tiles = self.grid.walk_loop(self.start).collect::<Result<Vec<_>, _>>()?;

        let mut graph = UnGraphMap::with_capacity(tiles.len(), tiles.len());
        for (a, b) in tiles.iter().circular_tuple_windows() {
            graph.add_edge(a.coord, b.coord, ());
        }

        Ok(graph)
    }

    /// Number of tiles on the loop, start included.
    pub fn loop_length(&self) -> Result<usize, NetworkError> {
        let length = self.grid.walk_loop(self.start).try_fold(0usize, |count, tile| tile.map(|_| count + 1))?;
        debug!("loop through {} is {length} tiles long", self.start.coord);
        Ok(length)
    }

    /// Shortest distance along the loop from the start to every tile on it.
    pub fn distances(&self) -> Result<HashMap<Coordinate, usize>, NetworkError> {
        let graph = self.loop_graph()?;
        Ok(dijkstra(&graph, self.start.coord, None, |_| 1usize))
    }
}

fn enclosed_in_row(mut pipes: impl Iterator<Item = Pipe>) -> usize {
    let mut inside = false;
    let mut enclosed = 0;

    while let Some(pipe) = pipes.next() {
        match pipe {
            Pipe::Empty => {
                if inside {
                    enclosed += 1;
                }
            }
            Pipe::Vertical => inside = !inside,
            Pipe::BendNE | Pipe::BendSE => {
                // consumes the closing bend too
                let closing = pipes.find(|pipe| *pipe != Pipe::Horizontal);
                if closing.is_some_and(|closing| pipe.run_crosses(closing)) {
                    inside = !inside;
                }
            }
            // only reachable on grids that were not cleaned
            Pipe::Horizontal | Pipe::BendNW | Pipe::BendSW => {}
        }
    }

    enclosed
}

impl FromStr for Network {
    type Err = NetworkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s.lines())
    }
}

impl Display for Network {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.grid.render(|tile| if tile.coord == self.start.coord { 'S' } else { tile.pipe.symbol() }))
    }
}
