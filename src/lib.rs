#![warn(missing_docs)]

//! # `pipemaze`
//!
//! Analysis of pipe mazes: a rectangle of characters in which `|`, `-`, `L`, `J`, `7` and `F` draw
//! pipe segments, `.` is open ground, and a single `S` marks a tile on a closed loop whose shape is
//! not given.
//! Begin by reading a maze into a [`Network`], either with [`Network::parse`], [`str::parse`] or a
//! [`NetworkBuilder`] fed line by line. Then query it:
//! [`farthest_distance()`](Network::farthest_distance) for the number of steps to the point of the
//! loop farthest from the start, and [`enclosed_count()`](Network::enclosed_count) for the number of
//! tiles the loop encloses.
//!
//! # Internals
//! The shape under `S` is inferred from its neighbors: exactly two of them must open towards it,
//! and the start pipe is the one linking those two directions.
//!
//! The farthest point is found with a breadth first walk leaving the start in both directions at
//! once. Since the loop is a simple cycle, the first tile reached twice sits halfway round.
//!
//! Enclosure is a parity test. The loop is first copied onto an otherwise empty grid, dropping
//! stray pipes. Each row is then scanned left to right, toggling between outside and inside at every
//! `|`, and at every horizontal run `L-...-7` or `F-...-J` that passes through the loop. Runs
//! `L-...-J` and `F-...-7` only touch the loop and turn back, so they leave the state alone.

pub use builder::NetworkBuilder;
pub use coordinate::Coordinate;
pub use direction::Direction;
pub use error::{GridInvalidReason, NetworkError};
pub use grid::{Grid, LoopWalk};
pub use network::Network;
pub use pipe::Pipe;
pub use tile::Tile;

pub mod builder;
pub(crate) mod coordinate;
pub(crate) mod direction;
pub(crate) mod error;
pub(crate) mod grid;
pub(crate) mod network;
pub(crate) mod pipe;
pub(crate) mod tile;
#[cfg(feature = "wasm")]
pub mod wasm;
