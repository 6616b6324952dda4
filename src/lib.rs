#![warn(
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    unused_qualifications
)]

//! A crate of building blocks for grid and graph puzzles.
//!
//! ## Introduction
//! Many puzzles boil down to "find the cheapest way from here to there", except that "here" is
//! rarely just a position. A cart that may not drive straight for more than three blocks, or a
//! reindeer that has to pay for every turn, can only be modeled as a Graph if the facing direction
//! and the number of straight steps are part of each Node. Building that Graph up front is tedious
//! and wasteful, so the searches in this crate never see a Graph at all: they ask the caller for
//! the neighbors of whatever Node they are expanding.
//!
//! The crate provides:
//! - [`search`]: Dijkstra's Algorithm over such implicit Graphs, both for the shortest distance
//!   and for every Path achieving it
//! - [`map`]: a sparse [`GridMap`](map::GridMap) of Tiles, which is what most of those Graphs are built on
//! - [`geometry`] and [`neighbors`]: Points, Directions and Neighborhoods on the Grid
//!
//! ## Examples
//! Finding the cheapest route through a Grid of digits, where each digit is the Cost of entering its Tile:
//! ```
//! use puzzle_paths::prelude::*;
//!
//! let map = GridMap::from_rows(["131", "191", "111"], |c| c.to_digit(10).unwrap() as Cost);
//! let goal = Point2D::new(2, 2);
//!
//! let distance = dijkstra_search(
//!     [Point2D::origin()], // starting positions
//!     |node| { // evaluate_adjacency
//!         map.neighbors(node.value, &ManhattanNeighborhood)
//!             .map(|pos| SearchNode::new(pos, map[pos]))
//!             .collect::<Vec<_>>()
//!     },
//!     |node| node.value == goal, // terminates
//! );
//!
//! // down, down, right, right
//! assert_eq!(distance, Ok(4));
//! ```
//!
//! ### Searching with State
//! The state of a Node can be anything that is `Clone + Eq + Hash`. Here, turning costs extra,
//! so the facing direction needs to be part of the state:
//! ```
//! use puzzle_paths::prelude::*;
//!
//! let maze = GridMap::from_rows([
//!     "#####",
//!     "#S..#",
//!     "##.##",
//!     "##E##",
//!     "#####",
//! ], |c| c);
//! let (start, _) = maze.find_tile(|&c| c == 'S').unwrap();
//!
//! let adjacency = |node: &SearchNode<(Point2D, Direction)>| {
//!     let (position, facing) = node.value;
//!     let mut next = vec![
//!         SearchNode::new((position, facing.turn_left()), 1000),
//!         SearchNode::new((position, facing.turn_right()), 1000),
//!     ];
//!     if maze.tile(position.shift(facing)) != Some(&'#') {
//!         next.push(SearchNode::new((position.shift(facing), facing), 1));
//!     }
//!     next
//! };
//! let is_end = |node: &SearchNode<(Point2D, Direction)>| maze.tile(node.value.0) == Some(&'E');
//!
//! let score = dijkstra_search([(start, Direction::Right)], adjacency, is_end);
//! assert_eq!(score, Ok(1003));
//!
//! let best = dijkstra_all_paths([(start, Direction::Right)], adjacency, is_end).unwrap();
//! assert_eq!(best.distance, 1003);
//! assert_eq!(best.len(), 1);
//! ```
//!
//! ### Unreachable Goals
//! If no Goal can be reached, both searches return [`SearchError::Unreachable`](errors::SearchError::Unreachable):
//! ```
//! # use puzzle_paths::prelude::*;
//! let result = dijkstra_search(
//!     [0],
//!     |node| (node.value < 10).then(|| SearchNode::new(node.value + 1, 1)),
//!     |node| node.value == 11,
//! );
//! assert_eq!(result, Err(SearchError::Unreachable));
//! ```
//!
//! ## Features
//! - `log` (default): report the progress of the searches through the [`log`](https://docs.rs/log) crate.

mod utils;

pub mod errors;
pub mod geometry;
pub mod map;
pub mod neighbors;
pub mod search;

/// The most commonly used Types and Functions, for glob-importing.
pub mod prelude {
    pub use crate::{
        errors::{SearchError, SearchResult},
        geometry::{Direction, Point2D},
        map::GridMap,
        neighbors::{ManhattanNeighborhood, MooreNeighborhood, Neighborhood},
        search::{
            dijkstra_all_paths, dijkstra_all_paths_with, dijkstra_search, dijkstra_search_with,
            Cost, SearchNode, ShortestPaths,
        },
    };
}
