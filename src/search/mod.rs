//! Generic shortest-path searches over implicitly defined Graphs.
//!
//! The Graph is never stored. Instead, the searches ask the caller for the neighbors of every
//! Node they expand, which allows searching state spaces like "position + facing direction +
//! number of straight steps" without building them first.
//!
//! - [`dijkstra_search`] finds the shortest distance to any Goal
//! - [`dijkstra_all_paths`] additionally finds every Path with that distance
//!
//! Both have a `_with` variant that takes an extra `process_node` Function.
//!
//! Edge weights are of type [`Cost`] and can therefore never be negative.

mod node;
pub use self::node::SearchNode;

mod dijkstra;
pub use self::dijkstra::{dijkstra_search, dijkstra_search_with};

mod all_paths;
pub use self::all_paths::{dijkstra_all_paths, dijkstra_all_paths_with, ShortestPaths};

/// a Type to represent the Cost of traversing an edge, and the distance of a Node
pub type Cost = usize;
