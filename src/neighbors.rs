//! A module with the most common Neighborhoods

use crate::geometry::{Direction, Point2D};
use std::fmt::Debug;

/// Defines how a Path can move along the Grid.
///
/// Different Scenarios may have different constraints as to how a Path may be formed.
/// For example if Agents can only move along the 4 cardinal directions, any Paths generated should
/// reflect that by only containing those steps.
///
/// This Trait provides a function to query all neighboring Points of an existing Point and a
/// Heuristic for how long it might take to reach a goal from a Point.
///
/// The Neighborhoods are unbounded. Use [`GridMap::neighbors`](crate::map::GridMap::neighbors)
/// to only get the Points that are actually part of a Map.
///
/// The most common implementations of this Trait are already provided by this Module:
/// - [`ManhattanNeighborhood`] for Agents that can move
/// up, down, left or right
/// - [`MooreNeighborhood`] for Agents that can move
/// up, down, left, right, as well as the 4 diagonals (up-right, ...)
pub trait Neighborhood: Clone + Debug {
    /// Provides a list of Neighbors of a Point
    fn get_all_neighbors(&self, point: Point2D) -> Box<dyn Iterator<Item = Point2D>>;
    /// Gives a Heuristic for how long it takes to reach `goal` from `point`.
    ///
    /// This is usually the Distance between the two Points in the Metric of your Neighborhood.
    fn heuristic(&self, point: Point2D, goal: Point2D) -> usize;
}

/// A Neighborhood for Agents moving along the 4 cardinal directions.
///
/// Also known as [Von Neumann Neighborhood](https://en.wikipedia.org/wiki/Von_Neumann_neighborhood),
/// Manhattan Metric or [Taxicab Geometry](https://en.wikipedia.org/wiki/Taxicab_geometry).
///
/// ```no_code
/// A: Agent, o: reachable in one step
///   o
///   |
/// o-A-o
///   |
///   o
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct ManhattanNeighborhood;

impl Neighborhood for ManhattanNeighborhood {
    fn get_all_neighbors(&self, point: Point2D) -> Box<dyn Iterator<Item = Point2D>> {
        Box::new(Direction::CARDINAL.into_iter().map(move |dir| point.shift(dir)))
    }
    fn heuristic(&self, point: Point2D, goal: Point2D) -> usize {
        point.distance_between(goal) as usize
    }
}

/// A Neighborhood for Agents moving along the 4 cardinal directions and the 4 diagonals.
///
/// Also known as [Moore Neighborhood](https://en.wikipedia.org/wiki/Moore_neighborhood),
/// [Maximum Metric](https://en.wikipedia.org/wiki/Chebyshev_distance) or Chebyshev Metric.
///
/// ```no_code
/// A: Agent, o: reachable in one step
/// o o o
///  \|/
/// o-A-o
///  /|\
/// o o o
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct MooreNeighborhood;

impl Neighborhood for MooreNeighborhood {
    fn get_all_neighbors(&self, point: Point2D) -> Box<dyn Iterator<Item = Point2D>> {
        Box::new(Direction::ALL.into_iter().map(move |dir| point.shift(dir)))
    }
    fn heuristic(&self, point: Point2D, goal: Point2D) -> usize {
        point.chebyshev_distance(goal) as usize
    }
}

#[test]
fn test_manhattan_get_all_neighbors() {
    let neighborhood = ManhattanNeighborhood;
    assert_eq!(
        neighborhood
            .get_all_neighbors(Point2D::new(0, 2))
            .collect::<Vec<_>>(),
        vec![
            Point2D::new(0, 1),
            Point2D::new(1, 2),
            Point2D::new(0, 3),
            Point2D::new(-1, 2)
        ],
    );
}

#[test]
fn test_manhattan_heuristic() {
    let neighborhood = ManhattanNeighborhood;
    assert_eq!(
        neighborhood.heuristic(Point2D::new(3, 1), Point2D::origin()),
        3 + 1
    );
}

#[test]
fn test_moore_get_all_neighbors() {
    let neighborhood = MooreNeighborhood;
    assert_eq!(
        neighborhood
            .get_all_neighbors(Point2D::new(0, 2))
            .collect::<Vec<_>>(),
        vec![
            Point2D::new(0, 1),
            Point2D::new(1, 1),
            Point2D::new(1, 2),
            Point2D::new(1, 3),
            Point2D::new(0, 3),
            Point2D::new(-1, 3),
            Point2D::new(-1, 2),
            Point2D::new(-1, 1),
        ],
    );
}

#[test]
fn test_moore_heuristic() {
    let neighborhood = MooreNeighborhood;
    assert_eq!(
        neighborhood.heuristic(Point2D::new(3, 1), Point2D::origin()),
        3
    );
}
