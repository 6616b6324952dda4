use super::{Cost, SearchNode};
use crate::errors::{SearchError, SearchResult};
use crate::utils::{debug, trace};
use hashbrown::{HashMap, HashSet};
use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::hash::Hash;

/// Searches an implicit Graph using [Dijkstra's Algorithm](https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm)
/// and returns the distance to the closest Node accepted by `terminates`.
///
/// The Generic type Parameter `V` is the state of a Node. It may be a Number, a Grid position, a
/// position together with a facing direction, ... as long as it can be compared, hashed and cloned.
/// Two Nodes are the same Node exactly when their states are equal, so anything that influences
/// which moves are possible from a Node has to be part of `V`.
///
/// ## Examples
/// Basic usage:
/// ```
/// # use puzzle_paths::search::{dijkstra_search, SearchNode};
/// # use puzzle_paths::errors::SearchError;
/// // A     B--2--E
/// // |\
/// // | \
/// // 1  9
/// // |   \
/// // |    \
/// // C--6--D
/// let (A, B, C, D, E) = (0, 1, 2, 3, 4);
/// let cost_matrix: [[i32; 5]; 5] = [
/// //    A,  B,  C,  D,  E
///     [-1, -1,  1,  9, -1], // A
///     [-1, -1, -1, -1,  2], // B
///     [ 1, -1, -1,  6, -1], // C
///     [ 9, -1,  6, -1, -1], // D
///     [-1,  2, -1, -1, -1], // E
/// ];
/// let neighbors = |node: &SearchNode<usize>| {
///     cost_matrix[node.value]
///         .iter()
///         .enumerate()
///         .filter(|&(_, cost)| *cost != -1)
///         .map(|(id, cost)| SearchNode::new(id, *cost as usize))
///         .collect::<Vec<_>>()
/// };
///
/// let distance = dijkstra_search([A], neighbors, |node| node.value == D);
/// assert_eq!(distance, Ok(7));
///
/// // E cannot be reached from A
/// let distance = dijkstra_search([A], neighbors, |node| node.value == E);
/// assert_eq!(distance, Err(SearchError::Unreachable));
/// ```
///
/// ## Arguments
/// - `starting_positions` - the states to start from. All of them start at distance 0.
/// - `evaluate_adjacency` - a Function that takes the Node currently being expanded and returns all
///     Nodes reachable from it. The `distance` of each returned Node is the weight of the edge
///     leading to it, **not** its total distance.
/// - `terminates` - a Function that decides if a Node is a Goal. Nodes are checked in increasing
///     order of distance, so the first Node it accepts is a closest one.
///
/// ## Returns
/// the distance to the closest Goal, or [`SearchError::Unreachable`] if every reachable Node has
/// been expanded without finding one.
///
/// See [`dijkstra_search_with`] to update the state of a neighbor based on the Node it was reached from.
pub fn dijkstra_search<V, I>(
    starting_positions: impl IntoIterator<Item = V>,
    evaluate_adjacency: impl FnMut(&SearchNode<V>) -> I,
    terminates: impl FnMut(&SearchNode<V>) -> bool,
) -> SearchResult<Cost>
where
    V: Clone + Eq + Hash,
    I: IntoIterator<Item = SearchNode<V>>,
{
    dijkstra_search_with(
        starting_positions,
        evaluate_adjacency,
        |_, candidate| candidate,
        terminates,
    )
}

/// Same as [`dijkstra_search`], with an additional step for every neighbor.
///
/// `process_node` is called with the Node being expanded and each Node that `evaluate_adjacency`
/// returned for it, before the neighbor is considered for the frontier. Whatever it returns
/// replaces the neighbor, including the edge weight. This is the place to derive state that
/// depends on the path taken, like the number of consecutive steps in the same direction:
/// ```
/// # use puzzle_paths::search::{dijkstra_search_with, SearchNode};
/// // walk along a line, but never more than 2 steps without a rest
/// #[derive(Clone, PartialEq, Eq, Hash)]
/// struct Walker {
///     position: i32,
///     steps: u8,
/// }
///
/// let distance = dijkstra_search_with(
///     [Walker { position: 0, steps: 0 }],
///     |node| {
///         let mut next = vec![SearchNode::new(Walker { position: node.value.position, steps: 0 }, 5)];
///         if node.value.steps < 2 {
///             next.push(SearchNode::new(Walker { position: node.value.position + 1, steps: 0 }, 1));
///         }
///         next
///     },
///     |current, candidate| {
///         let moved = candidate.value.position != current.value.position;
///         let steps = if moved { current.value.steps + 1 } else { 0 };
///         let position = candidate.value.position;
///         candidate.with_value(Walker { position, steps })
///     },
///     |node| node.value.position == 5,
/// );
/// // 5 steps and 2 rests
/// assert_eq!(distance, Ok(5 + 2 * 5));
/// ```
pub fn dijkstra_search_with<V, I>(
    starting_positions: impl IntoIterator<Item = V>,
    mut evaluate_adjacency: impl FnMut(&SearchNode<V>) -> I,
    mut process_node: impl FnMut(&SearchNode<V>, SearchNode<V>) -> SearchNode<V>,
    mut terminates: impl FnMut(&SearchNode<V>) -> bool,
) -> SearchResult<Cost>
where
    V: Clone + Eq + Hash,
    I: IntoIterator<Item = SearchNode<V>>,
{
    let mut next: BinaryHeap<_> = starting_positions
        .into_iter()
        .map(|start| Reverse(SearchNode::new(start, 0)))
        .collect();
    if next.is_empty() {
        return Err(SearchError::NoStartingPositions);
    }
    debug!("dijkstra_search from {} starting positions", next.len());

    let mut distances: HashMap<V, Cost> = HashMap::new();
    let mut settled: HashSet<V> = HashSet::new();
    let mut expanded = 0usize;

    while let Some(Reverse(current)) = next.pop() {
        // the frontier has no decrease-key, so outdated copies of a Node can still be queued
        if !settled.insert(current.value.clone()) {
            continue;
        }

        if terminates(&current) {
            debug!(
                "dijkstra_search reached a goal at distance {} after expanding {} nodes",
                current.distance,
                expanded
            );
            return Ok(current.distance);
        }

        expanded += 1;
        trace!("expanding node at distance {}", current.distance);

        for adjacent in evaluate_adjacency(&current) {
            let evaluated = process_node(&current, adjacent);
            if settled.contains(&evaluated.value) {
                continue;
            }

            let other_cost = current.distance.saturating_add(evaluated.distance);

            let mut needs_visit = true;
            if let Some(prev_cost) = distances.get_mut(&evaluated.value) {
                if *prev_cost > other_cost {
                    *prev_cost = other_cost;
                } else {
                    needs_visit = false;
                }
            } else {
                distances.insert(evaluated.value.clone(), other_cost);
            }

            if needs_visit {
                next.push(Reverse(evaluated.with_distance(other_cost)));
            }
        }
    }

    debug!(
        "dijkstra_search found no goal after expanding {} nodes",
        expanded
    );
    Err(SearchError::Unreachable)
}
