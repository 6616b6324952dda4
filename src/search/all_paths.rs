use super::{Cost, SearchNode};
use crate::errors::{SearchError, SearchResult};
use crate::utils::{debug, trace};
use hashbrown::{HashMap, HashSet};
use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;
use std::hash::Hash;

/// The result of [`dijkstra_all_paths`]: the shortest distance and every Path that achieves it.
///
/// Each Path is stored as the set of states it passes through, from a starting position to a Goal.
/// States shared by several Paths appear in each of their sets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPaths<V: Eq + Hash> {
    /// the distance from the closest starting position to the closest Goal
    pub distance: Cost,
    /// one set of states per distinct shortest Path
    pub paths: Vec<HashSet<V>>,
}

impl<V: Eq + Hash> ShortestPaths<V> {
    /// The number of distinct shortest Paths
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// `true` if no Path was found
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// An Iterator over the Paths
    pub fn iter(&self) -> std::slice::Iter<HashSet<V>> {
        self.paths.iter()
    }
}

impl<V: Clone + Eq + Hash> ShortestPaths<V> {
    /// Every state that lies on at least one shortest Path.
    pub fn values(&self) -> HashSet<V> {
        self.paths.iter().flatten().cloned().collect()
    }
}

/// Searches an implicit Graph like [`dijkstra_search`](super::dijkstra_search), but finds every
/// shortest Path instead of just the shortest distance.
///
/// The Arguments have the same meaning as for [`dijkstra_search`](super::dijkstra_search).
///
/// Instead of stopping at the first Goal, the search keeps going until every Node that is not
/// farther away than that Goal has been expanded, remembering all predecessors of a Node that reach it
/// at its shortest distance. Goals themselves are not expanded.
///
/// ## Examples
/// ```
/// # use puzzle_paths::search::{dijkstra_all_paths, SearchNode};
/// //   B
/// //  / \
/// // A   D
/// //  \ /
/// //   C
/// // all edges cost 1
/// let edges = |node: &SearchNode<char>| match node.value {
///     'A' => vec![SearchNode::new('B', 1), SearchNode::new('C', 1)],
///     'B' | 'C' => vec![SearchNode::new('D', 1)],
///     _ => vec![],
/// };
///
/// let result = dijkstra_all_paths(['A'], edges, |node| node.value == 'D').unwrap();
///
/// assert_eq!(result.distance, 2);
/// assert_eq!(result.len(), 2);
/// assert_eq!(result.values().len(), 4);
/// ```
///
/// ## Returns
/// the [`ShortestPaths`], or [`SearchError::Unreachable`] if no Goal can be reached.
///
/// Note that the number of shortest Paths can grow exponentially with the size of the Graph.
/// Every one of them is listed.
pub fn dijkstra_all_paths<V, I>(
    starting_positions: impl IntoIterator<Item = V>,
    evaluate_adjacency: impl FnMut(&SearchNode<V>) -> I,
    terminates: impl FnMut(&SearchNode<V>) -> bool,
) -> SearchResult<ShortestPaths<V>>
where
    V: Clone + Eq + Hash,
    I: IntoIterator<Item = SearchNode<V>>,
{
    dijkstra_all_paths_with(
        starting_positions,
        evaluate_adjacency,
        |_, candidate| candidate,
        terminates,
    )
}

/// Same as [`dijkstra_all_paths`], with the `process_node` step of
/// [`dijkstra_search_with`](super::dijkstra_search_with).
pub fn dijkstra_all_paths_with<V, I>(
    starting_positions: impl IntoIterator<Item = V>,
    mut evaluate_adjacency: impl FnMut(&SearchNode<V>) -> I,
    mut process_node: impl FnMut(&SearchNode<V>, SearchNode<V>) -> SearchNode<V>,
    mut terminates: impl FnMut(&SearchNode<V>) -> bool,
) -> SearchResult<ShortestPaths<V>>
where
    V: Clone + Eq + Hash,
    I: IntoIterator<Item = SearchNode<V>>,
{
    let mut distances: HashMap<V, Cost> = HashMap::new();
    let mut next = BinaryHeap::new();
    for start in starting_positions {
        if distances.insert(start.clone(), 0).is_none() {
            next.push(Reverse(SearchNode::new(start, 0)));
        }
    }
    if next.is_empty() {
        return Err(SearchError::NoStartingPositions);
    }
    debug!("dijkstra_all_paths from {} starting positions", next.len());

    let starts: HashSet<V> = distances.keys().cloned().collect();
    let mut predecessors: HashMap<V, HashSet<V>> = HashMap::new();
    let mut shortest_distance: Option<Cost> = None;
    let mut goals = Vec::new();
    let mut expanded = 0usize;

    while let Some(Reverse(current)) = next.pop() {
        if shortest_distance.map_or(false, |shortest| current.distance > shortest) {
            break;
        }
        if distances
            .get(&current.value)
            .map_or(false, |&best| current.distance > best)
        {
            continue;
        }

        if terminates(&current) {
            if shortest_distance.is_none() {
                shortest_distance = Some(current.distance);
            }
            goals.push(current.value);
            continue;
        }

        expanded += 1;
        trace!("expanding node at distance {}", current.distance);

        for adjacent in evaluate_adjacency(&current) {
            let evaluated = process_node(&current, adjacent);
            let other_cost = current.distance.saturating_add(evaluated.distance);

            match distances
                .get(&evaluated.value)
                .map(|&prev_cost| other_cost.cmp(&prev_cost))
            {
                Some(Ordering::Greater) => {}
                // another way to reach the Node at the same cost. The Node is already queued
                // or expanded with exactly this distance, so only the predecessor is new.
                Some(Ordering::Equal) => {
                    predecessors
                        .entry(evaluated.value)
                        .or_default()
                        .insert(current.value.clone());
                }
                Some(Ordering::Less) | None => {
                    distances.insert(evaluated.value.clone(), other_cost);
                    let previous = predecessors.entry(evaluated.value.clone()).or_default();
                    previous.clear();
                    previous.insert(current.value.clone());
                    next.push(Reverse(evaluated.with_distance(other_cost)));
                }
            }
        }
    }

    let Some(distance) = shortest_distance else {
        debug!(
            "dijkstra_all_paths found no goal after expanding {} nodes",
            expanded
        );
        return Err(SearchError::Unreachable);
    };

    let mut paths = Vec::new();
    for goal in goals.iter() {
        let mut chain = HashSet::new();
        collect_paths(goal, &predecessors, &starts, &mut chain, &mut paths);
    }
    debug!(
        "dijkstra_all_paths found {} paths of distance {} after expanding {} nodes",
        paths.len(),
        distance,
        expanded
    );

    Ok(ShortestPaths { distance, paths })
}

/// Walks the predecessors backward from `value` and records one set per chain that ends at a start.
///
/// `chain` holds the states between `value` and the Goal. A predecessor already in it means a cycle
/// of zero-weight edges, which is not followed.
fn collect_paths<V: Clone + Eq + Hash>(
    value: &V,
    predecessors: &HashMap<V, HashSet<V>>,
    starts: &HashSet<V>,
    chain: &mut HashSet<V>,
    paths: &mut Vec<HashSet<V>>,
) {
    if !chain.insert(value.clone()) {
        return;
    }

    match predecessors.get(value) {
        Some(previous) if !starts.contains(value) => {
            for prev in previous.iter() {
                collect_paths(prev, predecessors, starts, chain, paths);
            }
        }
        _ => paths.push(chain.clone()),
    }

    chain.remove(value);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(node: &SearchNode<i32>) -> Vec<SearchNode<i32>> {
        vec![
            SearchNode::new(node.value - 1, 1),
            SearchNode::new(node.value + 1, 1),
        ]
    }

    fn set<V: Eq + Hash>(values: impl IntoIterator<Item = V>) -> HashSet<V> {
        values.into_iter().collect()
    }

    #[test]
    fn single_path() {
        let result = dijkstra_all_paths([0], line, |node| node.value == 3).unwrap();
        assert_eq!(result.distance, 3);
        assert_eq!(result.paths, vec![set([0, 1, 2, 3])]);
    }

    #[test]
    fn diamond() {
        // 0 -> 1 -> 3 and 0 -> 2 -> 3 tie, 0 -> 3 directly is more expensive
        let edges = |node: &SearchNode<u8>| match node.value {
            0 => vec![
                SearchNode::new(1, 2),
                SearchNode::new(2, 1),
                SearchNode::new(3, 5),
            ],
            1 => vec![SearchNode::new(3, 2)],
            2 => vec![SearchNode::new(3, 3)],
            _ => vec![],
        };
        let result = dijkstra_all_paths([0], edges, |node| node.value == 3).unwrap();
        assert_eq!(result.distance, 4);
        assert_eq!(result.len(), 2);
        assert!(result.paths.contains(&set([0, 1, 3])));
        assert!(result.paths.contains(&set([0, 2, 3])));
        assert_eq!(result.values(), set([0, 1, 2, 3]));
    }

    #[test]
    fn several_goals_at_the_same_distance() {
        let result = dijkstra_all_paths([0], line, |node| node.value.abs() == 2).unwrap();
        assert_eq!(result.distance, 2);
        assert_eq!(result.len(), 2);
        assert!(result.paths.contains(&set([0, 1, 2])));
        assert!(result.paths.contains(&set([0, -1, -2])));
    }

    #[test]
    fn farther_goals_are_ignored() {
        let result = dijkstra_all_paths([0], line, |node| node.value == 1 || node.value == -2)
            .unwrap();
        assert_eq!(result.distance, 1);
        assert_eq!(result.paths, vec![set([0, 1])]);
    }

    #[test]
    fn accessors_without_clone() {
        #[derive(Debug, PartialEq, Eq, Hash)]
        struct Token(u8);

        let paths = ShortestPaths {
            distance: 3,
            paths: vec![[Token(0), Token(1)].into_iter().collect()],
        };
        assert_eq!(paths.len(), 1);
        assert!(!paths.is_empty());
        assert!(paths.iter().all(|path| path.contains(&Token(1))));
    }

    #[test]
    fn start_is_goal() {
        let result = dijkstra_all_paths([5], line, |node| node.value == 5).unwrap();
        assert_eq!(result.distance, 0);
        assert_eq!(result.paths, vec![set([5])]);
    }

    #[test]
    fn several_starts() {
        let result = dijkstra_all_paths([-2, 2, 9], line, |node| node.value == 0).unwrap();
        assert_eq!(result.distance, 2);
        assert_eq!(result.len(), 2);
        assert_eq!(result.values(), set([-2, -1, 0, 1, 2]));
    }

    #[test]
    fn unreachable() {
        let edges = |node: &SearchNode<u8>| match node.value {
            0 => vec![SearchNode::new(1, 1)],
            _ => vec![],
        };
        let result = dijkstra_all_paths([0], edges, |node| node.value == 2);
        assert_eq!(result, Err(SearchError::Unreachable));

        let result = dijkstra_all_paths(Vec::<u8>::new(), edges, |_| true);
        assert_eq!(result, Err(SearchError::NoStartingPositions));
    }

    #[test]
    fn zero_weight_cycle() {
        // 1 and 2 are connected both ways at no cost
        let edges = |node: &SearchNode<u8>| match node.value {
            0 => vec![SearchNode::new(1, 1), SearchNode::new(2, 1)],
            1 => vec![SearchNode::new(2, 0), SearchNode::new(3, 1)],
            2 => vec![SearchNode::new(1, 0)],
            _ => vec![],
        };
        let result = dijkstra_all_paths([0], edges, |node| node.value == 3).unwrap();
        assert_eq!(result.distance, 2);
        assert_eq!(result.len(), 2);
        assert!(result.paths.contains(&set([0, 1, 3])));
        assert!(result.paths.contains(&set([0, 2, 1, 3])));
    }

    #[test]
    fn zero_weight_cycle_through_start() {
        let edges = |node: &SearchNode<u8>| match node.value {
            0 => vec![SearchNode::new(1, 0)],
            1 => vec![SearchNode::new(0, 0), SearchNode::new(2, 1)],
            _ => vec![],
        };
        let result = dijkstra_all_paths([0], edges, |node| node.value == 2).unwrap();
        assert_eq!(result.distance, 1);
        assert_eq!(result.paths, vec![set([0, 1, 2])]);
    }
}
