use super::Cost;
use std::cmp::Ordering;

/// A single state in a graph traversed by the searches in this module.
///
/// `value` is the caller's state, usually a position plus whatever else determines where one can
/// go next (facing direction, number of steps taken in a straight line, ...).
///
/// What `distance` means depends on where the Node is seen:
/// - Nodes returned from `evaluate_adjacency` carry the *weight of the edge* leading to them.
/// - Nodes passed to the callbacks by the search carry the *total distance* from the start.
///
/// Nodes are ordered by `distance` only, while `==` also compares `value`. Two Nodes can
/// therefore compare as `Ordering::Equal` without being equal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchNode<V> {
    /// the state
    pub value: V,
    /// the edge weight or total distance, see above
    pub distance: Cost,
}

impl<V> SearchNode<V> {
    /// Creates a new SearchNode
    /// ## Examples
    /// ```
    /// # use puzzle_paths::search::SearchNode;
    /// let node = SearchNode::new('a', 42);
    ///
    /// assert_eq!(node.value, 'a');
    /// assert_eq!(node.distance, 42);
    /// ```
    pub fn new(value: V, distance: Cost) -> SearchNode<V> {
        SearchNode { value, distance }
    }

    /// A copy of this Node with a different value
    pub fn with_value<W>(&self, value: W) -> SearchNode<W> {
        SearchNode::new(value, self.distance)
    }

    /// A Node with the same value and a different distance
    pub fn with_distance(self, distance: Cost) -> SearchNode<V> {
        SearchNode::new(self.value, distance)
    }
}

impl<V: Eq> Ord for SearchNode<V> {
    fn cmp(&self, other: &SearchNode<V>) -> Ordering {
        self.distance.cmp(&other.distance)
    }
}

impl<V: Eq> PartialOrd for SearchNode<V> {
    fn partial_cmp(&self, other: &SearchNode<V>) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
