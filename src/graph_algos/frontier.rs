use std::cmp::Ordering;
use num_traits::Float;
use num_traits::float::TotalOrder;


/// Entry on the search frontier
/// Entries are never updated once pushed, a cheaper route to the same node
/// is pushed as a new entry and the stale one is dropped when popped
#[derive(Debug)]
pub(super) struct Entry<N, T> {
    pub priority: T, // f = g + h for A*, h for greedy
    pub node: N,
    pub path: Vec<N>, // start..=node, owned by this entry
    pub cost: Option<T>, // g, only tracked by A*
    pub seq: u64, // insertion order, final tie-break
}

impl<N: Ord, T: Float + TotalOrder> Ord for Entry<N, T> {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is a max-heap, reverse everything for lowest-first
        // total_cmp ranks NaN above every number, so such entries pop last
        other.priority.total_cmp(&self.priority)
            .then_with(|| other.node.cmp(&self.node))
            .then_with(|| other.seq.cmp(&self.seq))
    }
}
impl<N: Ord, T: Float + TotalOrder> PartialOrd for Entry<N, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl<N: Ord, T: Float + TotalOrder> PartialEq for Entry<N, T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}
impl<N: Ord, T: Float + TotalOrder> Eq for Entry<N, T> {}
