use std::{hash::Hash, fmt::Debug};
use num_traits::Float;
use num_traits::float::TotalOrder;

use crate::errors::SearchError;
use super::{Coordinates, Graph, SearchResult, Strategy};


/// A* Algorithm
/// https://en.wikipedia.org/wiki/A*_search_algorithm
/// Edge cost is the euclidean distance between the two cities, the heuristic is the
/// straight-line distance to the goal. With both measured the same way the first time
/// the goal is popped its route is the cheapest one.
pub fn a_star<N, T>(graph: &Graph<N>, coordinates: &Coordinates<N, T>, start: &N, goal: &N) -> Result<SearchResult<N>, SearchError>
where
    N: Eq + Hash + Ord + Clone + Debug,
    T: Float + TotalOrder,
{
    Strategy::AStar.search(graph, coordinates, start, goal)
}
