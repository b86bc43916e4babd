use std::{hash::Hash, fmt::Debug};
use num_traits::Float;
use num_traits::float::TotalOrder;

use crate::errors::SearchError;
use super::{Coordinates, Graph, SearchResult, Strategy};


/// Greedy Best-First Search
/// https://en.wikipedia.org/wiki/Best-first_search
/// Always expands the city closest (in a straight line) to the goal. Routes are
/// heuristically direct but not guaranteed to be the cheapest.
pub fn greedy_best_first<N, T>(graph: &Graph<N>, coordinates: &Coordinates<N, T>, start: &N, goal: &N) -> Result<SearchResult<N>, SearchError>
where
    N: Eq + Hash + Ord + Clone + Debug,
    T: Float + TotalOrder,
{
    Strategy::GreedyBestFirst.search(graph, coordinates, start, goal)
}
