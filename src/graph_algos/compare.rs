use std::{hash::Hash, fmt::Debug};
use num_traits::Float;
use num_traits::float::TotalOrder;

use crate::errors::SearchError;
use super::{Coordinates, Graph, SearchResult, Strategy, path_cost};


/// Side by side results of both strategies on the same inputs
#[derive(Clone, Debug, PartialEq)]
pub struct Comparison<N> {
    pub a_star: SearchResult<N>,
    pub greedy: SearchResult<N>,
}

impl<N> Comparison<N>
where
    N: Eq + Hash + Debug,
{
    /// Route lengths as (a*, greedy), None where no route was found
    pub fn costs<T: Float>(&self, coordinates: &Coordinates<N, T>) -> Result<(Option<T>, Option<T>), SearchError> {
        let cost = |result: &SearchResult<N>| -> Result<Option<T>, SearchError> {
            result.path.as_deref().map(|path| path_cost(coordinates, path)).transpose()
        };
        Ok((cost(&self.a_star)?, cost(&self.greedy)?))
    }
}


/// Run A* then Greedy Best-First from start to goal
/// The inputs are only read, both runs see the same graph
pub fn compare<N, T>(graph: &Graph<N>, coordinates: &Coordinates<N, T>, start: &N, goal: &N) -> Result<Comparison<N>, SearchError>
where
    N: Eq + Hash + Ord + Clone + Debug,
    T: Float + TotalOrder,
{
    Ok(Comparison {
        a_star: Strategy::AStar.search(graph, coordinates, start, goal)?,
        greedy: Strategy::GreedyBestFirst.search(graph, coordinates, start, goal)?,
    })
}
