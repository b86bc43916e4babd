use std::{hash::Hash, fmt::Debug};
use num_traits::Float;

use crate::errors::SearchError;
use super::{Coordinates, position};


/// Straight-line (Euclidean) estimate of the remaining cost from node to goal
/// Admissible and consistent as long as edge costs are the euclidean distances
/// between their endpoints, which is how both searches price edges
pub fn heuristic<N, T>(node: &N, goal: &N, coordinates: &Coordinates<N, T>) -> Result<T, SearchError>
where
    N: Eq + Hash + Debug,
    T: Float,
{
    let from = position(coordinates, node)?;
    let to = position(coordinates, goal)?;
    Ok(from.distance(to))
}
