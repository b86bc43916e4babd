pub mod a_star;
pub mod greedy;
pub mod heuristic;
pub mod compare;
pub mod road_map;
mod best_first;
mod frontier;

pub use best_first::Strategy;

use std::{hash::Hash, fmt::Debug, time::Duration};
use num_traits::Float;

use crate::collections::FxIndexMap;
use crate::errors::SearchError;
use crate::geometry::Point;

/// Adjacency graph: node -> ordered neighbors
/// Edges are directed, a node missing as a key has no outgoing edges
pub type Graph<N> = FxIndexMap<N, Vec<N>>;

/// Position of every node on the map
pub type Coordinates<N, T = f64> = FxIndexMap<N, Point<T>>;


/// Outcome of a single search
#[derive(Clone, Debug, PartialEq)]
pub struct SearchResult<N> {
    /// start..=goal, None when the goal is unreachable
    pub path: Option<Vec<N>>,
    /// Number of nodes popped and expanded (stale pops are not counted)
    pub expansions: usize,
    pub elapsed: Duration,
}

impl<N> SearchResult<N> {

    pub fn is_found(&self) -> bool {
        self.path.is_some()
    }

    /// Wall-clock time of the search in milliseconds
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1000.0
    }

    pub fn into_parts(self) -> (Option<Vec<N>>, usize, Duration) {
        (self.path, self.expansions, self.elapsed)
    }
}


/// Lookup a node position, absence is fatal
pub(crate) fn position<'a, N, T>(coordinates: &'a Coordinates<N, T>, node: &N) -> Result<&'a Point<T>, SearchError>
where
    N: Eq + Hash + Debug,
{
    coordinates.get(node).ok_or_else(|| SearchError::missing(node))
}

/// Outgoing neighbors, empty for nodes that are not keys of the graph
pub(crate) fn neighbors<'a, N>(graph: &'a Graph<N>, node: &N) -> &'a [N]
where
    N: Eq + Hash,
{
    graph.get(node).map(Vec::as_slice).unwrap_or(&[])
}

/// Total length of a path - sum of straight-line distances between consecutive nodes
pub fn path_cost<N, T>(coordinates: &Coordinates<N, T>, path: &[N]) -> Result<T, SearchError>
where
    N: Eq + Hash + Debug,
    T: Float,
{
    let mut total = T::zero();
    for pair in path.windows(2) {
        let from = position(coordinates, &pair[0])?;
        let to = position(coordinates, &pair[1])?;
        total = total + from.distance(to);
    }
    // a lone node still has to exist on the map
    if let [only] = path {
        position(coordinates, only)?;
    }
    Ok(total)
}


#[cfg(test)]
pub(crate) mod test_maps {
    use super::*;

    /// Five cities from the demonstration map, all roads two-way
    /// A(0,0) B(2,1) C(4,2) D(5,5) E(1,4); A-B, B-C, C-D, A-E, E-D
    pub(crate) fn five_cities() -> (Graph<&'static str>, Coordinates<&'static str>) {
        let mut coordinates = Coordinates::default();
        for (name, x, y) in [("A", 0.0, 0.0), ("B", 2.0, 1.0), ("C", 4.0, 2.0), ("D", 5.0, 5.0), ("E", 1.0, 4.0)] {
            coordinates.insert(name, Point::new(x, y));
        }

        let mut graph = Graph::default();
        graph.insert("A", vec!["B", "E"]);
        graph.insert("B", vec!["A", "C"]);
        graph.insert("C", vec!["B", "D"]);
        graph.insert("D", vec!["C", "E"]);
        graph.insert("E", vec!["A", "D"]);

        (graph, coordinates)
    }

    /// Random planar cities on a 20x20 square with two-way roads, each pair joined with probability `density`
    pub(crate) fn random_map(rng: &mut impl rand::Rng, cities: u32, density: f64) -> (Graph<u32>, Coordinates<u32>) {
        let mut coordinates = Coordinates::default();
        for city in 0..cities {
            coordinates.insert(city, Point::new(rng.random_range(0.0..20.0), rng.random_range(0.0..20.0)));
        }

        let mut graph: Graph<u32> = Graph::default();
        for a in 0..cities {
            for b in (a + 1)..cities {
                if rng.random_bool(density) {
                    graph.entry(a).or_default().push(b);
                    graph.entry(b).or_default().push(a);
                }
            }
        }

        (graph, coordinates)
    }

    /// Cheapest simple path cost by exhaustive depth-first enumeration, small graphs only
    pub(crate) fn cheapest_route(graph: &Graph<u32>, coordinates: &Coordinates<u32>, start: u32, goal: u32) -> Option<f64> {
        fn walk(graph: &Graph<u32>, coordinates: &Coordinates<u32>, node: u32, goal: u32, cost: f64, on_path: &mut Vec<u32>, best: &mut Option<f64>) {
            if node == goal {
                if best.is_none_or(|b| cost < b) {
                    *best = Some(cost);
                }
                return;
            }
            for &next in neighbors(graph, &node) {
                if on_path.contains(&next) {
                    continue;
                }
                let step = coordinates[&node].distance(&coordinates[&next]);
                on_path.push(next);
                walk(graph, coordinates, next, goal, cost + step, on_path, best);
                on_path.pop();
            }
        }

        let mut best = None;
        walk(graph, coordinates, start, goal, 0.0, &mut vec![start], &mut best);
        best
    }
}
