use std::{hash::Hash, fmt::Debug};
use num_traits::Float;
use num_traits::float::TotalOrder;

use crate::errors::SearchError;
use crate::geometry::Point;
use super::compare::{Comparison, compare};
use super::{Coordinates, Graph, SearchResult, Strategy, neighbors, path_cost, position};


/// Cities and the roads between them
/// Roads are directed, `add_two_way_road` adds both directions
#[derive(Clone, Debug)]
pub struct RoadMap<N, T = f64> {
    graph: Graph<N>,
    coordinates: Coordinates<N, T>,
}

impl<N, T> Default for RoadMap<N, T> {
    fn default() -> Self {
        Self { graph: Graph::default(), coordinates: Coordinates::default() }
    }
}

impl<N, T> RoadMap<N, T>
where
    N: Eq + Hash + Ord + Clone + Debug,
    T: Float + TotalOrder,
{

    pub fn new() -> Self {
        Self::default()
    }

    /// Build from an existing adjacency graph and coordinate map
    pub fn from_parts(graph: Graph<N>, coordinates: Coordinates<N, T>) -> Self {
        Self { graph, coordinates }
    }

    /// Place (or move) a city
    pub fn add_city(&mut self, city: N, position: impl Into<Point<T>>) -> &mut Self {
        self.coordinates.insert(city, position.into());
        self
    }

    /// One-way road, duplicates are ignored
    pub fn add_road(&mut self, from: N, to: N) -> &mut Self {
        let roads = self.graph.entry(from).or_default();
        if !roads.contains(&to) {
            roads.push(to);
        }
        self
    }

    pub fn add_two_way_road(&mut self, a: N, b: N) -> &mut Self {
        self.add_road(a.clone(), b.clone());
        self.add_road(b, a)
    }

    pub fn neighbors(&self, city: &N) -> &[N] {
        neighbors(&self.graph, city)
    }

    pub fn position(&self, city: &N) -> Result<&Point<T>, SearchError> {
        position(&self.coordinates, city)
    }

    pub fn graph(&self) -> &Graph<N> {
        &self.graph
    }

    pub fn coordinates(&self) -> &Coordinates<N, T> {
        &self.coordinates
    }

    pub fn search(&self, strategy: Strategy, start: &N, goal: &N) -> Result<SearchResult<N>, SearchError> {
        strategy.search(&self.graph, &self.coordinates, start, goal)
    }

    pub fn a_star(&self, start: &N, goal: &N) -> Result<SearchResult<N>, SearchError> {
        self.search(Strategy::AStar, start, goal)
    }

    pub fn greedy_best_first(&self, start: &N, goal: &N) -> Result<SearchResult<N>, SearchError> {
        self.search(Strategy::GreedyBestFirst, start, goal)
    }

    pub fn compare(&self, start: &N, goal: &N) -> Result<Comparison<N>, SearchError> {
        compare(&self.graph, &self.coordinates, start, goal)
    }

    pub fn path_cost(&self, path: &[N]) -> Result<T, SearchError> {
        path_cost(&self.coordinates, path)
    }
}
