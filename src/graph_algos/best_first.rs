use std::{collections::BinaryHeap, fmt, hash::Hash, fmt::Debug, time::Instant};
use num_traits::Float;
use num_traits::float::TotalOrder;
use tracing::{debug, trace};

use crate::collections::FxHashSet;
use crate::errors::SearchError;
use super::frontier::Entry;
use super::heuristic::heuristic;
use super::{Coordinates, Graph, SearchResult, neighbors, position};


/// Which informed search drives the frontier
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Priority f = g + h, optimal with the euclidean heuristic
    AStar,
    /// Priority h only, heads straight for the goal but may return a longer route
    GreedyBestFirst,
}

impl Strategy {

    /// Run this strategy from start until goal is popped or the frontier runs dry
    pub fn search<N, T>(self, graph: &Graph<N>, coordinates: &Coordinates<N, T>, start: &N, goal: &N) -> Result<SearchResult<N>, SearchError>
    where
        N: Eq + Hash + Ord + Clone + Debug,
        T: Float + TotalOrder,
    {
        best_first(self, graph, coordinates, start, goal)
    }

    fn initial_cost<T: Float>(self) -> Option<T> {
        match self {
            Strategy::AStar => Some(T::zero()),
            Strategy::GreedyBestFirst => None,
        }
    }

    fn priority<T: Float>(self, cost: Option<T>, h: T) -> T {
        match (self, cost) {
            (Strategy::AStar, Some(g)) => g + h,
            _ => h,
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::AStar => f.write_str("a*"),
            Strategy::GreedyBestFirst => f.write_str("greedy-best-first"),
        }
    }
}


/// Shared expansion loop
/// Duplicates are allowed on the frontier, the closed set filters them on pop.
/// The goal is tested on pop, not on push.
fn best_first<N, T>(strategy: Strategy, graph: &Graph<N>, coordinates: &Coordinates<N, T>, start: &N, goal: &N) -> Result<SearchResult<N>, SearchError>
where
    N: Eq + Hash + Ord + Clone + Debug,
    T: Float + TotalOrder,
{
    let started = Instant::now();

    let mut frontier: BinaryHeap<Entry<N, T>> = BinaryHeap::new();
    let mut closed: FxHashSet<N> = FxHashSet::default();
    let mut expansions = 0;
    let mut seq = 0;

    let cost = strategy.initial_cost();
    frontier.push(Entry {
        priority: strategy.priority(cost, heuristic(start, goal, coordinates)?),
        node: start.clone(),
        path: vec![start.clone()],
        cost,
        seq,
    });

    let mut found = None;
    while let Some(Entry { node, path, cost, .. }) = frontier.pop() {

        // already expanded through a better (or equal) entry
        if closed.contains(&node) {
            trace!(node = ?node, "stale_entry");
            continue;
        }
        expansions += 1;

        if node == *goal {
            found = Some(path);
            break;
        }

        closed.insert(node.clone());

        let here = *position(coordinates, &node)?;
        for neighbor in neighbors(graph, &node) {

            // also drops self-loops, node is already closed
            if closed.contains(neighbor) {
                continue;
            }

            let new_cost = match cost {
                Some(g) => Some(g + here.distance(position(coordinates, neighbor)?)),
                None => None,
            };
            let h = heuristic(neighbor, goal, coordinates)?;

            let mut new_path = path.clone();
            new_path.push(neighbor.clone());

            seq += 1;
            frontier.push(Entry {
                priority: strategy.priority(new_cost, h),
                node: neighbor.clone(),
                path: new_path,
                cost: new_cost,
                seq,
            });
        }
    }

    let result = SearchResult { path: found, expansions, elapsed: started.elapsed() };
    debug!(
        strategy = %strategy,
        expansions,
        found = result.is_found(),
        elapsed_ms = result.elapsed_ms(),
        "search_done"
    );

    Ok(result)
}
