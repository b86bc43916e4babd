//! Informed search over small road maps
//!
//! Cities are nodes with 2D coordinates, roads are directed edges priced by the
//! straight-line distance between their endpoints. Two searches share one
//! expansion loop:
//! - [`a_star`] orders the frontier by g + h and returns the cheapest route
//! - [`greedy_best_first`] orders by h alone and returns a direct-looking route
//!
//! ```
//! use informed_search::RoadMap;
//!
//! let mut map: RoadMap<&str> = RoadMap::new();
//! map.add_city("A", (0.0, 0.0))
//!     .add_city("B", (2.0, 1.0))
//!     .add_city("C", (4.0, 2.0))
//!     .add_city("D", (5.0, 5.0))
//!     .add_city("E", (1.0, 4.0))
//!     .add_two_way_road("A", "B")
//!     .add_two_way_road("B", "C")
//!     .add_two_way_road("C", "D")
//!     .add_two_way_road("A", "E")
//!     .add_two_way_road("E", "D");
//!
//! let result = map.a_star(&"A", &"D").unwrap();
//! assert_eq!(result.path, Some(vec!["A", "B", "C", "D"]));
//! ```

pub mod errors;
pub mod geometry;
pub mod graph_algos;
mod collections;

pub use collections::FxIndexMap;
pub use errors::SearchError;
pub use geometry::{Point, euclidean};
pub use graph_algos::{Coordinates, Graph, SearchResult, Strategy, path_cost};
pub use graph_algos::a_star::a_star;
pub use graph_algos::greedy::greedy_best_first;
pub use graph_algos::heuristic::heuristic;
pub use graph_algos::compare::{Comparison, compare};
pub use graph_algos::road_map::RoadMap;
