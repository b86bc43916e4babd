use thiserror::Error;


#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// Node is referenced by the graph (or is an endpoint) but has no position
    #[error("no coordinates for node {node}")]
    MissingCoordinate { node: String },
}

impl SearchError {
    pub(crate) fn missing<N: std::fmt::Debug>(node: &N) -> Self {
        SearchError::MissingCoordinate { node: format!("{node:?}") }
    }
}
