use crate::graph::Vertex;

/// Failures reported by matrix construction, loading and the bipartiteness check.
///
/// Note that a graph which turns out not to be bipartite is *not* an error,
/// see [`Partition::NotBipartite`](crate::bipartite::Partition::NotBipartite).
#[derive(Debug, thiserror::Error)]
pub enum BipartiteError {
    /// A row whose length differs from the number of rows.
    #[error("row {row} has {len} entries, expected {expected}")]
    InvalidShape { row: usize, len: usize, expected: usize },

    /// A matrix entry outside of {0,1}.
    #[error("entry ({row}, {col}) is {value}, expected 0 or 1")]
    InvalidEntry { row: usize, col: usize, value: i64 },

    /// Malformed source data: missing size, stray tokens, truncated matrix.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The source vertex lies outside of `[0, n)`.
    #[error("source vertex {vertex} is out of range for a graph with {n} vertices")]
    InvalidSource { vertex: Vertex, n: usize },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, BipartiteError>;
