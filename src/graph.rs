//!
//! Graphs in this crate are stored as dense adjacency matrices: for a graph on $n$ vertices
//! the matrix holds $n \times n$ boolean entries and entry $(u,v)$ is set if there is an edge
//! from $u$ to $v$. Vertices are the indices $0, \ldots, n-1$.
//!
//! The matrix does not have to be symmetric. Undirected graphs are best built with
//! [`AdjacencyMatrix::add_edge`] which sets both entries, directed inputs with
//! [`AdjacencyMatrix::add_arc`]. A few named graphs are available as constructors:
//!
//! ```rust
//! use bigraph::graph::*;
//!
//! fn main() {
//!     let graph = AdjacencyMatrix::path(4);
//!     let edges:EdgeSet = vec![(0,1),(1,2),(2,3)].into_iter().collect();
//!     assert_eq!(graph.edges().collect::<EdgeSet>(), edges);
//!
//!     let graph = AdjacencyMatrix::cycle(4);
//!     let edges:EdgeSet = vec![(0,1),(1,2),(2,3),(0,3)].into_iter().collect();
//!     assert_eq!(graph.edges().collect::<EdgeSet>(), edges);
//!
//!     let graph = AdjacencyMatrix::biclique(2,3);
//!     let edges:EdgeSet = vec![(0,2),(0,3),(0,4),(1,2),(1,3),(1,4)].into_iter().collect();
//!     assert_eq!(graph.edges().collect::<EdgeSet>(), edges);
//! }
//! ```
//!
//! Matrices read from untrusted sources go through [`AdjacencyMatrix::from_rows`], which
//! rejects ragged rows and entries other than 0 and 1.

use fxhash::FxHashSet;
use itertools::{iproduct, Itertools};

use crate::bipartite::{check_bipartite, Partition};
use crate::error::{BipartiteError, Result};

pub type Vertex = usize;
pub type Edge = (Vertex, Vertex);
pub type Arc = (Vertex, Vertex);
pub type VertexSet = FxHashSet<Vertex>;
pub type EdgeSet = FxHashSet<Edge>;

/// A square boolean adjacency matrix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacencyMatrix {
    rows: Vec<Vec<bool>>
}

impl AdjacencyMatrix {
    /// Creates a graph on `n` vertices without any edges.
    pub fn empty(n:usize) -> Self {
        AdjacencyMatrix { rows: vec![vec![false; n]; n] }
    }

    /// Builds a matrix from rows of integer entries. Every row must have as many
    /// entries as there are rows and every entry must be 0 or 1.
    ///
    /// ```rust
    /// use bigraph::graph::AdjacencyMatrix;
    ///
    /// let graph = AdjacencyMatrix::from_rows(&[[0,1],[1,0]]).unwrap();
    /// assert!(graph.adjacent(0, 1));
    /// assert!(AdjacencyMatrix::from_rows(&[[0,2],[1,0]]).is_err());
    /// ```
    pub fn from_rows<R>(rows:&[R]) -> Result<Self> where R: AsRef<[i64]> {
        let n = rows.len();
        let mut res = AdjacencyMatrix::empty(n);
        for (u, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != n {
                return Err(BipartiteError::InvalidShape { row: u, len: row.len(), expected: n });
            }
            for (v, &value) in row.iter().enumerate() {
                res.rows[u][v] = match value {
                    0 => false,
                    1 => true,
                    _ => return Err(BipartiteError::InvalidEntry { row: u, col: v, value })
                };
            }
        }

        Ok(res)
    }

    /// Creates a graph on `n` vertices with the undirected edges `edges`. Edges with
    /// an endpoint outside of `0..n` are ignored.
    pub fn from_edges<I>(n:usize, edges:I) -> Self where I: IntoIterator<Item=Edge> {
        let mut res = AdjacencyMatrix::empty(n);
        for (u,v) in edges {
            res.add_edge(u, v);
        }
        res
    }

    /// Creates a graph on `n` vertices which only sets the entries given by `arcs`.
    pub fn from_arcs<I>(n:usize, arcs:I) -> Self where I: IntoIterator<Item=Arc> {
        let mut res = AdjacencyMatrix::empty(n);
        for (u,v) in arcs {
            res.add_arc(u, v);
        }
        res
    }

    /// Generates a path on `n` vertices.
    pub fn path(n:usize) -> Self {
        AdjacencyMatrix::from_edges(n, (0..n).tuple_windows())
    }

    /// Generates a cycle on `n` vertices.
    pub fn cycle(n:usize) -> Self {
        let mut res = AdjacencyMatrix::path(n);
        if n > 1 {
            res.add_edge(0, n-1);
        }
        res
    }

    /// Generates a complete graph on `n` vertices.
    pub fn clique(n:usize) -> Self {
        AdjacencyMatrix::from_edges(n, (0..n).tuple_combinations())
    }

    /// Generates a complete bipartite graph with `s` vertices on the left
    /// and `t` vertices on the right side.
    pub fn biclique(s:usize, t:usize) -> Self {
        AdjacencyMatrix::from_edges(s+t, iproduct!(0..s, s..s+t))
    }

    /*
        Basic properties and queries
    */
    pub fn num_vertices(&self) -> usize {
        self.rows.len()
    }

    /// Returns the number of undirected edges, that is, the number of pairs
    /// $\\{u,v\\}$ for which at least one of the two entries is set.
    pub fn num_edges(&self) -> usize {
        self.edges().count()
    }

    /// Returns the number of set entries.
    pub fn num_arcs(&self) -> usize {
        self.rows.iter().map(|row| row.iter().filter(|&&x| x).count()).sum()
    }

    pub fn contains(&self, u:Vertex) -> bool {
        u < self.num_vertices()
    }

    /// Returns whether entry $(u,v)$ is set. Out-of-range vertices are never adjacent.
    pub fn adjacent(&self, u:Vertex, v:Vertex) -> bool {
        self.rows.get(u).and_then(|row| row.get(v)).copied().unwrap_or(false)
    }

    pub fn has_loop(&self, u:Vertex) -> bool {
        self.adjacent(u, u)
    }

    pub fn is_symmetric(&self) -> bool {
        iproduct!(self.vertices(), self.vertices())
            .all(|(u,v)| self.rows[u][v] == self.rows[v][u])
    }

    /// Verifies that the matrix is square. Matrices built through the constructors
    /// always are.
    pub fn check_shape(&self) -> Result<()> {
        let n = self.num_vertices();
        match self.rows.iter().find_position(|row| row.len() != n) {
            Some((u, row)) => Err(BipartiteError::InvalidShape { row: u, len: row.len(), expected: n }),
            None => Ok(())
        }
    }

    /*
        Iteration and access
    */
    pub fn vertices(&self) -> std::ops::Range<Vertex> {
        0..self.num_vertices()
    }

    pub fn row(&self, u:Vertex) -> &[bool] {
        &self.rows[u]
    }

    /// Iterates over the out-neighbours of `u` in ascending order.
    pub fn neighbours<'a>(&'a self, u:Vertex) -> impl Iterator<Item=Vertex> + 'a {
        self.rows[u].iter().positions(|&x| x)
    }

    /// Iterates over all set entries in row-major order.
    pub fn arcs<'a>(&'a self) -> impl Iterator<Item=Arc> + 'a {
        self.vertices().flat_map(move |u| self.neighbours(u).map(move |v| (u,v)))
    }

    /// Iterates over the undirected edges $(u,v)$, $u \leq v$, in row-major order.
    pub fn edges<'a>(&'a self) -> impl Iterator<Item=Edge> + 'a {
        self.vertices().flat_map(move |u| {
            (u..self.num_vertices())
                .filter(move |&v| self.rows[u][v] || self.rows[v][u])
                .map(move |v| (u,v))
        })
    }

    /*
        Editing
    */

    /// Sets entry $(u,v)$. Returns `false` if the entry was already set or
    /// one of the vertices is not contained in the graph.
    pub fn add_arc(&mut self, u:Vertex, v:Vertex) -> bool {
        if !self.contains(u) || !self.contains(v) || self.rows[u][v] {
            return false
        }
        self.rows[u][v] = true;
        true
    }

    /// Sets entries $(u,v)$ and $(v,u)$. Returns `false` if both were already set
    /// or one of the vertices is not contained in the graph.
    pub fn add_edge(&mut self, u:Vertex, v:Vertex) -> bool {
        let forward = self.add_arc(u, v);
        let backward = self.add_arc(v, u);
        forward || backward
    }

    /// Clears entries $(u,v)$ and $(v,u)$. Returns `false` if neither was set.
    pub fn remove_edge(&mut self, u:Vertex, v:Vertex) -> bool {
        if !self.adjacent(u, v) && !self.adjacent(v, u) {
            return false
        }
        self.rows[u][v] = false;
        self.rows[v][u] = false;
        true
    }

    /// Runs the bipartiteness check from `source`, see [`check_bipartite`].
    pub fn bipartition(&self, source:Vertex) -> Result<Partition> {
        check_bipartite(self, source)
    }
}


//  #######
//     #    ######  ####  #####  ####
//     #    #      #        #   #
//     #    #####   ####    #    ####
//     #    #           #   #        #
//     #    #      #    #   #   #    #
//     #    ######  ####    #    ####
