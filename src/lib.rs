#![allow(non_snake_case)]

//! Bipartiteness testing for graphs given as adjacency matrices.
//!
//! ```rust
//! use bigraph::graph::AdjacencyMatrix;
//! use bigraph::bipartite::Partition;
//!
//! fn main() {
//!     let graph = AdjacencyMatrix::from_rows(&[[0,1,0,1],
//!                                               [1,0,1,0],
//!                                               [0,1,0,1],
//!                                               [1,0,1,0]]).unwrap();
//!
//!     match graph.bipartition(0).unwrap() {
//!         Partition::Bipartite { colour_a, colour_b } => {
//!             assert_eq!(colour_a, vec![0,2]);
//!             assert_eq!(colour_b, vec![1,3]);
//!         }
//!         Partition::NotBipartite => unreachable!()
//!     }
//! }
//! ```
//!
//! Matrices can also be loaded from text or gzipped files, see [`io`], and rendered
//! for the terminal, see [`display`].

pub mod algorithms;
pub mod bipartite;
pub mod display;
pub mod error;
pub mod graph;
pub mod io;

pub use bipartite::{check_bipartite, Colour, Partition};
pub use error::BipartiteError;
pub use graph::AdjacencyMatrix;
