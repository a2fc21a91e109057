//! Breadth-first two-colouring.
//!
//! The check starts at a source vertex, gives it [`Colour::A`] and colours every vertex
//! discovered from a vertex $u$ with the opposite colour of $u$. As soon as an entry
//! $(u,v)$ joins two vertices of the same colour the graph cannot be bipartite and the
//! traversal stops.
//!
//! Only the vertices reachable from the source are coloured. Vertices in other components
//! appear in neither side of the returned partition and are *not* checked:
//!
//! ```rust
//! use bigraph::graph::AdjacencyMatrix;
//! use bigraph::bipartite::*;
//!
//! // A 4-cycle plus an isolated triangle on 4,5,6
//! let graph = AdjacencyMatrix::cycle(4);
//! let graph = AdjacencyMatrix::from_edges(7, graph.edges().chain(vec![(4,5),(5,6),(4,6)]));
//!
//! let partition = check_bipartite(&graph, 0).unwrap();
//! assert_eq!(partition, Partition::Bipartite { colour_a: vec![0,2], colour_b: vec![1,3] });
//!
//! let partition = check_bipartite(&graph, 4).unwrap();
//! assert_eq!(partition, Partition::NotBipartite);
//! ```

use std::collections::VecDeque;

use tracing::{debug, trace};

use crate::error::{BipartiteError, Result};
use crate::graph::{AdjacencyMatrix, Vertex};

/// The two colours of a two-colouring. The source vertex always receives `A`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Colour {
    A,
    B
}

impl Colour {
    pub fn opposite(self) -> Colour {
        match self {
            Colour::A => Colour::B,
            Colour::B => Colour::A
        }
    }
}

/// Outcome of a bipartiteness check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Partition {
    /// The component of the source is bipartite. Both sides are sorted in
    /// ascending order; `colour_a` contains the source.
    Bipartite { colour_a: Vec<Vertex>, colour_b: Vec<Vertex> },
    /// Some entry joins two vertices of the same colour.
    NotBipartite
}

impl Partition {
    fn from_colours(colours:&[Option<Colour>]) -> Partition {
        let mut colour_a = Vec::new();
        let mut colour_b = Vec::new();
        for (v, colour) in colours.iter().enumerate() {
            match colour {
                Some(Colour::A) => colour_a.push(v),
                Some(Colour::B) => colour_b.push(v),
                None => {}
            }
        }
        Partition::Bipartite { colour_a, colour_b }
    }

    pub fn is_bipartite(&self) -> bool {
        matches!(self, Partition::Bipartite { .. })
    }

    /// Returns both sides of the partition, or `None` if the graph is not bipartite.
    pub fn sides(&self) -> Option<(&[Vertex], &[Vertex])> {
        match self {
            Partition::Bipartite { colour_a, colour_b } => Some((colour_a, colour_b)),
            Partition::NotBipartite => None
        }
    }

    /// Returns the colour of `v`, or `None` if `v` was not reached (or the
    /// graph is not bipartite).
    pub fn colour_of(&self, v:Vertex) -> Option<Colour> {
        let (colour_a, colour_b) = self.sides()?;
        if colour_a.binary_search(&v).is_ok() {
            Some(Colour::A)
        } else if colour_b.binary_search(&v).is_ok() {
            Some(Colour::B)
        } else {
            None
        }
    }

    /// Number of vertices that received a colour.
    pub fn num_coloured(&self) -> usize {
        self.sides().map_or(0, |(a, b)| a.len() + b.len())
    }
}

/// Decides whether the component of `graph` reachable from `source` is bipartite.
///
/// Vertices are discovered in breadth-first order and the out-neighbours of each
/// vertex are scanned in ascending order. The check fails with
/// [`BipartiteError::InvalidShape`] if the matrix is not square and with
/// [`BipartiteError::InvalidSource`] if `source` is not a vertex of `graph`; in
/// particular every source is invalid for the empty graph.
///
/// ```rust
/// use bigraph::graph::AdjacencyMatrix;
/// use bigraph::bipartite::*;
///
/// let triangle = AdjacencyMatrix::cycle(3);
/// assert_eq!(check_bipartite(&triangle, 0).unwrap(), Partition::NotBipartite);
/// assert!(check_bipartite(&triangle, 3).is_err());
/// ```
pub fn check_bipartite(graph:&AdjacencyMatrix, source:Vertex) -> Result<Partition> {
    graph.check_shape()?;
    let n = graph.num_vertices();
    if source >= n {
        return Err(BipartiteError::InvalidSource { vertex: source, n })
    }

    debug!(n, source, "starting two-colouring");

    let mut colours:Vec<Option<Colour>> = vec![None; n];
    colours[source] = Some(Colour::A);

    let mut queue = VecDeque::new();
    queue.push_back(source);

    while let Some(u) = queue.pop_front() {
        // Every vertex in the queue has been coloured before it was pushed.
        let Some(colour) = colours[u] else { continue };

        for v in graph.neighbours(u) {
            match colours[v] {
                None => {
                    trace!(vertex = v, parent = u, colour = ?colour.opposite(), "colouring");
                    colours[v] = Some(colour.opposite());
                    queue.push_back(v);
                }
                Some(other) if other == colour => {
                    debug!(u, v, "entry joins two vertices of the same colour");
                    return Ok(Partition::NotBipartite)
                }
                Some(_) => {}
            }
        }
    }

    let res = Partition::from_colours(&colours);
    debug!(coloured = res.num_coloured(), n, "two-colouring complete");
    Ok(res)
}


//  #######
//     #    ######  ####  #####  ####
//     #    #      #        #   #
//     #    #####   ####    #    ####
//     #    #           #   #        #
//     #    #      #    #   #   #    #
//     #    ######  ####    #    ####

#[cfg(test)]
mod test {
    use super::*;
    use crate::algorithms::GraphAlgorithms;

    use itertools::Itertools;
    use rand::prelude::*;
    use rand_chacha::ChaCha8Rng;

    fn sides(partition:&Partition) -> (Vec<Vertex>, Vec<Vertex>) {
        let (a, b) = partition.sides().expect("graph should be bipartite");
        (a.to_vec(), b.to_vec())
    }

    #[test]
    fn four_cycle() {
        let G = AdjacencyMatrix::from_edges(4, vec![(0,1),(1,2),(2,3),(3,0)]);
        let res = check_bipartite(&G, 0).unwrap();
        assert_eq!(res, Partition::Bipartite { colour_a: vec![0,2], colour_b: vec![1,3] });
        assert_eq!(res.colour_of(2), Some(Colour::A));
        assert_eq!(res.colour_of(3), Some(Colour::B));
    }

    #[test]
    fn triangle() {
        let G = AdjacencyMatrix::from_edges(3, vec![(0,1),(1,2),(2,0)]);
        let res = check_bipartite(&G, 0).unwrap();
        assert_eq!(res, Partition::NotBipartite);
        assert!(!res.is_bipartite());
        assert_eq!(res.colour_of(0), None);
        assert_eq!(res.num_coloured(), 0);
    }

    #[test]
    fn single_vertex() {
        let G = AdjacencyMatrix::empty(1);
        let res = check_bipartite(&G, 0).unwrap();
        assert_eq!(res, Partition::Bipartite { colour_a: vec![0], colour_b: vec![] });
    }

    #[test]
    fn unreached_vertices() {
        let G = AdjacencyMatrix::from_arcs(5, vec![(0,1),(1,0)]);
        let res = check_bipartite(&G, 0).unwrap();
        assert_eq!(res, Partition::Bipartite { colour_a: vec![0], colour_b: vec![1] });
        for v in 2..5 {
            assert_eq!(res.colour_of(v), None);
        }
    }

    #[test]
    fn no_edges() {
        let G = AdjacencyMatrix::empty(6);
        for source in G.vertices() {
            let res = check_bipartite(&G, source).unwrap();
            assert_eq!(res, Partition::Bipartite { colour_a: vec![source], colour_b: vec![] });
        }
    }

    #[test]
    fn invalid_source() {
        let G = AdjacencyMatrix::cycle(4);
        match check_bipartite(&G, 4) {
            Err(BipartiteError::InvalidSource { vertex: 4, n: 4 }) => {},
            other => panic!("unexpected result {other:?}")
        }
        assert!(check_bipartite(&G, usize::MAX).is_err());

        let G = AdjacencyMatrix::empty(0);
        match check_bipartite(&G, 0) {
            Err(BipartiteError::InvalidSource { vertex: 0, n: 0 }) => {},
            other => panic!("unexpected result {other:?}")
        }
    }

    #[test]
    fn self_loops() {
        let mut G = AdjacencyMatrix::path(4);
        G.add_arc(3, 3);
        assert_eq!(check_bipartite(&G, 0).unwrap(), Partition::NotBipartite);

        // The loop sits in a component which is never reached
        let G = AdjacencyMatrix::from_arcs(4, vec![(0,1),(1,0),(3,3)]);
        assert!(check_bipartite(&G, 0).unwrap().is_bipartite());
        assert_eq!(check_bipartite(&G, 3).unwrap(), Partition::NotBipartite);

        let G = AdjacencyMatrix::from_arcs(1, vec![(0,0)]);
        assert_eq!(check_bipartite(&G, 0).unwrap(), Partition::NotBipartite);
    }

    #[test]
    fn directed_entries() {
        // Only row entries of dequeued vertices are followed: 2 -> 0 is never seen from 0.
        let G = AdjacencyMatrix::from_arcs(3, vec![(0,1),(2,0),(2,1)]);
        let res = check_bipartite(&G, 0).unwrap();
        assert_eq!(res, Partition::Bipartite { colour_a: vec![0], colour_b: vec![1] });

        // From 2 both 0 and 1 receive colour B, the entry (0,1) then joins them.
        assert_eq!(check_bipartite(&G, 2).unwrap(), Partition::NotBipartite);
    }

    #[test]
    fn named_graphs() {
        for n in 1..12 {
            assert!(check_bipartite(&AdjacencyMatrix::path(n), 0).unwrap().is_bipartite());
        }
        for n in 3..12 {
            let res = check_bipartite(&AdjacencyMatrix::cycle(n), 0).unwrap();
            assert_eq!(res.is_bipartite(), n % 2 == 0);
        }

        let res = check_bipartite(&AdjacencyMatrix::biclique(2, 3), 4).unwrap();
        assert_eq!(sides(&res), (vec![2,3,4], vec![0,1]));

        assert!(!check_bipartite(&AdjacencyMatrix::clique(3), 1).unwrap().is_bipartite());
    }

    #[test]
    fn deterministic() {
        let G = AdjacencyMatrix::biclique(4, 5);
        let first = check_bipartite(&G, 0).unwrap();
        for _ in 0..10 {
            assert_eq!(check_bipartite(&G, 0).unwrap(), first);
        }
    }

    /// Builds a connected bipartite graph: a Hamiltonian path visiting the vertices in
    /// random order plus random edges between vertices of different parity on that path.
    fn random_bipartite(rng:&mut ChaCha8Rng, n:usize, p:f64) -> (AdjacencyMatrix, Vec<bool>) {
        let mut order = (0..n).collect_vec();
        order.shuffle(rng);

        let mut side = vec![false; n];
        for (i, &v) in order.iter().enumerate() {
            side[v] = i % 2 == 1;
        }

        let mut G = AdjacencyMatrix::from_edges(n, order.iter().cloned().tuple_windows());
        for (u, v) in (0..n).tuple_combinations() {
            if side[u] != side[v] && rng.gen_bool(p) {
                G.add_edge(u, v);
            }
        }
        (G, side)
    }

    #[test]
    fn random_bipartite_graphs() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        for _ in 0..50 {
            let n = rng.gen_range(2..40);
            let (G, side) = random_bipartite(&mut rng, n, 0.2);
            let source = rng.gen_range(0..n);

            let res = check_bipartite(&G, source).unwrap();
            assert!(G.is_two_colouring(&res));
            assert_eq!(res.num_coloured(), n);

            // Colours agree with the hidden sides up to swapping
            let flip = side[source];
            for v in G.vertices() {
                let expected = if side[v] == flip { Colour::A } else { Colour::B };
                assert_eq!(res.colour_of(v), Some(expected));
            }
        }
    }

    #[test]
    fn source_invariance() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..20 {
            let n = rng.gen_range(2..30);
            let (G, _) = random_bipartite(&mut rng, n, 0.3);

            let (a, b) = sides(&check_bipartite(&G, 0).unwrap());
            for source in G.vertices() {
                let (x, y) = sides(&check_bipartite(&G, source).unwrap());
                assert!((x == a && y == b) || (x == b && y == a));
            }
        }
    }

    #[test]
    fn random_odd_cycles() {
        let mut rng = ChaCha8Rng::seed_from_u64(1234);
        for _ in 0..30 {
            let n = rng.gen_range(8..40);
            let (mut G, side) = random_bipartite(&mut rng, n, 0.1);

            // Any edge inside one side closes an odd cycle
            let u = rng.gen_range(0..n);
            let v = (0..n).find(|&v| v != u && side[v] == side[u]).unwrap();
            G.add_edge(u, v);

            let source = rng.gen_range(0..n);
            assert_eq!(check_bipartite(&G, source).unwrap(), Partition::NotBipartite);
        }

        for k in 1..10 {
            let mut labels = (0..2*k+1).collect_vec();
            labels.shuffle(&mut rng);
            let G = AdjacencyMatrix::from_edges(2*k+1,
                        AdjacencyMatrix::cycle(2*k+1).edges().map(|(u,v)| (labels[u], labels[v])));
            assert_eq!(check_bipartite(&G, labels[0]).unwrap(), Partition::NotBipartite);
        }
    }
}
