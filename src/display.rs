//! Plain-text rendering of matrices and partitions for the command line.

use std::fmt;

use itertools::Itertools;

use crate::bipartite::Partition;
use crate::graph::AdjacencyMatrix;

/// The matrix as a table with vertex indices along both axes, followed by an empty line.
pub struct MatrixTable<'a>(pub &'a AdjacencyMatrix);

impl fmt::Display for MatrixTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let G = self.0;
        write!(f, " ")?;
        for v in G.vertices() {
            write!(f, "  {v}")?;
        }
        writeln!(f)?;
        for u in G.vertices() {
            write!(f, "{u} ")?;
            for &x in G.row(u) {
                write!(f, " {} ", u8::from(x))?;
            }
            writeln!(f)?;
        }
        writeln!(f)
    }
}

/// All set entries as `{(u, v)(x, y)...}`.
pub struct ArcSet<'a>(pub &'a AdjacencyMatrix);

impl fmt::Display for ArcSet<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (u,v) in self.0.arcs() {
            write!(f, "({u}, {v})")?;
        }
        write!(f, "}}")
    }
}

/// One line `u --> v, w, ` per vertex.
pub struct AdjacencyListing<'a>(pub &'a AdjacencyMatrix);

impl fmt::Display for AdjacencyListing<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let G = self.0;
        for u in G.vertices() {
            write!(f, "{u} --> ")?;
            for v in G.neighbours(u) {
                write!(f, "{v}, ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// The verdict, preceded by both colour classes if the graph is bipartite.
pub struct PartitionReport<'a>(pub &'a Partition);

impl fmt::Display for PartitionReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.sides() {
            Some((red, blue)) => {
                writeln!(f, "Red vertices: {}", red.iter().join(", "))?;
                writeln!(f, "Blue vertices: {}", blue.iter().join(", "))?;
                writeln!(f, "Graph is bipartite")
            }
            None => writeln!(f, "Graph is not bipartite")
        }
    }
}


//  #######
//     #    ######  ####  #####  ####
//     #    #      #        #   #
//     #    #####   ####    #    ####
//     #    #           #   #        #
//     #    #      #    #   #   #    #
//     #    ######  ####    #    ####
