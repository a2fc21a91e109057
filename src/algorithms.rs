use union_find_rs::prelude::*;

use crate::bipartite::Partition;
use crate::graph::*;

pub trait GraphAlgorithms {
    /// Computes the connected components of the graph, treating every set entry
    /// as an undirected edge. Components are ordered by their smallest vertex.
    fn components(&self) -> Vec<VertexSet>;

    /// Tests whether `partition` is a proper two-colouring of the vertices it covers,
    /// meaning that no set entry between two coloured vertices joins the same colour.
    /// Always `false` for [`Partition::NotBipartite`].
    fn is_two_colouring(&self, partition:&Partition) -> bool;

    /// Returns the vertices which received no colour, in ascending order.
    fn uncoloured(&self, partition:&Partition) -> Vec<Vertex>;
}

impl GraphAlgorithms for AdjacencyMatrix {

    #[allow(unused_must_use)]
    fn components(&self) -> Vec<VertexSet> {
        let mut dsets:DisjointSets<Vertex> = DisjointSets::new();

        for v in self.vertices() {
            // This returns a Result<()> but the potential 'error' (adding
            // an element that already exists) will not happen.
            dsets.make_set(v);
        }

        for (u,v) in self.edges() {
            // `union` must only be called on elements in different sets.
            if let (Ok(ru), Ok(rv)) = (dsets.find_set(&u), dsets.find_set(&v)) {
                if ru != rv {
                    dsets.union(&u, &v);
                }
            }
        }

        let mut res:Vec<VertexSet> = Vec::new();
        for comp in dsets {
            res.push(comp.iter().cloned().collect())
        }
        res.sort_by_key(|comp| comp.iter().min().cloned());
        res
    }

    fn is_two_colouring(&self, partition:&Partition) -> bool {
        if !partition.is_bipartite() {
            return false
        }

        self.arcs().all(|(u,v)| {
            match (partition.colour_of(u), partition.colour_of(v)) {
                (Some(cu), Some(cv)) => cu != cv,
                _ => true
            }
        })
    }

    fn uncoloured(&self, partition:&Partition) -> Vec<Vertex> {
        self.vertices().filter(|&v| partition.colour_of(v).is_none()).collect()
    }
}


//  #######
//     #    ######  ####  #####  ####
//     #    #      #        #   #
//     #    #####   ####    #    ####
//     #    #           #   #        #
//     #    #      #    #   #   #    #
//     #    ######  ####    #    ####
