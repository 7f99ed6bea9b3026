//! An undirected graph over adjacency lists.
//!
//! Each vertex maps to the list of vertices it shares an edge with; an edge
//! is recorded in both endpoints' lists. Vertex lookups hash, edge checks
//! scan the endpoint's list, so the structure suits sparse graphs.
//!
//! # Examples
//!
//! ```
//! use structures::graph::Graph;
//!
//! let mut graph = Graph::new();
//! graph.add_vertex("a")?;
//! graph.add_vertex("b")?;
//! graph.add_edge(&"a", &"b")?;
//!
//! assert_eq!(graph.adj(&"a"), Some(&["b"][..]));
//! assert_eq!(graph.edge_count(), 1);
//! # Ok::<(), structures::Error>(())
//! ```

use std::collections::HashMap;
use std::hash::Hash;

use crate::error::Error;

/// An undirected graph with vertices of type `V`.
pub struct Graph<V> {
    adjacency: HashMap<V, Vec<V>>,
    edge_count: usize,
}

impl<V> Default for Graph<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Graph<V> {
    /// Generates a new graph with no vertices.
    pub fn new() -> Self {
        Self {
            adjacency: HashMap::new(),
            edge_count: 0,
        }
    }

    /// Returns the number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns the number of edges.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }
}

impl<V: Eq + Hash + Clone> Graph<V> {
    /// Adds a vertex with no edges.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`] if the vertex already exists.
    pub fn add_vertex(&mut self, vertex: V) -> Result<(), Error> {
        if self.adjacency.contains_key(&vertex) {
            return Err(Error::InvalidArgument("vertex already exists"));
        }
        self.adjacency.insert(vertex, Vec::new());
        Ok(())
    }

    /// Removes a vertex along with every edge incident to it.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`] if the vertex isn't in the graph.
    pub fn remove_vertex(&mut self, vertex: &V) -> Result<(), Error> {
        let neighbors = self
            .adjacency
            .remove(vertex)
            .ok_or(Error::InvalidArgument("vertex not found"))?;
        self.edge_count -= neighbors.len();
        for neighbor in &neighbors {
            if let Some(adjacent) = self.adjacency.get_mut(neighbor) {
                adjacent.retain(|other| other != vertex);
            }
        }
        Ok(())
    }

    /// Connects two distinct vertices with an edge, recorded on both.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`] if the endpoints are the same vertex, if
    /// either endpoint isn't in the graph, or if the edge already exists.
    pub fn add_edge(&mut self, a: &V, b: &V) -> Result<(), Error> {
        if a == b {
            return Err(Error::InvalidArgument("cannot connect a vertex to itself"));
        }
        if !self.adjacency.contains_key(a) || !self.adjacency.contains_key(b) {
            return Err(Error::InvalidArgument("vertex not found"));
        }
        if self.adjacency[a].contains(b) {
            return Err(Error::InvalidArgument("edge already exists"));
        }

        self.adjacency
            .get_mut(a)
            .expect("membership checked above")
            .push(b.clone());
        self.adjacency
            .get_mut(b)
            .expect("membership checked above")
            .push(a.clone());
        self.edge_count += 1;
        Ok(())
    }

    /// Disconnects two vertices. Returns whether an edge was actually
    /// removed; asking to remove an edge that doesn't exist is not an error.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`] if either endpoint isn't in the graph.
    pub fn remove_edge(&mut self, a: &V, b: &V) -> Result<bool, Error> {
        if !self.adjacency.contains_key(a) || !self.adjacency.contains_key(b) {
            return Err(Error::InvalidArgument("vertex not found"));
        }

        let adjacent_a = self.adjacency.get_mut(a).expect("membership checked above");
        let position = match adjacent_a.iter().position(|other| other == b) {
            Some(position) => position,
            None => return Ok(false),
        };
        adjacent_a.swap_remove(position);

        let adjacent_b = self.adjacency.get_mut(b).expect("membership checked above");
        let position = adjacent_b
            .iter()
            .position(|other| other == a)
            .expect("edges are recorded on both endpoints");
        adjacent_b.swap_remove(position);

        self.edge_count -= 1;
        Ok(true)
    }

    /// Returns the vertices adjacent to the given one, or `None` if the
    /// vertex isn't in the graph.
    pub fn adj(&self, vertex: &V) -> Option<&[V]> {
        self.adjacency.get(vertex).map(|adjacent| adjacent.as_slice())
    }

    /// Iterates over every vertex, in no particular order.
    pub fn vertices(&self) -> impl Iterator<Item = &V> {
        self.adjacency.keys()
    }
}
