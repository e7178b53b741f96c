//! Directed graph container.
//!
//! Vertices are kept in an insertion-ordered `Vec` with a hash index from vertex id to
//! position, which keeps iteration deterministic. Every vertex owns the list of its outgoing
//! edges, so the `(from, to)` uniqueness check only ever scans a single adjacency list.

mod connectivity;
mod entries;
mod shortest_path;

use crate::error::{Error, Result};
use entries::{EdgeEntry, VertexEntry};
use rustc_hash::FxBuildHasher;

pub use shortest_path::{PredecessorMap, ShortestPaths};

type HashMap<K, V> = hashbrown::HashMap<K, V, FxBuildHasher>;

/// Vertex identifier. Ids are chosen by the caller and need not be contiguous.
pub type VertexId = i32;

/// A directed graph with a payload of type `V` on every vertex and `E` on every edge.
///
/// At most one edge exists per ordered `(from, to)` pair. Cloning produces an independent
/// deep copy; nothing is shared between clones.
#[derive(Debug, Clone)]
pub struct Digraph<V, E> {
    vertices: Vec<VertexEntry<V, E>>,
    vertex_index: HashMap<VertexId, usize>,
    edge_count: usize,
}

impl<V, E> Default for Digraph<V, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V, E> Digraph<V, E> {
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            vertex_index: HashMap::default(),
            edge_count: 0,
        }
    }

    /// Pre-allocate for a known number of vertices.
    pub fn with_capacity(vertex_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            vertex_index: HashMap::with_capacity_and_hasher(vertex_count, FxBuildHasher),
            edge_count: 0,
        }
    }

    fn index_of(&self, vertex: VertexId) -> Result<usize> {
        self.vertex_index
            .get(&vertex)
            .copied()
            .ok_or(Error::UnknownVertex { vertex })
    }

    fn edge_position(&self, from: VertexId, to: VertexId) -> Result<(usize, usize)> {
        let from_ix = self.index_of(from)?;
        self.index_of(to)?;
        let pos = self.vertices[from_ix]
            .out_position(to)
            .ok_or(Error::UnknownEdge { from, to })?;
        Ok((from_ix, pos))
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn contains_vertex(&self, vertex: VertexId) -> bool {
        self.vertex_index.contains_key(&vertex)
    }

    pub fn contains_edge(&self, from: VertexId, to: VertexId) -> bool {
        self.edge_position(from, to).is_ok()
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Number of edges leaving `vertex`.
    pub fn edge_count_from(&self, vertex: VertexId) -> Result<usize> {
        let ix = self.index_of(vertex)?;
        Ok(self.vertices[ix].out.len())
    }

    /// All vertex ids, in insertion order.
    pub fn vertices(&self) -> Vec<VertexId> {
        self.vertices.iter().map(|v| v.id).collect()
    }

    /// Every `(from, to)` pair in the graph, grouped by source vertex.
    pub fn edges(&self) -> Vec<(VertexId, VertexId)> {
        let mut out = Vec::with_capacity(self.edge_count);
        for v in &self.vertices {
            out.extend(v.out.iter().map(|e| (v.id, e.to)));
        }
        out
    }

    /// The `(from, to)` pairs of the edges leaving `vertex`, in insertion order.
    pub fn edges_from(&self, vertex: VertexId) -> Result<Vec<(VertexId, VertexId)>> {
        let ix = self.index_of(vertex)?;
        Ok(self.vertices[ix]
            .out
            .iter()
            .map(|e| (vertex, e.to))
            .collect())
    }

    pub fn successors(&self, vertex: VertexId) -> Result<Vec<VertexId>> {
        let ix = self.index_of(vertex)?;
        Ok(self.vertices[ix].out.iter().map(|e| e.to).collect())
    }

    pub fn vertex_info(&self, vertex: VertexId) -> Result<&V> {
        let ix = self.index_of(vertex)?;
        Ok(&self.vertices[ix].payload)
    }

    pub fn vertex_info_mut(&mut self, vertex: VertexId) -> Result<&mut V> {
        let ix = self.index_of(vertex)?;
        Ok(&mut self.vertices[ix].payload)
    }

    pub fn edge_info(&self, from: VertexId, to: VertexId) -> Result<&E> {
        let (ix, pos) = self.edge_position(from, to)?;
        Ok(&self.vertices[ix].out[pos].payload)
    }

    pub fn edge_info_mut(&mut self, from: VertexId, to: VertexId) -> Result<&mut E> {
        let (ix, pos) = self.edge_position(from, to)?;
        Ok(&mut self.vertices[ix].out[pos].payload)
    }

    /// Insert a new vertex. An existing vertex with the same id is left untouched.
    pub fn add_vertex(&mut self, vertex: VertexId, payload: V) -> Result<()> {
        if self.vertex_index.contains_key(&vertex) {
            return Err(Error::DuplicateVertex { vertex });
        }
        let ix = self.vertices.len();
        self.vertices.push(VertexEntry {
            id: vertex,
            payload,
            out: Vec::new(),
        });
        self.vertex_index.insert(vertex, ix);
        Ok(())
    }

    /// Insert a directed edge. Both endpoints must already exist.
    pub fn add_edge(&mut self, from: VertexId, to: VertexId, payload: E) -> Result<()> {
        let from_ix = self.index_of(from)?;
        self.index_of(to)?;
        let entry = &mut self.vertices[from_ix];
        if entry.out_position(to).is_some() {
            return Err(Error::DuplicateEdge { from, to });
        }
        entry.out.push(EdgeEntry { to, payload });
        self.edge_count += 1;
        Ok(())
    }

    /// Remove a vertex together with every edge entering or leaving it, returning its payload.
    pub fn remove_vertex(&mut self, vertex: VertexId) -> Result<V> {
        let ix = self.index_of(vertex)?;
        self.vertex_index.remove(&vertex);
        let entry = self.vertices.remove(ix);
        for i in ix..self.vertices.len() {
            let id = self.vertices[i].id;
            if let Some(slot) = self.vertex_index.get_mut(&id) {
                *slot = i;
            }
        }

        let mut removed = entry.out.len();
        for v in &mut self.vertices {
            let before = v.out.len();
            v.out.retain(|e| e.to != vertex);
            removed += before - v.out.len();
        }
        self.edge_count -= removed;

        Ok(entry.payload)
    }

    /// Remove exactly the edge `from -> to`, returning its payload.
    pub fn remove_edge(&mut self, from: VertexId, to: VertexId) -> Result<E> {
        let (ix, pos) = self.edge_position(from, to)?;
        let edge = self.vertices[ix].out.remove(pos);
        self.edge_count -= 1;
        Ok(edge.payload)
    }
}
