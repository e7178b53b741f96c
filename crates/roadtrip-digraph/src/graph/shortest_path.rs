//! Single-source shortest paths (Dijkstra).
//!
//! The frontier is a binary heap without decrease-key: an improved distance pushes a fresh
//! entry and stale ones are skipped on extraction once their vertex is finalized.
//! Entries with equal distance come out in ascending vertex-id order. That order is
//! deterministic, but which of several equal-cost paths gets reported is not part of the
//! contract.

use super::{Digraph, VertexId};
use crate::error::Result;
use std::cmp::{Ordering, Reverse};
use std::collections::{BTreeMap, BinaryHeap};
use std::ops::Index;

#[derive(Debug, Clone, Copy)]
struct Cost(f64);

impl PartialEq for Cost {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Cost {}

impl PartialOrd for Cost {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Cost {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

/// Predecessor of every vertex on a shortest path from [`start`](Self::start).
///
/// Vertices without a discovered predecessor map to themselves: the start vertex and every
/// vertex it cannot reach. Indexing with a vertex id returns that raw mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PredecessorMap {
    start: VertexId,
    predecessors: BTreeMap<VertexId, VertexId>,
}

impl PredecessorMap {
    pub fn start(&self) -> VertexId {
        self.start
    }

    pub fn len(&self) -> usize {
        self.predecessors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.predecessors.is_empty()
    }

    /// Raw mapping for `vertex`; `None` only when the vertex was not in the graph.
    pub fn get(&self, vertex: VertexId) -> Option<VertexId> {
        self.predecessors.get(&vertex).copied()
    }

    /// The predecessor of `vertex`, or `None` for the start vertex, unreachable vertices and
    /// unknown ids.
    pub fn predecessor(&self, vertex: VertexId) -> Option<VertexId> {
        self.get(vertex).filter(|&p| p != vertex)
    }

    pub fn is_reachable(&self, vertex: VertexId) -> bool {
        if vertex == self.start {
            return self.predecessors.contains_key(&vertex);
        }
        self.predecessor(vertex).is_some()
    }

    /// Vertices on the path from the start to `target`, both ends included.
    pub fn path_to(&self, target: VertexId) -> Option<Vec<VertexId>> {
        if !self.predecessors.contains_key(&target) {
            return None;
        }
        let mut path = vec![target];
        let mut current = target;
        while current != self.start {
            current = self.predecessor(current)?;
            path.push(current);
            // Negative weights can leave a cycle that never reaches the start.
            if path.len() > self.predecessors.len() {
                return None;
            }
        }
        path.reverse();
        Some(path)
    }

    pub fn iter(&self) -> impl Iterator<Item = (VertexId, VertexId)> + '_ {
        self.predecessors.iter().map(|(&v, &p)| (v, p))
    }

    pub fn as_map(&self) -> &BTreeMap<VertexId, VertexId> {
        &self.predecessors
    }

    pub fn into_map(self) -> BTreeMap<VertexId, VertexId> {
        self.predecessors
    }
}

impl Index<VertexId> for PredecessorMap {
    type Output = VertexId;

    fn index(&self, vertex: VertexId) -> &VertexId {
        &self.predecessors[&vertex]
    }
}

/// Distances and predecessors produced by [`Digraph::shortest_paths`].
#[derive(Debug, Clone)]
pub struct ShortestPaths {
    predecessors: PredecessorMap,
    distances: BTreeMap<VertexId, f64>,
}

impl ShortestPaths {
    pub fn start(&self) -> VertexId {
        self.predecessors.start
    }

    /// Total weight of the shortest path to `vertex`, or `None` when it is unreachable.
    pub fn distance(&self, vertex: VertexId) -> Option<f64> {
        self.distances.get(&vertex).copied()
    }

    pub fn path_to(&self, target: VertexId) -> Option<Vec<VertexId>> {
        self.predecessors.path_to(target)
    }

    pub fn predecessors(&self) -> &PredecessorMap {
        &self.predecessors
    }

    pub fn into_predecessors(self) -> PredecessorMap {
        self.predecessors
    }
}

impl<V, E> Digraph<V, E> {
    /// Predecessor map of shortest paths from `start`, weighting each edge by `edge_weight`.
    ///
    /// Weights must be non-negative; negative weights give unspecified predecessors, and
    /// [`PredecessorMap::path_to`] returns `None` when they form a cycle. Vertices that
    /// cannot be reached map to themselves.
    pub fn find_shortest_paths<F>(&self, start: VertexId, edge_weight: F) -> Result<PredecessorMap>
    where
        F: Fn(&E) -> f64,
    {
        Ok(self.shortest_paths(start, edge_weight)?.into_predecessors())
    }

    /// Like [`find_shortest_paths`](Self::find_shortest_paths), also keeping the distances.
    pub fn shortest_paths<F>(&self, start: VertexId, edge_weight: F) -> Result<ShortestPaths>
    where
        F: Fn(&E) -> f64,
    {
        let start_ix = self.index_of(start)?;
        let n = self.vertices.len();

        let mut distance = vec![f64::INFINITY; n];
        let mut predecessor: Vec<usize> = (0..n).collect();
        let mut finalized = vec![false; n];
        let mut frontier: BinaryHeap<Reverse<(Cost, VertexId, usize)>> = BinaryHeap::new();

        distance[start_ix] = 0.0;
        frontier.push(Reverse((Cost(0.0), start, start_ix)));

        while let Some(Reverse((_, id, u))) = frontier.pop() {
            if finalized[u] {
                continue;
            }
            finalized[u] = true;
            tracing::trace!(vertex = id, distance = distance[u], "finalized");

            for edge in &self.vertices[u].out {
                let Some(&w) = self.vertex_index.get(&edge.to) else {
                    debug_assert!(false, "edge target missing from vertex index");
                    continue;
                };
                let candidate = distance[u] + edge_weight(&edge.payload);
                if candidate < distance[w] {
                    distance[w] = candidate;
                    predecessor[w] = u;
                    frontier.push(Reverse((Cost(candidate), edge.to, w)));
                }
            }
        }

        let mut predecessors = BTreeMap::new();
        let mut distances = BTreeMap::new();
        for (ix, entry) in self.vertices.iter().enumerate() {
            predecessors.insert(entry.id, self.vertices[predecessor[ix]].id);
            if distance[ix].is_finite() {
                distances.insert(entry.id, distance[ix]);
            }
        }

        Ok(ShortestPaths {
            predecessors: PredecessorMap {
                start,
                predecessors,
            },
            distances,
        })
    }
}
