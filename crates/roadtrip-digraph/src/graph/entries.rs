//! Internal storage entries for [`Digraph`](super::Digraph).

use super::VertexId;

#[derive(Debug, Clone)]
pub(in crate::graph) struct VertexEntry<V, E> {
    pub(in crate::graph) id: VertexId,
    pub(in crate::graph) payload: V,
    pub(in crate::graph) out: Vec<EdgeEntry<E>>,
}

impl<V, E> VertexEntry<V, E> {
    pub(in crate::graph) fn out_position(&self, to: VertexId) -> Option<usize> {
        self.out.iter().position(|e| e.to == to)
    }
}

#[derive(Debug, Clone)]
pub(in crate::graph) struct EdgeEntry<E> {
    pub(in crate::graph) to: VertexId,
    pub(in crate::graph) payload: E,
}
