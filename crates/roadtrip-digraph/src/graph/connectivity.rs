//! Reachability and strong connectivity.

use super::{Digraph, VertexId};
use crate::error::Result;

impl<V, E> Digraph<V, E> {
    /// Returns `true` when every vertex can reach every other vertex along directed edges.
    ///
    /// Runs one reachability pass per vertex and stops at the first vertex that falls short,
    /// so the worst case is `O(V * (V + E))`. The empty graph is strongly connected.
    pub fn is_strongly_connected(&self) -> bool {
        let total = self.vertices.len();
        let mut visited = vec![false; total];
        let mut stack = Vec::new();

        for start in 0..total {
            let reached = self.depth_first(start, &mut visited, &mut stack, |_| {});
            if reached < total {
                tracing::debug!(
                    start = self.vertices[start].id,
                    reached,
                    total,
                    "vertex does not reach the whole graph"
                );
                return false;
            }
        }
        true
    }

    /// Every vertex reachable from `vertex` (including itself), in discovery order.
    pub fn reachable_from(&self, vertex: VertexId) -> Result<Vec<VertexId>> {
        let start = self.index_of(vertex)?;
        let mut visited = vec![false; self.vertices.len()];
        let mut order = Vec::new();
        self.depth_first(start, &mut visited, &mut Vec::new(), |ix| {
            order.push(self.vertices[ix].id)
        });
        Ok(order)
    }

    // Iterative so traversal depth does not depend on the call stack. `visited` and `stack`
    // are scratch buffers reset on entry; returns the number of vertices reached.
    fn depth_first<F>(
        &self,
        start: usize,
        visited: &mut [bool],
        stack: &mut Vec<usize>,
        mut on_visit: F,
    ) -> usize
    where
        F: FnMut(usize),
    {
        visited.fill(false);
        stack.clear();

        visited[start] = true;
        stack.push(start);
        let mut reached = 0;

        while let Some(ix) = stack.pop() {
            reached += 1;
            on_visit(ix);
            // Reverse so the first listed edge is explored first.
            for edge in self.vertices[ix].out.iter().rev() {
                let Some(&w) = self.vertex_index.get(&edge.to) else {
                    debug_assert!(false, "edge target missing from vertex index");
                    continue;
                };
                if !visited[w] {
                    visited[w] = true;
                    stack.push(w);
                }
            }
        }

        reached
    }
}
