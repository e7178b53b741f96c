#![forbid(unsafe_code)]

//! Generic directed graph used by the `roadtrip` planner.
//!
//! [`Digraph`] stores one payload per vertex and one payload per directed edge, keyed by
//! integer vertex ids. On top of the adjacency-list storage it offers a strong-connectivity
//! check and single-source shortest paths with a caller-supplied edge weight.
//!
//! ```
//! use roadtrip_digraph::Digraph;
//!
//! let mut g: Digraph<&str, f64> = Digraph::new();
//! g.add_vertex(1, "a").unwrap();
//! g.add_vertex(2, "b").unwrap();
//! g.add_edge(1, 2, 4.0).unwrap();
//! g.add_edge(2, 1, 1.5).unwrap();
//!
//! assert!(g.is_strongly_connected());
//! let paths = g.find_shortest_paths(1, |w| *w).unwrap();
//! assert_eq!(paths[2], 1);
//! ```

pub mod error;
mod graph;

pub use error::{Error, Result};
pub use graph::{Digraph, PredecessorMap, ShortestPaths, VertexId};
