use crate::VertexId;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("vertex {vertex} does not exist")]
    UnknownVertex { vertex: VertexId },
    #[error("vertex {vertex} already exists")]
    DuplicateVertex { vertex: VertexId },
    #[error("edge ({from}, {to}) does not exist")]
    UnknownEdge { from: VertexId, to: VertexId },
    #[error("edge ({from}, {to}) already exists")]
    DuplicateEdge { from: VertexId, to: VertexId },
}

pub type Result<T> = std::result::Result<T, Error>;
