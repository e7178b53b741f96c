use roadtrip_digraph::VertexId;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),
    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },
    #[error("unexpected end of input, expected {expected}")]
    UnexpectedEof { expected: &'static str },
    #[error("line {line}: unknown trip metric {metric:?} (expected D or T)")]
    UnknownMetric { line: usize, metric: String },
    #[error("line {line}: {source}")]
    Graph {
        line: usize,
        #[source]
        source: roadtrip_digraph::Error,
    },
    #[error(transparent)]
    Digraph(#[from] roadtrip_digraph::Error),
    #[error("no route from {from} to {to}")]
    Unreachable { from: VertexId, to: VertexId },
    #[error("Disconnected Map")]
    DisconnectedMap,
}

pub type Result<T> = std::result::Result<T, Error>;
