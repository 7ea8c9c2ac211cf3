use thiserror::Error;

/// Errors from requesting or validating a generated graph.
#[derive(Debug, Error)]
pub enum GeneratorError {
  #[error("prompt is required")]
  EmptyPrompt,

  #[error("invalid generator endpoint '{endpoint}': {source}")]
  InvalidEndpoint {
    endpoint: String,
    #[source]
    source: url::ParseError,
  },

  #[error("generator request failed: {0}")]
  Http(#[from] reqwest::Error),

  #[error("generator returned {status}: {message}")]
  Status { status: u16, message: String },

  #[error("malformed generator response: {message}")]
  MalformedResponse { message: String },

  #[error("generated workflow has no nodes")]
  NoNodes,

  #[error("generated node at index {index} has an empty id")]
  EmptyNodeId { index: usize },

  #[error("generated workflow repeats node id: {node_id}")]
  DuplicateNode { node_id: String },

  #[error("generated workflow repeats edge id: {edge_id}")]
  DuplicateEdge { edge_id: String },

  #[error("edge {edge_id} references unknown node: {node_id}")]
  DanglingEdge { edge_id: String, node_id: String },

  #[error("node {node_id} has unsupported kind: {kind}")]
  UnsupportedKind { node_id: String, kind: String },

  #[error("node {node_id} data must be an object")]
  InvalidData { node_id: String },

  #[error("node {node_id} has a non-finite position")]
  InvalidPosition { node_id: String },

  #[error("metadata declares {declared} {what} but the workflow has {actual}")]
  CountMismatch {
    what: &'static str,
    declared: u64,
    actual: usize,
  },
}
