use thiserror::Error;

/// Structural problems that prevent a graph from running at all.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorkflowError {
  /// The dependency graph contains a cycle through this node.
  #[error("circular dependency detected involving node {node_id}")]
  Cycle { node_id: String },

  /// Two nodes share an id.
  #[error("duplicate node id: {node_id}")]
  DuplicateNode { node_id: String },
}
