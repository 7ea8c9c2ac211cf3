//! Runtime error types.

use weft_workflow::WorkflowError;

/// Errors that stop a run before any node executes.
///
/// Per-node failures are not errors at this level; they are recorded in the
/// node's [`NodeResult`](crate::NodeResult).
#[derive(Debug, thiserror::Error)]
pub enum RuntimeError {
  /// The graph cannot be scheduled (cycle, duplicate node id).
  #[error(transparent)]
  Workflow(#[from] WorkflowError),

  /// `run_node` was asked for a node that is not in the graph.
  #[error("node '{node_id}' not found in graph")]
  NodeNotFound { node_id: String },
}
