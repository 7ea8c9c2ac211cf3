//! Structural checks on generated proposals.
//!
//! The generator is a language model behind an HTTP endpoint; its output is
//! checked here before it can reach the graph index.

use std::collections::HashSet;

use tracing::warn;

use crate::error::GeneratorError;
use crate::types::GeneratedWorkflow;

/// Check a proposal against the graph invariants and the kinds the caller can
/// execute.
///
/// The first violation found is returned. Checks run over nodes, then edges,
/// then metadata.
pub fn validate<S: AsRef<str>>(
  workflow: &GeneratedWorkflow,
  allowed_kinds: &[S],
) -> Result<(), GeneratorError> {
  let result = check(workflow, allowed_kinds);
  if let Err(e) = &result {
    warn!(error = %e, "generated_workflow_rejected");
  }
  result
}

fn check<S: AsRef<str>>(
  workflow: &GeneratedWorkflow,
  allowed_kinds: &[S],
) -> Result<(), GeneratorError> {
  if workflow.nodes.is_empty() {
    return Err(GeneratorError::NoNodes);
  }

  let mut node_ids = HashSet::with_capacity(workflow.nodes.len());
  for (index, node) in workflow.nodes.iter().enumerate() {
    if node.id.is_empty() {
      return Err(GeneratorError::EmptyNodeId { index });
    }
    if !node_ids.insert(node.id.as_str()) {
      return Err(GeneratorError::DuplicateNode {
        node_id: node.id.clone(),
      });
    }
    if !allowed_kinds.iter().any(|k| k.as_ref() == node.kind) {
      return Err(GeneratorError::UnsupportedKind {
        node_id: node.id.clone(),
        kind: node.kind.clone(),
      });
    }
    if !node.data.is_object() {
      return Err(GeneratorError::InvalidData {
        node_id: node.id.clone(),
      });
    }
    if !node.position.x.is_finite() || !node.position.y.is_finite() {
      return Err(GeneratorError::InvalidPosition {
        node_id: node.id.clone(),
      });
    }
  }

  let mut edge_ids = HashSet::with_capacity(workflow.edges.len());
  for edge in &workflow.edges {
    if !edge_ids.insert(edge.id.as_str()) {
      return Err(GeneratorError::DuplicateEdge {
        edge_id: edge.id.clone(),
      });
    }
    for endpoint in [&edge.source, &edge.target] {
      if !node_ids.contains(endpoint.as_str()) {
        return Err(GeneratorError::DanglingEdge {
          edge_id: edge.id.clone(),
          node_id: endpoint.clone(),
        });
      }
    }
  }

  let metadata = &workflow.metadata;
  if metadata.node_count != workflow.nodes.len() as u64 {
    return Err(GeneratorError::CountMismatch {
      what: "nodes",
      declared: metadata.node_count,
      actual: workflow.nodes.len(),
    });
  }
  if metadata.edge_count != workflow.edges.len() as u64 {
    return Err(GeneratorError::CountMismatch {
      what: "edges",
      declared: metadata.edge_count,
      actual: workflow.edges.len(),
    });
  }

  Ok(())
}
