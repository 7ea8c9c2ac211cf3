use serde::{Deserialize, Serialize};
use weft_config::{Edge, Node, WorkflowGraph};

use crate::error::GeneratorError;
use crate::validate::validate;

/// Descriptive metadata the generator attaches to a proposal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowMetadata {
  pub description: String,
  pub created: String,
  pub node_count: u64,
  pub edge_count: u64,
}

/// A graph proposed by the generator, not yet validated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedWorkflow {
  pub nodes: Vec<Node>,
  pub edges: Vec<Edge>,
  pub metadata: WorkflowMetadata,
}

impl GeneratedWorkflow {
  /// Validate the proposal and turn it into a runnable graph.
  pub fn into_graph<S: AsRef<str>>(
    self,
    allowed_kinds: &[S],
  ) -> Result<WorkflowGraph, GeneratorError> {
    validate(&self, allowed_kinds)?;
    Ok(WorkflowGraph::new(self.nodes, self.edges))
  }
}

#[derive(Debug, Serialize)]
pub(crate) struct GenerateRequest<'a> {
  pub prompt: &'a str,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GenerateResponse {
  pub workflow: GeneratedWorkflow,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ErrorResponse {
  pub error: Option<String>,
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  #[test]
  fn test_parse_response() {
    let body = json!({
      "workflow": {
        "nodes": [
          { "id": "1", "type": "inputNode", "position": { "x": 50, "y": 100 }, "data": { "label": "A", "value": 10 } },
          { "id": "2", "type": "outputNode", "position": { "x": 300, "y": 100 }, "data": { "label": "Result" } }
        ],
        "edges": [{ "id": "e1-2", "source": "1", "target": "2", "animated": true }],
        "metadata": { "description": "pass through", "created": "2024-01-01", "nodeCount": 2, "edgeCount": 1 }
      }
    });

    let response: GenerateResponse = serde_json::from_value(body).unwrap();
    let workflow = response.workflow;
    assert_eq!(workflow.nodes.len(), 2);
    assert_eq!(workflow.nodes[0].kind, "inputNode");
    assert_eq!(workflow.nodes[1].position.x, 300.0);
    assert_eq!(workflow.edges[0].input_slot(), "input");
    assert_eq!(workflow.metadata.node_count, 2);
    assert_eq!(workflow.metadata.description, "pass through");
  }

  #[test]
  fn test_missing_metadata_is_rejected() {
    let body = json!({ "workflow": { "nodes": [], "edges": [] } });
    assert!(serde_json::from_value::<GenerateResponse>(body).is_err());
  }

  #[test]
  fn test_request_shape() {
    let request = GenerateRequest { prompt: "add two numbers" };
    assert_eq!(
      serde_json::to_value(&request).unwrap(),
      json!({ "prompt": "add two numbers" })
    );
  }
}
