//! Execution result types.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use weft_nodes::Inputs;

/// Terminal state of a node within a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeStatus {
  Success,
  Error,
}

/// Result of a single node execution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeResult {
  /// Inputs the node was given, by slot.
  pub inputs: Inputs,
  /// Node output; `null` when the node failed.
  pub output: serde_json::Value,
  /// Wall-clock time spent in the node, in milliseconds.
  pub execution_time: f64,
  pub status: NodeStatus,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub error: Option<String>,
}

impl NodeResult {
  pub(crate) fn success(inputs: Inputs, output: serde_json::Value, execution_time: f64) -> Self {
    Self {
      inputs,
      output,
      execution_time,
      status: NodeStatus::Success,
      error: None,
    }
  }

  pub(crate) fn failure(inputs: Inputs, error: String, execution_time: f64) -> Self {
    Self {
      inputs,
      output: serde_json::Value::Null,
      execution_time,
      status: NodeStatus::Error,
      error: Some(error),
    }
  }

  pub fn is_success(&self) -> bool {
    self.status == NodeStatus::Success
  }
}

/// Result of a complete run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunResult {
  /// Results of all executed nodes, keyed by node id.
  pub node_results: HashMap<String, NodeResult>,
  /// Wall-clock time of the whole run, in milliseconds.
  pub total_execution_time: f64,
  /// Node ids in the order they were executed.
  pub execution_order: Vec<String>,
}

impl RunResult {
  pub fn get(&self, node_id: &str) -> Option<&NodeResult> {
    self.node_results.get(node_id)
  }

  /// Output of `node_id`, if it ran.
  pub fn output(&self, node_id: &str) -> Option<&serde_json::Value> {
    self.get(node_id).map(|r| &r.output)
  }

  /// Ids of the nodes that failed, in execution order.
  pub fn failed_nodes(&self) -> Vec<&str> {
    self
      .execution_order
      .iter()
      .filter(|id| self.get(id).is_some_and(|r| !r.is_success()))
      .map(String::as_str)
      .collect()
  }

  /// True when every node succeeded.
  pub fn is_success(&self) -> bool {
    self.node_results.values().all(NodeResult::is_success)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  #[test]
  fn test_serialized_field_names() {
    let inputs: Inputs = [("inputA".to_string(), json!(1))].into_iter().collect();
    let ok = NodeResult::success(inputs, json!(2), 0.5);
    let failed = NodeResult::failure(Inputs::new(), "boom".to_string(), 1.0);

    let result = RunResult {
      node_results: [("a".to_string(), ok), ("b".to_string(), failed)]
        .into_iter()
        .collect(),
      total_execution_time: 3.0,
      execution_order: vec!["a".to_string(), "b".to_string()],
    };

    let value = serde_json::to_value(&result).unwrap();
    assert_eq!(
      value["nodeResults"]["a"],
      json!({"inputs": {"inputA": 1}, "output": 2, "executionTime": 0.5, "status": "success"})
    );
    assert_eq!(
      value["nodeResults"]["b"],
      json!({"inputs": {}, "output": null, "executionTime": 1.0, "status": "error", "error": "boom"})
    );
    assert_eq!(value["totalExecutionTime"], 3.0);
    assert_eq!(value["executionOrder"], json!(["a", "b"]));

    assert_eq!(result.failed_nodes(), vec!["b"]);
    assert!(!result.is_success());
    assert_eq!(result.output("a"), Some(&json!(2)));
  }
}
