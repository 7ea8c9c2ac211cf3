//! Input resolution from upstream results.

use std::collections::HashMap;

use weft_nodes::Inputs;
use weft_workflow::GraphIndex;

use crate::result::NodeResult;

/// Gather the inputs of `node_id` from the results recorded so far.
///
/// Each incoming edge puts its source's output under the edge's slot name.
/// A source without a recorded result (unknown id) contributes `null`, as does
/// a source that failed. When two edges feed the same slot, the later edge in
/// edge list order wins.
pub fn resolve_inputs(
  index: &GraphIndex<'_>,
  node_id: &str,
  completed: &HashMap<String, NodeResult>,
) -> Inputs {
  let mut inputs = Inputs::new();
  for edge in index.incoming(node_id) {
    let value = completed
      .get(edge.source.as_str())
      .map(|r| r.output.clone())
      .unwrap_or(serde_json::Value::Null);
    inputs.insert(edge.input_slot().to_string(), value);
  }
  inputs
}
