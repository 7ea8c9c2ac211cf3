use std::collections::HashMap;

use crate::sink::LogSink;

/// Resolved inputs of a node, keyed by slot name. JSON `null` means absent.
pub type Inputs = HashMap<String, serde_json::Value>;

/// What an executor gets to see while it runs.
pub struct NodeContext<'a> {
  node_id: &'a str,
  inputs: &'a Inputs,
  sink: &'a dyn LogSink,
}

impl<'a> NodeContext<'a> {
  pub fn new(node_id: &'a str, inputs: &'a Inputs, sink: &'a dyn LogSink) -> Self {
    Self {
      node_id,
      inputs,
      sink,
    }
  }

  pub fn node_id(&self) -> &str {
    self.node_id
  }

  pub fn inputs(&self) -> &Inputs {
    self.inputs
  }

  /// The value on `slot`, or `None` if the slot is unconnected or its
  /// upstream produced nothing.
  pub fn input(&self, slot: &str) -> Option<&serde_json::Value> {
    self.inputs.get(slot).filter(|v| !v.is_null())
  }

  /// Emit a human-readable progress line.
  pub fn log(&self, line: impl AsRef<str>) {
    self.sink.log(line.as_ref());
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;
  use std::sync::Mutex;

  #[test]
  fn test_null_input_is_absent() {
    let inputs: Inputs = [
      ("input".to_string(), json!(null)),
      ("inputA".to_string(), json!(0)),
    ]
    .into_iter()
    .collect();
    let lines = Mutex::new(Vec::new());
    let sink = |line: &str| lines.lock().unwrap().push(line.to_string());
    let ctx = NodeContext::new("n1", &inputs, &sink);

    assert_eq!(ctx.node_id(), "n1");
    assert!(ctx.input("input").is_none());
    assert!(ctx.input("inputB").is_none());
    assert_eq!(ctx.input("inputA"), Some(&json!(0)));
    assert_eq!(ctx.inputs().len(), 2);

    ctx.log("hello");
    assert_eq!(*lines.lock().unwrap(), vec!["hello".to_string()]);
  }
}
