use serde::{Deserialize, Serialize};

/// Canvas position of a node. Owned by the editor, carried through untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
  pub x: f64,
  pub y: f64,
}

/// A unit of computation in the graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
  pub id: String,
  /// Kind identifier used to look up the executor, e.g. `"mathNode"`.
  #[serde(rename = "type")]
  pub kind: String,
  /// Kind-specific configuration, e.g. `{ "operation": "add" }`.
  #[serde(default)]
  pub data: serde_json::Value,
  #[serde(default)]
  pub position: Position,
}

impl Node {
  pub fn new(id: impl Into<String>, kind: impl Into<String>, data: serde_json::Value) -> Self {
    Self {
      id: id.into(),
      kind: kind.into(),
      data,
      position: Position::default(),
    }
  }

  /// Set the canvas position.
  pub fn at(mut self, x: f64, y: f64) -> Self {
    self.position = Position { x, y };
    self
  }
}
