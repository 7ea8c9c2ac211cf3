use serde::{Deserialize, Serialize};

/// Slot that receives a value when an edge names no target handle.
pub const DEFAULT_INPUT_SLOT: &str = "input";

/// A directed data-flow link from one node's output to another node's input slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Edge {
  pub id: String,
  pub source: String,
  pub target: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub target_handle: Option<String>,
  /// Reserved; no executor reads it.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub source_handle: Option<String>,
}

impl Edge {
  pub fn new(id: impl Into<String>, source: impl Into<String>, target: impl Into<String>) -> Self {
    Self {
      id: id.into(),
      source: source.into(),
      target: target.into(),
      target_handle: None,
      source_handle: None,
    }
  }

  pub fn with_target_handle(mut self, handle: impl Into<String>) -> Self {
    self.target_handle = Some(handle.into());
    self
  }

  /// Name of the input slot this edge feeds.
  ///
  /// The editor writes an empty string for unnamed handles, so an empty handle
  /// is treated the same as a missing one.
  pub fn input_slot(&self) -> &str {
    match self.target_handle.as_deref() {
      Some(handle) if !handle.is_empty() => handle,
      _ => DEFAULT_INPUT_SLOT,
    }
  }
}
