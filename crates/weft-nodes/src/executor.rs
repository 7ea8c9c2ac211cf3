use async_trait::async_trait;

use crate::context::NodeContext;
use crate::error::NodeError;

/// The computation behind one node kind.
///
/// Implementations must not keep per-run state: the same executor instance
/// serves every node of its kind, in every run that uses the registry.
#[async_trait]
pub trait NodeExecutor: Send + Sync {
  /// Kind identifier this executor is registered under, e.g. `"mathNode"`.
  fn kind(&self) -> &str;

  /// Compute the node's output from its `data` configuration and inputs.
  async fn execute(
    &self,
    config: &serde_json::Value,
    ctx: &NodeContext<'_>,
  ) -> Result<serde_json::Value, NodeError>;
}
