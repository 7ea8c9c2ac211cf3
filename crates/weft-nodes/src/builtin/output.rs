use async_trait::async_trait;
use serde_json::Value;
use weft_config::{DEFAULT_INPUT_SLOT, kinds};

use crate::context::NodeContext;
use crate::error::NodeError;
use crate::executor::NodeExecutor;

/// Terminal probe: its output is whatever arrived on `input`.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputExecutor;

#[async_trait]
impl NodeExecutor for OutputExecutor {
  fn kind(&self) -> &str {
    kinds::OUTPUT
  }

  async fn execute(&self, _config: &Value, ctx: &NodeContext<'_>) -> Result<Value, NodeError> {
    let value = ctx.input(DEFAULT_INPUT_SLOT).cloned().unwrap_or(Value::Null);
    ctx.log(format!("  output: {}", value));
    Ok(value)
  }
}
