use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use weft_config::kinds;

use super::parse_config;
use crate::coerce::to_text;
use crate::context::NodeContext;
use crate::error::NodeError;
use crate::executor::NodeExecutor;

#[derive(Debug, Default, Deserialize)]
struct InputConfig {
  #[serde(default)]
  value: Value,
}

/// Emits the configured `value` verbatim. Takes no inputs.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputExecutor;

#[async_trait]
impl NodeExecutor for InputExecutor {
  fn kind(&self) -> &str {
    kinds::INPUT
  }

  async fn execute(&self, config: &Value, ctx: &NodeContext<'_>) -> Result<Value, NodeError> {
    let config: InputConfig = parse_config(config)?;
    ctx.log(format!("  input: emitting {}", to_text(&config.value)));
    Ok(config.value)
  }
}
