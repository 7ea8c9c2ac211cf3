use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use weft_config::kinds;

use super::{UNSET, parse_config};
use crate::coerce::{format_number, to_number};
use crate::context::NodeContext;
use crate::error::NodeError;
use crate::executor::NodeExecutor;

#[derive(Debug, Default, Deserialize)]
struct ConditionConfig {
  #[serde(default)]
  condition: Option<String>,
}

/// Compares `inputA` against `inputB` numerically.
///
/// Conditions: `greater`, `less`, `equal`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConditionExecutor;

#[async_trait]
impl NodeExecutor for ConditionExecutor {
  fn kind(&self) -> &str {
    kinds::CONDITION
  }

  async fn execute(&self, config: &Value, ctx: &NodeContext<'_>) -> Result<Value, NodeError> {
    let config: ConditionConfig = parse_config(config)?;
    let (Some(a), Some(b)) = (ctx.input(kinds::INPUT_A), ctx.input(kinds::INPUT_B)) else {
      return Err(NodeError::MissingInputs { kind: "condition" });
    };
    let a = to_number(a);
    let b = to_number(b);

    let condition = config.condition.as_deref().unwrap_or(UNSET);
    let result = match condition {
      "greater" => a > b,
      "less" => a < b,
      "equal" => a == b,
      other => {
        return Err(NodeError::UnknownOperation {
          what: "condition",
          value: other.to_string(),
        });
      }
    };

    ctx.log(format!(
      "  condition: {} {} {} = {}",
      format_number(a),
      condition,
      format_number(b),
      result
    ));
    Ok(Value::Bool(result))
  }
}
