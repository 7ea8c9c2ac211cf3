use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use weft_config::kinds;

use super::{UNSET, parse_config};
use crate::coerce::{format_number, number_value, to_number};
use crate::context::NodeContext;
use crate::error::NodeError;
use crate::executor::NodeExecutor;

#[derive(Debug, Default, Deserialize)]
struct MathConfig {
  #[serde(default)]
  operation: Option<String>,
}

/// `inputA <operation> inputB` in double precision.
///
/// Operations: `add`, `subtract`, `multiply`, `divide`.
#[derive(Debug, Clone, Copy, Default)]
pub struct MathExecutor;

#[async_trait]
impl NodeExecutor for MathExecutor {
  fn kind(&self) -> &str {
    kinds::MATH
  }

  async fn execute(&self, config: &Value, ctx: &NodeContext<'_>) -> Result<Value, NodeError> {
    let config: MathConfig = parse_config(config)?;
    let (Some(a), Some(b)) = (ctx.input(kinds::INPUT_A), ctx.input(kinds::INPUT_B)) else {
      return Err(NodeError::MissingInputs { kind: "math" });
    };
    let a = to_number(a);
    let b = to_number(b);

    let operation = config.operation.as_deref().unwrap_or(UNSET);
    let result = match operation {
      "add" => a + b,
      "subtract" => a - b,
      "multiply" => a * b,
      "divide" => {
        if b == 0.0 {
          return Err(NodeError::DivisionByZero);
        }
        a / b
      }
      other => {
        return Err(NodeError::UnknownOperation {
          what: "math operation",
          value: other.to_string(),
        });
      }
    };

    ctx.log(format!(
      "  math: {} {} {} = {}",
      format_number(a),
      operation,
      format_number(b),
      format_number(result)
    ));
    Ok(number_value(result))
  }
}
