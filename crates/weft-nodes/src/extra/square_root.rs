use async_trait::async_trait;
use serde_json::Value;
use weft_config::{DEFAULT_INPUT_SLOT, kinds};

use crate::coerce::{format_number, number_value, to_number};
use crate::context::NodeContext;
use crate::error::NodeError;
use crate::executor::NodeExecutor;

/// Square root of `input`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SquareRootExecutor;

#[async_trait]
impl NodeExecutor for SquareRootExecutor {
  fn kind(&self) -> &str {
    kinds::SQUARE_ROOT
  }

  async fn execute(&self, _config: &Value, ctx: &NodeContext<'_>) -> Result<Value, NodeError> {
    let input = ctx
      .input(DEFAULT_INPUT_SLOT)
      .ok_or(NodeError::MissingInput { kind: "square root" })?;
    let n = to_number(input);
    if n < 0.0 {
      return Err(NodeError::NegativeSquareRoot);
    }

    let result = n.sqrt();
    ctx.log(format!(
      "  square root: sqrt({}) = {}",
      format_number(n),
      format_number(result)
    ));
    Ok(number_value(result))
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::testing::invoke;
  use serde_json::json;

  #[tokio::test]
  async fn test_square_root() {
    let out = invoke(&SquareRootExecutor, json!({}), &[("input", json!(16))]).await;
    assert_eq!(out, Ok(json!(4)));

    let out = invoke(&SquareRootExecutor, json!({}), &[("input", json!(2))]).await;
    assert_eq!(out, Ok(json!(2f64.sqrt())));
  }

  #[tokio::test]
  async fn test_negative_input() {
    let err = invoke(&SquareRootExecutor, json!({}), &[("input", json!(-4))])
      .await
      .unwrap_err();
    assert_eq!(err, NodeError::NegativeSquareRoot);
    assert!(err.to_string().contains("negative number"));
  }

  #[tokio::test]
  async fn test_missing_input() {
    let err = invoke(&SquareRootExecutor, json!({}), &[]).await.unwrap_err();
    assert_eq!(err.to_string(), "square root node requires input");
  }
}
