use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use weft_config::{DEFAULT_INPUT_SLOT, kinds};

use super::{UNSET, parse_config};
use crate::coerce::to_text;
use crate::context::NodeContext;
use crate::error::NodeError;
use crate::executor::NodeExecutor;

#[derive(Debug, Default, Deserialize)]
struct TextConfig {
  #[serde(default)]
  operation: Option<String>,
}

/// Transforms the text on `input`.
///
/// Operations: `uppercase`, `lowercase`, `reverse`, `length`. `reverse` and
/// `length` work on Unicode scalar values.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextExecutor;

#[async_trait]
impl NodeExecutor for TextExecutor {
  fn kind(&self) -> &str {
    kinds::TEXT
  }

  async fn execute(&self, config: &Value, ctx: &NodeContext<'_>) -> Result<Value, NodeError> {
    let config: TextConfig = parse_config(config)?;
    let input = ctx
      .input(DEFAULT_INPUT_SLOT)
      .ok_or(NodeError::MissingInput { kind: "text" })?;
    let text = to_text(input);

    let operation = config.operation.as_deref().unwrap_or(UNSET);
    let result = match operation {
      "uppercase" => Value::String(text.to_uppercase()),
      "lowercase" => Value::String(text.to_lowercase()),
      "reverse" => Value::String(text.chars().rev().collect()),
      "length" => Value::from(text.chars().count()),
      other => {
        return Err(NodeError::UnknownOperation {
          what: "text operation",
          value: other.to_string(),
        });
      }
    };

    ctx.log(format!(
      "  text: {:?} -> {} -> {}",
      text,
      operation,
      to_text(&result)
    ));
    Ok(result)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::testing::invoke;
  use serde_json::json;

  async fn text(operation: &str, input: Value) -> Result<Value, NodeError> {
    invoke(
      &TextExecutor,
      json!({ "operation": operation }),
      &[("input", input)],
    )
    .await
  }

  #[tokio::test]
  async fn test_operations() {
    assert_eq!(text("uppercase", json!("Hello")).await, Ok(json!("HELLO")));
    assert_eq!(text("lowercase", json!("Hello")).await, Ok(json!("hello")));
    assert_eq!(text("reverse", json!("abc")).await, Ok(json!("cba")));
    assert_eq!(text("length", json!("abc")).await, Ok(json!(3)));
  }

  #[tokio::test]
  async fn test_unicode() {
    assert_eq!(text("uppercase", json!("straße")).await, Ok(json!("STRASSE")));
    assert_eq!(text("reverse", json!("añb")).await, Ok(json!("bña")));
    assert_eq!(text("length", json!("añb")).await, Ok(json!(3)));
  }

  #[tokio::test]
  async fn test_numbers_are_coerced_to_text() {
    assert_eq!(text("reverse", json!(123)).await, Ok(json!("321")));
    assert_eq!(text("length", json!(15)).await, Ok(json!(2)));
  }

  #[tokio::test]
  async fn test_missing_input() {
    let err = invoke(&TextExecutor, json!({"operation": "uppercase"}), &[])
      .await
      .unwrap_err();
    assert_eq!(err.to_string(), "text node requires input");
  }

  #[tokio::test]
  async fn test_unknown_operation() {
    let err = text("capitalize", json!("abc")).await.unwrap_err();
    assert_eq!(err.to_string(), "unknown text operation: capitalize");
  }
}
