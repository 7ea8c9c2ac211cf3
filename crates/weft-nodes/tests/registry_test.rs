//! Extending registries with custom kinds.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{Value, json};
use weft_config::kinds;
use weft_nodes::{
  ExecutorRegistry, Inputs, NodeContext, NodeError, NodeExecutor, NoopSink, extended_registry,
};

/// Doubles `input`, yielding to the scheduler first.
struct DoubleExecutor;

#[async_trait]
impl NodeExecutor for DoubleExecutor {
  fn kind(&self) -> &str {
    "doubleNode"
  }

  async fn execute(&self, _config: &Value, ctx: &NodeContext<'_>) -> Result<Value, NodeError> {
    tokio::task::yield_now().await;
    let n = ctx
      .input("input")
      .and_then(Value::as_f64)
      .ok_or_else(|| NodeError::failed("double node requires a numeric input"))?;
    ctx.log(format!("doubling {}", n));
    Ok(json!(n * 2.0))
  }
}

#[tokio::test]
async fn test_custom_executor_through_registry() {
  let registry = ExecutorRegistry::new();
  registry.register(DoubleExecutor);

  let executor = registry.get("doubleNode").expect("custom kind registered");
  let inputs: Inputs = [("input".to_string(), json!(21))].into_iter().collect();
  let ctx = NodeContext::new("d1", &inputs, &NoopSink);

  assert_eq!(executor.execute(&json!({}), &ctx).await, Ok(json!(42.0)));
}

#[tokio::test]
async fn test_custom_executor_failure_message() {
  let executor: Arc<dyn NodeExecutor> = Arc::new(DoubleExecutor);
  let inputs = Inputs::new();
  let ctx = NodeContext::new("d1", &inputs, &NoopSink);

  let err = executor.execute(&json!({}), &ctx).await.unwrap_err();
  assert_eq!(err.to_string(), "double node requires a numeric input");
}

#[test]
fn test_extended_registry_kinds() {
  let registry = extended_registry();
  assert_eq!(registry.len(), 7);
  assert!(registry.contains(kinds::SQUARE_ROOT));
  assert!(registry.contains(kinds::WORD_COUNT));
  assert!(!ExecutorRegistry::new().contains(kinds::WORD_COUNT));
}

#[test]
fn test_register_shared_executor() {
  let registry = ExecutorRegistry::empty();
  let shared: Arc<dyn NodeExecutor> = Arc::new(DoubleExecutor);
  registry.register_arc(shared.clone());

  let found = registry.get("doubleNode").unwrap();
  assert!(Arc::ptr_eq(&found, &shared));
}
