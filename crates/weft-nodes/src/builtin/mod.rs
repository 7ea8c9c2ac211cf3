//! Executors registered in every default registry.

mod condition;
mod input;
mod math;
mod output;
mod text;

pub use condition::ConditionExecutor;
pub use input::InputExecutor;
pub use math::MathExecutor;
pub use output::OutputExecutor;
pub use text::TextExecutor;

use serde::de::DeserializeOwned;

use crate::error::NodeError;
use crate::registry::ExecutorRegistry;

/// How a missing operation or condition is reported.
pub(crate) const UNSET: &str = "undefined";

pub(crate) fn register_defaults(registry: &ExecutorRegistry) {
  registry.register(InputExecutor);
  registry.register(MathExecutor);
  registry.register(TextExecutor);
  registry.register(ConditionExecutor);
  registry.register(OutputExecutor);
}

/// Read a node's `data` into a typed config. Missing data means defaults.
pub(crate) fn parse_config<T>(config: &serde_json::Value) -> Result<T, NodeError>
where
  T: DeserializeOwned + Default,
{
  if config.is_null() {
    return Ok(T::default());
  }
  <T as serde::Deserialize>::deserialize(config).map_err(|e| NodeError::InvalidConfig {
    message: e.to_string(),
  })
}
