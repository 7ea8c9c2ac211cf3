//! Weft Nodes
//!
//! Every node kind is implemented by a [`NodeExecutor`]: a function from the
//! node's configuration and its resolved inputs to an output value. Executors
//! are looked up by kind through an [`ExecutorRegistry`], which is the only
//! place new kinds are plugged in.
//!
//! The default registry carries the five built-in kinds (`inputNode`,
//! `mathNode`, `textNode`, `conditionNode`, `outputNode`). The optional
//! [`SquareRootExecutor`] and [`WordCountExecutor`] can be added to any
//! registry, or use [`extended_registry`] to get all of them.

mod builtin;
pub mod coerce;
mod context;
mod error;
mod executor;
mod extra;
mod registry;
mod sink;

pub use builtin::{
  ConditionExecutor, InputExecutor, MathExecutor, OutputExecutor, TextExecutor,
};
pub use context::{Inputs, NodeContext};
pub use error::NodeError;
pub use executor::NodeExecutor;
pub use extra::{SquareRootExecutor, WordCountExecutor, extended_registry};
pub use registry::ExecutorRegistry;
pub use sink::{ChannelSink, LogSink, NoopSink};

#[cfg(test)]
pub(crate) mod testing {
  use serde_json::Value;

  use crate::{Inputs, NodeContext, NodeError, NodeExecutor, NoopSink};

  /// Run an executor once with the given config and `(slot, value)` inputs.
  pub async fn invoke(
    executor: &dyn NodeExecutor,
    config: Value,
    inputs: &[(&str, Value)],
  ) -> Result<Value, NodeError> {
    let inputs: Inputs = inputs
      .iter()
      .map(|(slot, value)| (slot.to_string(), value.clone()))
      .collect();
    let ctx = NodeContext::new("test-node", &inputs, &NoopSink);
    executor.execute(&config, &ctx).await
  }
}
