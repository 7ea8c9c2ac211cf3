//! Workflow runtime.
//!
//! The [`Runtime`] pairs an executor registry with a log sink and provides
//! `run(graph)` to evaluate a whole graph and `run_node(graph, id, inputs)` to
//! evaluate one node in isolation.

use std::any::Any;
use std::collections::HashMap;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use std::time::{Duration, Instant};

use futures::FutureExt;
use tracing::{error, info, instrument, warn};
use weft_config::{Node, WorkflowGraph};
use weft_nodes::{ExecutorRegistry, Inputs, LogSink, NodeContext, NoopSink};
use weft_workflow::{GraphIndex, topological_order};

use crate::error::RuntimeError;
use crate::input::resolve_inputs;
use crate::result::{NodeResult, RunResult};

/// Evaluates graphs against an executor registry.
///
/// Holds no state between runs; one runtime can serve any number of runs,
/// one after another or from different tasks.
pub struct Runtime {
  registry: Arc<ExecutorRegistry>,
  sink: Arc<dyn LogSink>,
}

impl Runtime {
  /// Create a runtime that dispatches through `registry`.
  pub fn new(registry: Arc<ExecutorRegistry>) -> Self {
    Self {
      registry,
      sink: Arc::new(NoopSink),
    }
  }

  /// Send progress lines to `sink`.
  pub fn with_sink(mut self, sink: Arc<dyn LogSink>) -> Self {
    self.sink = sink;
    self
  }

  pub fn registry(&self) -> &ExecutorRegistry {
    &self.registry
  }

  /// Evaluate every node of `graph` once, upstream before downstream.
  ///
  /// Returns an error only for structural problems, in which case nothing
  /// was executed. Node failures are reported in the result.
  #[instrument(
    name = "runtime_run",
    skip(self, graph),
    fields(
      nodes = graph.nodes.len(),
      edges = graph.edges.len(),
    )
  )]
  pub async fn run(&self, graph: &WorkflowGraph) -> Result<RunResult, RuntimeError> {
    let started = Instant::now();
    let execution_id = uuid::Uuid::new_v4().to_string();

    info!(execution_id = %execution_id, "workflow_started");

    let (index, order) = match plan(graph) {
      Ok(plan) => plan,
      Err(e) => {
        error!(execution_id = %execution_id, error = %e, "workflow_failed");
        self.sink.log(&format!("Workflow failed: {}", e));
        return Err(e);
      }
    };

    self
      .sink
      .log(&format!("Execution order: {}", order.join(" -> ")));
    info!(execution_id = %execution_id, order = ?order, "execution_order");

    let mut completed: HashMap<String, NodeResult> = HashMap::with_capacity(order.len());
    for &node_id in &order {
      let Some(node) = index.node(node_id) else {
        continue;
      };
      let inputs = resolve_inputs(&index, node_id, &completed);
      let result = self.execute_node(node, inputs, &execution_id).await;
      completed.insert(node_id.to_string(), result);
    }

    let total = millis(started.elapsed());
    let failed = completed.values().filter(|r| !r.is_success()).count();
    self
      .sink
      .log(&format!("Workflow completed in {:.1}ms", total));
    info!(
      execution_id = %execution_id,
      nodes_executed = completed.len(),
      nodes_failed = failed,
      total_ms = total,
      "workflow_completed"
    );

    Ok(RunResult {
      node_results: completed,
      total_execution_time: total,
      execution_order: order.into_iter().map(str::to_string).collect(),
    })
  }

  /// Execute a single node with caller-supplied inputs.
  ///
  /// This is for debugging: no other node runs and no edges are followed.
  #[instrument(
    name = "runtime_run_node",
    skip(self, graph, inputs),
    fields(node_id = %node_id)
  )]
  pub async fn run_node(
    &self,
    graph: &WorkflowGraph,
    node_id: &str,
    inputs: Inputs,
  ) -> Result<NodeResult, RuntimeError> {
    let node = graph
      .get_node(node_id)
      .ok_or_else(|| RuntimeError::NodeNotFound {
        node_id: node_id.to_string(),
      })?;

    let execution_id = uuid::Uuid::new_v4().to_string();
    Ok(self.execute_node(node, inputs, &execution_id).await)
  }

  /// Dispatch one node to its executor and record the outcome.
  async fn execute_node(&self, node: &Node, inputs: Inputs, execution_id: &str) -> NodeResult {
    let started = Instant::now();

    self
      .sink
      .log(&format!("Executing node {} ({})", node.id, node.kind));
    info!(
      execution_id = %execution_id,
      node_id = %node.id,
      kind = %node.kind,
      "node_started"
    );

    let outcome = match self.registry.get(&node.kind) {
      None => Err(format!("no executor for node kind: {}", node.kind)),
      Some(executor) => {
        let ctx = NodeContext::new(&node.id, &inputs, self.sink.as_ref());
        match AssertUnwindSafe(executor.execute(&node.data, &ctx))
          .catch_unwind()
          .await
        {
          Ok(Ok(output)) => Ok(output),
          Ok(Err(e)) => Err(e.to_string()),
          Err(panic) => {
            warn!(node_id = %node.id, kind = %node.kind, "executor panicked");
            Err(format!("executor panicked: {}", panic_message(panic.as_ref())))
          }
        }
      }
    };
    let elapsed = millis(started.elapsed());

    match outcome {
      Ok(output) => {
        self
          .sink
          .log(&format!("Node {} completed: {}", node.id, output));
        info!(
          execution_id = %execution_id,
          node_id = %node.id,
          output = %output,
          elapsed_ms = elapsed,
          "node_completed"
        );
        NodeResult::success(inputs, output, elapsed)
      }
      Err(message) => {
        self
          .sink
          .log(&format!("Node {} failed: {}", node.id, message));
        error!(
          execution_id = %execution_id,
          node_id = %node.id,
          error = %message,
          elapsed_ms = elapsed,
          "node_failed"
        );
        NodeResult::failure(inputs, message, elapsed)
      }
    }
  }
}

impl Default for Runtime {
  /// A runtime on the process-wide default registry.
  fn default() -> Self {
    Self::new(ExecutorRegistry::global())
  }
}

/// Index the graph and compute its execution order.
fn plan(graph: &WorkflowGraph) -> Result<(GraphIndex<'_>, Vec<&str>), RuntimeError> {
  let index = GraphIndex::new(&graph.nodes, &graph.edges)?;
  let order = topological_order(&index)?;
  Ok((index, order))
}

fn millis(duration: Duration) -> f64 {
  duration.as_secs_f64() * 1000.0
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
  if let Some(s) = payload.downcast_ref::<&str>() {
    s.to_string()
  } else if let Some(s) = payload.downcast_ref::<String>() {
    s.clone()
  } else {
    "unknown panic".to_string()
  }
}
