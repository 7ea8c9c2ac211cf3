//! Weft Runtime
//!
//! This crate provides the [`Runtime`], which evaluates a
//! [`WorkflowGraph`](weft_config::WorkflowGraph) once:
//!
//! 1. index the graph and compute a dependency-first order (cycles and
//!    duplicate ids abort here, before anything runs)
//! 2. for each node in order, gather its inputs from upstream outputs
//! 3. dispatch to the executor registered for the node's kind
//! 4. record output, timing and status per node
//!
//! A failing node never stops the run. Nodes downstream of it see an absent
//! input and apply their own rules.

mod error;
mod input;
mod result;
mod runtime;

pub use error::RuntimeError;
pub use input::resolve_inputs;
pub use result::{NodeResult, NodeStatus, RunResult};
pub use runtime::Runtime;
