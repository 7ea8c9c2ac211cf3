//! Weft Workflow
//!
//! Structural analysis of a [`WorkflowGraph`](weft_config::WorkflowGraph):
//!
//! - [`GraphIndex`] maps node ids to nodes and to their incoming and outgoing
//!   edges, without validating that edges point anywhere.
//! - [`topological_order`] produces the dependency-first execution order and
//!   rejects cycles.
//!
//! Nothing here executes nodes; that is the runtime's job.

mod error;
mod graph;
mod scheduler;

pub use error::WorkflowError;
pub use graph::GraphIndex;
pub use scheduler::topological_order;
