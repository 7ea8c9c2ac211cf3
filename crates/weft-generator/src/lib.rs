//! Weft Generator
//!
//! Client for the external service that turns a natural-language prompt into
//! a proposed graph. The service is a plain HTTP endpoint:
//!
//! ```text
//! POST <endpoint>  {"prompt": "..."}
//!   200 -> {"workflow": {"nodes": [...], "edges": [...], "metadata": {...}}}
//!   4xx/5xx -> {"error": "..."}
//! ```
//!
//! Proposals are untrusted. [`GeneratedWorkflow::into_graph`] only yields a
//! [`WorkflowGraph`](weft_config::WorkflowGraph) after [`validate`] accepts it.

mod client;
mod error;
mod types;
mod validate;

pub use client::{DEFAULT_ENDPOINT, DEFAULT_TIMEOUT, GeneratorClient, GeneratorConfig};
pub use error::GeneratorError;
pub use types::{GeneratedWorkflow, WorkflowMetadata};
pub use validate::validate;
