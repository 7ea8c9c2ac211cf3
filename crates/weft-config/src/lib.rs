//! Weft Config
//!
//! This crate contains the serializable graph types for weft. These are the
//! structures the editor and the graph generator exchange with the engine:
//!
//! ```json
//! {
//!   "nodes": [
//!     { "id": "a", "type": "inputNode", "data": { "value": 10 }, "position": { "x": 0, "y": 0 } },
//!     { "id": "out", "type": "outputNode", "data": {}, "position": { "x": 200, "y": 0 } }
//!   ],
//!   "edges": [{ "id": "e1", "source": "a", "target": "out" }]
//! }
//! ```
//!
//! The engine treats `data` as opaque kind-specific configuration and never
//! looks at `position`.

mod edge;
pub mod kinds;
mod node;
mod workflow;

pub use edge::{DEFAULT_INPUT_SLOT, Edge};
pub use node::{Node, Position};
pub use workflow::WorkflowGraph;
