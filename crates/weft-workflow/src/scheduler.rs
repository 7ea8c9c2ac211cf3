//! Deterministic dependency-first ordering.
//!
//! Reverse-postorder depth-first search with three marks (unvisited,
//! in progress, done), driven by an explicit stack so that long chains do not
//! grow the call stack. Roots are tried in node list order and outgoing edges
//! are followed in edge list order, so a fixed graph always yields the same
//! order.

use std::collections::HashMap;

use crate::error::WorkflowError;
use crate::graph::GraphIndex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
  InProgress,
  Done,
}

/// Compute an execution order in which every node comes after all of its
/// upstream nodes.
///
/// Edges to ids that are not in the graph are ignored. Reaching a node that is
/// still in progress means the graph has a cycle; the error names that node.
pub fn topological_order<'a>(index: &GraphIndex<'a>) -> Result<Vec<&'a str>, WorkflowError> {
  let mut marks: HashMap<&'a str, Mark> = HashMap::with_capacity(index.len());
  let mut postorder: Vec<&'a str> = Vec::with_capacity(index.len());
  // (node id, next outgoing edge to follow)
  let mut stack: Vec<(&'a str, usize)> = Vec::new();

  for &root in index.node_ids() {
    if marks.contains_key(root) {
      continue;
    }
    marks.insert(root, Mark::InProgress);
    stack.push((root, 0));

    while let Some(frame) = stack.last_mut() {
      let (node_id, cursor) = *frame;
      match index.outgoing(node_id).get(cursor) {
        Some(&edge) => {
          frame.1 += 1;
          let target = edge.target.as_str();
          if !index.contains(target) {
            continue;
          }
          match marks.get(target) {
            Some(Mark::InProgress) => {
              return Err(WorkflowError::Cycle {
                node_id: target.to_string(),
              });
            }
            Some(Mark::Done) => {}
            None => {
              marks.insert(target, Mark::InProgress);
              stack.push((target, 0));
            }
          }
        }
        None => {
          stack.pop();
          marks.insert(node_id, Mark::Done);
          postorder.push(node_id);
        }
      }
    }
  }

  postorder.reverse();
  Ok(postorder)
}
