use std::collections::HashMap;

use weft_config::{Edge, Node};

use crate::error::WorkflowError;

/// Lookup structures over a borrowed node and edge list.
///
/// Edges that reference unknown node ids are kept: an edge from a missing
/// source still shows up in its target's incoming list and resolves to an
/// absent value at execution time.
#[derive(Debug, Clone)]
pub struct GraphIndex<'a> {
  /// Node ids in input list order.
  order: Vec<&'a str>,
  nodes: HashMap<&'a str, &'a Node>,
  /// target id -> edges into it, in edge list order.
  incoming: HashMap<&'a str, Vec<&'a Edge>>,
  /// source id -> edges out of it, in edge list order.
  outgoing: HashMap<&'a str, Vec<&'a Edge>>,
}

impl<'a> GraphIndex<'a> {
  /// Build the index. Fails if two nodes share an id.
  pub fn new(nodes: &'a [Node], edges: &'a [Edge]) -> Result<Self, WorkflowError> {
    let mut order = Vec::with_capacity(nodes.len());
    let mut by_id = HashMap::with_capacity(nodes.len());
    for node in nodes {
      if by_id.insert(node.id.as_str(), node).is_some() {
        return Err(WorkflowError::DuplicateNode {
          node_id: node.id.clone(),
        });
      }
      order.push(node.id.as_str());
    }

    let mut incoming: HashMap<&str, Vec<&Edge>> = HashMap::new();
    let mut outgoing: HashMap<&str, Vec<&Edge>> = HashMap::new();
    for edge in edges {
      incoming.entry(edge.target.as_str()).or_default().push(edge);
      outgoing.entry(edge.source.as_str()).or_default().push(edge);
    }

    Ok(Self {
      order,
      nodes: by_id,
      incoming,
      outgoing,
    })
  }

  /// Node ids in the order the nodes were given.
  pub fn node_ids(&self) -> &[&'a str] {
    &self.order
  }

  pub fn node(&self, node_id: &str) -> Option<&'a Node> {
    self.nodes.get(node_id).copied()
  }

  pub fn contains(&self, node_id: &str) -> bool {
    self.nodes.contains_key(node_id)
  }

  /// Edges whose target is `node_id`.
  pub fn incoming(&self, node_id: &str) -> &[&'a Edge] {
    self
      .incoming
      .get(node_id)
      .map(|v| v.as_slice())
      .unwrap_or(&[])
  }

  /// Edges whose source is `node_id`.
  pub fn outgoing(&self, node_id: &str) -> &[&'a Edge] {
    self
      .outgoing
      .get(node_id)
      .map(|v| v.as_slice())
      .unwrap_or(&[])
  }

  pub fn len(&self) -> usize {
    self.order.len()
  }

  pub fn is_empty(&self) -> bool {
    self.order.is_empty()
  }
}
