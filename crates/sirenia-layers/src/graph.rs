//! Layered graph container.
//!
//! Nodes live in an arena and are addressed by [`NodeId`] handles. Structure (ids, layers and
//! child lists) can only grow through the builder methods, which enforce the layering discipline:
//! every child sits in the layer directly below its parent. The horizontal position `x` is the only
//! field coordinate assignment writes.

use crate::error::{Error, Result};
use rustc_hash::FxHashMap as HashMap;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

mod fixture;

pub use fixture::LayerEntry;

/// Handle to a node inside a [`LayeredGraph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Real,
    /// Synthetic node routing a long edge through an intermediate layer.
    Dummy,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Node {
    id: String,
    kind: NodeKind,
    layer: usize,
    children: Vec<NodeId>,
    /// Horizontal position, `None` until a coordinate assignment has run.
    pub x: Option<f64>,
}

impl Node {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    pub fn is_dummy(&self) -> bool {
        self.kind == NodeKind::Dummy
    }

    pub fn layer(&self) -> usize {
        self.layer
    }

    /// Children in their fixed order.
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct LayeredGraph {
    nodes: Vec<Node>,
    layers: Vec<Vec<NodeId>>,
    #[serde(skip)]
    node_index: HashMap<String, NodeId>,
}

impl LayeredGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an empty layer below the existing ones and returns its index.
    pub fn add_layer(&mut self) -> usize {
        self.layers.push(Vec::new());
        self.layers.len() - 1
    }

    /// Appends a node to the right end of `layer`.
    pub fn add_node(
        &mut self,
        layer: usize,
        id: impl Into<String>,
        kind: NodeKind,
    ) -> Result<NodeId> {
        let id = id.into();
        let layer_count = self.layers.len();
        let Some(members) = self.layers.get_mut(layer) else {
            return Err(Error::UnknownLayer { layer, layer_count });
        };
        if self.node_index.contains_key(&id) {
            return Err(Error::DuplicateNode { id });
        }

        let handle = NodeId(self.nodes.len());
        members.push(handle);
        self.node_index.insert(id.clone(), handle);
        self.nodes.push(Node {
            id,
            kind,
            layer,
            children: Vec::new(),
            x: None,
        });
        Ok(handle)
    }

    /// Appends `child` to the end of `parent`'s child list.
    pub fn add_edge(&mut self, parent: NodeId, child: NodeId) -> Result<()> {
        let parent_node = self.node(parent).ok_or(Error::UnknownNode { node: parent })?;
        let child_node = self.node(child).ok_or(Error::UnknownNode { node: child })?;
        if child_node.layer != parent_node.layer + 1 {
            return Err(Error::ChildNotInNextLayer {
                parent: parent_node.id.clone(),
                child: child_node.id.clone(),
                parent_layer: parent_node.layer,
                child_layer: child_node.layer,
            });
        }

        self.nodes[parent.0].children.push(child);
        Ok(())
    }

    pub fn layers(&self) -> &[Vec<NodeId>] {
        &self.layers
    }

    pub fn layer(&self, layer: usize) -> Option<&[NodeId]> {
        self.layers.get(layer).map(Vec::as_slice)
    }

    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(|n| n.children.len()).sum()
    }

    pub fn node(&self, node: NodeId) -> Option<&Node> {
        self.nodes.get(node.0)
    }

    pub fn node_mut(&mut self, node: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(node.0)
    }

    pub fn node_by_id(&self, id: &str) -> Option<NodeId> {
        self.node_index.get(id).copied()
    }

    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes.iter().enumerate().map(|(ix, n)| (NodeId(ix), n))
    }

    pub fn children(&self, node: NodeId) -> &[NodeId] {
        self.node(node).map(Node::children).unwrap_or(&[])
    }

    pub fn x(&self, node: NodeId) -> Option<f64> {
        self.node(node).and_then(|n| n.x)
    }

    pub fn set_x(&mut self, node: NodeId, x: f64) -> Result<()> {
        let n = self.node_mut(node).ok_or(Error::UnknownNode { node })?;
        n.x = Some(x);
        Ok(())
    }

    /// Snapshot of every assigned position keyed by node id.
    pub fn positions(&self) -> BTreeMap<String, f64> {
        self.nodes
            .iter()
            .filter_map(|n| n.x.map(|x| (n.id.clone(), x)))
            .collect()
    }
}
