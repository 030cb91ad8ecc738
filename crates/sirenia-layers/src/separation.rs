//! Minimum horizontal gaps between adjacent nodes of a layer.

use crate::graph::{Node, NodeKind};

/// Supplies the minimum distance between two horizontally adjacent nodes of the same layer.
///
/// Implementations must not depend on the nodes' current `x`: coordinate assignment works on a
/// scratch buffer and only writes positions back once every layer is placed.
pub trait Separation {
    fn separation(&self, left: &Node, right: &Node) -> f64;
}

impl<F> Separation for F
where
    F: Fn(&Node, &Node) -> f64,
{
    fn separation(&self, left: &Node, right: &Node) -> f64 {
        self(left, right)
    }
}

/// The same gap between every pair of nodes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UniformSeparation(pub f64);

impl Default for UniformSeparation {
    fn default() -> Self {
        Self(1.0)
    }
}

impl Separation for UniformSeparation {
    fn separation(&self, _left: &Node, _right: &Node) -> f64 {
        self.0
    }
}

/// Each side contributes half the gap of its kind, like Dagre's `nodesep` / `edgesep` split.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KindSeparation {
    pub node: f64,
    pub dummy: f64,
}

impl KindSeparation {
    fn half(&self, kind: NodeKind) -> f64 {
        match kind {
            NodeKind::Real => self.node / 2.0,
            NodeKind::Dummy => self.dummy / 2.0,
        }
    }
}

impl Default for KindSeparation {
    fn default() -> Self {
        Self {
            node: 1.0,
            dummy: 1.0,
        }
    }
}

impl Separation for KindSeparation {
    fn separation(&self, left: &Node, right: &Node) -> f64 {
        self.half(left.kind()) + self.half(right.kind())
    }
}
