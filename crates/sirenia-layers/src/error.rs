use crate::graph::NodeId;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("layer {layer} does not exist (graph has {layer_count} layers)")]
    UnknownLayer { layer: usize, layer_count: usize },

    #[error("unknown node handle {node}")]
    UnknownNode { node: NodeId },

    #[error("duplicate node id: {id}")]
    DuplicateNode { id: String },

    #[error(
        "child '{child}' of '{parent}' is in layer {child_layer}, expected layer {}",
        .parent_layer + 1
    )]
    ChildNotInNextLayer {
        parent: String,
        child: String,
        parent_layer: usize,
        child_layer: usize,
    },

    #[error(
        "child index {index} of entry {entry} in layer {layer} is out of range (next layer has {size} nodes)"
    )]
    ChildIndexOutOfRange {
        layer: usize,
        entry: usize,
        index: usize,
        size: usize,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
