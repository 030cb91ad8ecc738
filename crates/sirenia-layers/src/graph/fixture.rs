//! Compact construction from per-layer child index lists.

use super::{LayeredGraph, NodeKind};
use crate::error::{Error, Result};

/// One node of a layer described by the indices of its children in the next layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayerEntry {
    Real(Vec<usize>),
    /// A dummy node always routes to exactly one child.
    Dummy(usize),
}

impl LayerEntry {
    fn kind(&self) -> NodeKind {
        match self {
            LayerEntry::Real(_) => NodeKind::Real,
            LayerEntry::Dummy(_) => NodeKind::Dummy,
        }
    }

    fn children(&self) -> &[usize] {
        match self {
            LayerEntry::Real(children) => children,
            LayerEntry::Dummy(child) => std::slice::from_ref(child),
        }
    }
}

impl LayeredGraph {
    /// Builds a graph from layer descriptions.
    ///
    /// Node ids are `"{layer},{index}"`. When the last described layer references children, a
    /// final layer of childless real nodes is appended, sized by the largest referenced index.
    pub fn from_child_indices(layers: &[Vec<LayerEntry>]) -> Result<Self> {
        let mut g = LayeredGraph::new();
        let mut handles = Vec::with_capacity(layers.len() + 1);

        for (layer_ix, entries) in layers.iter().enumerate() {
            let layer = g.add_layer();
            let ids = entries
                .iter()
                .enumerate()
                .map(|(ix, entry)| g.add_node(layer, format!("{layer_ix},{ix}"), entry.kind()))
                .collect::<Result<Vec<_>>>()?;
            handles.push(ids);
        }

        let tail_len = layers
            .last()
            .into_iter()
            .flatten()
            .flat_map(|entry| entry.children().iter().map(|&c| c + 1))
            .max()
            .unwrap_or(0);
        if tail_len > 0 {
            let layer = g.add_layer();
            let ids = (0..tail_len)
                .map(|ix| g.add_node(layer, format!("{layer},{ix}"), NodeKind::Real))
                .collect::<Result<Vec<_>>>()?;
            handles.push(ids);
        }

        for (layer_ix, entries) in layers.iter().enumerate() {
            let next = handles.get(layer_ix + 1).map(Vec::as_slice).unwrap_or(&[]);
            for (entry_ix, entry) in entries.iter().enumerate() {
                let parent = handles[layer_ix][entry_ix];
                for &index in entry.children() {
                    let Some(&child) = next.get(index) else {
                        return Err(Error::ChildIndexOutOfRange {
                            layer: layer_ix,
                            entry: entry_ix,
                            index,
                            size: next.len(),
                        });
                    };
                    g.add_edge(parent, child)?;
                }
            }
        }

        Ok(g)
    }
}
