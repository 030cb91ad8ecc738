//! Initial positions before refinement.

use super::{finite, gap};
use crate::Positions;
use crate::error::{Error, Result};
use crate::strict_map::StrictMap;
use sirenia_layers::{LayeredGraph, NodeId, Separation};

/// Places the top layer left to right, each node exactly one separation after the previous.
pub fn first_layer(
    graph: &LayeredGraph,
    layer: &[NodeId],
    separation: &dyn Separation,
    positions: &mut Positions,
) -> Result<()> {
    let Some((&first, rest)) = layer.split_first() else {
        return Err(Error::InvalidInput {
            message: "first layer is empty".to_string(),
        });
    };

    let mut last = first;
    let mut last_x = 0.0;
    positions.insert(first, last_x);
    for &node in rest {
        last_x = finite(graph, node, last_x + gap(graph, separation, last, node)?)?;
        positions.insert(node, last_x);
        last = node;
    }
    Ok(())
}

/// Seeds `bottom` with the mean position of each node's parents in `top`.
///
/// The mean is accumulated online (`x += (parent - x) / count`), so the final value only depends
/// on the set of parent positions and not on the order parents are visited in. Nodes without a
/// parent stay at `0.0`.
pub fn mean_assignment(
    graph: &LayeredGraph,
    top: &[NodeId],
    bottom: &[NodeId],
    positions: &mut Positions,
) -> Result<()> {
    for &node in bottom {
        positions.insert(node, 0.0);
    }

    let mut counts: StrictMap<NodeId, u32> = StrictMap::with_capacity("parent count", bottom.len());
    for &parent in top {
        let parent_x = positions.get_strict(parent)?;
        for &child in graph.children(parent) {
            let count = counts.get_or(child, 0) + 1;
            counts.insert(child, count);
            let x = positions.get_strict_mut(child)?;
            let mean = *x + (parent_x - *x) / f64::from(count);
            *x = finite(graph, child, mean)?;
        }
    }
    Ok(())
}
