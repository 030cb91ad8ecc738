//! Degree-based priorities.
//!
//! A node's priority is its total degree (children plus incoming edges), with dummy nodes pushed
//! to the bottom by a fixed penalty. A dummy always has degree 2, so `2 - 3 = -1` ranks it below
//! every real node.
//!
//! The penalty does not grow with the graph. It is kept at 3 so layouts stay identical to
//! existing drawings.

use crate::error::{Error, Result};
use crate::strict_map::StrictMap;
use sirenia_layers::{LayeredGraph, NodeId};

pub const DUMMY_PRIORITY_PENALTY: i64 = 3;

pub fn degrees(graph: &LayeredGraph) -> Result<StrictMap<NodeId, i64>> {
    let mut degrees = StrictMap::with_capacity("priority", graph.node_count());

    for layer in graph.layers() {
        for &id in layer {
            let node = graph.node(id).ok_or_else(|| Error::missing("node", id))?;
            let mut degree = node.children().len() as i64;
            if node.is_dummy() {
                degree -= DUMMY_PRIORITY_PENALTY;
            }
            degrees.insert(id, degree);
        }
    }

    for layer in graph.layers() {
        for &id in layer {
            for &child in graph.children(id) {
                *degrees.get_strict_mut(child)? += 1;
            }
        }
    }

    Ok(degrees)
}
