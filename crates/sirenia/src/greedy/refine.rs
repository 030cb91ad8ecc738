//! Priority-ordered separation repair within one layer.
//!
//! Each node, highest priority first, acts as an anchor: nodes to its right are pushed right and
//! nodes to its left are pushed left until every adjacent pair on that side is at least one
//! separation apart. Later anchors may undo part of an earlier push. There is a single pass per
//! node and no iteration to a fixed point.

use super::{finite, gap};
use crate::Positions;
use crate::error::Result;
use crate::strict_map::StrictMap;
use sirenia_layers::{LayeredGraph, NodeId, Separation};
use tracing::trace;

/// `(index, node)` pairs sorted by descending priority, equal priorities by ascending index.
pub fn priority_order(
    layer: &[NodeId],
    priorities: &StrictMap<NodeId, i64>,
) -> Result<Vec<(usize, NodeId)>> {
    let mut keyed = layer
        .iter()
        .enumerate()
        .map(|(ix, &node)| Ok((priorities.get_strict(node)?, ix, node)))
        .collect::<Result<Vec<_>>>()?;
    keyed.sort_by(|(a_prio, a_ix, _), (b_prio, b_ix, _)| {
        b_prio.cmp(a_prio).then(a_ix.cmp(b_ix))
    });
    Ok(keyed.into_iter().map(|(_, ix, node)| (ix, node)).collect())
}

pub fn refine_layer(
    graph: &LayeredGraph,
    layer: &[NodeId],
    priorities: &StrictMap<NodeId, i64>,
    separation: &dyn Separation,
    positions: &mut Positions,
) -> Result<()> {
    for (ix, anchor) in priority_order(layer, priorities)? {
        let anchor_x = positions.get_strict(anchor)?;
        trace!(%anchor, index = ix, x = anchor_x, "refining from anchor");

        let mut last = anchor;
        let mut last_x = anchor_x;
        for &next in &layer[ix + 1..] {
            let min_x = finite(graph, next, last_x + gap(graph, separation, last, next)?)?;
            let x = positions.get_strict_mut(next)?;
            *x = x.max(min_x);
            last_x = *x;
            last = next;
        }

        let mut last = anchor;
        let mut last_x = anchor_x;
        for &next in layer[..ix].iter().rev() {
            let max_x = finite(graph, next, last_x - gap(graph, separation, next, last)?)?;
            let x = positions.get_strict_mut(next)?;
            *x = x.min(max_x);
            last_x = *x;
            last = next;
        }
    }
    Ok(())
}
