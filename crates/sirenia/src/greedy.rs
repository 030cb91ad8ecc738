//! Greedy coordinate assignment.
//!
//! Every node starts at the mean of its parents and is then spaced out to respect its
//! separation. Nodes with a higher degree that aren't dummy nodes get to stay closer to that mean
//! while lower-priority neighbours are pushed aside. The result is more pleasing than centring
//! each layer and much cheaper than solving a quadratic program.
//!
//! The pipeline is:
//!
//! 1. [`priority::degrees`] builds the priority table once for the whole graph.
//! 2. [`seed::first_layer`] chains the top layer at exact separations.
//! 3. For every later layer, [`seed::mean_assignment`] seeds it from the layer above and
//!    [`refine::refine_layer`] repairs separation violations in priority order.
//! 4. [`crate::normalize::normalize`] maps the whole drawing onto `[0, 1]`.

use crate::error::{Error, Result};
use crate::normalize::normalize;
use crate::{CoordAssignment, Positions, StrictMap, write_positions};
use serde_json::Value;
use sirenia_layers::{LayeredGraph, NodeId, Separation};
use tracing::debug;

pub mod priority;
pub mod refine;
pub mod seed;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Greedy;

impl Greedy {
    pub const NAME: &'static str = "greedy";

    pub fn new() -> Self {
        Self
    }

    /// Builds the operator from a JSON options value.
    ///
    /// The operator has no parameters: only `null` and `{}` are accepted, anything else is a
    /// configuration error naming what was passed.
    pub fn from_options(options: &Value) -> Result<Self> {
        let rejected = match options {
            Value::Null => return Ok(Self),
            Value::Object(map) if map.is_empty() => return Ok(Self),
            Value::Object(map) => {
                let mut keys: Vec<String> = map.keys().cloned().collect();
                keys.sort();
                keys
            }
            other => vec![other.to_string()],
        };
        Err(Error::Configuration {
            operator: Self::NAME,
            options: rejected,
        })
    }

    pub fn prioritize(&self, graph: &LayeredGraph) -> Result<StrictMap<NodeId, i64>> {
        priority::degrees(graph)
    }

    /// Computes unnormalized positions without touching the graph.
    pub fn place(&self, graph: &LayeredGraph, separation: &dyn Separation) -> Result<Positions> {
        let Some((first, rest)) = graph.layers().split_first() else {
            return Err(Error::InvalidInput {
                message: "graph has no layers".to_string(),
            });
        };

        let priorities = priority::degrees(graph)?;
        let mut positions = Positions::with_capacity("position", graph.node_count());

        seed::first_layer(graph, first, separation, &mut positions)?;

        let mut top = first;
        for (ix, layer) in rest.iter().enumerate() {
            seed::mean_assignment(graph, top, layer, &mut positions)?;
            refine::refine_layer(graph, layer, &priorities, separation, &mut positions)?;
            debug!(layer = ix + 1, nodes = layer.len(), "placed layer");
            top = layer;
        }

        Ok(positions)
    }
}

impl CoordAssignment for Greedy {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn assign(&self, graph: &mut LayeredGraph, separation: &dyn Separation) -> Result<()> {
        let _span = tracing::debug_span!(
            "greedy",
            layers = graph.layer_count(),
            nodes = graph.node_count()
        )
        .entered();

        let mut positions = self.place(graph, separation)?;
        let extent = normalize(&mut positions)?;
        debug!(extent, "normalized positions");
        write_positions(graph, &positions)
    }
}

/// Rejects a position that accumulated gaps pushed past the `f64` range.
pub(crate) fn finite(graph: &LayeredGraph, node: NodeId, x: f64) -> Result<f64> {
    if x.is_finite() {
        return Ok(x);
    }
    let id = graph.node(node).map(|n| n.id()).unwrap_or_default();
    Err(Error::Overflow {
        message: format!("position of {id} is {x}"),
    })
}

/// Asks the oracle for the gap between two adjacent nodes and rejects unusable answers.
pub(crate) fn gap(
    graph: &LayeredGraph,
    separation: &dyn Separation,
    left: NodeId,
    right: NodeId,
) -> Result<f64> {
    let (Some(l), Some(r)) = (graph.node(left), graph.node(right)) else {
        return Err(Error::InvariantViolation {
            message: format!("separation queried for unknown node {left} or {right}"),
        });
    };

    let gap = separation.separation(l, r);
    if gap.is_finite() && gap >= 0.0 {
        Ok(gap)
    } else {
        Err(Error::InvalidSeparation {
            left: l.id().to_string(),
            right: r.id().to_string(),
            gap,
        })
    }
}
