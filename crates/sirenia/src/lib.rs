#![forbid(unsafe_code)]

//! Coordinate assignment for layered (Sugiyama-style) DAG drawings.
//!
//! Upstream stages decide which layer every node lives in and the left-to-right order inside each
//! layer. The operators in this crate only decide *where* along the layer each node goes: they
//! overwrite the `x` of every node in a [`LayeredGraph`] with a value in `[0, 1]`, keeping
//! adjacent nodes at least [`Separation`] apart (before scaling).
//!
//! ```
//! use sirenia::layers::{LayerEntry, LayeredGraph, UniformSeparation};
//!
//! let mut g = LayeredGraph::from_child_indices(&[
//!     vec![LayerEntry::Real(vec![0, 1])],
//!     vec![LayerEntry::Real(vec![0]), LayerEntry::Real(vec![0])],
//! ])?;
//! sirenia::layout(&mut g, &UniformSeparation::default())?;
//! assert_eq!(g.positions()["2,0"], 0.5);
//! # Ok::<(), sirenia::Error>(())
//! ```

pub use sirenia_layers as layers;

use sirenia_layers::{LayeredGraph, NodeId, Separation};

pub mod error;
pub mod greedy;
pub mod normalize;
pub mod strict_map;

pub use error::{Error, Result};
pub use greedy::Greedy;
pub use strict_map::StrictMap;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Scratch positions keyed by node handle.
pub type Positions = StrictMap<NodeId, f64>;

/// Contract shared by coordinate-assignment operators.
///
/// On success every node of `graph` has a fresh `x`; on failure no position is touched.
pub trait CoordAssignment {
    fn name(&self) -> &'static str;

    fn assign(&self, graph: &mut LayeredGraph, separation: &dyn Separation) -> Result<()>;
}

/// Assigns coordinates with the default [`Greedy`] operator.
pub fn layout(graph: &mut LayeredGraph, separation: &dyn Separation) -> Result<()> {
    Greedy::new().assign(graph, separation)
}

/// Copies `positions` onto the graph. Every node must have an entry.
pub fn write_positions(graph: &mut LayeredGraph, positions: &Positions) -> Result<()> {
    let resolved = graph
        .nodes()
        .map(|(id, _)| Ok((id, positions.get_strict(id)?)))
        .collect::<Result<Vec<_>>>()?;
    for (id, x) in resolved {
        graph.set_x(id, x)?;
    }
    Ok(())
}
