#![forbid(unsafe_code)]

//! Layered graph model used by `sirenia`.
//!
//! A [`LayeredGraph`] is the hand-off point between the upstream Sugiyama stages (layering,
//! dummy-chain insertion and crossing minimisation) and coordinate assignment: nodes are already
//! split into ordered layers and every edge runs from one layer to the next.

pub mod error;
pub mod graph;
pub mod separation;

pub use error::{Error, Result};
pub use graph::{LayerEntry, LayeredGraph, Node, NodeId, NodeKind};
pub use separation::{KindSeparation, Separation, UniformSeparation};
