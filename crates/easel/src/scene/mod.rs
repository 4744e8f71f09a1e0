//! Scene registry: the window's ordered collection of live objects.
//!
//! Responsibilities:
//! - own object state in a generational arena indexed by [`NodeId`]
//! - provide deterministic paint order (depth + insertion order)
//! - plan depth-limited refreshes; the window performs the surface calls

mod depth;
mod key;
mod node;
mod registry;

pub(crate) use depth::Depth;
pub(crate) use key::SortKey;
pub(crate) use node::{ImageData, Node, NodeKind, ShapeData, ShapeVariant, TextData};
pub(crate) use registry::{NodeId, Scene};
