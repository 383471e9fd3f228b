#![doc = include_str!("../README.md")]

mod circuit;
mod error;
mod fresh;
mod graph;
mod lazy;
mod node;
pub mod primitives;

#[cfg(test)]
mod tests;

pub use circuit::AigLike;
pub use error::{AigError, PortKind};
pub use fresh::{fresh_name, FreshNames};
pub use graph::Aig;
pub use lazy::{lazy, CutLatch, LazyAig, Unroll, Wiring};
pub use node::{Node, NodeKind};
