use std::collections::{BTreeMap, BTreeSet, HashSet};

use crate::circuit::AigLike;
use crate::error::{AigError, PortKind};
use crate::lazy::LazyAig;
use crate::node::{Node, NodeKind};

/// A fully materialized And-Inverter Graph: explicit input and latch
/// namespaces, output and next-state nodes, and latch initial values.
/// Produced by [AigLike::flatten] or the [crate::primitives] constructors.
#[derive(Debug, Clone)]
pub struct Aig {
    inputs: BTreeSet<String>,
    node_map: BTreeMap<String, Node>,
    latch_map: BTreeMap<String, Node>,
    latch2init: BTreeMap<String, bool>,
    comments: Vec<String>,
}

impl Aig {
    /// Assemble a graph from its parts, checking the namespace invariants:
    /// inputs and latches must be disjoint, and the next-state map must be
    /// keyed identically to the initial-value map.
    pub fn new(
        inputs: BTreeSet<String>,
        node_map: BTreeMap<String, Node>,
        latch_map: BTreeMap<String, Node>,
        latch2init: BTreeMap<String, bool>,
        comments: Vec<String>,
    ) -> Result<Self, AigError> {
        let overlap: Vec<String> = inputs
            .iter()
            .filter(|name| latch_map.contains_key(*name))
            .cloned()
            .collect();
        if !overlap.is_empty() {
            return Err(AigError::NameCollision {
                kind: PortKind::Latch,
                names: overlap,
            });
        }

        for name in latch_map.keys() {
            if !latch2init.contains_key(name) {
                return Err(AigError::UnknownName {
                    kind: PortKind::Latch,
                    name: name.clone(),
                });
            }
        }
        for name in latch2init.keys() {
            if !latch_map.contains_key(name) {
                return Err(AigError::UnknownName {
                    kind: PortKind::Latch,
                    name: name.clone(),
                });
            }
        }

        Ok(Self {
            inputs,
            node_map,
            latch_map,
            latch2init,
            comments,
        })
    }

    /// Lift this graph into the lazy form. No graph copying takes place; the
    /// lazy circuit shares this graph's nodes.
    pub fn lazy(self) -> LazyAig {
        LazyAig::from(self)
    }

    /// All nodes in the cones of the outputs and latch next-states, in
    /// dependency-first order.
    fn topological_order(&self) -> Vec<Node> {
        let mut order = Vec::new();
        let mut seen = HashSet::new();

        for root in self.node_map.values().chain(self.latch_map.values()) {
            if seen.contains(&root.addr()) {
                continue;
            }

            // Iterative post-order walk. A node is pushed twice: once to
            // expand its children, once to emit it after they resolve.
            let mut stack = vec![(root.clone(), false)];
            while let Some((node, expanded)) = stack.pop() {
                if expanded {
                    order.push(node);
                    continue;
                }
                if !seen.insert(node.addr()) {
                    continue;
                }

                stack.push((node.clone(), true));
                match node.kind() {
                    NodeKind::And(lhs, rhs) => {
                        stack.push((rhs.clone(), false));
                        stack.push((lhs.clone(), false));
                    }
                    NodeKind::Not(x) => stack.push((x.clone(), false)),
                    _ => (),
                }
            }
        }

        order
    }
}

impl AigLike for Aig {
    fn inputs(&self) -> &BTreeSet<String> {
        &self.inputs
    }

    fn node_map(&self) -> &BTreeMap<String, Node> {
        &self.node_map
    }

    fn latch_map(&self) -> &BTreeMap<String, Node> {
        &self.latch_map
    }

    fn latch2init(&self) -> &BTreeMap<String, bool> {
        &self.latch2init
    }

    fn comments(&self) -> &[String] {
        &self.comments
    }

    fn node_batches(&self) -> Vec<Vec<Node>> {
        vec![self.topological_order()]
    }
}
