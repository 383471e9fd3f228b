use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::ops::{BitAnd, Not};

use crate::error::{AigError, PortKind};
use crate::graph::Aig;
use crate::node::{Node, NodeKind};

/// The shared interface of eager and lazy circuits. Evaluation and flattening
/// are defined once here, over any type that can name its ports and replay
/// its nodes in dependency order.
pub trait AigLike {
    /// Names of the free inputs. Disjoint from the latch names.
    fn inputs(&self) -> &BTreeSet<String>;

    /// Mapping from output name to the node whose value the output reads.
    fn node_map(&self) -> &BTreeMap<String, Node>;

    /// Mapping from latch name to its next-state expression.
    fn latch_map(&self) -> &BTreeMap<String, Node>;

    /// Mapping from latch name to its initial value.
    fn latch2init(&self) -> &BTreeMap<String, bool>;

    /// Free-text annotations, concatenated under composition.
    fn comments(&self) -> &[String];

    /// The circuit's nodes grouped into batches such that every node's
    /// dependencies appear in the same or an earlier batch. This is a
    /// repeatable description: each call re-walks the circuit from scratch
    /// and produces the same sequence.
    fn node_batches(&self) -> Vec<Vec<Node>>;

    fn outputs(&self) -> BTreeSet<String> {
        self.node_map().keys().cloned().collect()
    }

    fn latches(&self) -> BTreeSet<String> {
        self.latch_map().keys().cloned().collect()
    }

    /// Interpret the circuit over any boolean algebra expressible through the
    /// `&` and `!` operators. A single forward pass over [Self::node_batches]
    /// resolves every node; a [NodeKind::Shim] aliases its `new` node to the
    /// value already computed for `old`.
    ///
    /// Values are memoized per allocation, not per structure: a shim may
    /// rewire one occurrence of a name onto a different value than another
    /// occurrence elsewhere in the stream.
    ///
    /// Concrete evaluation uses `V = bool`; [Self::flatten] uses `V = Node`,
    /// whose operators perform the constant-folding rewrites.
    fn eval_with<V>(
        &self,
        inputs: &BTreeMap<String, V>,
        latches: &BTreeMap<String, V>,
        false_value: V,
    ) -> Result<(BTreeMap<String, V>, BTreeMap<String, V>), AigError>
    where
        V: Clone + BitAnd<Output = V> + Not<Output = V>,
    {
        let mut memo: HashMap<*const NodeKind, V> = HashMap::new();
        for batch in self.node_batches() {
            for node in batch {
                let value = match node.kind() {
                    NodeKind::False => false_value.clone(),
                    NodeKind::Input(name) => inputs
                        .get(name)
                        .cloned()
                        .ok_or_else(|| AigError::MissingInput(name.clone()))?,
                    NodeKind::LatchIn(name) => latches
                        .get(name)
                        .cloned()
                        .ok_or_else(|| AigError::MissingLatch(name.clone()))?,
                    NodeKind::And(lhs, rhs) => {
                        let lhs = memo
                            .get(&lhs.addr())
                            .cloned()
                            .ok_or(AigError::DanglingReference)?;
                        let rhs = memo
                            .get(&rhs.addr())
                            .cloned()
                            .ok_or(AigError::DanglingReference)?;
                        lhs & rhs
                    }
                    NodeKind::Not(x) => !memo
                        .get(&x.addr())
                        .cloned()
                        .ok_or(AigError::DanglingReference)?,
                    NodeKind::Shim { new, old } => {
                        let value = memo
                            .get(&old.addr())
                            .cloned()
                            .ok_or(AigError::DanglingReference)?;
                        memo.insert(new.addr(), value);
                        continue;
                    }
                };
                memo.insert(node.addr(), value);
            }
        }

        let resolve = |ports: &BTreeMap<String, Node>| {
            ports
                .iter()
                .map(|(name, node)| {
                    memo.get(&node.addr())
                        .cloned()
                        .map(|value| (name.clone(), value))
                        .ok_or(AigError::DanglingReference)
                })
                .collect::<Result<BTreeMap<String, V>, AigError>>()
        };

        Ok((resolve(self.node_map())?, resolve(self.latch_map())?))
    }

    /// Evaluate the circuit on a concrete input assignment, returning the
    /// output assignment and the next latch-state assignment. Latch state
    /// defaults to the declared initial values; `latch_state` overrides
    /// individual latches.
    fn evaluate(
        &self,
        inputs: &BTreeMap<String, bool>,
        latch_state: Option<&BTreeMap<String, bool>>,
    ) -> Result<(BTreeMap<String, bool>, BTreeMap<String, bool>), AigError> {
        let mut latches = self.latch2init().clone();
        if let Some(overrides) = latch_state {
            for (name, value) in overrides {
                if !latches.contains_key(name) {
                    return Err(AigError::UnknownName {
                        kind: PortKind::Latch,
                        name: name.clone(),
                    });
                }
                latches.insert(name.clone(), *value);
            }
        }

        self.eval_with(inputs, &latches, false)
    }

    /// Force the circuit into a concrete eager graph by evaluating it
    /// symbolically: every input is bound to an opaque [NodeKind::Input],
    /// every latch to its [NodeKind::LatchIn] current-state variable.
    ///
    /// Latches are deliberately bound to their state symbols rather than
    /// their initial-value constants: the flattened graph keeps the latch
    /// and evaluates identically to the original on every step and under
    /// latch-state overrides, not just on the first step.
    ///
    /// Pure and idempotent; flattening the same circuit twice yields
    /// identical results.
    fn flatten(&self) -> Result<Aig, AigError> {
        let inputs = self
            .inputs()
            .iter()
            .map(|name| (name.clone(), Node::input(name.clone())))
            .collect();
        let latches = self
            .latch2init()
            .keys()
            .map(|name| (name.clone(), Node::latch_in(name.clone())))
            .collect();

        let (node_map, latch_map) = self.eval_with(&inputs, &latches, Node::constant(false))?;

        Aig::new(
            self.inputs().clone(),
            node_map,
            latch_map,
            self.latch2init().clone(),
            self.comments().to_vec(),
        )
    }
}
