//! Primitive circuit constructors. These are the atoms the composition
//! operators build from; several are also used internally (input relabeling
//! composes a [tee] upstream, unroll uses [source] and [sink]).

use std::collections::BTreeMap;

use crate::error::{AigError, PortKind};
use crate::graph::Aig;
use crate::node::Node;

fn combinational(
    inputs: impl IntoIterator<Item = String>,
    node_map: BTreeMap<String, Node>,
) -> Aig {
    // No latches, so the namespace invariants hold trivially.
    match Aig::new(
        inputs.into_iter().collect(),
        node_map,
        BTreeMap::new(),
        BTreeMap::new(),
        Vec::new(),
    ) {
        Ok(aig) => aig,
        Err(err) => unreachable!("combinational primitive failed validation: {err}"),
    }
}

/// A circuit wiring each named input straight through to an output of the
/// same name.
pub fn identity(names: impl IntoIterator<Item = impl Into<String>>) -> Aig {
    let names: Vec<String> = names.into_iter().map(Into::into).collect();
    let node_map = names
        .iter()
        .map(|name| (name.clone(), Node::input(name.clone())))
        .collect();
    combinational(names, node_map)
}

/// A circuit with no inputs whose outputs are the given constants.
pub fn source(outputs: &BTreeMap<String, bool>) -> Aig {
    let node_map = outputs
        .iter()
        .map(|(name, &value)| (name.clone(), Node::constant(value)))
        .collect();
    combinational(Vec::new(), node_map)
}

/// A circuit that consumes the given inputs and exposes nothing.
pub fn sink(names: impl IntoIterator<Item = impl Into<String>>) -> Aig {
    combinational(names.into_iter().map(Into::into), BTreeMap::new())
}

/// A fan-out adaptor: each input drives every output named in its fan-out
/// list. Output names must be unique across the whole mapping.
pub fn tee(fanout: &BTreeMap<String, Vec<String>>) -> Result<Aig, AigError> {
    let mut node_map = BTreeMap::new();
    let mut duplicates = Vec::new();
    for (input, outputs) in fanout {
        let node = Node::input(input.clone());
        for output in outputs {
            if node_map.insert(output.clone(), node.clone()).is_some() {
                duplicates.push(output.clone());
            }
        }
    }
    if !duplicates.is_empty() {
        return Err(AigError::NameCollision {
            kind: PortKind::Output,
            names: duplicates,
        });
    }

    Ok(combinational(fanout.keys().cloned(), node_map))
}

/// The conjunction of the named inputs under a single output. With no inputs
/// the output is the constant true.
pub fn and_gate(inputs: impl IntoIterator<Item = impl Into<String>>, output: &str) -> Aig {
    let inputs: Vec<String> = inputs.into_iter().map(Into::into).collect();
    let gate = inputs
        .iter()
        .map(|name| Node::input(name.clone()))
        .fold(Node::constant(true), |acc, input| acc & input);

    let mut node_map = BTreeMap::new();
    node_map.insert(output.to_string(), gate);
    combinational(inputs, node_map)
}

/// A one-step delay buffer: the output reads the latch's current state and
/// the latch's next state is the input. The latch name must differ from the
/// input name (inputs and latches share no names).
pub fn delay(input: &str, latch: &str, init: bool) -> Result<Aig, AigError> {
    let mut node_map = BTreeMap::new();
    node_map.insert(input.to_string(), Node::latch_in(latch));

    let mut latch_map = BTreeMap::new();
    latch_map.insert(latch.to_string(), Node::input(input));

    let mut latch2init = BTreeMap::new();
    latch2init.insert(latch.to_string(), init);

    Aig::new(
        std::iter::once(input.to_string()).collect(),
        node_map,
        latch_map,
        latch2init,
        Vec::new(),
    )
}
