use std::collections::{BTreeMap, BTreeSet};

use super::assign;
use crate::primitives::{and_gate, delay};
use crate::{Aig, AigError, AigLike, Node, PortKind};

#[test]
fn inputs_and_latches_must_be_disjoint() {
    let mut latch_map = BTreeMap::new();
    latch_map.insert("a".to_string(), Node::input("a"));
    let mut latch2init = BTreeMap::new();
    latch2init.insert("a".to_string(), false);

    let result = Aig::new(
        BTreeSet::from(["a".to_string()]),
        BTreeMap::new(),
        latch_map,
        latch2init,
        Vec::new(),
    );
    assert_eq!(
        result.err(),
        Some(AigError::NameCollision {
            kind: PortKind::Latch,
            names: vec!["a".to_string()],
        }),
    );
}

#[test]
fn latch_maps_must_be_keyed_identically() {
    let mut latch_map = BTreeMap::new();
    latch_map.insert("l".to_string(), Node::constant(false));

    let result = Aig::new(
        BTreeSet::new(),
        BTreeMap::new(),
        latch_map,
        BTreeMap::new(),
        Vec::new(),
    );
    assert_eq!(
        result.err(),
        Some(AigError::UnknownName {
            kind: PortKind::Latch,
            name: "l".to_string(),
        }),
    );
}

#[test]
fn evaluation_requires_every_input() {
    let gate = and_gate(["x", "y"], "z");
    let result = gate.evaluate(&assign(&[("x", true)]), None);
    assert_eq!(result.err(), Some(AigError::MissingInput("y".to_string())));
}

#[test]
fn delay_steps_its_state() {
    let circ = delay("a", "l", false).unwrap();

    let (outputs, next) = circ.evaluate(&assign(&[("a", true)]), None).unwrap();
    assert_eq!(outputs, assign(&[("a", false)]));
    assert_eq!(next, assign(&[("l", true)]));

    let state = assign(&[("l", true)]);
    let (outputs, next) = circ.evaluate(&assign(&[("a", false)]), Some(&state)).unwrap();
    assert_eq!(outputs, assign(&[("a", true)]));
    assert_eq!(next, assign(&[("l", false)]));
}

#[test]
fn latch_overrides_must_name_a_latch() {
    let circ = delay("a", "l", false).unwrap();
    let state = assign(&[("bogus", true)]);
    let result = circ.evaluate(&assign(&[("a", true)]), Some(&state));
    assert_eq!(
        result.err(),
        Some(AigError::UnknownName {
            kind: PortKind::Latch,
            name: "bogus".to_string(),
        }),
    );
}

#[test]
fn flattening_an_eager_graph_preserves_it() {
    let circ = delay("a", "l", true).unwrap();
    let flat = circ.flatten().unwrap();

    assert_eq!(flat.inputs(), circ.inputs());
    assert_eq!(flat.latch2init(), circ.latch2init());

    for a in [false, true] {
        for l in [false, true] {
            let state = assign(&[("l", l)]);
            let inputs = assign(&[("a", a)]);
            assert_eq!(
                flat.evaluate(&inputs, Some(&state)).unwrap(),
                circ.evaluate(&inputs, Some(&state)).unwrap(),
            );
        }
    }
}
