use std::collections::BTreeSet;

use super::assign;
use crate::primitives::{and_gate, delay, identity};
use crate::{lazy, AigError, AigLike, FreshNames, PortKind, Unroll, Wiring};

#[test]
fn cutlatches_opens_state_ports() {
    let circ = lazy(delay("a", "l", true).unwrap());
    let (cut, ports) = circ.cutlatches(None).unwrap();

    let port = &ports["l"];
    assert_eq!(port.input, port.output);
    assert!(port.init);
    assert!(cut.latches().is_empty());
    assert!(cut.inputs().contains(&port.input));
    assert!(cut.outputs().contains(&port.output));

    // The old state flows out of the original output; the next state out of
    // the new port.
    let mut inputs = assign(&[("a", false)]);
    inputs.insert(port.input.clone(), true);
    let (outputs, _) = cut.evaluate(&inputs, None).unwrap();
    assert_eq!(outputs["a"], true);
    assert_eq!(outputs[&port.output], false);
}

#[test]
fn cutlatches_leaves_unselected_latches_alone() {
    let circ = delay("a", "l1", false).unwrap() | delay("b", "l2", true).unwrap();
    let subset = BTreeSet::from(["l1".to_string()]);
    let (cut, ports) = circ.cutlatches(Some(&subset)).unwrap();

    assert_eq!(ports.len(), 1);
    assert!(ports.contains_key("l1"));
    assert_eq!(cut.latches(), BTreeSet::from(["l2".to_string()]));

    let mut inputs = assign(&[("a", false), ("b", false)]);
    inputs.insert(ports["l1"].input.clone(), true);
    let (outputs, next) = cut.evaluate(&inputs, None).unwrap();
    assert_eq!(outputs["a"], true);
    assert_eq!(outputs["b"], true);
    assert_eq!(next, assign(&[("l2", false)]));
}

#[test]
fn cutlatches_rejects_unknown_latches() {
    let circ = lazy(delay("a", "l", false).unwrap());
    let subset = BTreeSet::from(["nope".to_string()]);
    assert_eq!(
        circ.cutlatches(Some(&subset)).err(),
        Some(AigError::UnknownName {
            kind: PortKind::Latch,
            name: "nope".to_string(),
        }),
    );
}

#[test]
fn cutlatches_accepts_a_custom_renamer() {
    let circ = lazy(delay("a", "l", false).unwrap());
    let (_, ports) = circ
        .cutlatches_with(None, |latch| format!("{latch}_port"))
        .unwrap();
    assert_eq!(ports["l"].input, "l_port");
}

#[test]
fn cutlatches_with_a_counter_renamer_is_deterministic() {
    let circ = delay("a", "l1", false).unwrap() | delay("b", "l2", false).unwrap();
    let mut names = FreshNames::new("state_");
    let (_, ports) = circ.cutlatches_with(None, |_| names.fresh()).unwrap();
    assert_eq!(ports["l1"].input, "state_0");
    assert_eq!(ports["l2"].input, "state_1");
}

#[test]
fn cut_port_names_must_not_shadow_remaining_latches() {
    let circ = delay("a", "l1", false).unwrap() | delay("b", "l2", false).unwrap();
    let subset = BTreeSet::from(["l1".to_string()]);
    let result = circ.cutlatches_with(Some(&subset), |_| "l2".to_string());
    assert_eq!(
        result.err(),
        Some(AigError::NameCollision {
            kind: PortKind::Latch,
            names: vec!["l2".to_string()],
        }),
    );
}

#[test]
fn cut_ports_may_reuse_the_cut_latch_name() {
    let circ = lazy(delay("a", "l", false).unwrap());
    let (cut, ports) = circ.cutlatches_with(None, |latch| latch.to_string()).unwrap();
    assert_eq!(ports["l"].input, "l");
    assert!(cut.latches().is_empty());
}

#[test]
fn default_cut_port_names_are_distinct() {
    let circ = delay("a", "l1", false).unwrap() | delay("b", "l2", false).unwrap();
    let (_, ports) = circ.cutlatches(None).unwrap();
    assert_ne!(ports["l1"].input, ports["l2"].input);
}

#[test]
fn loopback_installs_a_latch() {
    let circ = lazy(and_gate(["x", "y"], "z"))
        .loopback([Wiring::new("y", "z").init(true)])
        .unwrap();

    assert_eq!(circ.inputs(), &BTreeSet::from(["x".to_string()]));
    assert_eq!(circ.outputs(), BTreeSet::from(["z".to_string()]));
    assert_eq!(circ.latches(), BTreeSet::from(["y".to_string()]));

    let (outputs, next) = circ.evaluate(&assign(&[("x", true)]), None).unwrap();
    assert_eq!(outputs, assign(&[("z", true)]));
    assert_eq!(next, assign(&[("y", true)]));

    let state = assign(&[("y", false)]);
    let (outputs, next) = circ.evaluate(&assign(&[("x", true)]), Some(&state)).unwrap();
    assert_eq!(outputs, assign(&[("z", false)]));
    assert_eq!(next, assign(&[("y", false)]));
}

#[test]
fn loopback_can_consume_the_output() {
    let circ = lazy(and_gate(["x", "y"], "z"))
        .loopback([Wiring::new("y", "z").keep_output(false)])
        .unwrap();

    assert!(circ.outputs().is_empty());
    let (outputs, next) = circ.evaluate(&assign(&[("x", true)]), None).unwrap();
    assert!(outputs.is_empty());
    assert_eq!(next, assign(&[("y", false)]));
}

#[test]
fn loopback_then_cutlatches_restores_the_ports() {
    let circ = lazy(and_gate(["x", "y"], "z"))
        .loopback([Wiring::new("y", "z").latch("state").keep_output(false)])
        .unwrap();
    let subset = BTreeSet::from(["state".to_string()]);
    let (cut, ports) = circ.cutlatches(Some(&subset)).unwrap();

    let port = &ports["state"];
    assert_eq!(cut.inputs().len(), 2);
    assert!(cut.inputs().contains("x"));
    assert!(cut.inputs().contains(&port.input));
    assert_eq!(cut.outputs(), BTreeSet::from([port.output.clone()]));

    for (x, y) in [(false, true), (true, false), (true, true)] {
        let mut inputs = assign(&[("x", x)]);
        inputs.insert(port.input.clone(), y);
        let (outputs, _) = cut.evaluate(&inputs, None).unwrap();
        assert_eq!(outputs[&port.output], x && y);
    }
}

#[test]
fn loopback_rejects_unknown_ports() {
    let result = lazy(and_gate(["x", "y"], "z")).loopback([Wiring::new("nope", "z")]);
    assert_eq!(
        result.err(),
        Some(AigError::UnknownName {
            kind: PortKind::Input,
            name: "nope".to_string(),
        }),
    );

    let result = lazy(and_gate(["x", "y"], "z")).loopback([Wiring::new("y", "nope")]);
    assert_eq!(
        result.err(),
        Some(AigError::UnknownName {
            kind: PortKind::Output,
            name: "nope".to_string(),
        }),
    );
}

#[test]
fn unroll_names_ports_by_time_step() {
    let circ = lazy(and_gate(["x", "y"], "z"))
        .loopback([Wiring::new("x", "z")])
        .unwrap();
    let unrolled = circ.unroll(2).unwrap();

    assert_eq!(
        unrolled.inputs(),
        &BTreeSet::from(["y##time_0".to_string(), "y##time_1".to_string()]),
    );
    assert_eq!(
        unrolled.outputs(),
        BTreeSet::from(["z##time_1".to_string(), "z##time_2".to_string()]),
    );
    assert!(unrolled.latches().is_empty());
}

#[test]
fn unroll_can_keep_only_the_last_outputs() {
    let circ = lazy(and_gate(["x", "y"], "z"))
        .loopback([Wiring::new("x", "z")])
        .unwrap();
    let options = Unroll {
        only_last_outputs: true,
        ..Unroll::default()
    };
    let unrolled = circ.unroll_with(2, options).unwrap();

    assert_eq!(unrolled.outputs(), BTreeSet::from(["z##time_2".to_string()]));
}

#[test]
fn unroll_chains_state_across_time() {
    // z_t = x_t & z_{t-1}, with z_0 = true: a running conjunction of the xs.
    let circ = lazy(and_gate(["x", "y"], "z"))
        .loopback([Wiring::new("y", "z").init(true)])
        .unwrap();
    let unrolled = circ.unroll(2).unwrap();

    for (x0, x1) in [(false, false), (false, true), (true, false), (true, true)] {
        let inputs = assign(&[("x##time_0", x0), ("x##time_1", x1)]);
        let (outputs, _) = unrolled.evaluate(&inputs, None).unwrap();
        assert_eq!(outputs["z##time_1"], x0);
        assert_eq!(outputs["z##time_2"], x0 && x1);
    }
}

#[test]
fn unroll_without_init_leaves_the_initial_state_free() {
    let circ = lazy(and_gate(["x", "y"], "z"))
        .loopback([Wiring::new("y", "z").init(true)])
        .unwrap();
    let options = Unroll {
        init: false,
        ..Unroll::default()
    };
    let unrolled = circ.unroll_with(1, options).unwrap();

    let state_ports: Vec<String> = unrolled
        .inputs()
        .iter()
        .filter(|name| !name.starts_with("x##"))
        .cloned()
        .collect();
    assert_eq!(state_ports.len(), 1);

    for y0 in [false, true] {
        let mut inputs = assign(&[("x##time_0", true)]);
        inputs.insert(state_ports[0].clone(), y0);
        let (outputs, _) = unrolled.evaluate(&inputs, None).unwrap();
        assert_eq!(outputs["z##time_1"], y0);
    }
}

#[test]
fn unroll_can_expose_residual_state_ports() {
    let circ = lazy(and_gate(["x", "y"], "z"))
        .loopback([Wiring::new("y", "z")])
        .unwrap();
    let options = Unroll {
        omit_latches: false,
        ..Unroll::default()
    };
    let unrolled = circ.unroll_with(1, options).unwrap();

    // One extra output carries the state leaving the final step.
    assert_eq!(unrolled.outputs().len(), 2);
    assert!(unrolled.outputs().contains("z##time_1"));
}

#[test]
fn unroll_rejects_an_empty_horizon() {
    let circ = lazy(and_gate(["x", "y"], "z"));
    assert_eq!(circ.unroll(0).err(), Some(AigError::EmptyUnroll));
}

#[test]
fn unroll_handles_outputs_that_shadow_inputs() {
    // A delay buffer reads and writes the same port name.
    let unrolled = lazy(delay("a", "l", false).unwrap()).unroll(2).unwrap();

    assert_eq!(
        unrolled.inputs(),
        &BTreeSet::from(["a##time_0".to_string(), "a##time_1".to_string()]),
    );
    assert_eq!(
        unrolled.outputs(),
        BTreeSet::from(["a##time_1".to_string(), "a##time_2".to_string()]),
    );

    let inputs = assign(&[("a##time_0", true), ("a##time_1", false)]);
    let (outputs, _) = unrolled.evaluate(&inputs, None).unwrap();
    assert_eq!(outputs["a##time_1"], false);
    assert_eq!(outputs["a##time_2"], true);
}

#[test]
fn unroll_does_not_cross_wire_matching_port_names() {
    let unrolled = lazy(identity(["a"])).unroll(2).unwrap();

    let inputs = assign(&[("a##time_0", true), ("a##time_1", false)]);
    let (outputs, _) = unrolled.evaluate(&inputs, None).unwrap();
    assert_eq!(outputs["a##time_1"], true);
    assert_eq!(outputs["a##time_2"], false);
}
